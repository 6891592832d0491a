//! # Test Support
//!
//! Runtime checks for renderer correctness, shared by unit, integration and
//! property tests.
//!
//! - **`invariants`**: asserts that rendered HTML contains no markup other
//!   than the converter's own tags and no unescaped special characters

pub mod invariants;

pub use invariants::check_html_safety;
