//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and output tags.
//!
//! ## Types
//!
//! - **`Strong`**: `**` pairs, rendered as `<strong>`
//! - **`CodeSpan`**: `` ` `` pairs, rendered as `<code>`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in formatter code.
//! The formatter is generic over [`Delimited`]; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod strong;

pub use code_span::CodeSpan;
pub use strong::Strong;

/// A marker pair that wraps its content in a tag pair.
///
/// Tags must not contain the marker of any kind, so that replaced output
/// never pairs again in a later scan.
pub trait Delimited {
    const MARKER: &'static str;
    const OPEN_TAG: &'static str;
    const CLOSE_TAG: &'static str;
}
