//! # Inline Formatting
//!
//! Delimiter pairing over one block's already-escaped text segment.
//!
//! ## Architecture
//!
//! Inline formatting is separate from block parsing and runs once per
//! paragraph, header or list item, never across block boundaries and never
//! on code block content.
//!
//! Each delimiter kind is paired in its own pass, bold first, then code:
//! - Pairs are matched strictly left to right, without nesting or overlap
//! - An unmatched trailing marker stays literal text
//!
//! ## Modules
//!
//! - **`kinds`**: Inline types with owned delimiters (Strong, CodeSpan)
//! - **`cursor`**: `Cursor` for left-to-right scanning
//! - **`formatter`**: `format_inline()` main entry point

pub mod cursor;
pub mod formatter;
pub mod kinds;

pub use formatter::format_inline;
