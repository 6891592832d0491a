//! # Block Parsing
//!
//! Two-phase, single-pass block parsing over the lines of a post body.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (trimmed text, blank status, code indent)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` keeps at most one open
//!    leaf (paragraph, list or code block) and emits `BlockNode`s as leaves close
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode`
//! - **`kinds`**: Block-specific types with owned syntax (IndentedCode, Header, ListItem, Paragraph)
//! - **`classify`**: `LineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open_leaf` dispatch for header and list openers
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Code blocks are raw zones: no block or inline interpretation inside
//! - A non-item line closes an open list; it never extends it
//! - Document order is preserved exactly

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};
pub use types::BlockNode;
