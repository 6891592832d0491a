//! Renders author-written blog post bodies into safe HTML fragments.
//!
//! The markup is a small line-oriented dialect: paragraphs, `#`/`##` headers
//! (one output level), `- ` lists, 4-space indented code blocks, and
//! `**bold**` / `` `code` `` inline spans. All author text is HTML-escaped
//! before any tag is placed around it.
//!
//! Every function here is total and stateless: any string renders, and
//! concurrent callers need no coordination.

pub mod excerpt;
pub mod html;
pub mod parsing;
pub mod post;
pub mod slug;

// Re-export key types for easier usage
pub use excerpt::{DEFAULT_EXCERPT_LENGTH, excerpt};
pub use html::escape_html;
pub use parsing::{
    Document, blocks::BlockNode, inline::format_inline, parse_document, render_html,
};
pub use post::{RenderedPost, render_post};
pub use slug::slugify;
