//! The boundary call used by the web layer for a stored post body.

use crate::{excerpt::excerpt, parsing::parse_document};

/// Rendered form of one post body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPost {
    /// Safe HTML fragment, embeddable without further sanitizing.
    pub html: String,
    /// Plain-text summary of the raw body. Escape it where it is embedded.
    pub excerpt: String,
}

/// Renders a post body and computes its excerpt from the raw content.
pub fn render_post(content: &str, excerpt_len: usize) -> RenderedPost {
    let doc = parse_document(content);
    log::debug!(
        "rendering post: {} bytes, {} blocks",
        content.len(),
        doc.blocks.len()
    );
    for block in &doc.blocks {
        log::trace!("block: {}", block.kind_name());
    }

    RenderedPost {
        html: doc.to_html(),
        excerpt: excerpt(content, excerpt_len),
    }
}
