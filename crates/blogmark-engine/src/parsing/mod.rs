pub mod blocks;
pub mod inline;
pub mod snapshot;

use blocks::{BlockBuilder, BlockNode, LineClassifier};

use crate::html::render_blocks;

/// An ordered sequence of blocks, built once per render call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<BlockNode>,
}

impl Document {
    /// Renders the document to a safe HTML fragment.
    pub fn to_html(&self) -> String {
        render_blocks(&self.blocks)
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Parses a post body into blocks. Never fails; empty input gives an empty document.
pub fn parse_document(content: &str) -> Document {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    let mut line_count = 0usize;
    for line in content.lines() {
        let lc = classifier.classify(line);
        builder.push(&lc);
        line_count += 1;
    }

    let blocks = builder.finish();
    log::trace!("parsed {} blocks from {line_count} lines", blocks.len());
    Document { blocks }
}

/// Convenience: parse and render in one call.
pub fn render_html(content: &str) -> String {
    parse_document(content).to_html()
}
