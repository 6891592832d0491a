//! HTML rendering for parsed blocks.
//!
//! The converter is the only source of tags in its output: every piece of
//! author text passes through [`escape_html`] before a tag is wrapped around
//! it, and inline formatting runs on the escaped segment of a single block.

use std::borrow::Cow;

use crate::parsing::{blocks::BlockNode, inline::format_inline};

/// Escapes `&`, `<`, `>` and `"` as HTML entities.
///
/// Single quotes are left alone; output is only ever placed in element
/// content, never in single-quoted attributes.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}

/// Renders blocks in document order, each followed by a newline.
pub fn render_blocks(blocks: &[BlockNode]) -> String {
    let mut out = String::new();
    for block in blocks {
        render_block(&mut out, block);
        out.push('\n');
    }
    out
}

fn render_block(out: &mut String, block: &BlockNode) {
    match block {
        BlockNode::Paragraph { text } => push_formatted(out, "p", text),
        BlockNode::Header { text } => push_formatted(out, "h2", text),
        BlockNode::List { items } => {
            out.push_str("<ul>");
            for item in items {
                push_formatted(out, "li", item);
            }
            out.push_str("</ul>");
        }
        BlockNode::CodeBlock { lines } => {
            out.push_str("<pre><code>");
            for line in lines {
                out.push_str(&escape_html(line));
                out.push('\n');
            }
            out.push_str("</code></pre>");
        }
    }
}

/// Escapes, inline-formats, then wraps one text segment in `tag`.
fn push_formatted(out: &mut String, tag: &str, raw: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(&format_inline(&escape_html(raw)));
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
