use super::{
    classify::LineClass,
    kinds::Paragraph,
    open::{BlockOpen, try_open_leaf},
    types::BlockNode,
};

/// The single open leaf. Every opener closes whatever else is open, so a
/// paragraph, a list and a code block are never open at the same time.
#[derive(Debug, Default)]
enum LeafState {
    #[default]
    None,
    Paragraph {
        lines: Vec<String>,
    },
    List {
        items: Vec<String>,
    },
    Code {
        lines: Vec<String>,
    },
}

pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        // Code state is checked before anything else, blank lines included.
        if let Some(code) = c.code {
            self.extend_code(code);
            return;
        }
        if self.in_code() {
            self.close_leaf();
        }

        if c.is_blank {
            self.close_leaf();
            return;
        }

        match try_open_leaf(c.trimmed) {
            Some(BlockOpen::Header { text }) => {
                self.close_leaf();
                self.out.push(BlockNode::Header {
                    text: text.to_string(),
                });
            }
            Some(BlockOpen::ListItem { text }) => self.extend_list(text),
            None => self.extend_paragraph(c.trimmed),
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush: unterminated code blocks and lists are emitted as-is.
        self.close_leaf();
        self.out
    }

    fn in_code(&self) -> bool {
        matches!(self.leaf, LeafState::Code { .. })
    }

    fn extend_code(&mut self, code: &str) {
        if let LeafState::Code { lines } = &mut self.leaf {
            lines.push(code.to_string());
            return;
        }
        self.close_leaf();
        self.leaf = LeafState::Code {
            lines: vec![code.to_string()],
        };
    }

    fn extend_list(&mut self, item: &str) {
        if let LeafState::List { items } = &mut self.leaf {
            items.push(item.to_string());
            return;
        }
        self.close_leaf();
        self.leaf = LeafState::List {
            items: vec![item.to_string()],
        };
    }

    fn extend_paragraph(&mut self, line: &str) {
        if let LeafState::Paragraph { lines } = &mut self.leaf {
            lines.push(line.to_string());
            return;
        }
        self.close_leaf();
        self.leaf = LeafState::Paragraph {
            lines: vec![line.to_string()],
        };
    }

    fn close_leaf(&mut self) {
        match std::mem::take(&mut self.leaf) {
            LeafState::None => {}
            LeafState::Paragraph { lines } => {
                if let Some(text) = Paragraph::join(&lines) {
                    self.out.push(BlockNode::Paragraph { text });
                }
            }
            LeafState::List { items } => self.out.push(BlockNode::List { items }),
            LeafState::Code { lines } => self.out.push(BlockNode::CodeBlock { lines }),
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::LineClassifier;
    use pretty_assertions::assert_eq;

    fn build(lines: &[&str]) -> Vec<BlockNode> {
        let mut builder = BlockBuilder::new();
        for line in lines {
            builder.push(&LineClassifier.classify(line));
        }
        builder.finish()
    }

    fn para(text: &str) -> BlockNode {
        BlockNode::Paragraph {
            text: text.to_string(),
        }
    }

    fn list(items: &[&str]) -> BlockNode {
        BlockNode::List {
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn no_lines_no_blocks() {
        assert_eq!(build(&[]), vec![]);
    }

    #[test]
    fn paragraph_lines_are_joined() {
        assert_eq!(build(&["one", "  two  ", "three"]), vec![para("one two three")]);
    }

    #[test]
    fn blank_line_splits_paragraphs() {
        assert_eq!(build(&["one", "", "two"]), vec![para("one"), para("two")]);
    }

    #[test]
    fn header_flushes_paragraph() {
        assert_eq!(
            build(&["intro", "# Title", "body"]),
            vec![
                para("intro"),
                BlockNode::Header {
                    text: "Title".to_string()
                },
                para("body"),
            ]
        );
    }

    #[test]
    fn list_item_flushes_paragraph() {
        assert_eq!(
            build(&["intro", "- a", "- b"]),
            vec![para("intro"), list(&["a", "b"])]
        );
    }

    #[test]
    fn text_line_closes_list() {
        assert_eq!(
            build(&["- a", "not an item", "- b"]),
            vec![list(&["a"]), para("not an item"), list(&["b"])]
        );
    }

    #[test]
    fn header_closes_list() {
        assert_eq!(
            build(&["- a", "## Next"]),
            vec![
                list(&["a"]),
                BlockNode::Header {
                    text: "Next".to_string()
                }
            ]
        );
    }

    #[test]
    fn indented_line_interrupts_paragraph() {
        assert_eq!(
            build(&["hello", "    world"]),
            vec![
                para("hello"),
                BlockNode::CodeBlock {
                    lines: vec!["world".to_string()]
                }
            ]
        );
    }

    #[test]
    fn code_block_ends_at_unindented_line_which_is_reparsed() {
        assert_eq!(
            build(&["    a", "    b", "- item"]),
            vec![
                BlockNode::CodeBlock {
                    lines: vec!["a".to_string(), "b".to_string()]
                },
                list(&["item"]),
            ]
        );
    }

    #[test]
    fn code_lines_are_not_interpreted() {
        assert_eq!(
            build(&["    # not a header", "    - not an item"]),
            vec![BlockNode::CodeBlock {
                lines: vec!["# not a header".to_string(), "- not an item".to_string()]
            }]
        );
    }

    #[test]
    fn blank_line_ends_code_block() {
        assert_eq!(
            build(&["    a", "", "    b"]),
            vec![
                BlockNode::CodeBlock {
                    lines: vec!["a".to_string()]
                },
                BlockNode::CodeBlock {
                    lines: vec!["b".to_string()]
                },
            ]
        );
    }

    #[test]
    fn unterminated_list_is_emitted() {
        assert_eq!(build(&["- only"]), vec![list(&["only"])]);
    }
}
