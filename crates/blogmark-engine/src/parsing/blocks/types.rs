/// A parsed block node holding the raw (unescaped) text it renders from.
///
/// Text is escaped and inline-formatted only at render time, so the node
/// keeps exactly what the author wrote minus block syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockNode {
    /// Consecutive plain lines joined with single spaces.
    Paragraph { text: String },
    /// A `# ` or `## ` line. Both forms render at the same level.
    Header { text: String },
    /// Indented lines with the indent stripped once. Never inline-formatted.
    CodeBlock { lines: Vec<String> },
    /// Consecutive `- ` items, marker removed.
    List { items: Vec<String> },
}

impl BlockNode {
    /// Short kind name, used in log output.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            BlockNode::Paragraph { .. } => "paragraph",
            BlockNode::Header { .. } => "header",
            BlockNode::CodeBlock { .. } => "code_block",
            BlockNode::List { .. } => "list",
        }
    }
}
