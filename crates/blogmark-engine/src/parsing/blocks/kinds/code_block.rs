/// Indented code block type with owned indent constant.
///
/// A line opens or continues a code block when its raw (untrimmed) text
/// begins with four spaces. The indent is stripped once; anything after it,
/// further indentation included, is code content.
pub struct IndentedCode;

impl IndentedCode {
    /// The mandatory indent in front of every code line.
    pub const INDENT: &'static str = "    ";

    /// Returns the code content of `raw` if it carries the indent.
    pub fn strip_indent(raw: &str) -> Option<&str> {
        raw.strip_prefix(Self::INDENT)
    }
}
