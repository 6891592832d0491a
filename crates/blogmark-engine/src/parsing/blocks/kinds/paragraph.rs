/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default leaf block when no
/// other block opener matches. Buffered lines are joined with a single space,
/// so soft-wrapped source lines render as one flowing paragraph.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_JOIN: &'static str = " ";

    /// Joins buffered lines into the paragraph's single text segment.
    ///
    /// Returns `None` for an empty buffer; such paragraphs produce no node.
    pub fn join(lines: &[String]) -> Option<String> {
        if lines.is_empty() {
            None
        } else {
            Some(lines.join(Self::LINE_JOIN))
        }
    }
}
