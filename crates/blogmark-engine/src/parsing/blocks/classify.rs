use super::kinds::IndentedCode;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// The line with leading and trailing whitespace removed.
    pub trimmed: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Content after the code indent, if the raw line carries one.
    pub code: Option<&'a str>,
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line (newline already stripped) into a [`LineClass`].
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();
        LineClass {
            trimmed,
            is_blank: trimmed.is_empty(),
            code: IndentedCode::strip_indent(line),
        }
    }
}
