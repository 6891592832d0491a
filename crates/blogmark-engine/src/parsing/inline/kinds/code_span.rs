use super::Delimited;

/// Code span inline type with owned delimiter constant.
///
/// Per the knowledge ownership principle, the backtick lives here and
/// nowhere in the formatter.
pub struct CodeSpan;

impl Delimited for CodeSpan {
    const MARKER: &'static str = "`";
    const OPEN_TAG: &'static str = "<code>";
    const CLOSE_TAG: &'static str = "</code>";
}
