/// Header block type.
///
/// Both prefixes produce the same single-level header. The longer prefix is
/// listed first so `## x` never matches as `# ` followed by `# x`.
pub struct Header;

impl Header {
    pub const PREFIXES: [&'static str; 2] = ["## ", "# "];

    /// Returns the header text if `trimmed` starts with a header prefix.
    pub fn strip_prefix(trimmed: &str) -> Option<&str> {
        Self::PREFIXES
            .iter()
            .find_map(|prefix| trimmed.strip_prefix(prefix))
    }
}
