use super::Delimited;

/// Bold inline type, `**text**`.
pub struct Strong;

impl Delimited for Strong {
    const MARKER: &'static str = "**";
    const OPEN_TAG: &'static str = "<strong>";
    const CLOSE_TAG: &'static str = "</strong>";
}
