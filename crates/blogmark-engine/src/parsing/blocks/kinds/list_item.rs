/// Unordered list item type (marker struct).
///
/// Lists are flat: there is no nesting and no ordered form.
pub struct ListItem;

impl ListItem {
    pub const MARKER: &'static str = "- ";

    /// Returns the item text if `trimmed` starts with the list marker.
    pub fn strip_marker(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_space_is_an_item() {
        assert_eq!(ListItem::strip_marker("- milk"), Some("milk"));
    }

    #[test]
    fn dash_without_space_is_text() {
        assert_eq!(ListItem::strip_marker("-5 degrees"), None);
    }

    #[test]
    fn asterisk_is_not_a_marker() {
        assert_eq!(ListItem::strip_marker("* milk"), None);
    }
}
