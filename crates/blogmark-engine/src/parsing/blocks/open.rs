use super::kinds::{Header, ListItem};

/// A block opener detected on a trimmed, non-code line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen<'a> {
    Header { text: &'a str },
    ListItem { text: &'a str },
}

pub fn try_open_leaf(trimmed: &str) -> Option<BlockOpen<'_>> {
    // Precedence: header beats list item.
    if let Some(text) = Header::strip_prefix(trimmed) {
        return Some(BlockOpen::Header { text });
    }
    if let Some(text) = ListItem::strip_marker(trimmed) {
        return Some(BlockOpen::ListItem { text });
    }
    None
}
