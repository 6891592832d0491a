//! Plain-text summaries for list and index views.

/// Length used for post summaries on listing pages.
pub const DEFAULT_EXCERPT_LENGTH: usize = 200;

/// Appended whenever the content had to be cut.
pub const ELLIPSIS: &str = "...";

/// Truncates `content` to at most `max_len` chars at a word boundary.
///
/// Leading and trailing whitespace is trimmed first; content that then fits
/// is returned unchanged. Otherwise the first `max_len` chars are kept, the
/// partial trailing word is dropped if a space exists after the first char,
/// and [`ELLIPSIS`] is appended.
///
/// The result is plain text, not HTML-escaped.
///
/// ```
/// use blogmark_engine::excerpt;
///
/// assert_eq!(excerpt("The quick brown fox jumps", 10), "The quick...");
/// assert_eq!(excerpt("short", 10), "short");
/// ```
pub fn excerpt(content: &str, max_len: usize) -> String {
    let trimmed = content.trim();

    // Byte index of the first char past the limit, if there is one.
    let Some((cut, _)) = trimmed.char_indices().nth(max_len) else {
        return trimmed.to_string();
    };

    let mut head = &trimmed[..cut];
    if let Some(space) = head.rfind(' ')
        && space > 0
    {
        head = &head[..space];
    }

    let mut out = String::with_capacity(head.len() + ELLIPSIS.len());
    out.push_str(head);
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("The quick brown fox jumps", 10, "The quick...")]
    #[case("short", 10, "short")]
    #[case("exactly10!", 10, "exactly10!")]
    #[case("   padded   ", 6, "padded")]
    #[case("Supercalifragilistic", 5, "Super...")]
    #[case(" leading space is trimmed first", 8, "leading...")]
    #[case("", 10, "")]
    #[case("anything", 0, "...")]
    fn truncation(#[case] content: &str, #[case] max_len: usize, #[case] expected: &str) {
        assert_eq!(excerpt(content, max_len), expected);
    }

    #[test]
    fn cut_right_after_a_word_keeps_it() {
        // The 10th char is the space itself, so the slice ends on "quick ".
        assert_eq!(excerpt("The quick brown", 10), "The quick...");
    }

    #[test]
    fn long_first_word_is_hard_cut() {
        assert_eq!(excerpt("abcdef ghi", 4), "abcd...");
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(excerpt("héllo wörld again", 12), "héllo wörld...");
        assert_eq!(excerpt("日本語のテキスト", 3), "日本語...");
    }

    #[test]
    fn markup_is_not_escaped() {
        assert_eq!(excerpt("<b>bold</b> & more text", 11), "<b>bold</b>...");
    }

    #[test]
    fn default_length_leaves_short_posts_alone() {
        let body = "A short post.";
        assert_eq!(excerpt(body, DEFAULT_EXCERPT_LENGTH), body);
    }
}
