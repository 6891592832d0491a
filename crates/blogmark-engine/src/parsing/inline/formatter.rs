use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Delimited, Strong},
};

/// Rewrites delimiter pairs in one escaped text segment into inline tags.
///
/// Runs the bold pass to completion, then the code pass over its output.
/// Because the passes are independent, a backtick pair may enclose a
/// `<strong>` produced by the first pass; neither pass ever nests.
///
/// `text` must already be HTML-escaped: markers and tags are the only
/// structure this function adds.
pub fn format_inline(text: &str) -> String {
    let bold = pair_delimiters::<Strong>(text);
    pair_delimiters::<CodeSpan>(&bold)
}

/// Replaces each complete, non-overlapping `K::MARKER` pair, left to right.
///
/// Replacement tags never contain the marker, so resuming after the last
/// closing marker finds the same pairs as rescanning the mutated string
/// from the start.
fn pair_delimiters<K: Delimited>(s: &str) -> String {
    let marker = K::MARKER.len();
    let mut cur = Cursor::new(s);
    let mut out = String::with_capacity(s.len());
    let mut copied = 0;

    while let Some(open) = cur.seek(K::MARKER) {
        cur.bump_n(marker);
        let Some(close) = cur.seek(K::MARKER) else {
            // Lone marker, left as literal text.
            break;
        };
        cur.bump_n(marker);

        out.push_str(&s[copied..open]);
        out.push_str(K::OPEN_TAG);
        out.push_str(&s[open + marker..close]);
        out.push_str(K::CLOSE_TAG);
        copied = close + marker;
    }

    out.push_str(&s[copied..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("plain text", "plain text")]
    #[case("", "")]
    #[case("**bold**", "<strong>bold</strong>")]
    #[case("a **b** c **d** e", "a <strong>b</strong> c <strong>d</strong> e")]
    #[case("a ** b", "a ** b")]
    #[case("**a** and **b", "<strong>a</strong> and **b")]
    #[case("****", "<strong></strong>")]
    #[case("***", "***")]
    #[case("**  **", "<strong>  </strong>")]
    fn bold_pairs(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_inline(input), expected);
    }

    #[rstest]
    #[case("`code`", "<code>code</code>")]
    #[case("use `a` or `b`", "use <code>a</code> or <code>b</code>")]
    #[case("lone ` tick", "lone ` tick")]
    #[case("``", "<code></code>")]
    #[case("`a` `b` `c", "<code>a</code> <code>b</code> `c")]
    fn code_pairs(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_inline(input), expected);
    }

    #[test]
    fn bold_runs_before_code() {
        assert_eq!(
            format_inline("`**x**`"),
            "<code><strong>x</strong></code>"
        );
    }

    #[test]
    fn passes_cross_without_nesting_logic() {
        assert_eq!(
            format_inline("**a `b** c`"),
            "<strong>a <code>b</strong> c</code>"
        );
    }

    #[test]
    fn escaped_entities_are_untouched() {
        assert_eq!(
            format_inline("&lt;b&gt; **&amp;**"),
            "&lt;b&gt; <strong>&amp;</strong>"
        );
    }

    #[test]
    fn multibyte_content_is_preserved() {
        assert_eq!(format_inline("**ünïcødé**"), "<strong>ünïcødé</strong>");
    }
}
