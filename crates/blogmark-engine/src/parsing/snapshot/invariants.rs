/// Tags the renderer emits. Nothing else may appear as markup in its output.
const STRUCTURAL_TAGS: [&str; 7] = ["p", "h2", "ul", "li", "pre", "code", "strong"];

const ENTITIES: [&str; 4] = ["&amp;", "&lt;", "&gt;", "&quot;"];

/// Validates rendered HTML against the escaping contract.
///
/// Asserts that:
/// - After removing the renderer's structural tags, no `<`, `>` or `"` remains
/// - Every remaining `&` begins one of the four entities the escaper emits
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check_html_safety(html: &str) {
    let mut text = html.to_string();
    for tag in STRUCTURAL_TAGS {
        text = text
            .replace(&format!("<{tag}>"), "")
            .replace(&format!("</{tag}>"), "");
    }

    for special in ['<', '>', '"'] {
        assert!(
            !text.contains(special),
            "unescaped {special:?} in rendered output: {html:?}"
        );
    }

    for (idx, _) in text.match_indices('&') {
        let rest = &text[idx..];
        assert!(
            ENTITIES.iter().any(|e| rest.starts_with(e)),
            "bare '&' at byte {idx} in rendered output: {html:?}"
        );
    }
}
