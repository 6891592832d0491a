//! URL slugs derived from post titles.

use std::sync::LazyLock;

use regex::Regex;

/// Longest slug produced, in bytes. Slugs are ASCII so bytes are chars.
pub const MAX_SLUG_LEN: usize = 50;

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9-]").expect("static slug pattern is valid")
});

static HYPHEN_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("static slug pattern is valid"));

/// Builds a lowercase, hyphen-separated ASCII slug from a title.
///
/// Spaces become hyphens, everything outside `[a-z0-9-]` is dropped, hyphen
/// runs collapse to one, and the result is trimmed of hyphens and cut to
/// [`MAX_SLUG_LEN`]. A title with no usable characters gives an empty slug.
///
/// ```
/// use blogmark_engine::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase().replace(' ', "-");
    let cleaned = DISALLOWED.replace_all(&lowered, "");
    let collapsed = HYPHEN_RUNS.replace_all(&cleaned, "-");

    let mut slug = collapsed.trim_matches('-');
    if slug.len() > MAX_SLUG_LEN {
        slug = slug[..MAX_SLUG_LEN].trim_end_matches('-');
    }
    slug.to_string()
}
