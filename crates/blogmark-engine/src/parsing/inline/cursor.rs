/// A cursor for left-to-right delimiter scanning over a string slice.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`. Always on a char boundary.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.s[self.i..].starts_with(pat)
    }

    /// Advances by `n` bytes. Callers only skip whole ASCII markers.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.s.len());
    }

    /// Moves to the next occurrence of `pat` at or after the current index.
    ///
    /// Returns its byte index, or `None` (cursor unchanged) if there is none.
    pub fn seek(&mut self, pat: &str) -> Option<usize> {
        let offset = self.s[self.i..].find(pat)?;
        self.i += offset;
        Some(self.i)
    }
}
