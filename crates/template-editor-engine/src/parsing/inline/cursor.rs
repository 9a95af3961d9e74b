/// A cursor over inline text.
///
/// Indices are byte offsets; every movement lands on a character boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    pub s: &'a str,
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.rest().as_bytes().starts_with(pat)
    }

    /// Length of the run of `b` bytes starting at the cursor.
    pub fn run_len(&self, b: u8) -> usize {
        self.rest().bytes().take_while(|x| *x == b).count()
    }

    /// Advances past one character, returning it.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes. Callers only skip ASCII delimiters.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
