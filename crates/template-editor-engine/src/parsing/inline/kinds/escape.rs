/// Backslash escapes.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    /// Any ASCII punctuation character can be escaped.
    pub fn escapable(c: char) -> bool {
        c.is_ascii_punctuation()
    }
}
