/// Block quote syntax.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    /// Strips every leading quote prefix, returning `(depth, byte offset)`.
    ///
    /// Accepts `> text`, `>> nested` and `> > spaced nested`. Leading spaces
    /// are only consumed when a `>` follows them, so an unquoted line keeps
    /// its indentation.
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0u8;

        loop {
            let mut j = i;
            while j < b.len() && b[j] == b' ' {
                j += 1;
            }
            if j < b.len() && b[j] == (Self::PREFIX as u8) {
                depth = depth.saturating_add(1);
                i = j + 1;
                if i < b.len() && b[i] == b' ' {
                    i += 1;
                }
            } else {
                break;
            }
        }
        (depth, i)
    }

    /// Strips exactly `depth` prefixes; `None` when the line has fewer.
    pub fn strip_depth(s: &str, depth: u8) -> Option<usize> {
        let b = s.as_bytes();
        let mut i = 0usize;
        for _ in 0..depth {
            let mut j = i;
            while j < b.len() && b[j] == b' ' {
                j += 1;
            }
            if j >= b.len() || b[j] != (Self::PREFIX as u8) {
                return None;
            }
            i = j + 1;
            if i < b.len() && b[i] == b' ' {
                i += 1;
            }
        }
        Some(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefixes("hello"), (0, 0));
    }

    #[test]
    fn strip_keeps_indent_of_unquoted_line() {
        assert_eq!(BlockQuote::strip_prefixes("  - nested"), (0, 0));
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefixes("> hello"), (1, 2));
    }

    #[test]
    fn strip_double_quote() {
        assert_eq!(BlockQuote::strip_prefixes("> > hello"), (2, 4));
        assert_eq!(BlockQuote::strip_prefixes(">> hello"), (2, 3));
    }

    #[test]
    fn strip_bare_marker() {
        assert_eq!(BlockQuote::strip_prefixes(">"), (1, 1));
    }

    #[test]
    fn strip_depth_exact() {
        assert_eq!(BlockQuote::strip_depth("> > code", 1), Some(2));
        assert_eq!(BlockQuote::strip_depth("> code", 2), None);
        assert_eq!(BlockQuote::strip_depth("> code", 0), Some(0));
    }
}
