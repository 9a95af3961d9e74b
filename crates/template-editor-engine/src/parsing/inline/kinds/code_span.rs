/// Code span inline type. Code spans are raw zones.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';

    /// Shortest backtick fence that no run of backticks inside `text` matches.
    pub fn fence_len(text: &str) -> usize {
        let runs: Vec<usize> = text
            .split(|c| c != Self::TICK as char)
            .map(str::len)
            .filter(|n| *n > 0)
            .collect();
        (1..).find(|n| !runs.contains(n)).unwrap_or(1)
    }

    /// Whether one space must pad each side so the content survives a re-parse.
    pub fn needs_padding(text: &str) -> bool {
        let tick = Self::TICK as char;
        text.starts_with(tick)
            || text.ends_with(tick)
            || (text.len() > 1
                && text.starts_with(' ')
                && text.ends_with(' ')
                && !text.trim().is_empty())
    }

    /// Strips one space from each side when both are present and the content
    /// is not all spaces.
    pub fn strip_padding(inner: &str) -> &str {
        if inner.len() > 1
            && inner.starts_with(' ')
            && inner.ends_with(' ')
            && !inner.trim().is_empty()
        {
            &inner[1..inner.len() - 1]
        } else {
            inner
        }
    }
}
