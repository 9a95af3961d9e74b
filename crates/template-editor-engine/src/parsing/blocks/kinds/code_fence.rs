use crate::models::FenceKind;

/// A line that opens a fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOpen {
    pub fence: FenceKind,
    pub len: usize,
    pub info: String,
}

/// Fenced code block syntax.
pub struct CodeFence;

impl CodeFence {
    pub const MIN_LEN: usize = 3;

    fn kind_of(c: char) -> Option<FenceKind> {
        match c {
            '`' => Some(FenceKind::Backticks),
            '~' => Some(FenceKind::Tildes),
            _ => None,
        }
    }

    /// Recognizes an opening fence; the info string is whatever follows it.
    ///
    /// Backtick fences cannot carry backticks in their info string.
    pub fn open(line: &str) -> Option<FenceOpen> {
        let t = line.trim_start();
        let fence = Self::kind_of(t.chars().next()?)?;
        let c = fence.as_char();
        let len = t.chars().take_while(|x| *x == c).count();
        if len < Self::MIN_LEN {
            return None;
        }
        let info = t[len..].trim();
        if fence == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        Some(FenceOpen {
            fence,
            len,
            info: info.to_string(),
        })
    }

    /// A closing fence is at least as long as the opener and carries nothing else.
    pub fn closes(fence: FenceKind, len: usize, line: &str) -> bool {
        let t = line.trim();
        let c = fence.as_char();
        let run = t.chars().take_while(|x| *x == c).count();
        run >= len && run == t.chars().count()
    }

    /// Longest run of fence characters that starts any line of `content`.
    pub fn longest_inner_run(fence: FenceKind, content: &str) -> usize {
        let c = fence.as_char();
        content
            .lines()
            .map(|l| l.trim_start().chars().take_while(|x| *x == c).count())
            .max()
            .unwrap_or(0)
    }
}
