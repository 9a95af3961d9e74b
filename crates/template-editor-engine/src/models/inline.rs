//! Inline runs and the character-level marks they carry.
//!
//! Offsets in this module are character offsets (Unicode scalar values),
//! never byte offsets. Every mutating helper leaves the run list normalized:
//! no empty runs and no two adjacent runs with the same mark set.

/// A character-level style attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Strikethrough,
    Underline,
    Bold,
    Italic,
    Code,
}

impl Mark {
    /// Canonical outer-to-inner order used when delimiters are emitted.
    pub const ALL: [Mark; 5] = [
        Mark::Strikethrough,
        Mark::Underline,
        Mark::Bold,
        Mark::Italic,
        Mark::Code,
    ];

    fn bit(self) -> u8 {
        match self {
            Mark::Strikethrough => 1,
            Mark::Underline => 1 << 1,
            Mark::Bold => 1 << 2,
            Mark::Italic => 1 << 3,
            Mark::Code => 1 << 4,
        }
    }
}

/// A set of marks, stored as a bit set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MarkSet(u8);

impl MarkSet {
    pub const EMPTY: MarkSet = MarkSet(0);

    #[must_use]
    pub fn with(self, mark: Mark) -> Self {
        Self(self.0 | mark.bit())
    }

    #[must_use]
    pub fn without(self, mark: Mark) -> Self {
        Self(self.0 & !mark.bit())
    }

    pub fn contains(self, mark: Mark) -> bool {
        self.0 & mark.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_subset(self, other: MarkSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Marks in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Mark> {
        Mark::ALL.into_iter().filter(move |m| self.contains(*m))
    }
}

impl FromIterator<Mark> for MarkSet {
    fn from_iter<I: IntoIterator<Item = Mark>>(iter: I) -> Self {
        iter.into_iter().fold(MarkSet::EMPTY, MarkSet::with)
    }
}

/// A maximal span of text sharing one mark set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InlineRun {
    pub text: String,
    pub marks: MarkSet,
}

impl InlineRun {
    pub fn new(text: impl Into<String>, marks: MarkSet) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, MarkSet::EMPTY)
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Concatenated text of all runs.
pub fn plain_text(runs: &[InlineRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

/// Total length in characters.
pub fn char_len(runs: &[InlineRun]) -> usize {
    runs.iter().map(InlineRun::char_len).sum()
}

/// Drops empty runs and merges neighbours that share a mark set.
pub fn normalize(runs: &mut Vec<InlineRun>) {
    let mut out: Vec<InlineRun> = Vec::with_capacity(runs.len());
    for run in runs.drain(..) {
        if run.text.is_empty() {
            continue;
        }
        match out.last_mut() {
            Some(prev) if prev.marks == run.marks => prev.text.push_str(&run.text),
            _ => out.push(run),
        }
    }
    *runs = out;
}

/// Converts a character offset into a byte index within `s`, clamped to its end.
pub(crate) fn byte_index(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map_or(s.len(), |(i, _)| i)
}

/// Finds the run containing `offset` as `(run index, offset within run)`.
///
/// An offset on a boundary resolves to the end of the left run, so the
/// cursor keeps the marks of the text it follows. Offset 0 resolves to the
/// start of the first run. Returns `None` for an empty run list or an offset
/// past the end.
pub fn locate(runs: &[InlineRun], offset: usize) -> Option<(usize, usize)> {
    if runs.is_empty() {
        return None;
    }
    if offset == 0 {
        return Some((0, 0));
    }
    let mut seen = 0;
    for (i, run) in runs.iter().enumerate() {
        let len = run.char_len();
        if offset <= seen + len {
            return Some((i, offset - seen));
        }
        seen += len;
    }
    None
}

/// Splits the run list at `offset`, returning everything after it.
pub fn split_off(runs: &mut Vec<InlineRun>, offset: usize) -> Vec<InlineRun> {
    let Some((idx, within)) = locate(runs, offset) else {
        return Vec::new();
    };
    let mut tail = runs.split_off(idx + 1);
    let run = &mut runs[idx];
    let at = byte_index(&run.text, within);
    let rest = run.text.split_off(at);
    tail.insert(0, InlineRun::new(rest, run.marks));
    normalize(runs);
    normalize(&mut tail);
    tail
}

/// Removes the characters in `start..end`.
pub fn delete(runs: &mut Vec<InlineRun>, start: usize, end: usize) {
    if start >= end {
        return;
    }
    let mut tail = split_off(runs, start);
    let rest = split_off(&mut tail, end - start);
    runs.extend(rest);
    normalize(runs);
}

/// Inserts `text` at `offset`, inheriting the marks of the run it lands in.
pub fn insert(runs: &mut Vec<InlineRun>, offset: usize, text: &str) {
    if text.is_empty() {
        return;
    }
    match locate(runs, offset) {
        Some((idx, within)) => {
            let run = &mut runs[idx];
            let at = byte_index(&run.text, within);
            run.text.insert_str(at, text);
        }
        None => runs.push(InlineRun::plain(text)),
    }
    normalize(runs);
}

/// Appends `other` after `runs`, merging at the seam.
pub fn append(runs: &mut Vec<InlineRun>, other: Vec<InlineRun>) {
    runs.extend(other);
    normalize(runs);
}

/// Collapses all runs into one unmarked run.
pub fn strip_marks(runs: &mut Vec<InlineRun>) {
    let text = plain_text(runs);
    runs.clear();
    if !text.is_empty() {
        runs.push(InlineRun::plain(text));
    }
}
