use super::document::{BlockId, Document};
use super::inline;

/// A cursor location: a text block and a character offset into its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub block: BlockId,
    pub offset: usize,
}

impl Position {
    pub fn new(block: BlockId, offset: usize) -> Self {
        Self { block, offset }
    }

    /// Resolves the run this position falls in, as `(run index, offset in run)`.
    ///
    /// `None` when the block has no text or the position is stale.
    pub fn inline_path(&self, doc: &Document) -> Option<(usize, usize)> {
        let runs = doc.runs(self.block).ok()?;
        inline::locate(runs, self.offset)
    }
}

/// A start/end pair of positions. Collapsed when both are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
}

impl Selection {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn collapsed(at: Position) -> Self {
        Self { start: at, end: at }
    }

    pub fn caret(block: BlockId, offset: usize) -> Self {
        Self::collapsed(Position::new(block, offset))
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}
