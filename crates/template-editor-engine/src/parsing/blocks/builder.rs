use log::{trace, warn};

use crate::models::{BlockId, BlockKind, Document, InlineRun, ListMarker, ModelResult};
use crate::parsing::inline::parse_inline;

use super::{
    classify::LineClass,
    kinds::{BlockQuote, CodeFence, FenceOpen},
    open::BlockOpen,
};

/// One open unordered list and the item that nested lines attach to.
#[derive(Debug, Clone, Copy)]
struct ListFrame {
    indent: usize,
    marker: ListMarker,
    list: BlockId,
    item: BlockId,
}

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph {
        lines: Vec<String>,
    },
    /// The item block already exists; its text is filled in on flush.
    Item {
        item: BlockId,
        lines: Vec<String>,
    },
    Fence {
        open: FenceOpen,
        depth: u8,
        lines: Vec<String>,
    },
}

/// Turns classified lines into a [`Document`].
pub struct BlockBuilder {
    doc: Document,
    quotes: Vec<BlockId>,
    lists: Vec<ListFrame>,
    leaf: LeafState,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            doc: Document::new(),
            quotes: Vec::new(),
            lists: Vec::new(),
            leaf: LeafState::None,
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if let Err(err) = self.try_push(c) {
            warn!(
                "line {} (bytes {}..{}): {err}; line dropped",
                c.number + 1,
                c.line.start,
                c.line.end
            );
        }
    }

    pub fn finish(mut self) -> Document {
        // EOF flush; an open fence is emitted unterminated
        if let Err(err) = self.flush_leaf() {
            warn!("final block dropped: {err}");
        }
        self.doc
    }

    fn try_push(&mut self, c: &LineClass) -> ModelResult<()> {
        if self.consume_fence_line(c)? {
            return Ok(());
        }
        self.set_quote_depth(c.quote_depth)?;

        if c.is_blank {
            self.flush_leaf()?;
            self.lists.clear();
            return Ok(());
        }

        match &c.open {
            Some(BlockOpen::ListItem { marker, text }) => self.open_item(c.indent, *marker, text),
            _ if !self.lists.is_empty() && c.indent > 0 => self.continue_item(&c.remainder),
            Some(open) => {
                self.flush_leaf()?;
                self.lists.clear();
                self.open_leaf(open.clone(), c.quote_depth)
            }
            None => {
                if !self.lists.is_empty() {
                    self.flush_leaf()?;
                    self.lists.clear();
                }
                self.extend_paragraph(&c.remainder)
            }
        }
    }

    fn container(&self) -> Option<BlockId> {
        self.quotes.last().copied()
    }

    /// Returns true when the line belonged to an open fence.
    fn consume_fence_line(&mut self, c: &LineClass) -> ModelResult<bool> {
        let (fence, len, depth) = match &self.leaf {
            LeafState::Fence { open, depth, .. } => (open.fence, open.len, *depth),
            _ => return Ok(false),
        };
        let Some(idx) = BlockQuote::strip_depth(&c.text, depth) else {
            // the enclosing quote ended under an open fence
            self.flush_leaf()?;
            return Ok(false);
        };
        let content = &c.text[idx..];
        if CodeFence::closes(fence, len, content) {
            self.flush_leaf()?;
            return Ok(true);
        }
        if let LeafState::Fence { lines, .. } = &mut self.leaf {
            lines.push(content.to_string());
        }
        Ok(true)
    }

    fn set_quote_depth(&mut self, depth: u8) -> ModelResult<()> {
        let depth = usize::from(depth);
        if depth == self.quotes.len() {
            return Ok(());
        }
        self.flush_leaf()?;
        self.lists.clear();
        self.quotes.truncate(depth);
        while self.quotes.len() < depth {
            let quote = self
                .doc
                .push_block(self.container(), BlockKind::BlockQuote, Vec::new())?;
            self.quotes.push(quote);
        }
        Ok(())
    }

    fn open_item(&mut self, indent: usize, marker: ListMarker, text: &str) -> ModelResult<()> {
        self.flush_leaf()?;
        while self.lists.last().is_some_and(|f| f.indent > indent) {
            self.lists.pop();
        }

        let (list, extends) = match self.lists.last().copied() {
            Some(top) if top.indent == indent && top.marker == marker => (top.list, true),
            Some(top) if top.indent == indent => {
                // a different marker at the same depth starts a sibling list
                let parent = self.doc.parent_of(top.list)?;
                self.lists.pop();
                (self.new_list(parent, marker)?, false)
            }
            Some(top) => (self.new_list(Some(top.item), marker)?, false),
            None => (self.new_list(self.container(), marker)?, false),
        };

        let item = self
            .doc
            .push_block(Some(list), BlockKind::ListItem, Vec::new())?;
        match self.lists.last_mut() {
            Some(top) if extends => top.item = item,
            _ => self.lists.push(ListFrame {
                indent,
                marker,
                list,
                item,
            }),
        }
        self.leaf = LeafState::Item {
            item,
            lines: vec![text.to_string()],
        };
        Ok(())
    }

    fn new_list(&mut self, parent: Option<BlockId>, marker: ListMarker) -> ModelResult<BlockId> {
        self.doc
            .push_block(parent, BlockKind::UnorderedList(marker), Vec::new())
    }

    fn continue_item(&mut self, line: &str) -> ModelResult<()> {
        if let LeafState::Item { lines, .. } = &mut self.leaf {
            lines.push(line.trim().to_string());
            return Ok(());
        }
        self.extend_paragraph(line)
    }

    fn open_leaf(&mut self, open: BlockOpen, depth: u8) -> ModelResult<()> {
        let parent = self.container();
        match open {
            BlockOpen::FencedCode(open) => {
                self.leaf = LeafState::Fence {
                    open,
                    depth,
                    lines: Vec::new(),
                };
            }
            BlockOpen::ThematicBreak => {
                self.doc
                    .push_block(parent, BlockKind::ThematicBreak, Vec::new())?;
            }
            BlockOpen::Heading { level, text } => {
                self.doc
                    .push_block(parent, BlockKind::Heading(level), parse_inline(&text))?;
            }
            BlockOpen::ListItem { marker, text } => self.open_item(0, marker, &text)?,
        }
        Ok(())
    }

    fn extend_paragraph(&mut self, line: &str) -> ModelResult<()> {
        let line = line.trim().to_string();
        if let LeafState::Paragraph { lines } = &mut self.leaf {
            lines.push(line);
            return Ok(());
        }
        self.flush_leaf()?;
        self.leaf = LeafState::Paragraph { lines: vec![line] };
        Ok(())
    }

    fn flush_leaf(&mut self) -> ModelResult<()> {
        let parent = self.container();
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Paragraph { lines } => {
                trace!("paragraph of {} line(s)", lines.len());
                let text = lines.join("\n");
                self.doc
                    .push_block(parent, BlockKind::Paragraph, parse_inline(&text))?;
            }
            LeafState::Item { item, lines } => {
                trace!("list item {item:?} of {} line(s)", lines.len());
                self.doc.replace_runs(item, parse_inline(&lines.join("\n")))?;
            }
            LeafState::Fence { open, lines, .. } => {
                trace!("code block of {} line(s)", lines.len());
                let text = lines.join("\n");
                let runs = if text.is_empty() {
                    Vec::new()
                } else {
                    vec![InlineRun::plain(text)]
                };
                let kind = BlockKind::CodeBlock {
                    fence: open.fence,
                    info: open.info,
                };
                self.doc.push_block(parent, kind, runs)?;
            }
        }
        Ok(())
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
