use log::debug;

use crate::models::{BlockId, BlockKind, Document, ModelResult, Position, Selection};

use super::{
    keys::{Key, KeyOutcome},
    shortcuts::{Shortcut, ShortcutTable},
    transact,
};

/// The kind a block presents to the user.
///
/// A paragraph directly inside a quote reads as a block quote; every other
/// block is its own kind.
pub fn effective_kind(doc: &Document, id: BlockId) -> ModelResult<BlockKind> {
    let kind = doc.kind(id)?.clone();
    if kind == BlockKind::Paragraph && in_quote(doc, id)? {
        return Ok(BlockKind::BlockQuote);
    }
    Ok(kind)
}

fn in_quote(doc: &Document, id: BlockId) -> ModelResult<bool> {
    Ok(match doc.parent_of(id)? {
        Some(parent) => *doc.kind(parent)? == BlockKind::BlockQuote,
        None => false,
    })
}

/// Decides per keystroke whether to restructure the document.
///
/// Holds no state besides its shortcut table; the document it is handed is
/// the only thing it changes, and only when it intercepts.
#[derive(Debug, Clone, Default)]
pub struct AutoFormatter {
    shortcuts: ShortcutTable,
}

impl AutoFormatter {
    pub fn new(shortcuts: ShortcutTable) -> Self {
        Self { shortcuts }
    }

    pub fn handle_key(&self, key: &Key, selection: Selection, doc: &mut Document) -> KeyOutcome {
        let result = match key {
            Key::Space => self.on_space(selection, doc),
            Key::Backspace => on_backspace(selection, doc),
            Key::Enter => on_enter(selection, doc),
            Key::Other(_) => Ok(None),
        };
        match result {
            Ok(Some(selection)) => {
                debug!("{key:?} intercepted, caret now {:?}", selection.end);
                KeyOutcome::Intercepted { selection }
            }
            Ok(None) => KeyOutcome::Passthrough,
            Err(err) => {
                debug!("{key:?} passed through: {err}");
                KeyOutcome::Passthrough
            }
        }
    }

    fn on_space(&self, selection: Selection, doc: &mut Document) -> ModelResult<Option<Selection>> {
        if !selection.is_collapsed() {
            return Ok(None);
        }
        let Position { block, offset } = selection.start;
        let kind = doc.kind(block)?.clone();
        if kind.is_raw() {
            return Ok(None);
        }
        let typed: String = doc.text_of(block)?.chars().take(offset).collect();
        let Some(shortcut) = self.shortcuts.lookup(&typed) else {
            return Ok(None);
        };
        if kind == BlockKind::ListItem && !matches!(shortcut, Shortcut::ListItem(_)) {
            // a list item only leaves its list through unwrap
            return Ok(None);
        }
        debug!("shortcut {typed:?} -> {shortcut:?} on {block:?}");
        transact(doc, |doc| apply_shortcut(doc, block, offset, shortcut)).map(Some)
    }
}

/// Runs a key through the standard shortcut table.
pub fn handle_key(key: &Key, selection: Selection, doc: &mut Document) -> KeyOutcome {
    AutoFormatter::default().handle_key(key, selection, doc)
}

fn apply_shortcut(
    doc: &mut Document,
    block: BlockId,
    typed_len: usize,
    shortcut: Shortcut,
) -> ModelResult<Selection> {
    let kind = doc.kind(block)?.clone();
    match shortcut {
        Shortcut::ListItem(marker) if kind != BlockKind::ListItem => {
            doc.wrap(block, BlockKind::UnorderedList(marker))?;
        }
        Shortcut::BlockQuote => {
            // a paragraph inside a quote already reads as one
            doc.set_kind(block, BlockKind::Paragraph)?;
            if !in_quote(doc, block)? {
                doc.wrap(block, BlockKind::BlockQuote)?;
            }
        }
        Shortcut::Heading(level) => doc.set_kind(block, BlockKind::Heading(level))?,
        // already a list item: only the typed marker goes
        Shortcut::ListItem(_) => {}
    }
    doc.delete_range(Selection::new(
        Position::new(block, 0),
        Position::new(block, typed_len),
    ))?;
    Ok(Selection::caret(block, 0))
}

fn on_backspace(selection: Selection, doc: &mut Document) -> ModelResult<Option<Selection>> {
    if !selection.is_collapsed() || selection.start.offset != 0 {
        return Ok(None);
    }
    revert_to_paragraph(doc, selection.start.block)
}

/// Turns a formatted block back into a plain paragraph, one level at a time.
fn revert_to_paragraph(doc: &mut Document, block: BlockId) -> ModelResult<Option<Selection>> {
    match effective_kind(doc, block)? {
        BlockKind::Paragraph => return Ok(None),
        BlockKind::BlockQuote | BlockKind::ListItem => doc.unwrap(block)?,
        _ => doc.set_kind(block, BlockKind::Paragraph)?,
    }
    Ok(Some(Selection::caret(block, 0)))
}

fn on_enter(selection: Selection, doc: &mut Document) -> ModelResult<Option<Selection>> {
    if !selection.is_collapsed() {
        return Ok(None);
    }
    let Position { block, offset } = selection.start;
    if offset == 0 && doc.is_empty(block)? {
        return revert_to_paragraph(doc, block);
    }
    if offset != doc.len(block)? {
        return Ok(None);
    }
    let next = match effective_kind(doc, block)? {
        BlockKind::Heading(_) => transact(doc, |doc| {
            let next = doc.split_at(selection)?;
            doc.set_kind(next, BlockKind::Paragraph)?;
            Ok(next)
        })?,
        BlockKind::BlockQuote => transact(doc, |doc| {
            let next = doc.split_at(selection)?;
            doc.unwrap(next)?;
            Ok(next)
        })?,
        _ => return Ok(None),
    };
    Ok(Some(Selection::caret(next, 0)))
}
