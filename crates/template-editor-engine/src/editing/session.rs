use std::sync::OnceLock;

use log::{debug, warn};
use regex::Regex;

use crate::models::{BlockKind, Document, ModelResult, Position, Selection};
use crate::parsing::parse;
use crate::serialize::{SerializeOptions, serialize_with};

use super::{
    autoformat::AutoFormatter,
    keys::{Key, KeyOutcome},
    transact,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub serialize: SerializeOptions,
    /// Run keystrokes through the auto-formatter before applying them.
    pub autoformat: bool,
    /// Strip markdown escapes from the text handed to the change listener.
    pub unescape_notifications: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            serialize: SerializeOptions::default(),
            autoformat: true,
            unescape_notifications: false,
        }
    }
}

type ChangeListener = Box<dyn FnMut(&str)>;

/// One editable buffer: a document, a selection and a change listener.
///
/// Every key goes to the auto-formatter first; keys it passes through are
/// applied as plain text edits. After any change the document is serialized
/// and handed to the listener.
pub struct EditorSession {
    doc: Document,
    selection: Selection,
    formatter: AutoFormatter,
    options: SessionOptions,
    listener: Option<ChangeListener>,
}

impl EditorSession {
    /// Parses `text`; the caret starts at the end of the last text block.
    pub fn from_markdown(text: &str, options: SessionOptions) -> ModelResult<Self> {
        let mut doc = parse(text);
        let leaf = match doc.last_leaf() {
            Some(leaf) => leaf,
            None => doc.push_block(None, BlockKind::Paragraph, Vec::new())?,
        };
        let selection = Selection::caret(leaf, doc.len(leaf)?);
        Ok(Self {
            doc,
            selection,
            formatter: AutoFormatter::default(),
            options,
            listener: None,
        })
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: AutoFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn set_selection(&mut self, selection: Selection) -> ModelResult<()> {
        self.doc.ordered(selection)?;
        self.selection = selection;
        Ok(())
    }

    /// Registers the callback that receives the markdown after every change.
    pub fn on_change(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn markdown(&self) -> String {
        serialize_with(&self.doc, &self.options.serialize)
    }

    /// Handles one keystroke.
    ///
    /// An error means the plain edit could not be applied; the document and
    /// selection are unchanged.
    pub fn press(&mut self, key: &Key) -> ModelResult<KeyOutcome> {
        let outcome = if self.options.autoformat {
            self.formatter
                .handle_key(key, self.selection, &mut self.doc)
        } else {
            KeyOutcome::Passthrough
        };
        let changed = match outcome {
            KeyOutcome::Intercepted { selection } => {
                self.selection = selection;
                true
            }
            KeyOutcome::Passthrough => self.apply_plain(key)?,
        };
        if changed {
            self.notify();
        }
        Ok(outcome)
    }

    /// Presses every key in order; a key that cannot be applied is skipped.
    pub fn replay(&mut self, keys: &[Key]) {
        for key in keys {
            if let Err(err) = self.press(key) {
                warn!("{key:?} ignored: {err}");
            }
        }
    }

    /// Applies a key as a plain edit. Returns whether anything changed.
    fn apply_plain(&mut self, key: &Key) -> ModelResult<bool> {
        let selection = self.selection;
        let (start, _) = self.doc.ordered(selection)?;
        match key {
            Key::Enter => {
                let next = self.doc.split_at(selection)?;
                self.selection = Selection::caret(next, 0);
            }
            Key::Backspace => return self.delete_backward(),
            _ => {
                let Some(text) = key.text() else {
                    return Ok(false);
                };
                transact(&mut self.doc, |doc| {
                    doc.delete_range(selection)?;
                    doc.insert_text(start, text)
                })?;
                let offset = start.offset + text.chars().count();
                self.selection = Selection::caret(start.block, offset);
            }
        }
        debug!("applied {key:?}, caret now {:?}", self.selection.end);
        Ok(true)
    }

    /// Deletes the selection, the character before the caret, or the break
    /// between this block and the previous one.
    fn delete_backward(&mut self) -> ModelResult<bool> {
        let (start, _) = self.doc.ordered(self.selection)?;
        let range = if !self.selection.is_collapsed() {
            self.selection
        } else if start.offset > 0 {
            Selection::new(Position::new(start.block, start.offset - 1), start)
        } else {
            let leaves = self.doc.leaves();
            let previous = leaves
                .iter()
                .position(|leaf| *leaf == start.block)
                .and_then(|i| i.checked_sub(1))
                .map(|i| leaves[i]);
            let Some(previous) = previous else {
                return Ok(false);
            };
            Selection::new(Position::new(previous, self.doc.len(previous)?), start)
        };
        let (caret, _) = self.doc.ordered(range)?;
        self.doc.delete_range(range)?;
        self.selection = Selection::collapsed(caret);
        Ok(true)
    }

    fn notify(&mut self) {
        let Some(listener) = self.listener.as_mut() else {
            return;
        };
        let mut markdown = serialize_with(&self.doc, &self.options.serialize);
        if self.options.unescape_notifications {
            markdown = unescape_markdown(&markdown);
        }
        listener(&markdown);
    }
}

/// Removes backslash escapes in front of markdown punctuation.
pub fn unescape_markdown(text: &str) -> String {
    static ESCAPE_REGEX: OnceLock<Regex> = OnceLock::new();
    let escape_regex = ESCAPE_REGEX.get_or_init(|| {
        Regex::new(r"\\([\\`*{}\[\]()#+\-.!_>])").expect("Invalid escape regex")
    });
    escape_regex.replace_all(text, "$1").into_owned()
}
