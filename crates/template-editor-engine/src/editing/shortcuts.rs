use crate::models::{HeadingLevel, ListMarker};
use crate::parsing::blocks::kinds::{BlockQuote, Heading};

/// What typing a shortcut followed by a space turns the block into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ListItem(ListMarker),
    BlockQuote,
    Heading(HeadingLevel),
}

/// Maps typed prefixes to shortcuts. Lookups need an exact match, so `##x`
/// or `#######` never trigger anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutTable {
    entries: Vec<(String, Shortcut)>,
}

impl ShortcutTable {
    pub fn new(entries: impl IntoIterator<Item = (String, Shortcut)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// `*`, `-`, `+` for list items, `>` for quotes and `#` to `######` for
    /// headings. Ordered list markers (`1.`) have no shortcut.
    pub fn standard() -> Self {
        let lists = [ListMarker::Asterisk, ListMarker::Dash, ListMarker::Plus]
            .into_iter()
            .map(|m| (m.as_char().to_string(), Shortcut::ListItem(m)));
        let quote = std::iter::once((BlockQuote::PREFIX.to_string(), Shortcut::BlockQuote));
        let headings = (1..=6)
            .filter_map(HeadingLevel::from_count)
            .map(|level| (Heading::prefix(level), Shortcut::Heading(level)));
        Self::new(lists.chain(quote).chain(headings))
    }

    /// Looks up the text typed before the cursor, ignoring surrounding whitespace.
    pub fn lookup(&self, typed: &str) -> Option<Shortcut> {
        let typed = typed.trim();
        self.entries
            .iter()
            .find(|(text, _)| text == typed)
            .map(|(_, shortcut)| *shortcut)
    }
}

impl Default for ShortcutTable {
    fn default() -> Self {
        Self::standard()
    }
}
