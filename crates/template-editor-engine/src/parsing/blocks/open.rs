use crate::models::{HeadingLevel, ListMarker};

use super::kinds::{CodeFence, FenceOpen, Heading, ListItem, ThematicBreak};

/// A block opener recognized on a line (after quote prefixes are stripped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode(FenceOpen),
    ThematicBreak,
    Heading { level: HeadingLevel, text: String },
    ListItem { marker: ListMarker, text: String },
}

pub fn try_open_leaf(line: &str) -> Option<BlockOpen> {
    // Precedence: fence beats everything, and `- - -` is a break, not an item.
    if let Some(open) = CodeFence::open(line) {
        return Some(BlockOpen::FencedCode(open));
    }
    if ThematicBreak::matches(line) {
        return Some(BlockOpen::ThematicBreak);
    }
    if let Some((level, text)) = Heading::parse(line) {
        return Some(BlockOpen::Heading {
            level,
            text: text.to_string(),
        });
    }
    if let Some((marker, text)) = ListItem::parse(line) {
        return Some(BlockOpen::ListItem {
            marker,
            text: text.to_string(),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn break_wins_over_list_item() {
        assert_eq!(try_open_leaf("- - -"), Some(BlockOpen::ThematicBreak));
        assert_eq!(try_open_leaf("***"), Some(BlockOpen::ThematicBreak));
    }

    #[test]
    fn list_item_and_heading() {
        assert_eq!(
            try_open_leaf("* item"),
            Some(BlockOpen::ListItem {
                marker: ListMarker::Asterisk,
                text: "item".into()
            })
        );
        assert_eq!(
            try_open_leaf("## Clause"),
            Some(BlockOpen::Heading {
                level: HeadingLevel::H2,
                text: "Clause".into()
            })
        );
    }

    #[test]
    fn plain_text_opens_nothing() {
        assert_eq!(try_open_leaf("1. Item one"), None);
        assert_eq!(try_open_leaf("#x"), None);
    }
}
