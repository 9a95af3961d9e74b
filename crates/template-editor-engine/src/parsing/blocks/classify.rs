use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::BlockQuote;
use super::open::{BlockOpen, try_open_leaf};

/// Local facts about one line, gathered without looking at its neighbours.
#[derive(Debug, Clone)]
pub struct LineClass {
    pub number: usize,
    /// Full byte span of the line in the rope.
    pub line: Span,
    /// The line without its terminator, quote prefixes included.
    pub text: String,
    /// Number of `>` prefixes.
    pub quote_depth: u8,
    /// The line after its quote prefixes.
    pub remainder: String,
    /// Leading indentation of the remainder in columns (a tab counts as four).
    pub indent: usize,
    /// Nothing but whitespace after the quote prefixes.
    pub is_blank: bool,
    pub open: Option<BlockOpen>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let text = lr.body();
        let (quote_depth, idx) = BlockQuote::strip_prefixes(text);
        let remainder = &text[idx..];
        let indent = remainder
            .chars()
            .take_while(|c| matches!(c, ' ' | '\t'))
            .map(|c| if c == '\t' { 4 } else { 1 })
            .sum();
        let trimmed = remainder.trim();

        LineClass {
            number: lr.number,
            line: lr.span,
            text: text.to_string(),
            quote_depth,
            remainder: remainder.to_string(),
            indent,
            is_blank: trimmed.is_empty(),
            open: try_open_leaf(trimmed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::rope::lines_with_spans;
    use xi_rope::Rope;

    fn classify_all(src: &str) -> Vec<LineClass> {
        let rope = Rope::from(src);
        lines_with_spans(&rope)
            .map(|lr| MarkdownLineClassifier.classify(&lr))
            .collect()
    }

    #[test]
    fn quoted_list_item() {
        let lines = classify_all("> - item\n");
        assert_eq!(lines[0].quote_depth, 1);
        assert_eq!(lines[0].indent, 0);
        assert!(matches!(lines[0].open, Some(BlockOpen::ListItem { .. })));
    }

    #[test]
    fn indentation_is_measured_after_quotes() {
        let lines = classify_all(">   - nested\n\t- tabbed\n");
        assert_eq!(lines[0].indent, 2);
        assert_eq!(lines[1].indent, 4);
    }

    #[test]
    fn line_span_covers_terminator() {
        let lines = classify_all("a\n> b\n");
        assert_eq!(lines[1].line, Span { start: 2, end: 6 });
        assert_eq!(lines[1].remainder, "b");
    }

    #[test]
    fn bare_quote_marker_is_blank() {
        let lines = classify_all(">\n");
        assert!(lines[0].is_blank);
        assert_eq!(lines[0].quote_depth, 1);
    }
}
