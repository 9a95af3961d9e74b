use crate::models::{Mark, MarkSet};
use crate::parsing::blocks::kinds::{BlockQuote, CodeFence, Heading, ListItem, ThematicBreak};
use crate::parsing::inline::kinds::Emphasis;

use super::inline::Rendered;

/// Backslash-escapes the characters of a text run that the inline parser
/// would otherwise read as markup.
///
/// `prev` and `next` are the mark sets of the neighbouring runs (`None` at
/// the edge of the block); a `+` or `~` touching an underline or strikethrough
/// delimiter is escaped even when it stands alone.
pub fn escape_text(
    text: &str,
    marks: MarkSet,
    prev: Option<MarkSet>,
    next: Option<MarkSet>,
) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    for (i, c) in chars.iter().copied().enumerate() {
        if Emphasis::ALWAYS_ESCAPED.contains(&c) {
            out.push('\\');
        } else if let Some((_, mark)) = Emphasis::PAIR_ESCAPED.iter().find(|(p, _)| *p == c) {
            let doubled = (i > 0 && chars[i - 1] == c) || chars.get(i + 1) == Some(&c);
            let at_open = i == 0 && delimiter_between(marks, prev, *mark);
            let at_close = i + 1 == chars.len() && delimiter_between(marks, next, *mark);
            if doubled || at_open || at_close {
                out.push('\\');
            }
        }
        out.push(c);
    }
    out
}

fn delimiter_between(marks: MarkSet, neighbour: Option<MarkSet>, mark: Mark) -> bool {
    marks.contains(mark) != neighbour.unwrap_or_default().contains(mark)
}

/// Escapes lines that would re-parse as a block opener.
///
/// Lines that begin at or inside a code span are left alone: a backslash
/// there would either break the span's fence or become part of its content.
pub fn escape_line_starts(rendered: &Rendered) -> String {
    let mut at = 0;
    rendered
        .text
        .split('\n')
        .map(|line| {
            let body = line.trim_start();
            let indent = &line[..line.len() - body.len()];
            let body_at = at + indent.len();
            at += line.len() + 1;
            if opens_block(body) && !rendered.in_code(body_at) {
                format!("{indent}\\{body}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn opens_block(line: &str) -> bool {
    line.starts_with(BlockQuote::PREFIX)
        || Heading::parse(line).is_some()
        || ListItem::parse(line).is_some()
        || ThematicBreak::matches(line)
        || CodeFence::open(line).is_some()
}
