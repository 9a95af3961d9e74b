use xi_rope::Rope;

use super::span::Span;

/// One source line with its position in the rope.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Zero-based line number, used in log output.
    pub number: usize,
    /// Byte span of the line, terminator included.
    pub span: Span,
    /// Raw line text, terminator included.
    pub text: String,
}

impl LineRef {
    /// The line without its `\n` or `\r\n` terminator.
    pub fn body(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }
}

/// Iterates over the rope's lines, keeping terminators so spans stay exact.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(number, line)| {
        let start = offset;
        offset += line.len();
        LineRef {
            number,
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}
