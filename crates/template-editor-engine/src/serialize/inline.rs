use std::{cmp::Reverse, ops::Range};

use crate::models::{InlineRun, Mark};
use crate::parsing::inline::kinds::{CodeSpan, Emphasis};

use super::{escape::escape_text, options::SerializeOptions};

/// Inline markdown for one leaf and the byte ranges its code spans cover.
#[derive(Debug, Default)]
pub struct Rendered {
    pub text: String,
    pub code_spans: Vec<Range<usize>>,
}

impl Rendered {
    /// Whether byte `at` lies on a code span's opening fence or inside it.
    pub fn in_code(&self, at: usize) -> bool {
        self.code_spans.iter().any(|r| r.contains(&at))
    }
}

pub fn serialize_runs(runs: &[InlineRun], options: &SerializeOptions) -> String {
    render_runs(runs, options).text
}

/// Writes a leaf's runs as inline markdown.
///
/// Open delimiters live on a stack. Before each run, everything from the
/// first stacked mark the run lacks upwards is closed; missing marks are then
/// opened, longest-lived first so they nest around shorter ones. Code is never
/// stacked: every code run becomes its own span.
pub fn render_runs(runs: &[InlineRun], options: &SerializeOptions) -> Rendered {
    let mut out = String::new();
    let mut code_spans = Vec::new();
    let mut stack: Vec<Mark> = Vec::new();

    for (idx, run) in runs.iter().enumerate() {
        let keep = stack
            .iter()
            .position(|m| !run.marks.contains(*m))
            .unwrap_or(stack.len());
        while stack.len() > keep {
            if let Some(mark) = stack.pop() {
                out.push_str(token(mark, options));
            }
        }

        let mut opening: Vec<Mark> = run
            .marks
            .iter()
            .filter(|m| *m != Mark::Code && !stack.contains(m))
            .collect();
        // stable: ties keep canonical order
        opening.sort_by_key(|m| Reverse(persistence(&runs[idx..], *m)));
        for mark in opening {
            out.push_str(token(mark, options));
            stack.push(mark);
        }

        if run.marks.contains(Mark::Code) {
            let start = out.len();
            write_code_span(&run.text, &mut out);
            code_spans.push(start..out.len());
        } else {
            let prev = idx.checked_sub(1).map(|i| runs[i].marks);
            let next = runs.get(idx + 1).map(|r| r.marks);
            out.push_str(&escape_text(&run.text, run.marks, prev, next));
        }
    }

    while let Some(mark) = stack.pop() {
        out.push_str(token(mark, options));
    }
    Rendered {
        text: out,
        code_spans,
    }
}

/// Number of consecutive runs, starting with the first, that carry `mark`.
fn persistence(runs: &[InlineRun], mark: Mark) -> usize {
    runs.iter().take_while(|r| r.marks.contains(mark)).count()
}

fn token(mark: Mark, options: &SerializeOptions) -> &'static str {
    match mark {
        Mark::Strikethrough => Emphasis::STRIKETHROUGH.token,
        Mark::Underline => Emphasis::UNDERLINE.token,
        Mark::Bold => options.italic.bold().token,
        Mark::Italic => options.italic.italic().token,
        Mark::Code => "`",
    }
}

fn write_code_span(text: &str, out: &mut String) {
    let fence = char::from(CodeSpan::TICK)
        .to_string()
        .repeat(CodeSpan::fence_len(text));
    let pad = if CodeSpan::needs_padding(text) { " " } else { "" };
    out.push_str(&fence);
    out.push_str(pad);
    out.push_str(text);
    out.push_str(pad);
    out.push_str(&fence);
}
