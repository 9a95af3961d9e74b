use crate::parsing::blocks::{
    BlockOpen,
    kinds::{BlockQuote, CodeFence, FenceOpen},
    try_open_leaf,
};

/// Canonical form for comparing markdown up to trivial whitespace.
///
/// Trailing whitespace is removed from every line, runs of blank lines
/// collapse into one, and leading and trailing blank lines are dropped. A
/// blank line is also dropped when the lines around it already belong to
/// different blocks: after a heading, a thematic break or a closing fence,
/// before any block opener, between different quote depths, and after a list
/// when the next line is not indented into it.
pub fn normalize_whitespace(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim_end) {
        if line.is_empty() && lines.last().is_none_or(|l| l.is_empty()) {
            continue;
        }
        lines.push(line);
    }
    while lines.last() == Some(&"") {
        lines.pop();
    }

    let shapes = shapes(&lines);
    lines
        .iter()
        .enumerate()
        .filter(|(i, _)| !separates_blocks(&shapes, *i))
        .map(|(_, line)| *line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether two markdown texts are equal after [`normalize_whitespace`].
pub fn equivalent(a: &str, b: &str) -> bool {
    normalize_whitespace(a) == normalize_whitespace(b)
}

/// Where a line sits relative to block boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// Empty after its quote prefixes.
    Blank,
    /// Fenced code content, where blank lines are significant.
    Raw,
    Text {
        depth: u8,
        indent: usize,
        opens: bool,
        ends: bool,
        in_list: bool,
    },
}

fn shapes(lines: &[&str]) -> Vec<Shape> {
    let mut fence: Option<FenceOpen> = None;
    let mut in_list = false;
    lines
        .iter()
        .map(|line| {
            let (depth, idx) = BlockQuote::strip_prefixes(line);
            let rest = &line[idx..];
            if let Some(open) = &fence {
                if !CodeFence::closes(open.fence, open.len, rest) {
                    return Shape::Raw;
                }
                fence = None;
                return Shape::Text {
                    depth,
                    indent: 0,
                    opens: false,
                    ends: true,
                    in_list: false,
                };
            }

            let body = rest.trim();
            if body.is_empty() {
                in_list = false;
                return Shape::Blank;
            }
            let indent = rest.len() - rest.trim_start().len();
            let open = try_open_leaf(body);
            in_list = match &open {
                Some(BlockOpen::ListItem { .. }) => true,
                Some(_) => false,
                None => in_list && indent > 0,
            };
            if let Some(BlockOpen::FencedCode(f)) = &open {
                fence = Some(f.clone());
            }
            Shape::Text {
                depth,
                indent,
                opens: open.is_some(),
                ends: matches!(
                    open,
                    Some(BlockOpen::Heading { .. } | BlockOpen::ThematicBreak)
                ),
                in_list,
            }
        })
        .collect()
}

fn separates_blocks(shapes: &[Shape], i: usize) -> bool {
    if shapes[i] != Shape::Blank || i == 0 {
        return false;
    }
    match (shapes[i - 1], shapes.get(i + 1).copied()) {
        (
            Shape::Text {
                depth,
                ends,
                in_list,
                ..
            },
            Some(Shape::Text {
                depth: next_depth,
                indent,
                opens,
                ..
            }),
        ) => depth != next_depth || ends || opens || (in_list && indent == 0),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn trims_and_collapses() {
        assert_eq!(normalize_whitespace("\n\na  \n\n\n\nb\t\n\n"), "a\n\nb");
    }

    #[test]
    fn double_space_line_break_is_trivial() {
        assert!(equivalent("one  \ntwo\n", "one\ntwo"));
        assert!(!equivalent("one two", "one\ntwo"));
    }

    #[test]
    fn blank_line_between_paragraph_lines_matters() {
        assert!(!equivalent("a\nb", "a\n\nb"));
        assert!(!equivalent("> a\n> b", "> a\n>\n> b"));
        assert!(!equivalent("- a\n  b", "- a\n\n  b"));
    }

    #[rstest]
    #[case("# Title\nbody", "# Title\n\nbody")]
    #[case("intro:\n- a\n- b", "intro:\n\n- a\n- b")]
    #[case("---\n# Page Two", "---\n\n# Page Two")]
    #[case("- a\nafter", "- a\n\nafter")]
    #[case("> quote\nplain", "> quote\n\nplain")]
    #[case("> # Title\n> body", "> # Title\n>\n> body")]
    #[case("```\nx\n```\nafter", "```\nx\n```\n\nafter")]
    #[case("text\n```\nx\n```", "text\n\n```\nx\n```")]
    fn blank_line_at_block_boundary_is_trivial(#[case] tight: &str, #[case] loose: &str) {
        assert!(equivalent(tight, loose));
    }

    #[test]
    fn blank_lines_inside_fences_matter() {
        assert!(!equivalent("```\na\n\n# b\n```", "```\na\n# b\n```"));
    }
}
