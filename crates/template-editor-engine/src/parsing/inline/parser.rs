use crate::models::{InlineRun, Mark, MarkSet, inline};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Delimiter, Emphasis, Escape},
};

/// Parses a leaf block's text into normalized inline runs.
///
/// Never fails: anything that does not form a complete construct is kept as
/// literal text.
pub fn parse_inline(s: &str) -> Vec<InlineRun> {
    let mut out = Vec::new();
    parse_into(s, MarkSet::EMPTY, &mut out);
    inline::normalize(&mut out);
    out
}

fn parse_into(s: &str, marks: MarkSet, out: &mut Vec<InlineRun>) {
    let mut cur = Cursor::new(s);
    let mut text = String::new();

    fn flush_text(out: &mut Vec<InlineRun>, text: &mut String, marks: MarkSet) {
        if !text.is_empty() {
            out.push(InlineRun::new(std::mem::take(text), marks));
        }
    }

    while !cur.eof() {
        // Precedence: escapes, then code spans (raw zone), then emphasis
        if let Some(c) = try_parse_escape(&mut cur) {
            text.push(c);
            continue;
        }
        if let Some(code) = try_parse_code_span(&mut cur) {
            flush_text(out, &mut text, marks);
            out.push(InlineRun::new(code, marks.with(Mark::Code)));
            continue;
        }
        if let Some((delim, inner)) = try_parse_emphasis(&mut cur) {
            flush_text(out, &mut text, marks);
            parse_into(inner, marks.with(delim.mark), out);
            continue;
        }
        if cur.peek() == Some(CodeSpan::TICK) {
            // an unmatched backtick run is literal as a whole
            let n = cur.run_len(CodeSpan::TICK);
            text.push_str(&cur.rest()[..n]);
            cur.bump_n(n);
            continue;
        }
        if let Some(c) = cur.bump_char() {
            text.push(c);
        }
    }

    flush_text(out, &mut text, marks);
}

/// A backslash followed by ASCII punctuation yields that character.
fn try_parse_escape(cur: &mut Cursor<'_>) -> Option<char> {
    if cur.peek() != Some(Escape::BACKSLASH) {
        return None;
    }
    let c = cur.rest().get(1..)?.chars().next()?;
    if !Escape::escapable(c) {
        return None;
    }
    cur.bump_n(1 + c.len_utf8());
    Some(c)
}

/// Locates a code span opening at byte `at`: a run of N backticks closed by
/// exactly N backticks. Returns `(content start, content end, span end)`.
fn find_code_span(s: &str, at: usize) -> Option<(usize, usize, usize)> {
    let bytes = s.as_bytes();
    let n = bytes
        .get(at..)?
        .iter()
        .take_while(|b| **b == CodeSpan::TICK)
        .count();
    if n == 0 {
        return None;
    }
    let mut j = at + n;
    while j < bytes.len() {
        if bytes[j] == CodeSpan::TICK {
            let m = bytes[j..]
                .iter()
                .take_while(|b| **b == CodeSpan::TICK)
                .count();
            if m == n {
                return Some((at + n, j, j + m));
            }
            j += m;
        } else {
            j += 1;
        }
    }
    None
}

fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<String> {
    let (start, end, after) = find_code_span(cur.s, cur.i)?;
    let content = CodeSpan::strip_padding(cur.s.get(start..end)?).to_string();
    cur.i = after;
    Some(content)
}

/// Finds the byte index of the delimiter that closes one opened just before
/// `from`, skipping escapes and code spans.
///
/// A single-character delimiter never closes on half of a doubled one, so
/// `_a __b__ c_` keeps its bold inside the italic. An empty pair is not a
/// match.
fn find_closer(s: &str, from: usize, delim: &Delimiter) -> Option<usize> {
    let token = delim.token.as_bytes();
    let bytes = s.as_bytes();
    let mut j = from;
    while j < bytes.len() {
        let b = bytes[j];
        if b == Escape::BACKSLASH {
            let escaped = s.get(j + 1..).and_then(|r| r.chars().next());
            j += 1 + escaped.map_or(0, char::len_utf8);
            continue;
        }
        if b == CodeSpan::TICK {
            j = match find_code_span(s, j) {
                Some((_, _, after)) => after,
                None => j + bytes[j..].iter().take_while(|x| **x == b).count(),
            };
            continue;
        }
        if bytes[j..].starts_with(token) {
            if token.len() == 1 && bytes.get(j + 1) == Some(&token[0]) {
                j += 2;
                continue;
            }
            return (j > from).then_some(j);
        }
        j += 1;
    }
    None
}

fn try_parse_emphasis<'a>(cur: &mut Cursor<'a>) -> Option<(Delimiter, &'a str)> {
    let delim = Emphasis::PARSE_ORDER
        .into_iter()
        .find(|d| cur.starts_with(d.token.as_bytes()))?;
    let from = cur.i + delim.token.len();
    let close = find_closer(cur.s, from, &delim)?;
    let inner = cur.s.get(from..close)?;
    cur.i = close + delim.token.len();
    Some((delim, inner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn run(text: &str, marks: &[Mark]) -> InlineRun {
        InlineRun::new(text, marks.iter().copied().collect())
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![run("hello world", &[])]);
    }

    #[test]
    fn empty_text_has_no_runs() {
        assert!(parse_inline("").is_empty());
    }

    #[rstest]
    #[case("**bold**", Mark::Bold)]
    #[case("__bold__", Mark::Bold)]
    #[case("*italic*", Mark::Italic)]
    #[case("_italic_", Mark::Italic)]
    #[case("++underline++", Mark::Underline)]
    #[case("~~strike~~", Mark::Strikethrough)]
    fn single_mark(#[case] src: &str, #[case] mark: Mark) {
        let runs = parse_inline(src);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].marks, MarkSet::EMPTY.with(mark));
    }

    #[test]
    fn nested_marks_accumulate() {
        assert_eq!(
            parse_inline("**a _b_** c"),
            vec![
                run("a ", &[Mark::Bold]),
                run("b", &[Mark::Bold, Mark::Italic]),
                run(" c", &[]),
            ]
        );
    }

    #[test]
    fn italic_keeps_doubled_bold_inside() {
        assert_eq!(
            parse_inline("_a __b__ c_"),
            vec![
                run("a ", &[Mark::Italic]),
                run("b", &[Mark::Bold, Mark::Italic]),
                run(" c", &[Mark::Italic]),
            ]
        );
    }

    #[test]
    fn code_span_suppresses_emphasis() {
        assert_eq!(parse_inline("`**x**`"), vec![run("**x**", &[Mark::Code])]);
    }

    #[test]
    fn code_span_with_inner_ticks_and_padding() {
        assert_eq!(parse_inline("`` a`b ``"), vec![run("a`b", &[Mark::Code])]);
        assert_eq!(parse_inline("` `"), vec![run(" ", &[Mark::Code])]);
    }

    #[test]
    fn code_inside_bold() {
        assert_eq!(
            parse_inline("**see `x`**"),
            vec![run("see ", &[Mark::Bold]), run("x", &[Mark::Bold, Mark::Code])]
        );
    }

    #[test]
    fn escapes_are_literal() {
        assert_eq!(parse_inline(r"\*not italic\*"), vec![run("*not italic*", &[])]);
        assert_eq!(parse_inline(r"a\\b"), vec![run(r"a\b", &[])]);
        assert_eq!(parse_inline(r"\# x"), vec![run("# x", &[])]);
    }

    #[test]
    fn backslash_before_letter_is_kept() {
        assert_eq!(parse_inline(r"C:\dir"), vec![run(r"C:\dir", &[])]);
    }

    #[test]
    fn closer_search_skips_escapes() {
        assert_eq!(parse_inline(r"*a\*b*"), vec![run("a*b", &[Mark::Italic])]);
    }

    #[rstest]
    #[case("**unclosed")]
    #[case("`unclosed code")]
    #[case("~single~ tilde")]
    #[case("a + b")]
    #[case("****")]
    fn unbalanced_delimiters_stay_text(#[case] src: &str) {
        let runs = parse_inline(src);
        assert_eq!(inline::plain_text(&runs), src);
        assert!(runs.iter().all(|r| r.marks.is_empty()));
    }

    #[test]
    fn intraword_underscores_are_emphasis() {
        // no flanking rules: underscores inside words still pair up
        assert_eq!(
            parse_inline("snake_case_name"),
            vec![run("snake", &[]), run("case", &[Mark::Italic]), run("name", &[])]
        );
    }

    #[test]
    fn soft_breaks_are_kept() {
        assert_eq!(
            parse_inline("one\n**two**"),
            vec![run("one\n", &[]), run("two", &[Mark::Bold])]
        );
    }
}
