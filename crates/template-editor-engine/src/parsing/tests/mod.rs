//! Tests for the parsing module.
//!
//! Documents are compared through a plain-text outline with inline `insta`
//! snapshots.


use crate::models::{BlockKind, HeadingLevel};
use crate::parsing::parse;
use outline::outline;

const CONTRACT: &str = include_str!("../../../tests/fixtures/contract.md");

fn parse_checked(md: &str) -> crate::models::Document {
    let doc = parse(md);
    invariants::check(&doc);
    doc
}

// Fixture snapshot

#[test]
fn fixture_contract_template() {
    let doc = parse_checked(CONTRACT);
    insta::assert_snapshot!(outline(&doc), @r#"
    Heading(1) "Contract"
    Paragraph "This is a sample contract template. You can introduce variables, like " Code"[{variableA}]" " or even have lists:"
    List(-)
      Item "add list items"
      Item "like this"
    Paragraph Code"if variableA > 10" "\nThis is a conditional section.\n" Code"endif"
    Paragraph "Even, loops:"
    Paragraph Code"foreach var in variableA"
    List(-)
      Item "This is " Code"var.name"
    Paragraph Code"endfor"
    Heading(2) "Clause"
    Paragraph "The document can contain " Bold"bold" ", " Strikethrough"strike" ", " Italic"italic" " text or even [links](https://clause.io)."
    Paragraph "Or numbered lists:\n1. Item one\n1. Item two"
    Heading(3) "Sub-sub heading"
    Paragraph "This is some code:"
    Paragraph Code"define constant PI = 4.0 * atan(1.0)"
    Paragraph "This is a quote:"
    Quote
      Paragraph "Look before you leap!"
    Break
    Heading(1) "Page Two"
    Paragraph "Even page breaks are supported!"
    "#);
}

// Lists

#[test]
fn nested_lists_follow_indentation() {
    let doc = parse_checked("- a\n  - b\n    - c\n  - d\n- e\n");
    insta::assert_snapshot!(outline(&doc), @r#"
    List(-)
      Item "a"
        List(-)
          Item "b"
            List(-)
              Item "c"
          Item "d"
      Item "e"
    "#);
}

#[test]
fn marker_change_starts_a_new_list() {
    let doc = parse_checked("- a\n* b\n+ c\n");
    insta::assert_snapshot!(outline(&doc), @r#"
    List(-)
      Item "a"
    List(*)
      Item "b"
    List(+)
      Item "c"
    "#);
}

#[test]
fn indented_line_continues_item() {
    let doc = parse_checked("- first\n  second\nafter\n");
    insta::assert_snapshot!(outline(&doc), @r#"
    List(-)
      Item "first\nsecond"
    Paragraph "after"
    "#);
}

#[test]
fn blank_line_ends_list() {
    let doc = parse_checked("- a\n\n- b\n");
    assert_eq!(doc.roots().len(), 2);
}

#[test]
fn bare_marker_is_an_empty_item() {
    let doc = parse_checked("-\n");
    insta::assert_snapshot!(outline(&doc), @r#"
    List(-)
      Item
    "#);
}

// Quotes

#[test]
fn quotes_nest_by_depth() {
    let doc = parse_checked("> a\n>\n> b\n> > c\n> d\n");
    insta::assert_snapshot!(outline(&doc), @r#"
    Quote
      Paragraph "a"
      Paragraph "b"
      Quote
        Paragraph "c"
      Paragraph "d"
    "#);
}

#[test]
fn quoted_list() {
    let doc = parse_checked("> - a\n> - b\n");
    insta::assert_snapshot!(outline(&doc), @r#"
    Quote
      List(-)
        Item "a"
        Item "b"
    "#);
}

#[test]
fn blank_line_closes_quote() {
    let doc = parse_checked("> a\n\n> b\n");
    assert_eq!(doc.roots().len(), 2);
    for root in doc.roots() {
        assert_eq!(doc.kind(*root), Ok(&BlockKind::BlockQuote));
    }
}

// Fences

#[test]
fn fenced_code_is_raw() {
    let doc = parse_checked("```js\nlet a = **b**;\n# not a heading\n\n```\nafter\n");
    insta::assert_snapshot!(outline(&doc), @r#"
    Code(Backticks "js") "let a = **b**;\n# not a heading\n"
    Paragraph "after"
    "#);
}

#[test]
fn shorter_fence_does_not_close() {
    let doc = parse_checked("````\n```\n````\n");
    insta::assert_snapshot!(outline(&doc), @r#"
    Code(Backticks "") "```"
    "#);
}

#[test]
fn unterminated_fence_runs_to_end() {
    let doc = parse_checked("~~~\nraw *text*");
    insta::assert_snapshot!(outline(&doc), @r#"
    Code(Tildes "") "raw *text*"
    "#);
}

#[test]
fn fence_inside_quote() {
    let doc = parse_checked("> ```\n> > kept\n> ```\n");
    insta::assert_snapshot!(outline(&doc), @r#"
    Quote
      Code(Backticks "") "> kept"
    "#);
}

// Headings, breaks and paragraphs

#[test]
fn heading_rules() {
    let doc = parse_checked("#x\n####### seven\n###### six\n#\n");
    insta::assert_snapshot!(outline(&doc), @r##"
    Paragraph "#x\n####### seven"
    Heading(6) "six"
    Heading(1)
    "##);
}

#[test]
fn thematic_break_variants() {
    let doc = parse_checked("***\n- - -\n___\n");
    let kinds: Vec<_> = doc
        .roots()
        .iter()
        .map(|r| doc.kind(*r).cloned())
        .collect();
    assert_eq!(kinds, vec![Ok(BlockKind::ThematicBreak); 3]);
}

#[test]
fn escaped_block_markers_stay_text() {
    let doc = parse_checked("\\# not a heading\n\\- not an item\n\\> not a quote\n");
    insta::assert_snapshot!(outline(&doc), @r##"
    Paragraph "# not a heading\n- not an item\n> not a quote"
    "##);
}

#[test]
fn paragraph_lines_are_trimmed() {
    let doc = parse_checked("   padded   \n\tnext\n");
    insta::assert_snapshot!(outline(&doc), @r#"
    Paragraph "padded\nnext"
    "#);
}

#[test]
fn heading_interrupts_paragraph() {
    let doc = parse_checked("text\n## Title\n");
    assert_eq!(doc.roots().len(), 2);
    assert_eq!(
        doc.kind(doc.roots()[1]),
        Ok(&BlockKind::Heading(HeadingLevel::H2))
    );
}

// Degenerate input

#[test]
fn empty_document() {
    assert!(parse_checked("").is_blank());
}

#[test]
fn blank_lines_only() {
    assert!(parse_checked("\n\n   \n").is_blank());
}

#[test]
fn windows_line_endings() {
    let doc = parse_checked("# T\r\n\r\nbody\r\n");
    insta::assert_snapshot!(outline(&doc), @r#"
    Heading(1) "T"
    Paragraph "body"
    "#);
}
