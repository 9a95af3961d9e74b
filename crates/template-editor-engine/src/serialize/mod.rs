//! # Markdown Serialization
//!
//! `serialize` writes a [`Document`] back to markdown such that parsing the
//! output yields the same document.
//!
//! - **`options`**: delimiter choices (`SerializeOptions`)
//! - **`inline`**: mark-stack emission of inline runs
//! - **`escape`**: backslash escaping of text and of line starts
//! - **`normalize`**: whitespace-insensitive comparison of markdown text
//!
//! Blocks are separated by one blank line. List items sit on consecutive
//! lines, with continuation lines and nested lists indented by the item's
//! content indent. Block quotes serialize their children and prefix every
//! line with `>`.

mod escape;
mod inline;
mod normalize;
mod options;

pub use normalize::{equivalent, normalize_whitespace};
pub use options::{ItalicDelimiter, SerializeOptions};

use crate::models::{BlockId, BlockKind, BlockNode, Document, FenceKind, ListMarker, inline as runs};
use crate::parsing::blocks::kinds::{BlockQuote, CodeFence, Heading, ListItem, ThematicBreak};

use self::escape::escape_line_starts;
use self::inline::{render_runs, serialize_runs};

/// Serializes with the default delimiters (`_italic_`, `**bold**`).
pub fn serialize(doc: &Document) -> String {
    serialize_with(doc, &SerializeOptions::default())
}

pub fn serialize_with(doc: &Document, options: &SerializeOptions) -> String {
    let body = Writer { doc, options }.blocks(doc.roots());
    if body.is_empty() {
        body
    } else {
        body + "\n"
    }
}

struct Writer<'a> {
    doc: &'a Document,
    options: &'a SerializeOptions,
}

impl Writer<'_> {
    fn blocks(&self, ids: &[BlockId]) -> String {
        ids.iter()
            .filter_map(|id| self.block(*id))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// `None` for blocks that leave no trace in markdown (empty paragraphs).
    fn block(&self, id: BlockId) -> Option<String> {
        let node = self.doc.block(id)?;
        match node.kind() {
            BlockKind::Paragraph => {
                let text = self.text(node);
                (!text.is_empty()).then_some(text)
            }
            BlockKind::Heading(level) => {
                let prefix = Heading::prefix(*level);
                let text = serialize_runs(node.runs(), self.options).replace('\n', " ");
                Some(if text.is_empty() {
                    prefix
                } else {
                    format!("{prefix} {text}")
                })
            }
            BlockKind::BlockQuote => Some(quote(&self.blocks(node.children()))),
            BlockKind::UnorderedList(marker) => Some(self.list(node.children(), *marker)),
            // only reachable for a detached item; lists write their own
            BlockKind::ListItem => Some(self.item(node, ListMarker::default())),
            BlockKind::CodeBlock { fence, info } => {
                Some(code_block(*fence, info, &runs::plain_text(node.runs())))
            }
            BlockKind::ThematicBreak => Some(ThematicBreak::CANONICAL.to_string()),
        }
    }

    fn text(&self, node: &BlockNode) -> String {
        escape_line_starts(&render_runs(node.runs(), self.options))
    }

    fn list(&self, items: &[BlockId], marker: ListMarker) -> String {
        items
            .iter()
            .filter_map(|id| self.doc.block(*id))
            .map(|item| self.item(item, marker))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn item(&self, node: &BlockNode, marker: ListMarker) -> String {
        let text = self.text(node);
        let mut lines = text.split('\n');
        let first = lines.next().unwrap_or_default();
        let mut out = if first.is_empty() {
            marker.as_char().to_string()
        } else {
            format!("{} {first}", marker.as_char())
        };
        let nested: Vec<String> = node
            .children()
            .iter()
            .filter_map(|id| self.block(*id))
            .collect();
        for line in lines.chain(nested.iter().flat_map(|n| n.split('\n'))) {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(&" ".repeat(ListItem::CONTENT_INDENT));
                out.push_str(line);
            }
        }
        out
    }
}

fn quote(inner: &str) -> String {
    if inner.is_empty() {
        return BlockQuote::PREFIX.to_string();
    }
    inner
        .split('\n')
        .map(|line| {
            if line.is_empty() {
                BlockQuote::PREFIX.to_string()
            } else {
                format!("{} {line}", BlockQuote::PREFIX)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn code_block(fence: FenceKind, info: &str, code: &str) -> String {
    let len = (CodeFence::longest_inner_run(fence, code) + 1).max(CodeFence::MIN_LEN);
    let marker = fence.as_char().to_string().repeat(len);
    // an info string starting with the fence character would lengthen the fence
    let sep = if info.starts_with(fence.as_char()) { " " } else { "" };
    if code.is_empty() {
        format!("{marker}{sep}{info}\n{marker}")
    } else {
        format!("{marker}{sep}{info}\n{code}\n{marker}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlockTree, HeadingLevel, InlineRun, Mark, MarkSet};
    use crate::parsing::parse;
    use pretty_assertions::assert_eq;

    fn doc(trees: Vec<BlockTree>) -> Document {
        Document::from_tree(trees).unwrap()
    }

    fn para(text: &str) -> BlockTree {
        BlockTree::text(BlockKind::Paragraph, text)
    }

    fn item(text: &str) -> BlockTree {
        BlockTree::text(BlockKind::ListItem, text)
    }

    fn list(items: Vec<BlockTree>) -> BlockTree {
        BlockTree::container(BlockKind::UnorderedList(ListMarker::Dash), items)
    }

    #[test]
    fn empty_document_is_empty_string() {
        assert_eq!(serialize(&Document::new()), "");
    }

    #[test]
    fn blocks_are_separated_by_blank_lines() {
        let d = doc(vec![
            BlockTree::text(BlockKind::Heading(HeadingLevel::H2), "Title"),
            para("body"),
            BlockTree::leaf(BlockKind::ThematicBreak, Vec::new()),
        ]);
        assert_eq!(serialize(&d), "## Title\n\nbody\n\n---\n");
    }

    #[test]
    fn empty_paragraphs_are_omitted() {
        let d = doc(vec![para("a"), para(""), para("b")]);
        assert_eq!(serialize(&d), "a\n\nb\n");
    }

    #[test]
    fn empty_heading_is_bare_marker() {
        let d = doc(vec![BlockTree::text(BlockKind::Heading(HeadingLevel::H3), "")]);
        assert_eq!(serialize(&d), "###\n");
    }

    #[test]
    fn heading_soft_breaks_become_spaces() {
        let d = doc(vec![BlockTree::text(BlockKind::Heading(HeadingLevel::H1), "a\nb")]);
        assert_eq!(serialize(&d), "# a b\n");
    }

    #[test]
    fn nested_list_layout() {
        let d = doc(vec![list(vec![
            item("a"),
            item("b\nmore").with_children(vec![list(vec![item("c")])]),
            item(""),
        ])]);
        assert_eq!(serialize(&d), "- a\n- b\n  more\n  - c\n-\n");
    }

    #[test]
    fn list_marker_is_preserved() {
        let d = doc(vec![BlockTree::container(
            BlockKind::UnorderedList(ListMarker::Plus),
            vec![item("x")],
        )]);
        assert_eq!(serialize(&d), "+ x\n");
    }

    #[test]
    fn quote_prefixes_every_line() {
        let d = doc(vec![BlockTree::container(
            BlockKind::BlockQuote,
            vec![para("one\ntwo"), para("three")],
        )]);
        assert_eq!(serialize(&d), "> one\n> two\n>\n> three\n");
    }

    #[test]
    fn empty_quote_is_bare_prefix() {
        let d = doc(vec![BlockTree::container(BlockKind::BlockQuote, Vec::new())]);
        assert_eq!(serialize(&d), ">\n");
    }

    #[test]
    fn list_inside_quote() {
        let d = doc(vec![BlockTree::container(
            BlockKind::BlockQuote,
            vec![list(vec![item("a"), item("b")])],
        )]);
        assert_eq!(serialize(&d), "> - a\n> - b\n");
    }

    #[test]
    fn code_block_fence_outgrows_content() {
        let d = doc(vec![BlockTree::text(
            BlockKind::CodeBlock {
                fence: FenceKind::Backticks,
                info: "md".to_string(),
            },
            "```\ninner\n```",
        )]);
        assert_eq!(serialize(&d), "````md\n```\ninner\n```\n````\n");
    }

    #[test]
    fn info_string_starting_with_fence_chars_stays_separate() {
        let src = "~~~ ~~~x\ncode\n~~~\n";
        let d = parse(src);
        assert_eq!(serialize(&d), src);
        assert_eq!(parse(&serialize(&d)), d);
    }

    #[test]
    fn empty_code_block() {
        let d = doc(vec![BlockTree::leaf(BlockKind::code_block(), Vec::new())]);
        assert_eq!(serialize(&d), "```\n```\n");
    }

    #[test]
    fn code_block_text_is_not_escaped() {
        let d = doc(vec![BlockTree::text(BlockKind::code_block(), "a * b # c")]);
        assert_eq!(serialize(&d), "```\na * b # c\n```\n");
    }

    #[test]
    fn paragraph_that_looks_like_blocks_is_escaped() {
        let d = doc(vec![para("# not\n- a list\n> nor a quote")]);
        assert_eq!(serialize(&d), "\\# not\n\\- a list\n\\> nor a quote\n");
    }

    #[test]
    fn code_span_spanning_lines_is_not_escaped() {
        let d = parse("`a\n``b`\n");
        let out = serialize(&d);
        assert_eq!(out, "`a\n``b`\n");
        assert_eq!(parse(&out), d);
    }

    #[test]
    fn item_text_that_looks_like_an_item_is_escaped() {
        let d = doc(vec![list(vec![item("- inner")])]);
        assert_eq!(serialize(&d), "- \\- inner\n");
    }

    #[test]
    fn asterisk_italic_option() {
        let d = doc(vec![BlockTree::leaf(
            BlockKind::Paragraph,
            vec![
                InlineRun::new("i", MarkSet::EMPTY.with(Mark::Italic)),
                InlineRun::new("b", MarkSet::EMPTY.with(Mark::Bold)),
            ],
        )]);
        let options = SerializeOptions {
            italic: ItalicDelimiter::Asterisk,
        };
        assert_eq!(serialize_with(&d, &options), "*i*__b__\n");
        assert_eq!(serialize(&d), "_i_**b**\n");
    }

    #[test]
    fn canonical_markdown_is_reproduced() {
        let src = "# Title\n\nSome **bold**, _italic_ and `code`.\n\n- a\n- b\n  - c\n\n> quote\n>\n> more\n\n---\n\n```js\nx\n```\n";
        assert_eq!(serialize(&parse(src)), src);
    }
}
