//! # Markdown Parsing
//!
//! `parse` turns markdown text into a [`Document`]. Block structure is found
//! line by line (see [`blocks`]), then each leaf's text goes through the
//! inline parser (see [`inline`]).
//!
//! Parsing is total: malformed input degrades to paragraph text and never
//! produces an error.

pub mod blocks;
pub mod inline;
pub mod rope;

#[cfg(test)]
mod tests;

use log::debug;
use xi_rope::Rope;

use crate::models::Document;
use blocks::{BlockBuilder, MarkdownLineClassifier};
use rope::lines_with_spans;

pub fn parse(text: &str) -> Document {
    parse_rope(&Rope::from(text))
}

pub fn parse_rope(rope: &Rope) -> Document {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    let doc = builder.finish();
    debug!(
        "parsed {} bytes into {} top-level block(s)",
        rope.len(),
        doc.roots().len()
    );
    doc
}
