//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! 1. **Line classification** (`classify`): each line becomes a `LineClass`
//!    holding local facts (quote depth, indentation, blank status, opener).
//! 2. **Block construction** (`builder`): a `BlockBuilder` keeps a quote stack,
//!    a list stack and the open leaf, and appends blocks to a `Document` as
//!    they close.
//!
//! Fenced code blocks are raw zones: nothing inside them is classified as a
//! block opener or parsed for inline marks.

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use open::{BlockOpen, try_open_leaf};
