//! # Inline Parsing
//!
//! Cursor-based parsing of a leaf block's text into [`InlineRun`]s.
//!
//! - **`kinds`**: inline constructs that own their delimiters (`CodeSpan`,
//!   `Emphasis`, `Escape`)
//! - **`cursor`**: `Cursor` for stepping through the text
//! - **`parser`**: `parse_inline()` with one `try_parse_*` helper per construct
//!
//! ## Raw zones
//!
//! Code spans suppress all other parsing inside them, and an escaped
//! character is always literal. Emphasis delimiters only open when a matching
//! closer exists further on, so unbalanced markers stay plain text.
//!
//! [`InlineRun`]: crate::models::InlineRun

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::parse_inline;
