//! Block kinds that own their syntax.
//!
//! Delimiter constants and line recognizers live here, so both the parser and
//! the serializer agree on what a marker looks like.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceOpen};
pub use heading::Heading;
pub use list_item::ListItem;
pub use thematic_break::ThematicBreak;
