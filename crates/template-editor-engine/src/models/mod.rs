//! The in-memory document model: a block tree of inline runs.

pub mod block;
pub mod document;
pub mod error;
pub mod inline;
pub mod selection;

pub use block::{BlockKind, FenceKind, HeadingLevel, ListMarker};
pub use document::{BlockId, BlockNode, BlockTree, Document};
pub use error::{ModelError, ModelResult};
pub use inline::{InlineRun, Mark, MarkSet};
pub use selection::{Position, Selection};
