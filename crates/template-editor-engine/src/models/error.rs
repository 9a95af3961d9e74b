use thiserror::Error;

use super::document::BlockId;

/// Errors raised by document model mutations.
///
/// Every mutation validates before it touches the arena, so an `Err` always
/// means the document is exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("block {0:?} does not exist in this document")]
    UnknownBlock(BlockId),

    #[error("invalid structure: {reason}")]
    InvalidStructure { reason: &'static str },

    #[error("offset {offset} is out of range for block {block:?} of length {len}")]
    OffsetOutOfRange {
        block: BlockId,
        offset: usize,
        len: usize,
    },
}

impl ModelError {
    pub(crate) fn invalid(reason: &'static str) -> Self {
        Self::InvalidStructure { reason }
    }
}

pub type ModelResult<T> = Result<T, ModelError>;
