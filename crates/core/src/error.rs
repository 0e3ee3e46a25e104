//! Error type for piece construction and the hold slot.
//!
//! A rejected move is not an error: transforms report it through a `bool`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PytrominoError {
    /// The factory was asked for a shape tag outside `I O L S T J Z`
    #[error("unknown shape type: {0:?}")]
    InvalidShapeType(String),

    /// Block offsets must contain the (0, 0) reference block exactly once
    #[error("expected exactly one reference block at (0, 0), found {0}")]
    ReferenceBlock(usize),

    /// `store` was called while the holder gate is closed
    #[error("holder is closed")]
    HolderClosed,
}

pub type Result<T> = std::result::Result<T, PytrominoError>;
