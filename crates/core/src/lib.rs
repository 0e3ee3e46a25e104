//! Piece model - pure, deterministic, and testable
//!
//! This crate holds the geometry and state transitions of a single falling-block
//! piece, plus the one-slot holder used for the "hold piece" mechanic. It knows
//! nothing about the board: every move that needs checking takes a validator
//! closure supplied by the caller.
//!
//! # Module Structure
//!
//! - [`piece`]: [`Pytromino`] storage and the validated transform engine
//! - [`factory`]: canonical geometry and colors for the seven shapes
//! - [`holder`]: single-slot container gated open/closed
//! - [`snapshot`]: owned read-only view for renderers and observers
//! - [`error`]: error type shared by the modules above
//!
//! # Example
//!
//! ```
//! use pytromino_core::{pytromino_factory, Pytromino};
//! use pytromino_types::{Point, ShapeType};
//!
//! let mut piece = pytromino_factory(ShapeType::T);
//! piece.place_at(Point::new(4.0, 1.0));
//!
//! // A validator bound to a 10-wide board.
//! let in_bounds = |p: Point| p.x >= 0.0 && p.x < 10.0 && p.y >= 0.0 && p.y < 20.0;
//!
//! assert!(piece.try_apply(Pytromino::shift_down_by(1), false, in_bounds));
//! assert!(piece.try_rotate_cw(in_bounds));
//! // Pushing past the left wall is rejected and leaves the piece where it was.
//! let before = piece.blocks();
//! assert!(!piece.try_apply(Pytromino::shift_left_by(10), false, in_bounds));
//! assert_eq!(piece.blocks(), before);
//! ```

pub mod error;
pub mod factory;
pub mod holder;
pub mod piece;
pub mod snapshot;

pub use pytromino_types as types;

// Re-export commonly used types for convenience
pub use error::{PytrominoError, Result};
pub use factory::{
    pytromino_factory, pytromino_factory_with, pytromino_from_tag, shape_geometry,
};
pub use holder::Holder;
pub use piece::Pytromino;
pub use snapshot::PieceSnapshot;
