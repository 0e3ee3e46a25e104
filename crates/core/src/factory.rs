//! Factory module - canonical geometry for the seven shapes
//!
//! Offsets are relative to the reference block (0, 0), with `y` growing downward,
//! so a negative `y` sits one row above the reference block.
//!
//! | Shape | Offsets | Rotation center |
//! |-------|---------|-----------------|
//! | I | (0,0) (-1,0) (1,0) (2,0) | (0.5, 0.5) |
//! | O | (0,0) (0,-1) (1,-1) (1,0) | (0.5, -0.5) |
//! | L | (0,0) (-1,0) (1,0) (1,-1) | (0, 0) |
//! | S | (0,0) (-1,0) (0,-1) (1,-1) | (0, 0) |
//! | T | (0,0) (0,-1) (-1,0) (1,0) | (0, 0) |
//! | J | (0,0) (-1,-1) (-1,0) (1,0) | (0, 0) |
//! | Z | (0,0) (0,-1) (-1,-1) (1,0) | (0, 0) |

use crate::error::{PytrominoError, Result};
use crate::piece::{Blocks, Pytromino};
use crate::types::{Palette, Point, ShapeType};

const fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Block offsets and rotation center for a shape
pub fn shape_geometry(shape: ShapeType) -> (Blocks, Point) {
    match shape {
        ShapeType::I => ([p(0., 0.), p(-1., 0.), p(1., 0.), p(2., 0.)], p(0.5, 0.5)),
        ShapeType::O => ([p(0., 0.), p(0., -1.), p(1., -1.), p(1., 0.)], p(0.5, -0.5)),
        ShapeType::L => ([p(0., 0.), p(-1., 0.), p(1., 0.), p(1., -1.)], Point::ORIGIN),
        ShapeType::S => ([p(0., 0.), p(-1., 0.), p(0., -1.), p(1., -1.)], Point::ORIGIN),
        ShapeType::T => ([p(0., 0.), p(0., -1.), p(-1., 0.), p(1., 0.)], Point::ORIGIN),
        ShapeType::J => ([p(0., 0.), p(-1., -1.), p(-1., 0.), p(1., 0.)], Point::ORIGIN),
        ShapeType::Z => ([p(0., 0.), p(0., -1.), p(-1., -1.), p(1., 0.)], Point::ORIGIN),
    }
}

/// Build a fresh, unplaced piece colored from `palette`
pub fn pytromino_factory_with(shape: ShapeType, palette: &Palette) -> Pytromino {
    let (blocks, center) = shape_geometry(shape);
    match Pytromino::new(blocks, palette.color(shape), shape, center) {
        Ok(piece) => piece,
        // Every row of the table carries the reference block once.
        Err(err) => unreachable!("bad geometry for {:?}: {}", shape, err),
    }
}

/// Build a fresh, unplaced piece with the default palette
pub fn pytromino_factory(shape: ShapeType) -> Pytromino {
    pytromino_factory_with(shape, &Palette::default())
}

/// Build a piece from a one-letter tag such as `"T"`
pub fn pytromino_from_tag(tag: &str) -> Result<Pytromino> {
    ShapeType::from_str(tag)
        .map(pytromino_factory)
        .ok_or_else(|| PytrominoError::InvalidShapeType(tag.to_string()))
}
