use serde::{Deserialize, Serialize};

use crate::piece::{Blocks, Pytromino};
use crate::types::{Point, Rgb, ShapeType};

/// Owned, serializable view of a piece for renderers and observers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub shape: ShapeType,
    pub color: Rgb,
    pub blocks: Blocks,
    pub rotation_center: Point,
    pub placed: bool,
}

impl From<&Pytromino> for PieceSnapshot {
    fn from(value: &Pytromino) -> Self {
        Self {
            shape: value.shape_type(),
            color: value.color(),
            blocks: value.blocks(),
            rotation_center: value.rotation_center(),
            placed: value.is_placed(),
        }
    }
}

impl PieceSnapshot {
    /// Integer board cells covered by the piece
    pub fn cells(&self) -> [(i32, i32); 4] {
        self.blocks.map(|b| b.cell())
    }
}
