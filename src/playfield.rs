//! Playfield - the occupancy grid the demo validates moves against
//!
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges
//! 0..height (top to bottom). Cells are stored row-major in a flat vector.

use pytromino::core::Pytromino;
use pytromino::types::{Point, ShapeType};

pub type Cell = Option<ShapeType>;

#[derive(Debug, Clone, PartialEq)]
pub struct Playfield {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Playfield {
    pub fn new(width: u8, height: u8) -> Self {
        let (width, height) = (width as usize, height as usize);
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell at `p`, or None if out of bounds
    pub fn get(&self, p: Point) -> Option<Cell> {
        let (x, y) = p.cell();
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// In bounds and empty; this is the validator handed to piece transforms
    pub fn is_free(&self, p: Point) -> bool {
        matches!(self.get(p), Some(None))
    }

    /// Write the piece into the grid. Returns false, leaving the grid
    /// untouched, if any block is out of bounds or occupied.
    pub fn lock(&mut self, piece: &Pytromino) -> bool {
        let blocks = piece.blocks();
        if !blocks.iter().all(|&b| self.is_free(b)) {
            return false;
        }

        for b in blocks {
            let (x, y) = b.cell();
            if let Some(idx) = self.index(x, y) {
                self.cells[idx] = Some(piece.shape_type());
            }
        }
        true
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        let start = y * self.width;
        self.cells[start..start + self.width]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Clear a row and shift all rows above it down by one
    fn clear_row(&mut self, y: usize) {
        let width = self.width;
        for row in (1..=y).rev() {
            let src = (row - 1) * width;
            self.cells.copy_within(src..src + width, row * width);
        }
        for cell in &mut self.cells[..width] {
            *cell = None;
        }
    }

    /// Clear whichever of `rows` are full, returning how many were cleared.
    ///
    /// Rows are cleared top to bottom so that earlier shifts never move a row
    /// still waiting to be checked.
    pub fn clear_full_rows(&mut self, rows: &[f64]) -> usize {
        let mut candidates: Vec<usize> = rows
            .iter()
            .filter(|&&y| y >= 0.0)
            .map(|&y| y.round() as usize)
            .collect();
        candidates.sort_unstable();
        candidates.dedup();

        let mut cleared = 0;
        for y in candidates {
            if self.is_row_full(y) {
                self.clear_row(y);
                cleared += 1;
            }
        }
        cleared
    }

    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// One string per row, `.` for empty cells and the shape letter otherwise
    pub fn rows_ascii(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Some(shape) => shape.as_str().to_ascii_uppercase(),
                        None => ".".to_string(),
                    })
                    .collect()
            })
            .collect()
    }
}
