//! Piece module - block storage and the validated transform engine
//!
//! A [`Pytromino`] is four block coordinates plus a rotation center. Before it is
//! placed the coordinates are offsets from the reference block at (0, 0); after
//! [`Pytromino::place_at`] they are absolute board coordinates.
//!
//! Movement is expressed as a coordinate transform (`Fn(Point) -> Point`) built by
//! one of the generators ([`Pytromino::shift_down_by`], [`Pytromino::rotation_cw`],
//! ...) and committed with [`Pytromino::try_apply`], which checks every moved block
//! against a caller-supplied validator before touching any state.

use arrayvec::ArrayVec;
use log::{debug, trace};

use crate::error::{PytrominoError, Result};
use crate::types::{Point, Rgb, ShapeType, PIECE_BLOCKS};

/// Block coordinates of one piece
pub type Blocks = [Point; PIECE_BLOCKS];

/// Rotate `p` 90° clockwise (screen axes, y down) about `center`
#[inline]
fn rotate_90_cw(center: Point, p: Point) -> Point {
    Point::new(center.y - p.y + center.x, p.x - center.x + center.y)
}

/// A four-block piece
#[derive(Debug, Clone, PartialEq)]
pub struct Pytromino {
    blocks: Blocks,
    color: Rgb,
    shape: ShapeType,
    /// Relative to the reference block; follows the piece on every
    /// non-rotation transform
    rotation_center: Point,
    placed: bool,
}

impl Pytromino {
    /// Create an unplaced piece from block offsets.
    ///
    /// Exactly one offset must be the (0, 0) reference block.
    pub fn new(
        blocks: Blocks,
        color: Rgb,
        shape: ShapeType,
        rotation_center: Point,
    ) -> Result<Self> {
        let references = blocks.iter().filter(|&&b| b == Point::ORIGIN).count();
        if references != 1 {
            return Err(PytrominoError::ReferenceBlock(references));
        }

        Ok(Self {
            blocks,
            color,
            shape,
            rotation_center,
            placed: false,
        })
    }

    /// Rotate a single point 90° clockwise about this piece's rotation center
    ///
    /// ```
    /// use pytromino_core::pytromino_factory;
    /// use pytromino_types::{Point, ShapeType};
    ///
    /// let t = pytromino_factory(ShapeType::T);
    /// assert_eq!(t.rotate_block_90_cw(Point::new(-1.0, 0.0)), Point::new(0.0, -1.0));
    /// assert_eq!(t.rotate_block_90_cw(Point::new(0.0, 0.0)), Point::new(0.0, 0.0));
    /// assert_eq!(t.rotate_block_90_cw(Point::new(1.0, 0.0)), Point::new(0.0, 1.0));
    /// ```
    pub fn rotate_block_90_cw(&self, p: Point) -> Point {
        rotate_90_cw(self.rotation_center, p)
    }

    /// Clockwise rotation transform about the current center.
    ///
    /// The closure captures the center by value, so it can be handed straight to
    /// [`Pytromino::try_apply`] on the same piece.
    pub fn rotation_cw(&self) -> impl Fn(Point) -> Point + Copy {
        let center = self.rotation_center;
        move |p| rotate_90_cw(center, p)
    }

    /// Blocks matching `pred`, in storage order
    pub fn filter_blocks<F>(&self, pred: F) -> ArrayVec<Point, PIECE_BLOCKS>
    where
        F: Fn(Point) -> bool,
    {
        self.blocks.iter().copied().filter(|&b| pred(b)).collect()
    }

    /// Transform moving a point `steps` rows down
    pub fn shift_down_by(steps: i32) -> impl Fn(Point) -> Point + Copy {
        let dy = steps as f64;
        move |p| Point::new(p.x, p.y + dy)
    }

    /// Transform moving a point `steps` columns left
    pub fn shift_left_by(steps: i32) -> impl Fn(Point) -> Point + Copy {
        let dx = steps as f64;
        move |p| Point::new(p.x - dx, p.y)
    }

    /// Transform moving a point `steps` columns right
    pub fn shift_right_by(steps: i32) -> impl Fn(Point) -> Point + Copy {
        let dx = steps as f64;
        move |p| Point::new(p.x + dx, p.y)
    }

    /// Apply `transform` to every block, committing only if every result passes
    /// `validator`.
    ///
    /// On success the blocks are replaced in their original order, and unless
    /// `is_rotation` is set the rotation center is moved by the same transform.
    /// On failure nothing changes and `false` is returned.
    pub fn try_apply<T, V>(&mut self, transform: T, is_rotation: bool, validator: V) -> bool
    where
        T: Fn(Point) -> Point,
        V: Fn(Point) -> bool,
    {
        let mut next = self.blocks;
        for slot in next.iter_mut() {
            let moved = transform(*slot);
            if !validator(moved) {
                trace!(
                    "{:?}: transform rejected at ({}, {})",
                    self.shape,
                    moved.x,
                    moved.y
                );
                return false;
            }
            *slot = moved;
        }

        if !is_rotation {
            self.rotation_center = transform(self.rotation_center);
        }
        self.blocks = next;
        true
    }

    /// [`Pytromino::try_apply`] with a validator that accepts everything
    pub fn apply<T>(&mut self, transform: T, is_rotation: bool) -> bool
    where
        T: Fn(Point) -> Point,
    {
        self.try_apply(transform, is_rotation, |_| true)
    }

    /// Validated clockwise rotation about the current center
    pub fn try_rotate_cw<V>(&mut self, validator: V) -> bool
    where
        V: Fn(Point) -> bool,
    {
        let rotate = self.rotation_cw();
        self.try_apply(rotate, true, validator)
    }

    /// Distinct rows spanned by the blocks, in first-seen order
    pub fn occupied_rows(&self) -> ArrayVec<f64, PIECE_BLOCKS> {
        let mut rows = ArrayVec::new();
        for b in &self.blocks {
            if !rows.contains(&b.y) {
                rows.push(b.y);
            }
        }
        rows
    }

    /// Move the piece onto the board at `coordinate`. Only the first call has
    /// any effect; later calls are silently ignored.
    pub fn place_at(&mut self, coordinate: Point) {
        if self.placed {
            return;
        }
        self.apply(move |p| Point::new(p.x + coordinate.x, p.y + coordinate.y), false);
        self.placed = true;
        debug!("{:?} placed at ({}, {})", self.shape, coordinate.x, coordinate.y);
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Copy of the current block coordinates
    pub fn blocks(&self) -> Blocks {
        self.blocks
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape
    }

    pub fn rotation_center(&self) -> Point {
        self.rotation_center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: [(f64, f64); 4]) -> Blocks {
        raw.map(Point::from)
    }

    fn t_piece() -> Pytromino {
        Pytromino::new(
            pts([(0.0, 0.0), (0.0, -1.0), (-1.0, 0.0), (1.0, 0.0)]),
            Rgb(146, 44, 140),
            ShapeType::T,
            Point::ORIGIN,
        )
        .unwrap()
    }

    #[test]
    fn test_new_requires_single_reference_block() {
        let none = Pytromino::new(
            pts([(1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)]),
            Rgb(0, 0, 0),
            ShapeType::I,
            Point::ORIGIN,
        );
        assert_eq!(none.unwrap_err(), PytrominoError::ReferenceBlock(0));

        let twice = Pytromino::new(
            pts([(0.0, 0.0), (0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]),
            Rgb(0, 0, 0),
            ShapeType::I,
            Point::ORIGIN,
        );
        assert_eq!(twice.unwrap_err(), PytrominoError::ReferenceBlock(2));
    }

    #[test]
    fn test_new_piece_is_unplaced() {
        let t = t_piece();
        assert!(!t.is_placed());
        assert_eq!(t.shape_type(), ShapeType::T);
        assert_eq!(t.color(), Rgb(146, 44, 140));
    }

    #[test]
    fn test_shift_generators() {
        let origin = Point::ORIGIN;
        assert_eq!(Pytromino::shift_down_by(1)(origin), Point::new(0.0, 1.0));
        assert_eq!(Pytromino::shift_down_by(3)(origin), Point::new(0.0, 3.0));
        assert_eq!(Pytromino::shift_left_by(1)(origin), Point::new(-1.0, 0.0));
        assert_eq!(Pytromino::shift_left_by(3)(origin), Point::new(-3.0, 0.0));
        assert_eq!(Pytromino::shift_right_by(1)(origin), Point::new(1.0, 0.0));
        assert_eq!(Pytromino::shift_right_by(3)(origin), Point::new(3.0, 0.0));
    }

    #[test]
    fn test_filter_blocks_keeps_order() {
        let s = Pytromino::new(
            pts([(0.0, 0.0), (-1.0, 0.0), (0.0, -1.0), (1.0, -1.0)]),
            Rgb(78, 183, 72),
            ShapeType::S,
            Point::ORIGIN,
        )
        .unwrap();

        let column = s.filter_blocks(|p| p.x == 0.0);
        assert_eq!(column.as_slice(), &[Point::new(0.0, 0.0), Point::new(0.0, -1.0)]);

        let mixed_sign = s.filter_blocks(|p| p.x * p.y < 0.0);
        assert_eq!(mixed_sign.as_slice(), &[Point::new(1.0, -1.0)]);
    }

    #[test]
    fn test_rejected_transform_changes_nothing() {
        let mut t = t_piece();
        let before = t.clone();

        let applied = t.try_apply(Pytromino::shift_right_by(1), false, |p| p.x > 0.0);
        assert!(!applied);
        assert_eq!(t, before);
    }

    #[test]
    fn test_accepted_shift_moves_center() {
        let mut t = t_piece();
        assert!(t.apply(Pytromino::shift_right_by(1), false));
        assert_eq!(
            t.blocks(),
            pts([(1.0, 0.0), (1.0, -1.0), (0.0, 0.0), (2.0, 0.0)])
        );
        assert_eq!(t.rotation_center(), Point::new(1.0, 0.0));
    }

    #[test]
    fn test_rotation_keeps_center() {
        let mut i = Pytromino::new(
            pts([(0.0, 0.0), (-1.0, 0.0), (1.0, 0.0), (2.0, 0.0)]),
            Rgb(43, 172, 226),
            ShapeType::I,
            Point::new(0.5, 0.5),
        )
        .unwrap();

        assert!(i.try_rotate_cw(|_| true));
        assert_eq!(
            i.blocks(),
            pts([(1.0, 0.0), (1.0, -1.0), (1.0, 1.0), (1.0, 2.0)])
        );
        assert_eq!(i.rotation_center(), Point::new(0.5, 0.5));
    }

    #[test]
    fn test_validator_sees_every_candidate_before_commit() {
        use std::cell::RefCell;

        let mut t = t_piece();
        let seen = RefCell::new(Vec::new());
        let original = t.blocks();

        let ok = t.try_apply(Pytromino::shift_down_by(2), false, |p| {
            seen.borrow_mut().push(p);
            true
        });
        assert!(ok);

        let expected: Vec<Point> = original.iter().map(|p| Point::new(p.x, p.y + 2.0)).collect();
        assert_eq!(*seen.borrow(), expected);
    }

    #[test]
    fn test_occupied_rows_are_distinct() {
        let t = t_piece();
        let rows = t.occupied_rows();
        assert_eq!(rows.len(), 2);
        assert!(rows.contains(&0.0));
        assert!(rows.contains(&-1.0));
    }

    #[test]
    fn test_place_at_only_once() {
        let mut t = t_piece();
        t.place_at(Point::new(4.0, 1.0));
        let placed = t.blocks();
        assert!(t.is_placed());
        assert_eq!(t.rotation_center(), Point::new(4.0, 1.0));

        t.place_at(Point::new(9.0, 9.0));
        assert_eq!(t.blocks(), placed);
        assert_eq!(t.rotation_center(), Point::new(4.0, 1.0));
    }

    #[test]
    fn test_blocks_returns_a_copy() {
        let t = t_piece();
        let mut copy = t.blocks();
        copy[0] = Point::new(99.0, 99.0);
        assert_eq!(t.blocks()[0], Point::ORIGIN);
    }
}
