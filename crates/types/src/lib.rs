//! Core types module - shared data structures and constants
//!
//! This module defines the plain data types used by the piece engine and by whatever
//! game loop drives it. Nothing here holds behavior beyond small conversions, so the
//! types can be handed to renderers, observers or serializers as-is.
//!
//! # Coordinates
//!
//! All coordinates use a single numeric type ([`Point`], `f64` components). Block
//! positions are always whole numbers, but rotation centers may sit on half cells
//! (the I and O pieces), and mixing the two in one type keeps the rotation
//! arithmetic uniform. Half-integers are exact in binary floating point, so the
//! 90° rotation identities hold without tolerance for the standard shapes.
//!
//! Axes follow screen order: `x` grows to the right, `y` grows downward.
//!
//! # Default Palette
//!
//! | Shape | Color | RGB |
//! |-------|-------|-----|
//! | I | Cyan | (43, 172, 226) |
//! | O | Yellow | (253, 225, 0) |
//! | L | Orange | (248, 150, 34) |
//! | S | Green | (78, 183, 72) |
//! | T | Purple | (146, 44, 140) |
//! | J | Blue | (0, 90, 157) |
//! | Z | Red | (238, 39, 51) |
//!
//! # Examples
//!
//! ```
//! use pytromino_types::{Palette, Point, Rgb, ShapeType};
//!
//! let shape = ShapeType::from_str("t").unwrap();
//! assert_eq!(shape, ShapeType::T);
//!
//! let palette = Palette::default();
//! assert_eq!(palette.color(shape), Rgb(146, 44, 140));
//!
//! let p = Point::from((2, -1));
//! assert_eq!(p, Point::new(2.0, -1.0));
//! ```

use serde::{Deserialize, Serialize};

/// Number of blocks in every piece
pub const PIECE_BLOCKS: usize = 4;

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// The seven tetromino shapes
///
/// The declaration order matches the order of [`ShapeType::ALL`] and the
/// palette table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    I,
    O,
    L,
    S,
    T,
    J,
    Z,
}

impl ShapeType {
    /// Every shape, in declaration order
    pub const ALL: [ShapeType; 7] = [
        ShapeType::I,
        ShapeType::O,
        ShapeType::L,
        ShapeType::S,
        ShapeType::T,
        ShapeType::J,
        ShapeType::Z,
    ];

    /// Parse a shape from its one-letter tag (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use pytromino_types::ShapeType;
    ///
    /// assert_eq!(ShapeType::from_str("i"), Some(ShapeType::I));
    /// assert_eq!(ShapeType::from_str("Z"), Some(ShapeType::Z));
    /// assert_eq!(ShapeType::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeType::I),
            "o" => Some(ShapeType::O),
            "l" => Some(ShapeType::L),
            "s" => Some(ShapeType::S),
            "t" => Some(ShapeType::T),
            "j" => Some(ShapeType::J),
            "z" => Some(ShapeType::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::I => "i",
            ShapeType::O => "o",
            ShapeType::L => "l",
            ShapeType::S => "s",
            ShapeType::T => "t",
            ShapeType::J => "j",
            ShapeType::Z => "z",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A 2D coordinate: a block cell or a rotation center
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The reference block position
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Compare with an absolute tolerance on each axis
    pub fn approx_eq(&self, other: Point, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    /// Nearest integer board cell `(column, row)`
    pub fn cell(&self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x as f64, y as f64)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Opaque RGB color triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Shape to color lookup supplied to the piece factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: [Rgb; 7],
}

impl Palette {
    pub fn color(&self, shape: ShapeType) -> Rgb {
        self.colors[shape.index()]
    }

    /// Return a copy of this palette with one shape recolored
    pub fn with_color(mut self, shape: ShapeType, color: Rgb) -> Self {
        self.colors[shape.index()] = color;
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [
                Rgb(43, 172, 226), // I cyan
                Rgb(253, 225, 0),  // O yellow
                Rgb(248, 150, 34), // L orange
                Rgb(78, 183, 72),  // S green
                Rgb(146, 44, 140), // T purple
                Rgb(0, 90, 157),   // J blue
                Rgb(238, 39, 51),  // Z red
            ],
        }
    }
}
