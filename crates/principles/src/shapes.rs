//! Liskov substitution: rectangles and squares.
//!
//! A square is not modelled as a rectangle whose setters secretly keep the
//! sides equal. That would break any code written against rectangles
//! (set width 3, height 4, expect area 12). Instead each shape is its own
//! variant with its own constructor, and only the read-only `area` is
//! shared.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rectangle {
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Widened to `u64`, so any pair of `u32` sides fits
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Width: {}, height: {}", self.width, self.height)
    }
}

/// All sides equal. The side is private so the invariant can't be broken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square {
    side: u32,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Self { side }
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    /// Resize; width and height change together
    pub fn set_side(&mut self, side: u32) {
        self.side = side;
    }

    pub fn area(&self) -> u64 {
        u64::from(self.side) * u64::from(self.side)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Width: {}, height: {}", self.side, self.side)
    }
}

/// Closed set of shapes sharing a read-only area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangle(Rectangle),
    Square(Square),
}

impl Shape {
    pub fn area(&self) -> u64 {
        match self {
            Shape::Rectangle(r) => r.area(),
            Shape::Square(s) => s.area(),
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            Shape::Rectangle(r) => r.width,
            Shape::Square(s) => s.side(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Shape::Rectangle(r) => r.height,
            Shape::Square(s) => s.side(),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<Square> for Shape {
    fn from(s: Square) -> Self {
        Shape::Square(s)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Rectangle(r) => fmt::Display::fmt(r, f),
            Shape::Square(s) => fmt::Display::fmt(s, f),
        }
    }
}

/// Set width 3 and height 4, then report `(expected, actual)` area.
///
/// Takes a `Rectangle` only: a square cannot be passed here, which is
/// exactly what keeps the expectation valid.
pub fn set_and_measure(rectangle: &mut Rectangle) -> (u64, u64) {
    rectangle.width = 3;
    rectangle.height = 4;
    (12, rectangle.area())
}
