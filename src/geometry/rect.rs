//! Rect: a positioned extent in layout units, plus its terminal-cell snap.

use super::{SizedVector2, Vector2};

/// A rectangle defined by its top-left corner and size.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub position: Vector2,
    /// Extent.
    pub size: SizedVector2,
}

impl Rect {
    /// Zero-sized rectangle at the origin.
    pub const ZERO: Self = Self::new(Vector2::ZERO, SizedVector2::ZERO);

    /// Create a new rectangle.
    #[inline]
    pub const fn new(position: Vector2, size: SizedVector2) -> Self {
        Self { position, size }
    }

    /// Create a rectangle from raw components.
    #[inline]
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Vector2::new(x, y), SizedVector2::new(width, height))
    }

    /// Create a rectangle covering a screen of the given size.
    #[inline]
    pub const fn from_size(size: SizedVector2) -> Self {
        Self::new(Vector2::ZERO, size)
    }

    /// Area.
    #[inline]
    pub fn area(&self) -> f32 {
        self.size.width * self.size.height
    }

    /// True when either dimension is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f32 {
        self.position.x + self.size.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.height
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.position.x
            && point.x < self.right()
            && point.y >= self.position.y
            && point.y < self.bottom()
    }

    /// Check if this rectangle intersects with another.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.position.x < other.right()
            && self.right() > other.position.x
            && self.position.y < other.bottom()
            && self.bottom() > other.position.y
    }

    /// Shrink by `bevel` on every side. Never produces a negative extent.
    #[inline]
    #[must_use]
    pub fn inset(&self, bevel: Vector2) -> Self {
        Self::new(
            self.position + bevel,
            (self.size - bevel * 2.0).floor_zero(),
        )
    }

    /// Split into left and right parts at a column offset.
    pub fn split_horizontal(&self, at: f32) -> (Self, Self) {
        let at = at.clamp(0.0, self.size.width.max(0.0));
        (
            Self::from_xywh(self.position.x, self.position.y, at, self.size.height),
            Self::from_xywh(
                self.position.x + at,
                self.position.y,
                self.size.width - at,
                self.size.height,
            ),
        )
    }

    /// Split into top and bottom parts at a row offset.
    pub fn split_vertical(&self, at: f32) -> (Self, Self) {
        let at = at.clamp(0.0, self.size.height.max(0.0));
        (
            Self::from_xywh(self.position.x, self.position.y, self.size.width, at),
            Self::from_xywh(
                self.position.x,
                self.position.y + at,
                self.size.width,
                self.size.height - at,
            ),
        )
    }

    /// Snap to whole terminal cells.
    ///
    /// Edges are rounded independently so adjacent rectangles stay
    /// adjacent after snapping.
    pub fn to_cells(&self) -> CellRect {
        let left = to_cell(self.position.x);
        let top = to_cell(self.position.y);
        let right = to_cell(self.right()).max(left);
        let bottom = to_cell(self.bottom()).max(top);
        CellRect::new(left, top, right - left, bottom - top)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_cell(v: f32) -> u16 {
    v.round().clamp(0.0, f32::from(u16::MAX)) as u16
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect({}, {} {}x{})",
            self.position.x, self.position.y, self.size.width, self.size.height
        )
    }
}

/// A rectangle in whole terminal cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellRect {
    /// Column of the top-left corner.
    pub x: u16,
    /// Row of the top-left corner.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl CellRect {
    /// Create a new cell rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Check if the rectangle covers no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Debug for CellRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CellRect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}
