//! Axis: selects the packing direction of a stack.
//!
//! The stack algorithm is written once against "main" and "cross"
//! components; the vertical case is the transpose of the horizontal one.

use super::{SizedVector2, Vector2};

/// Packing direction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Axis {
    /// Children are placed left to right.
    #[default]
    Horizontal,
    /// Children are placed top to bottom.
    Vertical,
}

impl Axis {
    /// The other axis.
    #[inline]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Component of a point along this axis.
    #[inline]
    pub const fn of(self, v: Vector2) -> f32 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    /// Component of an extent along this axis.
    #[inline]
    pub const fn extent(self, s: SizedVector2) -> f32 {
        match self {
            Self::Horizontal => s.width,
            Self::Vertical => s.height,
        }
    }

    /// Build a point from main/cross components.
    #[inline]
    pub const fn point(self, main: f32, cross: f32) -> Vector2 {
        match self {
            Self::Horizontal => Vector2::new(main, cross),
            Self::Vertical => Vector2::new(cross, main),
        }
    }

    /// Build an extent from main/cross components.
    #[inline]
    pub const fn size(self, main: f32, cross: f32) -> SizedVector2 {
        match self {
            Self::Horizontal => SizedVector2::new(main, cross),
            Self::Vertical => SizedVector2::new(cross, main),
        }
    }
}
