//! Grid4: four per-side extents (west, east, north, south).

use std::ops::{Add, Mul, Sub};

/// Four scalar extents, one per side of a rectangle.
///
/// Used for border-region minimums and any other per-side quantity.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Grid4 {
    /// Left side.
    pub west: f32,
    /// Right side.
    pub east: f32,
    /// Top side.
    pub north: f32,
    /// Bottom side.
    pub south: f32,
}

impl Grid4 {
    /// All sides zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new grid. Argument order is west, east, north, south.
    #[inline]
    pub const fn new(west: f32, east: f32, north: f32, south: f32) -> Self {
        Self { west, east, north, south }
    }

    /// Same value on all four sides.
    #[inline]
    pub const fn uniform(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Combined west + east extent.
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.west + self.east
    }

    /// Combined north + south extent.
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.north + self.south
    }

    /// Dot product over all four sides.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.west * other.west
            + self.east * other.east
            + self.north * other.north
            + self.south * other.south
    }
}

impl std::fmt::Debug for Grid4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Grid4(w={}, e={}, n={}, s={})",
            self.west, self.east, self.north, self.south
        )
    }
}

impl Add for Grid4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.west + rhs.west,
            self.east + rhs.east,
            self.north + rhs.north,
            self.south + rhs.south,
        )
    }
}

impl Sub for Grid4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.west - rhs.west,
            self.east - rhs.east,
            self.north - rhs.north,
            self.south - rhs.south,
        )
    }
}

impl Mul<f32> for Grid4 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(
            self.west * scalar,
            self.east * scalar,
            self.north * scalar,
            self.south * scalar,
        )
    }
}

impl Mul<Grid4> for f32 {
    type Output = Grid4;

    #[inline]
    fn mul(self, grid: Grid4) -> Grid4 {
        grid * self
    }
}
