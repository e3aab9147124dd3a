//! Vector2 and SizedVector2: plain 2D value types.
//!
//! Both are `Copy` values with component-wise arithmetic. `Vector2` is a
//! point or offset, `SizedVector2` is an extent (width, height). Zero in a
//! min/max constraint means "unconstrained".

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A 2D point or offset.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component (grows downward).
    pub y: f32,
}

impl Vector2 {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Same value on both axes.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x.mul_add(other.x, self.y * other.y)
    }
}

impl std::fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector2({}, {})", self.x, self.y)
    }
}

impl Add for Vector2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<SizedVector2> for Vector2 {
    type Output = Self;

    /// Offset a point by an extent (e.g. the far corner of a rectangle).
    #[inline]
    fn add(self, rhs: SizedVector2) -> Self {
        Self::new(self.x + rhs.width, self.y + rhs.height)
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vector2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;

    #[inline]
    fn mul(self, v: Vector2) -> Vector2 {
        v * self
    }
}

impl From<(f32, f32)> for Vector2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<SizedVector2> for Vector2 {
    #[inline]
    fn from(size: SizedVector2) -> Self {
        Self::new(size.width, size.height)
    }
}

/// A 2D extent.
///
/// Exposes `x()`/`y()` aliases so it can be used wherever a plain
/// vector is expected.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct SizedVector2 {
    /// Extent along the horizontal axis.
    pub width: f32,
    /// Extent along the vertical axis.
    pub height: f32,
}

impl SizedVector2 {
    /// Zero extent. As a constraint this means "unconstrained".
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new extent.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Alias for `width`.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.width
    }

    /// Alias for `height`.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.height
    }

    /// Component-wise maximum.
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Clamp both components to be non-negative.
    #[inline]
    #[must_use]
    pub fn floor_zero(self) -> Self {
        self.max(Self::ZERO)
    }

    /// True when both components are zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.width.mul_add(other.width, self.height * other.height)
    }
}

impl std::fmt::Debug for SizedVector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Add for SizedVector2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl Sub for SizedVector2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.width - rhs.width, self.height - rhs.height)
    }
}

impl Sub<Vector2> for SizedVector2 {
    type Output = Self;

    /// Shrink an extent by a per-axis inset.
    #[inline]
    fn sub(self, rhs: Vector2) -> Self {
        Self::new(self.width - rhs.x, self.height - rhs.y)
    }
}

impl Neg for SizedVector2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.width, -self.height)
    }
}

impl Mul<f32> for SizedVector2 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.width * scalar, self.height * scalar)
    }
}

impl Mul<SizedVector2> for f32 {
    type Output = SizedVector2;

    #[inline]
    fn mul(self, v: SizedVector2) -> SizedVector2 {
        v * self
    }
}

impl From<(f32, f32)> for SizedVector2 {
    #[inline]
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

impl From<Vector2> for SizedVector2 {
    #[inline]
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 5.0);

        assert_eq!(a + b, Vector2::new(4.0, 7.0));
        assert_eq!(b - a, Vector2::new(2.0, 3.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        assert!((a.dot(b) - 13.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_sized_vector_aliases() {
        let s = SizedVector2::new(80.0, 24.0);
        assert!((s.x() - 80.0).abs() < f32::EPSILON);
        assert!((s.y() - 24.0).abs() < f32::EPSILON);
        assert_eq!(Vector2::from(s), Vector2::new(80.0, 24.0));
    }

    #[test]
    fn test_sized_vector_inset_and_floor() {
        let s = SizedVector2::new(10.0, 4.0) - Vector2::splat(3.0) * 2.0;
        assert_eq!(s, SizedVector2::new(4.0, -2.0));
        assert_eq!(s.floor_zero(), SizedVector2::new(4.0, 0.0));
        assert!(SizedVector2::ZERO.is_zero());
    }

    #[test]
    fn test_point_plus_extent() {
        let corner = Vector2::new(5.0, 5.0) + SizedVector2::new(10.0, 20.0);
        assert_eq!(corner, Vector2::new(15.0, 25.0));
    }
}
