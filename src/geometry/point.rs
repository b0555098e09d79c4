use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A position (or direction) in three-dimensional world space.
///
/// The horizontal plane is `(x, z)`, with `y` pointing up.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ZERO: Point3 = Point3::new(0.0, 0.0, 0.0);
    pub const UP: Point3 = Point3::new(0.0, 1.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }

    #[inline]
    pub fn dot(&self, other: Point3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// The euclidean magnitude of the vector.
    #[inline]
    pub fn length(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    #[inline]
    pub fn distance(&self, other: Point3) -> f64 {
        (other - *self).length()
    }

    /// Returns the unit vector in the same direction, or `None`
    /// for a zero-length vector which has no direction.
    pub fn normalized(&self) -> Option<Point3> {
        let length = self.length();
        if length <= f64::EPSILON {
            return None;
        }

        Some(*self * length.recip())
    }

    /// Linearly interpolates towards `other`, where `t = 0` is `self`.
    #[inline]
    pub fn lerp(&self, other: Point3, t: f64) -> Point3 {
        *self + (other - *self) * t
    }

    /// Raises the point vertically by `offset`.
    #[inline]
    pub fn lifted(&self, offset: f64) -> Point3 {
        Point3::new(self.x, self.y + offset, self.z)
    }

    /// Projects the point onto the horizontal `(x, z)` plane.
    #[inline]
    pub fn horizontal(&self) -> geo::Point {
        geo::Point::new(self.x, self.z)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Whether two points coincide within `tolerance` on every axis.
    pub fn coincides(&self, other: Point3, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Point3::new(x, y, z)
    }
}

impl From<Point3> for [f64; 3] {
    fn from(value: Point3) -> Self {
        [value.x, value.y, value.z]
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Self::Output {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Self::Output {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, rhs: f64) -> Self::Output {
        Point3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Point3 {
    type Output = Point3;

    fn neg(self) -> Self::Output {
        Point3::new(-self.x, -self.y, -self.z)
    }
}
