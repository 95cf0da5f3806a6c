//! 3D coordinate triplet.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::precision;

/// Cartesian coordinate entity {X, Y, Z}.
/// Algebraic workhorse behind [`Pnt`](super::Pnt) and [`Dir`](super::Dir).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct XYZ {
    x: f64,
    y: f64,
    z: f64,
}

impl XYZ {
    /// The zero triplet (0, 0, 0).
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Creates a triplet from coordinates.
    #[inline]
    pub const fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the X coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y coordinate.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the Z coordinate.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns all coordinates as a tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Euclidean length of the triplet seen as a vector.
    #[inline]
    pub fn modulus(&self) -> f64 {
        self.square_modulus().sqrt()
    }

    /// Squared Euclidean length.
    #[inline]
    pub const fn square_modulus(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Component-wise equality within a tolerance.
    pub fn is_equal(&self, other: &XYZ, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }

    /// Dot product.
    #[inline]
    pub const fn dot(&self, other: &XYZ) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    #[inline]
    pub fn crossed(&self, other: &XYZ) -> XYZ {
        XYZ {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns the normalized triplet, or `None` if the modulus is below
    /// [`precision::RESOLUTION`] (normalizing would divide by zero or
    /// manufacture NaN).
    pub fn normalized(&self) -> Option<XYZ> {
        let d = self.modulus();
        if d <= precision::RESOLUTION {
            return None;
        }
        Some(XYZ {
            x: self.x / d,
            y: self.y / d,
            z: self.z / d,
        })
    }
}

impl Add for XYZ {
    type Output = XYZ;
    #[inline]
    fn add(self, rhs: XYZ) -> XYZ {
        XYZ::from_coords(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for XYZ {
    type Output = XYZ;
    #[inline]
    fn sub(self, rhs: XYZ) -> XYZ {
        XYZ::from_coords(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for XYZ {
    type Output = XYZ;
    #[inline]
    fn mul(self, scalar: f64) -> XYZ {
        XYZ::from_coords(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Neg for XYZ {
    type Output = XYZ;
    #[inline]
    fn neg(self) -> XYZ {
        XYZ::from_coords(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulus() {
        let v = XYZ::from_coords(3.0, 4.0, 0.0);
        assert!((v.modulus() - 5.0).abs() < 1e-12);
        assert!((v.square_modulus() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_dot_and_cross() {
        let x = XYZ::from_coords(1.0, 0.0, 0.0);
        let y = XYZ::from_coords(0.0, 1.0, 0.0);
        assert_eq!(x.dot(&y), 0.0);
        let z = x.crossed(&y);
        assert_eq!(z.coords(), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_normalized() {
        let v = XYZ::from_coords(0.0, 0.0, 10.0);
        let n = v.normalized().unwrap();
        assert!((n.modulus() - 1.0).abs() < 1e-12);
        assert_eq!(n.coords(), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_normalized_zero_is_none() {
        assert!(XYZ::zero().normalized().is_none());
    }

    #[test]
    fn test_operators() {
        let a = XYZ::from_coords(1.0, 2.0, 3.0);
        let b = XYZ::from_coords(4.0, 5.0, 6.0);
        assert_eq!((a + b).coords(), (5.0, 7.0, 9.0));
        assert_eq!((b - a).coords(), (3.0, 3.0, 3.0));
        assert_eq!((a * 2.0).coords(), (2.0, 4.0, 6.0));
        assert_eq!((-a).coords(), (-1.0, -2.0, -3.0));
    }
}
