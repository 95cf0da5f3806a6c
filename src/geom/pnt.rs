//! 3D cartesian point.

use serde::{Deserialize, Serialize};

use super::XYZ;

/// A 3D cartesian point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pnt {
    coord: XYZ,
}

impl Pnt {
    /// The origin (0, 0, 0).
    #[inline]
    pub const fn origin() -> Self {
        Self { coord: XYZ::zero() }
    }

    /// Creates a point from XYZ coordinates.
    #[inline]
    pub const fn from_xyz(xyz: XYZ) -> Self {
        Self { coord: xyz }
    }

    /// Creates a point from coordinates.
    #[inline]
    pub const fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self {
            coord: XYZ::from_coords(x, y, z),
        }
    }

    /// Returns the X coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.coord.x()
    }

    /// Returns the Y coordinate.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.coord.y()
    }

    /// Returns the Z coordinate.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.coord.z()
    }

    /// Returns the underlying coordinates.
    #[inline]
    pub const fn xyz(&self) -> XYZ {
        self.coord
    }

    /// Returns all coordinates as a tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64, f64) {
        self.coord.coords()
    }

    /// Distance to another point.
    pub fn distance(&self, other: &Pnt) -> f64 {
        (other.coord - self.coord).modulus()
    }

    /// Squared distance to another point, avoiding the square root for
    /// threshold comparisons.
    pub fn square_distance(&self, other: &Pnt) -> f64 {
        (other.coord - self.coord).square_modulus()
    }

    /// The vector from this point to another.
    #[inline]
    pub fn vec_to(&self, other: &Pnt) -> XYZ {
        other.coord - self.coord
    }

    /// The point halfway between this point and another.
    pub fn midpoint(&self, other: &Pnt) -> Pnt {
        Pnt::from_xyz(self.coord + (other.coord - self.coord) * 0.5)
    }
}
