//! Unit direction vector.

use serde::{Deserialize, Serialize};

use super::XYZ;

/// A unit vector (direction) in 3D space. Always normalized.
///
/// Construction is fallible: a vector too small to normalize has no
/// direction, so the constructors return `None` instead of manufacturing
/// a NaN basis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dir {
    coord: XYZ,
}

impl Default for Dir {
    fn default() -> Self {
        Self::z()
    }
}

impl Dir {
    /// World X direction (1, 0, 0).
    pub const fn x() -> Self {
        Self::from_unit(1.0, 0.0, 0.0)
    }

    /// World Y direction (0, 1, 0).
    pub const fn y() -> Self {
        Self::from_unit(0.0, 1.0, 0.0)
    }

    /// World Z direction (0, 0, 1).
    pub const fn z() -> Self {
        Self::from_unit(0.0, 0.0, 1.0)
    }

    /// Wraps coordinates the caller guarantees to be unit length.
    #[inline]
    pub(crate) const fn from_unit(x: f64, y: f64, z: f64) -> Self {
        Self {
            coord: XYZ::from_coords(x, y, z),
        }
    }

    /// Creates a direction from XYZ (normalizes).
    /// Returns `None` if the vector is too small.
    pub fn from_xyz(xyz: XYZ) -> Option<Self> {
        xyz.normalized().map(|coord| Self { coord })
    }

    /// Creates a direction from coordinates (normalizes).
    /// Returns `None` if the vector is too small.
    pub fn from_coords(x: f64, y: f64, z: f64) -> Option<Self> {
        Self::from_xyz(XYZ::from_coords(x, y, z))
    }

    /// Returns the X component.
    #[inline]
    pub const fn x_val(&self) -> f64 {
        self.coord.x()
    }

    /// Returns the Y component.
    #[inline]
    pub const fn y_val(&self) -> f64 {
        self.coord.y()
    }

    /// Returns the Z component.
    #[inline]
    pub const fn z_val(&self) -> f64 {
        self.coord.z()
    }

    /// Returns the underlying unit coordinates.
    #[inline]
    pub const fn xyz(&self) -> XYZ {
        self.coord
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Dir) -> f64 {
        self.coord.dot(&other.coord)
    }

    /// Cross product, renormalized. Returns `None` for parallel inputs.
    pub fn crossed(&self, other: &Dir) -> Option<Dir> {
        Dir::from_xyz(self.coord.crossed(&other.coord))
    }

    /// Returns true if perpendicular to `other` within an angular tolerance.
    pub fn is_normal(&self, other: &Dir, angular_tolerance: f64) -> bool {
        self.dot(other).abs() <= angular_tolerance
    }

    /// Returns true if parallel to `other` within an angular tolerance.
    pub fn is_parallel(&self, other: &Dir, angular_tolerance: f64) -> bool {
        self.coord.crossed(&other.coord).modulus() <= angular_tolerance
    }

    /// Returns the reversed direction.
    #[inline]
    pub fn reversed(&self) -> Dir {
        Dir { coord: -self.coord }
    }
}

impl std::ops::Neg for Dir {
    type Output = Dir;
    fn neg(self) -> Dir {
        self.reversed()
    }
}
