//! Linear element axis.
//!
//! Cable trays, conduits, ducts and straight pipe runs are all located by
//! a single line in the model; [`Segment`] is that line, validated once at
//! construction so the section math downstream never has to re-check it.

use serde::{Deserialize, Serialize};

use crate::geom::{Dir, Pnt, XYZ};
use crate::precision;
use crate::{Error, Result};

/// A directed line between two distinct 3D points.
///
/// Coincident endpoints are rejected at construction: a zero-length axis
/// has no direction and can never produce a section frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    start: Pnt,
    end: Pnt,
}

impl Segment {
    /// Creates a segment, rejecting coincident endpoints with
    /// [`Error::DegenerateSegment`].
    pub fn new(start: Pnt, end: Pnt) -> Result<Self> {
        if start.square_distance(&end) <= precision::SQUARE_CONFUSION {
            return Err(Error::DegenerateSegment {
                length: start.distance(&end),
            });
        }
        Ok(Self { start, end })
    }

    /// Start point.
    #[inline]
    pub const fn start(&self) -> Pnt {
        self.start
    }

    /// End point.
    #[inline]
    pub const fn end(&self) -> Pnt {
        self.end
    }

    /// The vector from start to end (not normalized).
    #[inline]
    pub fn delta(&self) -> XYZ {
        self.start.vec_to(&self.end)
    }

    /// Segment length. Strictly positive by construction.
    pub fn length(&self) -> f64 {
        self.delta().modulus()
    }

    /// The point halfway along the segment.
    pub fn midpoint(&self) -> Pnt {
        self.start.midpoint(&self.end)
    }

    /// Unit direction from start to end.
    pub fn direction(&self) -> Dir {
        // Construction rejected coincident endpoints, so the delta always
        // normalizes.
        Dir::from_xyz(self.delta()).unwrap_or(Dir::x())
    }
}
