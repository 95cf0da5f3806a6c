//! Section transform construction.
//!
//! The one real algorithm in this crate: given the axis of a linear
//! element, build the oriented box a host CAD application needs to cut a
//! cross-section view perpendicular to that axis. The box's local X runs
//! along the element, local Y is "up" in the view, local Z is the viewing
//! direction.

use serde::{Deserialize, Serialize};

use crate::geom::{Dir, Pnt, XYZ};
use crate::segment::Segment;
use crate::Result;

/// Default cross-axis clearance around the element, in model units.
pub const DEFAULT_SECTION_OFFSET: f64 = 0.5;

/// Extra lateral clearance added on the local Y axis so the element stays
/// fully visible with margin regardless of its cross-sectional size.
const LATERAL_PAD: f64 = 2.0;

/// Above this |Z| component the segment is treated as vertical: world Z is
/// nearly parallel to the axis and would make the cross-product seed
/// numerically unstable, so world Y seeds the up vector instead.
const VERTICAL_LIMIT: f64 = 0.9;

/// An oriented bounding box: an origin, a right-handed orthonormal basis,
/// and min/max corners expressed in the box's local frame.
///
/// Invariant: `axis`, `up` and `view` are unit length, pairwise
/// orthogonal, and `axis x up = view`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionBox {
    origin: Pnt,
    axis: Dir,
    up: Dir,
    view: Dir,
    min: XYZ,
    max: XYZ,
}

impl SectionBox {
    /// Builds the section box for a segment.
    ///
    /// `section_offset` is the cross-axis half-extent along the viewing
    /// direction; the lateral half-extent is `section_offset` plus a fixed
    /// pad. The along-axis half-extent is half the segment length, so the
    /// box hugs the element's run exactly.
    pub fn from_segment(segment: &Segment, section_offset: f64) -> SectionBox {
        let axis = segment.direction();
        let seed = up_seed(&axis);
        // The seed is not generally perpendicular to the axis; the double
        // cross product re-derives an up vector that is. The seed switch
        // in `up_seed` guarantees both products normalize.
        let view = axis.crossed(&seed).unwrap_or(Dir::z());
        let up = view.crossed(&axis).unwrap_or(Dir::y());

        let half_width = segment.length() * 0.5;
        let half_lateral = section_offset + LATERAL_PAD;
        SectionBox {
            origin: segment.midpoint(),
            axis,
            up,
            view,
            min: XYZ::from_coords(-half_width, -half_lateral, -section_offset),
            max: XYZ::from_coords(half_width, half_lateral, section_offset),
        }
    }

    /// Builds the section box directly from endpoints, rejecting
    /// coincident points like [`Segment::new`].
    pub fn from_endpoints(start: Pnt, end: Pnt, section_offset: f64) -> Result<SectionBox> {
        let segment = Segment::new(start, end)?;
        Ok(Self::from_segment(&segment, section_offset))
    }

    /// Box origin: the segment midpoint.
    #[inline]
    pub const fn origin(&self) -> Pnt {
        self.origin
    }

    /// Local X: along the element.
    #[inline]
    pub const fn axis(&self) -> Dir {
        self.axis
    }

    /// Local Y: up in the section view.
    #[inline]
    pub const fn up(&self) -> Dir {
        self.up
    }

    /// Local Z: the viewing direction.
    #[inline]
    pub const fn view(&self) -> Dir {
        self.view
    }

    /// Minimum corner in the local frame.
    #[inline]
    pub const fn min(&self) -> XYZ {
        self.min
    }

    /// Maximum corner in the local frame.
    #[inline]
    pub const fn max(&self) -> XYZ {
        self.max
    }

    /// Half sizes along local X, Y and Z.
    pub fn half_sizes(&self) -> (f64, f64, f64) {
        (self.max.x(), self.max.y(), self.max.z())
    }
}

/// Picks the world axis that seeds the up vector: Z for mostly-horizontal
/// segments, Y once the axis is within `VERTICAL_LIMIT` of vertical.
fn up_seed(axis: &Dir) -> Dir {
    if axis.z_val().abs() >= VERTICAL_LIMIT {
        Dir::y()
    } else {
        Dir::z()
    }
}
