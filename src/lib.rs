//! secview: section views for linear building-service elements.
//!
//! Given line-based MEP elements (cable trays, conduits, ducts, straight
//! pipe runs) selected in a host CAD document, this crate computes an
//! oriented section box perpendicular to each element's axis and drives
//! the host's view-creation API through a narrow trait.
//!
//! The geometric core is [`SectionBox::from_segment`]; the batch driver is
//! [`create_sections`]. The host document, its transaction scope and its
//! selection UI stay on the other side of [`HostDocument`].

pub mod precision;
pub mod geom;
mod segment;
mod section;
pub mod view;
pub mod host;
mod batch;

pub use batch::{create_sections, BatchReport};
pub use host::{
    CurveSource, Element, ElementId, HostDocument, HostError, ViewId, ViewTypeId,
};
pub use section::{SectionBox, DEFAULT_SECTION_OFFSET};
pub use segment::Segment;
pub use view::{DetailLevel, DisplayStyle, ViewSettings};

/// Result type for section operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Nothing selected. Fatal: the batch never starts.
    #[error("nothing selected: select at least one linear element")]
    NoSelection,

    /// The host's template catalog has no section view family type.
    /// Fatal configuration problem, checked before any processing.
    #[error("no section view family type found in the document")]
    MissingSectionViewType,

    /// The element's axis endpoints coincide; no direction, no section.
    #[error("degenerate segment: endpoints coincide (length {length:.3e})")]
    DegenerateSegment { length: f64 },

    /// The element exposes neither a curve nor a location curve.
    #[error("element {element} has no linear axis")]
    NoCurve { element: ElementId },

    /// The host rejected a view operation for one element.
    #[error(transparent)]
    Host(#[from] HostError),
}
