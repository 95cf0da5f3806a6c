//! The boundary to the host CAD application.
//!
//! Everything the section tool needs from the host fits behind one trait:
//! hand over the current selection, find the section view template, create
//! a view from an oriented box, and set its display properties. The host
//! owns the modification transaction around all of it; this crate never
//! opens or commits one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geom::Pnt;
use crate::section::SectionBox;
use crate::view::ViewSettings;

/// Opaque identifier of a model element in the host document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque identifier of a view family type (template) in the host catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewTypeId(pub u64);

/// Opaque identifier of a created view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewId(pub u64);

/// Where a selected element's axis comes from.
///
/// Resolved once per element by the host adapter, replacing runtime
/// attribute probing with one explicit extraction per variant. Endpoints
/// are raw host geometry; validation happens in the batch loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurveSource {
    /// The element itself is a curve (cable trays, conduits).
    DirectCurve(Pnt, Pnt),
    /// The element is placed along a location curve (ducts, pipes).
    LocationCurve(Pnt, Pnt),
    /// Point-placed or otherwise non-linear element.
    Unsupported,
}

impl CurveSource {
    /// The axis endpoints, if this element has a linear axis at all.
    pub fn endpoints(&self) -> Option<(Pnt, Pnt)> {
        match *self {
            CurveSource::DirectCurve(start, end) => Some((start, end)),
            CurveSource::LocationCurve(start, end) => Some((start, end)),
            CurveSource::Unsupported => None,
        }
    }
}

/// A selected element as seen by the section tool.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub id: ElementId,
    /// Host category name, used only in diagnostics ("Cable Trays", ...).
    pub category: String,
    pub curve: CurveSource,
}

impl Element {
    pub fn new(id: ElementId, category: impl Into<String>, curve: CurveSource) -> Self {
        Self {
            id,
            category: category.into(),
            curve,
        }
    }
}

/// Opaque failure reported by the host for a single view operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("host: {0}")]
pub struct HostError(pub String);

/// The narrow view of the host document this tool operates through.
///
/// Implementations are expected to be called inside a single host-managed
/// modification transaction; methods are invoked strictly sequentially.
pub trait HostDocument {
    /// The currently selected elements, in selection order.
    fn selection(&self) -> Vec<Element>;

    /// Locates the section view family type in the host's template
    /// catalog. `None` is a fatal configuration problem, not a per-element
    /// failure.
    fn section_view_type(&self) -> Option<ViewTypeId>;

    /// Asks the host to materialize a section view cut by the given box.
    fn create_section_view(
        &mut self,
        view_type: ViewTypeId,
        section_box: &SectionBox,
    ) -> Result<ViewId, HostError>;

    /// Applies display properties to a freshly created view.
    fn apply_view_settings(
        &mut self,
        view: ViewId,
        settings: &ViewSettings,
    ) -> Result<(), HostError>;

    /// Human-readable name of a created view, for the per-element report.
    fn view_name(&self, view: ViewId) -> String;
}
