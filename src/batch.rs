//! Sequential section creation over the current selection.
//!
//! Two failures are fatal and abort before any element is touched: an
//! empty selection, and a template catalog without a section view type.
//! Everything after that is per-element: a bad element is logged, recorded
//! in the report and skipped, and the loop moves on.

use log::{info, warn};

use crate::host::{Element, ElementId, HostDocument, ViewId, ViewTypeId};
use crate::section::{SectionBox, DEFAULT_SECTION_OFFSET};
use crate::segment::Segment;
use crate::view::ViewSettings;
use crate::{Error, Result};

/// Per-element outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Elements for which a view was created and configured.
    pub created: Vec<(ElementId, ViewId)>,
    /// Elements skipped, with the reason.
    pub skipped: Vec<(ElementId, Error)>,
}

impl BatchReport {
    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Creates one section view per selected linear element.
///
/// Runs strictly sequentially inside whatever transaction the host has
/// open. Returns `Err` only for the two fatal preconditions; per-element
/// failures land in [`BatchReport::skipped`].
pub fn create_sections<D: HostDocument>(
    doc: &mut D,
    settings: &ViewSettings,
) -> Result<BatchReport> {
    let elements = doc.selection();
    if elements.is_empty() {
        return Err(Error::NoSelection);
    }
    let view_type = doc
        .section_view_type()
        .ok_or(Error::MissingSectionViewType)?;

    let mut report = BatchReport::default();
    for element in &elements {
        match process_element(doc, view_type, element, settings) {
            Ok(view) => {
                info!(
                    "created section {} for {} {}",
                    doc.view_name(view),
                    element.category,
                    element.id
                );
                report.created.push((element.id, view));
            }
            Err(err) => {
                warn!("skipped {} {}: {}", element.category, element.id, err);
                report.skipped.push((element.id, err));
            }
        }
    }
    Ok(report)
}

fn process_element<D: HostDocument>(
    doc: &mut D,
    view_type: ViewTypeId,
    element: &Element,
    settings: &ViewSettings,
) -> Result<ViewId> {
    let (start, end) = element
        .curve
        .endpoints()
        .ok_or(Error::NoCurve { element: element.id })?;
    let segment = Segment::new(start, end)?;
    let section_box = SectionBox::from_segment(&segment, DEFAULT_SECTION_OFFSET);
    let view = doc.create_section_view(view_type, &section_box)?;
    doc.apply_view_settings(view, settings)?;
    Ok(view)
}
