//! Batch driver against a scripted in-memory host document.

use secview::geom::Pnt;
use secview::{
    create_sections, CurveSource, Element, ElementId, Error, HostDocument, HostError,
    SectionBox, ViewId, ViewSettings, ViewTypeId,
};

#[derive(Default)]
struct MockDocument {
    elements: Vec<Element>,
    section_type: Option<ViewTypeId>,
    /// Create-call indices (0-based) that the host rejects.
    fail_create_at: Vec<usize>,
    /// View ids for which applying settings fails.
    fail_settings_on: Vec<ViewId>,
    created: Vec<(ViewTypeId, SectionBox)>,
    applied: Vec<(ViewId, ViewSettings)>,
    create_calls: usize,
}

impl MockDocument {
    fn with_section_type(elements: Vec<Element>) -> Self {
        Self {
            elements,
            section_type: Some(ViewTypeId(900)),
            ..Self::default()
        }
    }
}

impl HostDocument for MockDocument {
    fn selection(&self) -> Vec<Element> {
        self.elements.clone()
    }

    fn section_view_type(&self) -> Option<ViewTypeId> {
        self.section_type
    }

    fn create_section_view(
        &mut self,
        view_type: ViewTypeId,
        section_box: &SectionBox,
    ) -> Result<ViewId, HostError> {
        let call = self.create_calls;
        self.create_calls += 1;
        if self.fail_create_at.contains(&call) {
            return Err(HostError("view creation rejected".into()));
        }
        self.created.push((view_type, *section_box));
        Ok(ViewId(1000 + call as u64))
    }

    fn apply_view_settings(
        &mut self,
        view: ViewId,
        settings: &ViewSettings,
    ) -> Result<(), HostError> {
        if self.fail_settings_on.contains(&view) {
            return Err(HostError("parameter is read-only".into()));
        }
        self.applied.push((view, *settings));
        Ok(())
    }

    fn view_name(&self, view: ViewId) -> String {
        format!("Section {}", view.0)
    }
}

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn tray(id: u64, end: (f64, f64, f64)) -> Element {
    Element::new(
        ElementId(id),
        "Cable Trays",
        CurveSource::DirectCurve(Pnt::origin(), Pnt::from_coords(end.0, end.1, end.2)),
    )
}

fn pipe(id: u64, start: (f64, f64, f64), end: (f64, f64, f64)) -> Element {
    Element::new(
        ElementId(id),
        "Pipes",
        CurveSource::LocationCurve(
            Pnt::from_coords(start.0, start.1, start.2),
            Pnt::from_coords(end.0, end.1, end.2),
        ),
    )
}

#[test]
fn empty_selection_is_fatal() {
    let mut doc = MockDocument::with_section_type(vec![]);
    let err = create_sections(&mut doc, &ViewSettings::default()).unwrap_err();
    assert_eq!(err, Error::NoSelection);
    assert_eq!(doc.create_calls, 0);
}

#[test]
fn missing_section_type_is_fatal_before_any_processing() {
    let mut doc = MockDocument {
        elements: vec![tray(1, (10.0, 0.0, 0.0))],
        section_type: None,
        ..MockDocument::default()
    };
    let err = create_sections(&mut doc, &ViewSettings::default()).unwrap_err();
    assert_eq!(err, Error::MissingSectionViewType);
    assert_eq!(doc.create_calls, 0);
}

#[test]
fn creates_one_view_per_linear_element() {
    init_logs();
    let mut doc = MockDocument::with_section_type(vec![
        tray(1, (10.0, 0.0, 0.0)),
        pipe(2, (0.0, 0.0, 0.0), (0.0, 6.0, 0.0)),
    ]);
    let report = create_sections(&mut doc, &ViewSettings::default()).unwrap();

    assert_eq!(report.created_count(), 2);
    assert_eq!(report.skipped_count(), 0);
    assert_eq!(doc.created.len(), 2);
    assert_eq!(doc.created[0].0, ViewTypeId(900));
    assert_eq!(doc.created[0].1.origin().coords(), (5.0, 0.0, 0.0));
    assert_eq!(doc.created[1].1.origin().coords(), (0.0, 3.0, 0.0));
    // Settings applied to each created view.
    assert_eq!(doc.applied.len(), 2);
    assert_eq!(doc.applied[0].1, ViewSettings::default());
}

#[test]
fn bad_elements_are_skipped_not_fatal() {
    init_logs();
    let p = Pnt::from_coords(3.0, 3.0, 3.0);
    let mut doc = MockDocument::with_section_type(vec![
        tray(1, (10.0, 0.0, 0.0)),
        Element::new(ElementId(2), "Mechanical Equipment", CurveSource::Unsupported),
        Element::new(ElementId(3), "Pipes", CurveSource::LocationCurve(p, p)),
        tray(4, (0.0, 8.0, 0.0)),
    ]);
    let report = create_sections(&mut doc, &ViewSettings::default()).unwrap();

    assert_eq!(report.created_count(), 2);
    assert_eq!(
        report.created.iter().map(|(id, _)| id.0).collect::<Vec<_>>(),
        vec![1, 4]
    );
    assert_eq!(report.skipped_count(), 2);
    assert_eq!(report.skipped[0].0, ElementId(2));
    assert!(matches!(report.skipped[0].1, Error::NoCurve { .. }));
    assert_eq!(report.skipped[1].0, ElementId(3));
    assert!(matches!(report.skipped[1].1, Error::DegenerateSegment { .. }));
}

#[test]
fn host_rejection_skips_that_element_only() {
    let mut doc = MockDocument::with_section_type(vec![
        tray(1, (10.0, 0.0, 0.0)),
        tray(2, (0.0, 10.0, 0.0)),
    ]);
    doc.fail_create_at = vec![0];
    let report = create_sections(&mut doc, &ViewSettings::default()).unwrap();

    assert_eq!(report.created_count(), 1);
    assert_eq!(report.created[0].0, ElementId(2));
    assert_eq!(report.skipped_count(), 1);
    assert!(matches!(report.skipped[0].1, Error::Host(_)));
}

#[test]
fn settings_failure_is_per_element_too() {
    let mut doc = MockDocument::with_section_type(vec![
        tray(1, (10.0, 0.0, 0.0)),
        tray(2, (0.0, 10.0, 0.0)),
    ]);
    doc.fail_settings_on = vec![ViewId(1000)];
    let report = create_sections(&mut doc, &ViewSettings::default()).unwrap();

    assert_eq!(report.created_count(), 1);
    assert_eq!(report.skipped_count(), 1);
    assert_eq!(report.skipped[0].0, ElementId(1));
    assert!(matches!(report.skipped[0].1, Error::Host(_)));
}
