//! Display policy applied to created section views.
//!
//! The host sets these four properties on every view right after creating
//! it. The defaults reproduce the office standard for MEP section sheets;
//! deployments that want something else can deserialize their own
//! [`ViewSettings`].

use serde::{Deserialize, Serialize};

/// Rendering mode for the section view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayStyle {
    /// Edge-only rendering.
    Wireframe,
    /// Flat-shaded faces.
    Shaded,
    /// Shaded faces with edge overlay.
    ShadedWithEdges,
}

/// Geometric fidelity of the section view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailLevel {
    Coarse,
    Medium,
    Fine,
}

/// Display properties applied to a freshly created section view.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    /// View scale denominator (25 means 1:25).
    pub scale: u32,
    pub display_style: DisplayStyle,
    pub detail_level: DetailLevel,
    /// "Hide at scales coarser than" denominator (1000 means 1:1000).
    pub hide_below_scale: u32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            scale: 25,
            display_style: DisplayStyle::Wireframe,
            detail_level: DetailLevel::Fine,
            hide_below_scale: 1000,
        }
    }
}
