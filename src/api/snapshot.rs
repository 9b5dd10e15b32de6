use serde::{Deserialize, Serialize};

use crate::core::breakpoints::BreakpointSet;
use crate::core::data::SliderDataSource;
use crate::core::types::Viewport;
use crate::error::{SliderError, SliderResult};
use crate::interaction::SliderPhase;

use super::SliderControl;

/// Serializable view of the control state, for diagnostics and
/// host-side persistence of UI state across reconfiguration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshot {
    pub phase: SliderPhase,
    pub selected_index: Option<usize>,
    pub expanded: bool,
    pub use_time_expansion: bool,
    pub usable: bool,
    pub viewport: Viewport,
    pub breakpoints: BreakpointSet,
}

impl SliderSnapshot {
    pub fn to_json(&self) -> SliderResult<String> {
        serde_json::to_string(self)
            .map_err(|err| SliderError::InvalidData(format!("snapshot serialization: {err}")))
    }

    pub fn from_json(json: &str) -> SliderResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| SliderError::InvalidData(format!("snapshot deserialization: {err}")))
    }
}

impl<D: SliderDataSource> SliderControl<D> {
    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            phase: self.phase(),
            selected_index: self.selected_index(),
            expanded: self.is_expanded(),
            use_time_expansion: self.use_time_expansion(),
            usable: self.is_usable(),
            viewport: self.viewport(),
            breakpoints: self.breakpoints(),
        }
    }
}
