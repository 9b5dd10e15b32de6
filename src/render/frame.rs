use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::breakpoints::Breakpoint;
use crate::core::engine::TickKind;
use crate::core::types::Viewport;
use crate::error::{SliderError, SliderResult};
use crate::render::primitives::Color;

/// How one tick should be stroked this frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TickRole {
    /// Regular tick outside any expansion effect.
    Inactive,
    /// Inside the expansion window; highlight fades with distance from
    /// the selection.
    Accessory { alpha: f64 },
    /// The selected tick: emphasized stroke and scale.
    Selected,
    /// Expanded placement pushed the tick off the track; not drawn.
    Hidden,
}

/// Per-tick drawing directive for one update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickDirective {
    pub index: usize,
    pub offset: f64,
    pub kind: TickKind,
    pub role: TickRole,
    pub color: Color,
    /// Base x of the tick layer; shifts right while expanded.
    pub x_position: f64,
    /// Horizontal nudge of accessory and selected ticks.
    pub x_shift: f64,
    pub stroke_width: f64,
    pub scale: f64,
}

/// Label directive for one of the five named slots.
///
/// Slots reuse the breakpoint names; absent slots are hidden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelDirective {
    pub slot: Breakpoint,
    pub text: String,
    pub offset: f64,
    pub opacity: f64,
    pub color: Color,
}

/// Backend-agnostic scene for one slider update.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderFrame {
    pub viewport: Viewport,
    pub ticks: Vec<TickDirective>,
    pub labels: SmallVec<[LabelDirective; 5]>,
}

impl SliderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ticks: Vec::new(),
            labels: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn label(&self, slot: Breakpoint) -> Option<&LabelDirective> {
        self.labels.iter().find(|label| label.slot == slot)
    }

    pub fn validate(&self) -> SliderResult<()> {
        if !self.viewport.is_valid() {
            return Err(SliderError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for tick in &self.ticks {
            if !tick.offset.is_finite() || !tick.x_shift.is_finite() {
                return Err(SliderError::InvalidData(format!(
                    "tick {} has non-finite geometry",
                    tick.index
                )));
            }
            tick.color.validate()?;
            if let TickRole::Accessory { alpha } = tick.role
                && (!alpha.is_finite() || !(0.0..=1.0).contains(&alpha))
            {
                return Err(SliderError::InvalidData(format!(
                    "tick {} highlight alpha must be finite and in [0, 1]",
                    tick.index
                )));
            }
        }

        for label in &self.labels {
            if label.text.is_empty() {
                return Err(SliderError::InvalidData(
                    "label directive must not be empty".to_owned(),
                ));
            }
            if !label.offset.is_finite() {
                return Err(SliderError::InvalidData(
                    "label offset must be finite".to_owned(),
                ));
            }
            if !label.opacity.is_finite() || !(0.0..=1.0).contains(&label.opacity) {
                return Err(SliderError::InvalidData(
                    "label opacity must be finite and in [0, 1]".to_owned(),
                ));
            }
            label.color.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty() && self.labels.is_empty()
    }
}
