use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::types::DataInsets;
use crate::error::{SliderError, SliderResult};

/// Tuning controls for the slider control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Ticks on each side of the selection shown with uniform spacing.
    pub expansion_range: usize,
    /// Pixel distance between adjacent ticks inside the expansion range.
    pub expansion_step: f64,
    /// Insets between the control frame and the usable track.
    pub data_insets: DataInsets,
    /// The expanded control is wider by this factor.
    pub expanded_width_factor: f64,
    /// Tick layer x offset while the control is expanded.
    pub expanded_tick_x_offset: f64,
    /// Delay from lifting the pointer until the control collapses.
    pub auto_close_delay: Duration,
    /// Keep tracking when the pointer leaves the control frame.
    pub allow_track_outside: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            expansion_range: 5,
            expansion_step: 14.0,
            data_insets: DataInsets::default(),
            expanded_width_factor: 2.4,
            expanded_tick_x_offset: 50.0,
            auto_close_delay: Duration::from_millis(500),
            allow_track_outside: true,
        }
    }
}

impl SliderConfig {
    pub fn validate(self) -> SliderResult<Self> {
        if self.expansion_range == 0 {
            return Err(SliderError::InvalidConfig(
                "expansion range must be >= 1".to_owned(),
            ));
        }

        if !self.expansion_step.is_finite() || self.expansion_step <= 0.0 {
            return Err(SliderError::InvalidConfig(
                "expansion step must be finite and > 0".to_owned(),
            ));
        }

        if !self.data_insets.width.is_finite()
            || !self.data_insets.height.is_finite()
            || self.data_insets.width < 0.0
            || self.data_insets.height < 0.0
        {
            return Err(SliderError::InvalidConfig(
                "data insets must be finite and >= 0".to_owned(),
            ));
        }

        if !self.expanded_width_factor.is_finite() || self.expanded_width_factor < 1.0 {
            return Err(SliderError::InvalidConfig(
                "expanded width factor must be finite and >= 1".to_owned(),
            ));
        }

        if !self.expanded_tick_x_offset.is_finite() {
            return Err(SliderError::InvalidConfig(
                "expanded tick x offset must be finite".to_owned(),
            ));
        }

        Ok(self)
    }
}
