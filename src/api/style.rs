use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};
use crate::render::Color;

/// Colors and label sizing for the directive frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderStyle {
    pub label_color: Color,
    pub inactive_tick_color: Color,
    pub selected_tick_color: Color,
    pub label_font_size: f64,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            label_color: Color::white(),
            inactive_tick_color: Color::white().with_alpha(0.6),
            selected_tick_color: Color::white(),
            label_font_size: 11.0,
        }
    }
}

impl SliderStyle {
    pub fn validate(self) -> SliderResult<Self> {
        self.label_color.validate()?;
        self.inactive_tick_color.validate()?;
        self.selected_tick_color.validate()?;
        if !self.label_font_size.is_finite() || self.label_font_size <= 0.0 {
            return Err(SliderError::InvalidConfig(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}
