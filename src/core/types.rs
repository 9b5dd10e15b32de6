use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Insets between the control frame and the usable track.
///
/// `height` pads the top of the track; the bottom anchor sits at
/// `frame height - 2 * height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataInsets {
    pub width: f64,
    pub height: f64,
}

impl Default for DataInsets {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 15.0,
        }
    }
}

impl DataInsets {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
