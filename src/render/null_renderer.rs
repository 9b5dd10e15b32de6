use crate::error::SliderResult;
use crate::render::{Renderer, SliderFrame};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_tick_count: usize,
    pub last_label_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SliderFrame) -> SliderResult<()> {
        frame.validate()?;
        self.last_tick_count = frame.ticks.len();
        self.last_label_count = frame.labels.len();
        Ok(())
    }
}
