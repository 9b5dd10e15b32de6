pub mod frame;
pub mod null_renderer;
pub mod primitives;

pub use frame::{LabelDirective, SliderFrame, TickDirective, TickRole};
pub use null_renderer::NullRenderer;
pub use primitives::Color;

use crate::error::SliderResult;

/// Backend seam: hosts hand each directive frame to their own drawing
/// stack (layers, canvas, immediate mode) behind this trait.
pub trait Renderer {
    fn render(&mut self, frame: &SliderFrame) -> SliderResult<()>;
}
