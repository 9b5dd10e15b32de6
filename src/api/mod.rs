pub mod config;
pub mod engine;
pub mod frame_builder;
pub mod label_format;
pub mod observers;
pub mod snap;
pub mod snapshot;
pub mod style;

pub use config::SliderConfig;
pub use engine::SliderControl;
pub use label_format::{DEFAULT_BOUNDARIES_FORMAT, DEFAULT_DATA_POINT_FORMAT};
pub use observers::SliderObservers;
pub use snap::{RecordingSnapAnimator, SNAP_DAMPING, SnapAnimator, SnapTarget};
pub use snapshot::SliderSnapshot;
pub use style::SliderStyle;
