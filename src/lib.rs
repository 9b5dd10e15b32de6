//! timeslider-rs: core engine for an interactive date-picking slider.
//!
//! This crate owns the piecewise-linear time/offset mapping, the
//! nearest-date search, and the gesture state machine of a vertical date
//! slider. Platform concerns (touch delivery, layout constraints, text
//! layout, the snap physics solver) stay behind narrow traits so hosts can
//! wire the control into any UI toolkit.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{SliderConfig, SliderControl};
pub use error::{SliderError, SliderResult};
