pub mod breakpoints;
pub mod data;
pub mod engine;
pub mod mapping;
pub mod types;

pub use breakpoints::{Breakpoint, BreakpointSet};
pub use data::{DatedPoint, MAX_RECORD_COUNT, SliderDataSource, VecDataSource};
pub use engine::{TickContext, TickKind};
pub use mapping::TimeMappingPoint;
pub use types::{DataInsets, Viewport};
