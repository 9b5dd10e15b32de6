use serde::{Deserialize, Serialize};

/// One anchor of the piecewise-linear time/offset transfer function.
///
/// `time` is in unix seconds, `offset` in track pixels. `index` ties the
/// anchor back to a data source record when one exists; projected points
/// carry no index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeMappingPoint {
    pub time: f64,
    pub offset: f64,
    pub index: Option<usize>,
}

impl TimeMappingPoint {
    #[must_use]
    pub const fn new(time: f64, offset: f64, index: Option<usize>) -> Self {
        Self {
            time,
            offset,
            index,
        }
    }

    /// Slope of the line through `self` and `other`, in pixels per second.
    ///
    /// Equal times make the line vertical; the slope is reported as `0.0`
    /// so downstream projections stay total.
    #[must_use]
    pub fn slope_to(self, other: Self) -> f64 {
        if other.time - self.time == 0.0 {
            0.0
        } else {
            (other.offset - self.offset) / (other.time - self.time)
        }
    }

    /// Projects a time along `slope` to a new anchor.
    #[must_use]
    pub fn project_time(self, new_time: f64, slope: f64) -> Self {
        Self {
            time: new_time,
            offset: slope * (new_time - self.time) + self.offset,
            index: None,
        }
    }

    /// Projects an offset back to a time along `slope`.
    ///
    /// A flat segment has no inverse; the result then carries the sentinel
    /// time `0.0`, which callers must treat as the zero reference time and
    /// never as a real date.
    #[must_use]
    pub fn project_offset(self, new_offset: f64, slope: f64) -> Self {
        let new_time = if slope == 0.0 {
            0.0
        } else {
            self.time + (new_offset - self.offset) / slope
        };
        Self {
            time: new_time,
            offset: new_offset,
            index: None,
        }
    }
}
