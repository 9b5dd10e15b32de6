use chrono::{DateTime, Utc};

use crate::error::{SliderError, SliderResult};

/// Hard upper bound on data source size; exceeding it is a contract
/// violation by the integrator, not a runtime condition.
pub const MAX_RECORD_COUNT: usize = 1000;

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Inverse of [`datetime_to_unix_seconds`].
///
/// Out-of-range inputs collapse to the zero reference date, the same
/// sentinel the degenerate mapping queries produce.
#[must_use]
pub fn unix_seconds_to_datetime(time: f64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis((time * 1000.0).round() as i64).unwrap_or_default()
}

/// One record of the slider's data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatedPoint {
    pub date: DateTime<Utc>,
    pub has_icon: bool,
}

impl DatedPoint {
    #[must_use]
    pub fn new(date: DateTime<Utc>, has_icon: bool) -> Self {
        Self { date, has_icon }
    }

    #[must_use]
    pub fn unix_time(self) -> f64 {
        datetime_to_unix_seconds(self.date)
    }
}

/// Read-only record access for the slider.
///
/// Implementors must keep dates ascending and hold at most
/// [`MAX_RECORD_COUNT`] records; the records must stay stable for the
/// duration of one breakpoint recomputation pass.
pub trait SliderDataSource {
    fn len(&self) -> usize;

    fn point_at(&self, index: usize) -> DatedPoint;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory data source over an owned, pre-sorted vector.
#[derive(Debug, Clone, Default)]
pub struct VecDataSource {
    points: Vec<DatedPoint>,
}

impl VecDataSource {
    /// Builds a source from ascending-sorted points.
    pub fn new(points: Vec<DatedPoint>) -> SliderResult<Self> {
        check_record_bound(points.len())?;
        if points.windows(2).any(|pair| pair[0].date > pair[1].date) {
            return Err(SliderError::InvalidData(
                "data source dates must be ascending".to_owned(),
            ));
        }
        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[DatedPoint] {
        &self.points
    }
}

impl SliderDataSource for VecDataSource {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn point_at(&self, index: usize) -> DatedPoint {
        self.points[index]
    }
}

pub(crate) fn check_record_bound(count: usize) -> SliderResult<()> {
    if count > MAX_RECORD_COUNT {
        return Err(SliderError::TooManyRecords { count });
    }
    Ok(())
}
