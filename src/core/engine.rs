//! Breakpoint engine: pure queries over the piecewise-linear transfer
//! function.
//!
//! Endpoint and midpoint passes rebuild the [`BreakpointSet`] wholesale;
//! the remaining functions are read-only queries of their explicit
//! inputs. Degenerate geometry (missing endpoints, flat segments) never
//! errors; queries fall back to the zero reference time or zero offset
//! while the control is being (re)configured.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::breakpoints::{Breakpoint, BreakpointSet};
use crate::core::data::{SliderDataSource, check_record_bound};
use crate::core::mapping::TimeMappingPoint;
use crate::core::types::{DataInsets, Viewport};
use crate::error::{SliderError, SliderResult};

/// Visual role of one tick under the current transfer function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickKind {
    /// Plain proportional placement on the overall line.
    Linear,
    /// Pinned to the overall line regardless of expansion.
    Anchored,
    /// Compressed segment between `Earliest` and `FirstDistorted`.
    FloatLeft,
    /// Uniformly spaced segment around the selection.
    LinearMiddle,
    /// Compressed segment between `LastDistorted` and `Latest`.
    FloatRight,
}

/// Inputs shared by tick classification and display-offset queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickContext {
    pub expanded: bool,
    pub use_time_expansion: bool,
    pub selected_index: Option<usize>,
    pub count: usize,
}

/// Rebuilds the `Earliest`/`Latest` anchors from the data source and the
/// current geometry.
///
/// With 2 records or fewer both endpoints are cleared and the control is
/// unusable. Exceeding [`crate::core::MAX_RECORD_COUNT`] is a fatal
/// precondition violation.
pub fn compute_endpoints<D: SliderDataSource + ?Sized>(
    source: &D,
    breakpoints: &mut BreakpointSet,
    viewport: Viewport,
    insets: DataInsets,
) -> SliderResult<()> {
    check_record_bound(source.len())?;

    breakpoints.clear_endpoints();

    let count = source.len();
    if count > 2 {
        let first = source.point_at(0);
        let last = source.point_at(count - 1);
        let lowest_offset = insets.height;
        let highest_offset = f64::from(viewport.height) - 2.0 * insets.height;
        breakpoints.set(
            Breakpoint::Earliest,
            Some(TimeMappingPoint::new(
                first.unix_time(),
                lowest_offset,
                Some(0),
            )),
        );
        breakpoints.set(
            Breakpoint::Latest,
            Some(TimeMappingPoint::new(
                last.unix_time(),
                highest_offset,
                Some(count - 1),
            )),
        );
    }

    Ok(())
}

/// Rebuilds the `Selected` and distorted anchors for the current
/// selection.
///
/// Always clears the three middle slots first; without endpoints or a
/// selection that is the whole effect. When expansion is active the
/// center segment between the distorted anchors gets a low slope so
/// nearby dates are easy to pick, and its ends are clamped to the track.
pub fn compute_midpoints<D: SliderDataSource + ?Sized>(
    source: &D,
    breakpoints: &mut BreakpointSet,
    selected_index: Option<usize>,
    use_time_expansion: bool,
    expansion_range: usize,
    expansion_step: f64,
) -> SliderResult<()> {
    breakpoints.clear_midpoints();

    let (Some(earliest), Some(latest)) = (breakpoints.earliest(), breakpoints.latest()) else {
        return Ok(());
    };
    let Some(selected_index) = selected_index else {
        return Ok(());
    };
    if selected_index >= source.len() {
        return Err(SliderError::InvalidData(format!(
            "selected index {selected_index} out of bounds for {} records",
            source.len()
        )));
    }

    let linear_slope = earliest.slope_to(latest);
    let mid_time = source.point_at(selected_index).unix_time();
    let mut selected = earliest.project_time(mid_time, linear_slope);
    selected.index = Some(selected_index);
    breakpoints.set(Breakpoint::Selected, Some(selected));

    if use_time_expansion {
        let last_index = source.len() - 1;
        let first_distorted_index = selected_index.saturating_sub(expansion_range);
        let last_distorted_index = (selected_index + expansion_range).min(last_index);

        let first_distorted_offset = (selected.offset
            - expansion_step * (selected_index - first_distorted_index) as f64)
            .max(earliest.offset);
        let last_distorted_offset = (selected.offset
            - expansion_step * (selected_index as f64 - last_distorted_index as f64))
            .min(latest.offset);

        breakpoints.set(
            Breakpoint::FirstDistorted,
            Some(TimeMappingPoint::new(
                source.point_at(first_distorted_index).unix_time(),
                first_distorted_offset,
                Some(first_distorted_index),
            )),
        );
        breakpoints.set(
            Breakpoint::LastDistorted,
            Some(TimeMappingPoint::new(
                source.point_at(last_distorted_index).unix_time(),
                last_distorted_offset,
                Some(last_distorted_index),
            )),
        );
    }

    Ok(())
}

/// Binary search for the record closest to `target_time`.
///
/// An exact match returns its index. Otherwise the search returns the
/// midpoint at the moment the bounds invert, which can land one position
/// away from the true nearest date. Selection feel is tuned against this
/// bias; do not replace it with a closest-of-two comparison.
pub fn nearest_index<D: SliderDataSource + ?Sized>(
    source: &D,
    target_time: f64,
) -> SliderResult<usize> {
    check_record_bound(source.len())?;
    if source.is_empty() {
        return Err(SliderError::MissingDataSource);
    }

    let mut lower: i64 = 0;
    let mut upper: i64 = source.len() as i64 - 1;

    loop {
        // Truncating division keeps the crossed-bounds midpoint in range.
        let current = (lower + upper) / 2;
        let time = source.point_at(current as usize).unix_time();

        if time == target_time {
            return Ok(current as usize);
        }
        if lower > upper {
            return Ok(current as usize);
        }
        if time > target_time {
            upper = current - 1;
        } else {
            lower = current + 1;
        }
    }
}

/// Maps a track offset back to a time through the overall
/// `Earliest`/`Latest` line.
///
/// Before both endpoints exist the mapping is undefined and the zero
/// reference time is returned.
#[must_use]
pub fn offset_to_time(breakpoints: BreakpointSet, offset: f64) -> f64 {
    let (Some(earliest), Some(latest)) = (breakpoints.earliest(), breakpoints.latest()) else {
        debug!(offset, "offset_to_time queried before endpoints were set");
        return 0.0;
    };
    let slope = earliest.slope_to(latest);
    earliest.project_offset(offset, slope).time
}

/// Maps a time to a track offset through the overall `Earliest`/`Latest`
/// line; zero offset before both endpoints exist.
#[must_use]
pub fn time_to_offset(breakpoints: BreakpointSet, time: f64) -> f64 {
    let (Some(earliest), Some(latest)) = (breakpoints.earliest(), breakpoints.latest()) else {
        debug!(time, "time_to_offset queried before endpoints were set");
        return 0.0;
    };
    let slope = earliest.slope_to(latest);
    earliest.project_time(time, slope).offset
}

/// Classifies the tick at `index` for the current expansion state.
#[must_use]
pub fn classify(breakpoints: BreakpointSet, index: usize, ctx: TickContext) -> TickKind {
    if ctx.expanded && ctx.use_time_expansion {
        if let Some(selected) = ctx.selected_index {
            // `index == ctx.count` never matches a 0-based tick; the last
            // tick classifies by its segment like any other.
            if index == 0 || index == selected || index == ctx.count {
                return TickKind::Anchored;
            }
            let first_index = breakpoints.first_distorted().and_then(|point| point.index);
            let last_index = breakpoints.last_distorted().and_then(|point| point.index);
            return match (first_index, last_index) {
                (Some(first), Some(last)) if index >= first && index <= last => {
                    TickKind::LinearMiddle
                }
                (Some(first), _) if index < first => TickKind::FloatLeft,
                _ => TickKind::FloatRight,
            };
        }
    }
    TickKind::Linear
}

/// Display offset for the tick at `index` whose record time is `time`.
///
/// Dispatches on [`classify`]: anchored and linear ticks project through
/// the overall line, the center segment spaces ticks uniformly by
/// `expansion_step`, and the float segments project through their
/// compressed lines.
#[must_use]
pub fn display_offset(
    breakpoints: BreakpointSet,
    time: f64,
    index: usize,
    ctx: TickContext,
    expansion_step: f64,
) -> f64 {
    let (left, right) = match classify(breakpoints, index, ctx) {
        TickKind::Anchored | TickKind::Linear => return time_to_offset(breakpoints, time),
        TickKind::LinearMiddle => {
            let (Some(selected), Some(selected_index)) =
                (breakpoints.selected(), ctx.selected_index)
            else {
                debug!(index, "center-segment tick without a selected anchor");
                return 0.0;
            };
            let distance = index as f64 - selected_index as f64;
            return selected.offset + distance * expansion_step;
        }
        TickKind::FloatLeft => (breakpoints.earliest(), breakpoints.first_distorted()),
        TickKind::FloatRight => (breakpoints.last_distorted(), breakpoints.latest()),
    };

    let (Some(left), Some(right)) = (left, right) else {
        debug!(index, "float-segment tick without its bounding anchors");
        return 0.0;
    };
    let slope = left.slope_to(right);
    left.project_time(time, slope).offset
}
