use chrono::{Duration, TimeZone, Utc};
use timeslider_rs::SliderError;
use timeslider_rs::core::engine::{compute_endpoints, compute_midpoints};
use timeslider_rs::core::{
    BreakpointSet, DataInsets, DatedPoint, SliderDataSource, VecDataSource, Viewport,
};

fn daily_dates(count: usize) -> VecDataSource {
    let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let points = (0..count)
        .map(|i| DatedPoint::new(start + Duration::days(i as i64), false))
        .collect();
    VecDataSource::new(points).expect("valid source")
}

/// Data source reporting an out-of-contract record count.
struct OversizedSource;

impl SliderDataSource for OversizedSource {
    fn len(&self) -> usize {
        1001
    }

    fn point_at(&self, _index: usize) -> DatedPoint {
        DatedPoint::new(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(), false)
    }
}

const VIEWPORT: Viewport = Viewport {
    width: 40,
    height: 300,
};

fn insets() -> DataInsets {
    DataInsets::default()
}

#[test]
fn endpoints_absent_for_two_or_fewer_dates() {
    for count in 0..=2 {
        let source = daily_dates(count);
        let mut breakpoints = BreakpointSet::empty();
        compute_endpoints(&source, &mut breakpoints, VIEWPORT, insets()).expect("endpoints");
        assert!(breakpoints.earliest().is_none(), "count {count}");
        assert!(breakpoints.latest().is_none(), "count {count}");
        assert!(!breakpoints.has_endpoints());
    }
}

#[test]
fn endpoints_span_the_inset_track() {
    let source = daily_dates(10);
    let mut breakpoints = BreakpointSet::empty();
    compute_endpoints(&source, &mut breakpoints, VIEWPORT, insets()).expect("endpoints");

    let earliest = breakpoints.earliest().expect("earliest");
    let latest = breakpoints.latest().expect("latest");

    assert_eq!(earliest.offset, 15.0);
    assert_eq!(latest.offset, 270.0);
    assert_eq!(earliest.index, Some(0));
    assert_eq!(latest.index, Some(9));
    assert_eq!(earliest.time, source.point_at(0).unix_time());
    assert_eq!(latest.time, source.point_at(9).unix_time());
}

#[test]
fn endpoints_recompute_clears_stale_values() {
    let source = daily_dates(10);
    let mut breakpoints = BreakpointSet::empty();
    compute_endpoints(&source, &mut breakpoints, VIEWPORT, insets()).expect("endpoints");
    assert!(breakpoints.has_endpoints());

    let small = daily_dates(2);
    compute_endpoints(&small, &mut breakpoints, VIEWPORT, insets()).expect("endpoints");
    assert!(!breakpoints.has_endpoints());
}

#[test]
fn oversized_source_is_a_fatal_precondition() {
    let mut breakpoints = BreakpointSet::empty();
    let err = compute_endpoints(&OversizedSource, &mut breakpoints, VIEWPORT, insets())
        .expect_err("must fail");
    assert!(matches!(err, SliderError::TooManyRecords { count: 1001 }));
}

#[test]
fn midpoints_without_selection_only_clear() {
    let source = daily_dates(10);
    let mut breakpoints = BreakpointSet::empty();
    compute_endpoints(&source, &mut breakpoints, VIEWPORT, insets()).expect("endpoints");
    compute_midpoints(&source, &mut breakpoints, None, true, 5, 14.0).expect("midpoints");

    assert!(breakpoints.selected().is_none());
    assert!(breakpoints.first_distorted().is_none());
    assert!(breakpoints.last_distorted().is_none());
}

#[test]
fn midpoints_without_endpoints_are_a_no_op() {
    let source = daily_dates(2);
    let mut breakpoints = BreakpointSet::empty();
    compute_endpoints(&source, &mut breakpoints, VIEWPORT, insets()).expect("endpoints");
    compute_midpoints(&source, &mut breakpoints, Some(1), true, 5, 14.0).expect("midpoints");
    assert!(breakpoints.selected().is_none());
}

#[test]
fn selected_breakpoint_is_the_linear_projection() {
    let source = daily_dates(10);
    let mut breakpoints = BreakpointSet::empty();
    compute_endpoints(&source, &mut breakpoints, VIEWPORT, insets()).expect("endpoints");
    compute_midpoints(&source, &mut breakpoints, Some(5), false, 5, 14.0).expect("midpoints");

    let selected = breakpoints.selected().expect("selected");
    let expected = 15.0 + (270.0 - 15.0) * 5.0 / 9.0;
    assert!((selected.offset - expected).abs() <= 1e-9);
    assert_eq!(selected.index, Some(5));
    // Expansion disabled: no distorted pair.
    assert!(breakpoints.first_distorted().is_none());
    assert!(breakpoints.last_distorted().is_none());
}

#[test]
fn distorted_pair_brackets_the_selection() {
    let source = daily_dates(20);
    let mut breakpoints = BreakpointSet::empty();
    compute_endpoints(&source, &mut breakpoints, VIEWPORT, insets()).expect("endpoints");
    compute_midpoints(&source, &mut breakpoints, Some(10), true, 5, 14.0).expect("midpoints");

    let selected = breakpoints.selected().expect("selected");
    let first = breakpoints.first_distorted().expect("first distorted");
    let last = breakpoints.last_distorted().expect("last distorted");

    assert_eq!(first.index, Some(5));
    assert_eq!(last.index, Some(15));
    assert!((first.offset - (selected.offset - 5.0 * 14.0)).abs() <= 1e-9);
    assert!((last.offset - (selected.offset + 5.0 * 14.0)).abs() <= 1e-9);

    // Offsets stay monotonic along the track.
    let earliest = breakpoints.earliest().expect("earliest");
    let latest = breakpoints.latest().expect("latest");
    assert!(earliest.offset <= first.offset);
    assert!(first.offset <= selected.offset);
    assert!(selected.offset <= last.offset);
    assert!(last.offset <= latest.offset);
}

#[test]
fn distorted_pair_clamps_at_the_edges() {
    let source = daily_dates(20);
    let mut breakpoints = BreakpointSet::empty();
    compute_endpoints(&source, &mut breakpoints, VIEWPORT, insets()).expect("endpoints");

    // Selection near the start: the left half of the window is cut off.
    compute_midpoints(&source, &mut breakpoints, Some(1), true, 5, 14.0).expect("midpoints");
    let first = breakpoints.first_distorted().expect("first distorted");
    let earliest = breakpoints.earliest().expect("earliest");
    assert_eq!(first.index, Some(0));
    assert_eq!(first.offset, earliest.offset);

    // Selection near the end: the right half is cut off.
    compute_midpoints(&source, &mut breakpoints, Some(18), true, 5, 14.0).expect("midpoints");
    let last = breakpoints.last_distorted().expect("last distorted");
    let latest = breakpoints.latest().expect("latest");
    assert_eq!(last.index, Some(19));
    assert_eq!(last.offset, latest.offset);
}

#[test]
fn reselection_replaces_previous_midpoints() {
    let source = daily_dates(20);
    let mut breakpoints = BreakpointSet::empty();
    compute_endpoints(&source, &mut breakpoints, VIEWPORT, insets()).expect("endpoints");

    compute_midpoints(&source, &mut breakpoints, Some(10), true, 5, 14.0).expect("midpoints");
    compute_midpoints(&source, &mut breakpoints, Some(3), true, 5, 14.0).expect("midpoints");

    assert_eq!(breakpoints.selected().expect("selected").index, Some(3));
    assert_eq!(
        breakpoints.first_distorted().expect("first").index,
        Some(0)
    );
    assert_eq!(breakpoints.last_distorted().expect("last").index, Some(8));
}

#[test]
fn out_of_bounds_selection_is_rejected() {
    let source = daily_dates(10);
    let mut breakpoints = BreakpointSet::empty();
    compute_endpoints(&source, &mut breakpoints, VIEWPORT, insets()).expect("endpoints");
    let err = compute_midpoints(&source, &mut breakpoints, Some(10), false, 5, 14.0)
        .expect_err("must fail");
    assert!(matches!(err, SliderError::InvalidData(_)));
}
