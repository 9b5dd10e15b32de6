use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use timeslider_rs::api::{RecordingSnapAnimator, SNAP_DAMPING, SnapAnimator, SnapTarget};
use timeslider_rs::core::{DatedPoint, SliderDataSource, VecDataSource, Viewport};
use timeslider_rs::interaction::SliderPhase;
use timeslider_rs::{SliderConfig, SliderControl, SliderError};

fn daily_dates(count: usize) -> VecDataSource {
    let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let points = (0..count)
        .map(|i| DatedPoint::new(start + Duration::days(i as i64), false))
        .collect();
    VecDataSource::new(points).expect("valid source")
}

fn control_with(count: usize) -> SliderControl<VecDataSource> {
    let mut control =
        SliderControl::new(SliderConfig::default(), Viewport::new(40, 300)).expect("control");
    control
        .set_data_source(daily_dates(count))
        .expect("data source");
    control
}

/// Track offset that projects to `day` (fractional) on a 15..270 track.
fn offset_for(day: f64, count: usize) -> f64 {
    15.0 + 255.0 * day / (count as f64 - 1.0)
}

#[derive(Clone, Default)]
struct SharedAnimator(Rc<RefCell<RecordingSnapAnimator>>);

impl SnapAnimator for SharedAnimator {
    fn start_snap(&mut self, target: SnapTarget, damping: f64) {
        self.0.borrow_mut().start_snap(target, damping);
    }

    fn cancel(&mut self) {
        self.0.borrow_mut().cancel();
    }
}

type Notifications = Rc<RefCell<Vec<(DateTime<Utc>, usize)>>>;

fn record_selected(control: &mut SliderControl<VecDataSource>) -> Notifications {
    let log: Notifications = Rc::default();
    let sink = Rc::clone(&log);
    control
        .observers_mut()
        .set_on_date_selected(move |date, index| sink.borrow_mut().push((date, index)));
    log
}

fn record_hovered(control: &mut SliderControl<VecDataSource>) -> Notifications {
    let log: Notifications = Rc::default();
    let sink = Rc::clone(&log);
    control
        .observers_mut()
        .set_on_date_hovered(move |date, index| sink.borrow_mut().push((date, index)));
    log
}

#[test]
fn unusable_control_refuses_to_track() {
    let mut control = control_with(2);
    assert!(!control.is_usable());

    let started = control.begin_tracking(100.0, true).expect("begin");
    assert!(!started);
    assert_eq!(control.phase(), SliderPhase::Idle);
    assert!(control.selected_index().is_none());
    assert!(!control.is_expanded());
    assert!(control.build_frame().is_empty());
}

#[test]
fn tracking_selects_the_nearest_record_and_expands() {
    let mut control = control_with(10);
    let hovered = record_hovered(&mut control);

    let started = control.begin_tracking(offset_for(4.5, 10), true).expect("begin");
    assert!(started);
    assert_eq!(control.phase(), SliderPhase::Tracking);
    assert!(control.is_expanded());
    assert_eq!(control.selected_index(), Some(4));

    let hovered = hovered.borrow();
    assert_eq!(hovered.len(), 1);
    assert_eq!(hovered[0].1, 4);
}

#[test]
fn tracking_at_the_track_ends_selects_the_boundaries() {
    let mut control = control_with(10);
    control.begin_tracking(15.0, true).expect("begin");
    assert_eq!(control.selected_index(), Some(0));

    control.continue_tracking(270.0, true).expect("continue");
    assert_eq!(control.selected_index(), Some(9));
}

#[test]
fn end_tracking_hands_the_snap_target_to_the_animator() {
    let mut control = control_with(10);
    let animator = SharedAnimator::default();
    control.set_snap_animator(Box::new(animator.clone()));
    let selected = record_selected(&mut control);

    control.begin_tracking(offset_for(4.5, 10), true).expect("begin");
    control.end_tracking().expect("end");

    assert_eq!(control.phase(), SliderPhase::Snapping);
    assert!(control.is_snapping());

    let recorded = animator.0.borrow();
    assert_eq!(recorded.started.len(), 1);
    let (target, damping) = recorded.started[0];
    assert_eq!(damping, SNAP_DAMPING);
    assert_eq!(target.index, 4);
    assert!((target.y - control.tick_offset(4)).abs() <= 1e-9);

    let selected = selected.borrow();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].1, 4);
}

#[test]
fn settle_schedules_the_auto_close() {
    let mut control = control_with(10);
    control.set_snap_animator(Box::new(SharedAnimator::default()));

    control.begin_tracking(offset_for(4.5, 10), true).expect("begin");
    control.end_tracking().expect("end");
    assert!(control.pending_close().is_none());

    control.snap_settled();
    assert_eq!(control.phase(), SliderPhase::Idle);
    let pending = control.pending_close().expect("pending close");
    assert_eq!(pending.delay, SliderConfig::default().auto_close_delay);

    assert!(control.is_expanded());
    assert!(control.auto_close_elapsed(pending.token));
    assert!(!control.is_expanded());
    assert!(control.pending_close().is_none());
}

#[test]
fn duplicate_settle_is_ignored() {
    let mut control = control_with(10);
    control.set_snap_animator(Box::new(SharedAnimator::default()));

    control.begin_tracking(offset_for(4.5, 10), true).expect("begin");
    control.end_tracking().expect("end");
    control.snap_settled();
    let first = control.pending_close().expect("pending close");

    control.snap_settled();
    let second = control.pending_close().expect("still pending");
    assert_eq!(first.token, second.token);
}

#[test]
fn stale_auto_close_token_is_ignored() {
    let mut control = control_with(10);
    control.set_snap_animator(Box::new(SharedAnimator::default()));

    control.begin_tracking(offset_for(4.5, 10), true).expect("begin");
    control.end_tracking().expect("end");
    control.snap_settled();
    let stale = control.pending_close().expect("pending close").token;

    // A new gesture supersedes the pending close.
    control.begin_tracking(offset_for(2.5, 10), true).expect("begin");
    control.end_tracking().expect("end");
    control.snap_settled();
    let live = control.pending_close().expect("pending close").token;
    assert_ne!(stale, live);

    assert!(!control.auto_close_elapsed(stale));
    assert!(control.is_expanded());
    assert!(control.auto_close_elapsed(live));
    assert!(!control.is_expanded());
}

#[test]
fn new_gesture_interrupts_the_snap() {
    let mut control = control_with(10);
    let animator = SharedAnimator::default();
    control.set_snap_animator(Box::new(animator.clone()));

    control.begin_tracking(offset_for(4.5, 10), true).expect("begin");
    control.end_tracking().expect("end");
    assert!(control.is_snapping());

    let started = control.begin_tracking(offset_for(7.5, 10), true).expect("begin");
    assert!(started);
    assert!(!control.is_snapping());
    assert_eq!(control.phase(), SliderPhase::Tracking);
    assert_eq!(animator.0.borrow().cancel_count, 1);
    assert!(control.pending_close().is_none());

    // The canceled episode's settle must not schedule a close.
    control.snap_settled();
    assert!(control.pending_close().is_none());
    assert_eq!(control.phase(), SliderPhase::Tracking);
}

#[test]
fn leaving_bounds_stops_tracking_when_policy_forbids_it() {
    let config = SliderConfig {
        allow_track_outside: false,
        ..SliderConfig::default()
    };
    let mut control = SliderControl::new(config, Viewport::new(40, 300)).expect("control");
    control
        .set_data_source(daily_dates(10))
        .expect("data source");

    control.begin_tracking(offset_for(4.5, 10), true).expect("begin");
    let keep_going = control.continue_tracking(offset_for(5.5, 10), false).expect("continue");
    assert!(!keep_going);
    assert!(control.pending_close().is_some());
}

#[test]
fn default_policy_keeps_tracking_outside_bounds() {
    let mut control = control_with(10);
    control.begin_tracking(offset_for(4.5, 10), true).expect("begin");
    let keep_going = control.continue_tracking(offset_for(5.5, 10), false).expect("continue");
    assert!(keep_going);
    assert!(control.pending_close().is_none());
}

#[test]
fn cancel_tracking_schedules_the_close() {
    let mut control = control_with(10);
    let selected = record_selected(&mut control);

    control.begin_tracking(offset_for(4.5, 10), true).expect("begin");
    control.cancel_tracking();

    assert_eq!(control.phase(), SliderPhase::Idle);
    assert!(control.pending_close().is_some());
    // Scheduling a close re-notifies the current selection.
    assert_eq!(selected.borrow().len(), 1);
}

#[test]
fn end_tracking_without_an_animator_settles_immediately() {
    let mut control = control_with(10);
    control.begin_tracking(offset_for(4.5, 10), true).expect("begin");
    control.end_tracking().expect("end");

    assert_eq!(control.phase(), SliderPhase::Idle);
    assert!(control.pending_close().is_some());
}

#[test]
fn resize_preserves_the_selection() {
    let mut control = control_with(10);
    control.begin_tracking(offset_for(4.5, 10), true).expect("begin");
    assert_eq!(control.selected_index(), Some(4));

    control.set_viewport(Viewport::new(40, 600)).expect("resize");
    assert_eq!(control.selected_index(), Some(4));

    let latest = control.breakpoints().latest().expect("latest");
    assert_eq!(latest.offset, 600.0 - 30.0);
    let selected = control.breakpoints().selected().expect("selected");
    assert_eq!(selected.index, Some(4));
}

#[test]
fn oversized_data_source_is_rejected_up_front() {
    struct OversizedSource;

    impl SliderDataSource for OversizedSource {
        fn len(&self) -> usize {
            1001
        }

        fn point_at(&self, _index: usize) -> DatedPoint {
            DatedPoint::new(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(), false)
        }
    }

    let mut control =
        SliderControl::<OversizedSource>::new(SliderConfig::default(), Viewport::new(40, 300))
            .expect("control");
    let err = control.set_data_source(OversizedSource).expect_err("must fail");
    assert!(matches!(err, SliderError::TooManyRecords { count: 1001 }));
    assert!(!control.is_usable());
}

#[test]
fn expanded_width_scales_by_the_configured_factor() {
    let mut control = control_with(10);
    assert_eq!(control.expanded_width(25.0), 25.0);

    control.begin_tracking(offset_for(4.5, 10), true).expect("begin");
    assert!((control.expanded_width(25.0) - 60.0).abs() <= 1e-9);
}

#[test]
fn time_expansion_policy_derives_from_record_count() {
    // 10 records with range 5: 10 <= 2 * 5, expansion stays off.
    let control = control_with(10);
    assert!(!control.use_time_expansion());

    // 11 records cross the threshold.
    let control = control_with(11);
    assert!(control.use_time_expansion());
}
