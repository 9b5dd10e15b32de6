use serde::{Deserialize, Serialize};

/// Damping handed to the snap solver; low damping keeps a soft wobble
/// before the tick rests.
pub const SNAP_DAMPING: f64 = 0.1;

/// Resting point for the selected tick after a gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapTarget {
    pub x: f64,
    pub y: f64,
    pub index: usize,
}

/// External snap-animation collaborator.
///
/// The physics stays outside this crate. An implementation receives one
/// target per snap episode and must report back through
/// [`crate::api::SliderControl::snap_settled`] exactly once when the
/// motion comes to rest; `cancel` abandons the episode without settling.
pub trait SnapAnimator {
    fn start_snap(&mut self, target: SnapTarget, damping: f64);

    fn cancel(&mut self);
}

/// Recording double for tests and headless hosts.
#[derive(Debug, Default)]
pub struct RecordingSnapAnimator {
    pub started: Vec<(SnapTarget, f64)>,
    pub cancel_count: usize,
}

impl SnapAnimator for RecordingSnapAnimator {
    fn start_snap(&mut self, target: SnapTarget, damping: f64) {
        self.started.push((target, damping));
    }

    fn cancel(&mut self) {
        self.cancel_count += 1;
    }
}
