pub mod auto_close;

pub use auto_close::{AutoCloseTimer, PendingClose, TimerToken};

use serde::{Deserialize, Serialize};

/// Gesture phase of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliderPhase {
    Idle,
    Tracking,
    Snapping,
}

/// Mutable per-gesture state owned by the controller.
///
/// `selected_index` only changes while tracking; `use_time_expansion` is
/// derived once per data-source assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    phase: SliderPhase,
    selected_index: Option<usize>,
    expanded: bool,
    canceled_snapping: bool,
    use_time_expansion: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            phase: SliderPhase::Idle,
            selected_index: None,
            expanded: false,
            canceled_snapping: false,
            use_time_expansion: false,
        }
    }
}

impl SelectionState {
    #[must_use]
    pub fn phase(self) -> SliderPhase {
        self.phase
    }

    #[must_use]
    pub fn selected_index(self) -> Option<usize> {
        self.selected_index
    }

    #[must_use]
    pub fn is_expanded(self) -> bool {
        self.expanded
    }

    #[must_use]
    pub fn is_snapping(self) -> bool {
        self.phase == SliderPhase::Snapping
    }

    #[must_use]
    pub fn use_time_expansion(self) -> bool {
        self.use_time_expansion
    }

    pub fn set_use_time_expansion(&mut self, value: bool) {
        self.use_time_expansion = value;
    }

    pub fn set_selected_index(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    /// Enters tracking, cancelling a snap in flight.
    ///
    /// Returns `true` when a snap episode was interrupted; the settle
    /// callback for that episode must then be swallowed.
    pub fn begin_tracking(&mut self) -> bool {
        let interrupted = self.phase == SliderPhase::Snapping;
        if interrupted {
            self.canceled_snapping = true;
        }
        self.phase = SliderPhase::Tracking;
        self.expanded = true;
        interrupted
    }

    pub fn begin_snapping(&mut self) {
        self.phase = SliderPhase::Snapping;
    }

    /// Applies one settle callback from the snap animator.
    ///
    /// Returns `true` when the episode ended normally and auto-close
    /// should be scheduled. A settle for an interrupted episode consumes
    /// the cancel latch without closing, even when it arrives after the
    /// control re-entered tracking; settles outside any episode are
    /// spurious duplicates and are ignored.
    pub fn snap_settled(&mut self) -> bool {
        let was_snapping = self.phase == SliderPhase::Snapping;
        if was_snapping {
            self.phase = SliderPhase::Idle;
        }
        if self.canceled_snapping {
            self.canceled_snapping = false;
            return false;
        }
        was_snapping
    }

    pub fn end_gesture(&mut self) {
        if self.phase == SliderPhase::Tracking {
            self.phase = SliderPhase::Idle;
        }
    }

    /// Collapses the control when the auto-close delay elapses.
    pub fn close(&mut self) {
        self.expanded = false;
        self.canceled_snapping = false;
    }
}
