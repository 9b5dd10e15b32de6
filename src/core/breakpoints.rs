use serde::{Deserialize, Serialize};

use crate::core::mapping::TimeMappingPoint;

/// Names of the five anchors of the transfer function, in track order.
///
/// The same five names identify the label slots the control renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Breakpoint {
    Earliest,
    FirstDistorted,
    Selected,
    LastDistorted,
    Latest,
}

impl Breakpoint {
    pub const ALL: [Self; 5] = [
        Self::Earliest,
        Self::FirstDistorted,
        Self::Selected,
        Self::LastDistorted,
        Self::Latest,
    ];
}

/// The current set of breakpoint anchors.
///
/// The key set is closed and known at compile time, so this is a fixed
/// record with five optional fields rather than a keyed container.
/// Presence invariants: endpoints exist iff the data source holds more
/// than 2 records; `selected` exists iff a selection is set; the
/// distorted pair exists iff expansion is active and a selection exists.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BreakpointSet {
    earliest: Option<TimeMappingPoint>,
    first_distorted: Option<TimeMappingPoint>,
    selected: Option<TimeMappingPoint>,
    last_distorted: Option<TimeMappingPoint>,
    latest: Option<TimeMappingPoint>,
}

impl BreakpointSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            earliest: None,
            first_distorted: None,
            selected: None,
            last_distorted: None,
            latest: None,
        }
    }

    #[must_use]
    pub const fn get(self, slot: Breakpoint) -> Option<TimeMappingPoint> {
        match slot {
            Breakpoint::Earliest => self.earliest,
            Breakpoint::FirstDistorted => self.first_distorted,
            Breakpoint::Selected => self.selected,
            Breakpoint::LastDistorted => self.last_distorted,
            Breakpoint::Latest => self.latest,
        }
    }

    pub fn set(&mut self, slot: Breakpoint, point: Option<TimeMappingPoint>) {
        match slot {
            Breakpoint::Earliest => self.earliest = point,
            Breakpoint::FirstDistorted => self.first_distorted = point,
            Breakpoint::Selected => self.selected = point,
            Breakpoint::LastDistorted => self.last_distorted = point,
            Breakpoint::Latest => self.latest = point,
        }
    }

    #[must_use]
    pub const fn earliest(self) -> Option<TimeMappingPoint> {
        self.earliest
    }

    #[must_use]
    pub const fn first_distorted(self) -> Option<TimeMappingPoint> {
        self.first_distorted
    }

    #[must_use]
    pub const fn selected(self) -> Option<TimeMappingPoint> {
        self.selected
    }

    #[must_use]
    pub const fn last_distorted(self) -> Option<TimeMappingPoint> {
        self.last_distorted
    }

    #[must_use]
    pub const fn latest(self) -> Option<TimeMappingPoint> {
        self.latest
    }

    /// True when both overall endpoints are set; every linear query
    /// requires this.
    #[must_use]
    pub const fn has_endpoints(self) -> bool {
        self.earliest.is_some() && self.latest.is_some()
    }

    pub fn clear_endpoints(&mut self) {
        self.earliest = None;
        self.latest = None;
    }

    pub fn clear_midpoints(&mut self) {
        self.first_distorted = None;
        self.selected = None;
        self.last_distorted = None;
    }
}
