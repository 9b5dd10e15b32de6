use tracing::{debug, warn};

use crate::api::config::SliderConfig;
use crate::api::observers::SliderObservers;
use crate::api::snap::{SNAP_DAMPING, SnapAnimator, SnapTarget};
use crate::api::style::SliderStyle;
use crate::core::breakpoints::BreakpointSet;
use crate::core::data::{SliderDataSource, check_record_bound, unix_seconds_to_datetime};
use crate::core::engine::{self, TickContext, TickKind};
use crate::core::types::Viewport;
use crate::error::{SliderError, SliderResult};
use crate::interaction::auto_close::PendingClose;
use crate::interaction::{AutoCloseTimer, SelectionState, SliderPhase, TimerToken};

/// The slider control core.
///
/// Owns the per-gesture state and the cached breakpoints, and answers
/// every per-tick rendering query. Platform glue feeds it geometry
/// changes and pointer positions and drains the pending auto-close; the
/// snap physics lives behind [`SnapAnimator`].
///
/// The control is usable only when the data source holds more than 2
/// records; below that every interaction entry point is a diagnosed
/// no-op.
pub struct SliderControl<D: SliderDataSource> {
    config: SliderConfig,
    style: SliderStyle,
    viewport: Viewport,
    source: Option<D>,
    breakpoints: BreakpointSet,
    state: SelectionState,
    usable: bool,
    observers: SliderObservers,
    animator: Option<Box<dyn SnapAnimator>>,
    auto_close: AutoCloseTimer,
}

impl<D: SliderDataSource> SliderControl<D> {
    pub fn new(config: SliderConfig, viewport: Viewport) -> SliderResult<Self> {
        let config = config.validate()?;
        if !viewport.is_valid() {
            return Err(SliderError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            config,
            style: SliderStyle::default(),
            viewport,
            source: None,
            breakpoints: BreakpointSet::empty(),
            state: SelectionState::default(),
            usable: false,
            observers: SliderObservers::default(),
            animator: None,
            auto_close: AutoCloseTimer::default(),
        })
    }

    // --- accessors ---

    #[must_use]
    pub fn config(&self) -> SliderConfig {
        self.config
    }

    #[must_use]
    pub fn style(&self) -> SliderStyle {
        self.style
    }

    pub fn set_style(&mut self, style: SliderStyle) -> SliderResult<()> {
        self.style = style.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn phase(&self) -> SliderPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected_index()
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    #[must_use]
    pub fn is_snapping(&self) -> bool {
        self.state.is_snapping()
    }

    /// True when the data source holds more than 2 records.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.usable
    }

    /// True when the record count is large enough for local expansion.
    #[must_use]
    pub fn use_time_expansion(&self) -> bool {
        self.state.use_time_expansion()
    }

    #[must_use]
    pub fn breakpoints(&self) -> BreakpointSet {
        self.breakpoints
    }

    #[must_use]
    pub fn data_source(&self) -> Option<&D> {
        self.source.as_ref()
    }

    /// Observer registration surface.
    pub fn observers_mut(&mut self) -> &mut SliderObservers {
        &mut self.observers
    }

    pub(crate) fn observers(&self) -> &SliderObservers {
        &self.observers
    }

    pub fn set_snap_animator(&mut self, animator: Box<dyn SnapAnimator>) {
        self.animator = Some(animator);
    }

    /// Width the host should give the control for the current expansion
    /// state.
    #[must_use]
    pub fn expanded_width(&self, base_width: f64) -> f64 {
        if self.state.is_expanded() {
            base_width * self.config.expanded_width_factor
        } else {
            base_width
        }
    }

    // --- configuration passes ---

    /// Assigns the data source and rebuilds all derived state.
    ///
    /// Usability and the time-expansion policy are derived here; the
    /// record bound is a fatal precondition and nothing is mutated when
    /// it fails.
    pub fn set_data_source(&mut self, source: D) -> SliderResult<()> {
        let count = source.len();
        check_record_bound(count)?;

        self.source = Some(source);
        self.usable = count > 2;
        self.state
            .set_use_time_expansion(count > 2 * self.config.expansion_range);
        if !self.usable {
            debug!(count, "data source too small, control disabled");
        }
        self.recompute_breakpoints()
    }

    /// Applies a geometry change, keeping the selection.
    pub fn set_viewport(&mut self, viewport: Viewport) -> SliderResult<()> {
        if !viewport.is_valid() {
            return Err(SliderError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        self.recompute_breakpoints()
    }

    /// Rebuilds endpoints then midpoints from current inputs.
    fn recompute_breakpoints(&mut self) -> SliderResult<()> {
        let Some(source) = &self.source else {
            self.breakpoints = BreakpointSet::empty();
            return Ok(());
        };
        engine::compute_endpoints(
            source,
            &mut self.breakpoints,
            self.viewport,
            self.config.data_insets,
        )?;
        self.recompute_midpoints()
    }

    fn recompute_midpoints(&mut self) -> SliderResult<()> {
        let Some(source) = &self.source else {
            return Ok(());
        };
        engine::compute_midpoints(
            source,
            &mut self.breakpoints,
            self.state.selected_index(),
            self.state.use_time_expansion(),
            self.config.expansion_range,
            self.config.expansion_step,
        )
    }

    // --- gesture tracking ---

    /// Starts a gesture at `offset`. Cancels a snap in flight, expands
    /// the control, and immediately applies the first tracking update.
    ///
    /// Returns `false` when the control is unusable and tracking should
    /// not start.
    pub fn begin_tracking(&mut self, offset: f64, in_bounds: bool) -> SliderResult<bool> {
        if !self.usable {
            warn!("begin_tracking ignored: control is not usable");
            return Ok(false);
        }

        if self.state.is_snapping() {
            debug!("snap canceled by new gesture");
            if let Some(animator) = &mut self.animator {
                animator.cancel();
            }
        }
        // A new gesture always supersedes a pending deferred close.
        self.auto_close.cancel();
        self.state.begin_tracking();

        self.continue_tracking(offset, in_bounds)?;
        Ok(true)
    }

    /// Applies one tracking update at `offset`.
    ///
    /// Projects the offset to a date, selects the nearest record, rebuilds
    /// midpoints, and notifies hover observers with the projected date.
    /// Returns whether tracking should continue per the outside-bounds
    /// policy.
    pub fn continue_tracking(&mut self, offset: f64, in_bounds: bool) -> SliderResult<bool> {
        if !self.usable {
            warn!("continue_tracking ignored: control is not usable");
            self.close_later();
            return Ok(false);
        }
        let Some(source) = &self.source else {
            return Err(SliderError::MissingDataSource);
        };

        let projected_time = engine::offset_to_time(self.breakpoints, offset);
        let index = engine::nearest_index(source, projected_time)?;
        self.state.set_selected_index(Some(index));
        self.recompute_midpoints()?;

        self.observers
            .notify_hovered(unix_seconds_to_datetime(projected_time), index);

        let keep_going = self.config.allow_track_outside || in_bounds;
        if !keep_going {
            self.close_later();
        }
        Ok(keep_going)
    }

    /// Ends the gesture: notifies selection observers and hands the snap
    /// target to the animator.
    ///
    /// Without an animator the episode settles immediately so the state
    /// machine still reaches the auto-close.
    pub fn end_tracking(&mut self) -> SliderResult<()> {
        if !self.usable {
            warn!("end_tracking ignored: control is not usable");
            return Ok(());
        }
        self.state.end_gesture();

        let Some(index) = self.state.selected_index() else {
            self.close_later();
            return Ok(());
        };
        let Some(source) = &self.source else {
            return Err(SliderError::MissingDataSource);
        };

        let point = source.point_at(index);
        let snap_offset = engine::display_offset(
            self.breakpoints,
            point.unix_time(),
            index,
            self.tick_context(),
            self.config.expansion_step,
        );

        self.state.begin_snapping();
        self.observers.notify_selected(point.date, index);

        let target = SnapTarget {
            x: self.tick_x_position(),
            y: snap_offset,
            index,
        };
        match &mut self.animator {
            Some(animator) => animator.start_snap(target, SNAP_DAMPING),
            None => self.snap_settled(),
        }
        Ok(())
    }

    /// Aborts the gesture without snapping; the control still auto-closes.
    pub fn cancel_tracking(&mut self) {
        self.state.end_gesture();
        self.close_later();
    }

    /// Settle callback from the snap animator.
    ///
    /// At most one callback per episode has an effect; duplicates and
    /// settles of a canceled episode are ignored.
    pub fn snap_settled(&mut self) {
        if self.state.snap_settled() {
            self.close_later();
        }
    }

    // --- auto-close ---

    /// Re-notifies selection observers and (re)schedules the deferred
    /// close, superseding any pending one.
    fn close_later(&mut self) {
        let selected = self.state.selected_index().and_then(|index| {
            self.source
                .as_ref()
                .map(|source| (source.point_at(index), index))
        });
        if let Some((point, index)) = selected {
            self.observers.notify_selected(point.date, index);
        }

        let token = self.auto_close.schedule(self.config.auto_close_delay);
        debug!(token = token.raw(), "auto-close scheduled");
    }

    /// The close the host should arm a timer for, when one is pending.
    #[must_use]
    pub fn pending_close(&self) -> Option<PendingClose> {
        self.auto_close.pending()
    }

    /// Host callback when the auto-close delay elapses.
    ///
    /// Returns `true` when `token` was still live and the control
    /// collapsed; stale tokens are ignored.
    pub fn auto_close_elapsed(&mut self, token: TimerToken) -> bool {
        if !self.auto_close.fire(token) {
            debug!(token = token.raw(), "stale auto-close token ignored");
            return false;
        }
        self.state.close();
        debug!("control collapsed");
        true
    }

    // --- per-tick queries ---

    pub(crate) fn tick_context(&self) -> TickContext {
        TickContext {
            expanded: self.state.is_expanded(),
            use_time_expansion: self.state.use_time_expansion(),
            selected_index: self.state.selected_index(),
            count: self.source.as_ref().map_or(0, |source| source.len()),
        }
    }

    /// Visual kind of the tick at `index` under the current state.
    #[must_use]
    pub fn tick_kind(&self, index: usize) -> TickKind {
        engine::classify(self.breakpoints, index, self.tick_context())
    }

    /// Display offset of the tick at `index`; zero while unusable.
    #[must_use]
    pub fn tick_offset(&self, index: usize) -> f64 {
        let Some(source) = &self.source else {
            return 0.0;
        };
        if index >= source.len() {
            return 0.0;
        }
        engine::display_offset(
            self.breakpoints,
            source.point_at(index).unix_time(),
            index,
            self.tick_context(),
            self.config.expansion_step,
        )
    }

    pub(crate) fn tick_x_position(&self) -> f64 {
        if self.state.is_expanded() {
            self.config.expanded_tick_x_offset
        } else {
            0.0
        }
    }
}
