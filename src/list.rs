//! The list instance facade.
//!
//! [`VirtualList`] owns the configuration, the scroll state, the event
//! coalescer, and (for sectioned lists) the sticky tracker, and exposes the
//! query operations a renderer drives: visible range, item offsets, scroll
//! planning, and active-section tracking.

use std::time::Instant;

use tracing::{debug, trace};

use crate::config::ListConfig;
use crate::layout::{FixedSize, LayoutStrategy};
use crate::scroll::{AlignmentPolicy, ScrollCoalescer, ScrollState};
use crate::sticky::{StickyBreakpoint, StickyIndexTracker};
use crate::window::{compute_visible_range, VisibleRange};

/// A virtualized list instance.
///
/// The renderer collaborator owns the physical scrollable surface and
/// forwards scroll offsets in; the list answers which item indices must be
/// rendered and where programmatic scrolls should land. All query
/// operations are total over a valid configuration: out-of-range indices
/// and offsets clamp, never panic.
///
/// ```
/// use listwindow::{AlignmentPolicy, ListConfig, VirtualList};
///
/// let config = ListConfig::new(100, 40.0, 350.0).unwrap();
/// let list = VirtualList::new(config);
///
/// let range = list.get_visible_range(0.0).unwrap();
/// assert_eq!((range.start_index, range.stop_index), (0, 8));
///
/// let target = list.plan_scroll_to(50, AlignmentPolicy::Center, 0.0);
/// assert!(list.get_visible_range(target).unwrap().contains(50));
/// ```
#[derive(Debug, Clone)]
pub struct VirtualList<S: LayoutStrategy = FixedSize> {
    config: ListConfig,
    strategy: S,
    scroll: ScrollState,
    coalescer: ScrollCoalescer,
    sticky: Option<StickyIndexTracker>,
}

impl VirtualList<FixedSize> {
    /// List over uniform-size items.
    pub fn new(config: ListConfig) -> Self {
        Self::with_strategy(config, FixedSize)
    }
}

impl<S: LayoutStrategy> VirtualList<S> {
    /// List with an explicit layout strategy.
    pub fn with_strategy(config: ListConfig, strategy: S) -> Self {
        Self {
            config,
            strategy,
            scroll: ScrollState::new(),
            coalescer: ScrollCoalescer::new(),
            sticky: None,
        }
    }

    /// Attach a sticky section tracker built from `breakpoints`.
    ///
    /// An empty set leaves the list unsectioned.
    pub fn with_sections(mut self, breakpoints: Vec<StickyBreakpoint>) -> Self {
        if !breakpoints.is_empty() {
            self.sticky = Some(StickyIndexTracker::new(breakpoints));
        }
        self
    }

    /// The current configuration.
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// The current (clamped) scroll offset.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll.offset()
    }

    /// The scroll state (offset, direction, programmatic flag).
    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    // ----- queries ---------------------------------------------------------

    /// Inclusive render range for `scroll_offset`, or `None` for an empty
    /// list. See [`compute_visible_range`].
    pub fn get_visible_range(&self, scroll_offset: f64) -> Option<VisibleRange> {
        compute_visible_range(&self.config, &self.strategy, scroll_offset)
    }

    /// Render range at the list's own scroll offset.
    pub fn visible_range(&self) -> Option<VisibleRange> {
        self.get_visible_range(self.scroll.offset())
    }

    /// Pixel offset of an item's leading edge (out-of-range clamps).
    pub fn get_item_offset(&self, index: usize) -> f64 {
        self.strategy.offset_for_index(&self.config, index)
    }

    /// Total content size along the scroll axis.
    pub fn get_estimated_total_size(&self) -> f64 {
        self.strategy.estimated_total_size(&self.config)
    }

    /// Scroll offset that satisfies `policy` for `index`, given
    /// `current_scroll_offset`. Pure: does not move the list.
    pub fn plan_scroll_to(
        &self,
        index: usize,
        policy: AlignmentPolicy,
        current_scroll_offset: f64,
    ) -> f64 {
        self.strategy
            .offset_for_alignment(&self.config, index, policy, current_scroll_offset)
    }

    /// Whether any content remains past the viewport.
    pub fn can_scroll_forward(&self) -> bool {
        self.scroll.offset() < self.config.max_offset()
    }

    /// Whether any content remains before the viewport.
    pub fn can_scroll_backward(&self) -> bool {
        self.scroll.offset() > 0.0
    }

    // ----- scroll events ---------------------------------------------------

    /// Apply a scroll offset immediately (clamped). Returns the applied
    /// offset.
    ///
    /// Drives the sticky tracker incrementally unless a planned scroll is
    /// in flight.
    pub fn set_scroll_offset(&mut self, offset: f64) -> f64 {
        let applied = self.scroll.set_offset(offset, self.config.max_offset());
        trace!(offset, applied, "scroll offset applied");
        if !self.scroll.is_programmatic() {
            if let Some(tracker) = &mut self.sticky {
                tracker.update(applied);
            }
        }
        applied
    }

    /// Offer a scroll event observed at `now` through the coalescer.
    ///
    /// Returns the applied offset when the event was processed, `None` when
    /// it was absorbed into the current coalescing window. Call
    /// [`settle_scroll_events`](Self::settle_scroll_events) once scrolling
    /// stops so the final offset is never lost.
    pub fn on_scroll_event(&mut self, offset: f64, now: Instant) -> Option<f64> {
        self.coalescer
            .offer(offset, now)
            .map(|o| self.set_scroll_offset(o))
    }

    /// Flush the coalescer, applying any still-pending offset.
    pub fn settle_scroll_events(&mut self) -> Option<f64> {
        let applied = self.coalescer.flush().map(|o| self.set_scroll_offset(o));
        if applied.is_some() {
            trace!(?applied, "coalescer flushed");
        }
        applied
    }

    /// Plan and apply a scroll that brings `index` into view.
    ///
    /// The programmatic flag is held for the duration so the sticky tracker
    /// is not fed intermediate offsets; the tracker is resynced once at the
    /// landing offset. Returns the applied offset.
    ///
    /// A host that animates toward the planned offset instead of jumping
    /// should bracket the animation with
    /// [`begin_programmatic_scroll`](Self::begin_programmatic_scroll) /
    /// [`end_programmatic_scroll`](Self::end_programmatic_scroll) so the
    /// echoed intermediate offsets do not drive the tracker.
    pub fn scroll_to(&mut self, index: usize, policy: AlignmentPolicy) -> f64 {
        let planned = self.plan_scroll_to(index, policy, self.scroll.offset());
        debug!(index, ?policy, planned, "programmatic scroll");
        self.apply_programmatic(planned)
    }

    /// Mark the start of a host-driven programmatic scroll.
    ///
    /// While the flag is held, scroll offsets arriving through
    /// [`set_scroll_offset`](Self::set_scroll_offset) and
    /// [`update_active_section`](Self::update_active_section) do not drive
    /// the sticky tracker, so an animated scroll's intermediate echo offsets
    /// cannot flicker the active-section indicator.
    pub fn begin_programmatic_scroll(&mut self) {
        self.scroll.begin_programmatic();
    }

    /// Mark the end of a host-driven programmatic scroll.
    ///
    /// Clears the flag and resyncs the sticky tracker once at the landing
    /// offset.
    pub fn end_programmatic_scroll(&mut self) {
        self.scroll.end_programmatic();
        let offset = self.scroll.offset();
        if let Some(tracker) = &mut self.sticky {
            tracker.resync(offset);
        }
    }

    // ----- sections --------------------------------------------------------

    /// Incrementally update the active section from a scroll offset.
    ///
    /// Returns the active section index, or `None` for an unsectioned list.
    /// While a planned scroll is in flight the recomputation is suppressed
    /// and the current active section is returned unchanged.
    pub fn update_active_section(&mut self, scroll_offset: f64) -> Option<usize> {
        let programmatic = self.scroll.is_programmatic();
        self.sticky.as_mut().map(|tracker| {
            if programmatic {
                tracker.active_section()
            } else {
                tracker.update(scroll_offset)
            }
        })
    }

    /// Currently active section, if the list is sectioned.
    pub fn active_section(&self) -> Option<usize> {
        self.sticky.as_ref().map(StickyIndexTracker::active_section)
    }

    /// Whether a section's pinned header has been replaced by the next
    /// section's header at the current offset.
    pub fn is_header_hidden(&self, section: usize) -> bool {
        self.sticky
            .as_ref()
            .is_some_and(|t| t.is_header_hidden(section, self.scroll.offset()))
    }

    /// Programmatically select a section: plan a `Start`-aligned scroll to
    /// the section's first item and apply it, suppressing tracker feedback
    /// for the duration.
    ///
    /// Returns the applied offset, or `None` for an unsectioned list.
    /// An out-of-range section index clamps to the last section.
    pub fn select_section(&mut self, section: usize) -> Option<f64> {
        let item_index = {
            let tracker = self.sticky.as_ref()?;
            let breakpoints = tracker.breakpoints();
            let clamped = section.min(breakpoints.len() - 1);
            breakpoints[clamped].item_index
        };
        let planned = self.plan_scroll_to(item_index, AlignmentPolicy::Start, self.scroll.offset());
        debug!(section, item_index, planned, "section selected");
        Some(self.apply_programmatic(planned))
    }

    // ----- invalidation ----------------------------------------------------

    /// Replace the configuration wholesale.
    ///
    /// This is the single invalidation signal: strategy caches are cleared,
    /// the scroll offset is re-clamped against the new bounds, and the
    /// sticky tracker is resynced. A shrunk `item_count` clamps rather than
    /// errors.
    pub fn replace_config(&mut self, config: ListConfig) {
        debug!(
            item_count = config.item_count(),
            item_size = config.item_size(),
            viewport_size = config.viewport_size(),
            "configuration replaced"
        );
        self.config = config;
        self.strategy.invalidate();
        self.coalescer.reset();
        let clamped = self.scroll.set_offset(self.scroll.offset(), self.config.max_offset());
        if let Some(tracker) = &mut self.sticky {
            tracker.resync(clamped);
        }
    }

    /// Replace the sticky breakpoint set (the sectioning of the data set
    /// changed). An empty set detaches the tracker.
    pub fn replace_sections(&mut self, breakpoints: Vec<StickyBreakpoint>) -> Option<usize> {
        debug!(sections = breakpoints.len(), "sections replaced");
        if breakpoints.is_empty() {
            self.sticky = None;
            return None;
        }
        let offset = self.scroll.offset();
        match &mut self.sticky {
            Some(tracker) => Some(tracker.replace_breakpoints(breakpoints, offset)),
            None => {
                let mut tracker = StickyIndexTracker::new(breakpoints);
                let active = tracker.resync(offset);
                self.sticky = Some(tracker);
                Some(active)
            }
        }
    }

    fn apply_programmatic(&mut self, offset: f64) -> f64 {
        self.begin_programmatic_scroll();
        let applied = self.scroll.set_offset(offset, self.config.max_offset());
        self.end_programmatic_scroll();
        applied
    }
}
