//! Sticky section tracking.
//!
//! A sectioned list (category-partitioned picker, grouped search results)
//! keeps one section header pinned while its section scrolls through, and
//! keeps an external "active category" indicator synchronized with the
//! scroll position. [`StickyIndexTracker`] owns that state;
//! [`StickyBreakpoint`] describes where each section begins and where its
//! header hands over to the next.
//!
//! Breakpoint sets are built once per data set (see
//! [`breakpoints_from_sections`](crate::provider::breakpoints_from_sections))
//! and are read-only thereafter; a new search filter that replaces
//! categorized sections with a single flat "results" section rebuilds the
//! set wholesale.

use serde::{Deserialize, Serialize};

/// One section's position along the scroll axis.
///
/// Breakpoints in a set are monotonically increasing in both index and
/// offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StickyBreakpoint {
    /// Ordinal of the section within the data set.
    pub section_index: usize,
    /// Index of the section's first item, used when a programmatic
    /// select-section scroll is planned.
    pub item_index: usize,
    /// Pixel offset where the section begins.
    pub section_start_offset: f64,
    /// Offset at which this section's pinned header is replaced by the next
    /// section's header. Equal to the next section's start offset;
    /// `f64::INFINITY` for the last section.
    pub section_hide_after_offset: f64,
}

/// Tracks which section header is active as the scroll offset changes.
///
/// [`update`](Self::update) performs a directional incremental scan: it
/// advances or retreats from the previous active section instead of
/// re-scanning all breakpoints on every scroll tick. The scans are loops, so
/// the result is correct for arbitrary deltas; callers that perform a known
/// non-incremental jump (a programmatic scroll-to, a breakpoint rebuild)
/// should use [`resync`](Self::resync), the full binary-search scan.
///
/// Mutated only from the scroll-event handling path; while a planned scroll
/// is in flight the engine suppresses scroll-driven updates via the
/// programmatic flag on [`ScrollState`](crate::ScrollState).
#[derive(Debug, Clone)]
pub struct StickyIndexTracker {
    breakpoints: Vec<StickyBreakpoint>,
    active: usize,
    last_offset: f64,
}

impl StickyIndexTracker {
    /// Tracker over a non-empty, offset-ordered breakpoint set.
    ///
    /// The active section starts at the first breakpoint.
    pub fn new(breakpoints: Vec<StickyBreakpoint>) -> Self {
        debug_assert!(!breakpoints.is_empty(), "breakpoint set must be non-empty");
        debug_assert!(
            breakpoints
                .windows(2)
                .all(|w| w[0].section_start_offset < w[1].section_start_offset),
            "breakpoints must be monotonically increasing in offset"
        );
        Self {
            breakpoints,
            active: 0,
            last_offset: 0.0,
        }
    }

    /// Currently active section index.
    pub fn active_section(&self) -> usize {
        self.active
    }

    /// The breakpoint set the tracker walks.
    pub fn breakpoints(&self) -> &[StickyBreakpoint] {
        &self.breakpoints
    }

    /// Incremental update from a scroll event. Returns the active section.
    pub fn update(&mut self, scroll_offset: f64) -> usize {
        if scroll_offset >= self.last_offset {
            // Advance while the next section has started.
            while self.active + 1 < self.breakpoints.len()
                && scroll_offset > self.breakpoints[self.active + 1].section_start_offset
            {
                self.active += 1;
            }
        } else {
            // Retreat while we are above the active section's start.
            while self.active > 0
                && scroll_offset < self.breakpoints[self.active].section_start_offset
            {
                self.active -= 1;
            }
        }
        self.last_offset = scroll_offset;
        self.active
    }

    /// Full re-scan after a non-incremental jump.
    ///
    /// Picks the largest section whose start offset is `<= scroll_offset`
    /// (the first section when the offset is above every start).
    pub fn resync(&mut self, scroll_offset: f64) -> usize {
        let after = self
            .breakpoints
            .partition_point(|bp| bp.section_start_offset <= scroll_offset);
        self.active = after.saturating_sub(1);
        self.last_offset = scroll_offset;
        self.active
    }

    /// Whether section `i`'s pinned header has been scrolled past and
    /// visually replaced by the next section's header.
    pub fn is_header_hidden(&self, section: usize, scroll_offset: f64) -> bool {
        match self.breakpoints.get(section) {
            Some(bp) => scroll_offset >= bp.section_hide_after_offset,
            None => false,
        }
    }

    /// Replace the breakpoint set (data set changed), clamping the active
    /// index into the new set and resyncing against `scroll_offset`.
    pub fn replace_breakpoints(
        &mut self,
        breakpoints: Vec<StickyBreakpoint>,
        scroll_offset: f64,
    ) -> usize {
        self.breakpoints = breakpoints;
        self.active = self.active.min(self.breakpoints.len().saturating_sub(1));
        self.resync(scroll_offset)
    }
}
