//! Visible range calculation.
//!
//! Given a scroll offset, [`compute_visible_range`] returns the inclusive
//! range of item indices that must exist in the rendered viewport: the
//! minimal set of items with any pixel overlap with
//! `[scroll_offset, scroll_offset + viewport_size)`, expanded by the
//! configured overscan on both sides.

use serde::{Deserialize, Serialize};

use crate::config::ListConfig;
use crate::layout::LayoutStrategy;

/// Inclusive range of item indices to render.
///
/// Inclusive indices cannot encode emptiness, so the empty range (an
/// `item_count == 0` list) is represented as `None` at the call sites that
/// produce ranges.
///
/// # Invariants
/// - `start_index <= stop_index`
/// - `stop_index < item_count` of the configuration that produced the range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRange {
    /// First index to render (inclusive).
    pub start_index: usize,
    /// Last index to render (inclusive).
    pub stop_index: usize,
}

impl VisibleRange {
    /// Create a new range.
    ///
    /// # Panics
    /// In debug builds, panics if `start_index > stop_index`.
    pub fn new(start_index: usize, stop_index: usize) -> Self {
        debug_assert!(
            start_index <= stop_index,
            "start_index {} > stop_index {}",
            start_index,
            stop_index
        );
        Self {
            start_index,
            stop_index,
        }
    }

    /// Number of items in the range. Never zero.
    pub fn len(&self) -> usize {
        self.stop_index - self.start_index + 1
    }

    /// Always false: the empty range is `None`, not a degenerate
    /// `VisibleRange`. Present so `clippy::len_without_is_empty` holds.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `index` must be rendered.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index <= self.stop_index
    }

    /// Iterate the indices in the range.
    pub fn indices(&self) -> std::ops::RangeInclusive<usize> {
        self.start_index..=self.stop_index
    }
}

/// Compute the inclusive render range for a scroll position.
///
/// Returns `None` when `item_count == 0` (nothing to render, no error).
/// Otherwise every item whose bounding box has any pixel overlap with the
/// viewport is included, and the range is the minimal such set before the
/// overscan expansion.
pub fn compute_visible_range<S: LayoutStrategy>(
    config: &ListConfig,
    strategy: &S,
    scroll_offset: f64,
) -> Option<VisibleRange> {
    if config.item_count() == 0 {
        return None;
    }

    let start_index = strategy.start_index_for_offset(config, scroll_offset);
    let stop_index = strategy.stop_index_for_start_index(config, start_index, scroll_offset);

    let overscan = config.overscan_count();
    let start_index = start_index.saturating_sub(overscan);
    let stop_index = (stop_index + overscan).min(config.item_count() - 1);

    Some(VisibleRange::new(start_index, stop_index))
}
