//! The layout strategy operation table.

use crate::config::ListConfig;
use crate::scroll::AlignmentPolicy;

/// Pure arithmetic mapping between item index and pixel offset.
///
/// Every operation is a total function over a valid [`ListConfig`]:
/// out-of-range indices and offsets are clamped, never raised, so a caller
/// holding a stale index against a just-shrunk `item_count` cannot crash
/// rendering.
///
/// Implementations hold no per-call mutable state and may be invoked
/// synchronously and repeatedly without locking. A strategy that caches
/// per-index measurements (variable-size layouts) clears those caches in
/// [`invalidate`](Self::invalidate), which the engine calls on every
/// wholesale configuration replacement.
pub trait LayoutStrategy {
    /// Pixel offset of the item's leading edge.
    fn offset_for_index(&self, config: &ListConfig, index: usize) -> f64;

    /// Size of the item along the scroll axis.
    fn size_for_index(&self, config: &ListConfig, index: usize) -> f64;

    /// Total content size: the offset one past the last item.
    fn estimated_total_size(&self, config: &ListConfig) -> f64;

    /// Index of the item containing `offset`.
    ///
    /// Contract: callers guard `item_count == 0`; the result is undefined
    /// for an empty list.
    fn start_index_for_offset(&self, config: &ListConfig, offset: f64) -> usize;

    /// Inclusive index of the last item with any pixel overlap with the
    /// viewport `[scroll_offset, scroll_offset + viewport_size)`, given the
    /// start index computed by
    /// [`start_index_for_offset`](Self::start_index_for_offset).
    fn stop_index_for_start_index(
        &self,
        config: &ListConfig,
        start_index: usize,
        scroll_offset: f64,
    ) -> usize;

    /// Scroll offset satisfying `policy` for `target_index`, given the
    /// current offset. Pure and idempotent; the result is always within
    /// `[0, last_item_offset]`.
    fn offset_for_alignment(
        &self,
        config: &ListConfig,
        target_index: usize,
        policy: AlignmentPolicy,
        current_offset: f64,
    ) -> f64;

    /// Clear any cached per-index measurements.
    ///
    /// Called by the engine whenever the configuration is replaced
    /// wholesale. The fixed-size strategy caches nothing; this is the
    /// explicit cache-clear contract a variable-size strategy relies on.
    fn invalidate(&mut self) {}
}
