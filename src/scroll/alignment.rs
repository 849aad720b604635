//! Alignment policy for programmatic scrolls.

use serde::{Deserialize, Serialize};

/// Where a target item should land within the viewport after a planned
/// scroll.
///
/// Resolution is performed by
/// [`LayoutStrategy::offset_for_alignment`](crate::LayoutStrategy::offset_for_alignment);
/// the planner is pure and idempotent, and its result is always within
/// `[0, last_item_offset]`.
///
/// Note on naming: `Start` resolves to the *largest* offset that still shows
/// the item and `End` to the smallest - inverted relative to the naive
/// reading of the labels. Downstream callers depend on this exact behavior;
/// the formulas are kept as observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentPolicy {
    /// Scroll the minimal amount: keep the current offset when the item is
    /// already fully visible, otherwise move to the nearest edge that shows
    /// it.
    #[default]
    Auto,
    /// Resolve to the largest offset that keeps the item in view.
    Start,
    /// Resolve to the smallest offset that keeps the item in view.
    End,
    /// Center the item in the viewport, clamped so the list never shows
    /// blank space past either end.
    Center,
    /// [`Auto`](Self::Auto) when the target is within one viewport of the
    /// current position, [`Center`](Self::Center) for long jumps.
    Smart,
}
