//! Uniform-item layout strategy.

use super::strategy::LayoutStrategy;
use crate::config::ListConfig;
use crate::scroll::AlignmentPolicy;

/// Layout strategy for lists where every item has the same size.
///
/// All operations are closed-form arithmetic over the configuration, so the
/// strategy is a zero-sized type and nothing is cached.
///
/// ```
/// use listwindow::{FixedSize, LayoutStrategy, ListConfig};
///
/// let config = ListConfig::new(100, 40.0, 350.0).unwrap();
/// let fixed = FixedSize;
/// assert_eq!(fixed.offset_for_index(&config, 10), 400.0);
/// assert_eq!(fixed.start_index_for_offset(&config, 410.0), 10);
/// assert_eq!(fixed.estimated_total_size(&config), 4000.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedSize;

impl LayoutStrategy for FixedSize {
    fn offset_for_index(&self, config: &ListConfig, index: usize) -> f64 {
        // Lenient: a stale index against a just-shrunk item_count clamps to
        // the last item rather than pointing past the content.
        let index = index.min(config.item_count().saturating_sub(1));
        index as f64 * config.item_size()
    }

    fn size_for_index(&self, config: &ListConfig, _index: usize) -> f64 {
        config.item_size()
    }

    fn estimated_total_size(&self, config: &ListConfig) -> f64 {
        config.item_count() as f64 * config.item_size()
    }

    fn start_index_for_offset(&self, config: &ListConfig, offset: f64) -> usize {
        let raw = (offset / config.item_size()).floor().max(0.0) as usize;
        raw.min(config.item_count().saturating_sub(1))
    }

    fn stop_index_for_start_index(
        &self,
        config: &ListConfig,
        start_index: usize,
        scroll_offset: f64,
    ) -> usize {
        let start_offset = self.offset_for_index(config, start_index);
        let overlap = config.viewport_size() + scroll_offset - start_offset;
        let num_visible = (overlap / config.item_size()).ceil().max(0.0) as usize;
        let stop = start_index + num_visible.saturating_sub(1);
        stop.min(config.item_count().saturating_sub(1))
    }

    fn offset_for_alignment(
        &self,
        config: &ListConfig,
        target_index: usize,
        policy: AlignmentPolicy,
        current_offset: f64,
    ) -> f64 {
        let item_size = config.item_size();
        let viewport = config.viewport_size();
        let last_item_offset =
            (config.item_count() as f64 * item_size - viewport).max(0.0);

        let item_offset = self.offset_for_index(config, target_index);
        // Largest offset that still shows the item's leading edge, and
        // smallest offset that shows its trailing edge past the scrollbar.
        let max_offset = last_item_offset.min(item_offset);
        let min_offset =
            (item_offset - viewport + item_size + config.scrollbar_size()).max(0.0);

        let policy = match policy {
            AlignmentPolicy::Smart => {
                if current_offset >= min_offset - viewport
                    && current_offset <= max_offset + viewport
                {
                    AlignmentPolicy::Auto
                } else {
                    AlignmentPolicy::Center
                }
            }
            other => other,
        };

        let planned = match policy {
            // Observed start/end inversion is load-bearing; see
            // AlignmentPolicy docs.
            AlignmentPolicy::Start => max_offset,
            AlignmentPolicy::End => min_offset,
            AlignmentPolicy::Center => {
                let middle = (min_offset + (max_offset - min_offset) / 2.0).round();
                if middle < (viewport / 2.0).ceil() {
                    // Too close to the head to center.
                    0.0
                } else if middle > last_item_offset + (viewport / 2.0).floor() {
                    // Too close to the tail to center.
                    last_item_offset
                } else {
                    middle
                }
            }
            AlignmentPolicy::Auto => {
                if current_offset >= min_offset && current_offset <= max_offset {
                    current_offset
                } else if current_offset < min_offset {
                    min_offset
                } else {
                    max_offset
                }
            }
            AlignmentPolicy::Smart => unreachable!("smart resolved above"),
        };

        planned.clamp(0.0, last_item_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ListConfig {
        ListConfig::new(100, 40.0, 350.0).unwrap()
    }

    mod offsets {
        use super::*;

        #[test]
        fn offset_is_index_times_item_size() {
            let config = config();
            assert_eq!(FixedSize.offset_for_index(&config, 0), 0.0);
            assert_eq!(FixedSize.offset_for_index(&config, 1), 40.0);
            assert_eq!(FixedSize.offset_for_index(&config, 50), 2000.0);
        }

        #[test]
        fn out_of_range_index_clamps_to_last_item() {
            let config = config();
            assert_eq!(FixedSize.offset_for_index(&config, 500), 99.0 * 40.0);
        }

        #[test]
        fn total_size_is_count_times_item_size() {
            assert_eq!(FixedSize.estimated_total_size(&config()), 4000.0);
        }

        #[test]
        fn empty_list_total_size_is_zero() {
            let empty = ListConfig::new(0, 40.0, 350.0).unwrap();
            assert_eq!(FixedSize.estimated_total_size(&empty), 0.0);
        }

        #[test]
        fn index_for_offset_floors() {
            let config = config();
            assert_eq!(FixedSize.start_index_for_offset(&config, 0.0), 0);
            assert_eq!(FixedSize.start_index_for_offset(&config, 39.9), 0);
            assert_eq!(FixedSize.start_index_for_offset(&config, 40.0), 1);
            assert_eq!(FixedSize.start_index_for_offset(&config, 410.0), 10);
        }

        #[test]
        fn negative_offset_clamps_to_first_item() {
            assert_eq!(FixedSize.start_index_for_offset(&config(), -25.0), 0);
        }

        #[test]
        fn overshooting_offset_clamps_to_last_item() {
            assert_eq!(FixedSize.start_index_for_offset(&config(), 1.0e9), 99);
        }
    }

    mod stop_index {
        use super::*;

        #[test]
        fn full_viewport_from_zero() {
            // ceil(350 / 40) = 9 items visible.
            assert_eq!(FixedSize.stop_index_for_start_index(&config(), 0, 0.0), 8);
        }

        #[test]
        fn partial_first_item_pulls_in_one_more() {
            let config = config();
            let start = FixedSize.start_index_for_offset(&config, 35.0);
            assert_eq!(start, 0);
            // Viewport [35, 385) touches items 0..=9.
            assert_eq!(FixedSize.stop_index_for_start_index(&config, start, 35.0), 9);
        }

        #[test]
        fn clamps_at_list_end() {
            let config = config();
            let start = FixedSize.start_index_for_offset(&config, 3650.0);
            assert_eq!(
                FixedSize.stop_index_for_start_index(&config, start, 3650.0),
                99
            );
        }
    }

    mod alignment {
        use super::*;

        #[test]
        fn center_matches_worked_example() {
            // count=100 size=40 viewport=350, target 50 from offset 0:
            // last=3650, max=2000, min=1690, middle=round(1690+155)=1845.
            let planned =
                FixedSize.offset_for_alignment(&config(), 50, AlignmentPolicy::Center, 0.0);
            assert_eq!(planned, 1845.0);
        }

        #[test]
        fn center_near_head_returns_zero() {
            let planned =
                FixedSize.offset_for_alignment(&config(), 1, AlignmentPolicy::Center, 0.0);
            assert_eq!(planned, 0.0);
        }

        #[test]
        fn center_near_tail_returns_last_item_offset() {
            let planned =
                FixedSize.offset_for_alignment(&config(), 99, AlignmentPolicy::Center, 0.0);
            assert_eq!(planned, 3650.0);
        }

        #[test]
        fn auto_keeps_current_when_target_visible() {
            // offset_for_index(10)=400; with a 500px viewport the item is
            // fully visible from current=50, so the plan is a no-op.
            let config = ListConfig::new(100, 40.0, 500.0).unwrap();
            let planned =
                FixedSize.offset_for_alignment(&config, 10, AlignmentPolicy::Auto, 50.0);
            assert_eq!(planned, 50.0);
        }

        #[test]
        fn auto_scrolls_forward_to_min_offset() {
            // Target far below: min = 2000 - 350 + 40 = 1690.
            let planned =
                FixedSize.offset_for_alignment(&config(), 50, AlignmentPolicy::Auto, 0.0);
            assert_eq!(planned, 1690.0);
        }

        #[test]
        fn auto_scrolls_backward_to_max_offset() {
            // Target far above the viewport: plan lands on its leading edge.
            let planned =
                FixedSize.offset_for_alignment(&config(), 10, AlignmentPolicy::Auto, 3000.0);
            assert_eq!(planned, 400.0);
        }

        #[test]
        fn start_returns_max_offset() {
            let planned =
                FixedSize.offset_for_alignment(&config(), 50, AlignmentPolicy::Start, 0.0);
            assert_eq!(planned, 2000.0);
        }

        #[test]
        fn end_returns_min_offset() {
            let planned =
                FixedSize.offset_for_alignment(&config(), 50, AlignmentPolicy::End, 0.0);
            assert_eq!(planned, 1690.0);
        }

        #[test]
        fn smart_resolves_auto_within_a_viewport() {
            // Target index 10 from current 50: well within one viewport.
            let auto =
                FixedSize.offset_for_alignment(&config(), 10, AlignmentPolicy::Auto, 50.0);
            let smart =
                FixedSize.offset_for_alignment(&config(), 10, AlignmentPolicy::Smart, 50.0);
            assert_eq!(smart, auto);
        }

        #[test]
        fn smart_resolves_center_for_long_jumps() {
            let center =
                FixedSize.offset_for_alignment(&config(), 90, AlignmentPolicy::Center, 0.0);
            let smart =
                FixedSize.offset_for_alignment(&config(), 90, AlignmentPolicy::Smart, 0.0);
            assert_eq!(smart, center);
        }

        #[test]
        fn scrollbar_size_pushes_min_offset() {
            let config = ListConfig::new(100, 40.0, 350.0)
                .unwrap()
                .with_scrollbar_size(10.0)
                .unwrap();
            let planned =
                FixedSize.offset_for_alignment(&config, 50, AlignmentPolicy::End, 0.0);
            assert_eq!(planned, 1700.0);
        }

        #[test]
        fn result_clamped_for_out_of_range_target() {
            let planned =
                FixedSize.offset_for_alignment(&config(), 10_000, AlignmentPolicy::Start, 0.0);
            assert!(planned >= 0.0 && planned <= 3650.0);
        }

        #[test]
        fn short_list_always_plans_zero() {
            // Content fits the viewport: last_item_offset is 0.
            let config = ListConfig::new(5, 40.0, 350.0).unwrap();
            for policy in [
                AlignmentPolicy::Auto,
                AlignmentPolicy::Start,
                AlignmentPolicy::End,
                AlignmentPolicy::Center,
                AlignmentPolicy::Smart,
            ] {
                let planned = FixedSize.offset_for_alignment(&config, 3, policy, 0.0);
                assert_eq!(planned, 0.0, "policy {:?}", policy);
            }
        }

        #[test]
        fn idempotent_for_identical_inputs() {
            let config = config();
            let a = FixedSize.offset_for_alignment(&config, 42, AlignmentPolicy::Smart, 777.0);
            let b = FixedSize.offset_for_alignment(&config, 42, AlignmentPolicy::Smart, 777.0);
            assert_eq!(a, b);
        }
    }
}
