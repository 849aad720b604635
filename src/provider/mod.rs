//! Collaborator contracts consumed by the engine.
//!
//! The engine never fetches or owns content; a [`DataProvider`] supplies
//! what to render for an index, and a [`SectionSource`] describes how a
//! sectioned data set partitions its items so sticky breakpoints can be
//! built. Neither collaborator knows anything about virtualization.

use crate::sticky::StickyBreakpoint;

/// Supplies renderable content for item indices.
///
/// The renderer asks for `item(i)` for each `i` in the visible range; the
/// provider has no knowledge of which indices are visible.
pub trait DataProvider {
    /// Content handed to the renderer for one item.
    type Item;

    /// Number of items available. Feeds `item_count` in the configuration.
    fn len(&self) -> usize;

    /// Whether the provider holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Content for `index`. Called only with `index < len()`.
    fn item(&self, index: usize) -> Self::Item;
}

impl<T: Clone> DataProvider for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn item(&self, index: usize) -> T {
        self[index].clone()
    }
}

/// Describes the section structure of the underlying data set.
///
/// Supplies an ordered list of per-section item counts whenever the
/// sectioning changes (for example when a search filter replaces
/// categorized sections with a single flat "results" section).
pub trait SectionSource {
    /// Number of sections.
    fn section_count(&self) -> usize;

    /// Number of items in section `section`. Called only with
    /// `section < section_count()`.
    fn section_len(&self, section: usize) -> usize;
}

impl SectionSource for [usize] {
    fn section_count(&self) -> usize {
        self.len()
    }

    fn section_len(&self, section: usize) -> usize {
        self[section]
    }
}

/// Build the ordered sticky breakpoint set for a sectioned data set.
///
/// Offsets are cumulative: each section starts where the previous one ends,
/// and a header hides exactly where the next section starts (the last
/// section's header never hides). Empty sections are skipped so the
/// resulting offsets stay strictly increasing.
///
/// ```
/// use listwindow::breakpoints_from_sections;
///
/// let bps = breakpoints_from_sections(&[12usize, 18, 30][..], 40.0);
/// assert_eq!(bps.len(), 3);
/// assert_eq!(bps[1].section_start_offset, 480.0);
/// assert_eq!(bps[0].section_hide_after_offset, 480.0);
/// ```
pub fn breakpoints_from_sections<S: SectionSource + ?Sized>(
    source: &S,
    item_size: f64,
) -> Vec<StickyBreakpoint> {
    let mut breakpoints = Vec::with_capacity(source.section_count());
    let mut item_index = 0usize;

    for section_index in 0..source.section_count() {
        let len = source.section_len(section_index);
        if len == 0 {
            continue;
        }
        breakpoints.push(StickyBreakpoint {
            section_index,
            item_index,
            section_start_offset: item_index as f64 * item_size,
            section_hide_after_offset: (item_index + len) as f64 * item_size,
        });
        item_index += len;
    }

    if let Some(last) = breakpoints.last_mut() {
        last.section_hide_after_offset = f64::INFINITY;
    }

    breakpoints
}
