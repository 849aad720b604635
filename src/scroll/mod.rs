//! Scroll-side types: alignment policies, scroll state, event coalescing.
//!
//! # Module Structure
//!
//! - `alignment`: [`AlignmentPolicy`] - where a target item should land in
//!   the viewport after a programmatic scroll
//! - `state`: [`ScrollState`] / [`ScrollDirection`] - per-instance scroll
//!   bookkeeping, created at mount and updated on every scroll event
//! - `coalesce`: [`ScrollCoalescer`] - time-windowed coalescing of the
//!   scroll event stream

pub mod alignment;
pub mod coalesce;
pub mod state;

pub use alignment::AlignmentPolicy;
pub use coalesce::ScrollCoalescer;
pub use state::{ScrollDirection, ScrollState};
