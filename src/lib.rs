//! listwindow - fixed-size list virtualization engine
//!
//! Decides, for an arbitrarily large uniform-item collection, exactly which
//! items must exist in a rendered viewport at any scroll position, how to
//! plan a scroll offset that brings an arbitrary item into view under an
//! alignment policy, and which sticky section header is active as the
//! scroll offset changes.
//!
//! The crate is a pure computation core following the Pure Core / Impure
//! Shell architecture: it owns no scrollable surface and paints nothing.
//! A host renderer forwards scroll offsets in and mounts content for the
//! indices the engine returns.
//!
//! # Module Structure
//!
//! - `config`: [`ListConfig`] - validated list configuration, replaced
//!   wholesale on structural change
//! - `layout`: [`LayoutStrategy`] trait and the [`FixedSize`] strategy
//! - `window`: [`VisibleRange`] - inclusive render range calculation
//! - `scroll`: [`AlignmentPolicy`], scroll state, and event coalescing
//! - `sticky`: [`StickyIndexTracker`] - incremental active-section tracking
//! - `provider`: collaborator traits ([`DataProvider`], [`SectionSource`])
//! - `list`: [`VirtualList`] - the facade tying the components together
//! - `logging`: tracing subscriber initialization for host applications

pub mod config;
pub mod layout;
pub mod list;
pub mod logging;
pub mod provider;
pub mod scroll;
pub mod sticky;
pub mod window;

pub use config::{ConfigError, LayoutDirection, ListConfig};
pub use layout::{FixedSize, LayoutStrategy};
pub use list::VirtualList;
pub use provider::{breakpoints_from_sections, DataProvider, SectionSource};
pub use scroll::{AlignmentPolicy, ScrollCoalescer, ScrollDirection, ScrollState};
pub use sticky::{StickyBreakpoint, StickyIndexTracker};
pub use window::VisibleRange;
