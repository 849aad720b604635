//! Layout strategies - pure arithmetic between item indices and pixel
//! offsets.
//!
//! The windowing math is expressed as a strategy trait rather than a class
//! hierarchy so alternate layouts (a future variable-size strategy) satisfy
//! the same interface without touching callers.
//!
//! # Module Structure
//!
//! - `strategy`: [`LayoutStrategy`] - the operation table
//! - `fixed`: [`FixedSize`] - uniform item size, the concrete strategy

pub mod fixed;
pub mod strategy;

pub use fixed::FixedSize;
pub use strategy::LayoutStrategy;
