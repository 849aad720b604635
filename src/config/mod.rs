//! List configuration and validation.
//!
//! [`ListConfig`] is the single source of truth every other component reads
//! from. It is owned exclusively by the list instance and replaced wholesale
//! on any structural change (never merged field-by-field) so that replacement
//! is the one invalidation signal the rest of the engine relies on.
//!
//! # Validation
//!
//! Configuration errors are the only fatal error class in the engine:
//! a config that fails validation is rejected at construction time with a
//! typed [`ConfigError`], before the instance exists. Once a valid config is
//! in place, every per-call operation is total - out-of-range indices and
//! offsets are clamped, never raised.
//!
//! Negative `item_count` / `overscan_count` are unrepresentable by type
//! (`usize`); the float fields are checked by the smart constructor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scroll axis of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    /// Items stack top-to-bottom; the scroll axis is vertical.
    #[default]
    Vertical,
    /// Items stack left-to-right; the scroll axis is horizontal.
    Horizontal,
}

/// Configuration validation failure.
///
/// Returned by [`ListConfig::new`] and the checked `with_*` builders.
/// These are fatal-at-setup: the instance must not be used until the
/// configuration is corrected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// `item_size` must be a positive number of pixels.
    #[error("item_size must be > 0 (got {0})")]
    NonPositiveItemSize(f64),

    /// `viewport_size` must be a positive number of pixels.
    #[error("viewport_size must be > 0 (got {0})")]
    NonPositiveViewportSize(f64),

    /// `scrollbar_size` may be zero but never negative.
    #[error("scrollbar_size must be >= 0 (got {0})")]
    NegativeScrollbarSize(f64),

    /// A float field was NaN or infinite.
    #[error("{field} must be finite (got {value})")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Validated configuration for a uniform-item list.
///
/// All sizes are in pixels along the scroll axis selected by
/// [`LayoutDirection`]. Construct with [`ListConfig::new`] and the chainable
/// `with_*` methods:
///
/// ```
/// use listwindow::{LayoutDirection, ListConfig};
///
/// let config = ListConfig::new(100, 40.0, 350.0)
///     .unwrap()
///     .with_direction(LayoutDirection::Horizontal)
///     .with_overscan(2);
/// assert_eq!(config.item_count(), 100);
/// ```
///
/// Deserialization goes through the same validation as [`ListConfig::new`],
/// so a config obtained from persisted host-application settings carries the
/// same guarantees as one built in code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawListConfig")]
pub struct ListConfig {
    item_count: usize,
    item_size: f64,
    viewport_size: f64,
    layout_direction: LayoutDirection,
    overscan_count: usize,
    scrollbar_size: f64,
}

impl ListConfig {
    /// Create a validated configuration.
    ///
    /// Layout direction defaults to [`LayoutDirection::Vertical`], overscan
    /// to `0`, scrollbar size to `0.0`.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when `item_size` or `viewport_size` is not a positive
    /// finite number.
    pub fn new(item_count: usize, item_size: f64, viewport_size: f64) -> Result<Self, ConfigError> {
        check_finite("item_size", item_size)?;
        check_finite("viewport_size", viewport_size)?;
        if item_size <= 0.0 {
            return Err(ConfigError::NonPositiveItemSize(item_size));
        }
        if viewport_size <= 0.0 {
            return Err(ConfigError::NonPositiveViewportSize(viewport_size));
        }
        Ok(Self {
            item_count,
            item_size,
            viewport_size,
            layout_direction: LayoutDirection::Vertical,
            overscan_count: 0,
            scrollbar_size: 0.0,
        })
    }

    /// Set the scroll axis.
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = direction;
        self
    }

    /// Set the number of extra items rendered on each side of the strictly
    /// visible range.
    pub fn with_overscan(mut self, overscan_count: usize) -> Self {
        self.overscan_count = overscan_count;
        self
    }

    /// Set the scrollbar thickness reserved along the scroll axis.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NegativeScrollbarSize`] when negative,
    /// [`ConfigError::NonFinite`] when NaN or infinite.
    pub fn with_scrollbar_size(mut self, scrollbar_size: f64) -> Result<Self, ConfigError> {
        check_finite("scrollbar_size", scrollbar_size)?;
        if scrollbar_size < 0.0 {
            return Err(ConfigError::NegativeScrollbarSize(scrollbar_size));
        }
        self.scrollbar_size = scrollbar_size;
        Ok(self)
    }

    /// Number of items in the collection.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Size of every item along the scroll axis, in pixels.
    pub fn item_size(&self) -> f64 {
        self.item_size
    }

    /// Size of the viewport along the scroll axis, in pixels.
    pub fn viewport_size(&self) -> f64 {
        self.viewport_size
    }

    /// Scroll axis of the list.
    pub fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }

    /// Extra items rendered on each side of the visible range.
    pub fn overscan_count(&self) -> usize {
        self.overscan_count
    }

    /// Scrollbar thickness reserved along the scroll axis.
    pub fn scrollbar_size(&self) -> f64 {
        self.scrollbar_size
    }

    /// Largest valid scroll offset: `max(0, item_count * item_size - viewport_size)`.
    pub fn max_offset(&self) -> f64 {
        (self.item_count as f64 * self.item_size - self.viewport_size).max(0.0)
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

/// Wire representation used to funnel deserialization through validation.
#[derive(Deserialize)]
struct RawListConfig {
    item_count: usize,
    item_size: f64,
    viewport_size: f64,
    #[serde(default)]
    layout_direction: LayoutDirection,
    #[serde(default)]
    overscan_count: usize,
    #[serde(default)]
    scrollbar_size: f64,
}

impl TryFrom<RawListConfig> for ListConfig {
    type Error = ConfigError;

    fn try_from(raw: RawListConfig) -> Result<Self, Self::Error> {
        Ok(ListConfig::new(raw.item_count, raw.item_size, raw.viewport_size)?
            .with_direction(raw.layout_direction)
            .with_overscan(raw.overscan_count)
            .with_scrollbar_size(raw.scrollbar_size)?)
    }
}
