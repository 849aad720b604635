//! Time-windowed coalescing of the scroll event stream.

use std::time::{Duration, Instant};

/// Default coalescing window between recomputations during continuous
/// scrolling.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(50);

/// Coalesces a fast scroll event stream to a bounded recomputation cadence.
///
/// During fast continuous scrolling the host may deliver offsets far more
/// often than the engine needs to recompute the visible range. The coalescer
/// emits at most one offset per window; intermediate offsets within a window
/// are dropped, the latest always wins. This is a performance optimization,
/// not a correctness requirement: [`flush`](Self::flush) returns whatever is
/// still pending, so the final computed state converges to the true final
/// offset once scrolling settles.
///
/// The caller supplies `now` so the coalescer owns no clock and tests stay
/// deterministic.
#[derive(Debug, Clone)]
pub struct ScrollCoalescer {
    window: Duration,
    last_emit: Option<Instant>,
    pending: Option<f64>,
}

impl ScrollCoalescer {
    /// Coalescer with the default window.
    pub fn new() -> Self {
        Self::with_window(DEFAULT_WINDOW)
    }

    /// Coalescer with an explicit window.
    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            last_emit: None,
            pending: None,
        }
    }

    /// Offer a scroll offset observed at `now`.
    ///
    /// Returns `Some(offset)` when the window has elapsed (or on the first
    /// event ever) and the offset should be processed now; `None` when the
    /// event was absorbed into the pending slot.
    pub fn offer(&mut self, offset: f64, now: Instant) -> Option<f64> {
        self.pending = Some(offset);
        let due = match self.last_emit {
            None => true,
            Some(last) => now.duration_since(last) >= self.window,
        };
        if due {
            self.last_emit = Some(now);
            self.pending.take()
        } else {
            None
        }
    }

    /// Take the still-pending offset, if any.
    ///
    /// Call when scrolling settles so the engine converges to the true final
    /// offset. Idempotent: a second flush returns `None`.
    pub fn flush(&mut self) -> Option<f64> {
        self.pending.take()
    }

    /// Forget pending state and the emission clock.
    pub fn reset(&mut self) {
        self.last_emit = None;
        self.pending = None;
    }
}

impl Default for ScrollCoalescer {
    fn default() -> Self {
        Self::new()
    }
}
