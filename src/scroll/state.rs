//! Per-instance scroll bookkeeping.

/// Direction of the most recent scroll offset change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    /// Towards increasing offsets.
    #[default]
    Forward,
    /// Towards decreasing offsets.
    Backward,
}

/// Mutable scroll state owned by a list instance.
///
/// Created at mount, updated on every scroll event, destroyed at unmount.
/// The offset is always clamped to `[0, max_offset]` on update.
///
/// `is_programmatic` is a soft mutual-exclusion signal, not a lock: it is
/// set while a planned scroll is in flight so that scroll-driven
/// recomputation of the active sticky section is suppressed, preventing the
/// two control paths from fighting over the same state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    offset: f64,
    direction: ScrollDirection,
    is_programmatic: bool,
}

impl ScrollState {
    /// State at mount: offset 0, forward, not programmatic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scroll offset in pixels.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Direction of the last offset change.
    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Whether a planned scroll is currently in flight.
    pub fn is_programmatic(&self) -> bool {
        self.is_programmatic
    }

    /// Update the offset, clamping to `[0, max_offset]` and deriving the
    /// scroll direction. Returns the clamped offset.
    ///
    /// An unchanged offset keeps the previous direction.
    pub fn set_offset(&mut self, offset: f64, max_offset: f64) -> f64 {
        let clamped = offset.clamp(0.0, max_offset.max(0.0));
        if clamped > self.offset {
            self.direction = ScrollDirection::Forward;
        } else if clamped < self.offset {
            self.direction = ScrollDirection::Backward;
        }
        self.offset = clamped;
        self.offset
    }

    /// Mark the start of a planned scroll.
    pub fn begin_programmatic(&mut self) {
        self.is_programmatic = true;
    }

    /// Mark the end of a planned scroll.
    pub fn end_programmatic(&mut self) {
        self.is_programmatic = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_zero_forward() {
        let state = ScrollState::new();
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.direction(), ScrollDirection::Forward);
        assert!(!state.is_programmatic());
    }

    #[test]
    fn set_offset_clamps_below_zero() {
        let mut state = ScrollState::new();
        assert_eq!(state.set_offset(-10.0, 100.0), 0.0);
    }

    #[test]
    fn set_offset_clamps_above_max() {
        let mut state = ScrollState::new();
        assert_eq!(state.set_offset(250.0, 100.0), 100.0);
    }

    #[test]
    fn set_offset_tolerates_negative_max() {
        // Shrinking item_count can transiently produce a stale larger
        // offset; a content-smaller-than-viewport list has max_offset 0.
        let mut state = ScrollState::new();
        assert_eq!(state.set_offset(50.0, -0.0), 0.0);
    }

    #[test]
    fn direction_tracks_increase_and_decrease() {
        let mut state = ScrollState::new();
        state.set_offset(50.0, 100.0);
        assert_eq!(state.direction(), ScrollDirection::Forward);
        state.set_offset(20.0, 100.0);
        assert_eq!(state.direction(), ScrollDirection::Backward);
    }

    #[test]
    fn unchanged_offset_keeps_direction() {
        let mut state = ScrollState::new();
        state.set_offset(50.0, 100.0);
        state.set_offset(20.0, 100.0);
        state.set_offset(20.0, 100.0);
        assert_eq!(state.direction(), ScrollDirection::Backward);
    }

    #[test]
    fn programmatic_flag_toggles() {
        let mut state = ScrollState::new();
        state.begin_programmatic();
        assert!(state.is_programmatic());
        state.end_programmatic();
        assert!(!state.is_programmatic());
    }
}
