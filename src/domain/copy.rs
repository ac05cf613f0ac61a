//! Copy - Copied Flag with Timed Reset

use std::time::Duration;

use crate::constants::DEFAULT_COPY_TIMEOUT_MS;

/// State of a copy-to-clipboard control
///
/// `begin` is called on click; when it returns a generation the caller
/// writes the clipboard and schedules `reset(generation)` after
/// [`CopyState::timeout`]. A stale reset (from an earlier click) is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyState {
    copied: bool,
    disabled: bool,
    timeout: Duration,
    generation: u64,
}

impl CopyState {
    pub fn new(timeout: Duration) -> Self {
        Self {
            copied: false,
            disabled: false,
            timeout,
            generation: 0,
        }
    }

    /// Check if the control shows the copied state
    pub fn copied(&self) -> bool {
        self.copied
    }

    /// How long the copied state lasts
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Set disabled state
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Start a copy; `None` while disabled or already showing copied
    pub fn begin(&mut self) -> Option<u64> {
        if self.disabled || self.copied {
            return None;
        }
        self.copied = true;
        self.generation += 1;
        Some(self.generation)
    }

    /// Timer fired; returns whether the state changed
    pub fn reset(&mut self, generation: u64) -> bool {
        if !self.copied || generation != self.generation {
            return false;
        }
        self.copied = false;
        true
    }
}

impl Default for CopyState {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_COPY_TIMEOUT_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_then_reset() {
        let mut state = CopyState::default();
        assert_eq!(state.timeout(), Duration::from_millis(1000));

        let generation = state.begin().expect("copy starts");
        assert!(state.copied());
        assert_eq!(state.begin(), None);

        assert!(state.reset(generation));
        assert!(!state.copied());
        assert!(!state.reset(generation));
    }

    #[test]
    fn stale_reset_is_ignored() {
        let mut state = CopyState::new(Duration::from_millis(10));
        let first = state.begin().expect("copy starts");
        assert!(state.reset(first));
        let second = state.begin().expect("copy starts again");
        assert!(!state.reset(first));
        assert!(state.copied());
        assert!(state.reset(second));
    }

    #[test]
    fn disabled_never_copies() {
        let mut state = CopyState::default();
        state.set_disabled(true);
        assert_eq!(state.begin(), None);
        assert!(!state.copied());
    }
}
