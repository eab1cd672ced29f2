//! Configuration for a dice-rolling session.

use crate::history::DEFAULT_CAPACITY;

/// Default number of entries shown by the history command.
pub const DEFAULT_HISTORY_VIEW: usize = 10;

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible rolls. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Maximum number of history entries kept.
    pub history_capacity: usize,
    /// Number of history entries shown by the history command.
    pub history_view: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            history_capacity: DEFAULT_CAPACITY,
            history_view: DEFAULT_HISTORY_VIEW,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the history capacity (at least 1).
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity.max(1);
        self
    }

    /// Set how many entries the history command shows (at least 1).
    pub fn with_history_view(mut self, view: usize) -> Self {
        self.history_view = view.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.history_capacity, 50);
        assert_eq!(cfg.history_view, 10);
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_seed(123)
            .with_history_capacity(20)
            .with_history_view(5);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.history_capacity, 20);
        assert_eq!(cfg.history_view, 5);
    }

    #[test]
    fn sizes_clamped_to_one() {
        let cfg = SessionConfig::default()
            .with_history_capacity(0)
            .with_history_view(0);
        assert_eq!(cfg.history_capacity, 1);
        assert_eq!(cfg.history_view, 1);
    }
}
