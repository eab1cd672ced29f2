//! Concrete roll sources.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::RollSource;

/// Rolls backed by a standard RNG.
#[derive(Debug, Clone)]
pub struct RandomRolls {
    rng: StdRng,
}

impl RandomRolls {
    /// Seed from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seed deterministically, for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is given, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RollSource for RandomRolls {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }
}

/// Replays a fixed sequence of values.
///
/// Values are returned as queued, without range checks, so tests can force
/// any face. Once the queue runs dry every draw returns `low`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    values: VecDeque<u32>,
}

impl ScriptedRolls {
    /// Queue the given values in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Queue one more value.
    pub fn push(&mut self, value: u32) {
        self.values.push_back(value);
    }

    /// Number of values not yet drawn.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RollSource for ScriptedRolls {
    fn draw(&mut self, low: u32, _high: u32) -> u32 {
        self.values.pop_front().unwrap_or(low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_replays_in_order() {
        let mut rolls = ScriptedRolls::new([3, 50, 97]);
        assert_eq!(rolls.draw(1, 100), 3);
        assert_eq!(rolls.draw(1, 100), 50);
        assert_eq!(rolls.remaining(), 1);
        assert_eq!(rolls.draw(1, 100), 97);
    }

    #[test]
    fn scripted_falls_back_to_low() {
        let mut rolls = ScriptedRolls::default();
        assert_eq!(rolls.draw(1, 100), 1);
        rolls.push(12);
        assert_eq!(rolls.draw(1, 100), 12);
    }

    #[test]
    fn seeded_is_deterministic() {
        let mut a = RandomRolls::seeded(99);
        let mut b = RandomRolls::seeded(99);
        for _ in 0..20 {
            assert_eq!(a.draw(1, 100), b.draw(1, 100));
        }
    }

    #[test]
    fn from_seed_none_still_rolls() {
        let mut rolls = RandomRolls::from_seed(None);
        let value = rolls.draw(1, 100);
        assert!((1..=100).contains(&value));
    }
}
