//! Resolution of percentile rolls against a threshold.
//!
//! A check succeeds when the d100 comes up at or under the threshold
//! (skill + difficulty modifier). Fixed ranges at either end of the die
//! override the comparison, in this priority order:
//!
//! 1. **01-05**: critical success, whatever the threshold
//! 2. **roll ≤ threshold**: success
//! 3. **96-00**: critical failure
//! 4. anything else: failure
//!
//! Because success is checked before critical failure, a threshold of 96 or
//! more turns the matching top-end rolls into plain successes.

pub mod skill;

pub use skill::{SkillCheck, parse_difficulty, parse_skill, skill_check};

use std::ops::RangeInclusive;

/// Rolls that always count as a critical success.
pub const CRITICAL_SUCCESS: RangeInclusive<u32> = 1..=5;

/// Rolls that count as a critical failure unless the threshold already covers them.
pub const CRITICAL_FAILURE: RangeInclusive<u32> = 96..=100;

/// The outcome of resolving a percentile roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A roll of 01-05.
    CriticalSuccess,
    /// A roll at or under the threshold.
    Success,
    /// A roll above the threshold.
    Failure,
    /// A roll of 96-00 above the threshold.
    CriticalFailure,
}

impl Outcome {
    /// Whether the check succeeded, critically or not.
    pub fn is_success(self) -> bool {
        matches!(self, Self::CriticalSuccess | Self::Success)
    }

    /// Whether the outcome came from one of the fixed critical ranges.
    pub fn is_critical(self) -> bool {
        matches!(self, Self::CriticalSuccess | Self::CriticalFailure)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CriticalSuccess => write!(f, "Critical Success"),
            Self::Success => write!(f, "Success"),
            Self::Failure => write!(f, "Failure"),
            Self::CriticalFailure => write!(f, "Critical Failure"),
        }
    }
}

/// Classify a roll against a threshold.
pub fn classify(roll: u32, threshold: i64) -> Outcome {
    if CRITICAL_SUCCESS.contains(&roll) {
        Outcome::CriticalSuccess
    } else if i64::from(roll) <= threshold {
        Outcome::Success
    } else if CRITICAL_FAILURE.contains(&roll) {
        Outcome::CriticalFailure
    } else {
        Outcome::Failure
    }
}
