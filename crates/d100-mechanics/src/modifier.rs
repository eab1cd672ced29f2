//! Flat modifiers added to a percentile roll.

use crate::dice::{RollSource, roll_d100};
use crate::error::{MechError, MechResult};

/// A percentile roll adjusted by a flat modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifiedRoll {
    /// The raw die value (1-100).
    pub roll: u32,
    /// The modifier applied to the roll.
    pub modifier: i32,
    /// `roll + modifier`, unclamped.
    pub total: i64,
}

impl ModifiedRoll {
    /// Whether the modifier subtracts from the roll.
    pub fn is_penalty(&self) -> bool {
        self.modifier < 0
    }
}

/// Parse a signed whole-number modifier such as `+10`, `-20` or `5`.
pub fn parse_modifier(input: &str) -> MechResult<i32> {
    let trimmed = input.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| MechError::InvalidModifier(trimmed.to_string()))
}

/// Roll a d100 and add `modifier` to it.
pub fn roll_with_modifier(source: &mut impl RollSource, modifier: i32) -> ModifiedRoll {
    let roll = roll_d100(source);
    ModifiedRoll {
        roll,
        modifier,
        total: i64::from(roll) + i64::from(modifier),
    }
}
