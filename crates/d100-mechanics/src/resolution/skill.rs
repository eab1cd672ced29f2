//! Skill checks: roll a d100 at or under skill + difficulty.

use crate::dice::{RollSource, roll_d100};
use crate::error::{MechError, MechResult};
use crate::modifier::parse_modifier;
use crate::resolution::{Outcome, classify};

/// Highest valid skill value.
pub const MAX_SKILL: u32 = 100;

/// The result of a skill check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCheck {
    /// The raw die value (1-100).
    pub roll: u32,
    /// Skill plus difficulty modifier, unclamped.
    pub threshold: i64,
    /// The classified outcome.
    pub outcome: Outcome,
}

/// Parse a skill value, which must be a whole number in 0-100.
pub fn parse_skill(input: &str) -> MechResult<u32> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| MechError::InvalidSkill(trimmed.to_string()))?;
    u32::try_from(value)
        .ok()
        .filter(|skill| *skill <= MAX_SKILL)
        .ok_or(MechError::SkillOutOfRange(value))
}

/// Parse a difficulty modifier. Empty input means no modifier.
pub fn parse_difficulty(input: &str) -> MechResult<i32> {
    if input.trim().is_empty() {
        return Ok(0);
    }
    parse_modifier(input)
}

/// Roll a skill check.
///
/// The skill is validated before anything is rolled.
pub fn skill_check(
    source: &mut impl RollSource,
    skill: u32,
    difficulty: i32,
) -> MechResult<SkillCheck> {
    if skill > MAX_SKILL {
        return Err(MechError::SkillOutOfRange(i64::from(skill)));
    }
    let threshold = i64::from(skill) + i64::from(difficulty);
    let roll = roll_d100(source);
    Ok(SkillCheck {
        roll,
        threshold,
        outcome: classify(roll, threshold),
    })
}
