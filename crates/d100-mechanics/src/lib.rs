//! Percentile (d100) game mechanics.
//!
//! Provides the roll engine behind an injectable [`RollSource`], flat
//! modifiers, roll-under skill checks with fixed critical ranges, and
//! weapon-class damage. Nothing here performs I/O.

pub mod damage;
pub mod dice;
pub mod error;
pub mod modifier;
pub mod resolution;

pub use damage::{DamageRoll, WeaponClass, damage_roll};
pub use dice::{D100_SIDES, RandomRolls, RollSource, ScriptedRolls, roll_d100};
pub use error::{MechError, MechResult};
pub use modifier::{ModifiedRoll, parse_modifier, roll_with_modifier};
pub use resolution::{Outcome, SkillCheck, classify, parse_difficulty, parse_skill, skill_check};
