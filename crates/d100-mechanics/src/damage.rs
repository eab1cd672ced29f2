//! Weapon damage.
//!
//! Damage is the d100 roll divided by the weapon class divisor, rounded down:
//! - Light (knife, club): /10
//! - Medium (sword, pistol): /5
//! - Heavy (two-handed axe, rifle): /3
//! - Very heavy (rocket launcher): /2

use std::str::FromStr;

use crate::dice::{RollSource, roll_d100};
use crate::error::{MechError, MechResult};

/// How heavy a weapon is, which sets its damage divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponClass {
    /// Knives, clubs.
    Light,
    /// Swords, pistols.
    Medium,
    /// Two-handed axes, rifles.
    Heavy,
    /// Rocket launchers.
    VeryHeavy,
}

impl WeaponClass {
    /// All classes in menu order.
    pub fn all() -> &'static [WeaponClass] {
        &[
            WeaponClass::Light,
            WeaponClass::Medium,
            WeaponClass::Heavy,
            WeaponClass::VeryHeavy,
        ]
    }

    /// The divisor applied to the roll.
    pub fn divisor(self) -> u32 {
        match self {
            Self::Light => 10,
            Self::Medium => 5,
            Self::Heavy => 3,
            Self::VeryHeavy => 2,
        }
    }

    /// The menu key for this class (1-4).
    pub fn key(self) -> u8 {
        match self {
            Self::Light => 1,
            Self::Medium => 2,
            Self::Heavy => 3,
            Self::VeryHeavy => 4,
        }
    }

    /// Typical weapons of this class.
    pub fn examples(self) -> &'static str {
        match self {
            Self::Light => "knife, club",
            Self::Medium => "sword, pistol",
            Self::Heavy => "two-handed axe, rifle",
            Self::VeryHeavy => "rocket launcher",
        }
    }

    /// Parse a menu key (`1`-`4`) or class name, case-insensitively.
    pub fn from_token(token: &str) -> MechResult<Self> {
        let normalized = token.trim().to_lowercase();
        match normalized.as_str() {
            "1" | "light" => Ok(Self::Light),
            "2" | "medium" => Ok(Self::Medium),
            "3" | "heavy" => Ok(Self::Heavy),
            "4" | "very-heavy" | "veryheavy" | "very heavy" => Ok(Self::VeryHeavy),
            _ => Err(MechError::UnknownWeaponClass(token.trim().to_string())),
        }
    }
}

impl FromStr for WeaponClass {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

impl std::fmt::Display for WeaponClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "Light"),
            Self::Medium => write!(f, "Medium"),
            Self::Heavy => write!(f, "Heavy"),
            Self::VeryHeavy => write!(f, "Very heavy"),
        }
    }
}

/// The result of a damage roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageRoll {
    /// The weapon class rolled for.
    pub class: WeaponClass,
    /// The raw die value (1-100).
    pub roll: u32,
    /// `roll / class.divisor()`, rounded down.
    pub damage: u32,
}

/// Roll damage for a weapon class.
pub fn damage_roll(source: &mut impl RollSource, class: WeaponClass) -> DamageRoll {
    let roll = roll_d100(source);
    DamageRoll {
        class,
        roll,
        damage: roll / class.divisor(),
    }
}
