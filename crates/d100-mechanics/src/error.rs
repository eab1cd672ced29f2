//! Error types for the mechanics engine.

/// Validation errors raised before any die is rolled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// A modifier was not a whole number.
    #[error("'{0}' is not a valid modifier, enter a whole number such as +10 or -20")]
    InvalidModifier(String),

    /// A skill value was not a whole number.
    #[error("'{0}' is not a valid skill value, enter a whole number")]
    InvalidSkill(String),

    /// A skill value fell outside 0-100.
    #[error("skill must be between 0 and 100, got {0}")]
    SkillOutOfRange(i64),

    /// A weapon class token did not name one of the four classes.
    #[error("unknown weapon class '{0}', choose a weapon class from 1 to 4")]
    UnknownWeaponClass(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
