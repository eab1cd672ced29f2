//! History entry types.

use chrono::NaiveTime;

/// What kind of roll produced a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// A plain d100.
    SimpleRoll,
    /// A d100 with a flat modifier.
    ModifiedRoll,
    /// A roll-under skill check.
    SkillCheck,
    /// A weapon damage roll.
    Damage,
}

impl ActionKind {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::SimpleRoll => "Simple roll",
            Self::ModifiedRoll => "Roll with modifier",
            Self::SkillCheck => "Skill check",
            Self::Damage => "Damage roll",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single recorded roll. Entries never change once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    timestamp: NaiveTime,
    action: ActionKind,
    result: u32,
    details: String,
}

impl HistoryEntry {
    /// Create an entry.
    pub fn new(
        timestamp: NaiveTime,
        action: ActionKind,
        result: u32,
        details: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            action,
            result,
            details: details.into(),
        }
    }

    /// Time of day the roll was made.
    pub fn timestamp(&self) -> NaiveTime {
        self.timestamp
    }

    /// The time of day as `HH:MM:SS`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    /// What kind of roll this was.
    pub fn action(&self) -> ActionKind {
        self.action
    }

    /// The raw die value.
    pub fn result(&self) -> u32 {
        self.result
    }

    /// Free-text annotation, possibly empty.
    pub fn details(&self) -> &str {
        &self.details
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}: {}", self.time_label(), self.action, self.result)?;
        if !self.details.is_empty() {
            write!(f, " ({})", self.details)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn display_without_details() {
        let entry = HistoryEntry::new(at(9, 5, 3), ActionKind::SimpleRoll, 42, "");
        assert_eq!(entry.to_string(), "09:05:03 - Simple roll: 42");
    }

    #[test]
    fn display_with_details() {
        let entry = HistoryEntry::new(
            at(21, 30, 0),
            ActionKind::Damage,
            47,
            "Light: 4 damage",
        );
        assert_eq!(
            entry.to_string(),
            "21:30:00 - Damage roll: 47 (Light: 4 damage)"
        );
    }

    #[test]
    fn accessors() {
        let entry = HistoryEntry::new(at(12, 0, 0), ActionKind::SkillCheck, 97, "threshold 80");
        assert_eq!(entry.action(), ActionKind::SkillCheck);
        assert_eq!(entry.result(), 97);
        assert_eq!(entry.details(), "threshold 80");
        assert_eq!(entry.time_label(), "12:00:00");
        assert_eq!(entry.timestamp(), at(12, 0, 0));
    }

    #[test]
    fn action_labels() {
        assert_eq!(ActionKind::SimpleRoll.to_string(), "Simple roll");
        assert_eq!(ActionKind::ModifiedRoll.to_string(), "Roll with modifier");
        assert_eq!(ActionKind::SkillCheck.to_string(), "Skill check");
        assert_eq!(ActionKind::Damage.to_string(), "Damage roll");
    }
}
