//! Main-menu commands and their input tokens.
//!
//! | Token                 | Command          |
//! |-----------------------|------------------|
//! | `1`, space            | RollSimple       |
//! | `2`                   | RollWithModifier |
//! | `3`, `t`              | SkillCheck       |
//! | `4`, `d`              | DamageRoll       |
//! | `5`, `h`              | ShowHistory      |
//! | `6`, `a`              | ShowHelp         |
//! | `0`, `q`, Esc         | Quit             |

/// The escape character, accepted as a quit token.
pub const ESCAPE: &str = "\u{1b}";

/// A main-menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Roll a plain d100.
    RollSimple,
    /// Roll a d100 plus a modifier.
    RollWithModifier,
    /// Roll a skill check.
    SkillCheck,
    /// Roll weapon damage.
    DamageRoll,
    /// Show recent rolls.
    ShowHistory,
    /// Show the help screen.
    ShowHelp,
    /// Leave the program.
    Quit,
}

impl Command {
    /// Map one line of input to a command.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. A
    /// line made only of spaces is the quick-roll shortcut.
    pub fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim();
        if token.is_empty() {
            return raw.contains(' ').then_some(Self::RollSimple);
        }
        if token == ESCAPE {
            return Some(Self::Quit);
        }
        match token.to_lowercase().as_str() {
            "1" => Some(Self::RollSimple),
            "2" => Some(Self::RollWithModifier),
            "3" | "t" => Some(Self::SkillCheck),
            "4" | "d" => Some(Self::DamageRoll),
            "5" | "h" => Some(Self::ShowHistory),
            "6" | "a" => Some(Self::ShowHelp),
            "0" | "q" => Some(Self::Quit),
            _ => None,
        }
    }

    /// Short name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::RollSimple => "roll",
            Self::RollWithModifier => "roll-with-modifier",
            Self::SkillCheck => "skill-check",
            Self::DamageRoll => "damage",
            Self::ShowHistory => "history",
            Self::ShowHelp => "help",
            Self::Quit => "quit",
        }
    }
}
