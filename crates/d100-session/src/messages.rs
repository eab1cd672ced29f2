//! Fixed screen text and result phrasing.
//!
//! Result messages are phrased to be read aloud: "plus" and "minus" rather
//! than symbols, and the outcome at the end of the sentence.

use d100_mechanics::{DamageRoll, ModifiedRoll, Outcome, SkillCheck, WeaponClass};

/// Main menu, shown before every choice.
pub const MENU: &str = "
==================================================
ACCESSIBLE DICE ROLLER - SYSTEM UNIVERSE d100
==================================================

MAIN MENU:
1 - Roll a simple d100
2 - Roll a d100 with a modifier
3 - Skill check
4 - Damage roll
5 - Roll history
6 - Help and shortcuts
0 - Quit

Shortcuts: [Space]=d100, [T]=check, [D]=damage, [H]=history, [Q]=quit";

/// Prompt for a main-menu choice.
pub const CHOICE_PROMPT: &str = "Your choice: ";

/// Prompt for a flat modifier.
pub const MODIFIER_PROMPT: &str = "Modifier (+/-): ";

/// Prompt for a skill value.
pub const SKILL_PROMPT: &str = "Skill value (0-100): ";

/// Prompt for an optional difficulty modifier.
pub const DIFFICULTY_PROMPT: &str = "Difficulty modifier (+/-) [Enter for 0]: ";

/// Prompt for a weapon class.
pub const WEAPON_PROMPT: &str = "Weapon class (1-4): ";

/// Header shown before a skill check.
pub const SKILL_HEADER: &str = "\n=== SKILL CHECK ===";

/// Header shown before the weapon list.
pub const DAMAGE_HEADER: &str = "\n=== DAMAGE ROLL ===";

/// Header shown before the history listing.
pub const HISTORY_HEADER: &str = "\n=== ROLL HISTORY ===";

/// Spoken when the history listing starts.
pub const HISTORY_TITLE: &str = "Roll history";

/// Spoken when there is nothing to list.
pub const HISTORY_EMPTY: &str = "No rolls in history yet.";

/// Spoken after the help screen.
pub const HELP_SHOWN: &str = "Help displayed. See the screen for full details.";

/// Spoken for an unrecognised menu choice.
pub const INVALID_CHOICE: &str = "Invalid choice. Use the digits 0-6 or the shortcuts.";

/// Spoken on exit.
pub const FAREWELL: &str = "Goodbye! Thank you for using the accessible dice roller.";

/// Spoken before the program exits on an unrecoverable error.
pub const FATAL_ERROR: &str = "Fatal error. See the console for details.";

/// Full help screen.
pub const HELP: &str = "
=== HELP - ACCESSIBLE DICE ROLLER ===

KEYBOARD SHORTCUTS:
- Space : quick d100 roll
- T : skill check
- D : damage roll
- H : roll history
- A : show this help
- Q or Esc : quit

NAVIGATION:
- Use the digits to pick menu entries
- Enter to confirm
- Ctrl-C or Esc at any prompt to quit

ACCESSIBILITY:
- 100% keyboard interface
- Optional speech output
- Works with screen readers
- Clear, complete messages

SYSTEM UNIVERSE d100:
- Every check: 1d100 <= Skill + Modifiers
- Critical success: 01-05
- Critical failure: 96-00
- Modifiers: -40 (Heroic) to +30 (Very Easy)";

/// Weapon classes with their divisors, one per line.
pub fn weapon_menu() -> String {
    let mut out = String::from("Weapon classes:");
    for class in WeaponClass::all() {
        out.push_str(&format!(
            "\n{} - {} ({}), divide by {}",
            class.key(),
            class,
            class.examples(),
            class.divisor()
        ));
    }
    out
}

/// `d100: 47`
pub fn simple_roll(roll: u32) -> String {
    format!("d100: {roll}")
}

/// `d100: 30 minus 10 equals 20`
pub fn modified_roll(result: &ModifiedRoll) -> String {
    let word = if result.is_penalty() { "minus" } else { "plus" };
    format!(
        "d100: {} {word} {} equals {}",
        result.roll,
        result.modifier.unsigned_abs(),
        result.total
    )
}

/// History annotation for a modified roll.
pub fn modified_roll_details(result: &ModifiedRoll) -> String {
    format!("modifier {:+}, total {}", result.modifier, result.total)
}

/// The shouted status word for an outcome.
pub fn outcome_status(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::CriticalSuccess => "CRITICAL SUCCESS!",
        Outcome::Success => "SUCCESS!",
        Outcome::CriticalFailure => "CRITICAL FAILURE.",
        Outcome::Failure => "FAILURE.",
    }
}

/// `Check: rolled 50 against 50. SUCCESS!`
pub fn skill_check(check: &SkillCheck) -> String {
    format!(
        "Check: rolled {} against {}. {}",
        check.roll,
        check.threshold,
        outcome_status(check.outcome)
    )
}

/// History annotation for a skill check.
pub fn skill_check_details(check: &SkillCheck) -> String {
    format!("threshold {}, {}", check.threshold, check.outcome)
}

/// `Light weapon: rolled 47 divided by 10 equals 4 damage`
pub fn damage(result: &DamageRoll) -> String {
    format!(
        "{} weapon: rolled {} divided by {} equals {} damage",
        result.class,
        result.roll,
        result.class.divisor(),
        result.damage
    )
}

/// History annotation for a damage roll.
pub fn damage_details(result: &DamageRoll) -> String {
    format!("{}: {} damage", result.class, result.damage)
}

/// Spoken after the history listing.
pub fn history_summary(shown: usize, total: usize) -> String {
    if total > shown {
        format!("Showing the last {shown} of {total} rolls")
    } else {
        format!("{total} rolls in total")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_phrasing_follows_sign() {
        let minus = ModifiedRoll {
            roll: 30,
            modifier: -10,
            total: 20,
        };
        assert_eq!(modified_roll(&minus), "d100: 30 minus 10 equals 20");
        assert_eq!(modified_roll_details(&minus), "modifier -10, total 20");

        let plus = ModifiedRoll {
            roll: 30,
            modifier: 0,
            total: 30,
        };
        assert_eq!(modified_roll(&plus), "d100: 30 plus 0 equals 30");
        assert_eq!(modified_roll_details(&plus), "modifier +0, total 30");
    }

    #[test]
    fn skill_check_phrasing() {
        let check = SkillCheck {
            roll: 97,
            threshold: 80,
            outcome: Outcome::CriticalFailure,
        };
        assert_eq!(
            skill_check(&check),
            "Check: rolled 97 against 80. CRITICAL FAILURE."
        );
        assert_eq!(
            skill_check_details(&check),
            "threshold 80, Critical Failure"
        );
    }

    #[test]
    fn damage_phrasing() {
        let result = DamageRoll {
            class: WeaponClass::Light,
            roll: 47,
            damage: 4,
        };
        assert_eq!(
            damage(&result),
            "Light weapon: rolled 47 divided by 10 equals 4 damage"
        );
        assert_eq!(damage_details(&result), "Light: 4 damage");
    }

    #[test]
    fn weapon_menu_lists_all_classes() {
        let menu = weapon_menu();
        assert!(menu.contains("1 - Light (knife, club), divide by 10"));
        assert!(menu.contains("4 - Very heavy (rocket launcher), divide by 2"));
        assert_eq!(menu.lines().count(), 5);
    }

    #[test]
    fn history_summary_wording() {
        assert_eq!(history_summary(10, 55), "Showing the last 10 of 55 rolls");
        assert_eq!(history_summary(3, 3), "3 rolls in total");
    }

    #[test]
    fn statuses() {
        assert_eq!(outcome_status(Outcome::Success), "SUCCESS!");
        assert_eq!(outcome_status(Outcome::Failure), "FAILURE.");
        assert_eq!(outcome_status(Outcome::CriticalSuccess), "CRITICAL SUCCESS!");
    }
}
