//! The interactive dice-rolling session.
//!
//! `Session` owns the roll source and the history log. [`Session::run`] is
//! the main-menu loop: show the menu, read one token, dispatch, repeat until
//! the user quits or interrupts. The per-action methods can also be called
//! directly, which is how the tests force specific rolls.

use std::io::Write;

use d100_mechanics::{
    RandomRolls, RollSource, WeaponClass, damage_roll, parse_difficulty, parse_modifier,
    parse_skill, roll_d100, roll_with_modifier, skill_check,
};

use crate::command::Command;
use crate::config::SessionConfig;
use crate::error::SessionResult;
use crate::history::{ActionKind, HistoryLog};
use crate::messages;
use crate::narrator::Narrator;
use crate::prompt::{Input, Prompt};

/// What the loop does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// An interactive dice-rolling session.
pub struct Session<R> {
    rolls: R,
    history: HistoryLog,
    config: SessionConfig,
}

impl Session<RandomRolls> {
    /// Create a session rolling with a standard RNG, seeded per the config.
    pub fn from_config(config: SessionConfig) -> Self {
        let rolls = RandomRolls::from_seed(config.seed);
        Self::new(rolls, config)
    }
}

impl<R: RollSource> Session<R> {
    /// Create a session over any roll source.
    pub fn new(rolls: R, config: SessionConfig) -> Self {
        Self {
            rolls,
            history: HistoryLog::with_capacity(config.history_capacity),
            config,
        }
    }

    /// Get the roll history.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Get the configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Roll a plain d100 and record it.
    pub fn roll_simple(&mut self) -> String {
        let roll = roll_d100(&mut self.rolls);
        self.record(ActionKind::SimpleRoll, roll, String::new());
        messages::simple_roll(roll)
    }

    /// Roll a d100 plus `modifier` and record it.
    pub fn roll_with_modifier(&mut self, modifier: i32) -> String {
        let result = roll_with_modifier(&mut self.rolls, modifier);
        self.record(
            ActionKind::ModifiedRoll,
            result.roll,
            messages::modified_roll_details(&result),
        );
        messages::modified_roll(&result)
    }

    /// Roll a skill check and record it. Out-of-range skills roll nothing.
    pub fn skill_check(&mut self, skill: u32, difficulty: i32) -> SessionResult<String> {
        let check = skill_check(&mut self.rolls, skill, difficulty)?;
        tracing::debug!(
            success = check.outcome.is_success(),
            critical = check.outcome.is_critical(),
            "skill check resolved"
        );
        self.record(
            ActionKind::SkillCheck,
            check.roll,
            messages::skill_check_details(&check),
        );
        Ok(messages::skill_check(&check))
    }

    /// Roll damage for a weapon class and record it.
    pub fn damage_roll(&mut self, class: WeaponClass) -> String {
        let result = damage_roll(&mut self.rolls, class);
        self.record(
            ActionKind::Damage,
            result.roll,
            messages::damage_details(&result),
        );
        messages::damage(&result)
    }

    fn record(&mut self, action: ActionKind, result: u32, details: String) {
        tracing::debug!(action = action.label(), result, details = %details, "recorded roll");
        self.history.record(action, result, details);
    }

    /// Run the main-menu loop until the user quits or input ends.
    ///
    /// Validation errors and failures inside an action are reported and the
    /// loop continues. A failure to show the menu or read a choice is fatal:
    /// it is announced and returned (see open question 5 in DESIGN.md).
    pub fn run<P, W>(&mut self, prompt: &mut P, narrator: &mut Narrator<W>) -> SessionResult<()>
    where
        P: Prompt,
        W: Write,
    {
        loop {
            narrator.show(messages::MENU)?;

            let line = match prompt.read_line(messages::CHOICE_PROMPT) {
                Ok(Input::Line(line)) => line,
                Ok(Input::Interrupted | Input::Closed) => {
                    narrator.announce(messages::FAREWELL)?;
                    return Ok(());
                }
                Err(e) => {
                    tracing::error!("reading menu choice failed: {e}");
                    let _ = narrator.announce(messages::FATAL_ERROR);
                    return Err(e);
                }
            };

            let Some(command) = Command::parse(&line) else {
                tracing::debug!(input = %line.escape_debug(), "invalid menu choice");
                narrator.announce(messages::INVALID_CHOICE)?;
                continue;
            };

            tracing::debug!(command = command.name(), "dispatching");
            match self.dispatch(command, prompt, narrator) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => {
                    narrator.announce(messages::FAREWELL)?;
                    return Ok(());
                }
                Err(e) if e.is_validation() => {
                    narrator.announce(&format!("Error: {e}"))?;
                }
                Err(e) => {
                    tracing::warn!(command = command.name(), "action failed: {e}");
                    narrator.announce(&format!("Unexpected error: {e}"))?;
                }
            }
        }
    }

    fn dispatch<P, W>(
        &mut self,
        command: Command,
        prompt: &mut P,
        narrator: &mut Narrator<W>,
    ) -> SessionResult<Flow>
    where
        P: Prompt,
        W: Write,
    {
        match command {
            Command::RollSimple => {
                let message = self.roll_simple();
                narrator.announce(&message)?;
            }
            Command::RollWithModifier => {
                let Some(raw) = ask(prompt, messages::MODIFIER_PROMPT)? else {
                    return Ok(Flow::Quit);
                };
                let modifier = parse_modifier(&raw)?;
                let message = self.roll_with_modifier(modifier);
                narrator.announce(&message)?;
            }
            Command::SkillCheck => {
                narrator.show(messages::SKILL_HEADER)?;
                let Some(raw) = ask(prompt, messages::SKILL_PROMPT)? else {
                    return Ok(Flow::Quit);
                };
                let skill = parse_skill(&raw)?;
                let Some(raw) = ask(prompt, messages::DIFFICULTY_PROMPT)? else {
                    return Ok(Flow::Quit);
                };
                let difficulty = parse_difficulty(&raw)?;
                let message = self.skill_check(skill, difficulty)?;
                narrator.announce(&message)?;
            }
            Command::DamageRoll => {
                narrator.show(messages::DAMAGE_HEADER)?;
                narrator.show(&messages::weapon_menu())?;
                let Some(raw) = ask(prompt, messages::WEAPON_PROMPT)? else {
                    return Ok(Flow::Quit);
                };
                let class = WeaponClass::from_token(&raw)?;
                let message = self.damage_roll(class);
                narrator.announce(&message)?;
            }
            Command::ShowHistory => self.show_history(narrator)?,
            Command::ShowHelp => {
                narrator.show(messages::HELP)?;
                narrator.announce(messages::HELP_SHOWN)?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn show_history<W: Write>(&self, narrator: &mut Narrator<W>) -> SessionResult<()> {
        if self.history.is_empty() {
            narrator.announce(messages::HISTORY_EMPTY)?;
            return Ok(());
        }

        narrator.show(messages::HISTORY_HEADER)?;
        narrator.announce(messages::HISTORY_TITLE)?;

        let mut shown = 0;
        for (i, entry) in self.history.recent(self.config.history_view).enumerate() {
            narrator.show(&format!("{}. {entry}", i + 1))?;
            shown += 1;
        }

        narrator.announce(&messages::history_summary(shown, self.history.len()))?;
        Ok(())
    }
}

/// Read one line for an action. `None` means the user interrupted or input ended.
fn ask<P: Prompt>(prompt: &mut P, text: &str) -> SessionResult<Option<String>> {
    match prompt.read_line(text)? {
        Input::Line(line) => Ok(Some(line)),
        Input::Interrupted | Input::Closed => Ok(None),
    }
}
