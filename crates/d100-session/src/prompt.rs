//! Line input abstraction.

use std::collections::VecDeque;

use crate::error::SessionResult;

/// What came back from a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line of text, without its trailing newline.
    Line(String),
    /// The user interrupted input (Ctrl-C or Esc).
    Interrupted,
    /// Input ended.
    Closed,
}

/// A source of user input lines.
pub trait Prompt {
    /// Show `prompt` and read one line.
    fn read_line(&mut self, prompt: &str) -> SessionResult<Input>;
}

/// Replays a fixed sequence of inputs, then reports [`Input::Closed`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    inputs: VecDeque<Input>,
    prompts: Vec<String>,
}

impl ScriptedPrompt {
    /// Queue the given lines.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: lines.into_iter().map(|l| Input::Line(l.into())).collect(),
            prompts: Vec::new(),
        }
    }

    /// Queue one more input.
    pub fn push(&mut self, input: Input) {
        self.inputs.push_back(input);
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> SessionResult<Input> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front().unwrap_or(Input::Closed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_then_closes() {
        let mut prompt = ScriptedPrompt::lines(["1", "q"]);
        assert_eq!(prompt.read_line("> ").unwrap(), Input::Line("1".into()));
        assert_eq!(prompt.read_line("> ").unwrap(), Input::Line("q".into()));
        assert_eq!(prompt.read_line("> ").unwrap(), Input::Closed);
        assert_eq!(prompt.prompts().len(), 3);
    }

    #[test]
    fn pushed_interrupt() {
        let mut prompt = ScriptedPrompt::default();
        prompt.push(Input::Interrupted);
        assert_eq!(prompt.read_line("Modifier: ").unwrap(), Input::Interrupted);
        assert_eq!(prompt.prompts(), ["Modifier: ".to_string()]);
    }
}
