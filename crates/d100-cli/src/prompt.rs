//! Line input backed by rustyline.

use rustyline::error::ReadlineError;
use rustyline::{Cmd, DefaultEditor, EventHandler, KeyCode, KeyEvent, Modifiers};

use d100_session::{Input, Prompt, SessionError, SessionResult};

/// Reads lines from the terminal, or from stdin when it is not a terminal.
pub struct LinePrompt {
    editor: DefaultEditor,
}

impl LinePrompt {
    /// Create the line editor. Esc interrupts, like Ctrl-C.
    pub fn new() -> Result<Self, String> {
        let mut editor = DefaultEditor::new().map_err(|e| format!("cannot open terminal: {e}"))?;
        editor.bind_sequence(
            KeyEvent(KeyCode::Esc, Modifiers::NONE),
            EventHandler::Simple(Cmd::Interrupt),
        );
        Ok(Self { editor })
    }
}

impl Prompt for LinePrompt {
    fn read_line(&mut self, prompt: &str) -> SessionResult<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Input::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Closed),
            Err(e) => Err(SessionError::Input(e.to_string())),
        }
    }
}
