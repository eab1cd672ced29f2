//! Speech output through an external synthesizer.
//!
//! The synthesizer is any program that takes espeak-style arguments:
//! `-s <words per minute> -v <voice> <text>`. It runs to completion for each
//! announcement, so speech never overlaps the next prompt.

use std::process::{Command, Stdio};

use d100_session::{Voice, VoiceError};

/// Default synthesizer program.
pub const DEFAULT_PROGRAM: &str = "espeak-ng";

/// Speaks by running an external synthesizer.
#[derive(Debug, Clone)]
pub struct CommandVoice {
    program: String,
    rate: u32,
    voice: String,
}

impl CommandVoice {
    /// Check that `program` can be started, then build a voice around it.
    pub fn probe(program: &str, rate: u32, voice: &str) -> Result<Self, VoiceError> {
        let status = Command::new(program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(s) if s.success() => Ok(Self {
                program: program.to_string(),
                rate,
                voice: voice.to_string(),
            }),
            Ok(s) => Err(VoiceError::Unavailable(format!("{program} exited with {s}"))),
            Err(e) => Err(VoiceError::Unavailable(format!("{program}: {e}"))),
        }
    }
}

impl Voice for CommandVoice {
    fn name(&self) -> &str {
        &self.program
    }

    fn speak(&mut self, text: &str) -> Result<(), VoiceError> {
        let status = Command::new(&self.program)
            .arg("-s")
            .arg(self.rate.to_string())
            .arg("-v")
            .arg(&self.voice)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(s) if s.success() => Ok(()),
            Ok(s) => Err(VoiceError::Failed(format!("{} exited with {s}", self.program))),
            Err(e) => Err(VoiceError::Failed(format!("{}: {e}", self.program))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_unavailable() {
        let err = CommandVoice::probe("/nonexistent/d100-voice", 150, "en").unwrap_err();
        assert!(matches!(err, VoiceError::Unavailable(_)));
        assert!(err.to_string().contains("/nonexistent/d100-voice"));
    }
}
