//! Output sink for everything the user is told.
//!
//! A [`Narrator`] always writes text. When built with
//! [`Delivery::TextPlusSpeech`] it also hands announcements to a [`Voice`].
//! Speech is best-effort: a failing voice is logged and reported as text, and
//! the session carries on unchanged.

use std::io::{self, Write};

use thiserror::Error;

/// Errors raised by a speech backend.
#[derive(Debug, Error)]
pub enum VoiceError {
    /// The backend is not installed or cannot be started.
    #[error("speech unavailable: {0}")]
    Unavailable(String),

    /// The backend started but did not finish speaking.
    #[error("speech failed: {0}")]
    Failed(String),
}

/// A speech backend.
pub trait Voice {
    /// Name shown in startup messages and logs.
    fn name(&self) -> &str;

    /// Speak `text`, returning once it has been said.
    fn speak(&mut self, text: &str) -> Result<(), VoiceError>;
}

/// How announcements reach the user. Chosen once at startup.
pub enum Delivery {
    /// Text on the display only.
    TextOnly,
    /// Text on the display, then spoken aloud.
    TextPlusSpeech(Box<dyn Voice>),
}

impl std::fmt::Debug for Delivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TextOnly => write!(f, "TextOnly"),
            Self::TextPlusSpeech(voice) => write!(f, "TextPlusSpeech({})", voice.name()),
        }
    }
}

/// Writes messages to a display and, optionally, speaks them.
#[derive(Debug)]
pub struct Narrator<W> {
    out: W,
    delivery: Delivery,
}

impl<W: Write> Narrator<W> {
    /// Create a narrator over `out` with the given delivery.
    pub fn new(out: W, delivery: Delivery) -> Self {
        Self { out, delivery }
    }

    /// Create a text-only narrator.
    pub fn text_only(out: W) -> Self {
        Self::new(out, Delivery::TextOnly)
    }

    /// Whether announcements are also spoken.
    pub fn speaks(&self) -> bool {
        matches!(self.delivery, Delivery::TextPlusSpeech(_))
    }

    /// Display `text` and speak it when speech is enabled.
    pub fn announce(&mut self, text: &str) -> io::Result<()> {
        self.show(text)?;
        if let Delivery::TextPlusSpeech(voice) = &mut self.delivery {
            if let Err(e) = voice.speak(text) {
                tracing::warn!(voice = voice.name(), "speech output failed: {e}");
                writeln!(self.out, "Speech error: {e}")?;
                self.out.flush()?;
            }
        }
        Ok(())
    }

    /// Display `text` without speaking it.
    pub fn show(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Consume the narrator, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records what it was asked to say; fails when `broken` is set.
    struct RecordingVoice {
        spoken: Rc<RefCell<Vec<String>>>,
        broken: bool,
    }

    impl Voice for RecordingVoice {
        fn name(&self) -> &str {
            "recording"
        }

        fn speak(&mut self, text: &str) -> Result<(), VoiceError> {
            if self.broken {
                return Err(VoiceError::Failed("device busy".to_string()));
            }
            self.spoken.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn speaking(broken: bool) -> (Narrator<Vec<u8>>, Rc<RefCell<Vec<String>>>) {
        let spoken = Rc::new(RefCell::new(Vec::new()));
        let voice = RecordingVoice {
            spoken: Rc::clone(&spoken),
            broken,
        };
        let narrator = Narrator::new(Vec::new(), Delivery::TextPlusSpeech(Box::new(voice)));
        (narrator, spoken)
    }

    fn text(narrator: Narrator<Vec<u8>>) -> String {
        String::from_utf8(narrator.into_inner()).unwrap()
    }

    #[test]
    fn text_only_writes_lines() {
        let mut narrator = Narrator::text_only(Vec::new());
        assert!(!narrator.speaks());
        narrator.announce("d100: 42").unwrap();
        narrator.show("menu").unwrap();
        assert_eq!(text(narrator), "d100: 42\nmenu\n");
    }

    #[test]
    fn speech_gets_announcements_only() {
        let (mut narrator, spoken) = speaking(false);
        assert!(narrator.speaks());
        narrator.show("menu").unwrap();
        narrator.announce("d100: 42").unwrap();
        assert_eq!(*spoken.borrow(), vec!["d100: 42".to_string()]);
        assert_eq!(text(narrator), "menu\nd100: 42\n");
    }

    #[test]
    fn failing_voice_still_shows_text() {
        let (mut narrator, spoken) = speaking(true);
        narrator.announce("d100: 42").unwrap();
        assert!(spoken.borrow().is_empty());
        let out = text(narrator);
        assert!(out.starts_with("d100: 42\n"));
        assert!(out.contains("Speech error: speech failed: device busy"));
    }

    #[test]
    fn delivery_debug_names_voice() {
        let (narrator, _) = speaking(false);
        assert!(format!("{narrator:?}").contains("TextPlusSpeech(recording)"));
    }
}
