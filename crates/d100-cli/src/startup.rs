//! Environment check, speech selection and the welcome sequence.

use std::io::Write;

use colored::Colorize;

use d100_session::{Delivery, Narrator};

use crate::speech::CommandVoice;

/// Speech settings taken from the command line.
#[derive(Debug, Clone)]
pub struct SpeechOptions {
    /// Skip speech entirely.
    pub disabled: bool,
    /// Synthesizer program.
    pub program: String,
    /// Speaking rate in words per minute.
    pub rate: u32,
    /// Synthesizer voice or language.
    pub voice: String,
}

/// Whether speech ended up available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechStatus {
    /// Announcements are spoken by the named program.
    Enabled(String),
    /// Turned off on the command line.
    Disabled,
    /// The synthesizer could not be started.
    Unavailable(String),
}

/// Probe the synthesizer once and choose how announcements are delivered.
pub fn select_delivery(options: &SpeechOptions) -> (Delivery, SpeechStatus) {
    if options.disabled {
        tracing::info!("speech output disabled");
        return (Delivery::TextOnly, SpeechStatus::Disabled);
    }

    match CommandVoice::probe(&options.program, options.rate, &options.voice) {
        Ok(voice) => {
            tracing::info!(program = %options.program, "speech output available");
            (
                Delivery::TextPlusSpeech(Box::new(voice)),
                SpeechStatus::Enabled(options.program.clone()),
            )
        }
        Err(e) => {
            tracing::info!(program = %options.program, "speech output unavailable: {e}");
            (Delivery::TextOnly, SpeechStatus::Unavailable(e.to_string()))
        }
    }
}

/// Print the environment check and the banner.
pub fn print_environment(status: &SpeechStatus) {
    println!("Checking environment...");
    match status {
        SpeechStatus::Enabled(program) => {
            println!("{}", format!("✓ Speech output available ({program})").green());
        }
        SpeechStatus::Disabled => {
            println!("{}", "⚠ Speech output disabled - text mode only".yellow());
        }
        SpeechStatus::Unavailable(reason) => {
            println!(
                "{}",
                format!("⚠ Speech output unavailable - text mode only ({reason})").yellow()
            );
        }
    }

    println!();
    println!("{}", "=".repeat(60));
    println!("{}", "ACCESSIBLE DICE ROLLER".bold());
    println!("System Universe d100");
    println!("Designed for keyboard and screen-reader use");
    println!("{}", "=".repeat(60));
}

/// Announce the welcome, the speech mode and where to find help.
pub fn greet<W: Write>(narrator: &mut Narrator<W>, program: &str) -> std::io::Result<()> {
    narrator.announce("Welcome to the accessible dice roller for System Universe d100")?;
    if narrator.speaks() {
        narrator.announce("Speech output enabled")?;
    } else {
        narrator.announce(&format!(
            "Text mode enabled. Install {program} for speech output"
        ))?;
    }
    narrator.announce("Keyboard-only interface. Press 6 for full help.")
}
