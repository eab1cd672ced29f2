//! Accessible keyboard-driven d100 dice roller.

mod prompt;
mod speech;
mod startup;

use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use d100_session::{Narrator, Session, SessionConfig, messages};

use crate::prompt::LinePrompt;
use crate::startup::SpeechOptions;

#[derive(Parser)]
#[command(
    name = "d100",
    about = "Accessible d100 dice roller for System Universe, with optional speech output",
    version
)]
struct Args {
    /// RNG seed for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Never speak, only print
    #[arg(long)]
    no_speech: bool,

    /// Speech synthesizer program (espeak-compatible arguments)
    #[arg(long, default_value = speech::DEFAULT_PROGRAM)]
    voice_program: String,

    /// Speaking rate in words per minute
    #[arg(long, default_value = "150")]
    rate: u32,

    /// Synthesizer voice or language
    #[arg(long, default_value = "en")]
    voice: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(!args.no_color),
        )
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    let options = SpeechOptions {
        disabled: args.no_speech,
        program: args.voice_program,
        rate: args.rate,
        voice: args.voice,
    };
    let (delivery, status) = startup::select_delivery(&options);
    startup::print_environment(&status);

    let mut narrator = Narrator::new(io::stdout(), delivery);
    startup::greet(&mut narrator, &options.program).map_err(|e| e.to_string())?;

    let mut config = SessionConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut session = Session::from_config(config);
    let mut prompt = match LinePrompt::new() {
        Ok(prompt) => prompt,
        Err(e) => {
            let _ = narrator.announce(messages::FATAL_ERROR);
            return Err(e);
        }
    };

    session
        .run(&mut prompt, &mut narrator)
        .map_err(|e| e.to_string())
}
