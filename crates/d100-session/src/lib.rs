//! Interactive session for the accessible d100 dice roller.
//!
//! Provides the main-menu loop, command mapping, a bounded roll history,
//! and the narrator that shows (and optionally speaks) every result.

pub mod command;
pub mod config;
pub mod error;
pub mod history;
pub mod messages;
pub mod narrator;
pub mod prompt;
pub mod session;

pub use command::Command;
pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use history::{ActionKind, HistoryEntry, HistoryLog};
pub use narrator::{Delivery, Narrator, Voice, VoiceError};
pub use prompt::{Input, Prompt, ScriptedPrompt};
pub use session::Session;
