//! Roll history kept for the lifetime of a session.

pub mod entry;
pub mod log;

pub use entry::{ActionKind, HistoryEntry};
pub use log::{DEFAULT_CAPACITY, HistoryLog};
