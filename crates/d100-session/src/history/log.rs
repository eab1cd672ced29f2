//! Bounded roll history.

use std::collections::VecDeque;

use chrono::{Local, NaiveTime};

use super::entry::{ActionKind, HistoryEntry};

/// Default number of entries kept.
pub const DEFAULT_CAPACITY: usize = 50;

/// A chronological log of rolls that keeps only the most recent entries.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl HistoryLog {
    /// Create an empty log holding up to 50 entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log holding up to `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Record a roll stamped with the current local time.
    pub fn record(&mut self, action: ActionKind, result: u32, details: impl Into<String>) {
        self.record_at(Local::now().time(), action, result, details);
    }

    /// Record a roll at an explicit time of day.
    pub fn record_at(
        &mut self,
        timestamp: NaiveTime,
        action: ActionKind,
        result: u32,
        details: impl Into<String>,
    ) {
        self.entries
            .push_back(HistoryEntry::new(timestamp, action, result, details));
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// The last `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &HistoryEntry> {
        let start = self.entries.len().saturating_sub(n);
        self.entries.range(start..)
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
