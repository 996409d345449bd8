//! Session history
//!
//! Append-only log of executed commands and their outcomes. Insertion
//! order is chronological order; entries are never mutated. Durable
//! persistence is the caller's business - this log lives in memory and
//! can serialize itself for export.

use crate::Command;
use chrono::{DateTime, Utc};
use reckon_core::Outcome;
use serde::Serialize;

/// Immutable record of one executed command
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub command: Command,
    pub outcome: Outcome,
}

impl HistoryEntry {
    pub fn new(timestamp: DateTime<Utc>, command: Command, outcome: Outcome) -> Self {
        Self { timestamp, command, outcome }
    }

    pub fn now(command: Command, outcome: Outcome) -> Self {
        Self::new(Utc::now(), command, outcome)
    }

    pub fn is_success(&self) -> bool {
        !self.outcome.is_error()
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.is_success() { "ok" } else { "err" };
        write!(
            f,
            "[{}] {} | {} => {}",
            status,
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.command,
            self.outcome
        )
    }
}

/// Append-only, insertion-ordered log
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// O(1) amortized append
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Last `n` entries, still in insertion order
    pub fn last(&self, n: usize) -> impl Iterator<Item = &HistoryEntry> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip)
    }

    /// Entries whose command used the given operation
    pub fn for_operation<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a HistoryEntry> {
        self.entries.iter().filter(move |e| e.command.operation == name)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Serialize the whole log as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }

    /// Write the log as JSON to the given writer
    pub fn export_to<W: std::io::Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, &self.entries)
    }
}
