//! Audit history store.
//!
//! A newest-first list of past audits, capped at fifty entries, round-
//! tripped through JSON. The backing key-value storage belongs to the
//! caller; this module owns the ordering, eviction, and the
//! corruption-tolerant decode (corrupt stored text loads as an empty
//! history rather than failing startup).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::report::{AuditInput, AuditReport};

/// Maximum number of retained entries; the oldest is evicted beyond this.
pub const MAX_ENTRIES: usize = 50;

/// One stored audit: input, report, and when it ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Caller-assigned identifier, unique within the history.
    pub id: String,

    /// When the audit ran.
    pub timestamp: DateTime<Utc>,

    /// The audited page data.
    pub input: AuditInput,

    /// The combined report.
    pub analysis: AuditReport,
}

impl HistoryEntry {
    /// Build an entry stamped with the current time, using the timestamp's
    /// millisecond value as the id.
    #[must_use]
    pub fn now(input: AuditInput, analysis: AuditReport) -> Self {
        let timestamp = Utc::now();
        HistoryEntry {
            id: timestamp.timestamp_millis().to_string(),
            timestamp,
            input,
            analysis,
        }
    }
}

/// Newest-first, capped audit history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Empty history.
    #[must_use]
    pub fn new() -> Self {
        History::default()
    }

    /// Load a history from stored JSON. Corrupt or mistyped text yields an
    /// empty history; stored lists longer than the cap are truncated.
    #[must_use]
    pub fn from_json(text: &str) -> Self {
        let mut entries: Vec<HistoryEntry> =
            serde_json::from_str(text).unwrap_or_default();
        entries.truncate(MAX_ENTRIES);
        History { entries }
    }

    /// Serialize the history for storage, newest first.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.entries)
            .map_err(|e| Error::HistorySerialize(e.to_string()))
    }

    /// Prepend an entry, evicting the oldest beyond the cap.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_ENTRIES);
    }

    /// Remove the entry with the given id. Returns whether one was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
