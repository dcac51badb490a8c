//! Per-mode query history
//!
//! Each composition mode keeps its own newest-first list of rendered query
//! strings; the joined view is what the user edits and sends to the graph
//! browser. One store per session, never shared across sessions.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four query-composition modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    Chain,
    FanOut,
    Author,
    Path,
}

impl QueryMode {
    pub const ALL: [QueryMode; 4] = [
        QueryMode::Chain,
        QueryMode::FanOut,
        QueryMode::Author,
        QueryMode::Path,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryMode::Chain => "chain",
            QueryMode::FanOut => "fan_out",
            QueryMode::Author => "author",
            QueryMode::Path => "path",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.as_str() == s)
    }
}

/// A composed query retained in session history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub query: String,
    pub composed_at: DateTime<Utc>,
}

/// Newest-first list of composed queries for one mode
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryHistory {
    entries: Vec<HistoryEntry>,
}

impl QueryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query to the front of the list
    pub fn prepend(&mut self, query: impl Into<String>) {
        self.entries.insert(
            0,
            HistoryEntry {
                query: query.into(),
                composed_at: Utc::now(),
            },
        );
    }

    /// Drop all retained queries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, newest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Query strings, newest first
    pub fn queries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.query.as_str())
    }

    /// The editable union of all retained queries, newest first
    pub fn joined_with_union(&self) -> String {
        self.queries().collect::<Vec<_>>().join("\nunion\n")
    }
}

/// One [`QueryHistory`] per composition mode
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistorySet {
    histories: HashMap<QueryMode, QueryHistory>,
}

impl HistorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The history for a mode, empty until something is composed
    pub fn history(&self, mode: QueryMode) -> Option<&QueryHistory> {
        self.histories.get(&mode)
    }

    /// Add a query to the front of a mode's history
    pub fn prepend(&mut self, mode: QueryMode, query: impl Into<String>) {
        self.histories.entry(mode).or_default().prepend(query);
    }

    /// Drop all queries retained for a mode
    pub fn clear(&mut self, mode: QueryMode) {
        if let Some(history) = self.histories.get_mut(&mode) {
            history.clear();
        }
    }

    /// Drop every mode's queries
    pub fn clear_all(&mut self) {
        self.histories.clear();
    }

    /// The editable union view for a mode
    pub fn joined_with_union(&self, mode: QueryMode) -> String {
        self.histories
            .get(&mode)
            .map(|h| h.joined_with_union())
            .unwrap_or_default()
    }
}
