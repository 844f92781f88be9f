//! Navigation history seam.

use serde::{Deserialize, Serialize};

/// Title passed with every history replacement.
pub const PAGE_TITLE: &str = "ir_datasets explorer";

/// State payload stored with a history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub url: String,
}

/// Replaces the current navigation entry without reloading.
pub trait History {
    fn replace_state(&mut self, state: HistoryState, title: &str, url: &str);
}

/// One recorded replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub state: HistoryState,
    pub title: String,
    pub url: String,
}

/// In-process history: keeps every replacement, the last one is the current location.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// URL of the latest replacement, if any.
    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(|e| e.url.as_str())
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

impl History for MemoryHistory {
    fn replace_state(&mut self, state: HistoryState, title: &str, url: &str) {
        self.entries.push(HistoryEntry {
            state,
            title: title.to_string(),
            url: url.to_string(),
        });
    }
}
