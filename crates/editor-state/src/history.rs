//! History of applied themes
//!
//! A bounded recency list of themes the admin has applied, for one-click
//! recall in the editor. Stored device-locally; the backend never sees it.

use std::sync::Arc;
use storage::kv::{KvStore, Result};
use storage::recency::RecencyList;
use theme_core::theme::Theme;

/// Key the history is persisted under in the device store
const HISTORY_KEY: &str = "device:themeHistory";

/// Maximum number of history entries; the oldest are evicted past this
pub const HISTORY_CAP: usize = 10;

/// Bounded, deduplicated list of previously applied themes
pub struct ThemeHistory {
    list: RecencyList<Theme>,
}

impl ThemeHistory {
    /// Load persisted history
    ///
    /// Malformed persisted data starts the history empty (warned, not fatal).
    pub fn load(kv: Arc<KvStore>) -> Self {
        Self { list: RecencyList::load(kv, HISTORY_KEY, HISTORY_CAP) }
    }

    /// Record a theme that is about to become the applied theme
    ///
    /// A theme structurally equal to an existing entry is skipped. Returns
    /// whether the history changed.
    pub fn record(&mut self, theme: &Theme) -> Result<bool> {
        self.list.record(theme.clone())
    }

    /// Copy out entry `index` (0 = most recent) without reordering history
    pub fn recall(&self, index: usize) -> Option<Theme> {
        self.list.get(index).cloned()
    }

    /// All entries, most recent first
    pub fn themes(&self) -> &[Theme] {
        self.list.entries()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Check if the history is empty
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
