//! Bounded, deduplicated recency lists
//!
//! A `RecencyList` keeps the N most recently recorded values, newest first,
//! persisted through the key-value store on every change. Recording a value
//! that is already present (structural equality, compared as canonical JSON)
//! is a no-op: nothing is inserted and nothing moves.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::kv::{KvStore, Result};

/// A persisted most-recent-first list with a size cap and dedup
pub struct RecencyList<T> {
    kv: Arc<KvStore>,
    key: String,
    cap: usize,
    entries: Vec<T>,
}

impl<T> RecencyList<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Load the list stored under `key`
    ///
    /// Malformed persisted data is discarded: the list starts empty with a
    /// warning rather than failing the caller. A longer-than-cap persisted
    /// list is truncated on load.
    pub fn load(kv: Arc<KvStore>, key: impl Into<String>, cap: usize) -> Self {
        let key = key.into();
        let mut entries: Vec<T> = match kv.get(&key) {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "discarding malformed recency list");
                Vec::new()
            }
        };
        entries.truncate(cap);
        Self { kv, key, cap, entries }
    }

    /// Record `item` as the most recent entry
    ///
    /// If a structurally equal entry already exists anywhere in the list this
    /// is a no-op. Otherwise the item is prepended, the tail past the cap is
    /// evicted, and the resulting list replaces the persisted one. Returns
    /// whether the list changed.
    pub fn record(&mut self, item: T) -> Result<bool> {
        let canonical = serde_json::to_value(&item)?;
        for existing in &self.entries {
            if serde_json::to_value(existing)? == canonical {
                return Ok(false);
            }
        }

        self.entries.insert(0, item);
        self.entries.truncate(self.cap);
        self.kv.set(&self.key, &self.entries)?;
        Ok(true)
    }

    /// All entries, most recent first
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Entry at `index` (0 = most recent), without reordering anything
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry, in memory and from the store
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.kv.remove(&self.key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(kv: &Arc<KvStore>, cap: usize) -> RecencyList<String> {
        RecencyList::load(Arc::clone(kv), "recent", cap)
    }

    #[test]
    fn test_record_newest_first() {
        let kv = Arc::new(KvStore::in_memory().unwrap());
        let mut recent = list(&kv, 10);

        recent.record("a".to_string()).unwrap();
        recent.record("b".to_string()).unwrap();
        recent.record("c".to_string()).unwrap();

        assert_eq!(recent.entries(), ["c", "b", "a"]);
        assert_eq!(recent.get(0), Some(&"c".to_string()));
        assert_eq!(recent.get(3), None);
    }

    #[test]
    fn test_record_duplicate_is_noop() {
        let kv = Arc::new(KvStore::in_memory().unwrap());
        let mut recent = list(&kv, 10);

        assert!(recent.record("a".to_string()).unwrap());
        assert!(recent.record("b".to_string()).unwrap());

        // Re-recording neither grows the list nor moves the entry.
        assert!(!recent.record("a".to_string()).unwrap());
        assert_eq!(recent.entries(), ["b", "a"]);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let kv = Arc::new(KvStore::in_memory().unwrap());
        let mut recent = list(&kv, 3);

        for s in ["a", "b", "c", "d", "e"] {
            recent.record(s.to_string()).unwrap();
        }

        assert_eq!(recent.len(), 3);
        assert_eq!(recent.entries(), ["e", "d", "c"]);
    }

    #[test]
    fn test_persists_across_load() {
        let kv = Arc::new(KvStore::in_memory().unwrap());

        let mut recent = list(&kv, 10);
        recent.record("a".to_string()).unwrap();
        recent.record("b".to_string()).unwrap();
        drop(recent);

        let reloaded = list(&kv, 10);
        assert_eq!(reloaded.entries(), ["b", "a"]);
    }

    #[test]
    fn test_malformed_data_starts_empty() {
        let kv = Arc::new(KvStore::in_memory().unwrap());
        kv.set("recent", &42).unwrap(); // not a list

        let recent = list(&kv, 10);
        assert!(recent.is_empty());

        // The slot is usable again after the next record.
        let mut recent = recent;
        recent.record("a".to_string()).unwrap();
        assert_eq!(list(&kv, 10).entries(), ["a"]);
    }

    #[test]
    fn test_load_truncates_beyond_cap() {
        let kv = Arc::new(KvStore::in_memory().unwrap());
        kv.set("recent", &vec!["a", "b", "c", "d"]).unwrap();

        let recent = list(&kv, 2);
        assert_eq!(recent.entries(), ["a", "b"]);
    }

    #[test]
    fn test_clear() {
        let kv = Arc::new(KvStore::in_memory().unwrap());
        let mut recent = list(&kv, 10);

        recent.record("a".to_string()).unwrap();
        recent.clear().unwrap();

        assert!(recent.is_empty());
        assert!(!kv.contains("recent").unwrap());
        assert!(list(&kv, 10).is_empty());
    }
}
