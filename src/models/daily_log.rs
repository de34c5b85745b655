//! Daily log store
//!
//! Owns the ordered collection of recorded food entries and keeps it durable
//! through the key-value persistence collaborator. The entire log is
//! serialized under one fixed key and rewritten on every mutation.

use crate::db::{DbResult, KvStore};

use super::FoodEntry;

/// Fixed key the serialized log lives under
pub const DAILY_LOG_KEY: &str = "daily_log";

/// Ordered, persisted sequence of food entries
///
/// Insertion order is chronological order of addition. Single-owner,
/// single-writer: every mutation persists the full sequence before returning.
pub struct DailyLogStore {
    kv: KvStore,
    entries: Vec<FoodEntry>,
}

impl DailyLogStore {
    /// Load the log from the persisted blob.
    ///
    /// A missing blob yields an empty log. A blob that fails to parse is
    /// discarded and logged; it never propagates an error to the caller.
    pub fn load(kv: KvStore) -> DbResult<Self> {
        let entries = match kv.get(DAILY_LOG_KEY)? {
            Some(blob) => match serde_json::from_str::<Vec<FoodEntry>>(&blob) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(error = %e, "discarding corrupt daily log blob");
                    kv.delete(DAILY_LOG_KEY)?;
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Ok(Self { kv, entries })
    }

    /// Append an entry at the tail and persist the updated sequence
    pub fn append(&mut self, entry: FoodEntry) -> DbResult<()> {
        self.entries.push(entry);
        self.persist()
    }

    /// Remove the entry at `index`, shifting later entries down by one.
    ///
    /// An out-of-range index is a no-op; returns whether an entry was removed.
    pub fn remove_at(&mut self, index: usize) -> DbResult<bool> {
        if index >= self.entries.len() {
            return Ok(false);
        }
        self.entries.remove(index);
        self.persist()?;
        Ok(true)
    }

    /// Read-only view of the current sequence
    pub fn all(&self) -> &[FoodEntry] {
        &self.entries
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of calories across all entries; 0 for an empty log
    pub fn total_calories(&self) -> f64 {
        self.entries.iter().map(|e| e.calories).sum()
    }

    /// Rewrite the full blob to the persistence collaborator
    fn persist(&self) -> DbResult<()> {
        let blob = serde_json::to_string(&self.entries)?;
        self.kv.put(DAILY_LOG_KEY, &blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use crate::db::Database;
    use crate::models::NutrientProfile;

    fn test_kv() -> (tempfile::TempDir, KvStore) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("test.db")).unwrap();
        db.with_conn(|conn| run_migrations(conn)).unwrap();
        (dir, KvStore::new(db))
    }

    fn entry(name: &str, calories: f64) -> FoodEntry {
        FoodEntry {
            name: name.to_string(),
            calories,
            serving_size: "1 serving".to_string(),
            nutrients: NutrientProfile::zero(),
            timestamp: "2026-08-06T12:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_load_empty() {
        let (_dir, kv) = test_kv();
        let store = DailyLogStore::load(kv).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.total_calories(), 0.0);
    }

    #[test]
    fn test_append_and_total() {
        let (_dir, kv) = test_kv();
        let mut store = DailyLogStore::load(kv).unwrap();

        store.append(entry("apple", 52.0)).unwrap();
        store.append(entry("banana", 89.0)).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.total_calories(), 141.0);
    }

    #[test]
    fn test_length_accounting() {
        let (_dir, kv) = test_kv();
        let mut store = DailyLogStore::load(kv).unwrap();

        for i in 0..5 {
            store.append(entry("food", i as f64)).unwrap();
        }
        assert!(store.remove_at(0).unwrap());
        assert!(store.remove_at(2).unwrap());
        assert!(!store.remove_at(99).unwrap());

        // 5 appends minus 2 successful removals
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_remove_at_middle_preserves_order() {
        let (_dir, kv) = test_kv();
        let mut store = DailyLogStore::load(kv).unwrap();

        store.append(entry("apple", 52.0)).unwrap();
        store.append(entry("banana", 89.0)).unwrap();
        store.append(entry("orange", 47.0)).unwrap();

        assert!(store.remove_at(1).unwrap());

        let names: Vec<&str> = store.all().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["apple", "orange"]);
    }

    #[test]
    fn test_remove_at_out_of_range_is_noop() {
        let (_dir, kv) = test_kv();
        let mut store = DailyLogStore::load(kv).unwrap();
        store.append(entry("apple", 52.0)).unwrap();

        assert!(!store.remove_at(1).unwrap());
        assert!(!store.remove_at(usize::MAX).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_persistence_round_trip() {
        let (_dir, kv) = test_kv();

        let mut store = DailyLogStore::load(kv.clone()).unwrap();
        let mut apple = entry("apple", 94.6);
        apple.nutrients.carbs = 25.1;
        apple.nutrients.potassium = 195.0;
        store.append(apple.clone()).unwrap();
        store.append(entry("banana", 105.0)).unwrap();
        let original: Vec<FoodEntry> = store.all().to_vec();
        drop(store);

        let reloaded = DailyLogStore::load(kv).unwrap();
        assert_eq!(reloaded.all(), original.as_slice());
        assert_eq!(reloaded.all()[0], apple);
    }

    #[test]
    fn test_blob_entry_count_matches_after_mutation() {
        let (_dir, kv) = test_kv();
        let mut store = DailyLogStore::load(kv.clone()).unwrap();

        store.append(entry("apple", 52.0)).unwrap();
        store.append(entry("banana", 89.0)).unwrap();
        store.remove_at(0).unwrap();

        let blob = kv.get(DAILY_LOG_KEY).unwrap().unwrap();
        let persisted: Vec<FoodEntry> = serde_json::from_str(&blob).unwrap();
        assert_eq!(persisted.len(), store.len());
    }

    #[test]
    fn test_corrupt_blob_yields_empty_log() {
        let (_dir, kv) = test_kv();
        kv.put(DAILY_LOG_KEY, "{not json[").unwrap();

        let store = DailyLogStore::load(kv.clone()).unwrap();
        assert!(store.is_empty());

        // The corrupt blob is discarded, not left in place
        assert_eq!(kv.get(DAILY_LOG_KEY).unwrap(), None);
    }

    #[test]
    fn test_truncated_blob_yields_empty_log() {
        let (_dir, kv) = test_kv();
        kv.put(DAILY_LOG_KEY, r#"[{"name": "apple", "calo"#).unwrap();

        let store = DailyLogStore::load(kv).unwrap();
        assert!(store.is_empty());
    }
}
