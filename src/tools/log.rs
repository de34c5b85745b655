//! Daily log tools
//!
//! Tools for appending to, removing from, and listing the daily food log.

use serde::Serialize;

use crate::models::{DailyLogStore, FoodEntry};

use super::display_name;

/// One log entry as presented to the client
#[derive(Debug, Serialize)]
pub struct LogEntrySummary {
    /// Positional index, usable with remove_from_log
    pub index: usize,
    pub display_name: String,
    pub serving_size: String,
    pub calories: f64,
    pub timestamp: String,
}

impl LogEntrySummary {
    fn from_entry(index: usize, entry: &FoodEntry) -> Self {
        Self {
            index,
            display_name: display_name(&entry.name),
            serving_size: entry.serving_size.clone(),
            calories: entry.calories,
            timestamp: entry.timestamp.clone(),
        }
    }
}

/// Response for add_to_log
#[derive(Debug, Serialize)]
pub struct AddToLogResponse {
    pub added: LogEntrySummary,
    pub entries_logged: usize,
    pub total_calories: f64,
}

/// Response for remove_from_log
#[derive(Debug, Serialize)]
pub struct RemoveFromLogResponse {
    pub removed: bool,
    pub index: usize,
    pub entries_logged: usize,
    pub total_calories: f64,
}

/// Response for list_log
#[derive(Debug, Serialize)]
pub struct ListLogResponse {
    pub entries: Vec<LogEntrySummary>,
    pub entries_logged: usize,
    pub total_calories: f64,
}

/// Append an entry to the log and persist
pub fn add_to_log(store: &mut DailyLogStore, entry: FoodEntry) -> Result<AddToLogResponse, String> {
    let index = store.len();
    let summary = LogEntrySummary::from_entry(index, &entry);

    store
        .append(entry)
        .map_err(|e| format!("Failed to persist daily log: {}", e))?;

    Ok(AddToLogResponse {
        added: summary,
        entries_logged: store.len(),
        total_calories: store.total_calories(),
    })
}

/// Remove the entry at `index`; out-of-range indexes are a no-op
pub fn remove_from_log(
    store: &mut DailyLogStore,
    index: usize,
) -> Result<RemoveFromLogResponse, String> {
    let removed = store
        .remove_at(index)
        .map_err(|e| format!("Failed to persist daily log: {}", e))?;

    Ok(RemoveFromLogResponse {
        removed,
        index,
        entries_logged: store.len(),
        total_calories: store.total_calories(),
    })
}

/// List the current log contents with the running calorie total
pub fn list_log(store: &DailyLogStore) -> ListLogResponse {
    let entries: Vec<LogEntrySummary> = store
        .all()
        .iter()
        .enumerate()
        .map(|(i, e)| LogEntrySummary::from_entry(i, e))
        .collect();

    ListLogResponse {
        entries_logged: entries.len(),
        total_calories: store.total_calories(),
        entries,
    }
}
