//! Statistics tool
//!
//! Renders aggregate stats for the client: calorie bars scaled against the
//! largest group, macro totals, and the energy-percentage split.

use serde::Serialize;

use crate::models::DailyLogStore;
use crate::stats::{aggregate, FoodCalories, MacroSplit, MacroTotals};

use super::display_name;

/// Bar-scaling floor used when the log is empty, so a display layer never
/// divides by zero. A presentation default, not a data invariant.
pub const DEFAULT_MAX_BAR_CALORIES: f64 = 100.0;

/// One row of the calorie distribution chart
#[derive(Debug, Serialize)]
pub struct CalorieBar {
    pub display_name: String,
    pub calories: f64,
    /// Bar width as a percentage of the largest group
    pub bar_percent: f64,
}

/// Response for get_stats
#[derive(Debug, Serialize)]
pub struct GetStatsResponse {
    pub calorie_distribution: Vec<CalorieBar>,
    pub total_calories: f64,
    pub foods_logged: usize,
    pub macro_totals: MacroTotals,
    pub macro_split: MacroSplit,
}

/// Compute display statistics from the current log
pub fn get_stats(store: &DailyLogStore) -> GetStatsResponse {
    let stats = aggregate(store.all());
    let calorie_distribution = calorie_bars(&stats.per_food, DEFAULT_MAX_BAR_CALORIES);

    GetStatsResponse {
        calorie_distribution,
        total_calories: stats.total_calories,
        foods_logged: store.len(),
        macro_totals: stats.macro_totals,
        macro_split: stats.macro_split,
    }
}

/// Scale grouped calories into bar widths.
///
/// `default_max` stands in for the maximum when there are no groups.
fn calorie_bars(per_food: &[FoodCalories], default_max: f64) -> Vec<CalorieBar> {
    let max_calories = per_food
        .iter()
        .map(|f| f.calories)
        .fold(f64::NEG_INFINITY, f64::max);
    let max_calories = if per_food.is_empty() {
        default_max
    } else {
        max_calories
    };

    per_food
        .iter()
        .map(|f| CalorieBar {
            display_name: display_name(&f.name),
            calories: f.calories,
            bar_percent: f.calories / max_calories * 100.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use crate::db::{Database, KvStore};
    use crate::models::{FoodEntry, NutrientProfile};

    fn test_store() -> (tempfile::TempDir, DailyLogStore) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("test.db")).unwrap();
        db.with_conn(|conn| run_migrations(conn)).unwrap();
        let store = DailyLogStore::load(KvStore::new(db)).unwrap();
        (dir, store)
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
    fn test_empty_log_stats() {
        let (_dir, store) = test_store();
        let response = get_stats(&store);

        assert!(response.calorie_distribution.is_empty());
        assert_eq!(response.total_calories, 0.0);
        assert_eq!(response.foods_logged, 0);
        assert_eq!(response.macro_split, MacroSplit::default());
    }

    #[test]
    fn test_bars_scale_against_largest_group() {
        let (_dir, mut store) = test_store();
        store.append(entry("apple", 52.0)).unwrap();
        store.append(entry("banana", 89.0)).unwrap();
        store.append(entry("apple", 48.0)).unwrap();

        let response = get_stats(&store);
        let bars = &response.calorie_distribution;

        assert_eq!(bars[0].display_name, "Apple");
        assert_eq!(bars[0].bar_percent, 100.0);
        assert!((bars[1].bar_percent - 89.0).abs() < 1e-9);
        // foods_logged counts entries, not groups
        assert_eq!(response.foods_logged, 3);
    }

    #[test]
    fn test_bar_floor_applies_only_to_empty_input() {
        let bars = calorie_bars(
            &[FoodCalories {
                name: "tea".to_string(),
                calories: 2.0,
            }],
            DEFAULT_MAX_BAR_CALORIES,
        );
        // A single tiny group still fills its own bar
        assert_eq!(bars[0].bar_percent, 100.0);
    }
}
