//! Log aggregation
//!
//! Computes per-food calorie distribution, running totals, and the macro
//! energy split from a log snapshot. Deterministic for a given input
//! sequence; recomputed from scratch on each request.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::models::FoodEntry;

/// Energy yield per gram of carbohydrate (kcal)
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
/// Energy yield per gram of protein (kcal)
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
/// Energy yield per gram of fat (kcal)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Summed calories for one food name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodCalories {
    pub name: String,
    pub calories: f64,
}

/// Summed macro grams across all entries
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MacroTotals {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

/// Macro energy percentages
///
/// Each value is rounded independently (half away from zero), so the three
/// may sum to 99-101. All zero when total computed energy is zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MacroSplit {
    pub carbs: i64,
    pub protein: i64,
    pub fat: i64,
}

/// Derived summary of a log snapshot
#[derive(Debug, Clone, Serialize)]
pub struct AggregateStats {
    /// Per-food summed calories, descending; ties keep insertion order
    pub per_food: Vec<FoodCalories>,
    pub total_calories: f64,
    pub macro_totals: MacroTotals,
    pub macro_split: MacroSplit,
}

/// Compute aggregate statistics from a log snapshot.
///
/// Entries are grouped by exact name match (case-sensitive, no
/// normalization). Macro grams are summed across all entries, ungrouped.
pub fn aggregate(entries: &[FoodEntry]) -> AggregateStats {
    let mut per_food: Vec<FoodCalories> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        match index_by_name.get(entry.name.as_str()) {
            Some(&i) => per_food[i].calories += entry.calories,
            None => {
                index_by_name.insert(entry.name.as_str(), per_food.len());
                per_food.push(FoodCalories {
                    name: entry.name.clone(),
                    calories: entry.calories,
                });
            }
        }
    }

    // Vec::sort_by is stable: equal sums keep first-encountered order
    per_food.sort_by(|a, b| {
        b.calories
            .partial_cmp(&a.calories)
            .unwrap_or(Ordering::Equal)
    });

    let total_calories = entries.iter().map(|e| e.calories).sum();

    let macro_totals = entries.iter().fold(MacroTotals::default(), |acc, e| {
        MacroTotals {
            carbs: acc.carbs + e.nutrients.carbs,
            protein: acc.protein + e.nutrients.protein,
            fat: acc.fat + e.nutrients.fat,
        }
    });

    let macro_split = macro_split(&macro_totals);

    AggregateStats {
        per_food,
        total_calories,
        macro_totals,
        macro_split,
    }
}

/// Energy-percentage split of summed macro grams (4/4/9 kcal per gram)
fn macro_split(totals: &MacroTotals) -> MacroSplit {
    let energy = totals.carbs * KCAL_PER_GRAM_CARBS
        + totals.protein * KCAL_PER_GRAM_PROTEIN
        + totals.fat * KCAL_PER_GRAM_FAT;

    if energy == 0.0 {
        return MacroSplit::default();
    }

    MacroSplit {
        carbs: percent_of(totals.carbs * KCAL_PER_GRAM_CARBS, energy),
        protein: percent_of(totals.protein * KCAL_PER_GRAM_PROTEIN, energy),
        fat: percent_of(totals.fat * KCAL_PER_GRAM_FAT, energy),
    }
}

fn percent_of(part: f64, whole: f64) -> i64 {
    (part / whole * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientProfile;

    fn entry(name: &str, calories: f64) -> FoodEntry {
        FoodEntry {
            name: name.to_string(),
            calories,
            serving_size: "1 serving".to_string(),
            nutrients: NutrientProfile::zero(),
            timestamp: "2026-08-06T12:00:00+00:00".to_string(),
        }
    }

    fn entry_with_macros(carbs: f64, protein: f64, fat: f64) -> FoodEntry {
        let mut e = entry("food", 0.0);
        e.nutrients.carbs = carbs;
        e.nutrients.protein = protein;
        e.nutrients.fat = fat;
        e
    }

    #[test]
    fn test_empty_log() {
        let stats = aggregate(&[]);
        assert!(stats.per_food.is_empty());
        assert_eq!(stats.total_calories, 0.0);
        assert_eq!(stats.macro_split, MacroSplit::default());
    }

    #[test]
    fn test_grouping_sums_and_sorts_descending() {
        let log = vec![
            entry("apple", 52.0),
            entry("banana", 89.0),
            entry("apple", 48.0),
        ];

        let stats = aggregate(&log);
        assert_eq!(stats.per_food.len(), 2);
        assert_eq!(stats.per_food[0].name, "apple");
        assert_eq!(stats.per_food[0].calories, 100.0);
        assert_eq!(stats.per_food[1].name, "banana");
        assert_eq!(stats.per_food[1].calories, 89.0);
    }

    #[test]
    fn test_grouping_is_case_sensitive() {
        let log = vec![entry("Apple", 50.0), entry("apple", 40.0)];
        let stats = aggregate(&log);
        assert_eq!(stats.per_food.len(), 2);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let log = vec![
            entry("rice", 100.0),
            entry("bread", 100.0),
            entry("pasta", 100.0),
        ];

        let stats = aggregate(&log);
        let names: Vec<&str> = stats.per_food.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["rice", "bread", "pasta"]);
    }

    #[test]
    fn test_total_calories_is_arithmetic_sum() {
        let log = vec![entry("a", 12.5), entry("b", 0.0), entry("a", 87.5)];
        assert_eq!(aggregate(&log).total_calories, 100.0);
    }

    #[test]
    fn test_macro_split_known_values() {
        // energy = 50*4 + 25*4 + 10*9 = 390
        let stats = aggregate(&[entry_with_macros(50.0, 25.0, 10.0)]);

        assert_eq!(stats.macro_split.carbs, 51);
        assert_eq!(stats.macro_split.protein, 26);
        assert_eq!(stats.macro_split.fat, 23);

        // Independent rounding: the sum is allowed to drift off 100
        let sum = stats.macro_split.carbs + stats.macro_split.protein + stats.macro_split.fat;
        assert!((99..=101).contains(&sum));
    }

    #[test]
    fn test_macro_split_zero_energy() {
        let stats = aggregate(&[entry("water", 0.0)]);
        assert_eq!(stats.macro_split, MacroSplit::default());
    }

    #[test]
    fn test_macro_totals_sum_across_entries_ungrouped() {
        let log = vec![
            entry_with_macros(10.0, 5.0, 2.0),
            entry_with_macros(15.0, 10.0, 3.0),
        ];

        let stats = aggregate(&log);
        assert_eq!(stats.macro_totals.carbs, 25.0);
        assert_eq!(stats.macro_totals.protein, 15.0);
        assert_eq!(stats.macro_totals.fat, 5.0);
    }

    #[test]
    fn test_deterministic_for_same_input() {
        let log = vec![
            entry("apple", 52.0),
            entry("banana", 89.0),
            entry("apple", 48.0),
        ];

        let a = aggregate(&log);
        let b = aggregate(&log);
        assert_eq!(a.per_food, b.per_food);
        assert_eq!(a.macro_split, b.macro_split);
    }
}
