//! Aggregate statistics module
//!
//! Pure derivations over a daily log snapshot. Nothing here is persisted.

pub mod aggregate;

pub use aggregate::{
    aggregate, AggregateStats, FoodCalories, MacroSplit, MacroTotals,
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
