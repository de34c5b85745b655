//! Shared nutrient data structure
//!
//! Used across lookup results, log entries, and aggregate stats.

use serde::{Deserialize, Serialize};

/// Nutrient breakdown for one food entry
///
/// All quantities are non-negative; fields absent from the lookup source
/// default to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    #[serde(default)]
    pub carbs: f64,         // grams
    #[serde(default)]
    pub protein: f64,       // grams
    #[serde(default)]
    pub fat: f64,           // grams
    #[serde(default)]
    pub saturated_fat: f64, // grams
    #[serde(default)]
    pub cholesterol: f64,   // milligrams
    #[serde(default)]
    pub sodium: f64,        // milligrams
    #[serde(default)]
    pub fiber: f64,         // grams
    #[serde(default)]
    pub potassium: f64,     // milligrams
    #[serde(default)]
    pub sugars: f64,        // grams
}

impl NutrientProfile {
    /// Create a NutrientProfile with all zeros
    pub fn zero() -> Self {
        Self::default()
    }
}
