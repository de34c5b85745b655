//! Food entry model
//!
//! One recorded (or pending-display) food item with its nutrient profile.

use serde::{Deserialize, Serialize};

use super::NutrientProfile;

/// A recorded food item
///
/// Created by the lookup collaborator from a Nutritionix response and
/// immutable afterwards. The name is stored exactly as returned by the API;
/// display capitalization happens at render time in the tools layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,
    pub calories: f64,
    /// Free-text serving description, e.g. "1 cup"
    pub serving_size: String,
    pub nutrients: NutrientProfile,
    /// ISO-8601 instant at response-processing time
    pub timestamp: String,
}
