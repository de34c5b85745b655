//! Facts and exercise tools
//!
//! Read-only lookups against the static facts table and the burn-rate table.

use serde::Serialize;

use crate::exercise::{self, ExerciseRecommendation};
use crate::facts;

use super::display_name;

/// Response for food_facts
#[derive(Debug, Serialize)]
pub struct FoodFactsResponse {
    pub food: String,
    pub facts: Vec<&'static str>,
}

/// Response for exercise_recommendations
#[derive(Debug, Serialize)]
pub struct ExerciseRecommendationsResponse {
    pub calories: f64,
    pub recommendations: Vec<ExerciseRecommendation>,
}

/// Facts for a food name (exact, then substring, then the generic list)
pub fn food_facts(food: &str) -> FoodFactsResponse {
    FoodFactsResponse {
        food: display_name(food),
        facts: facts::facts_for(food).to_vec(),
    }
}

/// Burn-duration estimates for a calorie count
pub fn exercise_recommendations(calories: f64) -> ExerciseRecommendationsResponse {
    ExerciseRecommendationsResponse {
        calories,
        recommendations: exercise::recommendations_for(calories),
    }
}
