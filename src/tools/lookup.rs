//! Food lookup tool
//!
//! Presents a looked-up entry together with its facts, advisories, and
//! exercise burn estimates, the way the reference search view does.

use serde::Serialize;

use crate::exercise::{self, ExerciseRecommendation};
use crate::facts::{self, Advisory};
use crate::models::{FoodEntry, NutrientProfile};

use super::display_name;

/// Response for lookup_food
#[derive(Debug, Serialize)]
pub struct LookupFoodResponse {
    pub name: String,
    pub display_name: String,
    pub calories: f64,
    pub serving_size: String,
    pub nutrients: NutrientProfile,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_sodium_alert: Option<&'static str>,
    pub advisories: Vec<Advisory>,
    pub facts: Vec<&'static str>,
    pub exercise_equivalents: Vec<ExerciseRecommendation>,
}

/// Build the lookup response for an entry held in the pending slot
pub fn describe_entry(entry: &FoodEntry) -> LookupFoodResponse {
    LookupFoodResponse {
        name: entry.name.clone(),
        display_name: display_name(&entry.name),
        calories: entry.calories,
        serving_size: entry.serving_size.clone(),
        nutrients: entry.nutrients.clone(),
        timestamp: entry.timestamp.clone(),
        high_sodium_alert: facts::high_sodium_alert(&entry.nutrients),
        advisories: facts::advisories_for(&entry.nutrients),
        facts: facts::facts_for(&entry.name).to_vec(),
        exercise_equivalents: exercise::recommendations_for(entry.calories),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salty_entry() -> FoodEntry {
        FoodEntry {
            name: "instant ramen".to_string(),
            calories: 380.0,
            serving_size: "1 package".to_string(),
            nutrients: NutrientProfile {
                carbs: 52.0,
                protein: 9.0,
                fat: 14.0,
                sodium: 1500.0,
                ..NutrientProfile::zero()
            },
            timestamp: "2026-08-06T12:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_describe_entry_flags_sodium() {
        let response = describe_entry(&salty_entry());
        assert!(response.high_sodium_alert.is_some());
        assert!(response.advisories.iter().any(|a| a.warning));
    }

    #[test]
    fn test_describe_entry_render_fields() {
        let response = describe_entry(&salty_entry());
        assert_eq!(response.name, "instant ramen");
        assert_eq!(response.display_name, "Instant ramen");
        assert_eq!(response.facts.len(), crate::facts::FACTS_PER_FOOD);
        assert_eq!(response.exercise_equivalents.len(), 5);
    }
}
