//! Exercise burn estimates
//!
//! Approximate durations to burn a calorie count, based on typical rates for
//! a 155-pound person (~100 kcal per reference interval).

use serde::Serialize;

/// Minutes needed to burn ~100 kcal, per activity
const BURN_RATES: &[(&str, &str, f64)] = &[
    ("Jog", "jog", 10.0),
    ("Do Power Yoga", "do power yoga", 20.0),
    ("Gym Workout", "lift weights", 20.0),
    ("Swimming", "swim", 13.0),
    ("Cycling", "cycle", 15.0),
];

/// One activity recommendation for burning a calorie count
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseRecommendation {
    pub name: &'static str,
    pub duration_minutes: i64,
    pub description: String,
}

/// Burn-duration estimates for the given calorie count
pub fn recommendations_for(calories: f64) -> Vec<ExerciseRecommendation> {
    BURN_RATES
        .iter()
        .map(|&(name, verb, minutes_per_100)| {
            let duration = (calories / 100.0 * minutes_per_100).round() as i64;
            ExerciseRecommendation {
                name,
                duration_minutes: duration,
                description: format!("You will have to {} for {} minutes", verb, duration),
            }
        })
        .collect()
}
