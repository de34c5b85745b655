//! Food lookup module
//!
//! Resolves free-text food queries to structured nutrient records via the
//! Nutritionix natural-language nutrition API.

pub mod client;

pub use client::{LookupError, NutritionixClient, NUTRITIONIX_NATURAL_ENDPOINT};
