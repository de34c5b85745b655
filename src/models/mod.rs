//! Data models
//!
//! Rust structs for food entries and the persisted daily log.

mod daily_log;
mod food_entry;
mod nutrients;

pub use daily_log::{DailyLogStore, DAILY_LOG_KEY};
pub use food_entry::FoodEntry;
pub use nutrients::NutrientProfile;
