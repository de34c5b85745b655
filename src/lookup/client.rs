//! Nutritionix API client
//!
//! One POST per lookup, no retries. Credentials come from the environment.

use serde::Deserialize;
use thiserror::Error;

use crate::models::{FoodEntry, NutrientProfile};

/// Natural-language nutrients endpoint
pub const NUTRITIONIX_NATURAL_ENDPOINT: &str =
    "https://trackapi.nutritionix.com/v2/natural/nutrients";

/// Lookup error types
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Nutritionix credentials not configured (set NUTRITIONIX_APP_ID and NUTRITIONIX_API_KEY)")]
    MissingCredentials,

    #[error("Nutrition lookup request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Nutrition lookup failed with status {0}")]
    Status(reqwest::StatusCode),

    #[error("No food information found")]
    NoResults,
}

/// Client for the Nutritionix natural-nutrients endpoint
#[derive(Clone)]
pub struct NutritionixClient {
    http: reqwest::Client,
    app_id: String,
    app_key: String,
    endpoint: String,
}

impl NutritionixClient {
    pub fn new(app_id: String, app_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            app_id,
            app_key,
            endpoint: NUTRITIONIX_NATURAL_ENDPOINT.to_string(),
        }
    }

    /// Build a client from NUTRITIONIX_APP_ID / NUTRITIONIX_API_KEY.
    ///
    /// NUTRITIONIX_BASE_URL overrides the endpoint (used by tests).
    pub fn from_env() -> Result<Self, LookupError> {
        let app_id = std::env::var("NUTRITIONIX_APP_ID")
            .map_err(|_| LookupError::MissingCredentials)?;
        let app_key = std::env::var("NUTRITIONIX_API_KEY")
            .map_err(|_| LookupError::MissingCredentials)?;

        let mut client = Self::new(app_id, app_key);
        if let Ok(endpoint) = std::env::var("NUTRITIONIX_BASE_URL") {
            client.endpoint = endpoint;
        }
        Ok(client)
    }

    /// Resolve a free-text query to a food entry.
    ///
    /// Only the first element of the response's `foods` array is consumed.
    pub async fn lookup(&self, query: &str) -> Result<FoodEntry, LookupError> {
        let query = normalize_query(query);
        tracing::debug!(query = %query, "nutrition lookup");

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-app-id", &self.app_id)
            .header("x-app-key", &self.app_key)
            .json(&serde_json::json!({ "query": query }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        let body: NaturalNutrientsResponse = response.json().await?;
        let food = body.foods.into_iter().next().ok_or(LookupError::NoResults)?;

        Ok(food.into_entry(chrono::Utc::now().to_rfc3339()))
    }
}

/// Prefix a bare food name with the literal quantity `1`.
///
/// Queries that already start with a digit are sent as-is.
fn normalize_query(query: &str) -> String {
    let query = query.trim();
    if query.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        query.to_string()
    } else {
        format!("1 {}", query)
    }
}

/// Response envelope from the natural-nutrients endpoint
#[derive(Debug, Deserialize)]
struct NaturalNutrientsResponse {
    #[serde(default)]
    foods: Vec<ApiFood>,
}

/// One food object as returned by Nutritionix
///
/// Optional nutrient fields may be absent or null; both map to zero.
#[derive(Debug, Deserialize)]
struct ApiFood {
    food_name: String,
    nf_calories: f64,
    serving_qty: f64,
    serving_unit: String,
    nf_total_carbohydrate: f64,
    nf_protein: f64,
    nf_total_fat: f64,
    #[serde(default)]
    nf_saturated_fat: Option<f64>,
    #[serde(default)]
    nf_cholesterol: Option<f64>,
    #[serde(default)]
    nf_sodium: Option<f64>,
    #[serde(default)]
    nf_dietary_fiber: Option<f64>,
    #[serde(default)]
    nf_potassium: Option<f64>,
    #[serde(default)]
    nf_sugars: Option<f64>,
}

impl ApiFood {
    fn into_entry(self, timestamp: String) -> FoodEntry {
        FoodEntry {
            name: self.food_name,
            calories: self.nf_calories,
            serving_size: format!("{} {}", self.serving_qty, self.serving_unit),
            nutrients: NutrientProfile {
                carbs: self.nf_total_carbohydrate,
                protein: self.nf_protein,
                fat: self.nf_total_fat,
                saturated_fat: self.nf_saturated_fat.unwrap_or(0.0),
                cholesterol: self.nf_cholesterol.unwrap_or(0.0),
                sodium: self.nf_sodium.unwrap_or(0.0),
                fiber: self.nf_dietary_fiber.unwrap_or(0.0),
                potassium: self.nf_potassium.unwrap_or(0.0),
                sugars: self.nf_sugars.unwrap_or(0.0),
            },
            timestamp,
        }
    }
}
