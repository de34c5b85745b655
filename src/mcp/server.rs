//! NutroTrack MCP Server Implementation
//!
//! Implements the MCP server with all NutroTrack tools. The MCP client plays
//! the role of the UI: it looks up foods, adds the pending result to the
//! daily log, and renders the returned statistics.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;

use crate::lookup::{LookupError, NutritionixClient};
use crate::models::{DailyLogStore, FoodEntry};
use crate::tools::status::StatusTracker;
use crate::tools::{insights, log, lookup, stats};

/// NutroTrack MCP Service
#[derive(Clone)]
pub struct NutroService {
    store: Arc<Mutex<DailyLogStore>>,
    /// Most recent successful lookup, waiting to be added to the log
    pending: Arc<Mutex<Option<FoodEntry>>>,
    /// Lookup client; None when credentials are not configured
    lookup: Option<NutritionixClient>,
    status_tracker: Arc<StatusTracker>,
    tool_router: ToolRouter<NutroService>,
}

impl NutroService {
    pub fn new(
        database_path: PathBuf,
        store: DailyLogStore,
        lookup: Option<NutritionixClient>,
    ) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            pending: Arc::new(Mutex::new(None)),
            lookup,
            status_tracker: Arc::new(StatusTracker::new(database_path)),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupFoodParams {
    /// Free-text food query, e.g. "apple" or "2 scrambled eggs"
    pub query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RemoveFromLogParams {
    /// Positional index of the entry to remove (see list_log)
    pub index: usize,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FoodFactsParams {
    /// Food name to look up facts for
    pub food: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExerciseRecommendationsParams {
    /// Calorie count to estimate burn durations for
    pub calories: f64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl NutroService {
    // --- Status ---

    #[tool(description = "Get the current status of the NutroTrack service including build info, database status, and process information")]
    fn nutro_status(&self) -> Result<CallToolResult, McpError> {
        let entries_logged = self.store.lock().unwrap().len();
        let status = self.status_tracker.get_status(entries_logged);
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Lookup ---

    #[tool(description = "Look up nutrition facts for a food by free-text query. The result is held as the pending entry; call add_to_log to record it.")]
    async fn lookup_food(&self, Parameters(p): Parameters<LookupFoodParams>) -> Result<CallToolResult, McpError> {
        let client = self.lookup.as_ref().ok_or_else(|| {
            McpError::internal_error(LookupError::MissingCredentials.to_string(), None)
        })?;

        let entry = match client.lookup(&p.query).await {
            Ok(entry) => entry,
            Err(LookupError::NoResults) => {
                let json = format!(r#"{{"error": "No food information found", "query": {}}}"#,
                    serde_json::json!(p.query));
                return Ok(CallToolResult::success(vec![Content::text(json)]));
            }
            Err(e) => return Err(McpError::internal_error(e.to_string(), None)),
        };

        let response = lookup::describe_entry(&entry);
        *self.pending.lock().unwrap() = Some(entry);

        let json = serde_json::to_string_pretty(&response)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Daily Log ---

    #[tool(description = "Add the pending lookup result to the daily log. The log is persisted before this returns.")]
    fn add_to_log(&self) -> Result<CallToolResult, McpError> {
        let entry = self.pending.lock().unwrap().clone();
        let Some(entry) = entry else {
            let json = r#"{"error": "No lookup result to add. Call lookup_food first."}"#;
            return Ok(CallToolResult::success(vec![Content::text(json)]));
        };

        let mut store = self.store.lock().unwrap();
        let result = log::add_to_log(&mut store, entry).map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Remove an entry from the daily log by its positional index. Out-of-range indexes are a no-op.")]
    fn remove_from_log(&self, Parameters(p): Parameters<RemoveFromLogParams>) -> Result<CallToolResult, McpError> {
        let mut store = self.store.lock().unwrap();
        let result = log::remove_from_log(&mut store, p.index).map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List the daily log entries in the order they were added, with the running calorie total")]
    fn list_log(&self) -> Result<CallToolResult, McpError> {
        let store = self.store.lock().unwrap();
        let result = log::list_log(&store);
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Statistics ---

    #[tool(description = "Get aggregate statistics for the daily log: per-food calorie distribution (descending), totals, and the macro energy split")]
    fn get_stats(&self) -> Result<CallToolResult, McpError> {
        let store = self.store.lock().unwrap();
        let result = stats::get_stats(&store);
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Insights ---

    #[tool(description = "Get three health facts for a food name (exact match, then substring match, then general facts)")]
    fn food_facts(&self, Parameters(p): Parameters<FoodFactsParams>) -> Result<CallToolResult, McpError> {
        let result = insights::food_facts(&p.food);
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Estimate how long common exercises take to burn a calorie count")]
    fn exercise_recommendations(&self, Parameters(p): Parameters<ExerciseRecommendationsParams>) -> Result<CallToolResult, McpError> {
        let result = insights::exercise_recommendations(p.calories);
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutroService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutrotrack".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("NutroTrack".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "NutroTrack - diet tracking and nutrition lookup. \
                 Workflow: lookup_food resolves a free-text query via Nutritionix and holds the result \
                 as the pending entry; add_to_log records it in the persisted daily log. \
                 Log: add_to_log, remove_from_log (by index), list_log. \
                 Statistics: get_stats (per-food calorie distribution, totals, macro energy split). \
                 Insights: food_facts, exercise_recommendations. \
                 Service: nutro_status."
                    .into(),
            ),
        }
    }
}
