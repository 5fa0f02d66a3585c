//! FitCalc MCP Server Implementation
//!
//! Implements the MCP server with all FitCalc tools. Each tool method is
//! glue only: deserialize parameters, call the pure calculator, serialize
//! the status-tagged outcome.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::models::{CalcResult, ToolOutcome};
use crate::tools::status::{StatusTracker, CALCULATOR_INSTRUCTIONS};
use crate::tools::{bmi, energy, macros, plans, tips};

/// FitCalc MCP Service
#[derive(Clone)]
pub struct FitcalcService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<FitcalcService>,
}

impl FitcalcService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for FitcalcService {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a calculator outcome into a single text content block.
///
/// Calculator errors become `status: "error"` data, never MCP protocol
/// errors; protocol errors are reserved for serialization failures.
fn outcome_json<T: Serialize>(result: CalcResult<T>) -> Result<CallToolResult, McpError> {
    let outcome = ToolOutcome::from(result);
    let json = serde_json::to_string_pretty(&outcome)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Calculator Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateBmiParams {
    /// Body weight in kilograms (must be positive)
    pub weight: f64,
    /// Height in centimeters (must be positive)
    pub height: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FitnessTipsParams {
    /// Fitness goal: "loss" or "gain" (case-insensitive)
    pub goal: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateMaintenanceCaloriesParams {
    /// Body weight in kilograms (must be positive)
    pub weight: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateMacronutrientsParams {
    /// Total daily calorie intake in kcal (must be positive)
    pub calories: f64,
    /// Fitness goal: "loss", "gain", or "maintain" (default "loss")
    #[serde(default = "default_goal")]
    pub goal: String,
}

fn default_goal() -> String {
    "loss".to_string()
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateWeightLossPlanParams {
    /// Target weight loss in kg per week (0.5 to 1.0 inclusive)
    pub target_weight_loss: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateWeightGainPlanParams {
    /// Target weight gain in kg per week (0.25 to 0.5 inclusive)
    pub target_weight_gain: f64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FitcalcService {
    // --- Status ---

    #[tool(description = "Get the current status of the FitCalc service including build info and process information")]
    async fn fitcalc_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get usage instructions for the fitness calculators: units, valid ranges, and which tool answers which question. Call this when starting a fitness coaching session or when unsure how to use the calculator tools.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            CALCULATOR_INSTRUCTIONS,
        )]))
    }

    // --- Calculators ---

    #[tool(description = "Calculate BMI from weight (kg) and height (cm), with weight category")]
    fn calculate_bmi(&self, Parameters(p): Parameters<CalculateBmiParams>) -> Result<CallToolResult, McpError> {
        outcome_json(bmi::calculate_bmi(p.weight, p.height))
    }

    #[tool(description = "Get fitness tips for a goal ('loss' or 'gain')")]
    fn fitness_tips(&self, Parameters(p): Parameters<FitnessTipsParams>) -> Result<CallToolResult, McpError> {
        outcome_json(tips::fitness_tips(&p.goal))
    }

    #[tool(description = "Estimate daily maintenance calories from body weight (kg) using a simplified formula")]
    fn calculate_maintenance_calories(&self, Parameters(p): Parameters<CalculateMaintenanceCaloriesParams>) -> Result<CallToolResult, McpError> {
        outcome_json(energy::calculate_maintenance_calories(p.weight))
    }

    #[tool(description = "Calculate the recommended macronutrient split (protein/fat/carb grams) for a daily calorie total and goal")]
    fn calculate_macronutrients(&self, Parameters(p): Parameters<CalculateMacronutrientsParams>) -> Result<CallToolResult, McpError> {
        outcome_json(macros::calculate_macronutrients(p.calories, &p.goal))
    }

    #[tool(description = "Calculate the daily calorie deficit for a weekly weight loss goal (0.5 to 1 kg per week only), with recommendations")]
    fn calculate_weight_loss_plan(&self, Parameters(p): Parameters<CalculateWeightLossPlanParams>) -> Result<CallToolResult, McpError> {
        outcome_json(plans::calculate_weight_loss_plan(p.target_weight_loss))
    }

    #[tool(description = "Calculate the daily calorie surplus for a weekly weight gain goal (0.25 to 0.5 kg per week only), with recommendations")]
    fn calculate_weight_gain_plan(&self, Parameters(p): Parameters<CalculateWeightGainPlanParams>) -> Result<CallToolResult, McpError> {
        outcome_json(plans::calculate_weight_gain_plan(p.target_weight_gain))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FitcalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fitcalc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("FitCalc".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "FitCalc - deterministic fitness and nutrition calculators. \
                 IMPORTANT: Call calculator_instructions for units and valid ranges. \
                 Calculators: calculate_bmi (weight kg, height cm), \
                 calculate_maintenance_calories (weight kg), \
                 calculate_macronutrients (calories, goal loss/gain/maintain), \
                 calculate_weight_loss_plan (0.5-1 kg/week), \
                 calculate_weight_gain_plan (0.25-0.5 kg/week), \
                 fitness_tips (goal loss/gain). \
                 Every result is a JSON object with status success/error; relay \
                 error_message to the user on error. \
                 Service: fitcalc_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macronutrient_params_default_goal() {
        let p: CalculateMacronutrientsParams =
            serde_json::from_str(r#"{"calories": 2000}"#).unwrap();
        assert_eq!(p.goal, "loss");

        let p: CalculateMacronutrientsParams =
            serde_json::from_str(r#"{"calories": 2000, "goal": "gain"}"#).unwrap();
        assert_eq!(p.goal, "gain");
    }

    #[test]
    fn test_bmi_params_require_both_fields() {
        assert!(serde_json::from_str::<CalculateBmiParams>(r#"{"weight": 70}"#).is_err());
        let p: CalculateBmiParams =
            serde_json::from_str(r#"{"weight": 70, "height": 175}"#).unwrap();
        assert!((p.weight - 70.0).abs() < 1e-9);
        assert!((p.height - 175.0).abs() < 1e-9);
    }
}
