//! FitCalc Status Tool
//!
//! Provides runtime status information about the FitCalc service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Calculator usage instructions for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# FitCalc Usage Instructions

FitCalc provides deterministic fitness and nutrition calculators. Every tool
returns a JSON object with a `status` field: `"success"` results carry the
domain fields described below, `"error"` results carry an `error_message`
you should relay to the user.

## Units

- Weight: kilograms (kg)
- Height: centimeters (cm)
- Energy: kilocalories per day (kcal/day)
- Weekly change targets: kilograms per week (kg/week)

Convert user input to these units before calling a tool (e.g., 154 lbs ->
70 kg, 5'9" -> 175 cm).

## Which tool for which question

| Question | Tool |
|----------|------|
| "What's my BMI?" | `calculate_bmi(weight, height)` |
| "How many calories to maintain my weight?" | `calculate_maintenance_calories(weight)` |
| "How should I split my macros?" | `calculate_macronutrients(calories, goal)` |
| "How do I lose X kg per week?" | `calculate_weight_loss_plan(target_weight_loss)` |
| "How do I gain X kg per week?" | `calculate_weight_gain_plan(target_weight_gain)` |
| "Any tips for my goal?" | `fitness_tips(goal)` |

## Valid ranges

- `calculate_bmi`: weight and height must be positive.
- `calculate_maintenance_calories`: weight must be positive.
- `calculate_macronutrients`: calories must be positive; goal is one of
  "loss", "gain", "maintain" (defaults to "loss").
- `calculate_weight_loss_plan`: 0.5 to 1.0 kg/week inclusive. Larger or
  smaller targets are rejected as unhealthy.
- `calculate_weight_gain_plan`: 0.25 to 0.5 kg/week inclusive.
- `fitness_tips`: goal is "loss" or "gain" (case-insensitive).

## Interpreting results

- BMI categories: Underweight (< 18.5), Normal weight (< 24.9),
  Overweight (< 29.9), Obese (otherwise).
- Maintenance calories use a simplified bodyweight rule, and the macro
  split is always 35% protein / 25% fat / 40% carbs regardless of goal.
  Present them as estimates, not clinical guidance.
- Plan tools return a `recommendations` list; include it in your answer.

## Notes

- Every calculator is pure: the same inputs always produce the same
  result, and no call changes server state.
- An `"error"` status is an expected outcome for out-of-range input, not a
  server fault. Do not retry; fix the input or inform the user.
"#;

/// Runtime status of the FitCalc service
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Service information
    pub started_at: String,
    pub uptime_seconds: u64,

    /// Process information
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: String,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> ServiceStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ServiceStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            started_at: self.started_at.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_current_process() {
        let tracker = StatusTracker::new();
        let status = tracker.get_status();
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.version, crate::build_info::VERSION);
    }

    #[test]
    fn test_instructions_cover_all_calculators() {
        for tool in [
            "calculate_bmi",
            "calculate_maintenance_calories",
            "calculate_macronutrients",
            "calculate_weight_loss_plan",
            "calculate_weight_gain_plan",
            "fitness_tips",
        ] {
            assert!(CALCULATOR_INSTRUCTIONS.contains(tool), "missing {}", tool);
        }
    }
}
