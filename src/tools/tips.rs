//! Fitness Tips Tool
//!
//! Fixed tip lists keyed by fitness goal.

use serde::Serialize;

use crate::models::{CalcError, CalcResult, Goal};

/// Tips for a weight loss goal
const LOSS_TIPS: [&str; 4] = [
    "Incorporate cardio workouts like running or cycling.",
    "Maintain a calorie deficit.",
    "Eat more protein and fiber.",
    "Avoid sugary drinks.",
];

/// Tips for a weight gain goal
const GAIN_TIPS: [&str; 4] = [
    "Include strength training in your routine.",
    "Increase your caloric intake with healthy foods.",
    "Consume more protein and carbs.",
    "Ensure adequate rest for muscle recovery.",
];

/// Response for fitness_tips
///
/// No `message` field: the tip list is the payload.
#[derive(Debug, Serialize)]
pub struct FitnessTipsResponse {
    pub goal: Goal,
    pub tips: Vec<&'static str>,
}

/// Get fitness tips for a goal ("loss" or "gain", case-insensitive)
pub fn fitness_tips(goal: &str) -> CalcResult<FitnessTipsResponse> {
    let normalized = goal.to_lowercase();

    let (goal, tips) = match Goal::from_str(&normalized) {
        Some(Goal::Loss) => (Goal::Loss, LOSS_TIPS.to_vec()),
        Some(Goal::Gain) => (Goal::Gain, GAIN_TIPS.to_vec()),
        // "maintain" is a valid macro goal but has no tip list
        _ => {
            return Err(CalcError::validation(format!(
                "Goal '{}' is not recognized. Use 'loss' or 'gain'.",
                normalized
            )));
        }
    };

    Ok(FitnessTipsResponse { goal, tips })
}
