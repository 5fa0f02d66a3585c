//! Weight Plan Tools
//!
//! Daily calorie deficit/surplus targets for weekly weight change goals.

use serde::Serialize;

use crate::models::{CalcError, CalcResult};
use crate::nutrition::{
    round2, DAYS_PER_WEEK, KCAL_PER_KG, MAX_WEEKLY_GAIN_KG, MAX_WEEKLY_LOSS_KG,
    MIN_WEEKLY_GAIN_KG, MIN_WEEKLY_LOSS_KG,
};

/// Recommendations returned with every weight-loss plan
const LOSS_RECOMMENDATIONS: [&str; 4] = [
    "Track your food intake and stay in a calorie deficit.",
    "Do cardio exercises like brisk walking, running, or cycling daily.",
    "Stay hydrated and get enough sleep.",
    "Avoid sugary drinks and processed snacks.",
];

/// Recommendations returned with every weight-gain plan
const GAIN_RECOMMENDATIONS: [&str; 5] = [
    "Eat 3 large meals and 2-3 snacks each day.",
    "Include protein-rich foods: eggs, meat, legumes, dairy.",
    "Strength train 3-5 times a week (compound lifts are best).",
    "Add healthy fats (nuts, seeds, olive oil) to meals.",
    "Track progress weekly to adjust intake.",
];

/// Response for calculate_weight_loss_plan
#[derive(Debug, Serialize)]
pub struct WeightLossPlanResponse {
    pub target_weight_loss_kg: f64,
    pub daily_calorie_deficit: f64,
    pub message: String,
    pub recommendations: Vec<&'static str>,
}

/// Response for calculate_weight_gain_plan
#[derive(Debug, Serialize)]
pub struct WeightGainPlanResponse {
    pub target_weight_gain_kg: f64,
    pub daily_calorie_surplus: f64,
    pub message: String,
    pub recommendations: Vec<&'static str>,
}

/// Daily kcal change for a weekly kg target
fn daily_kcal_for_weekly_kg(target_kg: f64) -> f64 {
    target_kg * KCAL_PER_KG / DAYS_PER_WEEK
}

/// Calculate the daily calorie deficit for a weekly weight loss goal.
///
/// Accepts 0.5 to 1 kg per week inclusive; anything outside that band is
/// rejected as unhealthy.
pub fn calculate_weight_loss_plan(target_weight_loss: f64) -> CalcResult<WeightLossPlanResponse> {
    if target_weight_loss.is_nan()
        || target_weight_loss < MIN_WEEKLY_LOSS_KG
        || target_weight_loss > MAX_WEEKLY_LOSS_KG
    {
        return Err(CalcError::validation(
            "Only 0.5 kg to 1 kg per week is recommended for healthy weight loss.",
        ));
    }

    let daily_deficit = daily_kcal_for_weekly_kg(target_weight_loss);
    if !daily_deficit.is_finite() {
        return Err(CalcError::computation(
            "Calorie deficit calculation did not produce a finite value.",
        ));
    }
    let daily_deficit = round2(daily_deficit);

    Ok(WeightLossPlanResponse {
        target_weight_loss_kg: target_weight_loss,
        daily_calorie_deficit: daily_deficit,
        message: format!(
            "To lose {} kg per week, aim for a daily calorie deficit of {} kcal. \
             This can be achieved through a combination of diet (eating fewer calories) \
             and exercise (e.g., 30-60 minutes of cardio).",
            target_weight_loss,
            daily_deficit.round() as i64
        ),
        recommendations: LOSS_RECOMMENDATIONS.to_vec(),
    })
}

/// Calculate the daily calorie surplus for a weekly weight gain goal.
///
/// Accepts 0.25 to 0.5 kg per week inclusive.
pub fn calculate_weight_gain_plan(target_weight_gain: f64) -> CalcResult<WeightGainPlanResponse> {
    if target_weight_gain.is_nan()
        || target_weight_gain < MIN_WEEKLY_GAIN_KG
        || target_weight_gain > MAX_WEEKLY_GAIN_KG
    {
        return Err(CalcError::validation(
            "Only 0.25 kg to 0.5 kg per week is recommended for healthy weight gain.",
        ));
    }

    let daily_surplus = daily_kcal_for_weekly_kg(target_weight_gain);
    if !daily_surplus.is_finite() {
        return Err(CalcError::computation(
            "Calorie surplus calculation did not produce a finite value.",
        ));
    }
    let daily_surplus = round2(daily_surplus);

    Ok(WeightGainPlanResponse {
        target_weight_gain_kg: target_weight_gain,
        daily_calorie_surplus: daily_surplus,
        message: format!(
            "To gain {} kg per week, aim for a daily calorie surplus of {} kcal. \
             Focus on strength training and consuming calorie-dense, nutritious foods.",
            target_weight_gain,
            daily_surplus.round() as i64
        ),
        recommendations: GAIN_RECOMMENDATIONS.to_vec(),
    })
}
