//! Macronutrient Tool
//!
//! Splits a daily calorie total into protein, fat, and carbohydrate grams.

use serde::Serialize;

use crate::models::{CalcError, CalcResult, Goal};
use crate::nutrition::{
    round2, CARBS_RATIO, FAT_RATIO, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
    PROTEIN_RATIO,
};

/// Gram breakdown nested inside the macronutrient response
#[derive(Debug, Serialize)]
pub struct MacronutrientSplit {
    pub protein_grams: f64,
    pub fat_grams: f64,
    pub carbs_grams: f64,
}

/// Response for calculate_macronutrients
#[derive(Debug, Serialize)]
pub struct MacronutrientsResponse {
    pub goal: Goal,
    pub calories: i64,
    pub macronutrients: MacronutrientSplit,
    pub message: String,
}

/// Calculate the macronutrient split for a calorie total and goal.
///
/// The 35/25/40 protein/fat/carb split is applied for every goal; the goal
/// is validated and echoed but does not change the ratios.
pub fn calculate_macronutrients(calories: f64, goal: &str) -> CalcResult<MacronutrientsResponse> {
    let normalized = goal.to_lowercase();
    let goal = Goal::from_str(&normalized).ok_or_else(|| {
        CalcError::validation(format!(
            "Goal '{}' is invalid. Use 'loss', 'gain', or 'maintain'.",
            normalized
        ))
    })?;

    if calories.is_nan() || calories <= 0.0 {
        return Err(CalcError::validation(
            "Calories must be a positive number.",
        ));
    }

    let protein_grams = calories * PROTEIN_RATIO / KCAL_PER_G_PROTEIN;
    let fat_grams = calories * FAT_RATIO / KCAL_PER_G_FAT;
    let carbs_grams = calories * CARBS_RATIO / KCAL_PER_G_CARBS;
    if !protein_grams.is_finite() || !fat_grams.is_finite() || !carbs_grams.is_finite() {
        return Err(CalcError::computation(
            "Macronutrient calculation did not produce finite values.",
        ));
    }

    let split = MacronutrientSplit {
        protein_grams: round2(protein_grams),
        fat_grams: round2(fat_grams),
        carbs_grams: round2(carbs_grams),
    };
    let calories = calories.round() as i64;

    let message = format!(
        "For a {} goal and {} kcal/day:\n- Protein: {}g\n- Fat: {}g\n- Carbs: {}g",
        goal.as_str(),
        calories,
        split.protein_grams,
        split.fat_grams,
        split.carbs_grams
    );

    Ok(MacronutrientsResponse {
        goal,
        calories,
        macronutrients: split,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_at_2000_kcal() {
        let resp = calculate_macronutrients(2000.0, "gain").unwrap();
        assert_eq!(resp.goal, Goal::Gain);
        assert_eq!(resp.calories, 2000);
        assert!((resp.macronutrients.protein_grams - 175.0).abs() < 1e-9);
        assert!((resp.macronutrients.fat_grams - 55.56).abs() < 1e-9);
        assert!((resp.macronutrients.carbs_grams - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratios_do_not_vary_by_goal() {
        let loss = calculate_macronutrients(2000.0, "loss").unwrap();
        let gain = calculate_macronutrients(2000.0, "gain").unwrap();
        let maintain = calculate_macronutrients(2000.0, "maintain").unwrap();
        assert_eq!(
            loss.macronutrients.protein_grams,
            gain.macronutrients.protein_grams
        );
        assert_eq!(
            gain.macronutrients.fat_grams,
            maintain.macronutrients.fat_grams
        );
        assert_eq!(
            loss.macronutrients.carbs_grams,
            maintain.macronutrients.carbs_grams
        );
    }

    #[test]
    fn test_invalid_goal() {
        let err = calculate_macronutrients(2000.0, "bulk").unwrap_err();
        assert!(matches!(err, CalcError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Goal 'bulk' is invalid. Use 'loss', 'gain', or 'maintain'."
        );
    }

    #[test]
    fn test_rejects_non_positive_calories() {
        assert!(matches!(
            calculate_macronutrients(0.0, "loss"),
            Err(CalcError::Validation(_))
        ));
        assert!(matches!(
            calculate_macronutrients(-100.0, "loss"),
            Err(CalcError::Validation(_))
        ));
    }

    #[test]
    fn test_calories_rounded_to_whole_kcal() {
        let resp = calculate_macronutrients(1999.6, "loss").unwrap();
        assert_eq!(resp.calories, 2000);
    }

    #[test]
    fn test_message_breakdown() {
        let resp = calculate_macronutrients(2000.0, "loss").unwrap();
        assert_eq!(
            resp.message,
            "For a loss goal and 2000 kcal/day:\n- Protein: 175g\n- Fat: 55.56g\n- Carbs: 200g"
        );
    }
}
