//! Maintenance Calories Tool
//!
//! Estimates daily maintenance calories from body weight.

use serde::Serialize;

use crate::models::{CalcError, CalcResult};
use crate::nutrition::{kg_to_lbs, round2, MAINTENANCE_KCAL_PER_LB};

/// Response for calculate_maintenance_calories
#[derive(Debug, Serialize)]
pub struct MaintenanceCaloriesResponse {
    pub weight_kg: f64,
    pub weight_lbs: f64,
    pub maintenance_calories: f64,
    pub message: String,
}

/// Estimate maintenance calories from weight (kg).
///
/// Uses the simplified pounds-times-14 rule, not Mifflin-St Jeor or
/// Harris-Benedict.
pub fn calculate_maintenance_calories(weight: f64) -> CalcResult<MaintenanceCaloriesResponse> {
    if weight.is_nan() || weight <= 0.0 {
        return Err(CalcError::validation(
            "Weight must be a positive number of kilograms.",
        ));
    }

    let weight_lbs = kg_to_lbs(weight);
    let maintenance_calories = weight_lbs * MAINTENANCE_KCAL_PER_LB;
    if !maintenance_calories.is_finite() {
        return Err(CalcError::computation(
            "Maintenance calorie calculation did not produce a finite value.",
        ));
    }

    let weight_lbs = round2(weight_lbs);
    let maintenance_calories = round2(maintenance_calories);

    Ok(MaintenanceCaloriesResponse {
        weight_kg: weight,
        weight_lbs,
        maintenance_calories,
        message: format!(
            "Estimated maintenance calories: {} kcal/day.",
            maintenance_calories
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maintenance_at_80_kg() {
        let resp = calculate_maintenance_calories(80.0).unwrap();
        assert!((resp.weight_kg - 80.0).abs() < 1e-9);
        assert!((resp.weight_lbs - 176.0).abs() < 1e-9);
        assert!((resp.maintenance_calories - 2464.0).abs() < 1e-9);
        assert_eq!(resp.message, "Estimated maintenance calories: 2464 kcal/day.");
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        // 70.25 kg -> 154.55 lbs -> 2163.7 kcal
        let resp = calculate_maintenance_calories(70.25).unwrap();
        assert!((resp.weight_lbs - 154.55).abs() < 1e-9);
        assert!((resp.maintenance_calories - 2163.7).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        assert!(matches!(
            calculate_maintenance_calories(0.0),
            Err(CalcError::Validation(_))
        ));
        assert!(matches!(
            calculate_maintenance_calories(-5.0),
            Err(CalcError::Validation(_))
        ));
    }

    #[test]
    fn test_idempotent() {
        let a = calculate_maintenance_calories(63.5).unwrap();
        let b = calculate_maintenance_calories(63.5).unwrap();
        assert_eq!(a.maintenance_calories, b.maintenance_calories);
        assert_eq!(a.message, b.message);
    }
}
