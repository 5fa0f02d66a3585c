//! BMI Tool
//!
//! Body Mass Index calculation and categorization.

use serde::Serialize;

use crate::models::{CalcError, CalcResult};
use crate::nutrition::{cm_to_m, round2};

/// BMI category
///
/// Thresholds are the service's published boundaries (18.5 / 24.9 / 29.9),
/// which sit slightly below the WHO overweight/obese cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese")]
    Obese,
}

impl BmiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Classify a BMI value
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 24.9 {
            BmiCategory::NormalWeight
        } else if bmi < 29.9 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

/// Response for calculate_bmi
#[derive(Debug, Serialize)]
pub struct BmiResponse {
    pub bmi: f64,
    pub category: BmiCategory,
    pub message: String,
}

/// Calculate BMI from weight (kg) and height (cm)
pub fn calculate_bmi(weight: f64, height: f64) -> CalcResult<BmiResponse> {
    if weight.is_nan() || weight <= 0.0 {
        return Err(CalcError::validation(
            "Weight must be a positive number of kilograms.",
        ));
    }
    if height.is_nan() || height <= 0.0 {
        return Err(CalcError::validation(
            "Height must be a positive number of centimeters.",
        ));
    }

    let height_m = cm_to_m(height);
    let bmi = weight / (height_m * height_m);
    if !bmi.is_finite() {
        return Err(CalcError::computation("BMI calculation did not produce a finite value."));
    }

    let bmi = round2(bmi);
    let category = BmiCategory::from_bmi(bmi);

    Ok(BmiResponse {
        bmi,
        category,
        message: format!("Your BMI is {} ({}).", bmi, category.as_str()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_normal_weight() {
        let resp = calculate_bmi(70.0, 175.0).unwrap();
        assert!((resp.bmi - 22.86).abs() < 1e-9);
        assert_eq!(resp.category, BmiCategory::NormalWeight);
        assert_eq!(resp.message, "Your BMI is 22.86 (Normal weight).");
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::from_bmi(24.89), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.89), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Obese);
        assert_eq!(BmiCategory::from_bmi(40.0), BmiCategory::Obese);
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        assert!(matches!(
            calculate_bmi(0.0, 175.0),
            Err(CalcError::Validation(_))
        ));
        assert!(matches!(
            calculate_bmi(-70.0, 175.0),
            Err(CalcError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_height() {
        assert!(matches!(
            calculate_bmi(70.0, 0.0),
            Err(CalcError::Validation(_))
        ));
        assert!(matches!(
            calculate_bmi(70.0, -175.0),
            Err(CalcError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_nan_input() {
        assert!(matches!(
            calculate_bmi(f64::NAN, 175.0),
            Err(CalcError::Validation(_))
        ));
    }

    #[test]
    fn test_idempotent() {
        let a = calculate_bmi(82.5, 168.0).unwrap();
        let b = calculate_bmi(82.5, 168.0).unwrap();
        assert_eq!(a.bmi, b.bmi);
        assert_eq!(a.category, b.category);
        assert_eq!(a.message, b.message);
    }

    #[test]
    fn test_category_serializes_display_string() {
        let json = serde_json::to_value(BmiCategory::NormalWeight).unwrap();
        assert_eq!(json, "Normal weight");
    }
}
