//! Unit conversion functions
//!
//! Small pure helpers for converting between units and rounding results.

use super::units::LBS_PER_KG;

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert kilograms to pounds using the simplified 2.2 factor
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * LBS_PER_KG
}

/// Convert centimeters to meters
pub fn cm_to_m(cm: f64) -> f64 {
    cm / 100.0
}
