//! Formula constants
//!
//! Conversion factors and ratios used by the calculators. These mirror the
//! simplified coaching formulas the service is built around; they are not
//! clinical reference values.

// ============================================================================
// Weight Conversion Constants
// ============================================================================

/// Pounds per kilogram (simplified 2.2, not the exact 2.20462)
pub const LBS_PER_KG: f64 = 2.2;

// ============================================================================
// Energy Constants
// ============================================================================

/// Kilocalories per kilogram of body mass change (1 kg fat ~ 7700 kcal)
pub const KCAL_PER_KG: f64 = 7700.0;

/// Estimated maintenance kilocalories per pound of body weight per day
pub const MAINTENANCE_KCAL_PER_LB: f64 = 14.0;

/// Days per week, for spreading a weekly target across daily budgets
pub const DAYS_PER_WEEK: f64 = 7.0;

// ============================================================================
// Macronutrient Constants
// ============================================================================

/// Kilocalories per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

/// Kilocalories per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// Kilocalories per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Share of daily calories allocated to protein
pub const PROTEIN_RATIO: f64 = 0.35;

/// Share of daily calories allocated to fat
pub const FAT_RATIO: f64 = 0.25;

/// Share of daily calories allocated to carbohydrates
pub const CARBS_RATIO: f64 = 0.40;

// ============================================================================
// Healthy Weekly Change Ranges (kg per week)
// ============================================================================

/// Minimum recommended weekly weight loss
pub const MIN_WEEKLY_LOSS_KG: f64 = 0.5;

/// Maximum recommended weekly weight loss
pub const MAX_WEEKLY_LOSS_KG: f64 = 1.0;

/// Minimum recommended weekly weight gain
pub const MIN_WEEKLY_GAIN_KG: f64 = 0.25;

/// Maximum recommended weekly weight gain
pub const MAX_WEEKLY_GAIN_KG: f64 = 0.5;
