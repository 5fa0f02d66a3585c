//! Nutrition calculation module
//!
//! Formula constants and unit conversions shared by the calculators.

pub mod converter;
pub mod units;

pub use converter::{cm_to_m, kg_to_lbs, round2};
pub use units::{
    CARBS_RATIO, DAYS_PER_WEEK, FAT_RATIO, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
    KCAL_PER_KG, LBS_PER_KG, MAINTENANCE_KCAL_PER_LB, MAX_WEEKLY_GAIN_KG, MAX_WEEKLY_LOSS_KG,
    MIN_WEEKLY_GAIN_KG, MIN_WEEKLY_LOSS_KG, PROTEIN_RATIO,
};
