//! Fitness goal model
//!
//! Represents the user's fitness goal as understood by the calculators.

use serde::{Deserialize, Serialize};

/// Fitness goal enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Lose weight (calorie deficit)
    Loss,
    /// Gain weight (calorie surplus)
    Gain,
    /// Maintain current weight
    Maintain,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Loss => "loss",
            Goal::Gain => "gain",
            Goal::Maintain => "maintain",
        }
    }

    /// Parse from string, case-insensitive. Returns None for unknown goals.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "loss" => Some(Goal::Loss),
            "gain" => Some(Goal::Gain),
            "maintain" => Some(Goal::Maintain),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(Goal::from_str("loss"), Some(Goal::Loss));
        assert_eq!(Goal::from_str("LOSS"), Some(Goal::Loss));
        assert_eq!(Goal::from_str("Gain"), Some(Goal::Gain));
        assert_eq!(Goal::from_str("MainTain"), Some(Goal::Maintain));
    }

    #[test]
    fn test_from_str_unknown() {
        assert_eq!(Goal::from_str("bulk"), None);
        assert_eq!(Goal::from_str(""), None);
        assert_eq!(Goal::from_str("cut"), None);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Goal::Loss).unwrap(), r#""loss""#);
        assert_eq!(serde_json::to_string(&Goal::Maintain).unwrap(), r#""maintain""#);
    }
}
