//! Calculation outcome types
//!
//! Defines the calculator error enum and the status-tagged result wrapper
//! that every tool serializes onto the wire.

use serde::Serialize;
use thiserror::Error;

/// Calculator error types
#[derive(Debug, Clone, Error)]
pub enum CalcError {
    /// Input outside the accepted domain (bad goal string, non-positive
    /// measurement, out-of-range weekly target)
    #[error("{0}")]
    Validation(String),

    /// Arithmetic produced a non-finite value
    #[error("{0}")]
    Computation(String),
}

impl CalcError {
    pub fn validation(msg: impl Into<String>) -> Self {
        CalcError::Validation(msg.into())
    }

    pub fn computation(msg: impl Into<String>) -> Self {
        CalcError::Computation(msg.into())
    }
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Wire shape of every tool result: a mapping tagged by `status`.
///
/// Success flattens the domain fields next to the tag; error carries a
/// single `error_message` string the caller relays to the end user.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolOutcome<T: Serialize> {
    Success(T),
    Error { error_message: String },
}

impl<T: Serialize> From<CalcResult<T>> for ToolOutcome<T> {
    fn from(result: CalcResult<T>) -> Self {
        match result {
            Ok(value) => ToolOutcome::Success(value),
            Err(err) => {
                // Error results are data to the caller; this trace is the
                // only server-side record of them.
                tracing::debug!("calculator returned error result: {}", err);
                ToolOutcome::Error {
                    error_message: err.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        value: f64,
        message: String,
    }

    #[test]
    fn test_success_shape() {
        let outcome = ToolOutcome::from(Ok(Sample {
            value: 22.86,
            message: "ok".to_string(),
        }));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["value"], 22.86);
        assert_eq!(json["message"], "ok");
        assert!(json.get("error_message").is_none());
    }

    #[test]
    fn test_error_shape() {
        let outcome: ToolOutcome<Sample> =
            ToolOutcome::from(Err(CalcError::validation("bad input")));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error_message"], "bad input");
        assert!(json.get("value").is_none());
    }

    #[test]
    fn test_error_display_passthrough() {
        let err = CalcError::validation("Goal 'bulk' is not recognized.");
        assert_eq!(err.to_string(), "Goal 'bulk' is not recognized.");
        let err = CalcError::computation("value is not finite");
        assert_eq!(err.to_string(), "value is not finite");
    }
}
