//! FitCalc Tools module
//!
//! MCP tool implementations for the FitCalc service.

pub mod bmi;
pub mod energy;
pub mod macros;
pub mod plans;
pub mod status;
pub mod tips;
