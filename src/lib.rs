//! FitCalc Library
//!
//! Deterministic fitness and nutrition calculators exposed as MCP tools.

pub mod build_info;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
