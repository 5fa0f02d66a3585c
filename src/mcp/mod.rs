//! MCP server module
//!
//! Binds the calculator toolset to the Model Context Protocol.

mod server;

pub use server::FitcalcService;
