//! Model Context Protocol (MCP) Module
//!
//! This module contains the tool-call surface used by the ordering agent:
//! - Protocol models (JsonRpcRequest, tool inputs, constants)
//! - RPC helpers (success/error envelopes, tool results)
//! - MCP handlers (initialize, tools/list, tools/call, resources)

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types and functions
pub use handlers::{handle_tool_call, routes};
