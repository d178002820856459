//! Order Cart Library
//!
//! Cart engine for an agent-driven food ordering session: a read-only menu
//! catalog, a cart of entrees, sides and drinks validated against it, and an
//! MCP (Model Context Protocol) tool surface the ordering agent calls.

// Domain modules
pub mod cart;
pub mod error;
pub mod menu;

// Tool surface
pub mod mcp;

// Infrastructure
pub mod config;
pub mod router;

pub use error::{CartError, CartResult, ErrorKind, MenuError};
