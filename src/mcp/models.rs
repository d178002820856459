//! MCP Protocol Models and Constants
//!
//! This module contains the JSON-RPC envelope, the tool names exposed to the
//! ordering agent, and the argument shapes each tool accepts.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

// =============================================================================
// MCP Constants
// =============================================================================

pub const VIEW_MENU_TOOL: &str = "view_menu";
pub const VIEW_CART_TOOL: &str = "view_cart";
pub const ADD_ITEM_TOOL: &str = "add_item_to_cart";
pub const REMOVE_ITEM_TOOL: &str = "remove_item_from_cart";
pub const ADD_TOPPING_TOOL: &str = "add_topping_to_entree";
pub const REMOVE_TOPPING_TOOL: &str = "remove_topping_from_entree";
pub const SET_PROTEIN_TOOL: &str = "set_entree_protein";
pub const SET_SPECIAL_CONFIGURATIONS_TOOL: &str = "set_entree_special_configurations";

/// URI of the menu resource
pub const MENU_RESOURCE_URI: &str = "menu://catalog";
/// URI of the current cart resource
pub const CART_RESOURCE_URI: &str = "cart://current";
pub const JSON_MIME_TYPE: &str = "application/json";

/// Server identifier
pub const SERVER_NAME: &str = "order-cart-rust";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// JSON-RPC error codes
pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_REQUEST: i32 = -32600;
pub const INVALID_PARAMS: i32 = -32602;
pub const JSONRPC_VERSION: &str = "2.0";

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version; must be "2.0" when present
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}

impl JsonRpcRequest {
    /// A missing `jsonrpc` field is tolerated; any other version is not.
    pub fn has_valid_version(&self) -> bool {
        self.jsonrpc
            .as_deref()
            .map_or(true, |version| version == JSONRPC_VERSION)
    }
}

// =============================================================================
// Tool Arguments
// =============================================================================

/// Input for `add_item_to_cart`
#[derive(Debug, Deserialize)]
pub struct AddItemInput {
    /// "entree", "side" or "drink"
    pub item_type: String,
    pub menu_item_id: String,
}

/// Input for `remove_item_from_cart`
#[derive(Debug, Deserialize)]
pub struct RemoveItemInput {
    pub item_index: i64,
}

/// Input for `add_topping_to_entree` and `remove_topping_from_entree`
#[derive(Debug, Deserialize)]
pub struct ToppingInput {
    pub item_index: i64,
    pub topping_id: String,
}

/// Input for `set_entree_protein`
#[derive(Debug, Deserialize)]
pub struct ProteinInput {
    pub item_index: i64,
    #[serde(alias = "new_protein_id")]
    pub protein_id: String,
}

/// Input for `set_entree_special_configurations`
#[derive(Debug, Deserialize)]
pub struct SpecialConfigurationsInput {
    pub item_index: i64,
    pub special_configurations: BTreeMap<String, String>,
}
