//! MCP (Model Context Protocol) route handlers
//!
//! Exposes the cart operations as tools for the ordering agent.
//! `handle_tool_call` is public so tests can drive tools without HTTP.

use super::{helpers::*, models::*};
use crate::cart::{helpers::format_cart_summary, operations, state::*, Cart};
use crate::error::CartError;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            warn!(error = %e.body_text(), "JSON parse error");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    if !req.has_valid_version() {
        warn!(version = ?req.jsonrpc, "Unsupported JSON-RPC version");
        let id = req.id.unwrap_or(Value::Null);
        return Json(rpc_error(id, INVALID_REQUEST, "Invalid Request")).into_response();
    }

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    debug!(method = method_name, id = ?id, "MCP call");

    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "resources/list" => rpc_success(id, handle_resources_list()),
        "resources/read" => {
            let uri = params.get("uri").and_then(|u| u.as_str()).unwrap_or("");
            match handle_resources_read(&state, uri) {
                Ok(result) => rpc_success(id, result),
                Err(msg) => rpc_error(id, INVALID_PARAMS, msg),
            }
        }
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match handle_tool_call(&state, tool_name, args) {
                Ok(result) => rpc_success(id, result),
                Err(msg) => rpc_error(id, INVALID_PARAMS, msg),
            }
        }
        "ping" => rpc_success(id, json!({})),
        _ => {
            warn!(method = method_name, "Unknown method");
            rpc_error(id, METHOD_NOT_FOUND, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false },
            "resources": { "listChanged": false, "subscribe": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

fn index_property() -> Value {
    json!({
        "type": "integer",
        "minimum": 0,
        "description": "0-based position of the entry in the cart. Positions shift after a removal."
    })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> Value {
    json!({
        "tools": [
            {
                "name": VIEW_MENU_TOOL,
                "title": "View menu",
                "description": "Returns the menu: entrees, proteins, toppings, sides and drinks.",
                "inputSchema": { "type": "object", "properties": {}, "additionalProperties": false }
            },
            {
                "name": VIEW_CART_TOOL,
                "title": "View cart",
                "description": "Returns the current cart with the index of every entry.",
                "inputSchema": { "type": "object", "properties": {}, "additionalProperties": false }
            },
            {
                "name": ADD_ITEM_TOOL,
                "title": "Add item to cart",
                "description": "Adds an entree, side or drink to the cart and returns its index.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "item_type": { "type": "string", "enum": ["entree", "side", "drink"] },
                        "menu_item_id": { "type": "string" }
                    },
                    "required": ["item_type", "menu_item_id"],
                    "additionalProperties": false
                }
            },
            {
                "name": REMOVE_ITEM_TOOL,
                "title": "Remove item from cart",
                "description": "Removes the entry at the given index. Later entries move up by one.",
                "inputSchema": {
                    "type": "object",
                    "properties": { "item_index": index_property() },
                    "required": ["item_index"],
                    "additionalProperties": false
                }
            },
            {
                "name": ADD_TOPPING_TOOL,
                "title": "Add topping to entree",
                "description": "Adds a topping to the entree at the given index.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "item_index": index_property(),
                        "topping_id": { "type": "string" }
                    },
                    "required": ["item_index", "topping_id"],
                    "additionalProperties": false
                }
            },
            {
                "name": REMOVE_TOPPING_TOOL,
                "title": "Remove topping from entree",
                "description": "Removes a topping from the entree at the given index.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "item_index": index_property(),
                        "topping_id": { "type": "string" }
                    },
                    "required": ["item_index", "topping_id"],
                    "additionalProperties": false
                }
            },
            {
                "name": SET_PROTEIN_TOOL,
                "title": "Set entree protein",
                "description": "Sets the protein of the entree at the given index, replacing any previous protein.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "item_index": index_property(),
                        "protein_id": { "type": "string" }
                    },
                    "required": ["item_index", "protein_id"],
                    "additionalProperties": false
                }
            },
            {
                "name": SET_SPECIAL_CONFIGURATIONS_TOOL,
                "title": "Set entree special configurations",
                "description": "Replaces the special configurations (e.g. taco_type) of the entree at the given index.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "item_index": index_property(),
                        "special_configurations": {
                            "type": "object",
                            "additionalProperties": { "type": "string" }
                        }
                    },
                    "required": ["item_index", "special_configurations"],
                    "additionalProperties": false
                }
            }
        ]
    })
}

/// Handles `resources/list` request.
fn handle_resources_list() -> Value {
    json!({
        "resources": [
            {
                "name": "Menu",
                "uri": MENU_RESOURCE_URI,
                "mimeType": JSON_MIME_TYPE
            },
            {
                "name": "Current cart",
                "uri": CART_RESOURCE_URI,
                "mimeType": JSON_MIME_TYPE
            }
        ]
    })
}

/// Handles `resources/read` request.
fn handle_resources_read(state: &AppState, uri: &str) -> Result<Value, String> {
    let body = match uri {
        MENU_RESOURCE_URI => serde_json::to_string(state.menu.as_ref()),
        CART_RESOURCE_URI => serde_json::to_string(&state.cart_snapshot()),
        _ => return Err(format!("Unknown resource: {}", uri)),
    }
    .map_err(|e| format!("Failed to encode resource: {}", e))?;

    Ok(json!({
        "contents": [{
            "uri": uri,
            "mimeType": JSON_MIME_TYPE,
            "text": body
        }]
    }))
}

// =============================================================================
// Tools
// =============================================================================

/// Handles `tools/call` request (Business Logic).
///
/// Returns `Err` only for unknown tools and malformed arguments. Rejected cart
/// operations come back as `Ok` results flagged with `isError`.
pub fn handle_tool_call(state: &AppState, name: &str, args: Value) -> Result<Value, String> {
    let outcome = match name {
        VIEW_MENU_TOOL => return Ok(handle_view_menu(state)),
        VIEW_CART_TOOL => return Ok(handle_view_cart(state)),
        ADD_ITEM_TOOL => handle_add_item(state, parse_args(args)?),
        REMOVE_ITEM_TOOL => handle_remove_item(state, parse_args(args)?),
        ADD_TOPPING_TOOL => handle_add_topping(state, parse_args(args)?),
        REMOVE_TOPPING_TOOL => handle_remove_topping(state, parse_args(args)?),
        SET_PROTEIN_TOOL => handle_set_protein(state, parse_args(args)?),
        SET_SPECIAL_CONFIGURATIONS_TOOL => {
            handle_set_special_configurations(state, parse_args(args)?)
        }
        _ => return Err(format!("Unknown tool: {}", name)),
    };

    match outcome {
        Ok(result) => {
            info!(tool = name, "Tool call succeeded");
            Ok(result)
        }
        Err(err) => {
            warn!(tool = name, code = ?err.kind(), error = %err, "Tool call rejected");
            Ok(tool_error(&err))
        }
    }
}

fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, String> {
    serde_json::from_value(args).map_err(|e| format!("Invalid arguments: {}", e))
}

/// Structured content shared by every cart-mutating tool. Built while the
/// cart lock is still held so `index` and `items` describe the same state.
fn cart_content(cart: &Cart, index: Option<usize>) -> Value {
    json!({
        "cartId": cart.cart_id(),
        "index": index,
        "items": cart.items,
    })
}

fn handle_view_menu(state: &AppState) -> Value {
    tool_result(
        format!(
            "The menu has {} entrees, {} proteins, {} toppings, {} sides and {} drinks.",
            state.menu.entrees.len(),
            state.menu.proteins.len(),
            state.menu.toppings.len(),
            state.menu.sides.len(),
            state.menu.drinks.len()
        ),
        json!({ "menu": state.menu.as_ref() }),
    )
}

fn handle_view_cart(state: &AppState) -> Value {
    state.with_cart(|cart| {
        tool_result(
            format_cart_summary(cart, &state.menu),
            json!({
                "cartId": cart.cart_id(),
                "items": cart.items,
            }),
        )
    })
}

fn handle_add_item(state: &AppState, input: AddItemInput) -> Result<Value, CartError> {
    let (index, content) = state.with_cart_mut(|cart, menu| {
        let index =
            operations::add_item_by_name(cart, menu, &input.item_type, &input.menu_item_id)?;
        Ok::<_, CartError>((index, cart_content(cart, Some(index))))
    })?;

    Ok(tool_result(
        format!(
            "Added {} '{}' to the cart at index {}.",
            input.item_type.trim().to_ascii_lowercase(),
            input.menu_item_id,
            index
        ),
        content,
    ))
}

fn handle_remove_item(state: &AppState, input: RemoveItemInput) -> Result<Value, CartError> {
    let index = cart_index(input.item_index)?;
    let (removed, content) = state.with_cart_mut(|cart, _| {
        let removed = operations::remove_item(cart, index)?;
        Ok::<_, CartError>((removed, cart_content(cart, None)))
    })?;

    Ok(tool_result(
        format!(
            "Removed {} '{}' at index {} from the cart.",
            removed.category(),
            removed.menu_item_id(),
            index
        ),
        content,
    ))
}

fn handle_add_topping(state: &AppState, input: ToppingInput) -> Result<Value, CartError> {
    let index = cart_index(input.item_index)?;
    let content = state.with_cart_mut(|cart, menu| {
        operations::add_topping(cart, menu, index, &input.topping_id)?;
        Ok::<_, CartError>(cart_content(cart, Some(index)))
    })?;

    Ok(tool_result(
        format!(
            "Added topping '{}' to entree at index {}.",
            input.topping_id, index
        ),
        content,
    ))
}

fn handle_remove_topping(state: &AppState, input: ToppingInput) -> Result<Value, CartError> {
    let index = cart_index(input.item_index)?;
    let content = state.with_cart_mut(|cart, _| {
        operations::remove_topping(cart, index, &input.topping_id)?;
        Ok::<_, CartError>(cart_content(cart, Some(index)))
    })?;

    Ok(tool_result(
        format!(
            "Removed topping '{}' from entree at index {}.",
            input.topping_id, index
        ),
        content,
    ))
}

fn handle_set_protein(state: &AppState, input: ProteinInput) -> Result<Value, CartError> {
    let index = cart_index(input.item_index)?;
    let content = state.with_cart_mut(|cart, menu| {
        operations::set_protein(cart, menu, index, &input.protein_id)?;
        Ok::<_, CartError>(cart_content(cart, Some(index)))
    })?;

    Ok(tool_result(
        format!(
            "Set protein '{}' for entree at index {}.",
            input.protein_id, index
        ),
        content,
    ))
}

fn handle_set_special_configurations(
    state: &AppState,
    input: SpecialConfigurationsInput,
) -> Result<Value, CartError> {
    let index = cart_index(input.item_index)?;
    let summary = input
        .special_configurations
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ");
    let content = state.with_cart_mut(|cart, menu| {
        operations::set_special_configurations(cart, menu, index, input.special_configurations)?;
        Ok::<_, CartError>(cart_content(cart, Some(index)))
    })?;

    Ok(tool_result(
        format!(
            "Set special configurations for entree at index {}: {}.",
            index, summary
        ),
        content,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Menu;
    use std::sync::Arc;

    fn test_state() -> AppState {
        let menu = Menu::from_json_str(include_str!("../../config/menu.json")).unwrap();
        AppState::new(Arc::new(menu), "tool-test-cart")
    }

    #[test]
    fn test_add_item_tool_reports_index() {
        let state = test_state();
        let args = json!({ "item_type": "entree", "menu_item_id": "burrito" });

        let result = handle_tool_call(&state, ADD_ITEM_TOOL, args).unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(
            result["content"][0]["text"],
            "Added entree 'burrito' to the cart at index 0."
        );
        assert_eq!(result["structuredContent"]["index"], 0);
        assert_eq!(result["structuredContent"]["cartId"], "tool-test-cart");
    }

    #[test]
    fn test_cart_error_becomes_tool_error() {
        let state = test_state();
        let args = json!({ "item_index": 5, "topping_id": "guacamole" });

        let result = handle_tool_call(&state, ADD_TOPPING_TOOL, args).unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(result["structuredContent"]["error"]["code"], "INDEX_ERROR");
        assert!(state.cart_snapshot().is_empty());
    }

    #[test]
    fn test_missing_arguments_are_rpc_errors() {
        let state = test_state();
        let err = handle_tool_call(&state, SET_PROTEIN_TOOL, json!({ "item_index": 0 }))
            .unwrap_err();
        assert!(err.contains("Invalid arguments"));
    }

    #[test]
    fn test_missing_configurations_leave_entree_untouched() {
        let state = test_state();
        handle_tool_call(
            &state,
            ADD_ITEM_TOOL,
            json!({ "item_type": "entree", "menu_item_id": "tacos" }),
        )
        .unwrap();
        handle_tool_call(
            &state,
            SET_SPECIAL_CONFIGURATIONS_TOOL,
            json!({ "item_index": 0, "special_configurations": { "taco_type": "soft_flour" } }),
        )
        .unwrap();

        let err = handle_tool_call(
            &state,
            SET_SPECIAL_CONFIGURATIONS_TOOL,
            json!({ "item_index": 0 }),
        )
        .unwrap_err();
        assert!(err.contains("Invalid arguments"));

        let cart = state.cart_snapshot();
        let entree = cart.items[0].as_entree().unwrap();
        assert_eq!(
            entree.special_configurations.get("taco_type").map(String::as_str),
            Some("soft_flour")
        );
    }

    #[test]
    fn test_structured_content_matches_mutation() {
        let state = test_state();
        for id in ["burrito", "tacos"] {
            handle_tool_call(
                &state,
                ADD_ITEM_TOOL,
                json!({ "item_type": "entree", "menu_item_id": id }),
            )
            .unwrap();
        }

        let result = handle_tool_call(
            &state,
            ADD_TOPPING_TOOL,
            json!({ "item_index": 1, "topping_id": "cheese" }),
        )
        .unwrap();
        let content = &result["structuredContent"];
        assert_eq!(content["index"], 1);
        assert_eq!(content["items"].as_array().unwrap().len(), 2);
        assert_eq!(content["items"][1]["menu_item_id"], "tacos");
        assert_eq!(content["items"][1]["toppings"], json!(["cheese"]));

        let result =
            handle_tool_call(&state, REMOVE_ITEM_TOOL, json!({ "item_index": 0 })).unwrap();
        let content = &result["structuredContent"];
        assert_eq!(content["index"], Value::Null);
        assert_eq!(content["items"].as_array().unwrap().len(), 1);
        assert_eq!(content["items"][0]["menu_item_id"], "tacos");
    }

    #[test]
    fn test_protein_accepts_legacy_argument_name() {
        let state = test_state();
        handle_tool_call(
            &state,
            ADD_ITEM_TOOL,
            json!({ "item_type": "entree", "menu_item_id": "burrito_bowl" }),
        )
        .unwrap();
        let result = handle_tool_call(
            &state,
            SET_PROTEIN_TOOL,
            json!({ "item_index": 0, "new_protein_id": "sofritas" }),
        )
        .unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(
            result["structuredContent"]["items"][0]["protein_id"],
            "sofritas"
        );
    }
}
