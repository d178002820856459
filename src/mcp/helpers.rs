//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC communication and for
//! shaping tool results.

use crate::error::CartError;
use serde_json::{json, Value};

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// Successful tool result: a text confirmation plus structured content.
pub fn tool_result(text: impl Into<String>, structured: Value) -> Value {
    json!({
        "content": [{ "type": "text", "text": text.into() }],
        "structuredContent": structured,
        "isError": false,
    })
}

/// Tool result for a rejected cart operation.
///
/// The agent reads the message back to the customer; the session carries on.
pub fn tool_error(err: &CartError) -> Value {
    json!({
        "content": [{ "type": "text", "text": err.to_string() }],
        "structuredContent": {
            "error": {
                "code": err.kind(),
                "message": err.to_string(),
            }
        },
        "isError": true,
    })
}

/// Converts a tool's signed index argument into a cart position.
pub fn cart_index(item_index: i64) -> Result<usize, CartError> {
    usize::try_from(item_index).map_err(|_| {
        CartError::InvalidArgument(format!(
            "Invalid index: {}. Cart indices start at 0.",
            item_index
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_envelopes() {
        let success = rpc_success(json!(1), json!("ok"));
        assert_eq!(success["result"], "ok");
        assert_eq!(success["id"], 1);

        let error = rpc_error(json!(2), -1, "fail");
        assert_eq!(error["error"]["message"], "fail");
        assert_eq!(error["id"], 2);
    }

    #[test]
    fn test_tool_error_carries_code() {
        let err = CartError::IndexOutOfRange { index: 4, len: 2 };
        let result = tool_error(&err);
        assert_eq!(result["isError"], true);
        assert_eq!(result["structuredContent"]["error"]["code"], "INDEX_ERROR");
        assert_eq!(result["content"][0]["text"], err.to_string());
    }

    #[test]
    fn test_negative_index_is_invalid_argument() {
        assert_eq!(cart_index(3), Ok(3));
        assert!(matches!(cart_index(-1), Err(CartError::InvalidArgument(_))));
    }
}
