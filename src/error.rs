//! Error Types
//!
//! Typed failures for the menu catalog and the cart engine. Every cart
//! operation validates before it mutates, so a `CartError` always means the
//! cart was left exactly as it was.

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Cart Errors
// =============================================================================

/// Failures surfaced by cart operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// A referenced menu id is absent from the expected category.
    #[error("{category} '{id}' not in menu")]
    NotFound { category: String, id: String },

    /// A cart position outside `[0, len)`.
    #[error("Invalid index: {index}. Cart has {len} item(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The addressed entry is not an entree.
    #[error("Cart item at index {index} is a {category}, not an entree")]
    NotAnEntree { index: usize, category: String },

    /// The entree has no matching customization capability.
    #[error("{0}")]
    Unsupported(String),

    /// A configuration value outside the allowed set.
    #[error("Invalid value '{value}' for configuration '{key}'. Allowed values: {}", .allowed.join(", "))]
    InvalidValue {
        key: String,
        value: String,
        allowed: Vec<String>,
    },

    /// Malformed input, e.g. an unknown category name.
    #[error("{0}")]
    InvalidArgument(String),
}

/// Machine-readable error codes for the tool layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NotFound,
    IndexError,
    TypeMismatch,
    Unsupported,
    InvalidValue,
    InvalidArgument,
}

impl CartError {
    pub fn not_found(category: impl ToString, id: impl Into<String>) -> Self {
        CartError::NotFound {
            category: category.to_string(),
            id: id.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::NotFound { .. } => ErrorKind::NotFound,
            CartError::IndexOutOfRange { .. } => ErrorKind::IndexError,
            CartError::NotAnEntree { .. } => ErrorKind::TypeMismatch,
            CartError::Unsupported(_) => ErrorKind::Unsupported,
            CartError::InvalidValue { .. } => ErrorKind::InvalidValue,
            CartError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Convenience alias for cart operation results.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Menu Load Errors
// =============================================================================

/// Failures while loading a menu document. These are raised at startup,
/// never during a cart mutation.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Failed to read menu file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse menu document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Menu item '{id}' has type '{found}' but is listed under {expected}")]
    CategoryMismatch {
        id: String,
        expected: String,
        found: String,
    },

    #[error("Menu item in {category} has an empty id")]
    EmptyId { category: String },

    #[error("Duplicate {category} id '{id}' in menu")]
    DuplicateId { category: String, id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = CartError::not_found("topping", "gravy");
        assert_eq!(err.to_string(), "topping 'gravy' not in menu");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_invalid_value_lists_allowed_values() {
        let err = CartError::InvalidValue {
            key: "taco_type".into(),
            value: "waffle".into(),
            allowed: vec!["crispy_corn".into(), "soft_flour".into()],
        };
        assert_eq!(
            err.to_string(),
            "Invalid value 'waffle' for configuration 'taco_type'. Allowed values: crispy_corn, soft_flour"
        );
    }

    #[test]
    fn test_error_kind_serializes_as_code() {
        let code = serde_json::to_value(ErrorKind::TypeMismatch).unwrap();
        assert_eq!(code, "TYPE_MISMATCH");
        let code = serde_json::to_value(ErrorKind::IndexError).unwrap();
        assert_eq!(code, "INDEX_ERROR");
    }
}
