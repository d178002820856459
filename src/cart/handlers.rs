//! REST API handlers for the cart and menu
//!
//! Read-only projections for the display collaborator. All mutations go
//! through the MCP tools.

use super::{helpers::format_cart_summary, state::SharedState};
use crate::menu::Menu;
use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(get_cart))
        .route("/menu", get(get_menu))
}

/// Endpoint: GET /cart
/// Returns the cart and its text summary.
async fn get_cart(State(state): State<SharedState>) -> impl IntoResponse {
    let cart = state.cart_snapshot();
    let summary = format_cart_summary(&cart, &state.menu);

    Json(json!({
        "cart": cart,
        "summary": summary,
    }))
}

/// Endpoint: GET /menu
async fn get_menu(State(state): State<SharedState>) -> Json<Menu> {
    Json(state.menu.as_ref().clone())
}
