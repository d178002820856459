//! Shopping Cart Domain Module
//!
//! This module contains all cart logic, including:
//! - Domain models (Cart, CartItem variants)
//! - Cart operations validated against the menu
//! - Display helpers
//! - Application state management
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod operations;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{Cart, CartDrink, CartEntree, CartItem, CartSide};
pub use state::{AppState, SharedState};
