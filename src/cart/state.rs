//! Shopping Cart State Management
//!
//! One service instance serves one ordering session: a shared read-only menu
//! and a single cart whose mutations are serialized through a mutex.

use super::models::Cart;
use crate::menu::Menu;
use std::sync::{Arc, Mutex, MutexGuard};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: the catalog and the session's cart.
pub struct AppState {
    /// Loaded once at startup, never mutated
    pub menu: Arc<Menu>,

    cart: Mutex<Cart>,
}

impl AppState {
    pub fn new(menu: Arc<Menu>, cart_id: impl Into<String>) -> Self {
        Self {
            menu,
            cart: Mutex::new(Cart::new(cart_id)),
        }
    }

    fn lock_cart(&self) -> MutexGuard<'_, Cart> {
        // cart operations never partially apply
        self.cart.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Runs `f` with read access to the cart.
    pub fn with_cart<T>(&self, f: impl FnOnce(&Cart) -> T) -> T {
        f(&self.lock_cart())
    }

    /// Runs `f` with exclusive access to the cart and the menu.
    pub fn with_cart_mut<T>(&self, f: impl FnOnce(&mut Cart, &Menu) -> T) -> T {
        let mut cart = self.lock_cart();
        f(&mut cart, &self.menu)
    }

    /// Returns a copy of the current cart.
    pub fn cart_snapshot(&self) -> Cart {
        self.with_cart(Cart::clone)
    }
}
