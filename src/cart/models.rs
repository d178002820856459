//! Cart Domain Models
//!
//! A cart is an ordered list of heterogeneous entries. Entries store menu ids,
//! never references into the catalog; referential integrity is checked when an
//! entry is created or customized.

use crate::menu::MenuCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Cart Entries
// =============================================================================

/// An entree with its customizations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartEntree {
    /// ID of the entree (e.g., "burrito", "tacos")
    pub menu_item_id: String,

    /// Single protein slot; setting it again replaces the previous protein
    #[serde(default)]
    pub protein_id: Option<String>,

    /// Topping ids in insertion order, without duplicates
    #[serde(default)]
    pub toppings: Vec<String>,

    /// Chosen special configurations (key -> value)
    #[serde(default)]
    pub special_configurations: BTreeMap<String, String>,
}

impl CartEntree {
    pub fn new(menu_item_id: impl Into<String>) -> Self {
        CartEntree {
            menu_item_id: menu_item_id.into(),
            protein_id: None,
            toppings: Vec::new(),
            special_configurations: BTreeMap::new(),
        }
    }
}

/// A side, e.g. chips.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartSide {
    pub menu_item_id: String,
}

/// A drink, e.g. a fountain drink.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartDrink {
    pub menu_item_id: String,
}

/// One line in the cart. The variant is fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum CartItem {
    Entree(CartEntree),
    Side(CartSide),
    Drink(CartDrink),
}

impl CartItem {
    /// Creates an entry with per-variant defaults.
    ///
    /// Returns `None` for categories that are not orderable on their own
    /// (proteins and toppings).
    pub fn for_category(category: MenuCategory, menu_item_id: impl Into<String>) -> Option<Self> {
        let menu_item_id = menu_item_id.into();
        match category {
            MenuCategory::Entree => Some(CartItem::Entree(CartEntree::new(menu_item_id))),
            MenuCategory::Side => Some(CartItem::Side(CartSide { menu_item_id })),
            MenuCategory::Drink => Some(CartItem::Drink(CartDrink { menu_item_id })),
            MenuCategory::Protein | MenuCategory::Topping => None,
        }
    }

    pub fn category(&self) -> MenuCategory {
        match self {
            CartItem::Entree(_) => MenuCategory::Entree,
            CartItem::Side(_) => MenuCategory::Side,
            CartItem::Drink(_) => MenuCategory::Drink,
        }
    }

    pub fn menu_item_id(&self) -> &str {
        match self {
            CartItem::Entree(entree) => &entree.menu_item_id,
            CartItem::Side(side) => &side.menu_item_id,
            CartItem::Drink(drink) => &drink.menu_item_id,
        }
    }

    pub fn as_entree(&self) -> Option<&CartEntree> {
        match self {
            CartItem::Entree(entree) => Some(entree),
            CartItem::Side(_) | CartItem::Drink(_) => None,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// A customer's cart.
///
/// Entries are addressed by their 0-based position at the time of a call.
/// Removing an entry shifts every later entry left by one, so indices held
/// from before a removal are stale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Externally assigned, immutable
    cart_id: String,

    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart with a caller-supplied id.
    pub fn new(cart_id: impl Into<String>) -> Self {
        Cart {
            cart_id: cart_id.into(),
            items: Vec::new(),
        }
    }

    pub fn cart_id(&self) -> &str {
        &self.cart_id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CartItem> {
        self.items.get(index)
    }
}
