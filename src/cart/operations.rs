//! Cart Operations
//!
//! Every operation validates against the menu before touching the cart. A
//! failing call returns a [`CartError`] and leaves the cart unchanged.
//!
//! Entries are addressed by position. `remove_item` shifts later entries left
//! by one, so callers must re-read indices after any removal.

use super::models::{Cart, CartEntree, CartItem};
use crate::error::{CartError, CartResult};
use crate::menu::{Menu, MenuCategory};
use std::collections::BTreeMap;
use tracing::debug;

// =============================================================================
// Entry Addressing
// =============================================================================

fn check_index(cart: &Cart, index: usize) -> CartResult<()> {
    if index >= cart.items.len() {
        return Err(CartError::IndexOutOfRange {
            index,
            len: cart.items.len(),
        });
    }
    Ok(())
}

fn entree_at(cart: &Cart, index: usize) -> CartResult<&CartEntree> {
    check_index(cart, index)?;
    match &cart.items[index] {
        CartItem::Entree(entree) => Ok(entree),
        other => Err(CartError::NotAnEntree {
            index,
            category: other.category().to_string(),
        }),
    }
}

fn entree_at_mut(cart: &mut Cart, index: usize) -> CartResult<&mut CartEntree> {
    check_index(cart, index)?;
    match &mut cart.items[index] {
        CartItem::Entree(entree) => Ok(entree),
        other => Err(CartError::NotAnEntree {
            index,
            category: other.category().to_string(),
        }),
    }
}

// =============================================================================
// Entries
// =============================================================================

/// Appends a new entry for `menu_item_id` and returns its index.
pub fn add_item(
    cart: &mut Cart,
    menu: &Menu,
    category: MenuCategory,
    menu_item_id: &str,
) -> CartResult<usize> {
    let item = CartItem::for_category(category, menu_item_id).ok_or_else(|| {
        CartError::InvalidArgument(format!(
            "Invalid item_type: '{}'. Proteins and toppings can only be added to an entree.",
            category
        ))
    })?;
    if menu.find_item(category, menu_item_id).is_none() {
        return Err(CartError::not_found(category, menu_item_id));
    }

    cart.items.push(item);
    let index = cart.items.len() - 1;
    debug!(cart_id = %cart.cart_id(), %category, menu_item_id, index, "Added item");
    Ok(index)
}

/// Like [`add_item`], parsing the category name first.
pub fn add_item_by_name(
    cart: &mut Cart,
    menu: &Menu,
    item_type: &str,
    menu_item_id: &str,
) -> CartResult<usize> {
    let category: MenuCategory = item_type.parse()?;
    add_item(cart, menu, category, menu_item_id)
}

/// Removes the entry at `index` and returns it.
pub fn remove_item(cart: &mut Cart, index: usize) -> CartResult<CartItem> {
    check_index(cart, index)?;
    let removed = cart.items.remove(index);
    debug!(
        cart_id = %cart.cart_id(),
        index,
        menu_item_id = removed.menu_item_id(),
        "Removed item"
    );
    Ok(removed)
}

// =============================================================================
// Entree Customization
// =============================================================================

/// Adds a topping to the entree at `index`. Adding a topping that is already
/// present is a no-op.
pub fn add_topping(
    cart: &mut Cart,
    menu: &Menu,
    index: usize,
    topping_id: &str,
) -> CartResult<usize> {
    entree_at(cart, index)?;
    if menu.find_item(MenuCategory::Topping, topping_id).is_none() {
        return Err(CartError::not_found(MenuCategory::Topping, topping_id));
    }

    let entree = entree_at_mut(cart, index)?;
    if !entree.toppings.iter().any(|t| t == topping_id) {
        entree.toppings.push(topping_id.to_string());
        debug!(index, topping_id, "Added topping");
    }
    Ok(index)
}

/// Removes a topping from the entree at `index`. Removing an absent topping
/// is a no-op.
pub fn remove_topping(cart: &mut Cart, index: usize, topping_id: &str) -> CartResult<()> {
    let entree = entree_at_mut(cart, index)?;
    if let Some(position) = entree.toppings.iter().position(|t| t == topping_id) {
        entree.toppings.remove(position);
        debug!(index, topping_id, "Removed topping");
    }
    Ok(())
}

/// Sets (replaces) the protein of the entree at `index`.
pub fn set_protein(
    cart: &mut Cart,
    menu: &Menu,
    index: usize,
    protein_id: &str,
) -> CartResult<usize> {
    entree_at(cart, index)?;
    if menu.find_item(MenuCategory::Protein, protein_id).is_none() {
        return Err(CartError::not_found(MenuCategory::Protein, protein_id));
    }

    let entree = entree_at_mut(cart, index)?;
    entree.protein_id = Some(protein_id.to_string());
    debug!(index, protein_id, "Set protein");
    Ok(index)
}

/// Replaces the special configurations of the entree at `index` wholesale.
///
/// Every key must be allowed by the entree's menu item, and every value must
/// be in that key's allowed set unless the set is empty.
pub fn set_special_configurations(
    cart: &mut Cart,
    menu: &Menu,
    index: usize,
    configs: BTreeMap<String, String>,
) -> CartResult<usize> {
    let entree = entree_at(cart, index)?;
    let allowed = menu
        .allowed_configurations(&entree.menu_item_id)
        .ok_or_else(|| {
            CartError::Unsupported(format!(
                "Entree '{}' does not support special configurations",
                entree.menu_item_id
            ))
        })?;

    for (key, value) in &configs {
        let allowed_values = allowed.get(key).ok_or_else(|| {
            CartError::Unsupported(format!(
                "Configuration '{}' is not supported for {}",
                key, entree.menu_item_id
            ))
        })?;
        if !allowed_values.is_empty() && !allowed_values.contains(value) {
            return Err(CartError::InvalidValue {
                key: key.clone(),
                value: value.clone(),
                allowed: allowed_values.clone(),
            });
        }
    }

    let entree = entree_at_mut(cart, index)?;
    debug!(index, ?configs, "Set special configurations");
    entree.special_configurations = configs;
    Ok(index)
}
