//! Cart Helpers
//!
//! Cart id generation and the text projection of a cart used by the tool
//! layer and the logs.

use super::models::{Cart, CartItem};
use crate::menu::{Menu, MenuCategory};
use uuid::Uuid;

/// Returns the provided `cart_id` or creates a new UUID string when `None`.
pub fn get_or_create_cart_id(cart_id: Option<String>) -> String {
    cart_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Produces a one-line summary of the cart.
///
/// Example output: `"Burrito, Chips, Small Fountain Drink"`.
pub fn format_item_summary(cart: &Cart, menu: &Menu) -> String {
    cart.items
        .iter()
        .map(|item| menu.display_name(item.category(), item.menu_item_id()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the cart as indexed lines, with entree customizations indented
/// below their entree.
///
/// ```text
/// Cart ID: 1f0c...
///   [0] Entree: Burrito
///       Protein: Chicken
///       Toppings: Cilantro-Lime White Rice, Black Beans
///   [1] Side: Chips
/// ```
pub fn format_cart_summary(cart: &Cart, menu: &Menu) -> String {
    if cart.is_empty() {
        return "Your cart is empty.".to_string();
    }

    let mut lines = vec![format!("Cart ID: {}", cart.cart_id())];
    for (index, item) in cart.items.iter().enumerate() {
        let name = menu.display_name(item.category(), item.menu_item_id());
        match item {
            CartItem::Entree(entree) => {
                lines.push(format!("  [{}] Entree: {}", index, name));
                if let Some(protein_id) = &entree.protein_id {
                    lines.push(format!(
                        "      Protein: {}",
                        menu.display_name(MenuCategory::Protein, protein_id)
                    ));
                }
                if !entree.toppings.is_empty() {
                    let toppings = entree
                        .toppings
                        .iter()
                        .map(|t| menu.display_name(MenuCategory::Topping, t))
                        .collect::<Vec<_>>()
                        .join(", ");
                    lines.push(format!("      Toppings: {}", toppings));
                }
                if !entree.special_configurations.is_empty() {
                    let configs = entree
                        .special_configurations
                        .iter()
                        .map(|(k, v)| format!("{}={}", k, v))
                        .collect::<Vec<_>>()
                        .join(", ");
                    lines.push(format!("      Configurations: {}", configs));
                }
            }
            CartItem::Side(_) => lines.push(format!("  [{}] Side: {}", index, name)),
            CartItem::Drink(_) => lines.push(format!("  [{}] Drink: {}", index, name)),
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::operations::{add_item, add_topping, set_protein};

    fn sample_menu() -> Menu {
        Menu::from_json_str(include_str!("../../config/menu.json")).unwrap()
    }

    #[test]
    fn test_cart_id_is_generated_when_missing() {
        assert_eq!(get_or_create_cart_id(Some("abc".into())), "abc");
        let generated = get_or_create_cart_id(None);
        assert_eq!(generated.len(), 32);
        assert_ne!(get_or_create_cart_id(Some("  ".into())), "  ");
    }

    #[test]
    fn test_empty_cart_summary() {
        let menu = sample_menu();
        assert_eq!(format_cart_summary(&Cart::new("c"), &menu), "Your cart is empty.");
        assert_eq!(format_item_summary(&Cart::new("c"), &menu), "");
    }

    #[test]
    fn test_cart_summary_resolves_names() {
        let menu = sample_menu();
        let mut cart = Cart::new("c-1");
        add_item(&mut cart, &menu, MenuCategory::Entree, "burrito").unwrap();
        set_protein(&mut cart, &menu, 0, "chicken").unwrap();
        add_topping(&mut cart, &menu, 0, "black_beans").unwrap();
        add_item(&mut cart, &menu, MenuCategory::Drink, "bottled_water").unwrap();

        let summary = format_cart_summary(&cart, &menu);
        assert_eq!(
            summary,
            "Cart ID: c-1\n  [0] Entree: Burrito\n      Protein: Chicken\n      Toppings: Black Beans\n  [1] Drink: Bottled Water"
        );
        assert_eq!(format_item_summary(&cart, &menu), "Burrito, Bottled Water");
    }
}
