//! Property tests for positional addressing
//!
//! Cart entries are addressed by position. Removing index `i` moves every
//! later entry down by exactly one; earlier entries keep their position.

use order_cart_rust::cart::operations::{add_item, add_topping, remove_item, remove_topping};
use order_cart_rust::cart::Cart;
use order_cart_rust::menu::{Menu, MenuCategory};
use order_cart_rust::ErrorKind;
use proptest::prelude::*;

fn sample_menu() -> Menu {
    Menu::from_json_str(include_str!("../config/menu.json")).unwrap()
}

/// Orderable (category, id) pairs from the sample menu.
fn orderable(menu: &Menu) -> Vec<(MenuCategory, String)> {
    MenuCategory::ALL
        .into_iter()
        .filter(|c| c.is_orderable())
        .flat_map(|c| menu.items(c).iter().map(move |item| (c, item.id.clone())))
        .collect()
}

fn build_cart(menu: &Menu, picks: &[usize]) -> Cart {
    let choices = orderable(menu);
    let mut cart = Cart::new("prop-cart");
    for pick in picks {
        let (category, id) = &choices[pick % choices.len()];
        add_item(&mut cart, menu, *category, id).unwrap();
    }
    cart
}

proptest! {
    #[test]
    fn removal_shifts_later_entries_down_by_one(
        picks in prop::collection::vec(0usize..64, 1..12),
        remove_at in 0usize..12,
    ) {
        let menu = sample_menu();
        let mut cart = build_cart(&menu, &picks);
        let before = cart.items.clone();
        let index = remove_at % before.len();

        let removed = remove_item(&mut cart, index).unwrap();

        prop_assert_eq!(&removed, &before[index]);
        prop_assert_eq!(cart.len(), before.len() - 1);
        prop_assert_eq!(&cart.items[..index], &before[..index]);
        prop_assert_eq!(&cart.items[index..], &before[index + 1..]);
    }

    #[test]
    fn out_of_range_index_never_mutates(
        picks in prop::collection::vec(0usize..64, 0..8),
        past_end in 0usize..16,
    ) {
        let menu = sample_menu();
        let mut cart = build_cart(&menu, &picks);
        let before = cart.clone();
        let index = cart.len() + past_end;

        prop_assert_eq!(remove_item(&mut cart, index).unwrap_err().kind(), ErrorKind::IndexError);
        prop_assert_eq!(
            add_topping(&mut cart, &menu, index, "cheese").unwrap_err().kind(),
            ErrorKind::IndexError
        );
        prop_assert_eq!(&cart, &before);
    }

    #[test]
    fn topping_changes_are_idempotent(
        toppings in prop::collection::vec(0usize..11, 1..20),
    ) {
        let menu = sample_menu();
        let mut once = Cart::new("once");
        let mut twice = Cart::new("twice");
        add_item(&mut once, &menu, MenuCategory::Entree, "burrito").unwrap();
        add_item(&mut twice, &menu, MenuCategory::Entree, "burrito").unwrap();

        for pick in &toppings {
            let topping = &menu.toppings[*pick].id;
            add_topping(&mut once, &menu, 0, topping).unwrap();
            add_topping(&mut twice, &menu, 0, topping).unwrap();
            add_topping(&mut twice, &menu, 0, topping).unwrap();
        }
        prop_assert_eq!(&once.items, &twice.items);

        let first = menu.toppings[toppings[0]].id.clone();
        remove_topping(&mut once, 0, &first).unwrap();
        let after_first_removal = once.clone();
        remove_topping(&mut once, 0, &first).unwrap();
        prop_assert_eq!(&once, &after_first_removal);
    }
}
