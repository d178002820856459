//! Menu Catalog Lookups and Loading
//!
//! Lookups are exact id matches within one category. Synonyms are data only;
//! no fuzzy matching happens here.

use super::models::{Menu, MenuCategory, MenuItem, SpecialConfigurations};
use crate::error::MenuError;
use std::{collections::HashSet, path::Path};

impl Menu {
    /// Returns the ordered collection for a category.
    pub fn items(&self, category: MenuCategory) -> &[MenuItem] {
        match category {
            MenuCategory::Entree => &self.entrees,
            MenuCategory::Protein => &self.proteins,
            MenuCategory::Topping => &self.toppings,
            MenuCategory::Side => &self.sides,
            MenuCategory::Drink => &self.drinks,
        }
    }

    /// Exact id match within `category`. First match wins.
    pub fn find_item(&self, category: MenuCategory, id: &str) -> Option<&MenuItem> {
        self.items(category).iter().find(|item| item.id == id)
    }

    /// Allowed special configurations of an entree, or `None` when the entree
    /// is unknown or defines none.
    pub fn allowed_configurations(&self, entree_id: &str) -> Option<&SpecialConfigurations> {
        self.find_item(MenuCategory::Entree, entree_id)
            .and_then(|item| item.special_configurations.as_ref())
            .filter(|configs| !configs.is_empty())
    }

    /// Human-readable name for display, falling back to the raw id.
    pub fn display_name<'a>(&'a self, category: MenuCategory, id: &'a str) -> &'a str {
        self.find_item(category, id)
            .map(|item| item.name.as_str())
            .unwrap_or(id)
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Parses and validates a JSON menu document.
    pub fn from_json_str(document: &str) -> Result<Self, MenuError> {
        let menu: Menu = serde_json::from_str(document)?;
        menu.validate()?;
        Ok(menu)
    }

    /// Reads, parses and validates a JSON menu document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let document = std::fs::read_to_string(path.as_ref())?;
        let menu = Self::from_json_str(&document)?;
        tracing::info!(
            path = %path.as_ref().display(),
            entrees = menu.entrees.len(),
            proteins = menu.proteins.len(),
            toppings = menu.toppings.len(),
            sides = menu.sides.len(),
            drinks = menu.drinks.len(),
            "Menu loaded"
        );
        Ok(menu)
    }

    /// Checks the structural invariants the cart engine relies on.
    pub fn validate(&self) -> Result<(), MenuError> {
        for category in MenuCategory::ALL {
            let mut seen = HashSet::new();
            for item in self.items(category) {
                if item.category != category {
                    return Err(MenuError::CategoryMismatch {
                        id: item.id.clone(),
                        expected: category.to_string(),
                        found: item.category.to_string(),
                    });
                }
                if item.id.trim().is_empty() {
                    return Err(MenuError::EmptyId {
                        category: category.to_string(),
                    });
                }
                if !seen.insert(item.id.as_str()) {
                    return Err(MenuError::DuplicateId {
                        category: category.to_string(),
                        id: item.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Menu {
        Menu::from_json_str(include_str!("../../config/menu.json")).unwrap()
    }

    #[test]
    fn test_find_item_is_scoped_to_category() {
        let menu = sample_menu();
        assert!(menu.find_item(MenuCategory::Entree, "burrito").is_some());
        assert!(menu.find_item(MenuCategory::Side, "burrito").is_none());
        assert!(menu.find_item(MenuCategory::Protein, "chicken").is_some());
    }

    #[test]
    fn test_same_id_in_two_categories_is_allowed() {
        let menu = sample_menu();
        let topping = menu.find_item(MenuCategory::Topping, "guacamole").unwrap();
        let side = menu.find_item(MenuCategory::Side, "guacamole").unwrap();
        assert_eq!(topping.category, MenuCategory::Topping);
        assert_eq!(side.category, MenuCategory::Side);
    }

    #[test]
    fn test_allowed_configurations() {
        let menu = sample_menu();
        let tacos = menu.allowed_configurations("tacos").unwrap();
        assert!(tacos.contains_key("taco_type"));
        assert!(menu.allowed_configurations("burrito").is_none());
        assert!(menu.allowed_configurations("no_such_entree").is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let menu = sample_menu();
        assert_eq!(menu.display_name(MenuCategory::Entree, "burrito"), "Burrito");
        assert_eq!(menu.display_name(MenuCategory::Drink, "mystery"), "mystery");
    }

    #[test]
    fn test_rejects_item_in_wrong_collection() {
        let err = Menu::from_json_str(
            r#"{ "entrees": [ { "id": "chips", "type": "side", "name": "Chips" } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, MenuError::CategoryMismatch { .. }));
    }

    #[test]
    fn test_rejects_duplicate_ids_within_category() {
        let err = Menu::from_json_str(
            r#"{ "drinks": [
                { "id": "water", "type": "drink", "name": "Water" },
                { "id": "water", "type": "drink", "name": "Still Water" }
            ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, MenuError::DuplicateId { .. }));
    }

    #[test]
    fn test_rejects_empty_id() {
        let err = Menu::from_json_str(
            r#"{ "sides": [ { "id": " ", "type": "side", "name": "Nothing" } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, MenuError::EmptyId { .. }));
    }

    #[test]
    fn test_rejects_malformed_document() {
        let err = Menu::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, MenuError::Parse(_)));
    }
}
