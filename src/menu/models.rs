//! Menu Catalog Models
//!
//! Data structures describing the orderable catalog. Proteins and toppings
//! only customize entrees; they are never cart entries on their own.

use crate::error::CartError;
use serde::{Deserialize, Deserializer, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// Allowed special configurations of an entree: key -> allowed values.
/// An empty value list accepts any value for that key.
pub type SpecialConfigurations = BTreeMap<String, Vec<String>>;

// =============================================================================
// Categories
// =============================================================================

/// The five disjoint catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Entree,
    Protein,
    Topping,
    Side,
    Drink,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 5] = [
        MenuCategory::Entree,
        MenuCategory::Protein,
        MenuCategory::Topping,
        MenuCategory::Side,
        MenuCategory::Drink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Entree => "entree",
            MenuCategory::Protein => "protein",
            MenuCategory::Topping => "topping",
            MenuCategory::Side => "side",
            MenuCategory::Drink => "drink",
        }
    }

    /// Whether items of this category can be cart entries.
    pub fn is_orderable(&self) -> bool {
        matches!(
            self,
            MenuCategory::Entree | MenuCategory::Side | MenuCategory::Drink
        )
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuCategory {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "entree" => Ok(MenuCategory::Entree),
            "protein" => Ok(MenuCategory::Protein),
            "topping" => Ok(MenuCategory::Topping),
            "side" => Ok(MenuCategory::Side),
            "drink" => Ok(MenuCategory::Drink),
            _ => Err(CartError::InvalidArgument(format!(
                "Invalid item_type: '{}'. Must be 'entree', 'side', or 'drink'.",
                s
            ))),
        }
    }
}

// =============================================================================
// Items
// =============================================================================

/// One catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Unique within its category
    pub id: String,

    /// Category this item belongs to
    #[serde(rename = "type")]
    pub category: MenuCategory,

    pub name: String,

    /// Base price (typically for entrees)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,

    /// Surcharge when used as a customization (premium proteins, guacamole)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_add: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Alternate names, kept for natural-language matching upstream
    #[serde(default, deserialize_with = "null_as_empty")]
    pub synonyms: Vec<String>,

    /// Only meaningful for entrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_configurations: Option<SpecialConfigurations>,
}

impl MenuItem {
    pub fn new(category: MenuCategory, id: impl Into<String>, name: impl Into<String>) -> Self {
        MenuItem {
            id: id.into(),
            category,
            name: name.into(),
            base_price: None,
            price_add: None,
            price: None,
            description: None,
            synonyms: Vec::new(),
            special_configurations: None,
        }
    }

    pub fn with_special_configurations(mut self, configs: SpecialConfigurations) -> Self {
        self.special_configurations = Some(configs);
        self
    }
}

// =============================================================================
// Menu
// =============================================================================

/// The full catalog, one ordered collection per category.
///
/// Loaded once and shared read-only (behind an `Arc`) for the lifetime of the
/// service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Menu {
    #[serde(default)]
    pub entrees: Vec<MenuItem>,
    #[serde(default)]
    pub proteins: Vec<MenuItem>,
    #[serde(default)]
    pub toppings: Vec<MenuItem>,
    #[serde(default)]
    pub sides: Vec<MenuItem>,
    #[serde(default)]
    pub drinks: Vec<MenuItem>,
}

/// Treats an explicit `null` the same as an absent list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
