//! Menu Catalog Module
//!
//! The read-only catalog every cart operation validates against:
//! - Catalog models (MenuCategory, MenuItem, Menu)
//! - Lookups and document loading

pub mod catalog;
pub mod models;

pub use models::{Menu, MenuCategory, MenuItem, SpecialConfigurations};
