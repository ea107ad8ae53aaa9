// ABOUTME: Core data models for the weaning menu engine
// ABOUTME: Re-exports catalog, nutrition, profile, menu and shopping list structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! This module contains the data structures shared by the menu engine and its
//! collaborators.
//!
//! ## Design Principles
//!
//! - **Immutable reference data**: catalog entries are read-only once loaded
//! - **Read-only inputs**: profiles are owned by an external store
//! - **Serializable**: every model round-trips through the JSON shapes used by
//!   the profile store, the catalog files and the export collaborators
//! - **Type Safe**: mutually exclusive states (a day's meals vs. its error
//!   marker) are enums, not parallel optional fields
//!
//! ## Core Models
//!
//! - `Product` / `Recipe`: catalog reference data
//! - `Nutrition`: per-100g values and aggregated totals
//! - `ChildProfile`: the child a menu is generated for
//! - `Meal` / `DailyMenu`: generated menus
//! - `ShoppingCategory`: consolidated shopping list sections

mod catalog;
mod menu;
mod nutrition;
mod profile;
mod shopping;

pub use catalog::{CatalogLanguage, Consistency, Product, Recipe, RecipeIngredient};
pub use menu::{
    DailyMenu, GeneratedMenu, GenerationSettings, Meal, MealSlot, MenuContent, MenuPeriod,
    ResolvedIngredient,
};
pub use nutrition::{round_to_hundredths, Nutrition};
pub use profile::{ChildProfile, DietaryPreferences};
pub use shopping::{ShoppingBucket, ShoppingCategory, ShoppingItem, ShoppingList};
