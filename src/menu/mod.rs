// ABOUTME: Menu generation engine combining eligibility, selection and nutrition
// ABOUTME: Re-exports the generator, selector and aggregation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Menu generation engine
//!
//! Data flows from the catalog through [`EligibleSet`] into the
//! [`MealSelector`], then through the nutrition aggregator into a
//! [`weaning_core::models::DailyMenu`]. [`MenuGenerator`] drives the whole
//! pipeline for one day or seven.

/// Menu assembly for days and weeks
pub mod assembler;
/// Product and recipe eligibility filtering
pub mod eligibility;
/// Recipe and day nutrition totals
pub mod nutrition;
/// Slot-by-slot recipe selection
pub mod selector;

pub use assembler::{failed_day_message, MenuGenerator};
pub use eligibility::{is_product_eligible, is_recipe_eligible, EligibleSet};
pub use nutrition::{daily_total, recipe_nutrition, resolve_ingredients, RecipeNutrition};
pub use selector::{main_ingredient, MealSelector, Selection, SelectionKind};
