// ABOUTME: Nutrition aggregation for recipes and whole days of meals
// ABOUTME: Scales per-100g product values by ingredient grams and reports unresolved products
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Aggregator
//!
//! Recipe totals are rounded to hundredths; day totals are raw sums of the
//! already rounded meal totals.

use crate::catalog::Catalog;
use tracing::warn;
use weaning_core::models::{Meal, Nutrition, Recipe, ResolvedIngredient};

/// Nutrition of one recipe plus the ingredient ids that were skipped
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeNutrition {
    /// Field-wise totals rounded to two decimals
    pub totals: Nutrition,
    /// Product ids missing from the catalog, in ingredient order
    pub unresolved_products: Vec<String>,
}

impl RecipeNutrition {
    /// Whether every ingredient resolved
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved_products.is_empty()
    }
}

/// Compute a recipe's nutrition from the catalog's per-100g values
///
/// Unknown products contribute nothing and are listed in
/// [`RecipeNutrition::unresolved_products`].
#[must_use]
pub fn recipe_nutrition(recipe: &Recipe, catalog: &Catalog) -> RecipeNutrition {
    let mut totals = Nutrition::zero();
    let mut unresolved_products = Vec::new();

    for ingredient in &recipe.ingredients {
        match catalog.product(&ingredient.product_id) {
            Some(product) => totals += product.nutrition_per_100g.for_grams(ingredient.grams),
            None => unresolved_products.push(ingredient.product_id.clone()),
        }
    }

    if !unresolved_products.is_empty() {
        warn!(
            recipe_id = %recipe.id,
            unresolved = ?unresolved_products,
            "Recipe references products missing from the catalog"
        );
    }

    RecipeNutrition {
        totals: totals.rounded(),
        unresolved_products,
    }
}

/// Field-wise sum of meal nutrition, without rounding
#[must_use]
pub fn daily_total<'m>(meals: impl IntoIterator<Item = &'m Meal>) -> Nutrition {
    meals.into_iter().map(|meal| meal.nutrition).sum()
}

/// Attach product names to a recipe's ingredients
#[must_use]
pub fn resolve_ingredients(recipe: &Recipe, catalog: &Catalog) -> Vec<ResolvedIngredient> {
    recipe
        .ingredients
        .iter()
        .map(|ingredient| ResolvedIngredient {
            product_id: ingredient.product_id.clone(),
            grams: ingredient.grams,
            product_name: catalog.product_name(&ingredient.product_id).to_owned(),
        })
        .collect()
}
