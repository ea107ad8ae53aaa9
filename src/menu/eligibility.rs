// ABOUTME: Eligibility filter deriving the products and recipes usable for a child
// ABOUTME: Applies age, allergen, dietary, introduced-product and consistency rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Eligibility Filter
//!
//! A product is eligible when the child is old enough for it, it carries none
//! of the excluded allergens and its primary category is allowed by the diet.
//! A recipe is eligible when the child is old enough for it, its texture is no
//! firmer than the age allows and every ingredient is an eligible product.
//! Recipes are never partially substituted.

use crate::catalog::Catalog;
use std::collections::HashSet;
use tracing::debug;
use weaning_core::constants::categories::{VEGAN_EXCLUDED, VEGETARIAN_EXCLUDED};
use weaning_core::models::{ChildProfile, Consistency, Product, Recipe};

/// Whether a single product may be offered to the child
#[must_use]
pub fn is_product_eligible(product: &Product, profile: &ChildProfile, age_months: u32) -> bool {
    if product.min_age_months > age_months {
        return false;
    }
    if product.has_any_allergen(&profile.excluded_allergens) {
        return false;
    }

    let preferences = profile.dietary_preferences;
    if preferences.vegetarian && primary_category_in(product, &VEGETARIAN_EXCLUDED) {
        return false;
    }
    if preferences.vegan && primary_category_in(product, &VEGAN_EXCLUDED) {
        return false;
    }
    true
}

fn primary_category_in(product: &Product, excluded: &[&str]) -> bool {
    product
        .primary_category()
        .is_some_and(|primary| excluded.iter().any(|&category| category == primary))
}

/// Whether a recipe suits the age and uses only available products
pub fn is_recipe_eligible(
    recipe: &Recipe,
    age_months: u32,
    is_product_available: impl FnMut(&str) -> bool,
) -> bool {
    recipe.min_age_months <= age_months
        && recipe.consistency <= Consistency::max_for_age(age_months)
        && recipe.uses_only(is_product_available)
}

/// Products and recipes usable for one generation call
#[derive(Debug, Clone)]
pub struct EligibleSet<'a> {
    age_months: u32,
    products: Vec<&'a Product>,
    product_ids: HashSet<&'a str>,
    recipes: Vec<&'a Recipe>,
}

impl<'a> EligibleSet<'a> {
    /// Filter the catalog for a child of `age_months`
    ///
    /// With `avoid_new_products` the product set is first narrowed to products
    /// the child has already tried. An empty recipe list is a valid result.
    #[must_use]
    pub fn compute(
        catalog: &'a Catalog,
        profile: &ChildProfile,
        age_months: u32,
        avoid_new_products: bool,
    ) -> Self {
        let products: Vec<&'a Product> = catalog
            .products()
            .iter()
            .filter(|product| is_product_eligible(product, profile, age_months))
            .filter(|product| !avoid_new_products || profile.has_introduced(&product.id))
            .collect();

        let product_ids: HashSet<&'a str> =
            products.iter().map(|product| product.id.as_str()).collect();

        let recipes: Vec<&'a Recipe> = catalog
            .recipes()
            .iter()
            .filter(|recipe| {
                is_recipe_eligible(recipe, age_months, |id| product_ids.contains(id))
            })
            .collect();

        debug!(
            profile_id = %profile.id,
            age_months,
            avoid_new_products,
            products = products.len(),
            recipes = recipes.len(),
            "Eligibility computed"
        );

        Self {
            age_months,
            products,
            product_ids,
            recipes,
        }
    }

    /// Age the set was computed for
    #[must_use]
    pub const fn age_months(&self) -> u32 {
        self.age_months
    }

    /// Eligible products in catalog order
    #[must_use]
    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    /// Eligible recipes in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[&'a Recipe] {
        &self.recipes
    }

    /// Whether a product id is in the eligible set
    #[must_use]
    pub fn contains_product(&self, id: &str) -> bool {
        self.product_ids.contains(id)
    }

    /// Whether no recipe survived filtering
    #[must_use]
    pub fn has_no_recipes(&self) -> bool {
        self.recipes.is_empty()
    }
}
