// ABOUTME: Meal selector assigning one recipe to each daily slot under rotation rules
// ABOUTME: Implements main-ingredient detection and bounded retry with a random fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Selector
//!
//! Under strict rotation each slot draws uniformly from the eligible recipes
//! until it finds one whose main-ingredient category is still unused today.
//! After `max_attempts` rejected draws the slot takes one unconstrained draw,
//! which does not mark its category as used.

use crate::catalog::Catalog;
use crate::config::RotationConfig;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;
use weaning_core::models::{MealSlot, Product, Recipe};

/// Heaviest ingredient that counts as a main ingredient
///
/// Ingredients with unknown products or a non-main primary category (oil by
/// default) are skipped. The first listed ingredient wins a weight tie.
#[must_use]
pub fn main_ingredient<'c>(
    recipe: &Recipe,
    catalog: &'c Catalog,
    rotation: &RotationConfig,
) -> Option<&'c Product> {
    let mut heaviest: Option<(f64, &'c Product)> = None;
    for ingredient in &recipe.ingredients {
        let Some(product) = catalog.product(&ingredient.product_id) else {
            continue;
        };
        if product
            .primary_category()
            .is_some_and(|category| rotation.is_non_main(category))
        {
            continue;
        }
        let is_heavier = match heaviest {
            Some((grams, _)) => ingredient.grams > grams,
            None => true,
        };
        if is_heavier {
            heaviest = Some((ingredient.grams, product));
        }
    }
    heaviest.map(|(_, product)| product)
}

/// How a slot's recipe was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// Single draw with rotation disabled
    Unconstrained,
    /// Draw accepted under strict rotation
    Rotated,
    /// Rotation exhausted; final unconstrained draw
    Fallback,
}

/// Recipe chosen for one slot
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    /// Slot being filled
    pub slot: MealSlot,
    /// Chosen recipe
    pub recipe: &'a Recipe,
    /// How the recipe was chosen
    pub kind: SelectionKind,
}

/// Picks recipes for the five daily slots
#[derive(Debug, Clone, Copy)]
pub struct MealSelector<'a> {
    catalog: &'a Catalog,
    rotation: &'a RotationConfig,
}

impl<'a> MealSelector<'a> {
    /// Create a selector over `catalog`
    #[must_use]
    pub const fn new(catalog: &'a Catalog, rotation: &'a RotationConfig) -> Self {
        Self { catalog, rotation }
    }

    /// Fill every slot of one day, in serving order
    ///
    /// Returns `None` when `candidates` is empty; otherwise always yields
    /// exactly one selection per slot.
    pub fn select_day<'r, R>(
        &self,
        candidates: &[&'r Recipe],
        strict_rotation: bool,
        rng: &mut R,
    ) -> Option<Vec<Selection<'r>>>
    where
        R: Rng + ?Sized,
    {
        if candidates.is_empty() {
            return None;
        }

        let mut used_categories: HashSet<Option<&str>> = HashSet::new();
        let mut selections = Vec::with_capacity(MealSlot::ALL.len());

        for slot in MealSlot::ALL {
            let selection = if strict_rotation {
                self.select_rotated(slot, candidates, &mut used_categories, rng)?
            } else {
                Selection {
                    slot,
                    recipe: *candidates.choose(rng)?,
                    kind: SelectionKind::Unconstrained,
                }
            };
            debug!(
                slot = ?slot,
                recipe_id = %selection.recipe.id,
                kind = ?selection.kind,
                "Slot filled"
            );
            selections.push(selection);
        }

        Some(selections)
    }

    fn select_rotated<'r, R>(
        &self,
        slot: MealSlot,
        candidates: &[&'r Recipe],
        used_categories: &mut HashSet<Option<&'a str>>,
        rng: &mut R,
    ) -> Option<Selection<'r>>
    where
        R: Rng + ?Sized,
    {
        for _ in 0..self.rotation.max_attempts {
            let recipe: &'r Recipe = *candidates.choose(rng)?;
            let Some(main) = main_ingredient(recipe, self.catalog, self.rotation) else {
                continue;
            };
            if used_categories.insert(main.primary_category()) {
                return Some(Selection {
                    slot,
                    recipe,
                    kind: SelectionKind::Rotated,
                });
            }
        }

        Some(Selection {
            slot,
            recipe: *candidates.choose(rng)?,
            kind: SelectionKind::Fallback,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::MenuEngineConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const CATALOG: &str = r#"{
        "products": [
            {"id": "carrot", "name": "Carrot", "categories": ["vegetable"], "allowed_from_month": 6},
            {"id": "apple", "name": "Apple", "categories": ["fruit"], "allowed_from_month": 6},
            {"id": "oil", "name": "Sunflower oil", "categories": ["oil"], "allowed_from_month": 6}
        ],
        "recipes": [
            {"id": "oily-carrot", "title": "T", "recommended_from_month": 6, "consistency": "puree",
             "ingredients": [{"product_id": "oil", "grams": 200}, {"product_id": "carrot", "grams": 50}]},
            {"id": "tie", "title": "T", "recommended_from_month": 6, "consistency": "puree",
             "ingredients": [{"product_id": "apple", "grams": 50}, {"product_id": "carrot", "grams": 50}]},
            {"id": "dangling", "title": "T", "recommended_from_month": 6, "consistency": "puree",
             "ingredients": [{"product_id": "ghost", "grams": 500}, {"product_id": "apple", "grams": 10}]},
            {"id": "oil-only", "title": "T", "recommended_from_month": 6, "consistency": "puree",
             "ingredients": [{"product_id": "oil", "grams": 5}]}
        ]
    }"#;

    fn fixture() -> (Catalog, MenuEngineConfig) {
        (
            Catalog::from_json_str(CATALOG).unwrap(),
            MenuEngineConfig::default(),
        )
    }

    #[test]
    fn test_main_ingredient_skips_oil() {
        let (catalog, config) = fixture();
        let recipe = catalog.recipe("oily-carrot").unwrap();
        let main = main_ingredient(recipe, &catalog, &config.rotation).unwrap();
        assert_eq!(main.id, "carrot");
    }

    #[test]
    fn test_main_ingredient_tie_keeps_first_listed() {
        let (catalog, config) = fixture();
        let recipe = catalog.recipe("tie").unwrap();
        let main = main_ingredient(recipe, &catalog, &config.rotation).unwrap();
        assert_eq!(main.id, "apple");
    }

    #[test]
    fn test_main_ingredient_ignores_unknown_products() {
        let (catalog, config) = fixture();
        let recipe = catalog.recipe("dangling").unwrap();
        let main = main_ingredient(recipe, &catalog, &config.rotation).unwrap();
        assert_eq!(main.id, "apple");
    }

    #[test]
    fn test_oil_only_recipe_has_no_main_ingredient() {
        let (catalog, config) = fixture();
        let recipe = catalog.recipe("oil-only").unwrap();
        assert!(main_ingredient(recipe, &catalog, &config.rotation).is_none());
    }

    #[test]
    fn test_empty_candidates_yield_none() {
        let (catalog, config) = fixture();
        let selector = MealSelector::new(&catalog, &config.rotation);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(selector.select_day(&[], true, &mut rng).is_none());
    }

    #[test]
    fn test_oil_only_recipe_reached_only_by_fallback() {
        let (catalog, config) = fixture();
        let selector = MealSelector::new(&catalog, &config.rotation);
        let only = [catalog.recipe("oil-only").unwrap()];
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let day = selector.select_day(&only, true, &mut rng).unwrap();
        assert_eq!(day.len(), 5);
        assert!(day.iter().all(|s| s.kind == SelectionKind::Fallback));
    }

    #[test]
    fn test_rotation_exhaustion_repeats_categories() {
        let (catalog, config) = fixture();
        let selector = MealSelector::new(&catalog, &config.rotation);
        let only = [catalog.recipe("oily-carrot").unwrap()];
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let day = selector.select_day(&only, true, &mut rng).unwrap();
        assert_eq!(day[0].kind, SelectionKind::Rotated);
        assert!(day[1..].iter().all(|s| s.kind == SelectionKind::Fallback));
        assert!(day.iter().all(|s| s.recipe.id == "oily-carrot"));
    }
}
