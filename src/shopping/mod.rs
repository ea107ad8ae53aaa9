// ABOUTME: Shopping list builder consolidating ingredient weights across generated menus
// ABOUTME: Groups products into fixed buckets with sorted items and approximate amounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Shopping List Builder
//!
//! Sums every ingredient of every meal by product id, skipping days that
//! carry an error marker. Items land in one of the fixed
//! [`ShoppingBucket`]s by the product's primary category; products missing
//! from the catalog go to `Other`. The builder is deterministic: the same
//! menu always yields the same list.

mod approximate;

pub use approximate::approximate_amount;

use crate::catalog::Catalog;
use crate::config::ShoppingConfig;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;
use weaning_core::models::{
    DailyMenu, GeneratedMenu, ShoppingBucket, ShoppingCategory, ShoppingItem, ShoppingList,
};

/// Running total for one product
struct Tally {
    product_id: String,
    name: String,
    grams: f64,
}

/// Builds shopping lists against a catalog
#[derive(Debug, Clone, Copy)]
pub struct ShoppingListBuilder<'a> {
    catalog: &'a Catalog,
    config: &'a ShoppingConfig,
}

impl<'a> ShoppingListBuilder<'a> {
    /// Create a builder using `catalog` for categorization and language
    #[must_use]
    pub const fn new(catalog: &'a Catalog, config: &'a ShoppingConfig) -> Self {
        Self { catalog, config }
    }

    /// Shopping list for any generated plan
    #[must_use]
    pub fn build_for(&self, menu: &GeneratedMenu) -> ShoppingList {
        self.build(menu.days())
    }

    /// Shopping list for an ordered list of days
    #[must_use]
    pub fn build(&self, days: &[DailyMenu]) -> ShoppingList {
        let tallies = Self::consolidate(days);
        let language = self.catalog.language();

        let mut buckets: BTreeMap<ShoppingBucket, Vec<ShoppingItem>> = BTreeMap::new();
        for tally in tallies {
            let bucket = ShoppingBucket::for_primary_category(
                self.catalog
                    .product(&tally.product_id)
                    .and_then(|product| product.primary_category()),
            );
            let approximate_amount =
                approximate_amount(&tally.name, tally.grams, language, self.config);
            buckets.entry(bucket).or_default().push(ShoppingItem {
                product_id: tally.product_id,
                name: tally.name,
                grams: tally.grams.ceil() as u64,
                approximate_amount,
            });
        }

        // Buckets only exist once an item lands in them, so none are empty
        let list: ShoppingList = buckets
            .into_iter()
            .map(|(bucket, mut items)| {
                items.sort_by_cached_key(|item| item.name.to_lowercase());
                ShoppingCategory {
                    bucket,
                    name: bucket.display_name(language).to_owned(),
                    items,
                }
            })
            .collect();

        debug!(
            days = days.len(),
            categories = list.len(),
            items = list.iter().map(|c| c.items.len()).sum::<usize>(),
            "Built shopping list"
        );
        list
    }

    /// Sum grams per product id in first-seen order
    fn consolidate(days: &[DailyMenu]) -> Vec<Tally> {
        let mut tallies: Vec<Tally> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        let ingredients = days
            .iter()
            .flat_map(DailyMenu::meals)
            .flat_map(|meal| &meal.ingredients);

        for ingredient in ingredients {
            if let Some(&position) = positions.get(ingredient.product_id.as_str()) {
                tallies[position].grams += ingredient.grams;
            } else {
                positions.insert(ingredient.product_id.as_str(), tallies.len());
                tallies.push(Tally {
                    product_id: ingredient.product_id.clone(),
                    name: ingredient.product_name.clone(),
                    grams: ingredient.grams,
                });
            }
        }
        tallies
    }
}

/// Build a shopping list for `days` in one call
#[must_use]
pub fn build_shopping_list(
    days: &[DailyMenu],
    catalog: &Catalog,
    config: &ShoppingConfig,
) -> ShoppingList {
    ShoppingListBuilder::new(catalog, config).build(days)
}
