// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides fixture catalogs, child profiles, seeded generators and quiet logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `weaning_menu`
//!
//! Fixture catalogs are built in code so each test states exactly which
//! products and recipes exist.

use chrono::{Months, NaiveDate};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Once;
use weaning_menu::catalog::{Catalog, CatalogDocument};
use weaning_menu::models::{
    CatalogLanguage, ChildProfile, Consistency, Nutrition, Product, Recipe, RecipeIngredient,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed "today" used by every fixture; a Monday
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
}

/// Deterministic generator
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Profile of a child exactly `months` old on [`today`]
pub fn profile_aged(id: &str, months: u32) -> ChildProfile {
    let birth = today().checked_sub_months(Months::new(months)).unwrap();
    ChildProfile::new(id, birth)
}

/// Per-100g nutrition with every field derived from `kcal`
pub fn nutrition(kcal: f64) -> Nutrition {
    Nutrition {
        kcal,
        protein_g: kcal / 20.0,
        iron_mg: kcal / 100.0,
        zinc_mg: kcal / 200.0,
        calcium_mg: kcal / 4.0,
        vitamin_d_ug: kcal / 1000.0,
    }
}

/// Product with one category tag
pub fn product(id: &str, category: &str, allergens: &[&str], min_age_months: u32) -> Product {
    Product {
        id: id.into(),
        name: capitalize(id),
        categories: vec![category.into()],
        allergens: allergens.iter().map(|&a| a.to_owned()).collect(),
        min_age_months,
        nutrition_per_100g: nutrition(50.0),
    }
}

/// Recipe over `(product_id, grams)` pairs
pub fn recipe(
    id: &str,
    min_age_months: u32,
    consistency: Consistency,
    ingredients: &[(&str, f64)],
) -> Recipe {
    Recipe {
        id: id.into(),
        title: capitalize(id),
        min_age_months,
        consistency,
        ingredients: ingredients
            .iter()
            .map(|&(product_id, grams)| RecipeIngredient {
                product_id: product_id.into(),
                grams,
            })
            .collect(),
        steps: vec!["Cook.".into()],
        notes: None,
    }
}

/// Build a catalog from fixture parts
pub fn catalog_of(
    language: CatalogLanguage,
    products: Vec<Product>,
    recipes: Vec<Recipe>,
) -> Catalog {
    Catalog::from_document(CatalogDocument {
        language,
        products,
        recipes,
    })
    .unwrap()
}

/// Six products of six distinct primary categories plus oil, all from 6 months,
/// and one purée per product whose main ingredient is that product
pub fn distinct_category_catalog() -> Catalog {
    let products = vec![
        product("zucchini", "vegetable", &[], 6),
        product("apple", "fruit", &[], 6),
        product("rice", "cereal", &[], 6),
        product("turkey", "meat", &[], 6),
        product("cod", "fish", &["fish"], 6),
        product("kefir", "dairy", &["milk"], 6),
        product("sunflower-oil", "oil", &[], 6),
    ];
    let recipes = vec![
        // Oil outweighs zucchini but never counts as the main ingredient
        recipe(
            "zucchini-puree",
            6,
            Consistency::Puree,
            &[("zucchini", 100.0), ("sunflower-oil", 150.0)],
        ),
        recipe("apple-puree", 6, Consistency::Puree, &[("apple", 100.0)]),
        recipe(
            "rice-porridge",
            6,
            Consistency::Puree,
            &[("rice", 120.0), ("apple", 20.0)],
        ),
        recipe(
            "turkey-puree",
            6,
            Consistency::Puree,
            &[("turkey", 60.0), ("zucchini", 40.0)],
        ),
        recipe(
            "cod-puree",
            6,
            Consistency::Puree,
            &[("cod", 60.0), ("zucchini", 50.0)],
        ),
        recipe("kefir-cup", 6, Consistency::Puree, &[("kefir", 100.0)]),
    ];
    catalog_of(CatalogLanguage::En, products, recipes)
}

/// Catalog in which every recipe needs a milk product
pub fn all_milk_catalog() -> Catalog {
    let products = vec![
        product("kefir", "dairy", &["milk"], 6),
        product("yogurt", "dairy", &["milk"], 6),
        product("apple", "fruit", &[], 6),
    ];
    let recipes = vec![
        recipe(
            "kefir-apple",
            6,
            Consistency::Puree,
            &[("kefir", 100.0), ("apple", 30.0)],
        ),
        recipe("yogurt", 6, Consistency::Puree, &[("yogurt", 100.0)]),
    ];
    catalog_of(CatalogLanguage::En, products, recipes)
}

fn capitalize(id: &str) -> String {
    let words = id.replace('-', " ");
    let mut chars = words.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
