// ABOUTME: Catalog reference data models for weaning products and recipes
// ABOUTME: Defines Product, Recipe, RecipeIngredient, Consistency and CatalogLanguage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Nutrition;
use crate::constants::age::{PUREE_MAX_MONTHS, SOFT_CHUNKS_MAX_MONTHS};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Language the catalog's product names are written in
///
/// Drives every piece of localized output: weekday names, meal slot labels,
/// shopping bucket names and the keyword table used for approximate amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogLanguage {
    /// English product names
    #[default]
    En,
    /// Russian product names
    Ru,
}

impl CatalogLanguage {
    /// Placeholder name for an ingredient whose product is not in the catalog
    #[must_use]
    pub const fn unknown_product_name(&self) -> &'static str {
        match self {
            Self::En => "Unknown product",
            Self::Ru => "Неизвестный продукт",
        }
    }

    /// Full weekday name
    #[must_use]
    pub const fn weekday_name(&self, weekday: Weekday) -> &'static str {
        match (self, weekday) {
            (Self::En, Weekday::Mon) => "Monday",
            (Self::En, Weekday::Tue) => "Tuesday",
            (Self::En, Weekday::Wed) => "Wednesday",
            (Self::En, Weekday::Thu) => "Thursday",
            (Self::En, Weekday::Fri) => "Friday",
            (Self::En, Weekday::Sat) => "Saturday",
            (Self::En, Weekday::Sun) => "Sunday",
            (Self::Ru, Weekday::Mon) => "понедельник",
            (Self::Ru, Weekday::Tue) => "вторник",
            (Self::Ru, Weekday::Wed) => "среда",
            (Self::Ru, Weekday::Thu) => "четверг",
            (Self::Ru, Weekday::Fri) => "пятница",
            (Self::Ru, Weekday::Sat) => "суббота",
            (Self::Ru, Weekday::Sun) => "воскресенье",
        }
    }
}

/// Texture of a recipe, ordered from softest to firmest
///
/// The derived `Ord` follows declaration order, so `Puree < SoftChunks < FingerFood`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Consistency {
    /// Smooth purée
    Puree,
    /// Mashed food with soft lumps
    SoftChunks,
    /// Pieces the child can hold and chew
    FingerFood,
}

impl Consistency {
    /// Firmest texture recommended for a child of `age_months`
    ///
    /// Recipes of any softer consistency remain suitable.
    #[must_use]
    pub const fn max_for_age(age_months: u32) -> Self {
        if age_months <= PUREE_MAX_MONTHS {
            Self::Puree
        } else if age_months <= SOFT_CHUNKS_MAX_MONTHS {
            Self::SoftChunks
        } else {
            Self::FingerFood
        }
    }
}

/// A food product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product key
    pub id: String,
    /// Display name, in the catalog language
    pub name: String,
    /// Category tags; the first one is the primary category
    #[serde(default)]
    pub categories: Vec<String>,
    /// Allergen tags
    #[serde(default)]
    pub allergens: Vec<String>,
    /// Youngest age (months) the product may be offered at
    #[serde(rename = "allowed_from_month")]
    pub min_age_months: u32,
    /// Nutrient values per 100g
    #[serde(rename = "nutrition_per_100g", default)]
    pub nutrition_per_100g: Nutrition,
}

impl Product {
    /// First category tag, used for dietary filtering, rotation and grouping
    #[must_use]
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    /// Whether the product carries any of the given allergen tags
    #[must_use]
    pub fn has_any_allergen<S: AsRef<str>>(&self, excluded: &[S]) -> bool {
        self.allergens
            .iter()
            .any(|allergen| excluded.iter().any(|e| e.as_ref() == allergen))
    }
}

/// Quantity of one product used by a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Catalog product id
    pub product_id: String,
    /// Weight in grams
    pub grams: f64,
}

/// A recipe in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe key
    pub id: String,
    /// Display title
    pub title: String,
    /// Youngest age (months) the recipe is recommended for
    #[serde(rename = "recommended_from_month")]
    pub min_age_months: u32,
    /// Texture of the prepared dish
    pub consistency: Consistency,
    /// Ingredients in recipe order
    pub ingredients: Vec<RecipeIngredient>,
    /// Preparation steps
    #[serde(default)]
    pub steps: Vec<String>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Recipe {
    /// Whether every ingredient satisfies `is_available`
    pub fn uses_only(&self, mut is_available: impl FnMut(&str) -> bool) -> bool {
        self.ingredients
            .iter()
            .all(|ingredient| is_available(&ingredient.product_id))
    }
}
