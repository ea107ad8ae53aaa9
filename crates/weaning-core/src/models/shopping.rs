// ABOUTME: Shopping list models produced from generated menus
// ABOUTME: Defines the fixed ShoppingBucket table, ShoppingItem and ShoppingCategory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CatalogLanguage;
use crate::constants::categories;
use serde::{Deserialize, Serialize};

/// Fixed shopping list sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShoppingBucket {
    /// Vegetables
    Vegetables,
    /// Fruits
    Fruits,
    /// Cereals and porridges
    Cereals,
    /// Meat and poultry
    Meat,
    /// Fish
    Fish,
    /// Dairy products and eggs
    Dairy,
    /// Oils
    Oils,
    /// Anything not covered above
    Other,
}

impl ShoppingBucket {
    /// All buckets in display order
    pub const ALL: [Self; 8] = [
        Self::Vegetables,
        Self::Fruits,
        Self::Cereals,
        Self::Meat,
        Self::Fish,
        Self::Dairy,
        Self::Oils,
        Self::Other,
    ];

    /// Bucket for a product's primary category
    #[must_use]
    pub fn for_primary_category(category: Option<&str>) -> Self {
        match category {
            Some(categories::VEGETABLE) => Self::Vegetables,
            Some(categories::FRUIT) => Self::Fruits,
            Some(categories::CEREAL) => Self::Cereals,
            Some(categories::MEAT) => Self::Meat,
            Some(categories::FISH) => Self::Fish,
            Some(categories::DAIRY | categories::EGG) => Self::Dairy,
            Some(categories::OIL) => Self::Oils,
            _ => Self::Other,
        }
    }

    /// Section heading in the catalog language
    #[must_use]
    pub const fn display_name(&self, language: CatalogLanguage) -> &'static str {
        match (language, self) {
            (CatalogLanguage::En, Self::Vegetables) => "Vegetables",
            (CatalogLanguage::En, Self::Fruits) => "Fruits",
            (CatalogLanguage::En, Self::Cereals) => "Cereals & Porridge",
            (CatalogLanguage::En, Self::Meat) => "Meat & Poultry",
            (CatalogLanguage::En, Self::Fish) => "Fish",
            (CatalogLanguage::En, Self::Dairy) => "Dairy",
            (CatalogLanguage::En, Self::Oils) => "Oils",
            (CatalogLanguage::En, Self::Other) => "Other",
            (CatalogLanguage::Ru, Self::Vegetables) => "Овощи",
            (CatalogLanguage::Ru, Self::Fruits) => "Фрукты",
            (CatalogLanguage::Ru, Self::Cereals) => "Крупы и каши",
            (CatalogLanguage::Ru, Self::Meat) => "Мясо и птица",
            (CatalogLanguage::Ru, Self::Fish) => "Рыба",
            (CatalogLanguage::Ru, Self::Dairy) => "Молочные продукты",
            (CatalogLanguage::Ru, Self::Oils) => "Масла",
            (CatalogLanguage::Ru, Self::Other) => "Прочее",
        }
    }
}

/// One product to buy
///
/// Serializes as `{name, grams, approximateAmount}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    /// Catalog product id
    #[serde(skip)]
    pub product_id: String,
    /// Product display name
    pub name: String,
    /// Total weight, rounded up to whole grams
    pub grams: u64,
    /// Human friendly purchase quantity
    pub approximate_amount: String,
}

/// A non-empty section of the shopping list
///
/// Serializes as `{name, items}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingCategory {
    /// Section
    #[serde(skip)]
    pub bucket: ShoppingBucket,
    /// Localized section heading
    pub name: String,
    /// Items sorted by name
    pub items: Vec<ShoppingItem>,
}

/// Consolidated shopping list: non-empty categories in bucket order
pub type ShoppingList = Vec<ShoppingCategory>;
