// ABOUTME: Generated menu models and generation request settings
// ABOUTME: Defines MealSlot, GenerationSettings, Meal, DailyMenu and GeneratedMenu
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{CatalogLanguage, Nutrition, Recipe};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::slice;

/// One of the five fixed meal slots of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// First meal of the day
    Breakfast,
    /// Snack between breakfast and lunch
    MorningSnack,
    /// Midday meal
    Lunch,
    /// Snack between lunch and dinner
    AfternoonSnack,
    /// Evening meal
    Dinner,
}

impl MealSlot {
    /// All slots in serving order
    pub const ALL: [Self; 5] = [
        Self::Breakfast,
        Self::MorningSnack,
        Self::Lunch,
        Self::AfternoonSnack,
        Self::Dinner,
    ];

    /// Display label in the catalog language
    #[must_use]
    pub const fn label(&self, language: CatalogLanguage) -> &'static str {
        match (language, self) {
            (CatalogLanguage::En, Self::Breakfast) => "Breakfast",
            (CatalogLanguage::En, Self::MorningSnack) => "Morning snack",
            (CatalogLanguage::En, Self::Lunch) => "Lunch",
            (CatalogLanguage::En, Self::AfternoonSnack) => "Afternoon snack",
            (CatalogLanguage::En, Self::Dinner) => "Dinner",
            (CatalogLanguage::Ru, Self::Breakfast) => "Завтрак",
            (CatalogLanguage::Ru, Self::MorningSnack) => "Перекус (утро)",
            (CatalogLanguage::Ru, Self::Lunch) => "Обед",
            (CatalogLanguage::Ru, Self::AfternoonSnack) => "Перекус (день)",
            (CatalogLanguage::Ru, Self::Dinner) => "Ужин",
        }
    }
}

/// Length of the requested plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuPeriod {
    /// A single day
    #[default]
    Day,
    /// Seven consecutive days
    Week,
}

/// Options for one generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationSettings {
    /// Plan length
    pub period: MenuPeriod,
    /// Requested first day of the plan
    ///
    /// Carried for callers but not used for dating: daily menus are dated
    /// today and weekly plans start today.
    pub start_date: Option<NaiveDate>,
    /// Only use products the child has already tried
    pub avoid_new_products: bool,
    /// Avoid repeating a main-ingredient category within a day
    pub strict_rotation: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            period: MenuPeriod::Day,
            start_date: None,
            avoid_new_products: false,
            strict_rotation: true,
        }
    }
}

impl GenerationSettings {
    /// Settings for a plan of the given length with default options
    #[must_use]
    pub fn for_period(period: MenuPeriod) -> Self {
        Self {
            period,
            ..Self::default()
        }
    }
}

/// A recipe ingredient with its product name resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedIngredient {
    /// Catalog product id
    #[serde(rename = "product_id")]
    pub product_id: String,
    /// Weight in grams
    pub grams: f64,
    /// Product display name, or the unknown-product placeholder
    pub product_name: String,
}

/// A recipe assigned to one meal slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Slot the meal is served in
    pub slot: MealSlot,
    /// Localized slot label
    pub time_label: String,
    /// Selected recipe
    pub recipe: Recipe,
    /// Recipe ingredients with product names
    pub ingredients: Vec<ResolvedIngredient>,
    /// Nutrition of the recipe, rounded to hundredths
    pub nutrition: Nutrition,
    /// Ingredient product ids that could not be resolved
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved_products: Vec<String>,
}

/// Either a full day of meals or the reason the day could not be generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MenuContent {
    /// Five meals and their combined nutrition
    Ready {
        /// Meals in slot order
        meals: Vec<Meal>,
        /// Field-wise sum of the meals' nutrition
        #[serde(rename = "totalNutrition")]
        total_nutrition: Nutrition,
    },
    /// Error marker for a day of a weekly plan
    Failed {
        /// Always empty; kept so every day carries a meal list
        #[serde(default)]
        meals: Vec<Meal>,
        /// Human readable failure reason
        error: String,
    },
}

impl MenuContent {
    /// Error marker with an empty meal list
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            meals: Vec::new(),
            error: error.into(),
        }
    }
}

/// Menu for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMenu {
    /// Calendar date
    pub date: NaiveDate,
    /// Localized weekday name (weekly plans)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_name: Option<String>,
    /// Meals or error marker
    #[serde(flatten)]
    pub content: MenuContent,
}

impl DailyMenu {
    /// Meals of the day; empty for a failed day
    #[must_use]
    pub fn meals(&self) -> &[Meal] {
        match &self.content {
            MenuContent::Ready { meals, .. } | MenuContent::Failed { meals, .. } => meals,
        }
    }

    /// Combined nutrition, if the day was generated
    #[must_use]
    pub const fn total_nutrition(&self) -> Option<&Nutrition> {
        match &self.content {
            MenuContent::Ready {
                total_nutrition, ..
            } => Some(total_nutrition),
            MenuContent::Failed { .. } => None,
        }
    }

    /// Failure reason, if the day could not be generated
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.content {
            MenuContent::Ready { .. } => None,
            MenuContent::Failed { error, .. } => Some(error),
        }
    }

    /// Whether the day carries an error marker
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.content, MenuContent::Failed { .. })
    }
}

/// Result of a generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedMenu {
    /// A single day
    Daily(DailyMenu),
    /// Seven days starting today
    Weekly(Vec<DailyMenu>),
}

impl GeneratedMenu {
    /// All days of the plan in order
    #[must_use]
    pub fn days(&self) -> &[DailyMenu] {
        match self {
            Self::Daily(day) => slice::from_ref(day),
            Self::Weekly(days) => days,
        }
    }
}
