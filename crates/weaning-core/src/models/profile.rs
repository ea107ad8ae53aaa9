// ABOUTME: Child profile model consumed read-only by the menu engine
// ABOUTME: Holds birth date, introduced products, excluded allergens and diet preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Dietary restrictions chosen by the parents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DietaryPreferences {
    /// No meat or fish
    pub vegetarian: bool,
    /// No meat, fish, dairy or eggs
    pub vegan: bool,
}

/// A child the menus are generated for
///
/// Owned by the profile store; field names on the wire follow the store's
/// JSON documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildProfile {
    /// Profile id assigned by the store
    #[serde(default)]
    pub id: String,
    /// Child's name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Products the child has already tried
    #[serde(default)]
    pub introduced_products: Vec<String>,
    /// Allergen tags that must not appear in any menu
    #[serde(default, rename = "excludeAllergens", alias = "excludedAllergens")]
    pub excluded_allergens: Vec<String>,
    /// Diet restrictions
    #[serde(default)]
    pub dietary_preferences: DietaryPreferences,
    /// When the store first saved the profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the store last saved the profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ChildProfile {
    /// Create a profile with only the required fields set
    #[must_use]
    pub fn new(id: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: None,
            date_of_birth,
            weight: None,
            introduced_products: Vec::new(),
            excluded_allergens: Vec::new(),
            dietary_preferences: DietaryPreferences::default(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Age in whole calendar months on `today`, never negative
    ///
    /// Counts month boundaries crossed, ignoring the day of month, so a child
    /// born on the 31st is a month older on the 1st of the next month.
    #[must_use]
    pub fn age_in_months(&self, today: NaiveDate) -> u32 {
        let years = i64::from(today.year()) - i64::from(self.date_of_birth.year());
        let months = i64::from(today.month()) - i64::from(self.date_of_birth.month());
        u32::try_from((years * 12 + months).max(0)).unwrap_or(u32::MAX)
    }

    /// Whether the child has already tried the product
    #[must_use]
    pub fn has_introduced(&self, product_id: &str) -> bool {
        self.introduced_products.iter().any(|id| id == product_id)
    }
}
