// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for eligibility, rotation and shopping heuristics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list. Values that operators may want to tune are mirrored as defaults
//! in the engine configuration.

/// Product category tags as they appear in catalog data
pub mod categories {
    /// Vegetables
    pub const VEGETABLE: &str = "vegetable";
    /// Fruits
    pub const FRUIT: &str = "fruit";
    /// Cereals and porridges
    pub const CEREAL: &str = "cereal";
    /// Meat and poultry
    pub const MEAT: &str = "meat";
    /// Fish
    pub const FISH: &str = "fish";
    /// Dairy products
    pub const DAIRY: &str = "dairy";
    /// Eggs
    pub const EGG: &str = "egg";
    /// Oils and fats
    pub const OIL: &str = "oil";

    /// Primary categories excluded for vegetarian profiles
    pub const VEGETARIAN_EXCLUDED: [&str; 2] = [MEAT, FISH];
    /// Primary categories excluded for vegan profiles
    pub const VEGAN_EXCLUDED: [&str; 4] = [MEAT, FISH, DAIRY, EGG];
}

/// Age thresholds in whole months
pub mod age {
    /// Complementary feeding starts at this age (caller-level gate)
    pub const COMPLEMENTARY_FEEDING_START_MONTHS: u32 = 6;
    /// Last age (inclusive) served purées only
    pub const PUREE_MAX_MONTHS: u32 = 7;
    /// Last age (inclusive) served soft chunks at most
    pub const SOFT_CHUNKS_MAX_MONTHS: u32 = 9;
    /// Upper bound of the "10-12" statistics bucket
    pub const INFANT_MAX_MONTHS: u32 = 12;
}

/// Menu assembly limits
pub mod menu {
    /// Number of days in a weekly plan
    pub const DAYS_PER_WEEK: u32 = 7;
    /// Random draws per slot before the rotation constraint is dropped
    pub const DEFAULT_ROTATION_ATTEMPTS: u32 = 50;
    /// Categories never considered a recipe's main ingredient
    pub const DEFAULT_NON_MAIN_CATEGORIES: [&str; 1] = [super::categories::OIL];
}

/// Nutrition arithmetic
pub mod nutrition {
    /// Catalog values are expressed per this many grams
    pub const REFERENCE_GRAMS: f64 = 100.0;
    /// Per-recipe totals are rounded to this many decimal places
    pub const ROUNDING_DECIMALS: i32 = 2;
}

/// Shopping list "approximate amount" heuristics
pub mod shopping {
    /// Porridge/grain totals above this get a full package
    pub const PACKAGE_THRESHOLD_G: f64 = 100.0;
    /// Meat totals round up to this step
    pub const MEAT_STEP_G: f64 = 50.0;
    /// Fish totals round up to this step
    pub const FISH_STEP_G: f64 = 25.0;
    /// Approximate weight of one piece of fruit
    pub const FRUIT_PIECE_G: f64 = 150.0;
    /// Root vegetable totals above this need a medium piece
    pub const ROOT_VEGETABLE_MEDIUM_THRESHOLD_G: f64 = 200.0;
    /// Everything else rounds up to this step
    pub const DEFAULT_STEP_G: f64 = 10.0;
}
