// ABOUTME: Nutrition value record shared by catalog products, recipes and daily totals
// ABOUTME: Provides scaling, field-wise summation and hundredths rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::nutrition::{REFERENCE_GRAMS, ROUNDING_DECIMALS};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Nutrient amounts tracked for infant menus
///
/// Used both for catalog values (per 100g of product) and for aggregated
/// totals of a recipe or a day. Serialized field names follow the catalog
/// data files.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Nutrition {
    /// Energy in kilocalories
    pub kcal: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Iron in milligrams
    pub iron_mg: f64,
    /// Zinc in milligrams
    pub zinc_mg: f64,
    /// Calcium in milligrams
    pub calcium_mg: f64,
    /// Vitamin D in micrograms
    #[serde(rename = "vitaminD_µg", alias = "vitamin_d_ug")]
    pub vitamin_d_ug: f64,
}

impl Nutrition {
    /// All-zero record
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            kcal: 0.0,
            protein_g: 0.0,
            iron_mg: 0.0,
            zinc_mg: 0.0,
            calcium_mg: 0.0,
            vitamin_d_ug: 0.0,
        }
    }

    /// Multiply every field by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        self.map(|value| value * factor)
    }

    /// Values for `grams` of a product whose record is expressed per 100g
    #[must_use]
    pub fn for_grams(&self, grams: f64) -> Self {
        self.scaled(grams / REFERENCE_GRAMS)
    }

    /// Round every field to hundredths, half away from zero
    #[must_use]
    pub fn rounded(&self) -> Self {
        self.map(round_to_hundredths)
    }

    /// Field values in declaration order, paired with their serialized names
    #[must_use]
    pub const fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("kcal", self.kcal),
            ("protein_g", self.protein_g),
            ("iron_mg", self.iron_mg),
            ("zinc_mg", self.zinc_mg),
            ("calcium_mg", self.calcium_mg),
            ("vitaminD_µg", self.vitamin_d_ug),
        ]
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            kcal: f(self.kcal),
            protein_g: f(self.protein_g),
            iron_mg: f(self.iron_mg),
            zinc_mg: f(self.zinc_mg),
            calcium_mg: f(self.calcium_mg),
            vitamin_d_ug: f(self.vitamin_d_ug),
        }
    }
}

/// Round to two decimal places, half away from zero
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    let factor = 10_f64.powi(ROUNDING_DECIMALS);
    (value * factor).round() / factor
}

impl Add for Nutrition {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            kcal: self.kcal + rhs.kcal,
            protein_g: self.protein_g + rhs.protein_g,
            iron_mg: self.iron_mg + rhs.iron_mg,
            zinc_mg: self.zinc_mg + rhs.zinc_mg,
            calcium_mg: self.calcium_mg + rhs.calcium_mg,
            vitamin_d_ug: self.vitamin_d_ug + rhs.vitamin_d_ug,
        }
    }
}

impl AddAssign for Nutrition {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Self> for Nutrition {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        assert!((round_to_hundredths(1.005_000_1) - 1.01).abs() < f64::EPSILON);
        assert!((round_to_hundredths(2.344) - 2.34).abs() < f64::EPSILON);
        assert!((round_to_hundredths(-0.125) + 0.13).abs() < 1e-12);
    }

    #[test]
    fn test_for_grams_scales_per_hundred() {
        let per_100g = Nutrition {
            kcal: 40.0,
            iron_mg: 0.4,
            ..Nutrition::zero()
        };
        let portion = per_100g.for_grams(50.0);
        assert!((portion.kcal - 20.0).abs() < 1e-9);
        assert!((portion.iron_mg - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_deserialize_catalog_field_names() {
        let json = r#"{"kcal": 52, "protein_g": 0.3, "vitaminD_µg": 0.1}"#;
        let parsed: Nutrition = serde_json::from_str(json).unwrap();
        assert!((parsed.kcal - 52.0).abs() < f64::EPSILON);
        assert!((parsed.vitamin_d_ug - 0.1).abs() < f64::EPSILON);
        assert!(parsed.zinc_mg.abs() < f64::EPSILON);
    }

    #[test]
    fn test_sum_is_field_wise() {
        let a = Nutrition {
            kcal: 10.0,
            calcium_mg: 1.5,
            ..Nutrition::zero()
        };
        let total: Nutrition = [a, a, a].iter().sum();
        assert!((total.kcal - 30.0).abs() < 1e-9);
        assert!((total.calcium_mg - 4.5).abs() < 1e-9);
    }
}
