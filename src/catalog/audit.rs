// ABOUTME: Catalog consistency audit for dangling product references
// ABOUTME: Lists recipe ingredients naming unknown products and recipes with no main ingredient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Catalog;
use crate::config::RotationConfig;
use crate::menu::main_ingredient;
use serde::Serialize;
use tracing::warn;

/// A recipe ingredient whose product id is not in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    /// Recipe naming the product
    pub recipe_id: String,
    /// Unknown product id
    pub product_id: String,
}

/// Result of [`Catalog::audit`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogAudit {
    /// Ingredients that point at missing products, in catalog order
    pub dangling_references: Vec<DanglingReference>,
    /// Recipes that can never satisfy strict rotation
    pub recipes_without_main_ingredient: Vec<String>,
}

impl CatalogAudit {
    /// Whether the audit found nothing to report
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.dangling_references.is_empty() && self.recipes_without_main_ingredient.is_empty()
    }
}

impl Catalog {
    /// Report every dangling reference and every recipe lacking a main ingredient
    ///
    /// Generation tolerates both; this surfaces them before any menu is built.
    #[must_use]
    pub fn audit(&self, rotation: &RotationConfig) -> CatalogAudit {
        let mut audit = CatalogAudit::default();

        for recipe in self.recipes() {
            for ingredient in &recipe.ingredients {
                if self.product(&ingredient.product_id).is_none() {
                    audit.dangling_references.push(DanglingReference {
                        recipe_id: recipe.id.clone(),
                        product_id: ingredient.product_id.clone(),
                    });
                }
            }
            if main_ingredient(recipe, self, rotation).is_none() {
                audit.recipes_without_main_ingredient.push(recipe.id.clone());
            }
        }

        if !audit.is_clean() {
            warn!(
                dangling = audit.dangling_references.len(),
                without_main = audit.recipes_without_main_ingredient.len(),
                "Catalog audit found issues"
            );
        }
        audit
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::MenuEngineConfig;

    #[test]
    fn test_audit_reports_dangling_and_oil_only_recipes() {
        let json = r#"{
            "products": [
                {"id": "carrot", "name": "Carrot", "categories": ["vegetable"], "allowed_from_month": 6},
                {"id": "olive-oil", "name": "Olive oil", "categories": ["oil"], "allowed_from_month": 6}
            ],
            "recipes": [
                {"id": "carrot-puree", "title": "Carrot", "recommended_from_month": 6, "consistency": "puree",
                 "ingredients": [{"product_id": "carrot", "grams": 90}, {"product_id": "ghee", "grams": 5}]},
                {"id": "just-oil", "title": "Oil", "recommended_from_month": 6, "consistency": "puree",
                 "ingredients": [{"product_id": "olive-oil", "grams": 5}]}
            ]
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        let audit = catalog.audit(&MenuEngineConfig::default().rotation);

        assert_eq!(
            audit.dangling_references,
            vec![DanglingReference {
                recipe_id: "carrot-puree".into(),
                product_id: "ghee".into(),
            }]
        );
        assert_eq!(audit.recipes_without_main_ingredient, vec!["just-oil".to_owned()]);
        assert!(!audit.is_clean());
    }

    #[test]
    fn test_builtin_catalog_is_clean() {
        let catalog = Catalog::builtin().unwrap();
        let audit = catalog.audit(&MenuEngineConfig::default().rotation);
        assert!(audit.is_clean(), "{audit:?}");
    }
}
