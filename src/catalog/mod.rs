// ABOUTME: Product and recipe catalog loading, indexing and consistency auditing
// ABOUTME: Provides the embedded built-in catalog and JSON string/file loaders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Catalog
//!
//! Immutable reference data consulted by every generation call. A catalog is
//! loaded once, indexed by product id and then shared read-only. Callers pass
//! it into the engine explicitly, which keeps fixture catalogs trivial to use
//! in tests.

mod audit;

pub use audit::{CatalogAudit, DanglingReference};

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info};
use weaning_core::errors::{AppError, AppResult, MenuError};
use weaning_core::models::{CatalogLanguage, Product, Recipe};

/// Catalog shipped with the binary
const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

static BUILTIN_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// On-disk shape of a catalog document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Language the product names are written in
    #[serde(default)]
    pub language: CatalogLanguage,
    /// Products
    pub products: Vec<Product>,
    /// Recipes
    pub recipes: Vec<Recipe>,
}

/// Indexed, validated product and recipe collections
#[derive(Debug, Clone)]
pub struct Catalog {
    language: CatalogLanguage,
    products: Vec<Product>,
    recipes: Vec<Recipe>,
    product_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from a parsed document
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for duplicate product or recipe ids or negative
    /// ingredient weights, and `InsufficientData` if there are no recipes.
    pub fn from_document(document: CatalogDocument) -> AppResult<Self> {
        let CatalogDocument {
            language,
            products,
            recipes,
        } = document;

        if recipes.is_empty() {
            return Err(MenuError::EmptyCatalog.into());
        }

        let mut product_index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if product_index.insert(product.id.clone(), position).is_some() {
                return Err(AppError::invalid_input(format!(
                    "duplicate product id '{}'",
                    product.id
                ))
                .with_resource_id(product.id.clone()));
            }
        }

        let mut recipe_ids = HashSet::with_capacity(recipes.len());
        for recipe in &recipes {
            if !recipe_ids.insert(recipe.id.as_str()) {
                return Err(
                    AppError::invalid_input(format!("duplicate recipe id '{}'", recipe.id))
                        .with_resource_id(recipe.id.clone()),
                );
            }
            if let Some(ingredient) = recipe
                .ingredients
                .iter()
                .find(|ingredient| !ingredient.grams.is_finite() || ingredient.grams < 0.0)
            {
                return Err(AppError::invalid_input(format!(
                    "recipe '{}' uses an invalid weight for '{}'",
                    recipe.id, ingredient.product_id
                ))
                .with_resource_id(recipe.id.clone()));
            }
        }

        debug!(
            products = products.len(),
            recipes = recipes.len(),
            language = ?language,
            "Catalog indexed"
        );

        Ok(Self {
            language,
            products,
            recipes,
            product_index,
        })
    }

    /// Parse a catalog from a JSON document
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the JSON does not match the catalog shape,
    /// or any error from [`Catalog::from_document`].
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the file does not exist, `StorageError`
    /// if it cannot be read, or any parse error.
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::from(e).with_resource_id(path.display().to_string())
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            products = catalog.products.len(),
            recipes = catalog.recipes.len(),
            "Loaded catalog from file"
        );
        Ok(catalog)
    }

    /// The catalog embedded in the binary, parsed on first use
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded document is malformed
    pub fn builtin() -> AppResult<&'static Self> {
        if let Some(catalog) = BUILTIN_CATALOG.get() {
            return Ok(catalog);
        }
        let catalog = Self::from_json_str(BUILTIN_CATALOG_JSON)?;
        Ok(BUILTIN_CATALOG.get_or_init(|| catalog))
    }

    /// Language of product names and localized output
    #[must_use]
    pub const fn language(&self) -> CatalogLanguage {
        self.language
    }

    /// All products in document order
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All recipes in document order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a product by id
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.product_index
            .get(id)
            .and_then(|&position| self.products.get(position))
    }

    /// Look up a recipe by id
    #[must_use]
    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Display name for a product id, or the localized placeholder
    #[must_use]
    pub fn product_name(&self, id: &str) -> &str {
        self.product(id).map_or_else(
            || self.language.unknown_product_name(),
            |product| product.name.as_str(),
        )
    }
}
