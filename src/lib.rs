// ABOUTME: Main library entry point for the weaning menu engine
// ABOUTME: Exposes catalog loading, menu generation, shopping lists, profiles and ambient setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Weaning Menu Engine
//!
//! Recommends age-appropriate complementary-feeding menus for infants of six
//! to twelve months. The engine filters a product and recipe catalog by the
//! child's age, allergens, diet and previously introduced foods, assembles
//! five meals a day under a main-ingredient rotation rule, totals nutrition and
//! consolidates the ingredients into a shopping list.
//!
//! ## Architecture
//!
//! - **`weaning_core`**: errors, models and constants shared by every module
//! - **`catalog`**: immutable product/recipe reference data
//! - **`menu`**: eligibility filter, meal selector, nutrition aggregator and assembler
//! - **`shopping`**: shopping list consolidation and approximate amounts
//! - **`profiles`**: profile document parsing and statistics
//! - **`config`** / **`logging`**: ambient configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use weaning_menu::catalog::Catalog;
//! use weaning_menu::config::MenuEngineConfig;
//! use weaning_menu::menu::MenuGenerator;
//! use weaning_menu::models::GenerationSettings;
//!
//! # fn main() -> weaning_menu::errors::AppResult<()> {
//! let catalog = Catalog::builtin()?;
//! let config = MenuEngineConfig::default();
//! let profile = weaning_menu::profiles::load_profile("child.json")?;
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! let menu = MenuGenerator::new(catalog, &config)
//!     .generate_daily_menu(&profile, &GenerationSettings::default(), &mut rng)?;
//! println!("{} meals", menu.meals().len());
//! # Ok(())
//! # }
//! ```

/// Product and recipe catalog
pub mod catalog;

/// Engine configuration with environment overrides
pub mod config;

/// Structured logging setup
pub mod logging;

/// Menu generation engine
pub mod menu;

/// Profile document parsing and statistics
pub mod profiles;

/// Shopping list builder
pub mod shopping;

pub use weaning_core::{constants, errors, models};
