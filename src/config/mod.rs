// ABOUTME: Menu engine configuration for meal rotation and shopping-list heuristics
// ABOUTME: Loads defaults, applies WEANING_* environment overrides and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Menu Engine Configuration
//!
//! Tunable values used by the meal selector and the shopping-list builder.
//!
//! # Module Structure
//!
//! - `RotationConfig` - retry budget and categories excluded from main-ingredient detection
//! - `ShoppingConfig` - thresholds and rounding steps for approximate purchase amounts
//! - `error` - `ConfigError`
//!
//! Engine components take a `&MenuEngineConfig` explicitly. The process-wide
//! instance returned by [`MenuEngineConfig::global`] is only consulted at the
//! application boundary.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;
use weaning_core::constants::{menu, shopping};

/// Global configuration singleton
static MENU_ENGINE_CONFIG: OnceLock<MenuEngineConfig> = OnceLock::new();

/// Main-ingredient rotation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationConfig {
    /// Draws per slot before falling back to an unconstrained draw
    pub max_attempts: u32,
    /// Primary categories that never count as a main ingredient
    pub non_main_categories: Vec<String>,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            max_attempts: menu::DEFAULT_ROTATION_ATTEMPTS,
            non_main_categories: menu::DEFAULT_NON_MAIN_CATEGORIES
                .iter()
                .map(|&category| category.to_owned())
                .collect(),
        }
    }
}

impl RotationConfig {
    /// Whether a primary category is excluded from main-ingredient detection
    #[must_use]
    pub fn is_non_main(&self, category: &str) -> bool {
        self.non_main_categories.iter().any(|c| c == category)
    }
}

/// Approximate purchase amount heuristics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingConfig {
    /// Above this weight a cereal is bought as a full package
    pub package_threshold_g: f64,
    /// Rounding step for meat
    pub meat_step_g: f64,
    /// Rounding step for fish
    pub fish_step_g: f64,
    /// Weight of one piece of fruit
    pub fruit_piece_g: f64,
    /// Above this weight a root vegetable is bought as a medium piece
    pub root_vegetable_medium_threshold_g: f64,
    /// Rounding step for everything else
    pub default_step_g: f64,
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            package_threshold_g: shopping::PACKAGE_THRESHOLD_G,
            meat_step_g: shopping::MEAT_STEP_G,
            fish_step_g: shopping::FISH_STEP_G,
            fruit_piece_g: shopping::FRUIT_PIECE_G,
            root_vegetable_medium_threshold_g: shopping::ROOT_VEGETABLE_MEDIUM_THRESHOLD_G,
            default_step_g: shopping::DEFAULT_STEP_G,
        }
    }
}

/// Configuration container for the menu engine
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuEngineConfig {
    /// Meal selector rotation settings
    pub rotation: RotationConfig,
    /// Shopping list heuristics
    pub shopping: ShoppingConfig,
}

impl MenuEngineConfig {
    /// Get the global configuration instance
    ///
    /// Falls back to defaults when the environment holds invalid overrides.
    pub fn global() -> &'static Self {
        MENU_ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load menu engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the retry budget is zero, a rounding step is not
    /// positive, or a threshold is negative or not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rotation.max_attempts == 0 {
            return Err(ConfigError::InvalidRange(
                "rotation max_attempts must be at least 1",
            ));
        }

        let shop = &self.shopping;
        let steps = [
            shop.meat_step_g,
            shop.fish_step_g,
            shop.fruit_piece_g,
            shop.default_step_g,
        ];
        if steps.iter().any(|&step| step <= 0.0 || !step.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "shopping rounding steps must be positive",
            ));
        }

        let thresholds = [
            shop.package_threshold_g,
            shop.root_vegetable_medium_threshold_g,
        ];
        if thresholds
            .iter()
            .any(|&threshold| threshold < 0.0 || !threshold.is_finite())
        {
            return Err(ConfigError::ValueOutOfRange(
                "shopping thresholds must be finite and not negative",
            ));
        }

        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply `WEANING_*` environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable does not parse as a number
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "WEANING_ROTATION_MAX_ATTEMPTS",
            &mut self.rotation.max_attempts,
        )?;

        Self::apply_env_var(
            "WEANING_SHOPPING_PACKAGE_THRESHOLD_G",
            &mut self.shopping.package_threshold_g,
        )?;
        Self::apply_env_var("WEANING_SHOPPING_MEAT_STEP_G", &mut self.shopping.meat_step_g)?;
        Self::apply_env_var("WEANING_SHOPPING_FISH_STEP_G", &mut self.shopping.fish_step_g)?;
        Self::apply_env_var(
            "WEANING_SHOPPING_FRUIT_PIECE_G",
            &mut self.shopping.fruit_piece_g,
        )?;
        Self::apply_env_var(
            "WEANING_SHOPPING_ROOT_VEGETABLE_THRESHOLD_G",
            &mut self.shopping.root_vegetable_medium_threshold_g,
        )?;
        Self::apply_env_var(
            "WEANING_SHOPPING_DEFAULT_STEP_G",
            &mut self.shopping.default_step_g,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = MenuEngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rotation.max_attempts, 50);
        assert!(config.rotation.is_non_main("oil"));
        assert!(!config.rotation.is_non_main("vegetable"));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let mut config = MenuEngineConfig::default();
        config.rotation.max_attempts = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_zero_step_rejected() {
        let mut config = MenuEngineConfig::default();
        config.shopping.fish_step_g = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_non_finite_thresholds_rejected() {
        for threshold in [f64::NAN, f64::INFINITY] {
            let mut config = MenuEngineConfig::default();
            config.shopping.root_vegetable_medium_threshold_g = threshold;
            assert!(matches!(
                config.validate(),
                Err(ConfigError::ValueOutOfRange(_))
            ));
        }
    }
}
