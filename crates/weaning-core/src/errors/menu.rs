// ABOUTME: Domain error types raised by the menu generation engine
// ABOUTME: Provides structured failures that convert into the unified AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Menu Error Types
//!
//! - `MenuError` - failures raised while generating menus for a profile
//! - Conversion to `AppError` for the application boundary

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised by menu generation.
///
/// The selection heuristic itself never fails; these variants only describe
/// situations where no menu can be produced at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MenuError {
    /// Eligibility filtering left no recipe for the requested day
    #[error("insufficient eligible recipes to generate a menu for profile '{profile_id}'")]
    InsufficientRecipes {
        /// Profile the menu was requested for
        profile_id: String,
    },
    /// The catalog contains no recipes at all
    #[error("catalog contains no recipes")]
    EmptyCatalog,
    /// Caller-level gate: the child is younger than the complementary feeding age
    #[error("child is {age_months} months old; complementary feeding starts at {minimum} months")]
    UnderMinimumAge {
        /// Age of the child in whole months
        age_months: u32,
        /// Minimum age accepted by the caller
        minimum: u32,
    },
}

impl MenuError {
    /// Create an "insufficient recipes" error
    #[must_use]
    pub fn insufficient_recipes(profile_id: impl Into<String>) -> Self {
        Self::InsufficientRecipes {
            profile_id: profile_id.into(),
        }
    }

    /// Error code this failure maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InsufficientRecipes { .. } | Self::EmptyCatalog => ErrorCode::InsufficientData,
            Self::UnderMinimumAge { .. } => ErrorCode::ValueOutOfRange,
        }
    }
}

impl From<MenuError> for AppError {
    fn from(error: MenuError) -> Self {
        let app_error = Self::new(error.code(), error.to_string());
        match error {
            MenuError::InsufficientRecipes { profile_id } => app_error.with_profile_id(profile_id),
            MenuError::UnderMinimumAge {
                age_months,
                minimum,
            } => app_error.with_details(serde_json::json!({
                "age_months": age_months,
                "minimum_months": minimum,
            })),
            MenuError::EmptyCatalog => app_error,
        }
    }
}
