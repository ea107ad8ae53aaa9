// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Shared helpers for weaning-cli commands
// ABOUTME: Loads catalogs and profiles, seeds generators, applies the age gate and prints JSON

use crate::GenerationArgs;
use chrono::Local;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;
use weaning_menu::catalog::Catalog;
use weaning_menu::constants::age::COMPLEMENTARY_FEEDING_START_MONTHS;
use weaning_menu::errors::{AppError, AppResult, MenuError};
use weaning_menu::models::{ChildProfile, GenerationSettings, MenuPeriod};
use weaning_menu::profiles::load_profile;

/// Caller-level gate for children younger than six months
#[derive(Debug, Clone, Copy)]
pub struct AgeGate {
    pub allow_under_six_months: bool,
}

impl AgeGate {
    /// Reject profiles below the complementary feeding age unless allowed
    pub fn check(self, profile: &ChildProfile) -> AppResult<()> {
        let age_months = profile.age_in_months(Local::now().date_naive());
        if age_months < COMPLEMENTARY_FEEDING_START_MONTHS && !self.allow_under_six_months {
            return Err(AppError::from(MenuError::UnderMinimumAge {
                age_months,
                minimum: COMPLEMENTARY_FEEDING_START_MONTHS,
            })
            .with_profile_id(profile.id.clone()));
        }
        Ok(())
    }
}

/// Built-in catalog, or the one at `path`
pub fn load_catalog(path: Option<&Path>) -> AppResult<Cow<'static, Catalog>> {
    match path {
        Some(path) => Ok(Cow::Owned(Catalog::from_path(path)?)),
        None => Ok(Cow::Borrowed(Catalog::builtin()?)),
    }
}

/// Everything a generation command needs
pub struct GenerationInput {
    pub catalog: Cow<'static, Catalog>,
    pub profile: ChildProfile,
    pub settings: GenerationSettings,
    pub rng: ChaCha8Rng,
}

/// Load inputs for a generation command and apply the age gate
pub fn prepare_generation(
    args: &GenerationArgs,
    period: MenuPeriod,
    gate: AgeGate,
) -> AppResult<GenerationInput> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let profile = load_profile(&args.profile)?;
    gate.check(&profile)?;

    let settings = GenerationSettings {
        period,
        start_date: None,
        avoid_new_products: args.avoid_new_products,
        strict_rotation: !args.no_strict_rotation,
    };

    let rng = args.seed.map_or_else(ChaCha8Rng::from_entropy, |seed| {
        info!(seed, "Using seeded generator");
        ChaCha8Rng::seed_from_u64(seed)
    });

    Ok(GenerationInput {
        catalog,
        profile,
        settings,
        rng,
    })
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
