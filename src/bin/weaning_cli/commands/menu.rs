// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Menu generation command for weaning-cli
// ABOUTME: Prints a daily or weekly menu for a child profile as JSON

use crate::helpers::{prepare_generation, print_json, AgeGate};
use crate::GenerationArgs;
use weaning_menu::config::MenuEngineConfig;
use weaning_menu::errors::AppResult;
use weaning_menu::menu::MenuGenerator;
use weaning_menu::models::MenuPeriod;

/// Generate and print a menu
pub fn generate(args: &GenerationArgs, period: MenuPeriod, gate: AgeGate) -> AppResult<()> {
    let mut input = prepare_generation(args, period, gate)?;
    let config = MenuEngineConfig::global();

    let menu = MenuGenerator::new(&input.catalog, config)
        .generate(&input.profile, &input.settings, &mut input.rng)?;

    print_json(&menu)
}
