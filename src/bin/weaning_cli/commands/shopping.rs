// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Shopping list command for weaning-cli
// ABOUTME: Generates a menu and prints its consolidated shopping list as JSON

use crate::helpers::{prepare_generation, print_json, AgeGate};
use crate::GenerationArgs;
use tracing::info;
use weaning_menu::config::MenuEngineConfig;
use weaning_menu::errors::AppResult;
use weaning_menu::menu::MenuGenerator;
use weaning_menu::models::MenuPeriod;
use weaning_menu::shopping::ShoppingListBuilder;

/// Generate a menu for `period` and print its shopping list
pub fn generate(args: &GenerationArgs, period: MenuPeriod, gate: AgeGate) -> AppResult<()> {
    let mut input = prepare_generation(args, period, gate)?;
    let config = MenuEngineConfig::global();

    let menu = MenuGenerator::new(&input.catalog, config)
        .generate(&input.profile, &input.settings, &mut input.rng)?;

    let list = ShoppingListBuilder::new(&input.catalog, &config.shopping).build_for(&menu);
    info!(
        days = menu.days().len(),
        categories = list.len(),
        "Shopping list ready"
    );
    print_json(&list)
}
