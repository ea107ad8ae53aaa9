// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Catalog audit command for weaning-cli
// ABOUTME: Prints dangling product references and recipes lacking a main ingredient

use crate::helpers::{load_catalog, print_json};
use std::path::Path;
use tracing::info;
use weaning_menu::config::MenuEngineConfig;
use weaning_menu::errors::AppResult;

/// Audit a catalog and print the report
pub fn audit(path: Option<&Path>) -> AppResult<()> {
    let catalog = load_catalog(path)?;
    let report = catalog.audit(&MenuEngineConfig::global().rotation);
    info!(clean = report.is_clean(), "Catalog audit finished");
    print_json(&report)
}
