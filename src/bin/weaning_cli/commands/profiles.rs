// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Profile export commands for weaning-cli
// ABOUTME: Prints age-group statistics for a profiles export document

use crate::helpers::print_json;
use chrono::Local;
use std::path::Path;
use weaning_menu::errors::AppResult;
use weaning_menu::profiles::ProfileDocument;

/// Print age-group statistics for an export document
pub fn stats(path: &Path) -> AppResult<()> {
    let document = ProfileDocument::from_path(path)?;
    print_json(&document.stats(Local::now().date_naive()))
}
