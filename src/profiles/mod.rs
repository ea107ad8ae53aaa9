// ABOUTME: Read-only handling of child profile JSON documents and export files
// ABOUTME: Parses profiles, plans imports against existing ids and computes age-group stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Profile documents
//!
//! The profile store owns persistence. This module only understands its JSON
//! shapes: a single [`ChildProfile`] and the export document
//! `{ "profiles": { id: profile }, "exportedAt", "version" }`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use weaning_core::constants::age::{INFANT_MAX_MONTHS, PUREE_MAX_MONTHS, SOFT_CHUNKS_MAX_MONTHS};
use weaning_core::errors::{AppError, AppResult};
use weaning_core::models::ChildProfile;

/// Format version written into export documents
pub const EXPORT_FORMAT_VERSION: &str = "1.0";

/// Profiles export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    /// Profiles keyed by id
    pub profiles: BTreeMap<String, ChildProfile>,
    /// When the export was written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
    /// Export format version
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    EXPORT_FORMAT_VERSION.to_owned()
}

impl ProfileDocument {
    /// Build an export document for `profiles`
    #[must_use]
    pub fn export<I>(profiles: I, exported_at: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = ChildProfile>,
    {
        Self {
            profiles: profiles
                .into_iter()
                .map(|profile| (profile.id.clone(), profile))
                .collect(),
            exported_at: Some(exported_at),
            version: default_version(),
        }
    }

    /// Parse an export document
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the JSON is malformed or has no `profiles` map
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let document: Self = serde_json::from_str(json)?;
        debug!(
            profiles = document.profiles.len(),
            version = %document.version,
            "Parsed profiles document"
        );
        Ok(document)
    }

    /// Read an export document from disk
    ///
    /// # Errors
    ///
    /// Returns an I/O or parse error
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
        Self::from_json_str(&json)
    }

    /// Split the document into conflicting ids and genuinely new profiles
    pub fn plan_import(&self, mut exists: impl FnMut(&str) -> bool) -> ImportPlan {
        let mut plan = ImportPlan::default();
        for (id, profile) in &self.profiles {
            if exists(id) {
                plan.conflicts.push(id.clone());
            } else {
                plan.new_profiles.push(profile.clone());
            }
        }
        info!(
            conflicts = plan.conflicts.len(),
            new_profiles = plan.new_profiles.len(),
            "Planned profile import"
        );
        plan
    }

    /// Merge the document into an in-memory profile map
    ///
    /// Existing ids are kept unless `overwrite_conflicts` is set.
    pub fn merge_into(
        &self,
        existing: &mut BTreeMap<String, ChildProfile>,
        overwrite_conflicts: bool,
    ) {
        for (id, profile) in &self.profiles {
            if overwrite_conflicts || !existing.contains_key(id) {
                existing.insert(id.clone(), profile.clone());
            }
        }
    }

    /// Age-group statistics on `today`
    #[must_use]
    pub fn stats(&self, today: NaiveDate) -> ProfileStats {
        ProfileStats::compute(self.profiles.values(), today)
    }
}

/// Parse a single child profile document
///
/// # Errors
///
/// Returns `InvalidFormat` if the JSON is malformed or lacks `dateOfBirth`
pub fn parse_profile(json: &str) -> AppResult<ChildProfile> {
    Ok(serde_json::from_str(json)?)
}

/// Read a single child profile from disk
///
/// # Errors
///
/// Returns an I/O or parse error
pub fn load_profile(path: impl AsRef<Path>) -> AppResult<ChildProfile> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
    parse_profile(&json)
}

/// Outcome of comparing an import document with the store
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPlan {
    /// Ids present both in the document and the store
    pub conflicts: Vec<String>,
    /// Profiles whose ids are not in the store yet
    pub new_profiles: Vec<ChildProfile>,
}

/// Age bucket used by profile statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AgeGroup {
    /// Up to 7 months
    #[serde(rename = "6-7")]
    UpToSeven,
    /// 8 to 9 months
    #[serde(rename = "8-9")]
    EightToNine,
    /// 10 to 12 months
    #[serde(rename = "10-12")]
    TenToTwelve,
    /// Over a year
    #[serde(rename = "older")]
    Older,
}

impl AgeGroup {
    /// Bucket for an age in whole months
    #[must_use]
    pub const fn for_age(age_months: u32) -> Self {
        if age_months <= PUREE_MAX_MONTHS {
            Self::UpToSeven
        } else if age_months <= SOFT_CHUNKS_MAX_MONTHS {
            Self::EightToNine
        } else if age_months <= INFANT_MAX_MONTHS {
            Self::TenToTwelve
        } else {
            Self::Older
        }
    }
}

/// Profile counts overall and per age group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    /// Number of profiles
    pub total: usize,
    /// Count per age group; every group is present
    pub by_age: BTreeMap<AgeGroup, usize>,
    /// Id of the earliest created profile
    pub oldest: Option<String>,
    /// Id of the latest created profile
    pub newest: Option<String>,
}

impl ProfileStats {
    /// Count `profiles` by age on `today` and pick the oldest and newest
    ///
    /// Profiles without `createdAt` rank before any dated one; on a tie the
    /// first profile in iteration order wins.
    pub fn compute<'p>(
        profiles: impl IntoIterator<Item = &'p ChildProfile>,
        today: NaiveDate,
    ) -> Self {
        let mut by_age: BTreeMap<AgeGroup, usize> = [
            AgeGroup::UpToSeven,
            AgeGroup::EightToNine,
            AgeGroup::TenToTwelve,
            AgeGroup::Older,
        ]
        .into_iter()
        .map(|group| (group, 0))
        .collect();

        let mut total = 0;
        let mut oldest: Option<&ChildProfile> = None;
        let mut newest: Option<&ChildProfile> = None;
        for profile in profiles {
            total += 1;
            *by_age
                .entry(AgeGroup::for_age(profile.age_in_months(today)))
                .or_insert(0) += 1;

            if oldest.is_none_or(|current| profile.created_at < current.created_at) {
                oldest = Some(profile);
            }
            if newest.is_none_or(|current| profile.created_at > current.created_at) {
                newest = Some(profile);
            }
        }

        Self {
            total,
            by_age,
            oldest: oldest.map(|profile| profile.id.clone()),
            newest: newest.map(|profile| profile.id.clone()),
        }
    }
}
