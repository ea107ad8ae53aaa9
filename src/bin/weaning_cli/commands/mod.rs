// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for weaning-cli
// ABOUTME: Provides menu, shopping, catalog and profile commands

pub mod catalog;
pub mod menu;
pub mod profiles;
pub mod shopping;
