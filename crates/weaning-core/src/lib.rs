// ABOUTME: Core types and constants for the weaning menu engine
// ABOUTME: Foundation crate with error handling, data models, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Weaning Core
//!
//! Foundation crate providing shared types and constants for the infant
//! weaning menu engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the domain `MenuError`
//! - **constants**: Meal slots, rotation limits, category tags and shopping heuristics
//! - **models**: Catalog entries, child profiles, nutrition, menus and shopping lists

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models (Product, Recipe, `ChildProfile`, `DailyMenu`, `ShoppingList`, etc.)
pub mod models;
