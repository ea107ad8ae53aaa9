// ABOUTME: Integration tests for daily and weekly menu generation
// ABOUTME: Covers rotation, allergen exhaustion, per-day failure isolation and reproducibility
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tests for the menu assembler including:
//! - Strict main-ingredient rotation within a day
//! - Failure when no recipe is eligible
//! - Error markers for single failed days of a week
//! - Seeded reproducibility

mod common;

use chrono::Days;
use common::{
    all_milk_catalog, catalog_of, distinct_category_catalog, init_test_logging, product,
    profile_aged, recipe, seeded_rng, today,
};
use std::collections::HashSet;
use weaning_menu::catalog::Catalog;
use weaning_menu::config::MenuEngineConfig;
use weaning_menu::errors::{AppError, ErrorCode, MenuError};
use weaning_menu::menu::{main_ingredient, EligibleSet, MenuGenerator};
use weaning_menu::models::{
    CatalogLanguage, Consistency, GeneratedMenu, GenerationSettings, MealSlot, MenuPeriod,
    Nutrition,
};

// ============================================================================
// Daily Menu Tests
// ============================================================================

#[test]
fn test_strict_rotation_uses_distinct_main_categories() {
    init_test_logging();
    let catalog = distinct_category_catalog();
    let config = MenuEngineConfig::default();
    let generator = MenuGenerator::new(&catalog, &config).with_today(today());
    let profile = profile_aged("six-months", 6);

    for seed in 0..25 {
        let menu = generator
            .generate_daily_menu(&profile, &GenerationSettings::default(), &mut seeded_rng(seed))
            .unwrap();

        assert_eq!(menu.meals().len(), 5);
        let categories: HashSet<_> = menu
            .meals()
            .iter()
            .map(|meal| {
                main_ingredient(&meal.recipe, &catalog, &config.rotation)
                    .and_then(|product| product.primary_category())
                    .unwrap()
            })
            .collect();
        assert_eq!(categories.len(), 5, "seed {seed} repeated a category");
        assert!(!categories.contains("oil"));
    }
}

#[test]
fn test_daily_menu_has_fixed_slots_and_today_date() {
    init_test_logging();
    let catalog = distinct_category_catalog();
    let config = MenuEngineConfig::default();
    let generator = MenuGenerator::new(&catalog, &config).with_today(today());
    // A start date is accepted but daily menus are always dated today
    let settings = GenerationSettings {
        start_date: today().checked_add_days(Days::new(10)),
        ..GenerationSettings::default()
    };

    let menu = generator
        .generate_daily_menu(&profile_aged("p", 7), &settings, &mut seeded_rng(11))
        .unwrap();

    assert_eq!(menu.date, today());
    assert!(menu.day_name.is_none());
    let slots: Vec<MealSlot> = menu.meals().iter().map(|meal| meal.slot).collect();
    assert_eq!(slots, MealSlot::ALL);
    let labels: Vec<&str> = menu.meals().iter().map(|m| m.time_label.as_str()).collect();
    assert_eq!(
        labels,
        ["Breakfast", "Morning snack", "Lunch", "Afternoon snack", "Dinner"]
    );
}

#[test]
fn test_day_total_is_unrounded_sum_of_meals() {
    let catalog = Catalog::builtin().unwrap();
    let config = MenuEngineConfig::default();
    let generator = MenuGenerator::new(catalog, &config).with_today(today());

    let menu = generator
        .generate_daily_menu(
            &profile_aged("p", 10),
            &GenerationSettings::default(),
            &mut seeded_rng(5),
        )
        .unwrap();

    let expected: Nutrition = menu.meals().iter().map(|meal| meal.nutrition).sum();
    assert_eq!(menu.total_nutrition(), Some(&expected));
}

#[test]
fn test_all_milk_recipes_excluded_gives_insufficient_recipes() {
    init_test_logging();
    let catalog = all_milk_catalog();
    let config = MenuEngineConfig::default();
    let generator = MenuGenerator::new(&catalog, &config).with_today(today());
    let mut profile = profile_aged("no-milk", 8);
    profile.excluded_allergens = vec!["milk".into()];

    let error = generator
        .generate_daily_menu(&profile, &GenerationSettings::default(), &mut seeded_rng(1))
        .unwrap_err();

    assert_eq!(error, MenuError::insufficient_recipes("no-milk"));
    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::InsufficientData);
    assert_eq!(app_error.context.profile_id.as_deref(), Some("no-milk"));
}

#[test]
fn test_under_six_months_has_no_special_case() {
    let catalog = Catalog::builtin().unwrap();
    let config = MenuEngineConfig::default();
    let generator = MenuGenerator::new(catalog, &config).with_today(today());

    // Every built-in product starts at six months or later
    let result = generator.generate_daily_menu(
        &profile_aged("newborn", 4),
        &GenerationSettings::default(),
        &mut seeded_rng(1),
    );
    assert!(matches!(
        result,
        Err(MenuError::InsufficientRecipes { .. })
    ));
}

#[test]
fn test_relaxed_rotation_still_fills_every_slot() {
    let catalog = distinct_category_catalog();
    let config = MenuEngineConfig::default();
    let generator = MenuGenerator::new(&catalog, &config).with_today(today());
    let settings = GenerationSettings {
        strict_rotation: false,
        ..GenerationSettings::default()
    };

    let menu = generator
        .generate_daily_menu(&profile_aged("p", 6), &settings, &mut seeded_rng(2))
        .unwrap();
    assert_eq!(menu.meals().len(), 5);
}

// ============================================================================
// Eligibility Properties
// ============================================================================

#[test]
fn test_selected_ingredients_belong_to_eligible_set() {
    let catalog = Catalog::builtin().unwrap();
    let config = MenuEngineConfig::default();
    let generator = MenuGenerator::new(catalog, &config).with_today(today());

    let mut profile = profile_aged("picky", 9);
    profile.excluded_allergens = vec!["milk".into()];
    profile.dietary_preferences.vegetarian = true;
    let settings = GenerationSettings::for_period(MenuPeriod::Week);
    let eligible = EligibleSet::compute(catalog, &profile, 9, false);

    let week = generator.generate_weekly_menu(&profile, &settings, &mut seeded_rng(9));
    assert_eq!(week.len(), 7);
    for day in &week {
        assert!(!day.is_failed());
        for meal in day.meals() {
            assert!(meal.recipe.consistency <= Consistency::SoftChunks);
            assert!(meal.recipe.min_age_months <= 9);
            for ingredient in &meal.ingredients {
                assert!(
                    eligible.contains_product(&ingredient.product_id),
                    "{} is not eligible",
                    ingredient.product_id
                );
            }
        }
    }
}

#[test]
fn test_vegan_menu_avoids_animal_primary_categories() {
    let catalog = Catalog::builtin().unwrap();
    let config = MenuEngineConfig::default();
    let generator = MenuGenerator::new(catalog, &config).with_today(today());
    let mut profile = profile_aged("vegan", 11);
    profile.dietary_preferences.vegan = true;

    let menu = generator
        .generate_daily_menu(&profile, &GenerationSettings::default(), &mut seeded_rng(4))
        .unwrap();

    for meal in menu.meals() {
        for ingredient in &meal.ingredients {
            let category = catalog
                .product(&ingredient.product_id)
                .and_then(|p| p.primary_category())
                .unwrap();
            assert!(!["meat", "fish", "dairy", "egg"].contains(&category));
        }
    }
}

#[test]
fn test_avoid_new_products_only_uses_introduced_products() {
    let catalog = Catalog::builtin().unwrap();
    let config = MenuEngineConfig::default();
    let generator = MenuGenerator::new(catalog, &config).with_today(today());
    let mut profile = profile_aged("cautious", 6);
    profile.introduced_products = vec![
        "zucchini".into(),
        "apple".into(),
        "pear".into(),
        "olive-oil".into(),
    ];
    let settings = GenerationSettings {
        avoid_new_products: true,
        ..GenerationSettings::default()
    };

    let menu = generator
        .generate_daily_menu(&profile, &settings, &mut seeded_rng(8))
        .unwrap();
    for meal in menu.meals() {
        assert!(meal
            .ingredients
            .iter()
            .all(|ingredient| profile.has_introduced(&ingredient.product_id)));
    }
}

// ============================================================================
// Weekly Menu Tests
// ============================================================================

#[test]
fn test_weekly_menu_dates_and_day_names() {
    let catalog = distinct_category_catalog();
    let config = MenuEngineConfig::default();
    let generator = MenuGenerator::new(&catalog, &config).with_today(today());

    let week = generator.generate_weekly_menu(
        &profile_aged("p", 6),
        &GenerationSettings::for_period(MenuPeriod::Week),
        &mut seeded_rng(3),
    );

    let names: Vec<&str> = week.iter().filter_map(|d| d.day_name.as_deref()).collect();
    assert_eq!(
        names,
        ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
    );
    for (offset, day) in (0_u64..).zip(&week) {
        assert_eq!(day.date, today().checked_add_days(Days::new(offset)).unwrap());
        assert_eq!(day.meals().len(), 5);
    }
}

#[test]
fn test_single_failed_day_is_isolated() {
    init_test_logging();
    let catalog = distinct_category_catalog();
    let config = MenuEngineConfig::default();
    let generator = MenuGenerator::new(&catalog, &config).with_today(today());
    let profile = profile_aged("p", 6);

    // Day 3 only allows introduced products, and there are none
    let week = generator.generate_weekly_menu_scheduled(
        &profile,
        |day| GenerationSettings {
            avoid_new_products: day == 3,
            ..GenerationSettings::for_period(MenuPeriod::Week)
        },
        &mut seeded_rng(21),
    );

    assert_eq!(week.len(), 7);
    let failed: Vec<usize> = week
        .iter()
        .enumerate()
        .filter(|(_, day)| day.is_failed())
        .map(|(index, _)| index)
        .collect();
    assert_eq!(failed, vec![3]);

    let marker = &week[3];
    assert!(marker.meals().is_empty());
    assert!(marker.total_nutrition().is_none());
    assert_eq!(marker.error(), Some("Could not generate a menu for this day"));
    assert_eq!(marker.day_name.as_deref(), Some("Thursday"));
    let json = serde_json::to_value(marker).unwrap();
    assert_eq!(json["status"], "failed");
    assert_eq!(json["meals"], serde_json::json!([]));
    assert!(week
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != 3)
        .all(|(_, day)| day.meals().len() == 5));
}

#[test]
fn test_weekly_generation_is_reproducible() {
    let catalog = Catalog::builtin().unwrap();
    let config = MenuEngineConfig::default();
    let generator = MenuGenerator::new(catalog, &config).with_today(today());
    let profile = profile_aged("p", 9);
    let settings = GenerationSettings::for_period(MenuPeriod::Week);

    let first = generator.generate_weekly_menu(&profile, &settings, &mut seeded_rng(2026));
    let second = generator.generate_weekly_menu(&profile, &settings, &mut seeded_rng(2026));
    assert_eq!(first, second);
}

#[test]
fn test_generate_dispatches_on_period() {
    let catalog = distinct_category_catalog();
    let config = MenuEngineConfig::default();
    let generator = MenuGenerator::new(&catalog, &config).with_today(today());
    let profile = profile_aged("p", 6);

    let daily = generator
        .generate(&profile, &GenerationSettings::for_period(MenuPeriod::Day), &mut seeded_rng(1))
        .unwrap();
    assert!(matches!(daily, GeneratedMenu::Daily(_)));
    assert_eq!(daily.days().len(), 1);

    let weekly = generator
        .generate(&profile, &GenerationSettings::for_period(MenuPeriod::Week), &mut seeded_rng(1))
        .unwrap();
    assert!(matches!(weekly, GeneratedMenu::Weekly(_)));
    assert_eq!(weekly.days().len(), 7);
}

#[test]
fn test_weekly_menu_never_fails_as_a_whole() {
    let catalog = all_milk_catalog();
    let config = MenuEngineConfig::default();
    let generator = MenuGenerator::new(&catalog, &config).with_today(today());
    let mut profile = profile_aged("no-milk", 8);
    profile.excluded_allergens = vec!["milk".into()];

    let menu = generator
        .generate(
            &profile,
            &GenerationSettings::for_period(MenuPeriod::Week),
            &mut seeded_rng(1),
        )
        .unwrap();
    assert_eq!(menu.days().len(), 7);
    assert!(menu.days().iter().all(|day| day.is_failed()));
}

// ============================================================================
// Localization
// ============================================================================

#[test]
fn test_russian_catalog_localizes_labels_and_markers() {
    let catalog = catalog_of(
        CatalogLanguage::Ru,
        vec![product("tykva", "vegetable", &[], 6)],
        vec![recipe("tykva-puree", 6, Consistency::Puree, &[("tykva", 100.0)])],
    );
    let config = MenuEngineConfig::default();
    let generator = MenuGenerator::new(&catalog, &config).with_today(today());

    let week = generator.generate_weekly_menu_scheduled(
        &profile_aged("p", 6),
        |day| GenerationSettings {
            avoid_new_products: day == 6,
            ..GenerationSettings::default()
        },
        &mut seeded_rng(1),
    );

    assert_eq!(week[0].day_name.as_deref(), Some("понедельник"));
    assert_eq!(week[0].meals()[0].time_label, "Завтрак");
    assert_eq!(week[0].meals()[1].time_label, "Перекус (утро)");
    assert_eq!(
        week[6].error(),
        Some("Не удалось сгенерировать меню для этого дня")
    );
}
