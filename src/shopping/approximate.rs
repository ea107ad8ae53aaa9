// ABOUTME: Human friendly purchase quantities derived from product names and weights
// ABOUTME: Keyword tables per catalog language map totals to bottles, packages, pieces or grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ShoppingConfig;
use weaning_core::models::CatalogLanguage;

/// Keywords and phrases for one catalog language
struct Vocabulary {
    oil: &'static [&'static str],
    grain: &'static [&'static str],
    meat: &'static [&'static str],
    fish: &'static [&'static str],
    fruit: &'static [&'static str],
    root_vegetable: &'static [&'static str],
    bottle: &'static str,
    package: &'static str,
    small_package: &'static str,
    pieces_suffix: &'static str,
    medium_piece: &'static str,
    small_piece: &'static str,
    grams_suffix: &'static str,
}

const ENGLISH: Vocabulary = Vocabulary {
    oil: &["oil"],
    grain: &["porridge", "grain"],
    meat: &["meat", "chicken", "beef", "turkey"],
    fish: &["fish"],
    fruit: &["apple", "pear", "banana"],
    root_vegetable: &["carrot", "zucchini", "pumpkin"],
    bottle: "1 bottle",
    package: "1 package",
    small_package: "1 small package",
    pieces_suffix: "pcs",
    medium_piece: "1 medium piece",
    small_piece: "1 small piece",
    grams_suffix: "g",
};

const RUSSIAN: Vocabulary = Vocabulary {
    oil: &["масло"],
    grain: &["каша", "крупа"],
    meat: &["мясо", "курица", "говядина", "индейка"],
    fish: &["рыба"],
    fruit: &["яблоко", "груша", "банан"],
    root_vegetable: &["морковь", "кабачок", "тыква"],
    bottle: "1 бутылочка",
    package: "1 пачка",
    small_package: "1 небольшая пачка",
    pieces_suffix: "шт.",
    medium_piece: "1 шт. средняя",
    small_piece: "1 шт. небольшая",
    grams_suffix: "г",
};

const fn vocabulary(language: CatalogLanguage) -> &'static Vocabulary {
    match language {
        CatalogLanguage::En => &ENGLISH,
        CatalogLanguage::Ru => &RUSSIAN,
    }
}

fn round_up_to(grams: f64, step: f64) -> f64 {
    (grams / step).ceil() * step
}

/// Approximate purchase amount for `grams` of a product named `name`
///
/// Rules are tried in order and the first keyword match wins: oil, grain,
/// meat, fish, fruit, root vegetable, then a plain rounded weight. `grams` is
/// the exact unrounded total.
#[must_use]
pub fn approximate_amount(
    name: &str,
    grams: f64,
    language: CatalogLanguage,
    config: &ShoppingConfig,
) -> String {
    let words = vocabulary(language);
    let name = name.to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|keyword| name.contains(keyword));

    if mentions(words.oil) {
        words.bottle.to_owned()
    } else if mentions(words.grain) {
        if grams > config.package_threshold_g {
            words.package.to_owned()
        } else {
            words.small_package.to_owned()
        }
    } else if mentions(words.meat) {
        format!(
            "~{}{}",
            round_up_to(grams, config.meat_step_g),
            words.grams_suffix
        )
    } else if mentions(words.fish) {
        format!(
            "~{}{}",
            round_up_to(grams, config.fish_step_g),
            words.grams_suffix
        )
    } else if mentions(words.fruit) {
        format!(
            "{} {}",
            (grams / config.fruit_piece_g).ceil(),
            words.pieces_suffix
        )
    } else if mentions(words.root_vegetable) {
        if grams > config.root_vegetable_medium_threshold_g {
            words.medium_piece.to_owned()
        } else {
            words.small_piece.to_owned()
        }
    } else {
        format!(
            "~{}{}",
            round_up_to(grams, config.default_step_g),
            words.grams_suffix
        )
    }
}
