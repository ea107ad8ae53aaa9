// ABOUTME: Menu assembler orchestrating eligibility, selection and nutrition per day or week
// ABOUTME: Builds DailyMenu values and isolates per-day failures in weekly plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Menu Assembler
//!
//! Daily menus are dated today. Weekly plans cover today and the six following
//! days; a day that cannot be generated becomes an error marker while the rest
//! of the week is still produced.
//!
//! Weekly generation draws one sub-seed per day from the caller's generator in
//! day order, then builds the days in parallel, each with its own
//! [`ChaCha8Rng`]. The same caller seed therefore always yields the same week.

use super::eligibility::EligibleSet;
use super::nutrition::{daily_total, recipe_nutrition, resolve_ingredients};
use super::selector::{MealSelector, Selection};
use crate::catalog::Catalog;
use crate::config::MenuEngineConfig;
use chrono::{Datelike, Days, Local, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{info, warn};
use weaning_core::constants::menu::DAYS_PER_WEEK;
use weaning_core::errors::MenuError;
use weaning_core::models::{
    CatalogLanguage, ChildProfile, DailyMenu, GeneratedMenu, GenerationSettings, Meal,
    MenuContent, MenuPeriod,
};

/// Error marker text for a day of a weekly plan that could not be generated
#[must_use]
pub const fn failed_day_message(language: CatalogLanguage) -> &'static str {
    match language {
        CatalogLanguage::En => "Could not generate a menu for this day",
        CatalogLanguage::Ru => "Не удалось сгенерировать меню для этого дня",
    }
}

/// Generates daily and weekly menus from a catalog
#[derive(Debug, Clone, Copy)]
pub struct MenuGenerator<'a> {
    catalog: &'a Catalog,
    config: &'a MenuEngineConfig,
    today: NaiveDate,
}

impl<'a> MenuGenerator<'a> {
    /// Create a generator using the local calendar date as "today"
    #[must_use]
    pub fn new(catalog: &'a Catalog, config: &'a MenuEngineConfig) -> Self {
        Self {
            catalog,
            config,
            today: Local::now().date_naive(),
        }
    }

    /// Pin "today", for reproducible dates and ages
    #[must_use]
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Date treated as today
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Generate one day of five meals, dated today
    ///
    /// `settings.period` and `settings.start_date` are not consulted.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InsufficientRecipes`] when no recipe is eligible.
    pub fn generate_daily_menu<R>(
        &self,
        profile: &ChildProfile,
        settings: &GenerationSettings,
        rng: &mut R,
    ) -> Result<DailyMenu, MenuError>
    where
        R: Rng + ?Sized,
    {
        let menu = self.build_day(profile, settings, self.today, None, rng)?;
        if let Some(total) = menu.total_nutrition() {
            info!(
                profile_id = %profile.id,
                date = %menu.date,
                kcal = total.kcal,
                "Generated daily menu"
            );
        }
        Ok(menu)
    }

    /// Generate seven days starting today with the same settings every day
    pub fn generate_weekly_menu<R>(
        &self,
        profile: &ChildProfile,
        settings: &GenerationSettings,
        rng: &mut R,
    ) -> Vec<DailyMenu>
    where
        R: Rng + ?Sized,
    {
        self.generate_weekly_menu_scheduled(profile, |_| settings.clone(), rng)
    }

    /// Generate seven days starting today, asking `schedule` for each day's settings
    ///
    /// `schedule` receives the day offset (0 is today). Days that fail are
    /// replaced by error markers; the plan always has seven entries.
    pub fn generate_weekly_menu_scheduled<R, F>(
        &self,
        profile: &ChildProfile,
        schedule: F,
        rng: &mut R,
    ) -> Vec<DailyMenu>
    where
        R: Rng + ?Sized,
        F: Fn(u32) -> GenerationSettings + Sync,
    {
        let seeds: Vec<(u32, u64)> = (0..DAYS_PER_WEEK).map(|day| (day, rng.gen())).collect();
        let language = self.catalog.language();

        let days: Vec<DailyMenu> = seeds
            .into_par_iter()
            .map(|(offset, seed)| {
                let mut day_rng = ChaCha8Rng::seed_from_u64(seed);
                let date = self
                    .today
                    .checked_add_days(Days::new(u64::from(offset)))
                    .unwrap_or(NaiveDate::MAX);
                let day_name = language.weekday_name(date.weekday()).to_owned();
                let settings = schedule(offset);

                self.build_day(profile, &settings, date, Some(day_name.clone()), &mut day_rng)
                    .unwrap_or_else(|error| {
                        warn!(
                            profile_id = %profile.id,
                            day = offset,
                            date = %date,
                            error = %error,
                            "Day of weekly menu could not be generated"
                        );
                        DailyMenu {
                            date,
                            day_name: Some(day_name),
                            content: MenuContent::failed(failed_day_message(language)),
                        }
                    })
            })
            .collect();

        let failed = days.iter().filter(|day| day.is_failed()).count();
        info!(
            profile_id = %profile.id,
            start = %self.today,
            failed_days = failed,
            "Generated weekly menu"
        );
        days
    }

    /// Generate a plan of the length requested in `settings.period`
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InsufficientRecipes`] for a daily plan with no
    /// eligible recipe. Weekly plans never fail as a whole.
    pub fn generate<R>(
        &self,
        profile: &ChildProfile,
        settings: &GenerationSettings,
        rng: &mut R,
    ) -> Result<GeneratedMenu, MenuError>
    where
        R: Rng + ?Sized,
    {
        match settings.period {
            MenuPeriod::Day => self
                .generate_daily_menu(profile, settings, rng)
                .map(GeneratedMenu::Daily),
            MenuPeriod::Week => Ok(GeneratedMenu::Weekly(
                self.generate_weekly_menu(profile, settings, rng),
            )),
        }
    }

    fn build_day<R>(
        &self,
        profile: &ChildProfile,
        settings: &GenerationSettings,
        date: NaiveDate,
        day_name: Option<String>,
        rng: &mut R,
    ) -> Result<DailyMenu, MenuError>
    where
        R: Rng + ?Sized,
    {
        let age_months = profile.age_in_months(self.today);
        let eligible =
            EligibleSet::compute(self.catalog, profile, age_months, settings.avoid_new_products);
        if eligible.has_no_recipes() {
            return Err(MenuError::insufficient_recipes(profile.id.clone()));
        }

        let selector = MealSelector::new(self.catalog, &self.config.rotation);
        let selections = selector
            .select_day(eligible.recipes(), settings.strict_rotation, rng)
            .ok_or_else(|| MenuError::insufficient_recipes(profile.id.clone()))?;

        let meals: Vec<Meal> = selections
            .into_iter()
            .map(|selection| self.build_meal(selection))
            .collect();
        let total_nutrition = daily_total(&meals);

        Ok(DailyMenu {
            date,
            day_name,
            content: MenuContent::Ready {
                meals,
                total_nutrition,
            },
        })
    }

    fn build_meal(&self, selection: Selection<'_>) -> Meal {
        let recipe = selection.recipe;
        let nutrition = recipe_nutrition(recipe, self.catalog);
        Meal {
            slot: selection.slot,
            time_label: selection.slot.label(self.catalog.language()).to_owned(),
            recipe: recipe.clone(),
            ingredients: resolve_ingredients(recipe, self.catalog),
            nutrition: nutrition.totals,
            unresolved_products: nutrition.unresolved_products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_day_message_localized() {
        assert_eq!(
            failed_day_message(CatalogLanguage::Ru),
            "Не удалось сгенерировать меню для этого дня"
        );
        assert_eq!(
            failed_day_message(CatalogLanguage::En),
            "Could not generate a menu for this day"
        );
    }
}
