// ABOUTME: Weaning CLI - command-line front end for the weaning menu engine
// ABOUTME: Generates menus and shopping lists, audits catalogs and summarizes profile exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Daily menu for a child profile, reproducible with a seed
//! weaning-cli menu daily --profile child.json --seed 42
//!
//! # Weekly menu using only products the child already knows
//! weaning-cli menu weekly --profile child.json --avoid-new-products
//!
//! # Shopping list for a week against a custom catalog
//! weaning-cli shopping --profile child.json --catalog catalog.json --period week
//!
//! # Report dangling product references in a catalog
//! weaning-cli catalog audit --catalog catalog.json
//!
//! # Age-group statistics for a profiles export
//! weaning-cli profiles stats --profiles baby-food-profiles.json
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use weaning_menu::errors::AppResult;
use weaning_menu::logging::{LogFormat, LoggingConfig};
use weaning_menu::models::MenuPeriod;

#[derive(Parser)]
#[command(
    name = "weaning-cli",
    about = "Weaning menu engine CLI",
    long_about = "Generates age-appropriate complementary feeding menus and shopping lists for infants."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    /// Generate menus even for children younger than six months
    #[arg(long, global = true)]
    allow_under_six_months: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Menu generation commands
    Menu {
        #[command(subcommand)]
        action: MenuCommand,
    },

    /// Generate a menu and print its consolidated shopping list
    Shopping {
        #[command(flatten)]
        generation: GenerationArgs,

        /// Plan length the list covers
        #[arg(long, value_enum, default_value = "week")]
        period: PeriodArg,
    },

    /// Catalog inspection commands
    Catalog {
        #[command(subcommand)]
        action: CatalogCommand,
    },

    /// Profile export commands
    Profiles {
        #[command(subcommand)]
        action: ProfilesCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum MenuCommand {
    /// Five meals for today
    Daily(GenerationArgs),

    /// Seven days starting today
    Weekly(GenerationArgs),
}

#[non_exhaustive]
#[derive(Subcommand)]
enum CatalogCommand {
    /// List dangling product references and recipes without a main ingredient
    Audit {
        /// Catalog JSON file (defaults to the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfilesCommand {
    /// Count profiles by age group
    Stats {
        /// Profiles export document
        #[arg(long)]
        profiles: PathBuf,
    },
}

/// Options shared by every command that generates a menu
#[derive(Args, Debug, Clone)]
pub struct GenerationArgs {
    /// Child profile JSON file
    #[arg(long)]
    pub profile: PathBuf,

    /// Catalog JSON file (defaults to the built-in catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Only use products the child has already tried
    #[arg(long)]
    pub avoid_new_products: bool,

    /// Allow main-ingredient categories to repeat within a day
    #[arg(long)]
    pub no_strict_rotation: bool,

    /// Seed for reproducible menus (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PeriodArg {
    Day,
    Week,
}

impl From<PeriodArg> for MenuPeriod {
    fn from(period: PeriodArg) -> Self {
        match period {
            PeriodArg::Day => Self::Day,
            PeriodArg::Week => Self::Week,
        }
    }
}

fn init_logging(cli: &Cli) {
    let mut config = LoggingConfig::from_env();
    if cli.verbose {
        config = config.with_level("debug");
    }
    if cli.json_logs {
        config = config.with_format(LogFormat::Json);
    }
    if let Err(e) = config.init() {
        eprintln!("Failed to initialize logging: {e}");
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let gate = helpers::AgeGate {
        allow_under_six_months: cli.allow_under_six_months,
    };

    match cli.command {
        Command::Menu { action } => match action {
            MenuCommand::Daily(args) => commands::menu::generate(&args, MenuPeriod::Day, gate),
            MenuCommand::Weekly(args) => commands::menu::generate(&args, MenuPeriod::Week, gate),
        },
        Command::Shopping { generation, period } => {
            commands::shopping::generate(&generation, period.into(), gate)
        }
        Command::Catalog { action } => match action {
            CatalogCommand::Audit { catalog } => commands::catalog::audit(catalog.as_deref()),
        },
        Command::Profiles { action } => match action {
            ProfilesCommand::Stats { profiles } => commands::profiles::stats(&profiles),
        },
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{e}");
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.exit_status()).unwrap_or(1))
        }
    }
}
