// ABOUTME: Fit Buddy CLI - body-composition calculations from the command line
// ABOUTME: Parses positional measurements, runs the calculator, and prints text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors
//!
//! Usage:
//! ```bash
//! # BMI from kilograms and centimeters (units inferred from magnitude)
//! fitbuddy-cli bmi 70 170
//!
//! # BMI from pounds, feet and inches
//! fitbuddy-cli bmi 154 5 7
//!
//! # Healthy weight range for a height
//! fitbuddy-cli ideal-weight 180
//!
//! # Body fat percentage (hip required for F)
//! fitbuddy-cli body-fat 30 178 80 38 85 M
//! fitbuddy-cli body-fat 28 165 60 32 70 F 95
//!
//! # Basal metabolic rate
//! fitbuddy-cli calories 70 175 25 M
//!
//! # Force units instead of inferring them, print JSON
//! fitbuddy-cli --units imperial --json bmi 154 67
//! ```

mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use fitbuddy::logging::LoggingConfig;
use fitbuddy::requests::{execute, parse_request, CommandKind};
use fitbuddy::{BodyCompositionCalculator, BodyCompositionConfig, FixedUnitPolicy, UnitPolicy};
use tracing::{debug, info};

use helpers::display::{display_json, display_reply};

#[derive(Parser)]
#[command(
    name = "fitbuddy-cli",
    about = "Fit Buddy body-composition calculator",
    long_about = "Computes BMI, healthy weight range, body fat percentage, and basal metabolic rate. \
                  Units are inferred from magnitudes unless --units is given."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// How to interpret the units of raw numbers
    #[arg(long, global = true, value_enum, default_value_t = UnitsArg::Auto)]
    units: UnitsArg,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging and show intermediate estimates
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum UnitsArg {
    /// Infer units from magnitudes
    Auto,
    /// Kilograms and centimeters
    Metric,
    /// Pounds and inches
    Imperial,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Body Mass Index: <weight> <height> or <pounds> <feet> <inches>
    Bmi {
        #[arg(allow_hyphen_values = true, num_args = 2..=3)]
        args: Vec<String>,
    },

    /// Healthy weight range: <height> or <feet> <inches>
    IdealWeight {
        #[arg(allow_hyphen_values = true, num_args = 1..=2)]
        args: Vec<String>,
    },

    /// Body fat percentage: <age> <height> <weight> <neck> <waist> <gender> [hip]
    BodyFat {
        #[arg(allow_hyphen_values = true, num_args = 6..=7)]
        args: Vec<String>,
    },

    /// Basal metabolic rate: <weight> <height> <age> <gender>
    Calories {
        #[arg(allow_hyphen_values = true, num_args = 4)]
        args: Vec<String>,
    },
}

impl Command {
    fn split(&self) -> (CommandKind, &[String]) {
        match self {
            Self::Bmi { args } => (CommandKind::Bmi, args.as_slice()),
            Self::IdealWeight { args } => (CommandKind::IdealWeight, args.as_slice()),
            Self::BodyFat { args } => (CommandKind::BodyFat, args.as_slice()),
            Self::Calories { args } => (CommandKind::Calories, args.as_slice()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    info!("Fit Buddy CLI");

    let config = BodyCompositionConfig::global().clone();
    match cli.units {
        UnitsArg::Auto => run(&cli, &BodyCompositionCalculator::from_config(config)),
        UnitsArg::Metric => run(
            &cli,
            &BodyCompositionCalculator::with_policy(FixedUnitPolicy::metric(), config),
        ),
        UnitsArg::Imperial => run(
            &cli,
            &BodyCompositionCalculator::with_policy(FixedUnitPolicy::imperial(), config),
        ),
    }
}

fn run<P: UnitPolicy>(cli: &Cli, calculator: &BodyCompositionCalculator<P>) -> Result<()> {
    let (kind, args) = cli.command.split();
    debug!(command = kind.name(), policy = calculator.policy().name(), "Parsing request");

    let request = parse_request(kind, args)?;
    let reply = execute(&request, calculator)?;

    if cli.json {
        display_json(&reply)?;
    } else {
        display_reply(&reply, cli.verbose);
    }
    Ok(())
}
