// ABOUTME: Main library entry point for the Fit Buddy body-composition calculator
// ABOUTME: Re-exports the calculation engines and hosts request parsing and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

#![deny(unsafe_code)]

//! # Fit Buddy
//!
//! Body-composition metrics from measurements whose units may be unknown.
//!
//! ## Features
//!
//! - **Unit inference**: kilograms vs pounds, centimeters vs inches, picked by magnitude
//! - **BMI**: index plus the normal weight band for a height
//! - **Body fat**: US Navy circumference method reconciled with a BMI-derived estimate
//! - **BMR**: Mifflin-St Jeor daily calorie needs
//!
//! ## Architecture
//!
//! - **`fitbuddy-core`**: error types, constants, and data models
//! - **`fitbuddy-intelligence`**: unit policies, engines, and configuration
//! - **[`requests`]**: tokenized arguments to typed requests and replies
//! - **[`logging`]**: tracing subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitbuddy::requests::{execute, parse_request, CommandKind};
//! use fitbuddy::BodyCompositionCalculator;
//!
//! let calculator = BodyCompositionCalculator::new();
//! let request = parse_request(CommandKind::Bmi, &["70", "170"])?;
//! let reply = execute(&request, &calculator)?;
//! println!("{reply}");
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Structured logging configuration
pub mod logging;

/// Request parsing and execution
pub mod requests;

pub use fitbuddy_core as core;
pub use fitbuddy_intelligence as intelligence;

pub use fitbuddy_core::models::{
    BmiResult, BmrResult, BodyFatMethod, BodyFatResult, CircumferenceFamily, Gender, HeightInput,
    NormalRangeResult, WeightInput,
};
pub use fitbuddy_core::{CalculationError, CalculationResult, ErrorKind, MeasurementField};
pub use fitbuddy_intelligence::{
    BodyCompositionCalculator, BodyCompositionConfig, BodyFatParams, ConfigError, FixedUnitPolicy,
    MagnitudeUnitPolicy, UnitPolicy,
};
