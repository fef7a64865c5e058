// ABOUTME: Body-composition engines for the Fit Buddy calculator
// ABOUTME: Unit inference, BMI, body fat reconciliation, and BMR behind one facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

#![deny(unsafe_code)]

//! # Fit Buddy Intelligence
//!
//! Pure, synchronous calculation engines. Data flows one way for a request:
//! raw numbers go through the [`units`] normalizer, then into [`bmi`],
//! [`body_fat`] or [`nutrition`], and come back as a rounded result.
//! No state survives between calls.

/// BMI and normal weight range
pub mod bmi;

/// Circumference and BMI-derived body fat estimation
pub mod body_fat;

/// Facade binding a unit policy to a configuration
pub mod calculator;

/// Thresholds and coefficients with environment overrides
pub mod config;

/// Basal metabolic rate
pub mod nutrition;

/// Rounding of reported values
pub mod precision;

/// Unit policies and normalization
pub mod units;

pub use body_fat::BodyFatParams;
pub use calculator::{bmi, bmi_and_normal_range, body_fat_percentage, BodyCompositionCalculator};
pub use config::{BodyCompositionConfig, ConfigError};
pub use units::{FixedUnitPolicy, MagnitudeUnitPolicy, UnitPolicy};
