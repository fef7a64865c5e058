// ABOUTME: Core types and constants for the Fit Buddy body-composition calculator
// ABOUTME: Foundation crate with error handling, unit constants, and request/result models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

#![deny(unsafe_code)]

//! # Fit Buddy Core
//!
//! Foundation crate providing the value types shared by the calculation
//! engines in `fitbuddy-intelligence` and by the command-line front end.
//! Nothing in here performs a calculation; it only describes inputs,
//! outputs, and the ways a calculation can fail.
//!
//! ## Modules
//!
//! - **errors**: `CalculationError`, `ErrorKind`, and `MeasurementField`
//! - **constants**: Unit conversion factors, BMI band, and formula coefficients
//! - **models**: Gender, unit tags, raw measurement inputs, and result structs

/// Calculation error taxonomy named by offending field
pub mod errors;

/// Unit conversion factors and physiological constants organized by domain
pub mod constants;

/// Request-scoped value types (inputs, unit tags, results)
pub mod models;

pub use errors::{CalculationError, CalculationResult, ErrorKind, MeasurementField};
