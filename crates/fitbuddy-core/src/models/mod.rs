// ABOUTME: Request-scoped value types for body-composition calculations
// ABOUTME: Gender, unit tags, raw measurement inputs, and calculation results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

//! Data models
//!
//! Every type here is built at the start of one calculation and dropped when
//! the result is returned. Nothing carries identity or survives across calls.

/// Biological sex used to select formula coefficients
pub mod gender;
/// Calculation results
pub mod results;
/// Unit tags and raw measurement inputs
pub mod units;

pub use gender::Gender;
pub use results::{
    BmiResult, BmrResult, BodyFatMethod, BodyFatResult, NormalRangeResult, NormalizedProfile,
};
pub use units::{CircumferenceFamily, HeightInput, LengthUnit, WeightInput, WeightUnit};
