// ABOUTME: Body Mass Index and normal-band weight range calculations
// ABOUTME: Pure functions over already-normalized kilograms and meters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

//! BMI Engine
//!
//! `BMI = weight_kg / height_m²`
//!
//! The normal band defaults to `[18.5, 24.9]`. The weight range for a height
//! is the band multiplied by `height_m²`.

use crate::config::BmiConfig;
use crate::precision::round_report;
use fitbuddy_core::errors::{ensure_finite, ensure_positive, CalculationResult};
use fitbuddy_core::models::{BmiResult, NormalRangeResult};
use fitbuddy_core::MeasurementField;

/// Calculate unrounded BMI from kilograms and meters
///
/// # Errors
///
/// Returns `InvalidMeasurement` if weight or height is not finite and
/// positive, or if either is so extreme that the index leaves the `f64` range
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> CalculationResult<f64> {
    let weight_kg = ensure_positive(MeasurementField::Weight, weight_kg)?;
    let height_squared = squared_height(height_m)?;
    ensure_positive(MeasurementField::Weight, weight_kg / height_squared)
}

/// `height_m²`, rejected when it underflows to zero or overflows
fn squared_height(height_m: f64) -> CalculationResult<f64> {
    let height_m = ensure_positive(MeasurementField::Height, height_m)?;
    ensure_positive(MeasurementField::Height, height_m.powi(2))
}

/// Calculate BMI rounded for reporting
///
/// # Errors
///
/// Returns `InvalidMeasurement` if weight or height is not finite and positive
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> CalculationResult<BmiResult> {
    Ok(BmiResult {
        bmi: round_report(calculate_bmi(weight_kg, height_m)?),
    })
}

/// Calculate the weight range of the normal BMI band for a height
///
/// `midpoint_bmi` is the BMI at the mean of the two bound weights. Because
/// both bounds scale with `height_m²`, it reduces to the mean of the band
/// (21.7 for the default band) at every height.
///
/// # Errors
///
/// Returns `InvalidMeasurement` for height if it is not finite and positive
/// or the resulting weights leave the `f64` range
pub fn compute_normal_range(
    height_m: f64,
    config: &BmiConfig,
) -> CalculationResult<NormalRangeResult> {
    let height_squared = squared_height(height_m)?;

    let min_weight_kg =
        ensure_finite(MeasurementField::Height, config.normal_min * height_squared)?;
    let max_weight_kg =
        ensure_finite(MeasurementField::Height, config.normal_max * height_squared)?;
    let midpoint_weight_kg = (min_weight_kg + max_weight_kg) / 2.0;
    let midpoint_bmi =
        ensure_finite(MeasurementField::Height, midpoint_weight_kg / height_squared)?;

    Ok(NormalRangeResult {
        midpoint_bmi: round_report(midpoint_bmi),
        min_weight_kg: round_report(min_weight_kg),
        max_weight_kg: round_report(max_weight_kg),
    })
}
