// ABOUTME: Basal metabolic rate using the Mifflin-St Jeor equation
// ABOUTME: Backs the daily calorie command alongside the body-composition engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

//! Nutrition Calculator Module
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::BmrConfig;
use fitbuddy_core::errors::{ensure_finite, ensure_positive, CalculationResult};
use fitbuddy_core::models::Gender;
use fitbuddy_core::MeasurementField;

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age` - Age in years
/// * `gender` - Male or Female
/// * `config` - BMR configuration with formula coefficients
///
/// # Errors
///
/// Returns `InvalidMeasurement` if weight or height is not finite and
/// positive, or if the sum overflows
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> CalculationResult<f64> {
    let weight_kg = ensure_positive(MeasurementField::Weight, weight_kg)?;
    let height_cm = ensure_positive(MeasurementField::Height, height_cm)?;

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    ensure_finite(
        MeasurementField::Weight,
        weight_component + height_component + age_component + gender_constant,
    )
}
