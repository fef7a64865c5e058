// ABOUTME: Tests for basal metabolic rate through the calculator and the raw equation
// ABOUTME: Covers male/female constants, unit inference on inputs, and rounding to two decimals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitbuddy::intelligence::config::BmrConfig;
use fitbuddy::intelligence::nutrition::calculate_mifflin_st_jeor;
use fitbuddy::{ErrorKind, Gender, HeightInput, MeasurementField, WeightInput};

mod common;

use common::assert_close;

// ============================================================================
// BMR CALCULATION TESTS - Mifflin-St Jeor Formula
// ============================================================================

#[test]
fn test_mifflin_st_jeor_male_typical() {
    common::init_test_logging();
    let config = BmrConfig::default();

    // Expected: 10 * 75 + 6.25 * 180 - 5 * 30 + 5 = 750 + 1125 - 150 + 5 = 1730
    let bmr = calculate_mifflin_st_jeor(75.0, 180.0, 30, Gender::Male, &config).unwrap();
    assert_close(bmr, 1730.0, 1e-9);
}

#[test]
fn test_mifflin_st_jeor_female_typical() {
    let config = BmrConfig::default();

    // Expected: 10 * 60 + 6.25 * 165 - 5 * 30 - 161 = 600 + 1031.25 - 150 - 161 = 1320.25
    let bmr = calculate_mifflin_st_jeor(60.0, 165.0, 30, Gender::Female, &config).unwrap();
    assert_close(bmr, 1320.25, 1e-9);
}

#[test]
fn test_mifflin_st_jeor_gender_gap() {
    let config = BmrConfig::default();

    let male = calculate_mifflin_st_jeor(70.0, 175.0, 40, Gender::Male, &config).unwrap();
    let female = calculate_mifflin_st_jeor(70.0, 175.0, 40, Gender::Female, &config).unwrap();
    assert_close(male - female, 166.0, 1e-9);
}

#[test]
fn test_mifflin_st_jeor_rejects_zero_weight() {
    let config = BmrConfig::default();

    let error = calculate_mifflin_st_jeor(0.0, 175.0, 25, Gender::Male, &config).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidMeasurement);
    assert_eq!(error.field(), Some(MeasurementField::Weight));
}

#[test]
fn test_daily_calories_metric() {
    let calculator = common::default_calculator();

    let result = calculator
        .daily_calories(70.0, 175.0, 25, Gender::Male)
        .unwrap();
    assert_close(result.bmr_kcal, 1673.75, 1e-9);
}

#[test]
fn test_daily_calories_imperial_inputs() {
    let calculator = common::default_calculator();

    // 154 lb, 5'9" (175.26 cm)
    let result = calculator
        .daily_calories(
            WeightInput::Pounds(154.0),
            HeightInput::FeetInches {
                feet: 5.0,
                inches: 9.0,
            },
            25,
            Gender::Female,
        )
        .unwrap();
    assert_close(result.bmr_kcal, 1507.91, 1e-9);
}

#[test]
fn test_daily_calories_rejects_bad_height() {
    let calculator = common::default_calculator();

    let error = calculator
        .daily_calories(70.0, f64::NAN, 25, Gender::Male)
        .unwrap_err();
    assert_eq!(error.field(), Some(MeasurementField::Height));
}

#[test]
fn test_daily_calories_overflow_is_invalid() {
    let calculator = common::default_calculator();

    // Read as pounds, 10 x weight_kg exceeds f64::MAX
    let error = calculator
        .daily_calories(1e308, 175.0, 25, Gender::Male)
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidMeasurement);
    assert_eq!(error.field(), Some(MeasurementField::Weight));
}
