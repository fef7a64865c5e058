// ABOUTME: Tests for body fat percentage reconciliation between circumference and BMI estimates
// ABOUTME: Covers both genders, both coefficient families, lean mass, and every error path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors
//! Body fat engine tests
//!
//! - Female and male circumference estimates in the centimeter family
//! - Inch-family selection from the neck measurement
//! - BMI-derived estimate winning the reconciliation
//! - Missing hip, unknown gender, and logarithm-domain failures

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitbuddy::intelligence::body_fat::{calculate_body_fat, normalize_profile};
use fitbuddy::intelligence::config::BodyFatConfig;
use fitbuddy::{
    BodyFatMethod, BodyFatParams, CalculationError, CircumferenceFamily, ErrorKind, Gender,
    MagnitudeUnitPolicy, MeasurementField,
};

mod common;

use common::assert_close;

fn male_params() -> BodyFatParams {
    BodyFatParams {
        age: 30,
        height: 178.0,
        weight: 80.0,
        neck: 38.0,
        waist: 85.0,
        gender: Gender::Male,
        hip: None,
    }
}

// ============================================================================
// CIRCUMFERENCE METHOD
// ============================================================================

#[test]
fn test_female_regression_value() {
    let calculator = common::default_calculator();

    let result = calculator
        .body_fat_percentage(25, 177.8, 70.0, 50.0, 96.0, "F", Some(92.0))
        .unwrap();

    assert_close(result.percentage, 24.1, 1e-9);
    assert_close(result.navy_percentage, 24.1, 1e-9);
    assert_close(result.bmi_percentage, 26.9, 1e-9);
    assert_eq!(result.method, BodyFatMethod::Circumference);
    assert_eq!(result.family, CircumferenceFamily::Centimeters);
    assert_close(result.lean_mass_kg, 53.1, 1e-9);
}

#[test]
fn test_male_centimeter_family() {
    let calculator = common::default_calculator();

    let result = calculator.body_fat(&male_params()).unwrap();

    assert_close(result.percentage, 16.4, 1e-9);
    assert_close(result.bmi_percentage, 21.0, 1e-9);
    assert_eq!(result.method, BodyFatMethod::Circumference);
    assert_close(result.lean_mass_kg, 66.9, 1e-9);
}

#[test]
fn test_typed_female_params_require_hip() {
    let calculator = common::default_calculator();

    let params = BodyFatParams {
        gender: Gender::Female,
        ..male_params()
    };
    let error = calculator.body_fat(&params).unwrap_err();
    assert_eq!(
        error,
        CalculationError::missing_parameter(MeasurementField::Hip)
    );
}

// ============================================================================
// RECONCILIATION
// ============================================================================

#[test]
fn test_bmi_derived_estimate_wins_when_lower() {
    let calculator = common::default_calculator();

    // Lean build with a large waist-to-neck gap
    let result = calculator
        .body_fat_percentage(20, 180.0, 60.0, 30.0, 100.0, "M", None)
        .unwrap();

    assert_eq!(result.method, BodyFatMethod::BmiDerived);
    assert_close(result.percentage, 10.6, 1e-9);
    assert_close(result.navy_percentage, 31.1, 1e-9);
}

#[test]
fn test_inch_family_selected_from_neck() {
    let calculator = common::default_calculator();

    let result = calculator
        .body_fat_percentage(30, 70.0, 80.0, 100.0, 140.0, "M", None)
        .unwrap();

    assert_eq!(result.family, CircumferenceFamily::Inches);
    assert_close(result.navy_percentage, 45.3, 1e-9);
    assert_close(result.bmi_percentage, 21.1, 1e-9);
    assert_close(result.percentage, 21.1, 1e-9);
}

#[test]
fn test_result_never_exceeds_bmi_estimate() {
    let calculator = common::default_calculator();

    let cases = [
        (25, 177.8, 70.0, 50.0, 96.0, "F", Some(92.0)),
        (28, 165.0, 60.0, 32.0, 70.0, "F", Some(95.0)),
        (30, 178.0, 80.0, 38.0, 85.0, "M", None),
        (40, 180.0, 90.0, 40.0, 100.0, "M", None),
        (20, 180.0, 60.0, 30.0, 100.0, "M", None),
        (30, 65.0, 60.0, 100.0, 120.0, "F", Some(110.0)),
    ];

    for (age, height, weight, neck, waist, gender, hip) in cases {
        let result = calculator
            .body_fat_percentage(age, height, weight, neck, waist, gender, hip)
            .unwrap();
        assert!(
            result.percentage <= result.bmi_percentage,
            "{} > {}",
            result.percentage,
            result.bmi_percentage
        );
        assert!(result.percentage <= result.navy_percentage);
    }
}

#[test]
fn test_custom_bmi_coefficients_shift_estimate() {
    let policy = MagnitudeUnitPolicy::default();
    let config = BodyFatConfig {
        male_offset: 0.0,
        ..BodyFatConfig::default()
    };

    let result = calculate_body_fat(&male_params(), &policy, &config).unwrap();
    assert_close(result.bmi_percentage, 37.2, 1e-9);
    assert_eq!(result.method, BodyFatMethod::Circumference);
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_missing_hip_for_female() {
    let calculator = common::default_calculator();

    let error = calculator
        .body_fat_percentage(25, 177.8, 70.0, 50.0, 96.0, "F", None)
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::MissingParameter);
    assert_eq!(error.field(), Some(MeasurementField::Hip));
}

#[test]
fn test_unknown_gender() {
    let calculator = common::default_calculator();

    let error = calculator
        .body_fat_percentage(25, 177.8, 70.0, 50.0, 96.0, "X", Some(92.0))
        .unwrap_err();
    assert_eq!(error, CalculationError::invalid_gender("X"));
    assert_eq!(error.kind(), ErrorKind::InvalidGender);
}

#[test]
fn test_gender_is_case_insensitive() {
    let calculator = common::default_calculator();

    let upper = calculator
        .body_fat_percentage(30, 178.0, 80.0, 38.0, 85.0, "M", None)
        .unwrap();
    let lower = calculator
        .body_fat_percentage(30, 178.0, 80.0, 38.0, 85.0, "male", None)
        .unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn test_waist_not_above_neck_is_invalid() {
    let calculator = common::default_calculator();

    for waist in [38.0, 30.0] {
        let params = BodyFatParams {
            waist,
            ..male_params()
        };
        let error = calculator.body_fat(&params).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidMeasurement);
        assert_eq!(error.field(), Some(MeasurementField::Waist));
    }
}

#[test]
fn test_non_positive_inputs_name_the_field() {
    let calculator = common::default_calculator();

    let cases = [
        (
            BodyFatParams {
                weight: 0.0,
                ..male_params()
            },
            MeasurementField::Weight,
        ),
        (
            BodyFatParams {
                height: -178.0,
                ..male_params()
            },
            MeasurementField::Height,
        ),
        (
            BodyFatParams {
                neck: f64::NAN,
                ..male_params()
            },
            MeasurementField::Neck,
        ),
        (
            BodyFatParams {
                gender: Gender::Female,
                hip: Some(0.0),
                ..male_params()
            },
            MeasurementField::Hip,
        ),
    ];

    for (params, field) in cases {
        let error = calculator.body_fat(&params).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidMeasurement);
        assert_eq!(error.field(), Some(field));
    }
}

#[test]
fn test_normalize_profile_keeps_circumferences_raw() {
    let policy = MagnitudeUnitPolicy::default();

    let profile = normalize_profile(&male_params(), &policy).unwrap();
    assert_close(profile.height_m, 1.78, 1e-12);
    assert_close(profile.neck, 38.0, 1e-12);
    assert_close(profile.waist, 85.0, 1e-12);
    assert_eq!(profile.hip, None);
    assert_eq!(profile.family, CircumferenceFamily::Centimeters);
}

#[test]
fn test_module_level_body_fat_percentage() {
    let percentage =
        fitbuddy::intelligence::body_fat_percentage(25, 177.8, 70.0, 50.0, 96.0, "F", Some(92.0))
            .unwrap();
    assert_close(percentage, 24.1, 1e-9);
}

// ============================================================================
// FEMALE EQUATIONS
// ============================================================================

#[test]
fn test_female_inch_family_value() {
    let calculator = common::default_calculator();

    // 163.205 x log10(120 + 110 - 100) - 97.684 x log10(65) - 78.387
    let result = calculator
        .body_fat_percentage(30, 65.0, 60.0, 100.0, 120.0, "F", Some(110.0))
        .unwrap();

    assert_eq!(result.family, CircumferenceFamily::Inches);
    assert_close(result.navy_percentage, 89.5, 1e-9);
    assert_close(result.bmi_percentage, 27.9, 1e-9);
    assert_eq!(result.method, BodyFatMethod::BmiDerived);
}

#[test]
fn test_female_girth_not_positive_is_invalid() {
    let calculator = common::default_calculator();

    let error = calculator
        .body_fat_percentage(30, 165.0, 60.0, 99.0, 40.0, "F", Some(50.0))
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidMeasurement);
    assert_eq!(error.field(), Some(MeasurementField::Waist));
}

#[test]
fn test_female_non_positive_density_is_invalid() {
    let calculator = common::default_calculator();

    // log10(200_000 + 1 - 50) is large enough to push the density below zero
    let error = calculator
        .body_fat_percentage(30, 178.0, 60.0, 50.0, 200_000.0, "F", Some(1.0))
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidMeasurement);
    assert_eq!(error.field(), Some(MeasurementField::Waist));
}

// ============================================================================
// EXTREME MAGNITUDES
// ============================================================================

#[test]
fn test_huge_weight_yields_finite_fields() {
    let calculator = common::default_calculator();

    let result = calculator
        .body_fat_percentage(30, 178.0, 1e308, 38.0, 85.0, "M", None)
        .unwrap();

    for value in [
        result.percentage,
        result.navy_percentage,
        result.bmi_percentage,
        result.lean_mass_kg,
    ] {
        assert!(value.is_finite(), "non-finite field in {result:?}");
    }
    assert_eq!(result.method, BodyFatMethod::Circumference);
}

#[test]
fn test_vanishing_height_is_invalid() {
    let calculator = common::default_calculator();

    let error = calculator
        .body_fat_percentage(30, 1e-160, 80.0, 38.0, 85.0, "M", None)
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidMeasurement);
    assert_eq!(error.field(), Some(MeasurementField::Height));
}
