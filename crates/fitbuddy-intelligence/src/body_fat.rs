// ABOUTME: Body fat percentage from circumference ("Navy") and BMI-derived estimates
// ABOUTME: Gender- and unit-family-specific coefficient tables, reconciled by taking the lower estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

//! Body Fat Engine
//!
//! Two independent estimates are computed and the lower one is reported.
//!
//! ## Circumference method
//!
//! The coefficient family is selected from the neck measurement alone;
//! waist and hip are assumed to be in the same unit as the neck.
//!
//! ```text
//! Male,   cm: 495 / (1.0324  - 0.19077 x log10(waist - neck)       + 0.15456 x log10(height)) - 450
//! Male,   in: 86.010  x log10(waist - neck)       - 70.041 x log10(height) + 36.76
//! Female, cm: 495 / (1.29579 - 0.35004 x log10(waist + hip - neck) + 0.22100 x log10(height)) - 450
//! Female, in: 163.205 x log10(waist + hip - neck) - 97.684 x log10(height) - 78.387
//! ```
//!
//! ## BMI-derived method
//!
//! ```text
//! 1.20 x BMI + 0.23 x age - (16.2 male | 5.4 female)
//! ```
//!
//! # References
//!
//! - Hodgdon, J.A. & Beckett, M.B. (1984). Prediction of percent body fat for
//!   U.S. Navy men and women from body circumferences and height.
//!   Naval Health Research Center, Report No. 84-11 / 84-29.
//! - Deurenberg, P., Weststrate, J.A. & Seidell, J.C. (1991). Body mass index
//!   as a measure of body fatness. *British Journal of Nutrition*, 65(2), 105-114.

use crate::bmi::calculate_bmi;
use crate::config::BodyFatConfig;
use crate::precision::round_report;
use crate::units::{circumference_family, normalize_height, normalize_weight, UnitPolicy};
use fitbuddy_core::constants::body_fat::{SIRI_NUMERATOR, SIRI_OFFSET};
use fitbuddy_core::errors::{ensure_finite, ensure_positive, CalculationError, CalculationResult};
use fitbuddy_core::models::{
    BodyFatMethod, BodyFatResult, CircumferenceFamily, Gender, HeightInput, NormalizedProfile,
    WeightInput,
};
use fitbuddy_core::MeasurementField;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw body-fat inputs exactly as the caller supplied them
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyFatParams {
    /// Age in years
    pub age: u32,
    /// Height, cm or inches (unit inferred)
    pub height: f64,
    /// Weight, kg or pounds (unit inferred)
    pub weight: f64,
    /// Neck circumference; its magnitude selects the coefficient family
    pub neck: f64,
    /// Waist circumference, same unit as neck
    pub waist: f64,
    /// Gender
    pub gender: Gender,
    /// Hip circumference, same unit as neck; required for females
    pub hip: Option<f64>,
}

/// One circumference equation
#[derive(Debug, Clone, Copy, PartialEq)]
enum NavyEquation {
    /// `495 / (intercept - girth_coef x log10(girth) + height_coef x log10(height)) - 450`
    SiriDensity {
        intercept: f64,
        girth_coef: f64,
        height_coef: f64,
    },
    /// `girth_coef x log10(girth) - height_coef x log10(height) + intercept`
    LogLinear {
        girth_coef: f64,
        height_coef: f64,
        intercept: f64,
    },
}

const MALE_CENTIMETERS: NavyEquation = NavyEquation::SiriDensity {
    intercept: 1.0324,
    girth_coef: 0.190_77,
    height_coef: 0.154_56,
};

const MALE_INCHES: NavyEquation = NavyEquation::LogLinear {
    girth_coef: 86.010,
    height_coef: 70.041,
    intercept: 36.76,
};

const FEMALE_CENTIMETERS: NavyEquation = NavyEquation::SiriDensity {
    intercept: 1.295_79,
    girth_coef: 0.350_04,
    height_coef: 0.221_00,
};

const FEMALE_INCHES: NavyEquation = NavyEquation::LogLinear {
    girth_coef: 163.205,
    height_coef: 97.684,
    intercept: -78.387,
};

impl NavyEquation {
    /// Coefficient table for a gender and unit family
    const fn for_profile(gender: Gender, family: CircumferenceFamily) -> Self {
        match (gender, family) {
            (Gender::Male, CircumferenceFamily::Centimeters) => MALE_CENTIMETERS,
            (Gender::Male, CircumferenceFamily::Inches) => MALE_INCHES,
            (Gender::Female, CircumferenceFamily::Centimeters) => FEMALE_CENTIMETERS,
            (Gender::Female, CircumferenceFamily::Inches) => FEMALE_INCHES,
        }
    }

    /// Evaluate with a positive girth and a positive height
    fn evaluate(self, girth: f64, height: f64) -> CalculationResult<f64> {
        let body_fat = match self {
            Self::SiriDensity {
                intercept,
                girth_coef,
                height_coef,
            } => {
                let density = height_coef.mul_add(
                    height.log10(),
                    girth_coef.mul_add(-girth.log10(), intercept),
                );
                if !density.is_finite() || density <= 0.0 {
                    return Err(CalculationError::invalid_measurement(
                        MeasurementField::Waist,
                        format!("circumferences give a non-positive body density ({density:.4})"),
                    ));
                }
                SIRI_NUMERATOR / density - SIRI_OFFSET
            }
            Self::LogLinear {
                girth_coef,
                height_coef,
                intercept,
            } => height_coef.mul_add(
                -height.log10(),
                girth_coef.mul_add(girth.log10(), intercept),
            ),
        };

        if body_fat.is_finite() {
            Ok(body_fat)
        } else {
            Err(CalculationError::invalid_measurement(
                MeasurementField::Waist,
                "circumference formula produced a non-finite result",
            ))
        }
    }
}

/// Height value fed into the circumference equations
///
/// The equations were fitted against height in the same unit as the
/// circumferences, so they take the caller's raw height number. This is
/// not the normalized height used for BMI; do not substitute one for the other.
const fn circumference_calibration_height(raw_height: f64) -> f64 {
    raw_height
}

/// Girth term of the circumference equation
///
/// Males: `waist - neck`. Females: `waist + hip - neck`.
fn circumference_girth(profile: &NormalizedProfile) -> CalculationResult<f64> {
    let girth = match (profile.gender, profile.hip) {
        (Gender::Male, _) => profile.waist - profile.neck,
        (Gender::Female, Some(hip)) => profile.waist + hip - profile.neck,
        (Gender::Female, None) => {
            return Err(CalculationError::missing_parameter(MeasurementField::Hip))
        }
    };

    if girth > 0.0 {
        Ok(girth)
    } else {
        let expression = match profile.gender {
            Gender::Male => "waist - neck",
            Gender::Female => "waist + hip - neck",
        };
        Err(CalculationError::invalid_measurement(
            MeasurementField::Waist,
            format!("{expression} must be positive, got {girth}"),
        ))
    }
}

/// Validate raw inputs and resolve their units
///
/// Checks run in order: hip presence for females, weight, height, neck,
/// waist, hip. The first failure is returned.
///
/// # Errors
///
/// - `MissingParameter` (hip) for a female without a hip measurement
/// - `InvalidMeasurement` naming the first non-finite or non-positive field
pub fn normalize_profile(
    params: &BodyFatParams,
    policy: &dyn UnitPolicy,
) -> CalculationResult<NormalizedProfile> {
    let hip = match (params.gender, params.hip) {
        (Gender::Female, None) => {
            return Err(CalculationError::missing_parameter(MeasurementField::Hip))
        }
        (Gender::Female, Some(hip)) => Some(hip),
        (Gender::Male, _) => None,
    };

    let weight_kg = normalize_weight(WeightInput::Scalar(params.weight), policy)?;
    let height_m = normalize_height(HeightInput::Scalar(params.height), policy)?;
    let family = circumference_family(params.neck, policy)?;
    let waist = ensure_positive(MeasurementField::Waist, params.waist)?;
    let hip = hip
        .map(|value| ensure_positive(MeasurementField::Hip, value))
        .transpose()?;

    Ok(NormalizedProfile {
        weight_kg,
        height_m,
        neck: params.neck,
        waist,
        hip,
        age_years: params.age,
        gender: params.gender,
        family,
    })
}

/// Circumference-based estimate (unrounded)
///
/// `raw_height` must be the caller's unnormalized height.
///
/// # Errors
///
/// Returns `InvalidMeasurement` if the girth term is not positive, the
/// density term is not positive, or the result is not finite
pub fn calculate_navy_body_fat(
    profile: &NormalizedProfile,
    raw_height: f64,
) -> CalculationResult<f64> {
    let height = ensure_positive(
        MeasurementField::Height,
        circumference_calibration_height(raw_height),
    )?;
    let girth = circumference_girth(profile)?;
    NavyEquation::for_profile(profile.gender, profile.family).evaluate(girth, height)
}

/// BMI-derived estimate (unrounded)
#[must_use]
pub fn calculate_bmi_body_fat(bmi: f64, age: u32, gender: Gender, config: &BodyFatConfig) -> f64 {
    let offset = match gender {
        Gender::Male => config.male_offset,
        Gender::Female => config.female_offset,
    };
    config
        .age_coef
        .mul_add(f64::from(age), config.bmi_coef * bmi)
        - offset
}

/// Calculate body fat percentage, reporting the lower of the two estimates
///
/// # Errors
///
/// - `MissingParameter` if a female profile has no hip measurement
/// - `InvalidMeasurement` if any measurement is non-finite, non-positive,
///   outside the domain of a logarithm in the selected equation, or so large
///   that a derived value leaves the `f64` range
pub fn calculate_body_fat(
    params: &BodyFatParams,
    policy: &dyn UnitPolicy,
    config: &BodyFatConfig,
) -> CalculationResult<BodyFatResult> {
    let profile = normalize_profile(params, policy)?;
    let bmi = calculate_bmi(profile.weight_kg, profile.height_m)?;

    let navy = calculate_navy_body_fat(&profile, params.height)?;
    let bmi_derived = ensure_finite(
        MeasurementField::Weight,
        calculate_bmi_body_fat(bmi, profile.age_years, profile.gender, config),
    )?;

    let (percentage, method) = if navy <= bmi_derived {
        (navy, BodyFatMethod::Circumference)
    } else {
        (bmi_derived, BodyFatMethod::BmiDerived)
    };

    let lean_mass_kg = ensure_finite(
        MeasurementField::Weight,
        profile.weight_kg * (1.0 - percentage / 100.0),
    )?;

    debug!(
        gender = profile.gender.name(),
        family = ?profile.family,
        navy,
        bmi_derived,
        ?method,
        "reconciled body fat estimates"
    );

    Ok(BodyFatResult {
        percentage: round_report(percentage),
        navy_percentage: round_report(navy),
        bmi_percentage: round_report(bmi_derived),
        method,
        family: profile.family,
        lean_mass_kg: round_report(lean_mass_kg),
    })
}
