// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversion factors, BMI band, and body-fat formula coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

//! Constants module
//!
//! Pure data constants grouped by domain. Tunable thresholds have matching
//! configuration fields in `fitbuddy-intelligence`; the values here are the
//! defaults those fields start from.

/// Unit conversion factors
pub mod units {
    /// Kilograms per pound
    pub const KG_PER_POUND: f64 = 0.453_592;
    /// Meters per inch
    pub const METERS_PER_INCH: f64 = 0.0254;
    /// Centimeters per meter
    pub const CM_PER_METER: f64 = 100.0;
    /// Inches per foot
    pub const INCHES_PER_FOOT: f64 = 12.0;
}

/// Magnitude thresholds used to guess the unit of an untagged number
pub mod unit_thresholds {
    /// Scalar weights at or above this value are pounds, below it kilograms
    pub const WEIGHT_POUNDS_THRESHOLD: f64 = 500.0;
    /// Scalar heights above this value are centimeters, at or below it inches
    pub const HEIGHT_CENTIMETER_THRESHOLD: f64 = 100.0;
    /// Neck circumferences at or above this value select the inch-calibrated formulas
    pub const CIRCUMFERENCE_INCH_THRESHOLD: f64 = 100.0;
}

/// Body Mass Index band considered "normal"
///
/// Reference: WHO Expert Consultation (2004). Appropriate body-mass index for
/// Asian populations. *The Lancet*, 363(9403), 157-163.
pub mod bmi {
    /// Lower bound of the normal BMI band
    pub const NORMAL_MIN: f64 = 18.5;
    /// Upper bound of the normal BMI band
    pub const NORMAL_MAX: f64 = 24.9;
}

/// Body fat estimation constants
pub mod body_fat {
    /// Numerator of the Siri body-density conversion
    pub const SIRI_NUMERATOR: f64 = 495.0;
    /// Offset of the Siri body-density conversion
    pub const SIRI_OFFSET: f64 = 450.0;

    /// BMI-derived estimate: BMI coefficient
    pub const FALLBACK_BMI_COEF: f64 = 1.20;
    /// BMI-derived estimate: age coefficient
    pub const FALLBACK_AGE_COEF: f64 = 0.23;
    /// BMI-derived estimate: male offset (subtracted)
    pub const FALLBACK_MALE_OFFSET: f64 = 16.2;
    /// BMI-derived estimate: female offset (subtracted)
    pub const FALLBACK_FEMALE_OFFSET: f64 = 5.4;
}

/// Mifflin-St Jeor basal metabolic rate coefficients
///
/// Reference: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
pub mod bmr {
    /// kcal per kilogram of body weight
    pub const WEIGHT_COEF: f64 = 10.0;
    /// kcal per centimeter of height
    pub const HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age
    pub const AGE_COEF: f64 = -5.0;
    /// Male constant
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female constant
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// Rounding precision applied to reported values
pub mod precision {
    /// Decimal places for BMI, weight bounds, and body fat
    pub const REPORT_DECIMALS: usize = 1;
    /// Decimal places for energy values (kcal/day)
    pub const ENERGY_DECIMALS: usize = 2;
}
