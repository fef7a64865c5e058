// ABOUTME: Domain sections of the body-composition configuration
// ABOUTME: Unit thresholds, BMI band, BMI-derived body-fat coefficients, and BMR coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

use fitbuddy_core::constants::{bmi, bmr, body_fat, unit_thresholds};
use serde::{Deserialize, Serialize};

/// Magnitude thresholds for classifying untagged numbers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnitThresholdsConfig {
    /// Weights at or above this are pounds (500)
    pub weight_pounds_threshold: f64,
    /// Heights above this are centimeters, otherwise inches (100)
    pub height_centimeter_threshold: f64,
    /// Neck values at or above this select the inch formulas (100)
    pub circumference_inch_threshold: f64,
}

impl Default for UnitThresholdsConfig {
    fn default() -> Self {
        Self {
            weight_pounds_threshold: unit_thresholds::WEIGHT_POUNDS_THRESHOLD,
            height_centimeter_threshold: unit_thresholds::HEIGHT_CENTIMETER_THRESHOLD,
            circumference_inch_threshold: unit_thresholds::CIRCUMFERENCE_INCH_THRESHOLD,
        }
    }
}

/// Normal BMI band
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmiConfig {
    /// Lower bound of the normal band (18.5)
    pub normal_min: f64,
    /// Upper bound of the normal band (24.9)
    pub normal_max: f64,
}

impl Default for BmiConfig {
    fn default() -> Self {
        Self {
            normal_min: bmi::NORMAL_MIN,
            normal_max: bmi::NORMAL_MAX,
        }
    }
}

/// Coefficients of the BMI-derived body-fat estimate
///
/// `bfp = bmi_coef x BMI + age_coef x age - offset(gender)`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyFatConfig {
    /// BMI coefficient (1.20)
    pub bmi_coef: f64,
    /// Age coefficient (0.23)
    pub age_coef: f64,
    /// Subtracted for males (16.2)
    pub male_offset: f64,
    /// Subtracted for females (5.4)
    pub female_offset: f64,
}

impl Default for BodyFatConfig {
    fn default() -> Self {
        Self {
            bmi_coef: body_fat::FALLBACK_BMI_COEF,
            age_coef: body_fat::FALLBACK_AGE_COEF,
            male_offset: body_fat::FALLBACK_MALE_OFFSET,
            female_offset: body_fat::FALLBACK_FEMALE_OFFSET,
        }
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: bmr::WEIGHT_COEF,
            msj_height_coef: bmr::HEIGHT_COEF,
            msj_age_coef: bmr::AGE_COEF,
            msj_male_constant: bmr::MALE_CONSTANT,
            msj_female_constant: bmr::FEMALE_CONSTANT,
        }
    }
}
