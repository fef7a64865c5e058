// ABOUTME: Unit inference and normalization for weight, height, and circumference inputs
// ABOUTME: Pluggable UnitPolicy strategies decide metric vs imperial for untagged numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

//! Unit Normalizer
//!
//! Callers rarely say which unit a number is in. A [`UnitPolicy`] decides,
//! and the free functions in this module convert to the canonical units
//! (kilograms, meters) once the unit is known.
//!
//! - [`MagnitudeUnitPolicy`] guesses from magnitude: weights `>= 500` are
//!   pounds, heights `> 100` are centimeters, necks `>= 100` are inches.
//! - [`FixedUnitPolicy`] ignores magnitude and applies an explicit unit system.
//!
//! Tagged inputs ([`WeightInput::Pounds`], [`HeightInput::FeetInches`])
//! never consult the policy.

use crate::config::UnitThresholdsConfig;
use fitbuddy_core::constants::units::{
    CM_PER_METER, INCHES_PER_FOOT, KG_PER_POUND, METERS_PER_INCH,
};
use fitbuddy_core::errors::{ensure_positive, CalculationError, CalculationResult};
use fitbuddy_core::models::{CircumferenceFamily, HeightInput, LengthUnit, WeightInput, WeightUnit};
use fitbuddy_core::MeasurementField;
use tracing::debug;

/// Strategy that assigns a unit to an untagged measurement
pub trait UnitPolicy: Send + Sync {
    /// Decide whether a scalar body weight is kilograms or pounds
    fn classify_weight(&self, raw: f64) -> WeightUnit;

    /// Decide whether a scalar height is centimeters or inches
    fn classify_length(&self, raw: f64) -> LengthUnit;

    /// Decide whether a neck circumference is centimeters or inches
    fn classify_circumference(&self, raw: f64) -> LengthUnit;

    /// Short name for logging
    fn name(&self) -> &'static str;
}

/// Magnitude-threshold heuristics
#[derive(Debug, Clone, PartialEq)]
pub struct MagnitudeUnitPolicy {
    thresholds: UnitThresholdsConfig,
}

impl MagnitudeUnitPolicy {
    /// Create a policy from explicit thresholds
    #[must_use]
    pub const fn new(thresholds: UnitThresholdsConfig) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &UnitThresholdsConfig {
        &self.thresholds
    }
}

impl Default for MagnitudeUnitPolicy {
    fn default() -> Self {
        Self::new(UnitThresholdsConfig::default())
    }
}

impl UnitPolicy for MagnitudeUnitPolicy {
    fn classify_weight(&self, raw: f64) -> WeightUnit {
        if raw < self.thresholds.weight_pounds_threshold {
            WeightUnit::Kilograms
        } else {
            WeightUnit::Pounds
        }
    }

    fn classify_length(&self, raw: f64) -> LengthUnit {
        if raw > self.thresholds.height_centimeter_threshold {
            LengthUnit::Centimeters
        } else {
            LengthUnit::Inches
        }
    }

    fn classify_circumference(&self, raw: f64) -> LengthUnit {
        if raw < self.thresholds.circumference_inch_threshold {
            LengthUnit::Centimeters
        } else {
            LengthUnit::Inches
        }
    }

    fn name(&self) -> &'static str {
        "magnitude"
    }
}

/// Explicit unit system applied to every untagged measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedUnitPolicy {
    weight: WeightUnit,
    length: LengthUnit,
}

impl FixedUnitPolicy {
    /// Create a policy with the given weight and length units
    #[must_use]
    pub const fn new(weight: WeightUnit, length: LengthUnit) -> Self {
        Self { weight, length }
    }

    /// Kilograms and centimeters
    #[must_use]
    pub const fn metric() -> Self {
        Self::new(WeightUnit::Kilograms, LengthUnit::Centimeters)
    }

    /// Pounds and inches
    #[must_use]
    pub const fn imperial() -> Self {
        Self::new(WeightUnit::Pounds, LengthUnit::Inches)
    }
}

impl UnitPolicy for FixedUnitPolicy {
    fn classify_weight(&self, _raw: f64) -> WeightUnit {
        self.weight
    }

    fn classify_length(&self, _raw: f64) -> LengthUnit {
        self.length
    }

    fn classify_circumference(&self, _raw: f64) -> LengthUnit {
        self.length
    }

    fn name(&self) -> &'static str {
        match self.length {
            LengthUnit::Centimeters => "metric",
            LengthUnit::Inches => "imperial",
        }
    }
}

/// Convert pounds to kilograms
#[must_use]
pub fn pounds_to_kilograms(pounds: f64) -> f64 {
    pounds * KG_PER_POUND
}

/// Convert kilograms to pounds
#[must_use]
pub fn kilograms_to_pounds(kilograms: f64) -> f64 {
    kilograms / KG_PER_POUND
}

/// Convert inches to meters
#[must_use]
pub fn inches_to_meters(inches: f64) -> f64 {
    inches * METERS_PER_INCH
}

/// Resolve a weight input to kilograms
///
/// # Errors
///
/// Returns `InvalidMeasurement` for weight if the value is not finite or not positive
pub fn normalize_weight(input: WeightInput, policy: &dyn UnitPolicy) -> CalculationResult<f64> {
    match input {
        WeightInput::Pounds(pounds) => {
            let pounds = ensure_positive(MeasurementField::Weight, pounds)?;
            Ok(pounds_to_kilograms(pounds))
        }
        WeightInput::Scalar(raw) => {
            let raw = ensure_positive(MeasurementField::Weight, raw)?;
            let unit = policy.classify_weight(raw);
            debug!(raw, ?unit, policy = policy.name(), "classified weight");
            Ok(match unit {
                WeightUnit::Kilograms => raw,
                WeightUnit::Pounds => pounds_to_kilograms(raw),
            })
        }
    }
}

/// Resolve a height input to meters
///
/// # Errors
///
/// Returns `InvalidMeasurement` for height if the value is not finite, a
/// feet/inches part is negative, or the total is not positive
pub fn normalize_height(input: HeightInput, policy: &dyn UnitPolicy) -> CalculationResult<f64> {
    match input {
        HeightInput::FeetInches { feet, inches } => {
            if !feet.is_finite() || !inches.is_finite() || feet < 0.0 || inches < 0.0 {
                return Err(CalculationError::invalid_measurement(
                    MeasurementField::Height,
                    format!("feet and inches must be non-negative numbers, got {feet}' {inches}\""),
                ));
            }
            let total_inches = feet.mul_add(INCHES_PER_FOOT, inches);
            let total_inches = ensure_positive(MeasurementField::Height, total_inches)?;
            Ok(inches_to_meters(total_inches))
        }
        HeightInput::Scalar(raw) => {
            let raw = ensure_positive(MeasurementField::Height, raw)?;
            let unit = policy.classify_length(raw);
            debug!(raw, ?unit, policy = policy.name(), "classified height");
            Ok(match unit {
                LengthUnit::Centimeters => raw / CM_PER_METER,
                LengthUnit::Inches => inches_to_meters(raw),
            })
        }
    }
}

/// Pick the body-fat coefficient family from the neck measurement
///
/// # Errors
///
/// Returns `InvalidMeasurement` for neck if the value is not finite or not positive
pub fn circumference_family(
    neck: f64,
    policy: &dyn UnitPolicy,
) -> CalculationResult<CircumferenceFamily> {
    let neck = ensure_positive(MeasurementField::Neck, neck)?;
    let family = CircumferenceFamily::from(policy.classify_circumference(neck));
    debug!(neck, ?family, policy = policy.name(), "selected circumference family");
    Ok(family)
}
