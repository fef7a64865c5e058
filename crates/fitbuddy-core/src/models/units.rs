// ABOUTME: Unit tags and raw measurement inputs for the unit normalizer
// ABOUTME: Scalars are classified by magnitude, tagged variants carry their unit explicitly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

use serde::{Deserialize, Serialize};

/// Unit of a body-weight value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    /// Kilograms
    Kilograms,
    /// Pounds
    Pounds,
}

/// Unit of a length or circumference value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    /// Centimeters
    Centimeters,
    /// Inches
    Inches,
}

/// Coefficient family used by the circumference body-fat formulas
///
/// Chosen from the neck measurement; waist and hip are assumed to share it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CircumferenceFamily {
    /// Centimeter-calibrated coefficients (Siri density form)
    Centimeters,
    /// Inch-calibrated coefficients (direct log-linear form)
    Inches,
}

impl From<LengthUnit> for CircumferenceFamily {
    fn from(unit: LengthUnit) -> Self {
        match unit {
            LengthUnit::Centimeters => Self::Centimeters,
            LengthUnit::Inches => Self::Inches,
        }
    }
}

/// Raw body-weight input as supplied by the caller
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "unit", content = "value")]
pub enum WeightInput {
    /// Untagged number; the unit policy decides kg vs lb
    Scalar(f64),
    /// Explicitly tagged pounds; bypasses the unit policy
    Pounds(f64),
}

/// Raw height input as supplied by the caller
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum HeightInput {
    /// Untagged number; the unit policy decides cm vs in
    Scalar(f64),
    /// Explicit feet and inches; bypasses the unit policy
    FeetInches {
        /// Whole or fractional feet
        feet: f64,
        /// Remaining inches
        inches: f64,
    },
}

impl From<f64> for WeightInput {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<f64> for HeightInput {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}
