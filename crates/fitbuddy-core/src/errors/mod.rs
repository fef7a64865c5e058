// ABOUTME: Error types for body-composition calculations
// ABOUTME: Every failure names the offending field so callers can render precise messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

//! # Calculation Error Types
//!
//! The engines never catch their own errors. The first violated precondition
//! is returned immediately as a [`CalculationError`], and it is up to the
//! caller (CLI, chat adapter, ...) to turn it into user-facing text.
//!
//! Invalid input never degrades into `NaN` or infinity: anything that would
//! feed a non-positive value into a square root, a division or a `log10`
//! surfaces as [`CalculationError::InvalidMeasurement`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result alias used by every engine operation
pub type CalculationResult<T> = Result<T, CalculationError>;

/// Input field a measurement error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementField {
    /// Body weight (kg or lb)
    Weight,
    /// Standing height (cm, in, or feet + inches)
    Height,
    /// Neck circumference
    Neck,
    /// Waist circumference
    Waist,
    /// Hip circumference
    Hip,
}

impl MeasurementField {
    /// Field name as used in messages and structured logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Height => "height",
            Self::Neck => "neck",
            Self::Waist => "waist",
            Self::Hip => "hip",
        }
    }
}

impl fmt::Display for MeasurementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fieldless discriminant of [`CalculationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Gender is neither male nor female
    InvalidGender,
    /// A required parameter was not supplied
    MissingParameter,
    /// A value is non-finite, non-positive, or outside a formula's domain
    InvalidMeasurement,
}

/// Errors produced by the unit normalizer and the calculation engines
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// Gender token was not recognized
    #[error("Gender must be 'M' for male or 'F' for female, got '{value}'")]
    InvalidGender {
        /// The rejected token
        value: String,
    },

    /// A parameter required for this calculation is absent
    #[error("Missing required parameter '{parameter}'")]
    MissingParameter {
        /// Which parameter is missing
        parameter: MeasurementField,
    },

    /// A measurement cannot be used by the formula
    #[error("Invalid {field} measurement: {reason}")]
    InvalidMeasurement {
        /// Which measurement is invalid
        field: MeasurementField,
        /// Why it was rejected
        reason: String,
    },
}

impl CalculationError {
    /// Create an "invalid gender" error
    #[must_use]
    pub fn invalid_gender(value: impl Into<String>) -> Self {
        Self::InvalidGender {
            value: value.into(),
        }
    }

    /// Create a "missing parameter" error
    #[must_use]
    pub const fn missing_parameter(parameter: MeasurementField) -> Self {
        Self::MissingParameter { parameter }
    }

    /// Create an "invalid measurement" error
    #[must_use]
    pub fn invalid_measurement(field: MeasurementField, reason: impl Into<String>) -> Self {
        Self::InvalidMeasurement {
            field,
            reason: reason.into(),
        }
    }

    /// Get the error category
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidGender { .. } => ErrorKind::InvalidGender,
            Self::MissingParameter { .. } => ErrorKind::MissingParameter,
            Self::InvalidMeasurement { .. } => ErrorKind::InvalidMeasurement,
        }
    }

    /// Get the field this error refers to, if any
    #[must_use]
    pub const fn field(&self) -> Option<MeasurementField> {
        match self {
            Self::InvalidGender { .. } => None,
            Self::MissingParameter { parameter } => Some(*parameter),
            Self::InvalidMeasurement { field, .. } => Some(*field),
        }
    }
}

/// Reject values that are `NaN`, infinite, zero, or negative
///
/// # Errors
///
/// Returns `CalculationError::InvalidMeasurement` naming `field`
pub fn ensure_positive(field: MeasurementField, value: f64) -> CalculationResult<f64> {
    if !value.is_finite() {
        return Err(CalculationError::invalid_measurement(
            field,
            format!("value must be a finite number, got {value}"),
        ));
    }
    if value <= 0.0 {
        return Err(CalculationError::invalid_measurement(
            field,
            format!("value must be positive, got {value}"),
        ));
    }
    Ok(value)
}

/// Reject computed values that overflowed or lost all meaning
///
/// Inputs can each be finite and positive while an intermediate product
/// still leaves the range of `f64`.
///
/// # Errors
///
/// Returns `CalculationError::InvalidMeasurement` naming `field`
pub fn ensure_finite(field: MeasurementField, value: f64) -> CalculationResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculationError::invalid_measurement(
            field,
            format!("value is out of range for this calculation (result {value})"),
        ))
    }
}
