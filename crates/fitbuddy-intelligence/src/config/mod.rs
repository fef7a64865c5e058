// ABOUTME: Body-composition configuration with defaults, env overrides, and validation
// ABOUTME: Provides a lazily loaded global instance shared by the calculation engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

//! Body-Composition Configuration Module
//!
//! Configuration is organized into domain sections:
//! - `units` - magnitude thresholds for unit inference
//! - `bmi` - normal BMI band
//! - `body_fat` - BMI-derived body-fat coefficients
//! - `bmr` - Mifflin-St Jeor coefficients
//!
//! Values start from the defaults in `fitbuddy_core::constants` and can be
//! overridden through `FITBUDDY_*` environment variables.

pub mod error;
pub mod sections;

pub use error::ConfigError;
pub use sections::{BmiConfig, BmrConfig, BodyFatConfig, UnitThresholdsConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static BODY_COMPOSITION_CONFIG: OnceLock<BodyCompositionConfig> = OnceLock::new();

/// Environment variable names for overrides
pub mod env_vars {
    /// Pounds threshold for scalar weights
    pub const WEIGHT_POUNDS_THRESHOLD: &str = "FITBUDDY_WEIGHT_POUNDS_THRESHOLD";
    /// Centimeter threshold for scalar heights
    pub const HEIGHT_CM_THRESHOLD: &str = "FITBUDDY_HEIGHT_CM_THRESHOLD";
    /// Inch threshold for the neck circumference
    pub const CIRCUMFERENCE_INCH_THRESHOLD: &str = "FITBUDDY_CIRCUMFERENCE_INCH_THRESHOLD";
    /// Lower bound of the normal BMI band
    pub const BMI_NORMAL_MIN: &str = "FITBUDDY_BMI_NORMAL_MIN";
    /// Upper bound of the normal BMI band
    pub const BMI_NORMAL_MAX: &str = "FITBUDDY_BMI_NORMAL_MAX";
    /// BMI coefficient of the BMI-derived body-fat estimate
    pub const BODY_FAT_BMI_COEF: &str = "FITBUDDY_BODY_FAT_BMI_COEF";
    /// Age coefficient of the BMI-derived body-fat estimate
    pub const BODY_FAT_AGE_COEF: &str = "FITBUDDY_BODY_FAT_AGE_COEF";
}

/// Main body-composition configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BodyCompositionConfig {
    /// Unit inference thresholds
    pub units: UnitThresholdsConfig,
    /// Normal BMI band
    pub bmi: BmiConfig,
    /// BMI-derived body-fat coefficients
    pub body_fat: BodyFatConfig,
    /// Basal metabolic rate coefficients
    pub bmr: BmrConfig,
}

impl BodyCompositionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        BODY_COMPOSITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load body composition config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|name| env::var(name).ok())
    }

    /// Load configuration using an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a looked-up value does not parse or validation fails
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::default().apply_overrides(&lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any threshold is non-positive, the BMI band is
    /// inverted, or a coefficient is not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            self.units.weight_pounds_threshold,
            self.units.height_centimeter_threshold,
            self.units.circumference_inch_threshold,
        ];
        if thresholds.iter().any(|t| !t.is_finite() || *t <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Unit thresholds must be finite and positive",
            ));
        }

        if !self.bmi.normal_min.is_finite() || self.bmi.normal_min <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Normal BMI lower bound must be positive",
            ));
        }
        if !self.bmi.normal_max.is_finite() || self.bmi.normal_min >= self.bmi.normal_max {
            return Err(ConfigError::InvalidRange(
                "Normal BMI lower bound must be below the upper bound",
            ));
        }

        let coefficients = [
            self.body_fat.bmi_coef,
            self.body_fat.age_coef,
            self.body_fat.male_offset,
            self.body_fat.female_offset,
            self.bmr.msj_weight_coef,
            self.bmr.msj_height_coef,
            self.bmr.msj_age_coef,
            self.bmr.msj_male_constant,
            self.bmr.msj_female_constant,
        ];
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "Formula coefficients must be finite",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply a single override
    fn apply_var<T, F>(lookup: &F, name: &str, target: &mut T) -> Result<(), ConfigError>
    where
        T: FromStr,
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {name}: '{val}'")))?;
        }
        Ok(())
    }

    /// Apply overrides for every tunable field
    fn apply_overrides<F>(mut self, lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::apply_var(
            lookup,
            env_vars::WEIGHT_POUNDS_THRESHOLD,
            &mut self.units.weight_pounds_threshold,
        )?;
        Self::apply_var(
            lookup,
            env_vars::HEIGHT_CM_THRESHOLD,
            &mut self.units.height_centimeter_threshold,
        )?;
        Self::apply_var(
            lookup,
            env_vars::CIRCUMFERENCE_INCH_THRESHOLD,
            &mut self.units.circumference_inch_threshold,
        )?;
        Self::apply_var(lookup, env_vars::BMI_NORMAL_MIN, &mut self.bmi.normal_min)?;
        Self::apply_var(lookup, env_vars::BMI_NORMAL_MAX, &mut self.bmi.normal_max)?;
        Self::apply_var(
            lookup,
            env_vars::BODY_FAT_BMI_COEF,
            &mut self.body_fat.bmi_coef,
        )?;
        Self::apply_var(
            lookup,
            env_vars::BODY_FAT_AGE_COEF,
            &mut self.body_fat.age_coef,
        )?;

        Ok(self)
    }
}
