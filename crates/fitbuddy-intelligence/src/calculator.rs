// ABOUTME: Facade exposing BMI, normal weight range, body fat, and BMR operations
// ABOUTME: Binds a UnitPolicy to a configuration so callers pass raw, untagged numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

//! Body-Composition Calculator
//!
//! Every operation is a pure synchronous computation over its arguments and
//! the calculator's immutable policy and configuration, so one calculator can
//! be shared freely across threads.
//!
//! # Example
//!
//! ```rust,no_run
//! use fitbuddy_intelligence::calculator::BodyCompositionCalculator;
//!
//! let calculator = BodyCompositionCalculator::new();
//! let bmi = calculator.bmi(70.0, 170.0)?;
//! assert!((bmi.bmi - 24.2).abs() < 1e-9);
//! # Ok::<(), fitbuddy_core::CalculationError>(())
//! ```

use crate::bmi::{compute_bmi, compute_normal_range};
use crate::body_fat::{calculate_body_fat, BodyFatParams};
use crate::config::BodyCompositionConfig;
use crate::nutrition::calculate_mifflin_st_jeor;
use crate::precision::round_energy;
use crate::units::{normalize_height, normalize_weight, MagnitudeUnitPolicy, UnitPolicy};
use fitbuddy_core::constants::units::CM_PER_METER;
use fitbuddy_core::errors::CalculationResult;
use fitbuddy_core::models::{
    BmiResult, BmrResult, BodyFatResult, Gender, HeightInput, NormalRangeResult, WeightInput,
};
use tracing::instrument;

/// Calculator binding a unit policy to a configuration
#[derive(Debug, Clone)]
pub struct BodyCompositionCalculator<P: UnitPolicy = MagnitudeUnitPolicy> {
    policy: P,
    config: BodyCompositionConfig,
}

impl BodyCompositionCalculator<MagnitudeUnitPolicy> {
    /// Magnitude heuristics with the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(BodyCompositionConfig::global().clone())
    }

    /// Magnitude heuristics using the thresholds of `config`
    #[must_use]
    pub fn from_config(config: BodyCompositionConfig) -> Self {
        let policy = MagnitudeUnitPolicy::new(config.units.clone());
        Self { policy, config }
    }
}

impl Default for BodyCompositionCalculator<MagnitudeUnitPolicy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: UnitPolicy> BodyCompositionCalculator<P> {
    /// Use an explicit unit policy
    #[must_use]
    pub const fn with_policy(policy: P, config: BodyCompositionConfig) -> Self {
        Self { policy, config }
    }

    /// Unit policy in use
    #[must_use]
    pub const fn policy(&self) -> &P {
        &self.policy
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &BodyCompositionConfig {
        &self.config
    }

    /// Body Mass Index, one decimal
    ///
    /// # Errors
    ///
    /// Returns `InvalidMeasurement` if weight or height is not finite and positive
    #[instrument(skip(self, weight, height), fields(policy = self.policy.name()))]
    pub fn bmi(
        &self,
        weight: impl Into<WeightInput>,
        height: impl Into<HeightInput>,
    ) -> CalculationResult<BmiResult> {
        let weight_kg = normalize_weight(weight.into(), &self.policy)?;
        let height_m = normalize_height(height.into(), &self.policy)?;
        compute_bmi(weight_kg, height_m)
    }

    /// Midpoint BMI and weight range of the normal band, one decimal each
    ///
    /// # Errors
    ///
    /// Returns `InvalidMeasurement` if height is not finite and positive
    #[instrument(skip(self, height), fields(policy = self.policy.name()))]
    pub fn bmi_and_normal_range(
        &self,
        height: impl Into<HeightInput>,
    ) -> CalculationResult<NormalRangeResult> {
        let height_m = normalize_height(height.into(), &self.policy)?;
        compute_normal_range(height_m, &self.config.bmi)
    }

    /// Body fat percentage from raw, untagged arguments
    ///
    /// `gender` is `"M"` or `"F"` (case-insensitive, `male`/`female` also
    /// accepted). `hip` is required for females.
    ///
    /// # Errors
    ///
    /// - `InvalidGender` if `gender` is not recognized
    /// - `MissingParameter` if `gender` is female and `hip` is `None`
    /// - `InvalidMeasurement` for any measurement outside a formula's domain
    #[allow(clippy::too_many_arguments)]
    pub fn body_fat_percentage(
        &self,
        age: u32,
        height: f64,
        weight: f64,
        neck: f64,
        waist: f64,
        gender: &str,
        hip: Option<f64>,
    ) -> CalculationResult<BodyFatResult> {
        let gender: Gender = gender.parse()?;
        self.body_fat(&BodyFatParams {
            age,
            height,
            weight,
            neck,
            waist,
            gender,
            hip,
        })
    }

    /// Body fat percentage from typed parameters
    ///
    /// # Errors
    ///
    /// - `MissingParameter` if the profile is female and has no hip
    /// - `InvalidMeasurement` for any measurement outside a formula's domain
    #[instrument(skip(self, params), fields(policy = self.policy.name(), gender = params.gender.name()))]
    pub fn body_fat(&self, params: &BodyFatParams) -> CalculationResult<BodyFatResult> {
        calculate_body_fat(params, &self.policy, &self.config.body_fat)
    }

    /// Basal metabolic rate in kcal/day, two decimals
    ///
    /// # Errors
    ///
    /// Returns `InvalidMeasurement` if weight or height is not finite and positive
    #[instrument(skip(self, weight, height), fields(policy = self.policy.name()))]
    pub fn daily_calories(
        &self,
        weight: impl Into<WeightInput>,
        height: impl Into<HeightInput>,
        age: u32,
        gender: Gender,
    ) -> CalculationResult<BmrResult> {
        let weight_kg = normalize_weight(weight.into(), &self.policy)?;
        let height_cm = normalize_height(height.into(), &self.policy)? * CM_PER_METER;
        let bmr = calculate_mifflin_st_jeor(weight_kg, height_cm, age, gender, &self.config.bmr)?;
        Ok(BmrResult {
            bmr_kcal: round_energy(bmr),
        })
    }
}

/// BMI with the default calculator
///
/// # Errors
///
/// Returns `InvalidMeasurement` if weight or height is not finite and positive
pub fn bmi(
    weight: impl Into<WeightInput>,
    height: impl Into<HeightInput>,
) -> CalculationResult<f64> {
    Ok(BodyCompositionCalculator::new().bmi(weight, height)?.bmi)
}

/// Normal BMI band for a height with the default calculator
///
/// # Errors
///
/// Returns `InvalidMeasurement` if height is not finite and positive
pub fn bmi_and_normal_range(
    height: impl Into<HeightInput>,
) -> CalculationResult<NormalRangeResult> {
    BodyCompositionCalculator::new().bmi_and_normal_range(height)
}

/// Body fat percentage with the default calculator
///
/// # Errors
///
/// Returns `InvalidGender`, `MissingParameter`, or `InvalidMeasurement`
#[allow(clippy::too_many_arguments)]
pub fn body_fat_percentage(
    age: u32,
    height: f64,
    weight: f64,
    neck: f64,
    waist: f64,
    gender: &str,
    hip: Option<f64>,
) -> CalculationResult<f64> {
    Ok(BodyCompositionCalculator::new()
        .body_fat_percentage(age, height, weight, neck, waist, gender, hip)?
        .percentage)
}
