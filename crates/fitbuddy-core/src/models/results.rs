// ABOUTME: Result structures returned by the BMI, body-fat, and BMR engines
// ABOUTME: All reported numbers are already rounded for display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

use super::gender::Gender;
use super::units::CircumferenceFamily;
use serde::{Deserialize, Serialize};

/// Canonical, unit-resolved form of a person's inputs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in meters
    pub height_m: f64,
    /// Neck circumference in the circumference family's unit
    pub neck: f64,
    /// Waist circumference in the circumference family's unit
    pub waist: f64,
    /// Hip circumference, present for the female circumference formula
    pub hip: Option<f64>,
    /// Age in years
    pub age_years: u32,
    /// Gender
    pub gender: Gender,
    /// Unit family shared by neck, waist, and hip
    pub family: CircumferenceFamily,
}

/// Body Mass Index
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmiResult {
    /// BMI rounded to one decimal
    pub bmi: f64,
}

/// Weight bounds of the normal BMI band for a given height
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NormalRangeResult {
    /// BMI at the midpoint weight; height-invariant by construction
    pub midpoint_bmi: f64,
    /// Lowest weight within the normal band (kg)
    pub min_weight_kg: f64,
    /// Highest weight within the normal band (kg)
    pub max_weight_kg: f64,
}

/// Estimate that won the body-fat reconciliation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatMethod {
    /// Circumference-based ("Navy") formula
    Circumference,
    /// Linear BMI/age approximation
    BmiDerived,
}

/// Body fat percentage and the estimates it was reconciled from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyFatResult {
    /// Reported percentage: the lower of the two estimates, one decimal
    pub percentage: f64,
    /// Circumference-based estimate, one decimal
    pub navy_percentage: f64,
    /// BMI-derived estimate, one decimal
    pub bmi_percentage: f64,
    /// Which estimate was reported
    pub method: BodyFatMethod,
    /// Coefficient family chosen from the neck measurement
    pub family: CircumferenceFamily,
    /// Lean body mass in kilograms, one decimal
    pub lean_mass_kg: f64,
}

/// Basal metabolic rate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmrResult {
    /// kcal/day rounded to two decimals
    pub bmr_kcal: f64,
}
