// ABOUTME: Decimal rounding for reported values
// ABOUTME: Engines compute at full precision and round once at the reporting boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

use fitbuddy_core::constants::precision::{ENERGY_DECIMALS, REPORT_DECIMALS};

/// Round to the given number of decimal places
///
/// Rounds the exact binary value of `value`, with ties going to the even
/// digit, so `10.25` becomes `10.2` and `10.35` (stored as 10.3499...)
/// becomes `10.3`. Non-finite values are returned unchanged.
#[must_use]
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Round a BMI, weight, or percentage for reporting
#[must_use]
pub fn round_report(value: f64) -> f64 {
    round_to(value, REPORT_DECIMALS)
}

/// Round an energy value (kcal/day) for reporting
#[must_use]
pub fn round_energy(value: f64) -> f64 {
    round_to(value, ENERGY_DECIMALS)
}
