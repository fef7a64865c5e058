// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and calculator construction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fitbuddy`

use fitbuddy::{
    BodyCompositionCalculator, BodyCompositionConfig, FixedUnitPolicy, MagnitudeUnitPolicy,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Magnitude-heuristic calculator with default configuration
///
/// Independent of `FITBUDDY_*` variables so tests do not depend on the environment.
pub fn default_calculator() -> BodyCompositionCalculator<MagnitudeUnitPolicy> {
    init_test_logging();
    BodyCompositionCalculator::from_config(BodyCompositionConfig::default())
}

/// Calculator that reads every number as pounds and inches
pub fn imperial_calculator() -> BodyCompositionCalculator<FixedUnitPolicy> {
    init_test_logging();
    BodyCompositionCalculator::with_policy(
        FixedUnitPolicy::imperial(),
        BodyCompositionConfig::default(),
    )
}

/// Assert two floats are equal within a tolerance
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual}"
    );
}
