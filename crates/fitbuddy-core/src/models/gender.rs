// ABOUTME: Gender enum selecting per-variant formula coefficients
// ABOUTME: Parses the "M"/"F" tokens used by chat and CLI callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

use crate::errors::CalculationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender for body-fat and BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male coefficient tables
    Male,
    /// Female coefficient tables (circumference method also needs hip)
    Female,
}

impl Gender {
    /// Single-letter code used on the command line
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    /// Lowercase name for logging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("m") || token.eq_ignore_ascii_case("male") {
            Ok(Self::Male)
        } else if token.eq_ignore_ascii_case("f") || token.eq_ignore_ascii_case("female") {
            Ok(Self::Female)
        } else {
            Err(CalculationError::invalid_gender(token))
        }
    }
}
