// ABOUTME: Converts tokenized command arguments into typed calculation requests
// ABOUTME: Dispatches on argument count to tell metric scalars from imperial tagged inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

//! Request parsing and execution
//!
//! Front ends (the CLI, a chat bot) hand over already-split string tokens.
//! The number of tokens decides the input shape:
//!
//! | command        | tokens                                     |
//! |----------------|--------------------------------------------|
//! | `bmi`          | `weight height` or `pounds feet inches`    |
//! | `ideal-weight` | `height` or `feet inches`                  |
//! | `body-fat`     | `age height weight neck waist gender [hip]`|
//! | `calories`     | `weight height age gender`                 |

use fitbuddy_core::models::{
    BmiResult, BmrResult, BodyFatResult, Gender, HeightInput, NormalRangeResult, WeightInput,
};
use fitbuddy_core::CalculationError;
use fitbuddy_intelligence::{BodyCompositionCalculator, BodyFatParams, UnitPolicy};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Body Mass Index
    Bmi,
    /// Healthy weight range for a height
    IdealWeight,
    /// Body fat percentage
    BodyFat,
    /// Basal metabolic rate
    Calories,
}

impl CommandKind {
    /// Command name as typed by the user
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bmi => "bmi",
            Self::IdealWeight => "ideal-weight",
            Self::BodyFat => "body-fat",
            Self::Calories => "calories",
        }
    }

    /// Usage line shown when arguments are wrong
    #[must_use]
    pub const fn usage(&self) -> &'static str {
        match self {
            Self::Bmi => "bmi <weight> <height> | bmi <pounds> <feet> <inches>",
            Self::IdealWeight => "ideal-weight <height> | ideal-weight <feet> <inches>",
            Self::BodyFat => "body-fat <age> <height> <weight> <neck> <waist> <gender> [hip]",
            Self::Calories => "calories <weight> <height> <age> <gender>",
        }
    }
}

/// Errors raised while turning tokens into a request
#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
    /// Wrong number of tokens
    #[error("Wrong number of arguments ({got}). Usage: {usage}")]
    Arity {
        /// Tokens received
        got: usize,
        /// Expected shape
        usage: &'static str,
    },

    /// A token is not a number of the expected type
    #[error("Invalid {argument} '{token}'. Usage: {usage}")]
    InvalidNumber {
        /// Argument position name
        argument: &'static str,
        /// Offending token
        token: String,
        /// Expected shape
        usage: &'static str,
    },

    /// Tokens parsed but the values were rejected
    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

/// A fully typed calculation request
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// BMI from weight and height
    Bmi {
        /// Weight input
        weight: WeightInput,
        /// Height input
        height: HeightInput,
    },
    /// Normal weight range for a height
    IdealWeight {
        /// Height input
        height: HeightInput,
    },
    /// Body fat percentage
    BodyFat(BodyFatParams),
    /// Basal metabolic rate
    Calories {
        /// Weight input
        weight: WeightInput,
        /// Height input
        height: HeightInput,
        /// Age in years
        age: u32,
        /// Gender
        gender: Gender,
    },
}

/// Result of executing a request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Reply {
    /// BMI result
    Bmi(BmiResult),
    /// Normal weight range result
    IdealWeight(NormalRangeResult),
    /// Body fat result
    BodyFat(BodyFatResult),
    /// BMR result
    Calories(BmrResult),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bmi(result) => write!(f, "Your BMI is: {:.1}", result.bmi),
            Self::IdealWeight(range) => {
                writeln!(
                    f,
                    "Your BMI for the middle of the healthy weight range is: {:.1}",
                    range.midpoint_bmi
                )?;
                write!(
                    f,
                    "Healthy weight range for your height: {:.1} kg to {:.1} kg.",
                    range.min_weight_kg, range.max_weight_kg
                )
            }
            Self::BodyFat(result) => write!(
                f,
                "Your Body Fat Percentage (BFP) is: {:.1}%",
                result.percentage
            ),
            Self::Calories(result) => write!(
                f,
                "Your Basal Metabolic Rate (BMR) is: {:.2} calories/day.",
                result.bmr_kcal
            ),
        }
    }
}

struct Tokens<'a, S> {
    tokens: &'a [S],
    usage: &'static str,
}

impl<S: AsRef<str>> Tokens<'_, S> {
    fn parse<T: FromStr>(&self, index: usize, argument: &'static str) -> Result<T, RequestError> {
        let token = self
            .tokens
            .get(index)
            .map(|t| t.as_ref().trim())
            .ok_or_else(|| self.arity_error())?;
        token.parse().map_err(|_| RequestError::InvalidNumber {
            argument,
            token: token.to_owned(),
            usage: self.usage,
        })
    }

    fn gender(&self, index: usize) -> Result<Gender, RequestError> {
        let token: &str = self.tokens.get(index).map_or("", |t| t.as_ref());
        Ok(token.parse::<Gender>()?)
    }

    fn arity_error(&self) -> RequestError {
        RequestError::Arity {
            got: self.tokens.len(),
            usage: self.usage,
        }
    }
}

/// Parse tokens for a command into a typed request
///
/// # Errors
///
/// - `RequestError::Arity` if the token count matches no accepted shape
/// - `RequestError::InvalidNumber` if a numeric token does not parse
/// - `RequestError::Calculation` if the gender token is not recognized
pub fn parse_request<S: AsRef<str>>(
    command: CommandKind,
    tokens: &[S],
) -> Result<Request, RequestError> {
    let args = Tokens {
        tokens,
        usage: command.usage(),
    };

    match (command, tokens.len()) {
        (CommandKind::Bmi, 2) => Ok(Request::Bmi {
            weight: WeightInput::Scalar(args.parse(0, "weight")?),
            height: HeightInput::Scalar(args.parse(1, "height")?),
        }),
        (CommandKind::Bmi, 3) => Ok(Request::Bmi {
            weight: WeightInput::Pounds(args.parse(0, "pounds")?),
            height: HeightInput::FeetInches {
                feet: args.parse(1, "feet")?,
                inches: args.parse(2, "inches")?,
            },
        }),
        (CommandKind::IdealWeight, 1) => Ok(Request::IdealWeight {
            height: HeightInput::Scalar(args.parse(0, "height")?),
        }),
        (CommandKind::IdealWeight, 2) => Ok(Request::IdealWeight {
            height: HeightInput::FeetInches {
                feet: args.parse(0, "feet")?,
                inches: args.parse(1, "inches")?,
            },
        }),
        (CommandKind::BodyFat, 6 | 7) => Ok(Request::BodyFat(BodyFatParams {
            age: args.parse(0, "age")?,
            height: args.parse(1, "height")?,
            weight: args.parse(2, "weight")?,
            neck: args.parse(3, "neck")?,
            waist: args.parse(4, "waist")?,
            gender: args.gender(5)?,
            hip: if tokens.len() == 7 {
                Some(args.parse(6, "hip")?)
            } else {
                None
            },
        })),
        (CommandKind::Calories, 4) => Ok(Request::Calories {
            weight: WeightInput::Scalar(args.parse(0, "weight")?),
            height: HeightInput::Scalar(args.parse(1, "height")?),
            age: args.parse(2, "age")?,
            gender: args.gender(3)?,
        }),
        _ => Err(args.arity_error()),
    }
}

/// Run a request against a calculator
///
/// # Errors
///
/// Returns the calculator's `CalculationError` unchanged
pub fn execute<P: UnitPolicy>(
    request: &Request,
    calculator: &BodyCompositionCalculator<P>,
) -> Result<Reply, CalculationError> {
    match request {
        Request::Bmi { weight, height } => calculator.bmi(*weight, *height).map(Reply::Bmi),
        Request::IdealWeight { height } => calculator
            .bmi_and_normal_range(*height)
            .map(Reply::IdealWeight),
        Request::BodyFat(params) => calculator.body_fat(params).map(Reply::BodyFat),
        Request::Calories {
            weight,
            height,
            age,
            gender,
        } => calculator
            .daily_calories(*weight, *height, *age, *gender)
            .map(Reply::Calories),
    }
}
