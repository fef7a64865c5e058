// ABOUTME: Output formatting helpers for fitbuddy-cli
// ABOUTME: Prints replies as chat-style text or pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

use anyhow::Result;
use fitbuddy::requests::Reply;
use fitbuddy::{BodyFatMethod, CircumferenceFamily};

/// Print a reply as text, with the intermediate estimates when verbose
pub fn display_reply(reply: &Reply, verbose: bool) {
    println!("{reply}");

    if !verbose {
        return;
    }

    if let Reply::BodyFat(result) = reply {
        let method = match result.method {
            BodyFatMethod::Circumference => "circumference (Navy)",
            BodyFatMethod::BmiDerived => "BMI-derived",
        };
        let family = match result.family {
            CircumferenceFamily::Centimeters => "cm",
            CircumferenceFamily::Inches => "in",
        };
        println!("{}", "-".repeat(50));
        println!("   Navy estimate: {:.1}% ({family} coefficients)", result.navy_percentage);
        println!("   BMI estimate:  {:.1}%", result.bmi_percentage);
        println!("   Reported:      {method}");
        println!("   Lean mass:     {:.1} kg", result.lean_mass_kg);
    }
}

/// Print a reply as pretty JSON
pub fn display_json(reply: &Reply) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(reply)?);
    Ok(())
}
