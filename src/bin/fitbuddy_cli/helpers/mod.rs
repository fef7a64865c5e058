// ABOUTME: Helper modules for fitbuddy-cli
// ABOUTME: Output formatting shared by all subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

pub mod display;
