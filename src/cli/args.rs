// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for effest.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// effest - weighted efficiency-loss estimator for cluster telemetry
#[derive(Parser, Debug)]
#[command(name = "effest")]
#[command(version, about = "Weighted efficiency-loss estimator for cluster telemetry")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Coefficients file (TOML); defaults to ~/.effest/coefficients.toml
    #[arg(long, global = true)]
    pub coefficients: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a telemetry record (JSON object) and print the report
    Analyze(AnalyzeArgs),

    /// Show the active coefficient set
    #[command(alias = "coeffs")]
    Coefficients,
}

/// Arguments for the analyze subcommand
#[derive(clap::Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Read the telemetry record from a file (stdin when neither source is given)
    #[arg(short, long, conflicts_with = "json")]
    pub input: Option<PathBuf>,

    /// Inline telemetry record, e.g. '{"gradient_noise": 100}'
    #[arg(long)]
    pub json: Option<String>,

    /// Case identifier copied into the report
    #[arg(long)]
    pub case_id: Option<String>,
}

/// Output format for reports
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
