// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Coefficients command

use crate::cli::args::OutputFormat;
use crate::config::CoefficientSet;
use crate::error::Result;

/// Execute the coefficients command
pub fn execute(coefficients: &CoefficientSet, format: &OutputFormat) -> Result<()> {
    println!("{}", render(coefficients, format)?);
    Ok(())
}

/// Text output is TOML so it can be pasted straight into a coefficients file.
pub fn render(coefficients: &CoefficientSet, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(coefficients)?),
        OutputFormat::Text => coefficients.to_toml(),
    }
}
