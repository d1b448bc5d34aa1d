// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Analyze command

use std::io::Read;

use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::config::CoefficientSet;
use crate::error::Result;
use crate::estimator::Estimator;
use crate::report::DiagnosticReport;
use crate::telemetry::TelemetryRecord;

/// Execute the analyze command
pub fn execute(
    args: &AnalyzeArgs,
    coefficients: CoefficientSet,
    format: &OutputFormat,
) -> Result<()> {
    let record = read_record(args, std::io::stdin().lock())?;
    let report = run(args, coefficients, &record)?;
    println!("{}", render(&report, format)?);
    Ok(())
}

/// Resolve the telemetry source: inline JSON, then file, then `stdin`.
pub fn read_record<R: Read>(args: &AnalyzeArgs, mut stdin: R) -> Result<TelemetryRecord> {
    if let Some(ref json) = args.json {
        return TelemetryRecord::from_json_str(json);
    }

    let content = match args.input {
        Some(ref path) => {
            tracing::debug!(path = %path.display(), "reading telemetry file");
            std::fs::read_to_string(path)?
        }
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            buf
        }
    };

    TelemetryRecord::from_json_str(&content)
}

/// Score `record` with a fresh estimator bound to `coefficients`.
pub fn run(
    args: &AnalyzeArgs,
    coefficients: CoefficientSet,
    record: &TelemetryRecord,
) -> Result<DiagnosticReport> {
    let estimator = Estimator::new(coefficients);
    match args.case_id {
        Some(ref case_id) => estimator.analyze_with_case(record, case_id.as_str()),
        None => estimator.analyze(record),
    }
}

/// Format a report for output.
pub fn render(report: &DiagnosticReport, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(report.to_string()),
    }
}
