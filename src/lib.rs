// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! effest - weighted efficiency-loss estimator for scalar cluster telemetry.
//!
//! This crate exposes the scoring core used by the `effest` CLI (`src/main.rs`):
//! - `telemetry`: the input record and its recognized metric keys
//! - `config`: the immutable coefficient set and its TOML loader
//! - `estimator`: the `analyze` operation and rounding rules
//! - `report`: the diagnostic report and its serialized shape
//! - `cli`, `commands`: argument parsing and subcommand execution
//!
//! ```
//! use effest::estimator::Estimator;
//! use effest::telemetry::{MetricKey, TelemetryRecord};
//!
//! let record = TelemetryRecord::new().with_metric(MetricKey::GradientNoise, 100.0);
//! let report = Estimator::default().analyze(&record).unwrap();
//! assert_eq!(report.component_breakdown.entropy_leak, 4.2);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod estimator;
pub mod report;
pub mod telemetry;

pub use error::{EstimatorError, Result};
