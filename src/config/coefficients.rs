// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Weighting coefficients
//!
//! Loaded once from ~/.effest/coefficients.toml (or a path given on the
//! command line) and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, Result};

mod io;

/// Multiplier applied to `gradient_noise`.
pub const BASELINE_ENTROPY_COEFFICIENT: f64 = 0.042;
/// Multiplier applied to `sync_latency`.
pub const BASELINE_SYNC_COHERENCY_COEFFICIENT: f64 = 0.021;
/// Multiplier applied to `pdn_jitter_amplitude`.
pub const BASELINE_THERMAL_JITTER_WEIGHT: f64 = 0.012;
/// Multiplier applied to `interconnect_jitter`.
pub const BASELINE_INTERCONNECT_LATENCY_TAX: f64 = 0.0012;

/// The four weights, one per telemetry metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientSet {
    #[serde(default = "default_entropy_coefficient")]
    pub entropy_coefficient: f64,

    #[serde(default = "default_sync_coherency_coefficient")]
    pub sync_coherency_coefficient: f64,

    #[serde(default = "default_thermal_jitter_weight")]
    pub thermal_jitter_weight: f64,

    #[serde(default = "default_interconnect_latency_tax")]
    pub interconnect_latency_tax: f64,
}

fn default_entropy_coefficient() -> f64 {
    BASELINE_ENTROPY_COEFFICIENT
}

fn default_sync_coherency_coefficient() -> f64 {
    BASELINE_SYNC_COHERENCY_COEFFICIENT
}

fn default_thermal_jitter_weight() -> f64 {
    BASELINE_THERMAL_JITTER_WEIGHT
}

fn default_interconnect_latency_tax() -> f64 {
    BASELINE_INTERCONNECT_LATENCY_TAX
}

impl Default for CoefficientSet {
    fn default() -> Self {
        Self {
            entropy_coefficient: default_entropy_coefficient(),
            sync_coherency_coefficient: default_sync_coherency_coefficient(),
            thermal_jitter_weight: default_thermal_jitter_weight(),
            interconnect_latency_tax: default_interconnect_latency_tax(),
        }
    }
}

impl CoefficientSet {
    /// Reject coefficients that would poison every report.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("entropy_coefficient", self.entropy_coefficient),
            ("sync_coherency_coefficient", self.sync_coherency_coefficient),
            ("thermal_jitter_weight", self.thermal_jitter_weight),
            ("interconnect_latency_tax", self.interconnect_latency_tax),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(EstimatorError::Config(format!(
                    "{} must be a finite number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Render as TOML, in the same shape `load_from` accepts.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
