// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Efficiency estimator
//!
//! Turns a [`TelemetryRecord`] into a [`DiagnosticReport`] by weighting each
//! recognized metric with its coefficient. The estimator holds only an
//! immutable [`CoefficientSet`], so one instance can be shared freely across
//! threads.

pub mod rounding;

pub use rounding::*;

use crate::config::CoefficientSet;
use crate::error::{EstimatorError, Result};
use crate::report::{ComponentBreakdown, DiagnosticReport};
use crate::telemetry::{MetricKey, TelemetryRecord};

/// Share of the ghost load that feeds the degradation factor.
pub const GHOST_LOAD_DEGRADATION_SHARE: f64 = 0.15;

/// Weighted components before rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentValues {
    pub entropy_leak: f64,
    pub coherency_loss: f64,
    pub ghost_load: f64,
    pub interconnect_penalty: f64,
}

impl ComponentValues {
    /// Round every component to the report precision.
    pub fn rounded(&self) -> ComponentBreakdown {
        ComponentBreakdown {
            entropy_leak: round_to_places(self.entropy_leak, BREAKDOWN_PRECISION),
            coherency_loss: round_to_places(self.coherency_loss, BREAKDOWN_PRECISION),
            ghost_load: round_to_places(self.ghost_load, BREAKDOWN_PRECISION),
            interconnect_jitter: round_to_places(self.interconnect_penalty, BREAKDOWN_PRECISION),
        }
    }
}

/// Stateless scorer bound to one coefficient set.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    coefficients: CoefficientSet,
}

impl Estimator {
    pub fn new(coefficients: CoefficientSet) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &CoefficientSet {
        &self.coefficients
    }

    /// Weight each metric by its coefficient. No rounding.
    pub fn components(&self, record: &TelemetryRecord) -> Result<ComponentValues> {
        let c = &self.coefficients;
        Ok(ComponentValues {
            entropy_leak: record.metric(MetricKey::GradientNoise)? * c.entropy_coefficient,
            coherency_loss: record.metric(MetricKey::SyncLatency)? * c.sync_coherency_coefficient,
            ghost_load: record.metric(MetricKey::PdnJitterAmplitude)? * c.thermal_jitter_weight,
            interconnect_penalty: record.metric(MetricKey::InterconnectJitter)?
                * c.interconnect_latency_tax,
        })
    }

    /// `(ghost_load * 0.15) / (1 - interconnect_penalty)`.
    ///
    /// Fails instead of returning an infinity or NaN when the penalty is
    /// exactly one.
    pub fn degradation_factor(&self, values: &ComponentValues) -> Result<f64> {
        let headroom = 1.0 - values.interconnect_penalty;
        if headroom == 0.0 {
            return Err(EstimatorError::DivisionByZero {
                interconnect_penalty: values.interconnect_penalty,
            });
        }
        Ok((values.ghost_load * GHOST_LOAD_DEGRADATION_SHARE) / headroom)
    }

    /// Score a telemetry record.
    pub fn analyze(&self, record: &TelemetryRecord) -> Result<DiagnosticReport> {
        let values = self.components(record)?;
        let degradation = self.degradation_factor(&values)?;

        tracing::debug!(
            target: "effest.estimator",
            entropy_leak = values.entropy_leak,
            coherency_loss = values.coherency_loss,
            ghost_load = values.ghost_load,
            interconnect_penalty = values.interconnect_penalty,
            degradation_factor = degradation,
            "analyzed telemetry record"
        );

        Ok(DiagnosticReport::new(values.rounded()))
    }

    /// Score a record and tag the report with `case_id`.
    pub fn analyze_with_case(
        &self,
        record: &TelemetryRecord,
        case_id: impl Into<String>,
    ) -> Result<DiagnosticReport> {
        Ok(self.analyze(record)?.with_case_id(case_id))
    }
}
