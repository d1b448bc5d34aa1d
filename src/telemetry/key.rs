// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::fmt;
use std::str::FromStr;

use crate::error::EstimatorError;

/// Telemetry metrics that feed a breakdown component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKey {
    GradientNoise,
    SyncLatency,
    PdnJitterAmplitude,
    InterconnectJitter,
}

impl MetricKey {
    /// Every recognized key, in computation order.
    pub const ALL: [MetricKey; 4] = [
        MetricKey::GradientNoise,
        MetricKey::SyncLatency,
        MetricKey::PdnJitterAmplitude,
        MetricKey::InterconnectJitter,
    ];

    /// Key as it appears in a telemetry document.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::GradientNoise => "gradient_noise",
            MetricKey::SyncLatency => "sync_latency",
            MetricKey::PdnJitterAmplitude => "pdn_jitter_amplitude",
            MetricKey::InterconnectJitter => "interconnect_jitter",
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKey {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| EstimatorError::InvalidInput(format!("unknown metric: {}", s)))
    }
}
