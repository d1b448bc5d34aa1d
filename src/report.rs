// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Diagnostic report produced by the estimator

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status label carried by every report.
pub const STATUS_ACTIVE: &str = "Resonance Analysis Active";
/// Efficiency gap reported regardless of input.
pub const EFFICIENCY_GAP_PCT: f64 = 7.5;
/// Reclaimable margin reported regardless of input.
pub const RECLAIMABLE_MARGIN_MW: f64 = 14.3;
/// Lifespan note carried by every report.
pub const HARDWARE_LIFESPAN_IMPACT: &str = "Estimated -18% due to thermal fatigue";
/// Recommendation carried by every report.
pub const RECOMMENDATION: &str =
    "Stagger all-reduce synchronization barriers to lower the PDN noise floor";

/// Weighted components, rounded to four decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentBreakdown {
    pub entropy_leak: f64,
    pub coherency_loss: f64,
    #[serde(rename = "ghost_load_detected", alias = "ghost_load")]
    pub ghost_load: f64,
    pub interconnect_jitter: f64,
}

/// Result of a single `analyze` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub status: String,
    pub efficiency_gap_pct: f64,
    #[serde(rename = "reclaimable_mw", alias = "reclaimable_margin_mw")]
    pub reclaimable_margin_mw: f64,
    pub hardware_lifespan_impact: String,
    pub component_breakdown: ComponentBreakdown,
    pub recommendation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
}

impl DiagnosticReport {
    /// Wrap a breakdown with the fixed summary fields.
    pub fn new(component_breakdown: ComponentBreakdown) -> Self {
        Self {
            status: STATUS_ACTIVE.to_string(),
            efficiency_gap_pct: EFFICIENCY_GAP_PCT,
            reclaimable_margin_mw: RECLAIMABLE_MARGIN_MW,
            hardware_lifespan_impact: HARDWARE_LIFESPAN_IMPACT.to_string(),
            component_breakdown,
            recommendation: RECOMMENDATION.to_string(),
            case_id: None,
        }
    }

    /// Tag the report with a caller-supplied case identifier.
    pub fn with_case_id(mut self, case_id: impl Into<String>) -> Self {
        self.case_id = Some(case_id.into());
        self
    }
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Efficiency Diagnostic ===")?;
        writeln!(f)?;
        writeln!(f, "Status: {}", self.status)?;
        if let Some(ref case_id) = self.case_id {
            writeln!(f, "Case: {}", case_id)?;
        }
        writeln!(f, "Efficiency Gap: {}%", self.efficiency_gap_pct)?;
        writeln!(f, "Reclaimable Margin: {} MW", self.reclaimable_margin_mw)?;
        writeln!(f, "Hardware Lifespan: {}", self.hardware_lifespan_impact)?;
        writeln!(f)?;
        writeln!(f, "=== Component Breakdown ===")?;
        let b = &self.component_breakdown;
        writeln!(f, "  entropy_leak:        {:.4}", b.entropy_leak)?;
        writeln!(f, "  coherency_loss:      {:.4}", b.coherency_loss)?;
        writeln!(f, "  ghost_load_detected: {:.4}", b.ghost_load)?;
        writeln!(f, "  interconnect_jitter: {:.4}", b.interconnect_jitter)?;
        writeln!(f)?;
        write!(f, "Recommendation: {}", self.recommendation)
    }
}
