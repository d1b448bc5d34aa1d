// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for effest
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Main error type for estimator operations
#[derive(Error, Debug)]
pub enum EstimatorError {
    /// A recognized metric holds a value that is not a number
    #[error("Input type error: metric '{key}' expected a number, found {found}")]
    InputType { key: String, found: String },

    /// Degradation factor denominator collapsed to zero
    #[error("Division by zero: interconnect penalty of {interconnect_penalty} leaves no headroom")]
    DivisionByZero { interconnect_penalty: f64 },

    /// Telemetry document has the wrong shape
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Coefficient configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),
}

/// Result type alias for estimator operations
pub type Result<T> = std::result::Result<T, EstimatorError>;

impl From<toml::de::Error> for EstimatorError {
    fn from(err: toml::de::Error) -> Self {
        EstimatorError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for EstimatorError {
    fn from(err: toml::ser::Error) -> Self {
        EstimatorError::Toml(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_type_names_key_and_kind() {
        let err = EstimatorError::InputType {
            key: "sync_latency".to_string(),
            found: "string".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("sync_latency"));
        assert!(msg.contains("string"));
    }

    #[test]
    fn test_division_by_zero_reports_penalty() {
        let err = EstimatorError::DivisionByZero {
            interconnect_penalty: 1.0,
        };
        assert!(err.to_string().contains("Division by zero"));
        assert!(err.to_string().contains('1'));
    }

    #[test]
    fn test_config_error() {
        let err = EstimatorError::Config("bad coefficient".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_invalid_input() {
        let err = EstimatorError::InvalidInput("not an object".to_string());
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: EstimatorError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: EstimatorError = toml_err.into();
        assert!(matches!(err, EstimatorError::Toml(_)));
    }

    #[test]
    fn test_debug() {
        let err = EstimatorError::DivisionByZero {
            interconnect_penalty: 1.0,
        };
        assert!(format!("{:?}", err).contains("DivisionByZero"));
    }
}
