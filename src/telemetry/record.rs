// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{EstimatorError, Result};

use super::MetricKey;

/// Scalar telemetry readings supplied by the caller.
///
/// Values are kept as raw JSON so a bad reading surfaces as an
/// [`EstimatorError::InputType`] when it is read, not when it is parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TelemetryRecord {
    values: Map<String, Value>,
}

impl TelemetryRecord {
    /// Create an empty record. Every metric reads as `0.0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for a recognized metric.
    pub fn with_metric(mut self, key: MetricKey, value: f64) -> Self {
        self.insert(key.as_str(), Value::from(value));
        self
    }

    /// Insert an arbitrary value under any key.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// Parse a record from a JSON document.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    /// Build a record from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(EstimatorError::InvalidInput(format!(
                "telemetry record must be a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Numeric reading for `key`. Absent keys read as `0.0`.
    ///
    /// Only JSON numbers are accepted; booleans are an `InputType` error, not 1/0.
    pub fn metric(&self, key: MetricKey) -> Result<f64> {
        let Some(value) = self.values.get(key.as_str()) else {
            return Ok(0.0);
        };

        match value {
            Value::Number(n) => n.as_f64().ok_or_else(|| EstimatorError::InputType {
                key: key.to_string(),
                found: "unrepresentable number".to_string(),
            }),
            other => Err(EstimatorError::InputType {
                key: key.to_string(),
                found: json_kind(other).to_string(),
            }),
        }
    }

    /// Raw value stored under `key`, recognized or not.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(MetricKey, f64)> for TelemetryRecord {
    fn from_iter<I: IntoIterator<Item = (MetricKey, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |record, (key, value)| record.with_metric(key, value))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_metric_reads_zero() {
        let record = TelemetryRecord::new();
        for key in MetricKey::ALL {
            assert_eq!(record.metric(key).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_integer_and_float_values() {
        let record =
            TelemetryRecord::from_json_str(r#"{"gradient_noise": 100, "sync_latency": 2.5}"#)
                .unwrap();
        assert_eq!(record.metric(MetricKey::GradientNoise).unwrap(), 100.0);
        assert_eq!(record.metric(MetricKey::SyncLatency).unwrap(), 2.5);
    }

    #[test]
    fn test_negative_values_accepted() {
        let record = TelemetryRecord::new().with_metric(MetricKey::InterconnectJitter, -40.0);
        assert_eq!(record.metric(MetricKey::InterconnectJitter).unwrap(), -40.0);
    }

    #[test]
    fn test_string_value_is_type_error() {
        let record = TelemetryRecord::from_value(json!({"sync_latency": "fast"})).unwrap();
        match record.metric(MetricKey::SyncLatency) {
            Err(EstimatorError::InputType { key, found }) => {
                assert_eq!(key, "sync_latency");
                assert_eq!(found, "string");
            }
            other => panic!("expected InputType, got {:?}", other),
        }
    }

    #[test]
    fn test_null_and_bool_are_type_errors() {
        let record = TelemetryRecord::from_value(
            json!({"gradient_noise": null, "pdn_jitter_amplitude": true}),
        )
        .unwrap();
        assert!(matches!(
            record.metric(MetricKey::GradientNoise),
            Err(EstimatorError::InputType { .. })
        ));
        assert!(matches!(
            record.metric(MetricKey::PdnJitterAmplitude),
            Err(EstimatorError::InputType { .. })
        ));
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let record = TelemetryRecord::from_value(json!({"fan_rpm": "loud"})).unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("fan_rpm"), Some(&json!("loud")));
        assert_eq!(record.metric(MetricKey::GradientNoise).unwrap(), 0.0);
    }

    #[test]
    fn test_non_object_rejected() {
        let err = TelemetryRecord::from_json_str("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, EstimatorError::InvalidInput(_)));
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = TelemetryRecord::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, EstimatorError::Json(_)));
    }

    #[test]
    fn test_from_iterator() {
        let record: TelemetryRecord = [
            (MetricKey::GradientNoise, 1.0),
            (MetricKey::SyncLatency, 2.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(record.len(), 2);
        assert!(!record.is_empty());
        assert_eq!(record.metric(MetricKey::SyncLatency).unwrap(), 2.0);
    }
}
