// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::{Path, PathBuf};

use crate::error::Result;

use super::CoefficientSet;

impl CoefficientSet {
    /// Get the default coefficients file path.
    pub fn default_path() -> PathBuf {
        Self::effest_home().join("coefficients.toml")
    }

    /// Load coefficients from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load coefficients from a specific path.
    ///
    /// A missing file yields the baseline set. Keys absent from the file keep
    /// their baseline value.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no coefficients file, using baseline");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let set: CoefficientSet = toml::from_str(&content)?;
        set.validate()?;
        tracing::debug!(path = %path.display(), ?set, "loaded coefficients");
        Ok(set)
    }

    /// Get the effest home directory (~/.effest or $EFFEST_HOME).
    pub fn effest_home() -> PathBuf {
        if let Ok(home) = std::env::var("EFFEST_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".effest")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EstimatorError;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_missing_file_is_baseline() {
        let dir = TempDir::new().unwrap();
        let set = CoefficientSet::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(set, CoefficientSet::default());
    }

    #[test]
    fn test_load_from_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("coefficients.toml");
        std::fs::write(
            &path,
            "entropy_coefficient = 0.05\ninterconnect_latency_tax = 0.002\n",
        )
        .unwrap();

        let set = CoefficientSet::load_from(&path).unwrap();
        assert_eq!(set.entropy_coefficient, 0.05);
        assert_eq!(set.interconnect_latency_tax, 0.002);
        assert_eq!(set.sync_coherency_coefficient, 0.021);
    }

    #[test]
    fn test_load_from_malformed_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("coefficients.toml");
        std::fs::write(&path, "entropy_coefficient = \"high\"").unwrap();

        let err = CoefficientSet::load_from(&path).unwrap_err();
        assert!(matches!(err, EstimatorError::Toml(_)));
    }

    #[test]
    fn test_load_from_rejects_non_finite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("coefficients.toml");
        std::fs::write(&path, "thermal_jitter_weight = inf").unwrap();

        let err = CoefficientSet::load_from(&path).unwrap_err();
        assert!(matches!(err, EstimatorError::Config(_)));
    }

    #[test]
    fn test_default_path_file_name() {
        assert!(CoefficientSet::default_path().ends_with("coefficients.toml"));
    }
}
