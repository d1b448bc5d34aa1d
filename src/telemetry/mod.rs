// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Telemetry input for the estimator
//!
//! A record is a loose mapping of metric names to JSON values. Only the four
//! keys in [`MetricKey`] are read; everything else rides along untouched.

pub mod key;
pub mod record;

pub use key::*;
pub use record::*;
