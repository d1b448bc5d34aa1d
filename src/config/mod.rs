// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Configuration module for effest
//!
//! Handles the weighting coefficients the estimator is bound to.

pub mod coefficients;

pub use coefficients::*;
