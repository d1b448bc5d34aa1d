// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations for the effest binary

pub mod analyze;
pub mod coefficients;
