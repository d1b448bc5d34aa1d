// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

/// Decimal places kept in every breakdown component.
pub const BREAKDOWN_PRECISION: i32 = 4;

/// Round `value` to `places` decimal digits, ties away from zero.
///
/// The tie is decided on the binary value after scaling, so a literal such as
/// `0.00005` may land on either side of it. Values too large to carry any
/// fractional digits at `places` come back unchanged.
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_INTEGER {
        return value;
    }
    scaled.round() / scale
}

// Above 2^52 every f64 is already an integer.
const MAX_EXACT_INTEGER: f64 = 4_503_599_627_370_496.0;
