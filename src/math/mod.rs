// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Some helper mathematics.


use crate::constants::{PI, TAU};

/// Reduce an angle to its canonical representative in (-π, π] \[radians\].
///
/// Any finite angle is reduced correctly, no matter how many turns it spans.
/// Non-finite input gives NaN.
///
/// # Examples
///
/// ```
/// # use fringestop::wrap_phase;
/// # use approx::assert_abs_diff_eq;
/// # use std::f64::consts::PI;
/// assert_abs_diff_eq!(wrap_phase(1.5 * PI), -0.5 * PI, epsilon = 1e-12);
/// assert_abs_diff_eq!(wrap_phase(-PI), PI);
/// ```
#[inline]
pub fn wrap_phase(phase: f64) -> f64 {
    // `round` rounds half away from zero, so the result lands in [-π, π];
    // only the lower edge needs to be moved.
    let wrapped = phase - TAU * (phase / TAU).round();
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Reduce an angle to [0, 2π) \[radians\]. Non-finite input gives NaN.
#[inline]
pub(crate) fn wrap_positive(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // `rem_euclid` can round up to exactly 2π for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
