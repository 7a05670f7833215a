// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. `fringestop` should do all of its
calculations in double precision; only the plots are drawn at lower precision.
 */

pub use std::f64::consts::{FRAC_PI_2, PI, TAU};

// Things that should never change.

/// Speed of light \[metres/second\]
pub const VEL_C: f64 = 299_792_458.0;

/// The length of a mean sidereal day \[seconds\].
pub const SIDEREAL_DAY_SECONDS: f64 = 86_164.090_5;

/// Microseconds per hour; used to put timestamps on plot axes.
pub const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

/// Microseconds per second.
pub const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// The default file that binary residuals are written to.
pub const DEFAULT_OUTPUT_BIN: &str = "rotate.out";

/// The default file that text residuals are written to.
pub const DEFAULT_OUTPUT_TXT: &str = "rotate.txt";
