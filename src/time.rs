// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Helper functions around time.
//!
//! Sample timestamps are integer microseconds since the Unix epoch (UTC).
//! UT1 is approximated by UTC when deriving sidereal time; the difference
//! (DUT1) is always less than 0.9 seconds.

use hifitime::{Duration, Epoch};
use marlu::precession::get_lmst;

use crate::{constants::MICROS_PER_SECOND, math::wrap_positive};

/// Convert a sample timestamp (microseconds since the Unix epoch) into a UTC
/// [Epoch].
pub fn timestamp_to_epoch(timestamp_micros: i64) -> Epoch {
    Epoch::from_unix_seconds(timestamp_micros as f64 / MICROS_PER_SECOND)
}

/// Get the local mean sidereal time \[radians, 0 to 2π\] of an [Epoch] for an
/// observer at the given East-positive longitude \[radians\].
pub fn lmst(epoch: Epoch, longitude_rad: f64) -> f64 {
    let dut1 = Duration::from_seconds(0.0);
    wrap_positive(get_lmst(longitude_rad, epoch, dut1))
}

/// Get the local mean sidereal time \[radians\] directly from a sample
/// timestamp.
pub fn lmst_from_timestamp(timestamp_micros: i64, longitude_rad: f64) -> f64 {
    lmst(timestamp_to_epoch(timestamp_micros), longitude_rad)
}
