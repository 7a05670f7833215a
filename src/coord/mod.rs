// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Super module for all coordinate types, and the conversion of a fixed sky
//! position into a topocentric direction.

pub mod azel;
pub mod radec;

// Re-exports.
pub use azel::{Enu, TopocentricDirection};
pub use marlu::{AzEl, HADec, RADec};
pub use radec::{SkyPosition, SkyPositionError};

use crate::{site::ObserverSite, time::lmst_from_timestamp};

/// Get the azimuth and elevation of a fixed sky position, as seen from the
/// observer's site at the given instant (microseconds since the Unix epoch,
/// UTC).
///
/// The azimuth is measured from North through East and lies in [0, 2π). The
/// elevation comes from ERFA's `hd2ae`, which uses a two-argument arctangent
/// and so keeps full precision near the zenith.
///
/// Non-finite inputs give NaN outputs; nothing is clamped.
pub fn compute_direction(
    timestamp_micros: i64,
    sky_position: &SkyPosition,
    site: &ObserverSite,
) -> TopocentricDirection {
    let lst = lmst_from_timestamp(timestamp_micros, site.longitude_rad);
    sky_position
        .to_hadec(lst)
        .to_azel(site.latitude_rad)
        .into()
}
