// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The interferometer phase response of a point source.


use crate::{
    constants::{TAU, VEL_C},
    coord::{Enu, TopocentricDirection},
    site::ObserverSite,
};

/// The site's baseline as a vector in the local (East, North, Up) frame
/// \[metres\]. The baseline is horizontal.
pub fn baseline_enu(site: &ObserverSite) -> Enu {
    Enu {
        e: site.baseline_ew_m,
        n: site.baseline_ns_m,
        u: 0.0,
    }
}

/// The geometric delay \[metres\] for a wavefront arriving from `direction`:
/// the projection of the baseline onto the unit vector towards the source.
///
/// Because the baseline is horizontal, the delay carries a factor of cos(el);
/// a source at the zenith has no delay, whatever its azimuth.
pub fn geometric_delay(direction: &TopocentricDirection, site: &ObserverSite) -> f64 {
    baseline_enu(site).dot(&direction.to_enu())
}

/// Get the phase \[radians\] that a point source in `direction` would produce
/// on the site's baseline, including the instrumental phase offset.
///
/// The result is *not* wrapped; it may lie well outside (-π, π].
pub fn compute_phase(direction: &TopocentricDirection, site: &ObserverSite) -> f64 {
    let delay_m = geometric_delay(direction, site);
    TAU * site.freq_hz * delay_m / VEL_C + site.phase_offset_rad
}
