// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Handle (azimuth, elevation) coordinates.
*/

use marlu::AzEl;

use crate::math::wrap_positive;

/// A topocentric direction, i.e. an azimuth and elevation as seen from a
/// particular place on Earth. All units are in radians.
///
/// The azimuth is measured from North, increasing towards East.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TopocentricDirection {
    /// Azimuth [radians]
    pub az: f64,
    /// Elevation [radians]
    pub el: f64,
}

impl TopocentricDirection {
    /// Make a new `TopocentricDirection` struct from values in radians.
    pub fn new(az: f64, el: f64) -> Self {
        Self { az, el }
    }

    /// Make a new `TopocentricDirection` struct from values in degrees.
    pub fn from_degrees(az: f64, el: f64) -> Self {
        Self::new(az.to_radians(), el.to_radians())
    }

    /// Get the unit vector pointing in this direction, expressed in the local
    /// (East, North, Up) frame.
    pub fn to_enu(&self) -> Enu {
        let (s_az, c_az) = self.az.sin_cos();
        let (s_el, c_el) = self.el.sin_cos();
        Enu {
            e: c_el * s_az,
            n: c_el * c_az,
            u: s_el,
        }
    }
}

impl From<AzEl> for TopocentricDirection {
    /// The azimuth is reduced to [0, 2π); ERFA's `hd2ae` can land on exactly
    /// 2π for sources a hair west of North.
    fn from(azel: AzEl) -> Self {
        Self::new(wrap_positive(azel.az), azel.el)
    }
}

impl std::fmt::Display for TopocentricDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}°, {}°)", self.az.to_degrees(), self.el.to_degrees())
    }
}

/// Components of a vector in the local East, North, Up frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Enu {
    /// East component
    pub e: f64,
    /// North component
    pub n: f64,
    /// Up component
    pub u: f64,
}

impl Enu {
    /// The scalar product with another vector in the same frame.
    pub fn dot(&self, other: &Enu) -> f64 {
        self.e * other.e + self.n * other.n + self.u * other.u
    }
}
