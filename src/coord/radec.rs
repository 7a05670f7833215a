// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Handle (right ascension, declination) coordinates.
 */

use marlu::{HADec, RADec};
use thiserror::Error;

use crate::{
    math::wrap_phase,
    sexagesimal::{
        sexagesimal_colon_str_to_float, sexagesimal_dms_string_to_degrees,
        sexagesimal_hms_string_to_degrees, SexagesimalError,
    },
};

/// A fixed position on the sky, i.e. a Right Ascension and Declination. All
/// units are in radians.
///
/// Only the direction matters to fringe stopping; no flux density or distance
/// is kept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyPosition {
    /// Right ascension [radians]
    pub ra: f64,
    /// Declination [radians]
    pub dec: f64,
}

impl SkyPosition {
    /// Make a new `SkyPosition` struct from values in radians.
    pub fn new(ra: f64, dec: f64) -> Self {
        Self { ra, dec }
    }

    /// Make a new `SkyPosition` struct from values in degrees.
    pub fn from_degrees(ra: f64, dec: f64) -> Self {
        Self::new(ra.to_radians(), dec.to_radians())
    }

    /// Get the equivalent [RADec] struct.
    pub fn to_radec(&self) -> RADec {
        RADec::from_radians(self.ra, self.dec)
    }

    /// Given a local sidereal time, make a new [HADec] struct from a
    /// `SkyPosition`. The hour angle is normalised to (-π, π].
    pub fn to_hadec(&self, lst_rad: f64) -> HADec {
        let hadec = self.to_radec().to_hadec(lst_rad);
        HADec::from_radians(wrap_phase(hadec.ha), hadec.dec)
    }

    /// Parse user-supplied right ascension and declination strings.
    ///
    /// The right ascension may be "HH:MM:SS.S", "HHhMMmSS.Ss" (both hours) or
    /// a plain number (degrees). The declination may be "DD:MM:SS.S",
    /// "DDdMMmSS.Ss" or a plain number (degrees).
    pub fn parse(ra: &str, dec: &str) -> Result<SkyPosition, SkyPositionError> {
        let ra_deg = parse_ra_degrees(ra).map_err(|e| SkyPositionError::Ra {
            input: ra.to_string(),
            err: e,
        })?;
        let dec_deg = parse_dec_degrees(dec).map_err(|e| SkyPositionError::Dec {
            input: dec.to_string(),
            err: e,
        })?;

        if !ra_deg.is_finite() || !(0.0..360.0).contains(&ra_deg) {
            return Err(SkyPositionError::RaOutOfRange(ra_deg));
        }
        if !dec_deg.is_finite() || !(-90.0..=90.0).contains(&dec_deg) {
            return Err(SkyPositionError::DecOutOfRange(dec_deg));
        }

        Ok(SkyPosition::from_degrees(ra_deg, dec_deg))
    }
}

fn parse_ra_degrees(s: &str) -> Result<f64, SexagesimalError> {
    if let Ok(deg) = s.trim().parse::<f64>() {
        return Ok(deg);
    }
    if s.contains(':') {
        Ok(15.0 * sexagesimal_colon_str_to_float(s)?)
    } else {
        sexagesimal_hms_string_to_degrees(s)
    }
}

fn parse_dec_degrees(s: &str) -> Result<f64, SexagesimalError> {
    if let Ok(deg) = s.trim().parse::<f64>() {
        return Ok(deg);
    }
    if s.contains(':') {
        sexagesimal_colon_str_to_float(s)
    } else {
        sexagesimal_dms_string_to_degrees(s)
    }
}

impl From<SkyPosition> for RADec {
    fn from(pos: SkyPosition) -> RADec {
        pos.to_radec()
    }
}

impl std::fmt::Display for SkyPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}°, {}°)", self.ra.to_degrees(), self.dec.to_degrees())
    }
}

#[derive(Error, Debug)]
pub enum SkyPositionError {
    #[error("Couldn't parse right ascension '{input}': {err}")]
    Ra { input: String, err: SexagesimalError },

    #[error("Couldn't parse declination '{input}': {err}")]
    Dec { input: String, err: SexagesimalError },

    #[error("Right ascension {0}° is not within [0, 360) degrees")]
    RaOutOfRange(f64),

    #[error("Declination {0}° is not within [-90, 90] degrees")]
    DecOutOfRange(f64),
}
