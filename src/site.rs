// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The geometry of a two-element interferometer site.

use thiserror::Error;

use crate::unit_parsing::{parse_freq_hz, UnitParseError};

/// Everything about the receiving site that the phase model needs. This is
/// constant for a whole run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverSite {
    /// Longitude on Earth, East is positive \[radians\]
    pub longitude_rad: f64,

    /// Latitude on Earth, North is positive \[radians\]
    pub latitude_rad: f64,

    /// The East-West component of the baseline \[metres\]
    pub baseline_ew_m: f64,

    /// The North-South component of the baseline \[metres\]
    pub baseline_ns_m: f64,

    /// The observing frequency \[Hz\]
    pub freq_hz: f64,

    /// A constant instrumental phase offset \[radians\]
    pub phase_offset_rad: f64,
}

impl ObserverSite {
    /// Make a new `ObserverSite` from the units people normally quote:
    /// degrees for the position and phase offset, metres for the baseline and
    /// MHz for the frequency. The values are validated.
    pub fn from_user_units(
        longitude_deg: f64,
        latitude_deg: f64,
        baseline_ew_m: f64,
        baseline_ns_m: f64,
        freq_mhz: f64,
        phase_offset_deg: f64,
    ) -> Result<ObserverSite, SiteError> {
        Self::validate(
            longitude_deg,
            latitude_deg,
            baseline_ew_m,
            baseline_ns_m,
            freq_mhz * 1e6,
            phase_offset_deg,
        )
    }

    /// Parse the free-form site arguments: longitude and latitude \[degrees\],
    /// the East-West and North-South baseline components \[metres\], the
    /// frequency (\[MHz\] unless a unit is attached) and the phase offset
    /// \[degrees, -180 to 180\].
    pub fn parse(
        longitude: &str,
        latitude: &str,
        baseline_ew: &str,
        baseline_ns: &str,
        freq: &str,
        phase_offset: &str,
    ) -> Result<ObserverSite, SiteError> {
        let float = |name: &'static str, s: &str| -> Result<f64, SiteError> {
            s.trim().parse().map_err(|_| SiteError::NotANumber {
                name,
                input: s.to_string(),
            })
        };
        let freq_hz = parse_freq_hz(freq)?;

        Self::validate(
            float("longitude", longitude)?,
            float("latitude", latitude)?,
            float("East-West baseline", baseline_ew)?,
            float("North-South baseline", baseline_ns)?,
            freq_hz,
            float("phase offset", phase_offset)?,
        )
    }

    fn validate(
        longitude_deg: f64,
        latitude_deg: f64,
        baseline_ew_m: f64,
        baseline_ns_m: f64,
        freq_hz: f64,
        phase_offset_deg: f64,
    ) -> Result<ObserverSite, SiteError> {
        if !longitude_deg.is_finite() || !(-180.0..=360.0).contains(&longitude_deg) {
            return Err(SiteError::BadLongitude(longitude_deg));
        }
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(SiteError::BadLatitude(latitude_deg));
        }
        if !baseline_ew_m.is_finite() || !baseline_ns_m.is_finite() {
            return Err(SiteError::BadBaseline {
                ew: baseline_ew_m,
                ns: baseline_ns_m,
            });
        }
        if !freq_hz.is_finite() || freq_hz <= 0.0 {
            return Err(SiteError::BadFrequency(freq_hz));
        }
        if !phase_offset_deg.is_finite() || !(-180.0..=180.0).contains(&phase_offset_deg) {
            return Err(SiteError::BadPhaseOffset(phase_offset_deg));
        }

        Ok(ObserverSite {
            longitude_rad: longitude_deg.to_radians(),
            latitude_rad: latitude_deg.to_radians(),
            baseline_ew_m,
            baseline_ns_m,
            freq_hz,
            phase_offset_rad: phase_offset_deg.to_radians(),
        })
    }

    /// The length of the baseline \[metres\].
    pub fn baseline_length_m(&self) -> f64 {
        self.baseline_ew_m.hypot(self.baseline_ns_m)
    }
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Couldn't parse the {name} '{input}' as a number")]
    NotANumber { name: &'static str, input: String },

    #[error("The longitude {0}° is not within [-180, 360] degrees")]
    BadLongitude(f64),

    #[error("The latitude {0}° is not within [-90, 90] degrees")]
    BadLatitude(f64),

    #[error("The baseline ({ew}m East-West, {ns}m North-South) is not finite")]
    BadBaseline { ew: f64, ns: f64 },

    #[error("The frequency {0}Hz must be positive and finite")]
    BadFrequency(f64),

    #[error("The phase offset {0}° is not within [-180, 180] degrees")]
    BadPhaseOffset(f64),

    #[error(transparent)]
    Freq(#[from] UnitParseError),
}
