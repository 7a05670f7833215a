// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fringe stopping: subtract the modelled phase of a reference source from
//! each observed sample.


use rayon::prelude::*;

use crate::{
    coord::{compute_direction, SkyPosition},
    math::wrap_phase,
    model::compute_phase,
    samples::Sample,
    site::ObserverSite,
};

/// The outcome of correcting a single [`Sample`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CorrectedSample {
    /// Microseconds since the Unix epoch (UTC).
    pub timestamp_micros: i64,

    pub amplitude: f64,

    /// The phase that was observed \[radians\].
    pub observed_phase: f64,

    /// The modelled phase of the reference source, not wrapped \[radians\].
    pub predicted_phase: f64,

    /// `observed_phase - predicted_phase`, wrapped to (-π, π] \[radians\].
    pub residual_phase: f64,
}

impl CorrectedSample {
    /// The predicted phase wrapped to (-π, π].
    pub fn modelled_phase(&self) -> f64 {
        wrap_phase(self.predicted_phase)
    }

    /// A [`Sample`] carrying the residual phase, ready to be written out.
    pub fn to_residual_sample(&self) -> Sample {
        Sample::new(self.timestamp_micros, self.amplitude, self.residual_phase)
    }

    pub fn has_nan(&self) -> bool {
        self.predicted_phase.is_nan() || self.residual_phase.is_nan()
    }
}

/// Correct one sample.
pub fn correct_sample(
    sample: &Sample,
    sky_position: &SkyPosition,
    site: &ObserverSite,
) -> CorrectedSample {
    let direction = compute_direction(sample.timestamp_micros, sky_position, site);
    let predicted_phase = compute_phase(&direction, site);
    CorrectedSample {
        timestamp_micros: sample.timestamp_micros,
        amplitude: sample.amplitude,
        observed_phase: sample.phase,
        predicted_phase,
        residual_phase: wrap_phase(sample.phase - predicted_phase),
    }
}

/// Correct every sample, in order.
pub fn correct_samples(
    samples: &[Sample],
    sky_position: &SkyPosition,
    site: &ObserverSite,
) -> Vec<CorrectedSample> {
    samples
        .iter()
        .map(|s| correct_sample(s, sky_position, site))
        .collect()
}

/// The same as [`correct_samples`], but samples are distributed over the
/// rayon thread pool. The output is identical and in the same order.
pub fn correct_samples_par(
    samples: &[Sample],
    sky_position: &SkyPosition,
    site: &ObserverSite,
) -> Vec<CorrectedSample> {
    samples
        .par_iter()
        .map(|s| correct_sample(s, sky_position, site))
        .collect()
}
