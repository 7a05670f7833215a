// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Fringe stopping for a two-element radio interferometer.

Given a fixed reference source, an observing site and a sequence of timestamped
phase samples, the geometric phase the source would produce is modelled for
every sample and subtracted, leaving a residual wrapped to (-π, π].
 */

mod cli;
pub mod constants;
pub mod coord;
pub mod correct;
pub(crate) mod math;
pub mod model;
mod params;
pub mod plot;
pub mod samples;
pub mod sexagesimal;
pub mod site;
pub mod time;
pub mod unit_parsing;

lazy_static::lazy_static! {
    /// Are progress bars being drawn? This should only ever be enabled by CLI
    /// code.
    static ref PROGRESS_BARS: crossbeam_utils::atomic::AtomicCell<bool> =
        crossbeam_utils::atomic::AtomicCell::new(false);
}

// Re-exports.
pub use cli::{Fringestop, FringestopError};
pub use coord::{compute_direction, SkyPosition, TopocentricDirection};
pub use correct::{correct_samples, correct_samples_par, CorrectedSample};
pub use math::wrap_phase;
pub use model::compute_phase;
pub use samples::Sample;
pub use site::ObserverSite;
