// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to plot the observed, modelled and fringe-stopped phases.
//!
//! The series themselves are plain data; only drawing them needs the
//! "plotting" feature.

use std::path::Path;

use thiserror::Error;

use crate::{constants::MICROS_PER_HOUR, correct::CorrectedSample, math::wrap_phase};

/// One labelled series of (time \[hours\], phase \[radians\]) points.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultSeries {
    pub label: &'static str,
    pub points: Vec<(f64, f64)>,
}

/// Get the "Observed Phases", "Modelled Phases" and "Result" series, in that
/// order. Every phase is wrapped to (-π, π].
pub fn phase_series(corrected: &[CorrectedSample]) -> [ResultSeries; 3] {
    let series = |label, f: fn(&CorrectedSample) -> f64| ResultSeries {
        label,
        points: corrected
            .iter()
            .map(|c| (c.timestamp_micros as f64 / MICROS_PER_HOUR, f(c)))
            .collect(),
    };

    [
        series("Observed Phases", |c| wrap_phase(c.observed_phase)),
        series("Modelled Phases", |c| c.modelled_phase()),
        series("Result", |c| c.residual_phase),
    ]
}

#[cfg(not(feature = "plotting"))]
pub fn plot_phases(_corrected: &[CorrectedSample], _file: &Path) -> Result<(), PlotError> {
    // Plotting is an optional feature. Its C dependencies can't always be
    // built.
    Err(PlotError::NoPlottingFeature)
}

#[cfg(feature = "plotting")]
pub use plotting::plot_phases;

#[cfg(feature = "plotting")]
mod plotting {
    use log::debug;
    use plotters::prelude::*;

    use super::*;
    use crate::constants::PI;

    /// The number of X pixels on the plot.
    const X_PIXELS: u32 = 1600;
    /// The number of Y pixels on the plot.
    const Y_PIXELS: u32 = 1800;

    /// Draw the three series from [phase_series] as vertically stacked panels
    /// in a PNG. Time runs right to left.
    pub fn plot_phases(corrected: &[CorrectedSample], file: &Path) -> Result<(), PlotError> {
        debug!("Plotting {} samples to '{}'", corrected.len(), file.display());
        let series = phase_series(corrected);

        // Hours are negated to reverse the x axis; the labels undo it.
        let (min_hours, max_hours) = series[0].points.iter().map(|(x, _)| *x).fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(acc_min, acc_max), x| (acc_min.min(x), acc_max.max(x)),
        );
        let (x_start, x_end) = if max_hours - min_hours > 0.0 {
            (-max_hours, -min_hours)
        } else {
            // A single sample; give it some room.
            (-max_hours - 0.5, -min_hours + 0.5)
        };

        let root_area = BitMapBackend::new(file, (X_PIXELS, Y_PIXELS)).into_drawing_area();
        root_area
            .fill(&WHITE)
            .map_err(|e| PlotError::Plotters(Box::new(e)))?;
        let panels = root_area.split_evenly((3, 1));

        for (series, panel) in series.iter().zip(panels.iter()) {
            let mut cc = ChartBuilder::on(panel)
                .caption(series.label, ("sans-serif", 40))
                .margin(15)
                .x_label_area_size(50)
                .y_label_area_size(70)
                .build_cartesian_2d(x_start..x_end, -PI..PI)
                .map_err(|e| PlotError::Plotters(Box::new(e)))?;

            cc.configure_mesh()
                .light_line_style(&WHITE)
                .x_desc("Time (Hours)")
                .y_desc("Phase")
                .x_label_formatter(&|x| format!("{:.3}", -x))
                .draw()
                .map_err(|e| PlotError::Plotters(Box::new(e)))?;

            cc.draw_series(PointSeries::of_element(
                series
                    .points
                    .iter()
                    .filter(|(_, y)| !y.is_nan())
                    .map(|(x, y)| (-x, *y)),
                2,
                ShapeStyle::from(&BLUE).filled(),
                &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
            ))
            .map_err(|e| PlotError::Plotters(Box::new(e)))?;
        }

        root_area
            .present()
            .map_err(|e| PlotError::Plotters(Box::new(e)))?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum PlotError {
    #[cfg(not(feature = "plotting"))]
    #[error("fringestop was not compiled with the \"plotting\" feature.\nYou need to compile fringestop from source with this feature to make plots")]
    NoPlottingFeature,

    #[cfg(feature = "plotting")]
    #[error("Error from the plotters library: {0}")]
    Plotters(Box<dyn std::error::Error>),
}
