// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use indicatif::{
    ParallelProgressIterator, ProgressBar, ProgressDrawTarget, ProgressIterator, ProgressStyle,
};
use log::{debug, info};
use rayon::prelude::*;
use thiserror::Error;
use vec1::Vec1;

use crate::{
    cli::{display_warnings, Warn},
    coord::SkyPosition,
    correct::{correct_sample, CorrectedSample},
    plot::{plot_phases, PlotError},
    samples::{write_binary, write_text, FileWriteError, Sample},
    site::ObserverSite,
    PROGRESS_BARS,
};

pub(crate) struct FringeStopParams {
    /// The observed samples, in file order.
    pub(crate) samples: Vec1<Sample>,

    /// The reference source whose fringes are stopped.
    pub(crate) sky_position: SkyPosition,

    pub(crate) site: ObserverSite,

    /// Where the residual samples are written as binary records.
    pub(crate) output_bin: PathBuf,

    /// Where the residual samples are written as text.
    pub(crate) output_txt: PathBuf,

    /// If specified, a PNG of the observed, modelled and residual phases.
    pub(crate) plot: Option<PathBuf>,

    /// Use the rayon thread pool?
    pub(crate) parallel: bool,
}

impl FringeStopParams {
    pub(crate) fn run(&self) -> Result<Vec<CorrectedSample>, FringeStopError> {
        let FringeStopParams {
            samples,
            sky_position,
            site,
            output_bin,
            output_txt,
            plot,
            parallel,
        } = self;

        let progress = ProgressBar::with_draw_target(
            Some(samples.len() as _),
            if PROGRESS_BARS.load() {
                ProgressDrawTarget::stdout()
            } else {
                ProgressDrawTarget::hidden()
            },
        )
        .with_style(
            ProgressStyle::default_bar()
                .template("{msg:17}: [{wide_bar:.blue}] {pos:2}/{len:2} samples ({elapsed_precise}<{eta_precise})").unwrap()
                .progress_chars("=> "),
        )
        .with_position(0)
        .with_message("Fringe stopping");

        info!("Fringe stopping {} samples", samples.len());
        let corrected: Vec<CorrectedSample> = if *parallel {
            samples
                .as_slice()
                .par_iter()
                .progress_with(progress.clone())
                .map(|s| correct_sample(s, sky_position, site))
                .collect()
        } else {
            samples
                .iter()
                .progress_with(progress.clone())
                .map(|s| correct_sample(s, sky_position, site))
                .collect()
        };
        progress.abandon_with_message("Finished fringe stopping");

        let num_nan = corrected.iter().filter(|c| c.has_nan()).count();
        if num_nan > 0 {
            format!(
                "{num_nan} of {} samples have a NaN phase; they are written out as-is",
                corrected.len()
            )
            .warn();
        }
        display_warnings();

        let residuals = corrected
            .iter()
            .map(CorrectedSample::to_residual_sample)
            .collect::<Vec<_>>();
        write_binary(&residuals, output_bin)?;
        info!("Wrote {}", output_bin.display());
        write_text(&residuals, output_txt)?;
        info!("Wrote {}", output_txt.display());

        if let Some(plot) = plot {
            debug!("Plotting");
            plot_phases(&corrected, plot)?;
            info!("Wrote {}", plot.display());
        }

        Ok(corrected)
    }
}

#[derive(Error, Debug)]
pub(crate) enum FringeStopError {
    #[error(transparent)]
    FileWrite(#[from] FileWriteError),

    #[error(transparent)]
    Plot(#[from] PlotError),
}
