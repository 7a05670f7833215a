// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.


use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::common::{display_warnings, InfoPrinter, Warn, ARG_FILE_HELP};
use crate::{
    constants::{DEFAULT_OUTPUT_BIN, DEFAULT_OUTPUT_TXT},
    coord::{SkyPosition, SkyPositionError},
    params::FringeStopParams,
    samples::{read_samples, SampleReadError, SAMPLE_FILE_EXTENSIONS},
    sexagesimal::{degrees_to_sexagesimal_dms, degrees_to_sexagesimal_hms},
    site::{ObserverSite, SiteError},
    time::timestamp_to_epoch,
    FringestopError,
};

lazy_static::lazy_static! {
    static ref FILE_HELP: String =
        format!("The file of observed samples. Supported formats: {}", *SAMPLE_FILE_EXTENSIONS);

    static ref OUTPUT_BIN_HELP: String =
        format!("Where to write the fringe-stopped samples as binary records. Default: {DEFAULT_OUTPUT_BIN}");

    static ref OUTPUT_TXT_HELP: String =
        format!("Where to write the fringe-stopped samples as text. Default: {DEFAULT_OUTPUT_TXT}");
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct FringeStopArgs {
    /// Right ascension of the reference source. Either HH:MM:SS.S or
    /// HHhMMmSS.Ss [hours], or a plain number [degrees].
    #[clap(name = "RA")]
    pub(super) ra: Option<String>,

    /// Declination of the reference source. Either DD:MM:SS.S, DDdMMmSS.Ss or
    /// a plain number [degrees].
    #[clap(name = "DEC", allow_hyphen_values = true)]
    pub(super) dec: Option<String>,

    #[clap(name = "FILE", help = FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) file: Option<PathBuf>,

    /// Longitude of the site, East positive [degrees].
    #[clap(name = "LONG", allow_hyphen_values = true)]
    pub(super) longitude: Option<String>,

    /// Latitude of the site, North positive [degrees].
    #[clap(name = "LAT", allow_hyphen_values = true)]
    pub(super) latitude: Option<String>,

    /// The East-West component of the baseline [metres].
    #[clap(name = "BLN_EW", allow_hyphen_values = true)]
    pub(super) baseline_ew: Option<String>,

    /// The North-South component of the baseline [metres].
    #[clap(name = "BLN_NS", allow_hyphen_values = true)]
    pub(super) baseline_ns: Option<String>,

    /// The observing frequency. MHz unless a unit (Hz, kHz, MHz, GHz) is
    /// attached, e.g. 1.4GHz.
    #[clap(name = "FREQ")]
    pub(super) freq: Option<String>,

    /// A constant instrumental phase offset [degrees, -180 to 180].
    #[clap(name = "PHI", allow_hyphen_values = true)]
    pub(super) phase_offset: Option<String>,

    #[clap(long, help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    #[clap(long, help = OUTPUT_BIN_HELP.as_str(), help_heading = "OUTPUT FILES")]
    pub(super) output_bin: Option<PathBuf>,

    #[clap(long, help = OUTPUT_TXT_HELP.as_str(), help_heading = "OUTPUT FILES")]
    pub(super) output_txt: Option<PathBuf>,

    /// Also plot the observed, modelled and fringe-stopped phases to this PNG
    /// file. Only available if compiled with the "plotting" feature.
    #[clap(long, help_heading = "OUTPUT FILES")]
    pub(super) plot: Option<PathBuf>,

    /// Correct the samples one after the other on a single thread.
    #[clap(long)]
    #[serde(default)]
    pub(super) no_parallel: bool,
}

impl FringeStopArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<FringeStopArgs, FringestopError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let FringeStopArgs {
                args_file: _,
                ra,
                dec,
                file,
                longitude,
                latitude,
                baseline_ew,
                baseline_ns,
                freq,
                phase_offset,
                output_bin,
                output_txt,
                plot,
                no_parallel,
            } = unpack_arg_file!(arg_file);

            // Merge all the arguments, preferring the CLI args when available.
            Ok(FringeStopArgs {
                args_file: None,
                ra: cli_args.ra.or(ra),
                dec: cli_args.dec.or(dec),
                file: cli_args.file.or(file),
                longitude: cli_args.longitude.or(longitude),
                latitude: cli_args.latitude.or(latitude),
                baseline_ew: cli_args.baseline_ew.or(baseline_ew),
                baseline_ns: cli_args.baseline_ns.or(baseline_ns),
                freq: cli_args.freq.or(freq),
                phase_offset: cli_args.phase_offset.or(phase_offset),
                output_bin: cli_args.output_bin.or(output_bin),
                output_txt: cli_args.output_txt.or(output_txt),
                plot: cli_args.plot.or(plot),
                no_parallel: cli_args.no_parallel || no_parallel,
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<FringeStopParams, FringestopError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            ra,
            dec,
            file,
            longitude,
            latitude,
            baseline_ew,
            baseline_ns,
            freq,
            phase_offset,
            output_bin,
            output_txt,
            plot,
            no_parallel,
        } = self;

        let ra = ra.ok_or(FringeStopArgsError::MissingArgument("RA"))?;
        let dec = dec.ok_or(FringeStopArgsError::MissingArgument("DEC"))?;
        let file = file.ok_or(FringeStopArgsError::MissingArgument("FILE"))?;
        let longitude = longitude.ok_or(FringeStopArgsError::MissingArgument("LONG"))?;
        let latitude = latitude.ok_or(FringeStopArgsError::MissingArgument("LAT"))?;
        let baseline_ew = baseline_ew.ok_or(FringeStopArgsError::MissingArgument("BLN_EW"))?;
        let baseline_ns = baseline_ns.ok_or(FringeStopArgsError::MissingArgument("BLN_NS"))?;
        let freq = freq.ok_or(FringeStopArgsError::MissingArgument("FREQ"))?;
        let phase_offset = phase_offset.ok_or(FringeStopArgsError::MissingArgument("PHI"))?;

        let sky_position =
            SkyPosition::parse(&ra, &dec).map_err(FringeStopArgsError::SkyPosition)?;
        let site = ObserverSite::parse(
            &longitude,
            &latitude,
            &baseline_ew,
            &baseline_ns,
            &freq,
            &phase_offset,
        )
        .map_err(FringeStopArgsError::Site)?;

        if let Some(plot) = plot.as_ref() {
            let is_png = plot
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("png"))
                .unwrap_or(false);
            if !is_png {
                return Err(FringeStopArgsError::PlotNotPng(plot.clone()).into());
            }

            // Without the feature, nothing can be plotted; don't write any
            // outputs only to fail at the end.
            #[cfg(not(feature = "plotting"))]
            return Err(
                FringeStopArgsError::Plot(crate::plot::PlotError::NoPlottingFeature).into(),
            );
        }

        let samples = read_samples(&file).map_err(FringeStopArgsError::SampleRead)?;
        if !samples.iter().tuple_windows().all(|(a, b)| a.timestamp_micros <= b.timestamp_micros) {
            "The samples are not in time order; they are corrected and written in file order"
                .warn();
        }

        let mut printer = InfoPrinter::new("Fringe stopping".into());
        printer.push_block(vec![
            format!(
                "Source RA {} ({:.4}°), Dec {} ({:.4}°)",
                degrees_to_sexagesimal_hms(sky_position.ra.to_degrees()),
                sky_position.ra.to_degrees(),
                degrees_to_sexagesimal_dms(sky_position.dec.to_degrees()),
                sky_position.dec.to_degrees(),
            )
            .into(),
            format!(
                "Site longitude {:.4}°, latitude {:.4}°",
                site.longitude_rad.to_degrees(),
                site.latitude_rad.to_degrees(),
            )
            .into(),
            format!(
                "Baseline {}m East-West, {}m North-South ({:.3}m long)",
                site.baseline_ew_m,
                site.baseline_ns_m,
                site.baseline_length_m(),
            )
            .into(),
            format!(
                "Frequency {} MHz, phase offset {}°",
                site.freq_hz / 1e6,
                site.phase_offset_rad.to_degrees(),
            )
            .into(),
        ]);
        printer.push_block(vec![
            format!("{} samples from {}", samples.len(), file.display()).into(),
            format!(
                "First: {}",
                timestamp_to_epoch(samples.first().timestamp_micros)
            )
            .into(),
            format!("Last:  {}", timestamp_to_epoch(samples.last().timestamp_micros)).into(),
        ]);

        let output_bin = output_bin.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_BIN));
        let output_txt = output_txt.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_TXT));
        let mut outputs = vec![
            format!("Binary output: {}", output_bin.display()).into(),
            format!("Text output:   {}", output_txt.display()).into(),
        ];
        if let Some(plot) = plot.as_ref() {
            outputs.push(format!("Plot:          {}", plot.display()).into());
        }
        printer.push_block(outputs);
        printer.display();

        display_warnings();

        Ok(FringeStopParams {
            samples,
            sky_position,
            site,
            output_bin,
            output_txt,
            plot,
            parallel: !no_parallel,
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), FringestopError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub(super) enum FringeStopArgsError {
    #[error("The {0} argument was not supplied")]
    MissingArgument(&'static str),

    #[error("The plot file '{}' must end in .png", .0.display())]
    PlotNotPng(PathBuf),

    #[error(transparent)]
    SkyPosition(SkyPositionError),

    #[error(transparent)]
    Site(SiteError),

    #[error(transparent)]
    SampleRead(SampleReadError),

    #[cfg(not(feature = "plotting"))]
    #[error(transparent)]
    Plot(crate::plot::PlotError),
}
