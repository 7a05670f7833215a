// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all fringestop-related errors. This should be the *only*
//! error enum that is publicly visible.

use thiserror::Error;

use super::fringe_stop::FringeStopArgsError;
use crate::{
    coord::SkyPositionError,
    params::FringeStopError,
    plot::PlotError,
    samples::{FileWriteError, SampleReadError, SAMPLE_FILE_EXTENSIONS},
    site::SiteError,
};

const USAGE: &str =
    "Usage: fringestop [OPTIONS] <RA> <DEC> <FILE> <LONG> <LAT> <BLN_EW> <BLN_NS> <FREQ> <PHI>";

/// The *only* publicly visible error from fringestop. Each error message should
/// say where to look for help, unless it's "generic".
#[derive(Error, Debug)]
pub enum FringestopError {
    /// Missing or contradictory command-line arguments.
    #[error("{0}\n\n{USAGE}\nSee `fringestop --help` for more info")]
    Args(String),

    /// An error related to the right ascension and declination.
    #[error("{0}\n\n{USAGE}\nRA may be HH:MM:SS.S, HHhMMmSS.Ss or degrees; Dec may be DD:MM:SS.S, DDdMMmSS.Ss or degrees")]
    SkyPosition(String),

    /// An error related to the site arguments.
    #[error("{0}\n\n{USAGE}\nLONG and LAT are in degrees, BLN_EW and BLN_NS in metres, FREQ in MHz (unless a unit is given) and PHI in degrees")]
    Site(String),

    /// An error related to reading samples.
    #[error("{0}\n\nSample files may be binary (24-byte records of i64 timestamp [us], f64 amplitude, f64 phase [rad]) or text (\"<timestamp [s]> <amplitude> <phase [deg]>\" per line). Supported extensions: {}", *SAMPLE_FILE_EXTENSIONS)]
    SampleRead(String),

    /// An error related to writing out results.
    #[error("{0}\n\nCheck that the --output-bin and --output-txt paths are writable")]
    FileWrite(String),

    /// An error related to plotting.
    #[error("{0}\n\nPlots are only written when fringestop has the \"plotting\" feature and the --plot file ends in .png")]
    Plot(String),

    /// An error related to argument files.
    #[error("{0}\n\nArgument files are toml or json, and use the same names as the long CLI options")]
    ArgFile(String),

    /// A generic error that can't be clarified further with documentation, e.g.
    /// IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<FringeStopArgsError> for FringestopError {
    fn from(e: FringeStopArgsError) -> Self {
        match e {
            FringeStopArgsError::MissingArgument(_) => Self::Args(e.to_string()),
            FringeStopArgsError::PlotNotPng(_) => Self::Plot(e.to_string()),
            FringeStopArgsError::SkyPosition(e) => Self::from(e),
            FringeStopArgsError::Site(e) => Self::from(e),
            FringeStopArgsError::SampleRead(e) => Self::from(e),
            #[cfg(not(feature = "plotting"))]
            FringeStopArgsError::Plot(e) => Self::from(e),
        }
    }
}

impl From<FringeStopError> for FringestopError {
    fn from(e: FringeStopError) -> Self {
        match e {
            FringeStopError::FileWrite(e) => Self::from(e),
            FringeStopError::Plot(e) => Self::from(e),
        }
    }
}

impl From<SkyPositionError> for FringestopError {
    fn from(e: SkyPositionError) -> Self {
        Self::SkyPosition(e.to_string())
    }
}

impl From<SiteError> for FringestopError {
    fn from(e: SiteError) -> Self {
        Self::Site(e.to_string())
    }
}

impl From<SampleReadError> for FringestopError {
    fn from(e: SampleReadError) -> Self {
        match e {
            SampleReadError::IO(e) => Self::from(e),
            _ => Self::SampleRead(e.to_string()),
        }
    }
}

impl From<FileWriteError> for FringestopError {
    fn from(e: FileWriteError) -> Self {
        Self::FileWrite(e.to_string())
    }
}

impl From<PlotError> for FringestopError {
    fn from(e: PlotError) -> Self {
        Self::Plot(e.to_string())
    }
}

impl From<std::io::Error> for FringestopError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
