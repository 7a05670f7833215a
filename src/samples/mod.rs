// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Observed interferometer samples, and the files they're read from and
//! written to.
//!
//! Two formats are supported, and both are used for input as well as output:
//!
//! - binary: consecutive little-endian records of an `i64` timestamp
//!   \[microseconds since the Unix epoch\], an `f64` amplitude and an `f64`
//!   phase \[radians\];
//! - text: one sample per line, "<timestamp seconds> <amplitude> <phase
//!   degrees>". Blank lines and lines starting with '#' are ignored.

mod error;
mod read;
mod write;

pub use error::{FileWriteError, SampleReadError};
pub use read::read_samples;
pub use write::{write_binary, write_text};

use std::path::Path;

use itertools::Itertools;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The number of bytes in a single binary record.
pub const BINARY_RECORD_SIZE: usize = 24;

lazy_static::lazy_static! {
    pub(crate) static ref SAMPLE_FILE_EXTENSIONS: String = SampleFileType::iter().join(", ");
}

/// One observed sample from the interferometer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Microseconds since the Unix epoch (UTC).
    pub timestamp_micros: i64,

    /// The amplitude of the complex sample (arbitrary units).
    pub amplitude: f64,

    /// The phase of the complex sample \[radians\].
    pub phase: f64,
}

impl Sample {
    pub fn new(timestamp_micros: i64, amplitude: f64, phase: f64) -> Sample {
        Sample {
            timestamp_micros,
            amplitude,
            phase,
        }
    }

    /// The timestamp as seconds since the Unix epoch.
    pub fn timestamp_seconds(&self) -> f64 {
        self.timestamp_micros as f64 / crate::constants::MICROS_PER_SECOND
    }
}

/// All of the sample file formats, keyed on the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum SampleFileType {
    #[strum(serialize = "bin")]
    Bin,

    #[strum(serialize = "out")]
    Out,

    #[strum(serialize = "txt")]
    Txt,

    #[strum(serialize = "tsv")]
    Tsv,
}

impl SampleFileType {
    /// Work out the format of a file from its extension.
    pub fn from_path(path: &Path) -> Option<SampleFileType> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| e.to_lowercase().parse().ok())
    }

    pub fn is_binary(self) -> bool {
        matches!(self, SampleFileType::Bin | SampleFileType::Out)
    }
}
