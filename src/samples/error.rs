// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

use super::SAMPLE_FILE_EXTENSIONS;

#[derive(Error, Debug)]
pub enum SampleReadError {
    #[error("The sample file '{0}' does not exist")]
    DoesntExist(PathBuf),

    #[error(
        "The sample file '{0}' has an unrecognised extension. Supported formats: {}",
        *SAMPLE_FILE_EXTENSIONS
    )]
    UnknownFormat(PathBuf),

    #[error("No samples were found in '{0}'")]
    Empty(PathBuf),

    #[error("The binary sample file '{file}' is {size} bytes long, which isn't a multiple of the {record_size}-byte record size")]
    TruncatedRecord {
        file: PathBuf,
        size: u64,
        record_size: usize,
    },

    #[error("Line {line_num} of '{file}' should have 3 fields (timestamp [s], amplitude, phase [deg]), but has {num_fields}")]
    WrongFieldCount {
        file: PathBuf,
        line_num: usize,
        num_fields: usize,
    },

    #[error("Couldn't parse '{field}' on line {line_num} of '{file}' as a number")]
    BadNumber {
        file: PathBuf,
        line_num: usize,
        field: String,
    },

    #[error("The timestamp '{field}' on line {line_num} of '{file}' is not a finite number of seconds within the representable range")]
    BadTimestamp {
        file: PathBuf,
        line_num: usize,
        field: String,
    },

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum FileWriteError {
    #[error("Couldn't write to '{file}': {err}")]
    IO {
        file: PathBuf,
        err: std::io::Error,
    },
}
