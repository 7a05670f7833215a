// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to read samples from binary and text files.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, trace};
use vec1::Vec1;

use super::{Sample, SampleFileType, SampleReadError, BINARY_RECORD_SIZE};
use crate::constants::MICROS_PER_SECOND;

/// Read all of the samples in a file. The format is determined by the file's
/// extension. A file without any samples is an error.
pub fn read_samples(file: &Path) -> Result<Vec1<Sample>, SampleReadError> {
    if !file.exists() {
        return Err(SampleReadError::DoesntExist(file.to_path_buf()));
    }
    let file_type = SampleFileType::from_path(file)
        .ok_or_else(|| SampleReadError::UnknownFormat(file.to_path_buf()))?;
    debug!("Reading '{}' as a {file_type} file", file.display());

    let samples = if file_type.is_binary() {
        read_binary(file)?
    } else {
        read_text(file)?
    };
    trace!("Read {} samples", samples.len());

    Vec1::try_from_vec(samples).map_err(|_| SampleReadError::Empty(file.to_path_buf()))
}

fn read_binary(file: &Path) -> Result<Vec<Sample>, SampleReadError> {
    let size = std::fs::metadata(file)?.len();
    if size % BINARY_RECORD_SIZE as u64 != 0 {
        return Err(SampleReadError::TruncatedRecord {
            file: file.to_path_buf(),
            size,
            record_size: BINARY_RECORD_SIZE,
        });
    }

    let num_records = (size / BINARY_RECORD_SIZE as u64) as usize;
    let mut bin_file = BufReader::new(File::open(file)?);
    read_binary_records(&mut bin_file, num_records)
}

/// Read `num_records` binary records from a reader.
pub(super) fn read_binary_records<R: Read>(
    reader: &mut R,
    num_records: usize,
) -> Result<Vec<Sample>, SampleReadError> {
    let mut samples = Vec::with_capacity(num_records);
    for _ in 0..num_records {
        let timestamp_micros = reader.read_i64::<LittleEndian>()?;
        let amplitude = reader.read_f64::<LittleEndian>()?;
        let phase = reader.read_f64::<LittleEndian>()?;
        samples.push(Sample {
            timestamp_micros,
            amplitude,
            phase,
        });
    }
    Ok(samples)
}

fn read_text(file: &Path) -> Result<Vec<Sample>, SampleReadError> {
    let reader = BufReader::new(File::open(file)?);
    let mut samples = vec![];
    for (i_line, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = i_line + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(SampleReadError::WrongFieldCount {
                file: file.to_path_buf(),
                line_num,
                num_fields: fields.len(),
            });
        }
        let parse = |field: &str| -> Result<f64, SampleReadError> {
            field.parse().map_err(|_| SampleReadError::BadNumber {
                file: file.to_path_buf(),
                line_num,
                field: field.to_string(),
            })
        };
        let timestamp_s = parse(fields[0])?;
        let amplitude = parse(fields[1])?;
        let phase_deg = parse(fields[2])?;

        let timestamp_micros = seconds_to_micros(timestamp_s).ok_or_else(|| {
            SampleReadError::BadTimestamp {
                file: file.to_path_buf(),
                line_num,
                field: fields[0].to_string(),
            }
        })?;

        samples.push(Sample {
            timestamp_micros,
            amplitude,
            phase: phase_deg.to_radians(),
        });
    }
    Ok(samples)
}

/// Convert a timestamp in seconds to integer microseconds. `None` if the
/// timestamp isn't finite or doesn't fit in an `i64`.
fn seconds_to_micros(timestamp_s: f64) -> Option<i64> {
    let micros = (timestamp_s * MICROS_PER_SECOND).round();
    // 2^63 itself is out of range; -2^63 is not.
    if micros.is_finite() && micros >= i64::MIN as f64 && micros < i64::MAX as f64 {
        Some(micros as i64)
    } else {
        None
    }
}
