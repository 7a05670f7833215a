// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to write samples to binary and text files.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use byteorder::{ByteOrder, LittleEndian};

use super::{FileWriteError, Sample, BINARY_RECORD_SIZE};

/// Write samples as dense little-endian binary records. The output can be read
/// back in with [super::read_samples].
pub fn write_binary(samples: &[Sample], file: &Path) -> Result<(), FileWriteError> {
    let io_err = |err| FileWriteError::IO {
        file: file.to_path_buf(),
        err,
    };
    let mut bin_file = BufWriter::new(File::create(file).map_err(io_err)?);
    write_binary_records(samples, &mut bin_file).map_err(io_err)?;
    bin_file.flush().map_err(io_err)
}

pub(super) fn write_binary_records<W: Write>(
    samples: &[Sample],
    writer: &mut W,
) -> std::io::Result<()> {
    let mut buf = [0; BINARY_RECORD_SIZE];
    for s in samples {
        LittleEndian::write_i64(&mut buf[0..8], s.timestamp_micros);
        LittleEndian::write_f64_into(&[s.amplitude, s.phase], &mut buf[8..]);
        writer.write_all(&buf)?;
    }
    Ok(())
}

/// Write samples as human-readable text, one sample per line:
/// "<timestamp seconds> <amplitude> <phase degrees>".
pub fn write_text(samples: &[Sample], file: &Path) -> Result<(), FileWriteError> {
    let io_err = |err| FileWriteError::IO {
        file: file.to_path_buf(),
        err,
    };
    let mut txt_file = BufWriter::new(File::create(file).map_err(io_err)?);
    write_text_lines(samples, &mut txt_file).map_err(io_err)?;
    txt_file.flush().map_err(io_err)
}

pub(super) fn write_text_lines<W: Write>(samples: &[Sample], writer: &mut W) -> std::io::Result<()> {
    for s in samples {
        writeln!(
            writer,
            "{} {} {}",
            s.timestamp_seconds(),
            s.amplitude,
            s.phase.to_degrees()
        )?;
    }
    Ok(())
}
