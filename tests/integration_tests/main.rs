// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod arg_file;
mod fringe_stop;
mod no_stderr;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    process::Output,
    str::from_utf8,
};

use assert_cmd::{output::OutputError, Command};

// 2021-06-15 10:00:00 UTC.
const START_MICROS: i64 = 1_623_751_200_000_000;

fn fringestop() -> Command {
    Command::cargo_bin("fringestop").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

/// Write `num_samples` binary samples, one per minute, with phase 0.
fn write_binary_samples(dir: &Path, num_samples: usize) -> PathBuf {
    let file = dir.join("samples.bin");
    let mut f = BufWriter::new(File::create(&file).unwrap());
    for i in 0..num_samples {
        let timestamp = START_MICROS + i as i64 * 60_000_000;
        f.write_all(&timestamp.to_le_bytes()).unwrap();
        f.write_all(&1.0_f64.to_le_bytes()).unwrap();
        f.write_all(&0.0_f64.to_le_bytes()).unwrap();
    }
    f.flush().unwrap();
    file
}

/// Read a binary results file as (timestamp, amplitude, phase) records.
fn read_binary_records(file: &Path) -> Vec<(i64, f64, f64)> {
    let bytes = std::fs::read(file).unwrap();
    assert_eq!(bytes.len() % 24, 0);
    bytes
        .chunks_exact(24)
        .map(|r| {
            (
                i64::from_le_bytes(r[0..8].try_into().unwrap()),
                f64::from_le_bytes(r[8..16].try_into().unwrap()),
                f64::from_le_bytes(r[16..24].try_into().unwrap()),
            )
        })
        .collect()
}
