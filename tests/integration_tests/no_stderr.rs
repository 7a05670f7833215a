// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests to ensure there is no stderr output for successful commands.

use tempfile::TempDir;

use crate::{fringestop, get_cmd_output, write_binary_samples};

#[test]
fn test_fringe_stop_no_stderr() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let samples = write_binary_samples(tmp_dir.path(), 20);
    let output_bin = tmp_dir.path().join("rotate.out");
    let output_txt = tmp_dir.path().join("rotate.txt");

    #[rustfmt::skip]
    let cmd = fringestop()
        .args([
            "-vv",
            "12h30m00s", "-45d00m00s", &format!("{}", samples.display()),
            "149", "-30", "100", "0", "1000", "0",
            "--output-bin", &format!("{}", output_bin.display()),
            "--output-txt", &format!("{}", output_txt.display()),
            "--no-parallel",
        ])
        .ok();
    assert!(
        cmd.is_ok(),
        "fringestop failed on simple test data: {}",
        cmd.err().unwrap()
    );
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}
