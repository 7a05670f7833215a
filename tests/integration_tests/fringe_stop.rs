// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Runs of the whole program on small sample files.

use approx::assert_abs_diff_eq;
use tempfile::TempDir;

use crate::{
    fringestop, get_cmd_output, read_binary_records, write_binary_samples, START_MICROS,
};

#[test]
fn test_zenith_source_has_no_residual() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let samples = write_binary_samples(tmp_dir.path(), 10);
    let output_bin = tmp_dir.path().join("results.out");
    let output_txt = tmp_dir.path().join("results.txt");

    // Put the source directly overhead at the first sample.
    let lst = fringestop::time::lmst_from_timestamp(START_MICROS, 149_f64.to_radians());
    let ra = format!("{}", lst.to_degrees());

    #[rustfmt::skip]
    let cmd = fringestop()
        .args([
            &ra, "-30", &format!("{}", samples.display()),
            "149", "-30", "100", "0", "1000", "0",
            "--output-bin", &format!("{}", output_bin.display()),
            "--output-txt", &format!("{}", output_txt.display()),
            "--no-progress-bars",
        ])
        .ok();
    assert!(cmd.is_ok(), "fringestop failed: {}", cmd.err().unwrap());

    let records = read_binary_records(&output_bin);
    assert_eq!(records.len(), 10);
    assert_eq!(records[0].0, START_MICROS);
    assert_abs_diff_eq!(records[0].1, 1.0);
    assert_abs_diff_eq!(records[0].2, 0.0, epsilon = 1e-6);
    // The source moves away from the zenith, so the residuals grow.
    assert!(records[9].2.abs() > 1e-3);
    for (i, (timestamp, _, phase)) in records.iter().enumerate() {
        assert_eq!(*timestamp, START_MICROS + i as i64 * 60_000_000);
        assert!(*phase > -std::f64::consts::PI && *phase <= std::f64::consts::PI);
    }

    let text = std::fs::read_to_string(&output_txt).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 10);
    let fields: Vec<&str> = lines[0].split_whitespace().collect();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0], "1623751200");
    assert_eq!(fields[1], "1");
    let residual_deg: f64 = fields[2].parse().unwrap();
    assert_abs_diff_eq!(residual_deg, 0.0, epsilon = 1e-4);
}

#[test]
fn test_dry_run_writes_nothing() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let samples = write_binary_samples(tmp_dir.path(), 3);
    let output_bin = tmp_dir.path().join("results.out");

    #[rustfmt::skip]
    let cmd = fringestop()
        .args([
            "--dry-run",
            "83.63", "22.01", &format!("{}", samples.display()),
            "149", "-30", "100", "0", "1000", "0",
            "--output-bin", &format!("{}", output_bin.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "fringestop failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Dry run"), "{stdout}");
    assert!(!output_bin.exists());
}

#[test]
fn test_no_arguments_prints_help() {
    let cmd = fringestop().ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("USAGE") || stderr.contains("Usage"), "{stderr}");
}

#[test]
fn test_missing_arguments_fail() {
    let cmd = fringestop().args(["83.63", "22.01"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("FILE"), "{stderr}");
    assert!(stderr.contains("Usage"), "{stderr}");
}

#[test]
fn test_bad_site_fails() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let samples = write_binary_samples(tmp_dir.path(), 3);
    let output_bin = tmp_dir.path().join("results.out");

    #[rustfmt::skip]
    let cmd = fringestop()
        .args([
            "83.63", "22.01", &format!("{}", samples.display()),
            "149", "-95", "100", "0", "1000", "0",
            "--output-bin", &format!("{}", output_bin.display()),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("latitude"), "{stderr}");
    assert!(!output_bin.exists());
}

#[test]
fn test_empty_sample_file_fails() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let samples = tmp_dir.path().join("empty.txt");
    std::fs::write(&samples, "# nothing to see here\n").unwrap();

    #[rustfmt::skip]
    let cmd = fringestop()
        .args([
            "83.63", "22.01", &format!("{}", samples.display()),
            "149", "-30", "100", "0", "1000", "0",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("No samples"), "{stderr}");
}

#[test]
#[cfg(not(feature = "plotting"))]
fn test_plot_needs_feature() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let samples = write_binary_samples(tmp_dir.path(), 3);
    let output_bin = tmp_dir.path().join("results.out");
    let output_txt = tmp_dir.path().join("results.txt");
    let plot = tmp_dir.path().join("phases.png");

    #[rustfmt::skip]
    let cmd = fringestop()
        .args([
            "83.63", "22.01", &format!("{}", samples.display()),
            "149", "-30", "100", "0", "1000", "0",
            "--output-bin", &format!("{}", output_bin.display()),
            "--output-txt", &format!("{}", output_txt.display()),
            "--plot", &format!("{}", plot.display()),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("plotting"), "{stderr}");
    // The run must stop before anything is written.
    assert!(!output_bin.exists());
    assert!(!output_txt.exists());
    assert!(!plot.exists());
}

#[test]
#[cfg(feature = "plotting")]
fn test_plot_is_written() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let samples = write_binary_samples(tmp_dir.path(), 30);
    let output_bin = tmp_dir.path().join("results.out");
    let output_txt = tmp_dir.path().join("results.txt");
    let plot = tmp_dir.path().join("phases.png");

    #[rustfmt::skip]
    let cmd = fringestop()
        .args([
            "83.63", "22.01", &format!("{}", samples.display()),
            "149", "-30", "100", "0", "1000", "0",
            "--output-bin", &format!("{}", output_bin.display()),
            "--output-txt", &format!("{}", output_txt.display()),
            "--plot", &format!("{}", plot.display()),
            "--no-progress-bars",
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let png = std::fs::read(&plot).unwrap();
    assert!(!png.is_empty());
    assert_eq!(read_binary_records(&output_bin).len(), 30);
}
