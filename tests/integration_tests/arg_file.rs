// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Saving arguments to a file, and running from an arguments file.

use tempfile::TempDir;

use crate::{fringestop, get_cmd_output, read_binary_records, write_binary_samples};

#[test]
fn test_saved_toml_reproduces_run() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let samples = write_binary_samples(tmp_dir.path(), 5);
    let output_bin = tmp_dir.path().join("first.out");
    let output_txt = tmp_dir.path().join("first.txt");
    let toml = tmp_dir.path().join("args.toml");

    #[rustfmt::skip]
    let cmd = fringestop()
        .args([
            "05:34:31.94", "+22:00:52.2", &format!("{}", samples.display()),
            "149", "-30", "100", "-20", "1.4GHz", "-45",
            "--output-bin", &format!("{}", output_bin.display()),
            "--output-txt", &format!("{}", output_txt.display()),
            "--save-toml", &format!("{}", toml.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "fringestop failed: {}", cmd.err().unwrap());
    assert!(toml.exists());
    let toml_contents = std::fs::read_to_string(&toml).unwrap();
    assert!(toml_contents.contains("1.4GHz"), "{toml_contents}");

    // Run again from the saved arguments, changing only the outputs.
    let second_bin = tmp_dir.path().join("second.out");
    let second_txt = tmp_dir.path().join("second.txt");
    #[rustfmt::skip]
    let cmd = fringestop()
        .args([
            "--args-file", &format!("{}", toml.display()),
            "--output-bin", &format!("{}", second_bin.display()),
            "--output-txt", &format!("{}", second_txt.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "fringestop failed: {}", cmd.err().unwrap());

    let first = read_binary_records(&output_bin);
    let second = read_binary_records(&second_bin);
    assert_eq!(first.len(), 5);
    assert_eq!(first, second);
}

#[test]
fn test_unknown_arg_file_type_fails() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let arg_file = tmp_dir.path().join("args.ini");
    std::fs::write(&arg_file, "ra = 10").unwrap();

    let cmd = fringestop()
        .args(["--args-file", &format!("{}", arg_file.display())])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("recognised file extension"), "{stderr}");
}
