// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::Path;

use tempfile::tempdir;
use vec1::vec1;

use super::*;
use crate::{
    coord::SkyPosition,
    correct::correct_samples,
    samples::{read_samples, Sample},
    site::ObserverSite,
};

fn params(dir: &Path, parallel: bool) -> FringeStopParams {
    FringeStopParams {
        samples: vec1![
            Sample::new(1_623_751_200_000_000, 1.0, 0.1),
            Sample::new(1_623_751_260_000_000, 2.0, f64::NAN),
            Sample::new(1_623_751_320_000_000, 3.0, -2.5),
        ],
        sky_position: SkyPosition::from_degrees(83.63, 22.01),
        site: ObserverSite::from_user_units(149.0, -30.0, 100.0, 20.0, 1000.0, 10.0).unwrap(),
        output_bin: dir.join("rotate.out"),
        output_txt: dir.join("rotate.txt"),
        plot: None,
        parallel,
    }
}

#[test]
fn test_run_writes_residuals() {
    let tmp_dir = tempdir().unwrap();
    let params = params(tmp_dir.path(), true);
    let corrected = params.run().unwrap();
    let expected = correct_samples(&params.samples, &params.sky_position, &params.site);
    assert_eq!(corrected.len(), expected.len());
    for (c, e) in corrected.iter().zip(expected.iter()) {
        assert_eq!(c.predicted_phase, e.predicted_phase);
        assert_eq!(c.residual_phase.to_bits(), e.residual_phase.to_bits());
    }

    let bin = read_samples(&params.output_bin).unwrap();
    assert_eq!(bin.len(), 3);
    for (b, c) in bin.iter().zip(corrected.iter()) {
        assert_eq!(b.timestamp_micros, c.timestamp_micros);
        assert_eq!(b.amplitude, c.amplitude);
        if c.residual_phase.is_nan() {
            assert!(b.phase.is_nan());
        } else {
            assert_eq!(b.phase, c.residual_phase);
        }
    }

    let txt = read_samples(&params.output_txt).unwrap();
    assert_eq!(txt.len(), 3);
    assert_eq!(txt[2].timestamp_micros, 1_623_751_320_000_000);
}

#[test]
fn test_sequential_run_matches_parallel_run() {
    let tmp_dir = tempdir().unwrap();
    let seq = params(tmp_dir.path(), false).run().unwrap();
    let par = params(tmp_dir.path(), true).run().unwrap();
    assert_eq!(seq.len(), par.len());
    for (s, p) in seq.iter().zip(par.iter()) {
        assert_eq!(s.predicted_phase, p.predicted_phase);
        assert_eq!(s.residual_phase.to_bits(), p.residual_phase.to_bits());
    }
}

#[test]
fn test_unwritable_output_is_an_error() {
    let tmp_dir = tempdir().unwrap();
    let mut params = params(tmp_dir.path(), false);
    params.output_bin = tmp_dir.path().join("not_a_dir").join("rotate.out");
    assert!(matches!(params.run(), Err(FringeStopError::FileWrite(_))));
}

#[test]
#[cfg(not(feature = "plotting"))]
fn test_plot_without_feature_is_an_error() {
    let tmp_dir = tempdir().unwrap();
    let mut params = params(tmp_dir.path(), false);
    params.plot = Some(tmp_dir.path().join("phases.png"));
    assert!(matches!(params.run(), Err(FringeStopError::Plot(_))));
}

#[test]
#[cfg(feature = "plotting")]
fn test_run_writes_plot() {
    let tmp_dir = tempdir().unwrap();
    let mut params = params(tmp_dir.path(), true);
    let plot = tmp_dir.path().join("phases.png");
    params.plot = Some(plot.clone());
    params.run().unwrap();

    let png = std::fs::read(&plot).unwrap();
    assert!(png.len() > 8);
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    // The residuals are written too.
    assert!(params.output_bin.exists());
    assert!(params.output_txt.exists());
}
