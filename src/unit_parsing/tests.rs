// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::*;

use approx::assert_abs_diff_eq;

#[test]
fn test_parse_freq_str_without_units() {
    let result = parse_freq("20");
    assert!(result.is_ok(), "{:?}", result.unwrap_err());
    let pair = result.unwrap();
    assert_abs_diff_eq!(pair.0, 20.0);
    assert_eq!(pair.1, FreqFormat::NoUnit);

    let result = parse_freq(" 40.0 ");
    assert!(result.is_ok(), "{:?}", result.unwrap_err());
    let pair = result.unwrap();
    assert_abs_diff_eq!(pair.0, 40.0);
    assert_eq!(pair.1, FreqFormat::NoUnit);
}

#[test]
fn test_parse_freq_str_with_units() {
    // Iterate over all possible units.
    for freq_format in FreqFormat::iter().filter(|&ff| ff != FreqFormat::NoUnit) {
        let freq_format_str: &'static str = freq_format.into();
        for freq_format_str in [
            freq_format_str.to_lowercase(),
            freq_format_str.to_uppercase(),
        ] {
            let result = parse_freq(&format!("1{}", freq_format_str));
            assert!(result.is_ok(), "{:?}", result.unwrap_err());
            let pair = result.unwrap();
            assert_abs_diff_eq!(pair.0, 1.0);
            assert_eq!(pair.1, freq_format);

            let result = parse_freq(&format!(" 1.5 {} ", freq_format_str));
            assert!(result.is_ok(), "{:?}", result.unwrap_err());
            let pair = result.unwrap();
            assert_abs_diff_eq!(pair.0, 1.5);
            assert_eq!(pair.1, freq_format);
        }
    }
}

#[test]
fn test_parse_freq_hz() {
    assert_abs_diff_eq!(parse_freq_hz("1000").unwrap(), 1e9);
    assert_abs_diff_eq!(parse_freq_hz("1.4GHz").unwrap(), 1.4e9);
    assert_abs_diff_eq!(parse_freq_hz("150 MHz").unwrap(), 150e6);
    assert_abs_diff_eq!(parse_freq_hz("80kHz").unwrap(), 80e3);
    assert_abs_diff_eq!(parse_freq_hz("50hz").unwrap(), 50.0);
}

#[test]
fn test_parse_freq_bad_input() {
    let result = parse_freq("1.2.3MHz");
    assert!(matches!(
        result,
        Err(UnitParseError::GotFreqUnitButCantParse(_))
    ));

    let result = parse_freq("20 parsecs");
    assert!(matches!(result, Err(UnitParseError::Unknown { .. })));
}
