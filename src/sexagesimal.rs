// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Code for handling conversion to and from sexagesimal.
 */

use thiserror::Error;

/// Convert a sexagesimal-formatted string delimited by colons to a float. The
/// fields are "big unit, minutes, seconds"; the result is in the big unit, so
/// "12:30:00" gives 12.5 whether the 12 means hours or degrees. A leading
/// minus sign applies to the whole value, even if the first field is zero.
///
/// # Examples
///
/// ```
/// # use fringestop::sexagesimal::*;
/// # use approx::*;
/// # fn main() -> Result<(), SexagesimalError> {
/// let f = sexagesimal_colon_str_to_float("-22:58:52.56")?;
/// assert_abs_diff_eq!(f, -22.981267, epsilon = 1e-6);
/// # Ok(())
/// # }
/// ```
pub fn sexagesimal_colon_str_to_float(s: &str) -> Result<f64, SexagesimalError> {
    let trimmed = s.trim();
    let mut split = Vec::with_capacity(3);
    for elem in trimmed.split(':') {
        split.push(elem.trim().parse()?);
    }
    if split.len() != 3 {
        return Err(SexagesimalError::WrongFieldCount(s.to_string()));
    }
    Ok(sexagesimal_to_float(
        trimmed.starts_with('-'),
        split[0],
        split[1],
        split[2],
    ))
}

/// Combine sexagesimal fields into a float. The sign is given separately so
/// that values like "-00:30:00" keep it.
fn sexagesimal_to_float(negative: bool, big: f64, m: f64, s: f64) -> f64 {
    let num = big.abs() + m / 60.0 + s / 3600.0;
    if negative {
        -num
    } else {
        num
    }
}

/// Convert a sexagesimal-formatted string in "degrees minutes seconds" to a
/// float \[degrees\].
///
/// # Examples
///
/// ```
/// # use fringestop::sexagesimal::*;
/// # use approx::*;
/// # fn main() -> Result<(), SexagesimalError> {
/// let f = sexagesimal_dms_string_to_degrees("-11d49m01.062s")?;
/// assert_abs_diff_eq!(f, -11.81696167, epsilon = 1e-6);
/// # Ok(())
/// # }
/// ```
pub fn sexagesimal_dms_string_to_degrees(dms: &str) -> Result<f64, SexagesimalError> {
    let (negative, d, m, s) = split_unit_string(dms, 'd')?;
    Ok(sexagesimal_to_float(negative, d, m, s))
}

/// Convert a sexagesimal-formatted string in "hours minutes seconds" to a
/// float \[degrees\].
///
/// # Examples
///
/// ```
/// # use fringestop::sexagesimal::*;
/// # use approx::*;
/// # fn main() -> Result<(), SexagesimalError> {
/// let f = sexagesimal_hms_string_to_degrees("11h34m23.7854s")?;
/// assert_abs_diff_eq!(f, 173.59910583, epsilon = 1e-6);
/// # Ok(())
/// # }
/// ```
pub fn sexagesimal_hms_string_to_degrees(hms: &str) -> Result<f64, SexagesimalError> {
    let (negative, h, m, s) = split_unit_string(hms, 'h')?;
    Ok(15.0 * sexagesimal_to_float(negative, h, m, s))
}

/// Split strings like "11h34m23.7854s" into their sign and three fields. The
/// trailing 's' is optional.
fn split_unit_string(
    input: &str,
    big_unit: char,
) -> Result<(bool, f64, f64, f64), SexagesimalError> {
    let trimmed = input.trim();
    let missing_big = || match big_unit {
        'h' => SexagesimalError::MissingH(input.to_string()),
        _ => SexagesimalError::MissingD(input.to_string()),
    };

    let (big, rest) = trimmed.split_once(big_unit).ok_or_else(missing_big)?;
    let (m, rest) = rest
        .split_once('m')
        .ok_or_else(|| SexagesimalError::MissingM(input.to_string()))?;
    let s = rest.strip_suffix('s').unwrap_or(rest);
    if s.is_empty() {
        return Err(SexagesimalError::MissingS(input.to_string()));
    }

    Ok((
        trimmed.starts_with('-'),
        big.trim().parse()?,
        m.trim().parse()?,
        s.trim().parse()?,
    ))
}

/// Convert a number in degrees to a sexagesimal-formatted string in "degrees
/// minutes seconds".
///
/// # Examples
///
/// ```
/// # use fringestop::sexagesimal::*;
/// let dms = degrees_to_sexagesimal_dms(-165.0169619);
/// assert_eq!(dms, "-165d01m01.0628s");
/// ```
pub fn degrees_to_sexagesimal_dms(f: f64) -> String {
    let negative = f < 0.0;
    let f_abs = f.abs();
    let degrees = f_abs.floor();
    let minutes = (f_abs - degrees) * 60.0;
    let seconds = (minutes - minutes.floor()) * 60.0;

    format!(
        "{sign}{deg}d{min:02}m{sec:02}.{frac:04}s",
        sign = if negative { "-" } else { "" },
        deg = degrees as u16,
        min = minutes.floor() as u8,
        sec = seconds.floor() as u8,
        // The 4 in 1e4 gives that many decimal places.
        frac = ((seconds - seconds.floor()) * 1e4) as u32,
    )
}

/// Convert a number in degrees to a sexagesimal-formatted string in "hours
/// minutes seconds".
///
/// # Examples
///
/// ```
/// # use fringestop::sexagesimal::*;
/// let hms = degrees_to_sexagesimal_hms(173.59910583);
/// assert_eq!(hms, "11h34m23.7853s");
/// ```
pub fn degrees_to_sexagesimal_hms(f: f64) -> String {
    let negative = f < 0.0;
    let f_abs = f.abs();
    let hours = (f_abs / 15.0).floor();
    let minutes = ((f_abs / 15.0 - hours) * 60.0).floor();
    let seconds = (((f_abs / 15.0 - hours) * 60.0) - minutes) * 60.0;

    format!(
        "{sign}{hrs}h{min:02}m{sec:02}.{frac:04}s",
        sign = if negative { "-" } else { "" },
        hrs = hours as u8,
        min = minutes as u8,
        sec = seconds.floor() as u8,
        // The 4 in 1e4 gives that many decimal places.
        frac = ((seconds - seconds.floor()) * 1e4) as u32,
    )
}

#[derive(Error, Debug)]
pub enum SexagesimalError {
    /// Three numbers (fields) are expected; this error is used when the number
    /// of fields is not three.
    #[error("Did not get three sexagesimal fields: {0}")]
    WrongFieldCount(String),

    #[error("Did not find 'h' when attempting to read sexagesimal string: {0}")]
    MissingH(String),

    #[error("Did not find 'd' when attempting to read sexagesimal string: {0}")]
    MissingD(String),

    #[error("Did not find 'm' when attempting to read sexagesimal string: {0}")]
    MissingM(String),

    #[error("Did not find seconds when attempting to read sexagesimal string: {0}")]
    MissingS(String),

    #[error("{0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}
