//! # MPCORB row decoder
//!
//! Turn one fixed-width `MPCORB.DAT` line into an [`OrbitalRecord`].
//!
//! ## Field layout
//! -----------------
//! Windows are half-open, 0-indexed character ranges. Each window is trimmed of
//! spaces and tabs before parsing.
//!
//! ```text
//! 0..7      packed designation          (kept as text)
//! 20..25    epoch, packed form          (kept as text)
//! 26..35    mean anomaly M0, deg        f64
//! 37..46    argument of perihelion, deg f64
//! 48..57    longitude of asc. node, deg f64
//! 59..68    inclination, deg            f64
//! 70..79    eccentricity                f64
//! 80..91    mean daily motion, deg/day  f64
//! 92..103   semimajor axis, AU          f64
//! 105..106  uncertainty parameter U     (kept as text)
//! 161..165  flags                       4 hex digits
//! ```
//!
//! ## Error Handling
//! -----------------
//! Decoding stops at the **first** invalid window and reports it through
//! [`ParseRowError`], naming the column with a [`RowField`]. No partial record is
//! ever returned. Eccentricity and uncertainty values are not judged here, and the
//! designation and uncertainty windows are read as lossy text that cannot fail.
//!
//! ## See also
//! ------------
//! * <https://www.minorplanetcenter.net/iau/info/MPOrbitFormat.html>
//! * [`crate::catalog::scanner::CatalogScanner`] – applies this decoder line by line.
use std::{fmt, ops::Range};

use thiserror::Error;

use crate::{constants::MIN_ROW_LENGTH, orbit_flags::OrbitFlags, orbital_record::OrbitalRecord};

/// A column of an MPCORB row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowField {
    Designation,
    EpochPacked,
    MeanAnomaly,
    ArgumentOfPerihelion,
    LongitudeAscendingNode,
    Inclination,
    Eccentricity,
    MeanDailyMotion,
    SemiMajorAxis,
    UncertaintyParameter,
    Flags,
}

impl RowField {
    /// Half-open character window of the column.
    pub const fn columns(&self) -> Range<usize> {
        match self {
            RowField::Designation => 0..7,
            RowField::EpochPacked => 20..25,
            RowField::MeanAnomaly => 26..35,
            RowField::ArgumentOfPerihelion => 37..46,
            RowField::LongitudeAscendingNode => 48..57,
            RowField::Inclination => 59..68,
            RowField::Eccentricity => 70..79,
            RowField::MeanDailyMotion => 80..91,
            RowField::SemiMajorAxis => 92..103,
            RowField::UncertaintyParameter => 105..106,
            RowField::Flags => 161..165,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RowField::Designation => "designation",
            RowField::EpochPacked => "epoch",
            RowField::MeanAnomaly => "M0",
            RowField::ArgumentOfPerihelion => "argument of perihelion",
            RowField::LongitudeAscendingNode => "longitude of the ascending node",
            RowField::Inclination => "inclination",
            RowField::Eccentricity => "eccentricity",
            RowField::MeanDailyMotion => "mean daily motion",
            RowField::SemiMajorAxis => "semi major axis",
            RowField::UncertaintyParameter => "uncertainty parameter",
            RowField::Flags => "flags",
        }
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.columns();
        write!(f, "{} (columns {}-{})", self.name(), cols.start + 1, cols.end)
    }
}

/// Line-level decoding errors.
///
/// Variants
/// -----------------
/// * `TooShortLine` – the line ends before the flags column; payload is its length.
/// * `MalformedColumn` – the window does not fall on character boundaries (non-ASCII input).
/// * `InvalidField` – a numeric window is not a base-10 float; payload carries the trimmed text.
/// * `InvalidFlags` – the flags window is not a hexadecimal 16-bit word.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseRowError {
    #[error("the line is too short ({0} characters, need at least {min})", min = MIN_ROW_LENGTH)]
    TooShortLine(usize),
    #[error("cannot read {0}")]
    MalformedColumn(RowField),
    #[error("cannot parse {field}: '{value}'")]
    InvalidField { field: RowField, value: String },
    #[error("cannot parse {field} as hexadecimal: '{0}'", field = RowField::Flags)]
    InvalidFlags(String),
}

fn trim(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '\t')
}

/// Trimmed text of `field`.
fn get_field(row: &str, field: RowField) -> Result<&str, ParseRowError> {
    row.get(field.columns())
        .map(trim)
        .ok_or(ParseRowError::MalformedColumn(field))
}

/// Trimmed text of a free-form `field`, read from bytes.
///
/// Never fails: bytes that do not form valid UTF-8 inside the window become
/// `U+FFFD`. Callers check the length first.
fn get_text(row: &str, field: RowField) -> String {
    let bytes = row.as_bytes().get(field.columns()).unwrap_or_default();
    trim(&String::from_utf8_lossy(bytes)).to_string()
}

fn parse_float(row: &str, field: RowField) -> Result<f64, ParseRowError> {
    let value = get_field(row, field)?;
    value.parse::<f64>().map_err(|_| ParseRowError::InvalidField {
        field,
        value: value.to_string(),
    })
}

fn parse_flags(row: &str) -> Result<OrbitFlags, ParseRowError> {
    let value = get_field(row, RowField::Flags)?;
    u16::from_str_radix(value, 16)
        .map(OrbitFlags::from_bits)
        .map_err(|_| ParseRowError::InvalidFlags(value.to_string()))
}

/// Decode one catalog row.
///
/// Arguments
/// -----------------
/// * `row` – a full MPCORB line, at least 165 characters long.
///
/// Return
/// ----------
/// * The decoded [`OrbitalRecord`], or the first [`ParseRowError`] met while reading
///   the columns in catalog order.
pub fn decode_row(row: &str) -> Result<OrbitalRecord, ParseRowError> {
    if row.len() < MIN_ROW_LENGTH {
        return Err(ParseRowError::TooShortLine(row.len()));
    }

    let designation = get_text(row, RowField::Designation);
    let epoch_packed = get_field(row, RowField::EpochPacked)?.to_string();
    let mean_anomaly = parse_float(row, RowField::MeanAnomaly)?;
    let argument_of_perihelion = parse_float(row, RowField::ArgumentOfPerihelion)?;
    let longitude_ascending_node = parse_float(row, RowField::LongitudeAscendingNode)?;
    let inclination = parse_float(row, RowField::Inclination)?;
    let eccentricity = parse_float(row, RowField::Eccentricity)?;
    let mean_daily_motion = parse_float(row, RowField::MeanDailyMotion)?;
    let semi_major_axis = parse_float(row, RowField::SemiMajorAxis)?;
    let uncertainty_token = get_text(row, RowField::UncertaintyParameter);
    let flags = parse_flags(row)?;

    Ok(OrbitalRecord {
        designation,
        epoch_packed,
        mean_anomaly,
        argument_of_perihelion,
        longitude_ascending_node,
        inclination,
        eccentricity,
        mean_daily_motion,
        semi_major_axis,
        uncertainty_token,
        flags,
    })
}
