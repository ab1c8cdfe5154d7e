#![allow(dead_code)]

use camino::Utf8PathBuf;
use hifitime::Epoch;
use mpcorb::{PipelineParams, RowField};

/// (1) Ceres, November 2024 MPCORB.
pub const CERES_ROW: &str = "00001    3.34  0.15 K2555 188.70269   73.27343   80.25221   10.58780  0.0794013  0.21424651   2.7660512  0 E2024-V47  7330 125 1801-2024 0.65 M-v 30k MPCORB     0000      (1) Ceres              20241101";

/// Orbits kept from `tests/data/mpcorb_sample.dat` with the default filters.
pub const SAMPLE_VALID: usize = 7;

/// Physical line of the malformed row in `tests/data/mpcorb_malformed.dat`.
pub const MALFORMED_LINE: usize = 59;

pub fn data_path(name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Default parameters with the target epoch pinned to the catalog epoch day (2025-05-05).
pub fn sample_params() -> PipelineParams {
    PipelineParams::builder()
        .target_epoch(Epoch::from_gregorian_utc_at_midnight(2025, 5, 5))
        .build()
        .unwrap()
}

/// [`sample_params`] for a catalog with `header_lines` header lines.
pub fn params_with_header(header_lines: usize) -> PipelineParams {
    PipelineParams::builder()
        .target_epoch(Epoch::from_gregorian_utc_at_midnight(2025, 5, 5))
        .header_lines(header_lines)
        .build()
        .unwrap()
}

/// Overwrite columns of [`CERES_ROW`], values right-aligned.
pub fn ceres_with(fields: &[(RowField, &str)]) -> String {
    let mut line = CERES_ROW.to_string();
    for (field, value) in fields {
        let columns = field.columns();
        let width = columns.len();
        assert!(value.len() <= width, "{value:?} does not fit {field}");
        let value = if *field == RowField::Designation {
            format!("{value:<width$}")
        } else {
            format!("{value:>width$}")
        };
        line.replace_range(columns, &value);
    }
    line
}

pub struct SyntheticRow {
    pub designation: String,
    pub eccentricity: f64,
    pub semi_major_axis: f64,
    pub uncertainty: &'static str,
    pub flags: u16,
}

impl SyntheticRow {
    pub fn line(&self) -> String {
        let e = format!("{:.7}", self.eccentricity);
        let a = format!("{:.7}", self.semi_major_axis);
        let flags = format!("{:04X}", self.flags);
        ceres_with(&[
            (RowField::Designation, &self.designation),
            (RowField::Eccentricity, &e),
            (RowField::SemiMajorAxis, &a),
            (RowField::UncertaintyParameter, self.uncertainty),
            (RowField::Flags, &flags),
        ])
    }
}

/// Every combination of a few eccentricities, semimajor axes, uncertainty tokens and
/// flag words. Designations are unique.
pub fn synthetic_rows() -> Vec<SyntheticRow> {
    let eccentricities = [0.0, 0.1, 0.5, 0.95, 1.3];
    let semi_major_axes = [1.0, 2.1, 2.5, 3.5, 5.2, 40.0];
    let uncertainties = ["0", "1", "9", " ", "E"];
    let flags = [0x0000, 0x0005, 0x0006, 0x0008, 0x0009, 0x000A, 0x0803, 0x8000, 0x1004];

    let mut rows = Vec::new();
    for &eccentricity in &eccentricities {
        for &semi_major_axis in &semi_major_axes {
            for &uncertainty in &uncertainties {
                for &flags in &flags {
                    rows.push(SyntheticRow {
                        designation: format!("S{:06}", rows.len()),
                        eccentricity,
                        semi_major_axis,
                        uncertainty,
                        flags,
                    });
                }
            }
        }
    }
    rows
}

/// A catalog text with `header_lines` header lines followed by `rows`.
pub fn catalog_text<S: AsRef<str>>(header_lines: usize, rows: &[S]) -> String {
    let mut text = String::new();
    for i in 0..header_lines {
        text.push_str(&format!("header line {i}\n"));
    }
    for row in rows {
        text.push_str(row.as_ref());
        text.push('\n');
    }
    text
}
