//! Catalog rows for unit tests.
use crate::{
    catalog::row_decoder::{decode_row, RowField},
    orbital_record::OrbitalRecord,
};

/// (1) Ceres as published in the November 2024 MPCORB.
pub(crate) const CERES_ROW: &str = "00001    3.34  0.15 K2555 188.70269   73.27343   80.25221   10.58780  0.0794013  0.21424651   2.7660512  0 E2024-V47  7330 125 1801-2024 0.65 M-v 30k MPCORB     0000      (1) Ceres              20241101";

/// Edits columns of [`CERES_ROW`], values are right-aligned in their window.
#[derive(Debug, Clone)]
pub(crate) struct RowBuilder {
    line: String,
}

impl Default for RowBuilder {
    fn default() -> Self {
        RowBuilder {
            line: CERES_ROW.to_string(),
        }
    }
}

impl RowBuilder {
    fn set(mut self, field: RowField, value: &str) -> Self {
        let columns = field.columns();
        let width = columns.len();
        assert!(value.len() <= width, "{value:?} does not fit {field}");
        self.line.replace_range(columns, &format!("{value:>width$}"));
        self
    }

    pub(crate) fn designation(self, v: &str) -> Self {
        self.set(RowField::Designation, &format!("{v:<7}"))
    }
    pub(crate) fn epoch(self, v: &str) -> Self {
        self.set(RowField::EpochPacked, v)
    }
    pub(crate) fn mean_anomaly(self, v: &str) -> Self {
        self.set(RowField::MeanAnomaly, v)
    }
    pub(crate) fn argument_of_perihelion(self, v: &str) -> Self {
        self.set(RowField::ArgumentOfPerihelion, v)
    }
    pub(crate) fn longitude_ascending_node(self, v: &str) -> Self {
        self.set(RowField::LongitudeAscendingNode, v)
    }
    pub(crate) fn inclination(self, v: &str) -> Self {
        self.set(RowField::Inclination, v)
    }
    pub(crate) fn eccentricity(self, v: &str) -> Self {
        self.set(RowField::Eccentricity, v)
    }
    pub(crate) fn mean_daily_motion(self, v: &str) -> Self {
        self.set(RowField::MeanDailyMotion, v)
    }
    pub(crate) fn semi_major_axis(self, v: &str) -> Self {
        self.set(RowField::SemiMajorAxis, v)
    }
    pub(crate) fn uncertainty(self, v: &str) -> Self {
        self.set(RowField::UncertaintyParameter, v)
    }
    pub(crate) fn flags(self, v: &str) -> Self {
        self.set(RowField::Flags, v)
    }

    pub(crate) fn line(self) -> String {
        self.line
    }

    pub(crate) fn record(self) -> OrbitalRecord {
        decode_row(&self.line).expect("test row must decode")
    }
}
