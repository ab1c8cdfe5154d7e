//! CSV export of a pipeline payload, one row per classified record.
use std::io::Write;

use serde::Serialize;

use crate::{mpcorb_errors::MpcorbError, pipeline::aggregation::AsteroidPayload};

#[derive(Debug, Serialize)]
struct AsteroidRow<'a> {
    orbit_type: &'a str,
    designation: &'a str,
    eccentricity: f64,
    semi_major_axis: f64,
    inclination: f64,
    longitude_ascending_node: f64,
    argument_of_perihelion: f64,
    mean_anomaly: f64,
    epoch_unix: u32,
}

/// Write every record of `payload` as CSV, with a header row.
///
/// Angles are in radians, distances in AU. Rows follow the group order of the payload.
pub fn write_csv<W: Write>(payload: &AsteroidPayload, writer: W) -> Result<(), MpcorbError> {
    let mut wtr = csv::Writer::from_writer(writer);
    let epoch_unix = payload.epoch_time_unix();

    for group in &payload.groups {
        let orbit_type = group.orbit_type.name();
        for record in &group.records {
            wtr.serialize(AsteroidRow {
                orbit_type,
                designation: record.designation(),
                eccentricity: record.eccentricity(),
                semi_major_axis: record.semi_major_axis(),
                inclination: record.inclination(),
                longitude_ascending_node: record.longitude_ascending_node(),
                argument_of_perihelion: record.argument_of_perihelion(),
                mean_anomaly: record.mean_anomaly(),
                epoch_unix,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}
