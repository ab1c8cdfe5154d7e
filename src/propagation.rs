//! # Mean anomaly propagation
//!
//! The mean anomaly advances linearly with time at the catalog's mean daily motion:
//!
//! ```text
//! M(t) = M0 + n · (t − t0)
//! ```
//!
//! where `t0` is the packed catalog epoch (0h TT, see [`crate::packed_date`]) and `n`
//! is in degrees per day. The elapsed time is the signed number of SI seconds between
//! both instants, so targets before the catalog epoch propagate backwards. There is
//! no bound on `|t − t0|`.
use hifitime::Epoch;

use crate::{
    constants::{Degree, Radian, RADEG, SECONDS_PER_DAY},
    kepler::principal_angle,
    orbital_record::OrbitalRecord,
    packed_date::PackedDateError,
    time::elapsed_seconds,
};

/// Degrees → radians, normalized to `[0, 2π)`.
#[inline]
pub fn deg_to_rad(angle: Degree) -> Radian {
    principal_angle(angle * RADEG)
}

/// Mean anomaly of `record` at `target`.
///
/// Arguments
/// -----------------
/// * `record`: decoded catalog entry providing `M0`, `n` and the packed epoch.
/// * `target`: instant at which the mean anomaly is wanted, any time scale.
///
/// Return
/// ----------
/// * The mean anomaly in radians, in `[0, 2π)`.
/// * A [`PackedDateError`] if the record's packed epoch cannot be decoded. This is
///   the only failure mode.
pub fn mean_anomaly_at(record: &OrbitalRecord, target: Epoch) -> Result<Radian, PackedDateError> {
    let catalog_epoch = record.epoch()?;
    let dt = elapsed_seconds(catalog_epoch, target);
    Ok(deg_to_rad(
        record.mean_anomaly_deg() + (record.mean_daily_motion() / SECONDS_PER_DAY) * dt,
    ))
}
