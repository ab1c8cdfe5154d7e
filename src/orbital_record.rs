//! # Orbital records
//!
//! An [`OrbitalRecord`] is the numeric content of one MPCORB row, exactly as
//! decoded by [`crate::catalog::row_decoder::decode_row`]. Angles are kept in
//! **degrees** as stored by the catalog and exposed in **radians** (normalized to
//! `[0, 2π)`) through accessors.
//!
//! Records are immutable: fields are private and only the decoder builds them.
//! Eccentricity and uncertainty are *not* checked here, they are downstream
//! filters (see [`crate::pipeline`]).
use std::fmt;

use hifitime::Epoch;

use crate::{
    constants::{AstronomicalUnit, Degree, DegreePerDay, Radian},
    orbit_flags::OrbitFlags,
    orbit_type::OrbitType,
    packed_date::{PackedDate, PackedDateError},
    propagation::{deg_to_rad, mean_anomaly_at},
};

/// Uncertainty parameter `U` of an orbit (column 106).
///
/// The MPC publishes a digit `0` (best) to `9` (worst), and may instead put a letter
/// there (`E` for an assumed eccentricity, `D` for a double designation, `F` for a
/// 1-opposition orbit with perihelion-only fit). The column can also be blank.
///
/// Blank and letter tokens are kept apart from numeric codes so callers can decide
/// how to treat missing information; see
/// [`PipelineParams`](crate::pipeline::params::PipelineParams).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uncertainty {
    Code(u8),
    Blank,
    Flag(char),
}

impl Uncertainty {
    /// Interpret a trimmed uncertainty token.
    pub fn from_token(token: &str) -> Self {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Uncertainty::Blank,
            (Some(c), None) => match c.to_digit(10) {
                Some(d) => Uncertainty::Code(d as u8),
                None => Uncertainty::Flag(c),
            },
            // the column is one character wide, anything longer is not a code
            (Some(c), Some(_)) => Uncertainty::Flag(c),
        }
    }

    pub fn code(&self) -> Option<u8> {
        match self {
            Uncertainty::Code(code) => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for Uncertainty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uncertainty::Code(code) => write!(f, "{code}"),
            Uncertainty::Blank => write!(f, "blank"),
            Uncertainty::Flag(c) => write!(f, "{c}"),
        }
    }
}

/// Orbital elements of one minor planet at the catalog epoch.
///
/// Units
/// -----
/// * `mean_anomaly`, `argument_of_perihelion`, `longitude_ascending_node`,
///   `inclination`: degrees, J2000.0 ecliptic.
/// * `semi_major_axis`: AU.
/// * `mean_daily_motion`: degrees per day.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalRecord {
    pub(crate) designation: String,
    pub(crate) epoch_packed: String,
    pub(crate) mean_anomaly: Degree,
    pub(crate) argument_of_perihelion: Degree,
    pub(crate) longitude_ascending_node: Degree,
    pub(crate) inclination: Degree,
    pub(crate) eccentricity: f64,
    pub(crate) mean_daily_motion: DegreePerDay,
    pub(crate) semi_major_axis: AstronomicalUnit,
    pub(crate) uncertainty_token: String,
    pub(crate) flags: OrbitFlags,
}

impl OrbitalRecord {
    /// Packed designation (columns 1–7), e.g. `00001` or `K25D50B`.
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Epoch of osculation in packed form, e.g. `K2555`.
    pub fn epoch_packed(&self) -> &str {
        &self.epoch_packed
    }

    /// Decoded catalog epoch, see [`PackedDate`].
    pub fn epoch(&self) -> Result<Epoch, PackedDateError> {
        self.epoch_packed.parse::<PackedDate>().map(|d| d.to_epoch())
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn semi_major_axis(&self) -> AstronomicalUnit {
        self.semi_major_axis
    }

    pub fn mean_daily_motion(&self) -> DegreePerDay {
        self.mean_daily_motion
    }

    /// Mean anomaly at the catalog epoch, degrees.
    pub fn mean_anomaly_deg(&self) -> Degree {
        self.mean_anomaly
    }

    pub fn inclination(&self) -> Radian {
        deg_to_rad(self.inclination)
    }

    pub fn longitude_ascending_node(&self) -> Radian {
        deg_to_rad(self.longitude_ascending_node)
    }

    pub fn argument_of_perihelion(&self) -> Radian {
        deg_to_rad(self.argument_of_perihelion)
    }

    /// Raw uncertainty token, possibly empty.
    pub fn uncertainty_token(&self) -> &str {
        &self.uncertainty_token
    }

    pub fn uncertainty(&self) -> Uncertainty {
        Uncertainty::from_token(&self.uncertainty_token)
    }

    pub fn flags(&self) -> &OrbitFlags {
        &self.flags
    }

    /// Perihelion distance `q = a (1 − e)`, AU.
    pub fn perihelion_distance(&self) -> AstronomicalUnit {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Hyperbolic (unbound) orbit.
    pub fn is_unbounded(&self) -> bool {
        self.eccentricity > 1.0
    }

    /// Orbit family, recomputed on every call.
    pub fn orbit_type(&self) -> OrbitType {
        OrbitType::classify(self.eccentricity, self.semi_major_axis, &self.flags)
    }

    /// Mean anomaly propagated to `target`, radians in `[0, 2π)`.
    pub fn mean_anomaly_at(&self, target: Epoch) -> Result<Radian, PackedDateError> {
        mean_anomaly_at(self, target)
    }
}
