use hifitime::Epoch;
use nalgebra::Vector3;

use crate::{
    constants::{AstronomicalUnit, Radian, KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE},
    kepler::{heliocentric_position, solve_kepler_equation},
    mpcorb_errors::MpcorbError,
    orbit_type::OrbitType,
    orbital_record::OrbitalRecord,
};

/// An [`OrbitalRecord`] that passed every filter, with its family and the mean
/// anomaly evaluated at the run's target epoch.
///
/// Only the aggregation pipeline builds these.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRecord {
    record: OrbitalRecord,
    orbit_type: OrbitType,
    mean_anomaly: Radian,
    target_epoch: Epoch,
}

impl ClassifiedRecord {
    pub(crate) fn new(
        record: OrbitalRecord,
        orbit_type: OrbitType,
        mean_anomaly: Radian,
        target_epoch: Epoch,
    ) -> Self {
        ClassifiedRecord {
            record,
            orbit_type,
            mean_anomaly,
            target_epoch,
        }
    }

    pub fn record(&self) -> &OrbitalRecord {
        &self.record
    }

    pub fn orbit_type(&self) -> OrbitType {
        self.orbit_type
    }

    pub fn target_epoch(&self) -> Epoch {
        self.target_epoch
    }

    pub fn designation(&self) -> &str {
        self.record.designation()
    }

    pub fn eccentricity(&self) -> f64 {
        self.record.eccentricity()
    }

    pub fn semi_major_axis(&self) -> AstronomicalUnit {
        self.record.semi_major_axis()
    }

    pub fn inclination(&self) -> Radian {
        self.record.inclination()
    }

    pub fn longitude_ascending_node(&self) -> Radian {
        self.record.longitude_ascending_node()
    }

    pub fn argument_of_perihelion(&self) -> Radian {
        self.record.argument_of_perihelion()
    }

    /// Mean anomaly at the target epoch, radians in `[0, 2π)`.
    pub fn mean_anomaly(&self) -> Radian {
        self.mean_anomaly
    }

    /// Heliocentric ecliptic J2000 position at the target epoch, in AU.
    ///
    /// Return
    /// ----------
    /// * The position vector, or [`MpcorbError::RootFindingError`] if Kepler's equation
    ///   does not converge (only near-parabolic orbits are at risk).
    pub fn heliocentric_position(&self) -> Result<Vector3<AstronomicalUnit>, MpcorbError> {
        let eccentric_anomaly = solve_kepler_equation(
            self.mean_anomaly,
            self.eccentricity(),
            KEPLER_TOLERANCE,
            KEPLER_MAX_ITERATIONS,
        )?;

        Ok(heliocentric_position(
            self.semi_major_axis(),
            self.eccentricity(),
            self.inclination(),
            self.longitude_ascending_node(),
            self.argument_of_perihelion(),
            eccentric_anomaly,
        ))
    }
}

#[cfg(test)]
mod classified_record_test {
    use super::*;
    use crate::test_rows::RowBuilder;
    use approx::assert_abs_diff_eq;

    fn classify(builder: RowBuilder) -> ClassifiedRecord {
        let record = builder.record();
        let target = record.epoch().unwrap();
        let m = record.mean_anomaly_at(target).unwrap();
        ClassifiedRecord::new(record.clone(), record.orbit_type(), m, target)
    }

    #[test]
    fn test_accessors() {
        let classified = classify(RowBuilder::default());
        assert_eq!(classified.designation(), "00001");
        assert_eq!(classified.orbit_type(), OrbitType::AsteroidBelt);
        assert_eq!(classified.eccentricity(), 0.0794013);
        assert_eq!(classified.semi_major_axis(), 2.7660512);
        assert_abs_diff_eq!(classified.inclination(), 10.5878_f64.to_radians(), epsilon = 1e-12);
        assert_abs_diff_eq!(
            classified.mean_anomaly(),
            188.70269_f64.to_radians(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_heliocentric_position_at_perihelion() {
        let classified = classify(
            RowBuilder::default()
                .mean_anomaly("0.0")
                .inclination("0.0")
                .longitude_ascending_node("0.0")
                .argument_of_perihelion("0.0")
                .eccentricity("0.1000000")
                .semi_major_axis("2.5000000"),
        );
        let r = classified.heliocentric_position().unwrap();
        assert_abs_diff_eq!(r, Vector3::new(2.25, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_ceres_distance_is_within_its_orbit() {
        let classified = classify(RowBuilder::default());
        let r = classified.heliocentric_position().unwrap().norm();
        let (a, e) = (classified.semi_major_axis(), classified.eccentricity());
        assert!(r >= a * (1.0 - e) - 1e-9 && r <= a * (1.0 + e) + 1e-9);
        // M ≈ 188.7°: close to aphelion
        assert!(r > a);
    }
}
