//! # Kepler's equation and heliocentric positions
//!
//! Turns catalog elements and a propagated mean anomaly into a position vector:
//!
//! ```text
//! M = E − e·sin(E)                       (solved for E by Newton–Raphson)
//! x = a (cos E − e),  y = a √(1 − e²) sin E
//! r = Rz(Ω) · Rx(i) · Rz(ω) · (x, y, 0)
//! ```
//!
//! The result is expressed in the J2000.0 ecliptic frame of the catalog, in AU.
//! Only bound orbits (`e < 1`) are meaningful here; the classifier already routes
//! every `e > 1` orbit away from the pipeline output.
use nalgebra::{Rotation3, Vector3};
use roots::{find_root_newton_raphson, SimpleConvergency};

use crate::{
    constants::{AstronomicalUnit, Radian, DPI},
    mpcorb_errors::MpcorbError,
};

/// Principal value of an angle, in `[0, 2π)`.
///
/// `rem_euclid` rounds tiny negative inputs up to exactly `2π`, which is folded back to 0.
pub(crate) fn principal_angle(a: f64) -> f64 {
    let r = a.rem_euclid(DPI);
    if r >= DPI {
        0.0
    } else {
        r
    }
}

/// Solve Kepler's equation `M = E − e·sin(E)` for the eccentric anomaly.
///
/// Arguments
/// -----------------
/// * `mean_anomaly`: mean anomaly `M` in radians, any range.
/// * `eccentricity`: orbital eccentricity, `0 ≤ e < 1`.
/// * `tolerance`: convergence threshold on the residual and on the Newton step.
/// * `max_iter`: iteration cap.
///
/// Return
/// ----------
/// * The eccentric anomaly `E` in radians, in `[0, 2π)`.
/// * [`MpcorbError::RootFindingError`] if Newton's method stalls or does not converge.
pub fn solve_kepler_equation(
    mean_anomaly: Radian,
    eccentricity: f64,
    tolerance: f64,
    max_iter: usize,
) -> Result<Radian, MpcorbError> {
    let mean_anomaly = principal_angle(mean_anomaly);

    let f = |ecc_anom: f64| ecc_anom - eccentricity * ecc_anom.sin() - mean_anomaly;
    let df = |ecc_anom: f64| 1.0 - eccentricity * ecc_anom.cos();

    // π is a safe start for very eccentric orbits
    let x0 = if eccentricity > 0.8 {
        std::f64::consts::PI
    } else {
        mean_anomaly
    };

    let mut convergency = SimpleConvergency {
        eps: tolerance,
        max_iter,
    };

    let ecc_anom = find_root_newton_raphson(x0, &f, &df, &mut convergency)?;
    Ok(principal_angle(ecc_anom))
}

/// Heliocentric ecliptic position of an elliptic orbit.
///
/// Arguments
/// -----------------
/// * `semi_major_axis`: AU.
/// * `eccentricity`: `0 ≤ e < 1`.
/// * `inclination`, `longitude_ascending_node`, `argument_of_perihelion`: radians.
/// * `eccentric_anomaly`: radians, see [`solve_kepler_equation`].
///
/// Return
/// ----------
/// * The position vector in AU.
pub fn heliocentric_position(
    semi_major_axis: AstronomicalUnit,
    eccentricity: f64,
    inclination: Radian,
    longitude_ascending_node: Radian,
    argument_of_perihelion: Radian,
    eccentric_anomaly: Radian,
) -> Vector3<AstronomicalUnit> {
    let (sin_e, cos_e) = eccentric_anomaly.sin_cos();
    let perifocal = Vector3::new(
        semi_major_axis * (cos_e - eccentricity),
        semi_major_axis * (1.0 - eccentricity.powi(2)).sqrt() * sin_e,
        0.0,
    );

    let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), longitude_ascending_node)
        * Rotation3::from_axis_angle(&Vector3::x_axis(), inclination)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), argument_of_perihelion);

    rotation * perifocal
}
