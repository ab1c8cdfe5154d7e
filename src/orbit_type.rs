//! # Orbit families
//!
//! [`OrbitType`] is the coarse dynamical family of a minor planet, derived from its
//! eccentricity, semimajor axis and decoded [`OrbitFlags`]. It is never stored: every
//! caller recomputes it with [`OrbitType::classify`], a pure function.
//!
//! ## Decision order
//! -----------------
//! The first matching rule wins:
//!
//! 1. NEO or PHA flag set → [`OrbitType::Neo`]
//! 2. `e > 1` → [`OrbitType::Unknown`], whatever the subtype bits say
//! 3. Subtype code 6, 9, 8 or 5 → Hungaria, Jupiter Trojan, Hilda, Q-bounded
//! 4. Perihelion `q = a (1 − e)` in `[2.06, 3.28]` AU → [`OrbitType::AsteroidBelt`]
//! 5. Otherwise [`OrbitType::Unknown`]
use std::fmt;

use crate::{
    constants::{AstronomicalUnit, ASTEROID_BELT_PERIHELION_AU},
    orbit_flags::{OrbitFlags, OrbitSubtype},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrbitType {
    Unknown,
    /// Perihelion below 1.665 AU, not flagged as NEO
    QBounded,
    Hungaria,
    Hilda,
    JupiterTrojan,
    /// Near-Earth object, including potentially hazardous asteroids
    Neo,
    AsteroidBelt,
}

impl OrbitType {
    /// Every family, in the order used when emitting groups.
    pub const ALL: [OrbitType; 7] = [
        OrbitType::Unknown,
        OrbitType::QBounded,
        OrbitType::Hungaria,
        OrbitType::Hilda,
        OrbitType::JupiterTrojan,
        OrbitType::Neo,
        OrbitType::AsteroidBelt,
    ];

    /// Classify an orbit.
    ///
    /// Arguments
    /// -----------------
    /// * `eccentricity`: orbital eccentricity, unbound orbits have `e > 1`.
    /// * `semi_major_axis`: semimajor axis in AU.
    /// * `flags`: decoded MPCORB flag word.
    ///
    /// Return
    /// ----------
    /// * The orbit family. There is no failure mode.
    pub fn classify(
        eccentricity: f64,
        semi_major_axis: AstronomicalUnit,
        flags: &OrbitFlags,
    ) -> OrbitType {
        if flags.is_neo || flags.is_pha {
            return OrbitType::Neo;
        }
        if eccentricity > 1.0 {
            return OrbitType::Unknown;
        }

        match flags.subtype() {
            Some(OrbitSubtype::Hungaria) => return OrbitType::Hungaria,
            Some(OrbitSubtype::JupiterTrojan) => return OrbitType::JupiterTrojan,
            Some(OrbitSubtype::Hilda) => return OrbitType::Hilda,
            Some(OrbitSubtype::QBounded) => return OrbitType::QBounded,
            _ => {}
        }

        let perihelion = semi_major_axis * (1.0 - eccentricity);
        if ASTEROID_BELT_PERIHELION_AU.contains(&perihelion) {
            OrbitType::AsteroidBelt
        } else {
            OrbitType::Unknown
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OrbitType::Unknown => "Unknown",
            OrbitType::QBounded => "Q-bounded",
            OrbitType::Hungaria => "Hungaria",
            OrbitType::Hilda => "Hilda",
            OrbitType::JupiterTrojan => "Jupiter Trojan",
            OrbitType::Neo => "NEO",
            OrbitType::AsteroidBelt => "Asteroid belt",
        }
    }
}

impl fmt::Display for OrbitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
