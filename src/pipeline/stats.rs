use std::fmt;

/// Counters of one pipeline run.
///
/// Purely advisory: they never change which records reach the output.
///
/// Invariant
/// -----------------
/// `processed = valid + unknown_orbit_type + too_uncertain + unbounded_orbit + error`
///
/// Classification runs first and already reports unflagged `e > 1` orbits as unknown,
/// so `unbounded_orbit` only counts NEO or PHA flagged orbits with `e > 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub processed: usize,
    pub valid: usize,
    pub unknown_orbit_type: usize,
    pub too_uncertain: usize,
    pub unbounded_orbit: usize,
    pub error: usize,
}

/// Why a record was left out of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    UnknownOrbitType,
    TooUncertain,
    UnboundedOrbit,
    Error,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::UnknownOrbitType => "unknown orbit type",
            SkipReason::TooUncertain => "too uncertain",
            SkipReason::UnboundedOrbit => "unbounded orbit",
            SkipReason::Error => "epoch error",
        };
        f.write_str(s)
    }
}

impl PipelineStats {
    /// Records left out of the output, whatever the reason.
    pub fn skipped(&self) -> usize {
        self.processed - self.valid
    }

    pub(crate) fn record_valid(&mut self) {
        self.processed += 1;
        self.valid += 1;
    }

    pub(crate) fn record_skip(&mut self, reason: SkipReason) {
        self.processed += 1;
        match reason {
            SkipReason::UnknownOrbitType => self.unknown_orbit_type += 1,
            SkipReason::TooUncertain => self.too_uncertain += 1,
            SkipReason::UnboundedOrbit => self.unbounded_orbit += 1,
            SkipReason::Error => self.error += 1,
        }
    }
}

impl fmt::Display for PipelineStats {
    /// Compact by default; one line per counter with the alternate flag (`{:#}`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(
                f,
                "processed {} asteroids ({} added, {} skipped)",
                self.processed,
                self.valid,
                self.skipped()
            )?;
            writeln!(f, "UnknownOrbitType: {}", self.unknown_orbit_type)?;
            writeln!(f, "TooUncertain: {}", self.too_uncertain)?;
            writeln!(f, "UnboundedOrbit: {}", self.unbounded_orbit)?;
            write!(f, "Error: {}", self.error)
        } else {
            write!(
                f,
                "processed={}, valid={}, unknown_orbit_type={}, too_uncertain={}, unbounded_orbit={}, error={}",
                self.processed,
                self.valid,
                self.unknown_orbit_type,
                self.too_uncertain,
                self.unbounded_orbit,
                self.error
            )
        }
    }
}
