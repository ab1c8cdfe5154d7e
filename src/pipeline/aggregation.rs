//! # Aggregation pipeline
//!
//! Single sequential pass over decoded records. Every record goes through the same
//! ordered checks, and the first failing check decides why it is skipped:
//!
//! 1. classification, `Unknown` → [`SkipReason::UnknownOrbitType`]
//! 2. uncertainty filter (see [`PipelineParams::accepts_uncertainty`]) → [`SkipReason::TooUncertain`]
//! 3. `e > 1` → [`SkipReason::UnboundedOrbit`]
//! 4. mean anomaly at the target epoch, failure → [`SkipReason::Error`]
//!
//! Surviving records become [`ClassifiedRecord`]s, appended in source order to the
//! group of their [`OrbitType`]. Skips are soft and never stop the pass; a decoding
//! error coming from the scanner does, see [`AggregationPipeline::run`].
use std::collections::HashMap;

use hifitime::Epoch;
use itertools::process_results;
use tracing::{debug, info};

use crate::{
    mpcorb_errors::MpcorbError,
    orbit_type::OrbitType,
    orbital_record::OrbitalRecord,
    pipeline::{
        classified_record::ClassifiedRecord,
        params::PipelineParams,
        stats::{PipelineStats, SkipReason},
    },
    time::unix_timestamp_u32,
};

/// Records sharing one orbit family, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidGroup {
    pub orbit_type: OrbitType,
    pub records: Vec<ClassifiedRecord>,
}

impl AsteroidGroup {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Result of a successful run.
///
/// `groups` holds only non-empty groups, ordered as [`OrbitType::ALL`].
#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidPayload {
    pub groups: Vec<AsteroidGroup>,
    pub stats: PipelineStats,
    pub time_created: Epoch,
    pub epoch: Epoch,
}

impl AsteroidPayload {
    /// Creation time as 32-bit Unix seconds.
    pub fn time_created_unix(&self) -> u32 {
        unix_timestamp_u32(self.time_created)
    }

    /// Target epoch as 32-bit Unix seconds.
    pub fn epoch_time_unix(&self) -> u32 {
        unix_timestamp_u32(self.epoch)
    }

    pub fn group(&self, orbit_type: OrbitType) -> Option<&AsteroidGroup> {
        self.groups.iter().find(|g| g.orbit_type == orbit_type)
    }

    pub fn total_records(&self) -> usize {
        self.groups.iter().map(AsteroidGroup::len).sum()
    }

    /// Every classified record, group after group.
    pub fn records(&self) -> impl Iterator<Item = &ClassifiedRecord> {
        self.groups.iter().flat_map(|g| g.records.iter())
    }
}

/// Accumulates groups and counters over one pass.
#[derive(Debug)]
pub struct AggregationPipeline {
    params: PipelineParams,
    target_epoch: Epoch,
    groups: HashMap<OrbitType, Vec<ClassifiedRecord>>,
    stats: PipelineStats,
}

impl AggregationPipeline {
    /// Start a run, resolving the target epoch once.
    pub fn new(params: &PipelineParams) -> Result<Self, MpcorbError> {
        let target_epoch = params.resolve_target_epoch()?;
        info!(%target_epoch, "selected epoch");

        Ok(AggregationPipeline {
            params: params.clone(),
            target_epoch,
            groups: HashMap::new(),
            stats: PipelineStats::default(),
        })
    }

    pub fn target_epoch(&self) -> Epoch {
        self.target_epoch
    }

    pub fn stats(&self) -> &PipelineStats {
        &self.stats
    }

    fn check(&self, record: &OrbitalRecord) -> Result<ClassifiedRecord, SkipReason> {
        let orbit_type = record.orbit_type();
        if orbit_type == OrbitType::Unknown {
            return Err(SkipReason::UnknownOrbitType);
        }
        if !self.params.accepts_uncertainty(record.uncertainty()) {
            return Err(SkipReason::TooUncertain);
        }
        if record.is_unbounded() {
            return Err(SkipReason::UnboundedOrbit);
        }

        let mean_anomaly = record.mean_anomaly_at(self.target_epoch).map_err(|err| {
            debug!(designation = record.designation(), error = %err, "cannot propagate mean anomaly");
            SkipReason::Error
        })?;

        Ok(ClassifiedRecord::new(
            record.clone(),
            orbit_type,
            mean_anomaly,
            self.target_epoch,
        ))
    }

    /// Feed one record.
    ///
    /// Return
    /// ----------
    /// * `None` if the record was added to its group, otherwise why it was skipped.
    pub fn push(&mut self, record: OrbitalRecord) -> Option<SkipReason> {
        match self.check(&record) {
            Ok(classified) => {
                self.stats.record_valid();
                self.groups
                    .entry(classified.orbit_type())
                    .or_default()
                    .push(classified);
                None
            }
            Err(reason) => {
                debug!(designation = record.designation(), %reason, "skipped record");
                self.stats.record_skip(reason);
                Some(reason)
            }
        }
    }

    /// Close the run and assemble the payload.
    pub fn finish(mut self) -> Result<AsteroidPayload, MpcorbError> {
        let groups = OrbitType::ALL
            .iter()
            .filter_map(|orbit_type| {
                self.groups
                    .remove(orbit_type)
                    .filter(|records| !records.is_empty())
                    .map(|records| AsteroidGroup {
                        orbit_type: *orbit_type,
                        records,
                    })
            })
            .collect();

        info!(stats = %self.stats, "catalog processed");

        Ok(AsteroidPayload {
            groups,
            stats: self.stats,
            time_created: Epoch::now()?,
            epoch: self.target_epoch,
        })
    }

    /// Run a whole batch.
    ///
    /// Arguments
    /// -----------------
    /// * `params`: run configuration.
    /// * `records`: decoded records in source order, usually a
    ///   [`CatalogScanner`](crate::catalog::scanner::CatalogScanner).
    ///
    /// Return
    /// ----------
    /// * The payload, or the first error met in `records`. In that case nothing
    ///   accumulated so far is returned.
    pub fn run<I>(params: &PipelineParams, records: I) -> Result<AsteroidPayload, MpcorbError>
    where
        I: IntoIterator<Item = Result<OrbitalRecord, MpcorbError>>,
    {
        let mut pipeline = AggregationPipeline::new(params)?;
        process_results(records, |iter| {
            for record in iter {
                pipeline.push(record);
            }
        })?;
        pipeline.finish()
    }
}

#[cfg(test)]
mod aggregation_test {
    use super::*;
    use crate::{
        catalog::row_decoder::{ParseRowError, RowField},
        test_rows::RowBuilder,
    };

    fn params() -> PipelineParams {
        PipelineParams::builder()
            .target_epoch(Epoch::from_gregorian_utc_at_midnight(2025, 1, 1))
            .build()
            .unwrap()
    }

    fn row(designation: &str) -> RowBuilder {
        RowBuilder::default().designation(designation)
    }

    #[test]
    fn test_push_skip_reasons_in_order() {
        let mut pipeline = AggregationPipeline::new(&params()).unwrap();

        // unknown wins over a bad uncertainty
        let unknown = row("A").semi_major_axis("40.0").uncertainty("9").record();
        assert_eq!(pipeline.push(unknown), Some(SkipReason::UnknownOrbitType));

        // hyperbolic orbits are unknown, never "unbounded"
        let hyperbolic = row("B").eccentricity("1.5").record();
        assert_eq!(pipeline.push(hyperbolic), Some(SkipReason::UnknownOrbitType));

        let uncertain = row("C").uncertainty("3").record();
        assert_eq!(pipeline.push(uncertain), Some(SkipReason::TooUncertain));

        let blank = row("D").uncertainty(" ").record();
        assert_eq!(pipeline.push(blank), Some(SkipReason::TooUncertain));

        let bad_epoch = row("E").epoch("K25D0").record();
        assert_eq!(pipeline.push(bad_epoch), Some(SkipReason::Error));

        assert_eq!(pipeline.push(row("F").record()), None);

        assert_eq!(
            *pipeline.stats(),
            PipelineStats {
                processed: 6,
                valid: 1,
                unknown_orbit_type: 2,
                too_uncertain: 2,
                unbounded_orbit: 0,
                error: 1,
            }
        );
    }

    #[test]
    fn test_neo_with_hyperbolic_orbit_is_unbounded() {
        // the NEO flag bypasses the classifier's e > 1 rule
        let mut pipeline = AggregationPipeline::new(&params()).unwrap();
        let record = row("X").eccentricity("1.0500000").flags("0800").record();
        assert_eq!(pipeline.push(record), Some(SkipReason::UnboundedOrbit));
        assert_eq!(pipeline.stats().unbounded_orbit, 1);
    }

    #[test]
    fn test_groups_follow_orbit_type_order() {
        let records = vec![
            Ok(row("belt1").record()),
            Ok(row("neo1").flags("0803").record()),
            Ok(row("hilda1").flags("0008").record()),
            Ok(row("belt2").record()),
            Ok(row("neo2").flags("8000").record()),
        ];

        let payload = AggregationPipeline::run(&params(), records).unwrap();

        let order: Vec<_> = payload.groups.iter().map(|g| g.orbit_type).collect();
        assert_eq!(
            order,
            [OrbitType::Hilda, OrbitType::Neo, OrbitType::AsteroidBelt]
        );

        let belt = payload.group(OrbitType::AsteroidBelt).unwrap();
        let names: Vec<_> = belt.records.iter().map(|r| r.designation()).collect();
        assert_eq!(names, ["belt1", "belt2"]);

        assert!(payload.group(OrbitType::Hungaria).is_none());
        assert_eq!(payload.total_records(), 5);
        assert_eq!(payload.stats.valid, 5);
        assert_eq!(payload.epoch, Epoch::from_gregorian_utc_at_midnight(2025, 1, 1));
        assert_eq!(payload.epoch_time_unix(), 1_735_689_600);
        assert!(payload.time_created_unix() > payload.epoch_time_unix());
    }

    #[test]
    fn test_records_carry_target_epoch_mean_anomaly() {
        let p = params();
        let record = row("00001").record();
        let expected = record.mean_anomaly_at(p.target_epoch.unwrap()).unwrap();

        let payload = AggregationPipeline::run(&p, vec![Ok(record)]).unwrap();
        let classified = payload.records().next().unwrap();
        assert_eq!(classified.mean_anomaly(), expected);
        assert_eq!(classified.target_epoch(), p.target_epoch.unwrap());
    }

    #[test]
    fn test_run_aborts_on_first_error() {
        let error = MpcorbError::InvalidRow {
            line: 3,
            source: ParseRowError::MalformedColumn(RowField::Flags),
        };
        let records = vec![
            Ok(row("a").record()),
            Err(error),
            Ok(row("b").record()),
        ];

        assert_eq!(
            AggregationPipeline::run(&params(), records),
            Err(MpcorbError::InvalidRow {
                line: 3,
                source: ParseRowError::MalformedColumn(RowField::Flags),
            })
        );
    }

    #[test]
    fn test_empty_input() {
        let payload = AggregationPipeline::run(&params(), Vec::new()).unwrap();
        assert!(payload.groups.is_empty());
        assert_eq!(payload.stats, PipelineStats::default());
    }
}
