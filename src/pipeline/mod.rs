//! # Catalog pipeline
//!
//! Glue between the catalog scanner and the aggregation pass:
//!
//! ```text
//! lines ─► CatalogScanner ─► decode_row ─► AggregationPipeline ─► AsteroidPayload
//!              (fail-fast)                   (soft skips, stats)
//! ```
//!
//! A run either returns an [`AsteroidPayload`] (groups + stats) or a single
//! [`MpcorbError`] naming the offending line; there is no partial output.
//!
//! ## Example
//! -----------------
//! ```rust,no_run
//! use mpcorb::pipeline::{params::PipelineParams, process_catalog_file};
//!
//! let params = PipelineParams::default();
//! let payload = process_catalog_file("MPCORB.DAT", &params).unwrap();
//! println!("{:#}", payload.stats);
//! ```
pub mod aggregation;
pub mod classified_record;
pub mod params;
pub mod stats;

use std::{fs::File, io::BufRead, io::BufReader};

use camino::Utf8Path;

use crate::{catalog::scanner::scan_reader, mpcorb_errors::MpcorbError};

pub use aggregation::{AggregationPipeline, AsteroidGroup, AsteroidPayload};
pub use classified_record::ClassifiedRecord;
pub use params::{PipelineParams, PipelineParamsBuilder};
pub use stats::{PipelineStats, SkipReason};

/// Process a whole catalog read from `reader`.
pub fn process_catalog<R: BufRead>(
    reader: R,
    params: &PipelineParams,
) -> Result<AsteroidPayload, MpcorbError> {
    let scanner = scan_reader(reader, params.header_lines)?;
    AggregationPipeline::run(params, scanner)
}

/// Process the catalog file at `path`.
pub fn process_catalog_file<P: AsRef<Utf8Path>>(
    path: P,
    params: &PipelineParams,
) -> Result<AsteroidPayload, MpcorbError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(MpcorbError::CatalogFileNotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    process_catalog(BufReader::new(file), params)
}
