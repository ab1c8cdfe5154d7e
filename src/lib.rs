//! Decode, classify and epoch-adjust the Minor Planet Center `MPCORB.DAT` catalog.
//!
//! ```rust,no_run
//! use mpcorb::{process_catalog_file, OrbitType, PipelineParams};
//!
//! let payload = process_catalog_file("MPCORB.DAT", &PipelineParams::default())?;
//! if let Some(neos) = payload.group(OrbitType::Neo) {
//!     println!("{} NEOs", neos.len());
//! }
//! # Ok::<(), mpcorb::MpcorbError>(())
//! ```
pub mod catalog;
pub mod constants;
pub mod export;
pub mod kepler;
pub mod mpcorb_errors;
pub mod orbit_flags;
pub mod orbit_type;
pub mod orbital_record;
pub mod packed_date;
pub mod pipeline;
pub mod propagation;
pub mod time;

#[cfg(test)]
pub(crate) mod test_rows;

pub use catalog::{decode_row, scan_reader, scan_text, CatalogScanner, ParseRowError, RowField};
pub use mpcorb_errors::MpcorbError;
pub use orbit_flags::{OrbitFlags, OrbitSubtype};
pub use orbit_type::OrbitType;
pub use orbital_record::{OrbitalRecord, Uncertainty};
pub use packed_date::{decode_packed_character, decode_packed_date, PackedDate, PackedDateError};
pub use pipeline::{
    process_catalog, process_catalog_file, AggregationPipeline, AsteroidGroup, AsteroidPayload,
    ClassifiedRecord, PipelineParams, PipelineStats,
};
