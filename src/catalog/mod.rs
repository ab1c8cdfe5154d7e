//! # MPCORB catalog input
//!
//! Everything between the raw `MPCORB.DAT` text and decoded [`OrbitalRecord`]s:
//!
//! * [`row_decoder`] – one fixed-width line → one [`OrbitalRecord`].
//! * [`scanner`] – header skipping, blank lines and the fail-fast row iteration.
//! * `download` – fetch and cache the catalog (feature `download`).
//!
//! [`OrbitalRecord`]: crate::orbital_record::OrbitalRecord
#[cfg(feature = "download")]
pub mod download;
pub mod row_decoder;
pub mod scanner;

pub use row_decoder::{decode_row, ParseRowError, RowField};
pub use scanner::{scan_reader, scan_text, CatalogScanner};
