use camino::Utf8PathBuf;
use thiserror::Error;

use crate::{catalog::row_decoder::ParseRowError, packed_date::PackedDateError};

#[derive(Error, Debug)]
pub enum MpcorbError {
    #[error("Malformed catalog row at line {line}: {source}")]
    InvalidRow { line: usize, source: ParseRowError },

    #[error("Catalog too short: expected {expected} header lines, found {found}")]
    TruncatedHeader { expected: usize, found: usize },

    #[error("Invalid packed date: {0}")]
    PackedDate(#[from] PackedDateError),

    #[error("Invalid pipeline parameter: {0}")]
    InvalidPipelineParameter(String),

    #[error("ROOTS finding error: {0}")]
    RootFindingError(#[from] roots::SearchError),

    #[error("Time computation error: {0}")]
    Time(#[from] hifitime::HifitimeError),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("UTF-8 Path error: {0}")]
    Utf8PathError(String),

    #[error("Catalog file not found at: {0}")]
    CatalogFileNotFound(Utf8PathBuf),

    #[cfg(feature = "download")]
    #[error("HTTP reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[cfg(feature = "download")]
    #[error("Catalog download failed: {0}")]
    DownloadFailed(String),
}

impl MpcorbError {
    /// Physical line number of the offending row, for fail-fast row errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            MpcorbError::InvalidRow { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl PartialEq for MpcorbError {
    fn eq(&self, other: &Self) -> bool {
        use MpcorbError::*;
        match (self, other) {
            (
                InvalidRow { line: l1, source: s1 },
                InvalidRow { line: l2, source: s2 },
            ) => l1 == l2 && s1 == s2,
            (
                TruncatedHeader {
                    expected: e1,
                    found: f1,
                },
                TruncatedHeader {
                    expected: e2,
                    found: f2,
                },
            ) => e1 == e2 && f1 == f2,
            (PackedDate(a), PackedDate(b)) => a == b,
            (InvalidPipelineParameter(a), InvalidPipelineParameter(b)) => a == b,
            (Utf8PathError(a), Utf8PathError(b)) => a == b,
            (CatalogFileNotFound(a), CatalogFileNotFound(b)) => a == b,
            (RootFindingError(a), RootFindingError(b)) => a == b,

            // not comparable, same variant is enough
            (Time(_), Time(_)) => true,
            (IoError(_), IoError(_)) => true,
            (Csv(_), Csv(_)) => true,
            #[cfg(feature = "download")]
            (ReqwestError(_), ReqwestError(_)) => true,
            #[cfg(feature = "download")]
            (DownloadFailed(a), DownloadFailed(b)) => a == b,

            _ => false,
        }
    }
}
