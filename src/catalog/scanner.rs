//! # Catalog scanner
//!
//! [`CatalogScanner`] walks the lines of an `MPCORB.DAT` file and hands every data row
//! to [`decode_row`]. It is a plain [`Iterator`] over `Result<OrbitalRecord, MpcorbError>`.
//!
//! ## Policy
//! -----------------
//! * The metadata header is discarded up front. Header lines are counted among the
//!   **non-blank** lines only; a file with fewer non-blank lines than requested is
//!   reported as [`MpcorbError::TruncatedHeader`].
//! * Blank lines are skipped anywhere in the file.
//! * **Fail-fast**: the first row that does not decode is yielded as
//!   [`MpcorbError::InvalidRow`] (with its 1-based physical line number) and the
//!   scanner is exhausted afterwards. I/O errors behave the same way.
//!
//! Collecting the scanner into a `Result<Vec<_>, _>` (or feeding it to
//! [`itertools::process_results`]) therefore aborts the whole batch on a single
//! malformed row.
use std::io::{self, BufRead};

use tracing::{debug, warn};

use crate::{
    catalog::row_decoder::decode_row, mpcorb_errors::MpcorbError,
    orbital_record::OrbitalRecord,
};

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Fail-fast iterator over the orbit rows of a catalog.
#[derive(Debug)]
pub struct CatalogScanner<I> {
    lines: I,
    line_number: usize,
    finished: bool,
}

impl<I, S> CatalogScanner<I>
where
    I: Iterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    /// Wrap `lines` and skip the first `header_lines` non-blank lines.
    ///
    /// Arguments
    /// -----------------
    /// * `lines`: catalog lines without their line terminators.
    /// * `header_lines`: number of non-blank metadata lines to discard.
    ///
    /// Return
    /// ----------
    /// * A scanner positioned on the first data row.
    /// * [`MpcorbError::TruncatedHeader`] if the input ends inside the header,
    ///   [`MpcorbError::IoError`] if reading fails.
    pub fn new(lines: I, header_lines: usize) -> Result<Self, MpcorbError> {
        let mut scanner = CatalogScanner {
            lines,
            line_number: 0,
            finished: false,
        };

        let mut skipped = 0;
        while skipped < header_lines {
            match scanner.next_line()? {
                Some(line) if is_blank(line.as_ref()) => {}
                Some(_) => skipped += 1,
                None => {
                    return Err(MpcorbError::TruncatedHeader {
                        expected: header_lines,
                        found: skipped,
                    })
                }
            }
        }
        debug!(
            header_lines,
            physical_lines = scanner.line_number,
            "skipped catalog header"
        );

        Ok(scanner)
    }

    /// 1-based number of the last physical line read, header included.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn next_line(&mut self) -> Result<Option<S>, MpcorbError> {
        match self.lines.next() {
            Some(line) => {
                self.line_number += 1;
                Ok(Some(line?))
            }
            None => Ok(None),
        }
    }
}

impl<I, S> Iterator for CatalogScanner<I>
where
    I: Iterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    type Item = Result<OrbitalRecord, MpcorbError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let line = match self.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.finished = true;
                    return None;
                }
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            };

            let row = line.as_ref();
            if is_blank(row) {
                continue;
            }

            return Some(decode_row(row).map_err(|source| {
                self.finished = true;
                warn!(line = self.line_number, error = %source, "aborting catalog scan");
                MpcorbError::InvalidRow {
                    line: self.line_number,
                    source,
                }
            }));
        }
    }
}

impl<I, S> std::iter::FusedIterator for CatalogScanner<I>
where
    I: Iterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
}

/// Scan an in-memory catalog.
pub fn scan_text(
    text: &str,
    header_lines: usize,
) -> Result<CatalogScanner<impl Iterator<Item = io::Result<&str>>>, MpcorbError> {
    CatalogScanner::new(text.lines().map(Ok), header_lines)
}

/// Scan a buffered reader, typically a [`std::io::BufReader`] over `MPCORB.DAT`.
pub fn scan_reader<R: BufRead>(
    reader: R,
    header_lines: usize,
) -> Result<CatalogScanner<io::Lines<R>>, MpcorbError> {
    CatalogScanner::new(reader.lines(), header_lines)
}
