//! Run configuration of the aggregation pipeline.
use std::fmt;

use hifitime::Epoch;

use crate::{
    constants::MPCORB_HEADER_LINES, mpcorb_errors::MpcorbError, orbital_record::Uncertainty,
    time::start_of_current_utc_day,
};

/// Highest uncertainty code published by the MPC.
const MAX_UNCERTAINTY_CODE: u8 = 9;

/// Configuration of one catalog run.
///
/// Fields
/// -----------------
/// * `target_epoch` – instant at which mean anomalies are evaluated; `None` means the
///   start of the current UTC day, resolved once when the run starts.
/// * `header_lines` – non-blank metadata lines discarded before the first row.
/// * `max_uncertainty` – highest accepted uncertainty code `U` (`0..=9`).
/// * `keep_blank_uncertainty` – accept rows whose `U` column is blank.
///
/// Defaults
/// -----------------
/// * `target_epoch`: `None`
/// * `header_lines`: 43
/// * `max_uncertainty`: 0, only the best determined orbits pass
/// * `keep_blank_uncertainty`: false
///
/// Letter codes (`E`, `D`, `F`, ...) in the uncertainty column are always rejected.
///
/// ```rust,no_run
/// use mpcorb::pipeline::params::PipelineParams;
///
/// let params = PipelineParams::builder()
///     .max_uncertainty(2)
///     .keep_blank_uncertainty(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineParams {
    pub target_epoch: Option<Epoch>,
    pub header_lines: usize,
    pub max_uncertainty: u8,
    pub keep_blank_uncertainty: bool,
}

impl PipelineParams {
    /// Equivalent to [`PipelineParams::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> PipelineParamsBuilder {
        PipelineParamsBuilder::new()
    }

    /// The explicit target epoch, or the start of the current UTC day.
    pub fn resolve_target_epoch(&self) -> Result<Epoch, MpcorbError> {
        match self.target_epoch {
            Some(epoch) => Ok(epoch),
            None => start_of_current_utc_day(),
        }
    }

    /// Whether a record with this uncertainty parameter is kept.
    pub fn accepts_uncertainty(&self, uncertainty: Uncertainty) -> bool {
        match uncertainty {
            Uncertainty::Code(code) => code <= self.max_uncertainty,
            Uncertainty::Blank => self.keep_blank_uncertainty,
            Uncertainty::Flag(_) => false,
        }
    }
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            target_epoch: None,
            header_lines: MPCORB_HEADER_LINES,
            max_uncertainty: 0,
            keep_blank_uncertainty: false,
        }
    }
}

/// Builder for [`PipelineParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct PipelineParamsBuilder {
    params: PipelineParams,
}

impl PipelineParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: PipelineParams::default(),
        }
    }

    pub fn target_epoch(mut self, v: Epoch) -> Self {
        self.params.target_epoch = Some(v);
        self
    }
    pub fn header_lines(mut self, v: usize) -> Self {
        self.params.header_lines = v;
        self
    }
    pub fn max_uncertainty(mut self, v: u8) -> Self {
        self.params.max_uncertainty = v;
        self
    }
    pub fn keep_blank_uncertainty(mut self, v: bool) -> Self {
        self.params.keep_blank_uncertainty = v;
        self
    }

    /// Validate and return the parameters.
    ///
    /// Return
    /// ----------
    /// * [`MpcorbError::InvalidPipelineParameter`] if `max_uncertainty > 9`.
    pub fn build(self) -> Result<PipelineParams, MpcorbError> {
        if self.params.max_uncertainty > MAX_UNCERTAINTY_CODE {
            return Err(MpcorbError::InvalidPipelineParameter(format!(
                "max_uncertainty must be <= {MAX_UNCERTAINTY_CODE}, got {}",
                self.params.max_uncertainty
            )));
        }
        Ok(self.params)
    }
}

impl fmt::Display for PipelineParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let epoch = match &self.target_epoch {
            Some(epoch) => epoch.to_string(),
            None => "start of current UTC day".to_string(),
        };

        if f.alternate() {
            const PARAM_COL: usize = 50;
            writeln!(f, "Catalog Pipeline Parameters")?;
            writeln!(f, "---------------------------")?;

            macro_rules! line {
                ($fmt:expr, $val:expr, $comment:expr) => {{
                    let s = format!($fmt, $val);
                    let pad = if s.len() < PARAM_COL {
                        " ".repeat(PARAM_COL - s.len())
                    } else {
                        " ".to_string()
                    };
                    writeln!(f, "  {}{}# {}", s, pad, $comment)
                }};
            }

            line!(
                "target_epoch           = {}",
                epoch,
                "Epoch of the propagated mean anomaly"
            )?;
            line!(
                "header_lines           = {}",
                self.header_lines,
                "Non-blank header lines skipped"
            )?;
            line!(
                "max_uncertainty        = {}",
                self.max_uncertainty,
                "Highest accepted U code"
            )?;
            line!(
                "keep_blank_uncertainty = {}",
                self.keep_blank_uncertainty,
                "Accept rows with a blank U column"
            )
        } else {
            write!(
                f,
                "target_epoch={}, header_lines={}, max_uncertainty={}, keep_blank_uncertainty={}",
                epoch, self.header_lines, self.max_uncertainty, self.keep_blank_uncertainty
            )
        }
    }
}
