use hifitime::Epoch;
use std::str::FromStr;

use crate::mpcorb_errors::MpcorbError;

/// Midnight UTC of the civil day containing `epoch`
///
/// Argument
/// --------
/// * `epoch`: any instant, whatever its time scale
///
/// Return
/// ------
/// * an epoch at 00:00:00 UTC of the same UTC calendar day
pub fn start_of_utc_day(epoch: Epoch) -> Epoch {
    let (year, month, day, _, _, _, _) = epoch.to_gregorian_utc();
    Epoch::from_gregorian_utc_at_midnight(year, month, day)
}

/// Default target epoch of a pipeline run: start of the current UTC day.
pub fn start_of_current_utc_day() -> Result<Epoch, MpcorbError> {
    Ok(start_of_utc_day(Epoch::now()?))
}

/// Signed number of SI seconds from `from` to `to`, negative when `to` precedes `from`.
#[inline]
pub fn elapsed_seconds(from: Epoch, to: Epoch) -> f64 {
    (to - from).to_seconds()
}

/// Unix seconds of `epoch` as stored by 32-bit consumers.
///
/// Values before 1970 saturate to `0`, values after 2106-02-07 saturate to `u32::MAX`.
pub fn unix_timestamp_u32(epoch: Epoch) -> u32 {
    // float → int casts saturate
    epoch.to_unix_seconds().round() as u32
}

/// Parse a user supplied epoch such as `2024-03-01T00:00:00 UTC`.
pub fn parse_epoch(s: &str) -> Result<Epoch, MpcorbError> {
    let s = s.trim();
    Ok(Epoch::from_str(s)?)
}
