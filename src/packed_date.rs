//! # MPC packed dates
//!
//! The Minor Planet Center stores the epoch of osculation of every orbit as a
//! **5-character packed date** (`"K01AM"` is 2001-10-22). Each character is one
//! base-32 digit drawn from `0-9A-V`:
//!
//! ```text
//! char   K   0   1   A   M
//! digit  20  0   1   10  22
//!        └───┴───┘   │   └── day   (1..=31)
//!        year = 20·100 + 0·10 + 1   month (1..=12)
//! ```
//!
//! The century digit is read like any other digit, so `I` (18) lands in the 1800s,
//! `J` (19) in the 1900s and `K` (20) in the 2000s.
//!
//! ## Time scales
//! -----------------
//! Packed epochs are stated at **0h Terrestrial Time (TT)**. [`PackedDate::to_epoch`]
//! builds the matching instant by taking midnight on the TAI clock, moving it back by
//! the fixed `TT − TAI = 32.184 s` offset, and expressing the result in **UTC**
//! (the leap-second table comes from [`hifitime`]). The resulting UTC instant sits
//! roughly a minute before civil midnight; [`PackedDate::from_epoch`] undoes the shift
//! so the calendar date survives a decode/encode round-trip.
//!
//! ## See also
//! ------------
//! * <https://www.minorplanetcenter.net/iau/info/PackedDates.html>
//! * [`crate::propagation`] – consumes the decoded epoch to propagate the mean anomaly.
use std::{fmt, str::FromStr};

use hifitime::{Duration, Epoch, TimeScale, Unit};
use thiserror::Error;

use crate::constants::TT_MINUS_TAI_MILLISECONDS;

const PACKED_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";

/// Largest year the packed grammar can express (`VVV`, 31·100 + 31·10 + 31).
const MAX_PACKED_YEAR: i32 = 3_441;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackedDateError {
    #[error("want packed date string to be 5 characters, got '{0}'")]
    InvalidLength(String),
    #[error("unable to unpack character '{0}', want [0-9A-V]")]
    InvalidCharacter(char),
    #[error("year {0} cannot be packed")]
    InvalidYear(i32),
    #[error("invalid month {0}")]
    InvalidMonth(u8),
    #[error("invalid day {day} for {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
}

/// Decode one packed character into its base-32 digit.
///
/// `'0'..='9'` map to 0–9 and `'A'..='V'` map to 10–31. Lowercase letters and
/// anything past `'V'` are rejected.
pub fn decode_packed_character(c: char) -> Result<u8, PackedDateError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'A'..='V' => Ok(c as u8 - b'A' + 10),
        _ => Err(PackedDateError::InvalidCharacter(c)),
    }
}

/// Inverse of [`decode_packed_character`], `None` when `digit > 31`.
pub fn encode_packed_character(digit: u8) -> Option<char> {
    PACKED_ALPHABET.get(digit as usize).map(|&b| b as char)
}

/// Decode a packed date straight into the UTC instant of 0h TT on that day.
pub fn decode_packed_date(packed: &str) -> Result<Epoch, PackedDateError> {
    packed.parse::<PackedDate>().map(|date| date.to_epoch())
}

#[inline]
fn tt_minus_tai() -> Duration {
    Unit::Millisecond * TT_MINUS_TAI_MILLISECONDS
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// A validated calendar date (TT) as carried by an MPC packed epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackedDate {
    year: i32,
    month: u8,
    day: u8,
}

impl PackedDate {
    /// Build a packed date, checking that it is a real Gregorian day and that the
    /// year is reachable from three packed year digits.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, PackedDateError> {
        if !(0..=MAX_PACKED_YEAR).contains(&year) {
            return Err(PackedDateError::InvalidYear(year));
        }
        if !(1..=12).contains(&month) {
            return Err(PackedDateError::InvalidMonth(month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(PackedDateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// The instant of 0h TT on this date, expressed in UTC.
    ///
    /// Return
    /// ----------
    /// * An [`Epoch`] in [`TimeScale::UTC`]. Because `TT − UTC` is always positive
    ///   (32.184 s plus the accumulated leap seconds), the civil reading falls shortly
    ///   before midnight of the previous UTC day.
    pub fn to_epoch(&self) -> Epoch {
        let tai_midnight = Epoch::from_gregorian_tai_at_midnight(self.year, self.month, self.day);
        (tai_midnight - tt_minus_tai()).to_time_scale(TimeScale::UTC)
    }

    /// The TT calendar date on which `epoch` falls.
    pub fn from_epoch(epoch: Epoch) -> Result<Self, PackedDateError> {
        let (year, month, day, _, _, _, _) = (epoch + tt_minus_tai()).to_gregorian_tai();
        Self::new(year, month, day)
    }
}

impl FromStr for PackedDate {
    type Err = PackedDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let packed = s.trim_matches(|c| c == ' ' || c == '\t');
        if packed.chars().count() != 5 {
            return Err(PackedDateError::InvalidLength(packed.to_string()));
        }

        let mut digits = [0u8; 5];
        for (slot, c) in digits.iter_mut().zip(packed.chars()) {
            *slot = decode_packed_character(c)?;
        }
        let [century, decade, unit, month, day] = digits;
        let year = i32::from(century) * 100 + i32::from(decade) * 10 + i32::from(unit);

        Self::new(year, month, day)
    }
}

impl fmt::Display for PackedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Greedy split: years up to 3199 get their canonical form, later ones spill
        // into letters on the decade and unit digits. Every digit stays < 32.
        let century = (self.year / 100).min(31);
        let rest = self.year - century * 100;
        let decade = (rest / 10).min(31);
        let digits = [
            century as u8,
            decade as u8,
            (rest - decade * 10) as u8,
            self.month,
            self.day,
        ];
        for digit in digits {
            write!(f, "{}", PACKED_ALPHABET[digit as usize] as char)?;
        }
        Ok(())
    }
}
