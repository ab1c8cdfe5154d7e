//! # MPCORB orbit flags
//!
//! Columns `162–165` of every MPCORB row hold a 4-hex-digit flag word. The word is
//! decoded **once**, when the row is read, into an [`OrbitFlags`] value which the
//! classifier then pattern-matches.
//!
//! ## Layout
//! -----------------
//! ```text
//! Bit   Value  Meaning
//! 0-5          Orbit subtype code (see OrbitSubtype)
//! 6-10         Unused or internal MPC use only
//! 11    2048   Object is NEO
//! 12    4096   Object is 1-km (or larger) NEO
//! 13    8192   1-opposition object seen at earlier opposition
//! 14   16384   Critical list numbered object
//! 15   32768   Object is PHA
//! ```
//!
//! ## See also
//! ------------
//! * <https://www.minorplanetcenter.net/iau/info/MPOrbitFormat.html>
//! * [`crate::orbit_type::OrbitType::classify`] – consumer of the decoded flags.

const SUBTYPE_MASK: u16 = 0x3F;
const FLAG_NEO: u16 = 1 << 11;
const FLAG_LARGE_NEO: u16 = 1 << 12;
const FLAG_SEEN_EARLIER_OPPOSITION: u16 = 1 << 13;
const FLAG_CRITICAL_LIST_NUMBERED: u16 = 1 << 14;
const FLAG_PHA: u16 = 1 << 15;

/// Orbit subtype carried in the low six bits of the flag word.
///
/// Codes outside `1..=10` are undefined by the MPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrbitSubtype {
    Atira,
    Aten,
    Apollo,
    Amor,
    /// Object with perihelion distance q < 1.665 AU
    QBounded,
    Hungaria,
    /// Unused or internal MPC use only
    Reserved,
    Hilda,
    JupiterTrojan,
    DistantObject,
}

impl OrbitSubtype {
    pub fn from_code(code: u8) -> Option<Self> {
        use OrbitSubtype::*;
        match code {
            1 => Some(Atira),
            2 => Some(Aten),
            3 => Some(Apollo),
            4 => Some(Amor),
            5 => Some(QBounded),
            6 => Some(Hungaria),
            7 => Some(Reserved),
            8 => Some(Hilda),
            9 => Some(JupiterTrojan),
            10 => Some(DistantObject),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        use OrbitSubtype::*;
        match self {
            Atira => 1,
            Aten => 2,
            Apollo => 3,
            Amor => 4,
            QBounded => 5,
            Hungaria => 6,
            Reserved => 7,
            Hilda => 8,
            JupiterTrojan => 9,
            DistantObject => 10,
        }
    }
}

/// Decoded MPCORB flag word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OrbitFlags {
    pub subtype_code: u8,
    pub is_neo: bool,
    pub is_large_neo: bool,
    pub seen_earlier_opposition: bool,
    pub critical_list_numbered: bool,
    pub is_pha: bool,
    bits: u16,
}

impl OrbitFlags {
    pub fn from_bits(bits: u16) -> Self {
        OrbitFlags {
            subtype_code: (bits & SUBTYPE_MASK) as u8,
            is_neo: bits & FLAG_NEO != 0,
            is_large_neo: bits & FLAG_LARGE_NEO != 0,
            seen_earlier_opposition: bits & FLAG_SEEN_EARLIER_OPPOSITION != 0,
            critical_list_numbered: bits & FLAG_CRITICAL_LIST_NUMBERED != 0,
            is_pha: bits & FLAG_PHA != 0,
            bits,
        }
    }

    /// The raw flag word as read from the catalog.
    pub fn bits(&self) -> u16 {
        self.bits
    }

    pub fn subtype(&self) -> Option<OrbitSubtype> {
        OrbitSubtype::from_code(self.subtype_code)
    }
}
