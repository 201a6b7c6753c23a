//! Bridge zones
//!
//! A bridge pairs bulbs into four groups. `All` addresses every group at once and is
//! stored as row 0 of each command table, so it is just another zone here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{error::MilightError, Result};

/// Addressable bulb group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// Every paired group
    #[default]
    All,
    Zone1,
    Zone2,
    Zone3,
    Zone4,
}

impl Zone {
    /// All zones in table order
    pub const ALL_ZONES: [Zone; 5] = [Zone::All, Zone::Zone1, Zone::Zone2, Zone::Zone3, Zone::Zone4];

    /// Row index into the command tables (0 = All)
    pub const fn index(self) -> usize {
        match self {
            Zone::All => 0,
            Zone::Zone1 => 1,
            Zone::Zone2 => 2,
            Zone::Zone3 => 3,
            Zone::Zone4 => 4,
        }
    }

    /// Look up a zone by table index, rejecting anything outside 0-4
    pub fn from_index(index: i64) -> Result<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL_ZONES.get(i).copied())
            .ok_or(MilightError::InvalidZone(index))
    }
}

macro_rules! zone_try_from_int {
    ($($int:ty),*) => {
        $(
            impl TryFrom<$int> for Zone {
                type Error = MilightError;

                fn try_from(index: $int) -> Result<Self> {
                    // Saturate so huge unsigned values still report as out of range.
                    Zone::from_index(i64::try_from(index).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

zone_try_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::All => write!(f, "all"),
            zone => write!(f, "zone{}", zone.index()),
        }
    }
}

impl FromStr for Zone {
    type Err = MilightError;

    /// Accepts `all`, a bare index `0`-`4`, or `zone1`-`zone4` (case-insensitive)
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        if s == "all" {
            return Ok(Zone::All);
        }
        let digits = s.strip_prefix("zone").unwrap_or(&s);
        let index: i64 = digits
            .parse()
            .map_err(|_| MilightError::InvalidZone(-1))?;
        Zone::from_index(index)
    }
}
