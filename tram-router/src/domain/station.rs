//! Station identifier type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id {input:?}: {reason}")]
pub struct InvalidStationId {
    input: String,
    reason: &'static str,
}

/// An opaque numeric station identifier.
///
/// Ids come from OpenStreetMap node numbers in the default network, so they
/// are large and sparse. Use [`crate::network::Network`] to map them to dense
/// indices.
///
/// # Examples
///
/// ```
/// use tram_router::domain::StationId;
///
/// let ramleh = StationId::parse("316824788").unwrap();
/// assert_eq!(ramleh.get(), 316824788);
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("-4").is_err());
/// assert!(StationId::parse("ramleh").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(u64);

impl StationId {
    /// Wrap a raw numeric id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Parse a station id from its decimal form.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStationId {
                input: s.to_string(),
                reason: "must not be empty",
            });
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidStationId {
                input: s.to_string(),
                reason: "must contain only decimal digits",
            });
        }
        trimmed.parse::<u64>().map(Self).map_err(|_| InvalidStationId {
            input: s.to_string(),
            reason: "out of range",
        })
    }

    /// Returns the raw numeric id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for StationId {
    type Err = InvalidStationId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
