//! Stop-time record parsing.

use csv::StringRecord;

use crate::domain::{InvalidStationId, StationId, TimeError, parse_clock_minutes};

/// Fewest fields a usable record can have: trip, arrival, departure,
/// station and sequence position.
pub const MIN_FIELDS: usize = 5;

/// Why a stop-time record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// Not enough fields to read the sequence position
    #[error("expected at least {MIN_FIELDS} fields, found {0}")]
    TooFewFields(usize),

    /// Empty trip id
    #[error("missing trip id")]
    MissingTrip,

    /// Arrival or departure did not parse
    #[error("bad {field} time: {source}")]
    Time {
        field: &'static str,
        #[source]
        source: TimeError,
    },

    /// Station id did not parse
    #[error("bad station id: {0}")]
    Station(#[from] InvalidStationId),

    /// Sequence position did not parse
    #[error("bad stop sequence {0:?}")]
    Sequence(String),
}

/// One parsed row of `stop_times.txt`.
///
/// Only used while deriving travel times; never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopTimeRecord {
    pub trip_id: String,
    /// Minutes since midnight.
    pub arrival: u32,
    /// Minutes since midnight.
    pub departure: u32,
    pub station: StationId,
    pub sequence: u32,
}

impl StopTimeRecord {
    /// Parse a record from its CSV fields.
    ///
    /// Fields beyond the fifth are ignored.
    pub fn parse(fields: &StringRecord) -> Result<Self, RecordError> {
        if fields.len() < MIN_FIELDS {
            return Err(RecordError::TooFewFields(fields.len()));
        }

        let trip_id = fields[0].trim();
        if trip_id.is_empty() {
            return Err(RecordError::MissingTrip);
        }

        let arrival = parse_clock_minutes(&fields[1]).map_err(|source| RecordError::Time {
            field: "arrival",
            source,
        })?;
        let departure = parse_clock_minutes(&fields[2]).map_err(|source| RecordError::Time {
            field: "departure",
            source,
        })?;
        let station = StationId::parse(&fields[3])?;
        let sequence = fields[4]
            .trim()
            .parse::<u32>()
            .map_err(|_| RecordError::Sequence(fields[4].to_string()))?;

        Ok(Self {
            trip_id: trip_id.to_string(),
            arrival,
            departure,
            station,
            sequence,
        })
    }
}
