//! Timetable loading.
//!
//! Reads GTFS `stop_times.txt` and derives the minimum travel time between
//! each pair of adjacent stops. Malformed rows are skipped rather than
//! aborting the load.

mod record;
mod travel_times;

pub use record::{MIN_FIELDS, RecordError, StopTimeRecord};
pub use travel_times::{TimetableSummary, TravelTimes};

/// Errors that abort a timetable load.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// Timetable file could not be opened
    #[error("cannot read timetable {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Reader failed partway through
    #[error("timetable read error: {0}")]
    Csv(#[from] csv::Error),
}
