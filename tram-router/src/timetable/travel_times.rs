//! Minimum travel times between adjacent stops.
//!
//! Every trip in the timetable is sorted by stop sequence, and each pair of
//! consecutive stops contributes `next.arrival - current.departure`. The
//! table keeps the smallest value seen for a pair, in both directions.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::StationId;

use super::TimetableError;
use super::record::StopTimeRecord;

/// Counters reported after a timetable load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimetableSummary {
    /// Records accepted.
    pub records: usize,
    /// Records skipped by validation.
    pub rejected: usize,
    /// Distinct trip ids.
    pub trips: usize,
    /// Consecutive pairs dropped because arrival preceded departure.
    pub negative_pairs: usize,
}

/// Symmetric table of minimum travel minutes between adjacent stations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TravelTimes {
    /// Stored in both directions for O(1) lookup.
    pairs: HashMap<(StationId, StationId), u32>,
}

impl TravelTimes {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `stop_times.txt` file.
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, TimetableSummary), TimetableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TimetableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Parse stop-time text already held in memory.
    pub fn from_stop_times(content: &str) -> (Self, TimetableSummary) {
        match Self::from_reader(content.as_bytes()) {
            Ok(loaded) => loaded,
            // Reading from a byte slice cannot hit an I/O error.
            Err(_) => (Self::new(), TimetableSummary::default()),
        }
    }

    /// Parse stop-time CSV from any reader.
    ///
    /// The first line is a header. Records that fail validation are counted
    /// and skipped; only an underlying I/O failure aborts the load.
    pub fn from_reader<R: Read>(reader: R) -> Result<(Self, TimetableSummary), TimetableError> {
        let mut csv = stop_times_reader(reader);

        let mut summary = TimetableSummary::default();
        let mut trips: HashMap<String, Vec<StopTimeRecord>> = HashMap::new();

        for row in csv.records() {
            let row = match row {
                Ok(row) => row,
                Err(e) if e.is_io_error() => return Err(TimetableError::Csv(e)),
                Err(e) => {
                    let line = e.position().map(|p| p.line());
                    debug!(line, error = %e, "Skipping unreadable stop time");
                    summary.rejected += 1;
                    continue;
                }
            };

            match StopTimeRecord::parse(&row) {
                Ok(record) => {
                    summary.records += 1;
                    trips.entry(record.trip_id.clone()).or_default().push(record);
                }
                Err(e) => {
                    let line = row.position().map(|p| p.line());
                    debug!(line, error = %e, "Skipping malformed stop time");
                    summary.rejected += 1;
                }
            }
        }

        summary.trips = trips.len();

        let mut table = Self::new();
        for stops in trips.values_mut() {
            stops.sort_by_key(|s| s.sequence);
            for pair in stops.windows(2) {
                let (current, next) = (&pair[0], &pair[1]);
                match next.arrival.checked_sub(current.departure) {
                    Some(minutes) => table.insert(current.station, next.station, minutes),
                    None => summary.negative_pairs += 1,
                }
            }
        }

        info!(
            records = summary.records,
            rejected = summary.rejected,
            trips = summary.trips,
            pairs = table.len(),
            "Loaded timetable"
        );

        Ok((table, summary))
    }

    /// Record a travel time for a pair, keeping the minimum in both directions.
    pub fn insert(&mut self, a: StationId, b: StationId, minutes: u32) {
        for key in [(a, b), (b, a)] {
            self.pairs
                .entry(key)
                .and_modify(|m| *m = (*m).min(minutes))
                .or_insert(minutes);
        }
    }

    /// Get the travel time between two stations, if the timetable has one.
    pub fn get(&self, from: StationId, to: StationId) -> Option<u32> {
        self.pairs.get(&(from, to)).copied()
    }

    /// Get the travel time, substituting `fallback` when unknown.
    pub fn minutes_or(&self, from: StationId, to: StationId, fallback: u32) -> u32 {
        self.get(from, to).unwrap_or(fallback)
    }

    /// Returns the number of station pairs (counting A→B and B→A as one).
    pub fn len(&self) -> usize {
        self.pairs.len().div_ceil(2)
    }

    /// Returns true if no travel times are known.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// CSV reader for `stop_times.txt`: header skipped, ragged rows allowed,
/// fields trimmed.
fn stop_times_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// A random trip: (station id, dwell minutes, run minutes) per stop.
    fn trips() -> impl Strategy<Value = Vec<Vec<(u64, u32, u32)>>> {
        prop::collection::vec(
            prop::collection::vec((1u64..8, 0u32..3, 0u32..20), 2..6),
            1..5,
        )
    }

    fn render(trips: &[Vec<(u64, u32, u32)>]) -> String {
        let mut out = String::from("trip_id,arrival_time,departure_time,stop_id,stop_sequence\n");
        for (t, stops) in trips.iter().enumerate() {
            let mut clock = 360;
            for (seq, (station, dwell, run)) in stops.iter().enumerate() {
                let arrival = clock;
                let departure = clock + dwell;
                out.push_str(&format!(
                    "T{t},{:02}:{:02}:00,{:02}:{:02}:00,{station},{seq}\n",
                    arrival / 60,
                    arrival % 60,
                    departure / 60,
                    departure % 60,
                ));
                clock = departure + run;
            }
        }
        out
    }

    proptest! {
        /// Every derived weight is the same in both directions
        #[test]
        fn weights_are_symmetric(trips in trips()) {
            let (table, _) = TravelTimes::from_stop_times(&render(&trips));
            for a in 1u64..8 {
                for b in 1u64..8 {
                    let (a, b) = (StationId::new(a), StationId::new(b));
                    prop_assert_eq!(table.get(a, b), table.get(b, a));
                }
            }
        }

        /// Every derived weight is the run time of some consecutive pair
        #[test]
        fn weights_are_observed_minimums(trips in trips()) {
            let (table, _) = TravelTimes::from_stop_times(&render(&trips));
            for stops in &trips {
                for w in stops.windows(2) {
                    let (a, b) = (StationId::new(w[0].0), StationId::new(w[1].0));
                    let observed = w[0].2;
                    let stored = table.get(a, b);
                    prop_assert!(stored.is_some());
                    prop_assert!(stored.unwrap() <= observed);
                }
            }
        }
    }
}
