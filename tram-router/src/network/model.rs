//! The station/line graph.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::debug;

use crate::domain::{Line, StationId};
use crate::timetable::TravelTimes;

use super::{NetworkConfig, NetworkError};

/// Index of a line in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineIndex(pub usize);

/// An undirected edge seen from one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Dense index of the far station.
    pub to: usize,
    /// Travel time in minutes.
    pub minutes: u32,
}

/// Immutable station/line graph.
///
/// Stations get dense indices in ascending id order. Every consecutive pair
/// of stops on every line contributes one undirected edge, so a pair shared
/// by several lines appears once per line.
#[derive(Debug, Clone)]
pub struct Network {
    lines: Vec<Line>,
    names: HashMap<StationId, String>,
    ids: Vec<StationId>,
    index: HashMap<StationId, usize>,
    adjacency: Vec<Vec<Edge>>,
    lines_at: Vec<Vec<LineIndex>>,
    travel_times: TravelTimes,
    fallback_mins: u32,
}

impl Network {
    /// Build the graph from configuration and timetable-derived weights.
    ///
    /// `fallback_mins` is used for any adjacent pair the timetable has no
    /// travel time for.
    pub fn build(
        config: &NetworkConfig,
        travel_times: TravelTimes,
        fallback_mins: u32,
    ) -> Result<Self, NetworkError> {
        let mut names = HashMap::new();
        for station in &config.stations {
            if names.insert(station.id, station.name.clone()).is_some() {
                return Err(NetworkError::DuplicateStation(station.id));
            }
        }

        let mut labels = HashSet::new();
        let mut lines = Vec::with_capacity(config.lines.len());
        for line in &config.lines {
            if !labels.insert(line.label.as_str()) {
                return Err(NetworkError::DuplicateLine(line.label.clone()));
            }
            if line.stops.len() < 2 {
                return Err(NetworkError::ShortLine(line.label.clone()));
            }
            if let Some(stop) = line.stops.iter().find(|s| !names.contains_key(*s)) {
                return Err(NetworkError::UnnamedStation {
                    station: *stop,
                    line: line.label.clone(),
                });
            }
            lines.push(Line::from(line));
        }

        let ids: Vec<StationId> = lines
            .iter()
            .flat_map(|l| l.stops().iter().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let index: HashMap<StationId, usize> =
            ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();

        let mut adjacency = vec![Vec::new(); ids.len()];
        let mut lines_at: Vec<Vec<LineIndex>> = vec![Vec::new(); ids.len()];

        for (line_idx, line) in lines.iter().enumerate() {
            for stop in line.stops() {
                let served = &mut lines_at[index[stop]];
                if !served.contains(&LineIndex(line_idx)) {
                    served.push(LineIndex(line_idx));
                }
            }

            for (from, to) in line.segments() {
                let minutes = travel_times.minutes_or(from, to, fallback_mins);
                let (u, v) = (index[&from], index[&to]);
                adjacency[u].push(Edge { to: v, minutes });
                adjacency[v].push(Edge { to: u, minutes });
            }
        }

        debug!(
            stations = ids.len(),
            lines = lines.len(),
            timed_pairs = travel_times.len(),
            "Built network"
        );

        Ok(Self {
            lines,
            names,
            ids,
            index,
            adjacency,
            lines_at,
            travel_times,
            fallback_mins,
        })
    }

    /// Returns the number of stations served by at least one line.
    pub fn station_count(&self) -> usize {
        self.ids.len()
    }

    /// Returns all served station ids in ascending order.
    pub fn station_ids(&self) -> &[StationId] {
        &self.ids
    }

    /// Returns the dense index of a station, if any line serves it.
    pub fn index_of(&self, id: StationId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Returns the station id at a dense index.
    ///
    /// Panics if `idx` is out of range; indices only come from this network.
    pub fn station_id(&self, idx: usize) -> StationId {
        self.ids[idx]
    }

    /// Returns the display name of a station, or "" if it has none.
    pub fn station_name(&self, id: StationId) -> &str {
        self.names.get(&id).map(String::as_str).unwrap_or("")
    }

    /// Returns all lines in declaration order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns a line by index.
    pub fn line(&self, idx: LineIndex) -> &Line {
        &self.lines[idx.0]
    }

    /// Returns the lines serving a station, in discovery order.
    pub fn lines_at(&self, station: usize) -> &[LineIndex] {
        &self.lines_at[station]
    }

    /// Returns the edges leaving a station.
    pub fn neighbors(&self, station: usize) -> &[Edge] {
        &self.adjacency[station]
    }

    /// Travel time between two stations, using the fallback when unknown.
    pub fn travel_minutes(&self, from: StationId, to: StationId) -> u32 {
        self.travel_times.minutes_or(from, to, self.fallback_mins)
    }
}
