//! Itinerary types produced by the route planner.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::StationId;

/// What the rider does at a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Start riding a line and pay its fare.
    Board,
    /// Stay on the same line through this station.
    Pass,
    /// Leave one line for another.
    Transfer,
    /// Reach the destination.
    Arrive,
}

impl Action {
    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Board => "board",
            Action::Pass => "pass",
            Action::Transfer => "transfer",
            Action::Arrive => "arrive",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rider-facing step of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStep {
    pub action: Action,
    pub station: StationId,
    pub station_name: String,
    /// Line label, or "old -> new" for a transfer.
    pub line: String,
    /// Fare charged at this step. Only board steps charge.
    pub fare: u32,
}

impl RouteStep {
    /// Creates a step.
    pub fn new(
        action: Action,
        station: StationId,
        station_name: impl Into<String>,
        line: impl Into<String>,
        fare: u32,
    ) -> Self {
        Self {
            action,
            station,
            station_name: station_name.into(),
            line: line.into(),
            fare,
        }
    }
}

/// A single-line itinerary between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectRoute {
    pub line: String,
    pub fare: u32,
    /// Summed travel time in minutes.
    pub time: u32,
    pub full_steps: Vec<RouteStep>,
    /// Board and arrive only. Empty unless short steps were requested.
    pub short_steps: Vec<RouteStep>,
}

/// The cheapest (then fastest) itinerary, possibly with transfers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimalRoute {
    pub total_cost: u32,
    /// Total travel time in minutes.
    pub total_time: u32,
    pub short_steps: Vec<RouteStep>,
    pub full_steps: Vec<RouteStep>,
}

impl OptimalRoute {
    /// Returns the number of line changes.
    pub fn transfer_count(&self) -> usize {
        self.short_steps
            .iter()
            .filter(|s| s.action == Action::Transfer)
            .count()
    }
}
