//! Network model.
//!
//! Turns line and station tables plus timetable travel times into an
//! indexed, undirected graph that the planner searches.

mod alexandria;
mod config;
mod model;

pub use alexandria::{BLUE_FARE, YELLOW_FARE};
pub use config::{LineConfig, NetworkConfig, StationConfig};
pub use model::{Edge, LineIndex, Network};

use crate::domain::StationId;

/// Errors from building a network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// Two lines share a label
    #[error("duplicate line label {0}")]
    DuplicateLine(String),

    /// A line cannot form an edge
    #[error("line {0} needs at least two stops")]
    ShortLine(String),

    /// Two station entries share an id
    #[error("duplicate station {0}")]
    DuplicateStation(StationId),

    /// A line stops at a station with no name
    #[error("station {station} on line {line} has no name")]
    UnnamedStation { station: StationId, line: String },

    /// Configuration could not be read
    #[error("invalid network configuration: {message}")]
    Config { message: String },
}
