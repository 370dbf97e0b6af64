//! Itinerary step building.
//!
//! Turns a path of (station, line) states into rider-facing steps. The short
//! form lists only boardings, transfers and the arrival; the full form also
//! lists every station passed through on the same line.

use crate::domain::{Action, RouteStep};
use crate::network::{LineIndex, Network};

use super::search::StateKey;

/// How much of the itinerary to spell out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDetail {
    /// Board, transfer and arrive steps only.
    Short,
    /// Also a pass step for every intermediate same-line station.
    Full,
}

/// Build the steps for a path.
///
/// The first step is always a board and the last always an arrive. Every
/// line change emits a transfer ("old -> new", no fare) immediately
/// followed by a board that charges the new line's fare, so the board fares
/// add up to the route's total cost.
pub fn build_steps(network: &Network, path: &[StateKey], detail: StepDetail) -> Vec<RouteStep> {
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return Vec::new();
    };

    let mut steps = Vec::with_capacity(match detail {
        StepDetail::Short => 2,
        StepDetail::Full => path.len() + 1,
    });

    steps.push(board(network, first.station, first.line));
    let mut active = first.line;
    let last_pos = path.len() - 1;

    for (pos, key) in path.iter().enumerate().skip(1) {
        if key.line != active {
            steps.push(transfer(network, key.station, active, key.line));
            steps.push(board(network, key.station, key.line));
            active = key.line;
        } else if pos < last_pos && detail == StepDetail::Full {
            steps.push(plain_step(network, Action::Pass, key.station, active));
        }
    }

    steps.push(plain_step(network, Action::Arrive, last.station, active));
    steps
}

fn board(network: &Network, station: usize, line: LineIndex) -> RouteStep {
    let id = network.station_id(station);
    let line = network.line(line);
    RouteStep::new(
        Action::Board,
        id,
        network.station_name(id),
        line.label(),
        line.fare(),
    )
}

fn transfer(network: &Network, station: usize, from: LineIndex, to: LineIndex) -> RouteStep {
    let id = network.station_id(station);
    let label = format!(
        "{} -> {}",
        network.line(from).label(),
        network.line(to).label()
    );
    RouteStep::new(Action::Transfer, id, network.station_name(id), label, 0)
}

fn plain_step(network: &Network, action: Action, station: usize, line: LineIndex) -> RouteStep {
    let id = network.station_id(station);
    RouteStep::new(
        action,
        id,
        network.station_name(id),
        network.line(line).label(),
        0,
    )
}
