//! Fare-aware shortest path over (station, line) states.
//!
//! Each state means "at this station, riding this line". Boarding a line
//! costs its flat fare; riding on along the same line is free. Labels are
//! ordered by cost first and travel time second, and the frontier is a
//! Dijkstra min-heap over those labels.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use tracing::trace;

use crate::network::{LineIndex, Network};

/// Composite search key: a station index and the line being ridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateKey {
    pub station: usize,
    pub line: LineIndex,
}

impl StateKey {
    pub fn new(station: usize, line: LineIndex) -> Self {
        Self { station, line }
    }
}

/// Cumulative fare and travel time of a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub cost: u32,
    pub time: u32,
}

impl Label {
    pub fn new(cost: u32, time: u32) -> Self {
        Self { cost, time }
    }
}

impl Ord for Label {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.cost.cmp(&other.cost) {
            Ordering::Equal => self.time.cmp(&other.time),
            unequal => unequal,
        }
    }
}

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best known label for a state and the state it was reached from.
#[derive(Debug, Clone, Copy)]
struct StateRecord {
    label: Label,
    prev: Option<StateKey>,
}

/// A solved route: its final label and the states visited, source first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub label: Label,
    pub path: Vec<StateKey>,
}

/// Solver state for one query.
struct Search<'a> {
    network: &'a Network,
    records: HashMap<StateKey, StateRecord>,
    frontier: BinaryHeap<Reverse<(Label, StateKey)>>,
}

impl<'a> Search<'a> {
    fn new(network: &'a Network) -> Self {
        Self {
            network,
            records: HashMap::new(),
            frontier: BinaryHeap::new(),
        }
    }

    /// Record `label` for `key` if it is strictly better than what we have.
    fn relax(&mut self, key: StateKey, label: Label, prev: Option<StateKey>) {
        let improves = self
            .records
            .get(&key)
            .is_none_or(|existing| label < existing.label);

        if improves {
            self.records.insert(key, StateRecord { label, prev });
            self.frontier.push(Reverse((label, key)));
        }
    }

    fn seed(&mut self, source: usize) {
        for &line in self.network.lines_at(source) {
            let fare = self.network.line(line).fare();
            self.relax(StateKey::new(source, line), Label::new(fare, 0), None);
        }
    }

    /// Drain the frontier. Returns the number of states expanded.
    fn run(&mut self) -> usize {
        let mut expanded = 0;

        while let Some(Reverse((label, key))) = self.frontier.pop() {
            let stale = self
                .records
                .get(&key)
                .is_some_and(|best| best.label < label);
            if stale {
                continue;
            }
            expanded += 1;

            for edge in self.network.neighbors(key.station) {
                let time = label.time.saturating_add(edge.minutes);

                for &line in self.network.lines_at(edge.to) {
                    let cost = if line == key.line {
                        label.cost
                    } else {
                        label.cost.saturating_add(self.network.line(line).fare())
                    };
                    self.relax(
                        StateKey::new(edge.to, line),
                        Label::new(cost, time),
                        Some(key),
                    );
                }
            }
        }

        expanded
    }

    /// Cheapest state at `target`, ties going to the earlier-listed line.
    fn best_at(&self, target: usize) -> Option<(StateKey, Label)> {
        let mut best: Option<(StateKey, Label)> = None;
        for &line in self.network.lines_at(target) {
            let key = StateKey::new(target, line);
            if let Some(record) = self.records.get(&key)
                && best.is_none_or(|(_, label)| record.label < label)
            {
                best = Some((key, record.label));
            }
        }
        best
    }

    /// Follow predecessor links back to a seed, returning source-first order.
    fn path_to(&self, end: StateKey) -> Vec<StateKey> {
        let mut path = vec![end];
        let mut current = end;
        while let Some(prev) = self.records.get(&current).and_then(|r| r.prev) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}

/// Find the cheapest, then fastest, route between two station indices.
///
/// Returns `None` when no state at `target` is reachable. Callers reject
/// `source == target` before calling.
pub fn solve(network: &Network, source: usize, target: usize) -> Option<Solution> {
    let mut search = Search::new(network);
    search.seed(source);
    let expanded = search.run();

    trace!(
        source,
        target,
        expanded,
        states = search.records.len(),
        "Search complete"
    );

    let (end, label) = search.best_at(target)?;
    Some(Solution {
        label,
        path: search.path_to(end),
    })
}
