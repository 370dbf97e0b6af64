//! Line types.

use super::StationId;

/// A single service pattern: an ordered list of stops and one flat fare.
///
/// The stop order drives both direct-route slicing and the network's edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    label: String,
    stops: Vec<StationId>,
    fare: u32,
}

impl Line {
    /// Creates a new line.
    pub fn new(label: impl Into<String>, stops: Vec<StationId>, fare: u32) -> Self {
        Self {
            label: label.into(),
            stops,
            fare,
        }
    }

    /// Returns the short label, e.g. "B1".
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the stops in service order.
    pub fn stops(&self) -> &[StationId] {
        &self.stops
    }

    /// Returns the flat boarding fare.
    pub fn fare(&self) -> u32 {
        self.fare
    }

    /// Returns the position of the first occurrence of `station`.
    pub fn position(&self, station: StationId) -> Option<usize> {
        self.stops.iter().position(|s| *s == station)
    }

    /// Returns consecutive stop pairs in service order.
    pub fn segments(&self) -> impl Iterator<Item = (StationId, StationId)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns the stops ridden from `from` to `to`, inclusive.
    ///
    /// The slice runs against service order when `to` comes before `from`.
    /// Returns `None` if the line does not serve both stations.
    pub fn ride(&self, from: StationId, to: StationId) -> Option<Vec<StationId>> {
        let start = self.position(from)?;
        let end = self.position(to)?;

        let stops = if start <= end {
            self.stops[start..=end].to_vec()
        } else {
            self.stops[end..=start].iter().rev().copied().collect()
        };
        Some(stops)
    }
}
