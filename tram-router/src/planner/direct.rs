//! Direct (single-line) route enumeration.

use crate::domain::{DirectRoute, StationId};
use crate::network::{LineIndex, Network};

use super::config::RoutingConfig;
use super::search::StateKey;
use super::steps::{StepDetail, build_steps};

/// Find every line that serves both stations.
///
/// Routes come back in line declaration order. The fare is the line's flat
/// fare however far the ride; the time sums each edge along the ride, in
/// whichever direction the ride runs.
pub fn find_direct_routes(
    network: &Network,
    config: &RoutingConfig,
    from: StationId,
    to: StationId,
) -> Vec<DirectRoute> {
    network
        .lines()
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            let ride = line.ride(from, to)?;

            let time = ride
                .windows(2)
                .map(|w| network.travel_minutes(w[0], w[1]))
                .fold(0u32, |acc, m| acc.saturating_add(m));

            let path: Vec<StateKey> = ride
                .iter()
                .map(|id| network.index_of(*id).map(|s| StateKey::new(s, LineIndex(idx))))
                .collect::<Option<_>>()?;

            let short_steps = if config.direct_short_steps {
                build_steps(network, &path, StepDetail::Short)
            } else {
                Vec::new()
            };

            Some(DirectRoute {
                line: line.label().to_string(),
                fare: line.fare(),
                time,
                full_steps: build_steps(network, &path, StepDetail::Full),
                short_steps,
            })
        })
        .collect()
}
