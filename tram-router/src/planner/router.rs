//! Route queries against a built network.

use tracing::debug;

use crate::domain::{DirectRoute, OptimalRoute, StationId};
use crate::network::{Network, NetworkConfig, NetworkError};
use crate::timetable::TravelTimes;

use super::config::RoutingConfig;
use super::direct::find_direct_routes;
use super::search::solve;
use super::steps::{StepDetail, build_steps};

/// Why a route query produced no itinerary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Start station is not on any line
    #[error("Start station ID {0} not found")]
    UnknownStart(StationId),

    /// Target station is not on any line
    #[error("Target station ID {0} not found")]
    UnknownTarget(StationId),

    /// Start and target are the same station
    #[error("Start and target stations are the same")]
    SameStation,

    /// No sequence of lines connects the stations
    #[error("No route found between these stations")]
    NoRoute,
}

/// A successful route query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    pub optimal: OptimalRoute,
    /// Every single-line option, in line declaration order.
    pub direct: Vec<DirectRoute>,
}

/// Outcome of a route query.
pub type RouteResult = Result<RoutePlan, RouteError>;

/// Answers route queries over an immutable network.
///
/// Holds no per-query state, so one finder can serve any number of queries,
/// including from several threads at once.
#[derive(Debug, Clone)]
pub struct RouteFinder {
    network: Network,
    config: RoutingConfig,
}

impl RouteFinder {
    /// Create a finder over an already-built network.
    pub fn new(network: Network, config: RoutingConfig) -> Self {
        Self { network, config }
    }

    /// Build the network and wrap it in a finder.
    pub fn build(
        network: &NetworkConfig,
        travel_times: TravelTimes,
        config: RoutingConfig,
    ) -> Result<Self, NetworkError> {
        let network = Network::build(network, travel_times, config.fallback_travel_mins)?;
        Ok(Self::new(network, config))
    }

    /// Returns the network being searched.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Returns the routing configuration.
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Plan a route between two stations.
    ///
    /// Unknown stations and identical endpoints are rejected before any
    /// search runs.
    pub fn find_route(&self, start: StationId, target: StationId) -> RouteResult {
        let source = self
            .network
            .index_of(start)
            .ok_or(RouteError::UnknownStart(start))?;
        let dest = self
            .network
            .index_of(target)
            .ok_or(RouteError::UnknownTarget(target))?;
        if source == dest {
            return Err(RouteError::SameStation);
        }

        let direct = find_direct_routes(&self.network, &self.config, start, target);

        let solution = solve(&self.network, source, dest).ok_or(RouteError::NoRoute)?;
        let optimal = OptimalRoute {
            total_cost: solution.label.cost,
            total_time: solution.label.time,
            short_steps: build_steps(&self.network, &solution.path, StepDetail::Short),
            full_steps: build_steps(&self.network, &solution.path, StepDetail::Full),
        };

        debug!(
            %start,
            %target,
            cost = optimal.total_cost,
            time = optimal.total_time,
            transfers = optimal.transfer_count(),
            direct = direct.len(),
            "Route planned"
        );

        Ok(RoutePlan { optimal, direct })
    }
}
