//! Result documents.
//!
//! These are the JSON shapes written to stdout and to the precomputed route
//! file. Field names are camelCase to match existing consumers.

use serde::{Deserialize, Serialize};

use crate::domain::{Action, DirectRoute, OptimalRoute, RouteStep, StationId};
use crate::planner::{RouteResult, RoutingConfig};

/// One itinerary step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDocument {
    pub action: Action,
    pub station_id: StationId,
    pub station_name: String,
    pub line: String,
    pub cost: u32,
    /// Legacy field, always 0 when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_at_station: Option<u32>,
}

impl StepDocument {
    fn from_step(step: &RouteStep, config: &RoutingConfig) -> Self {
        Self {
            action: step.action,
            station_id: step.station,
            station_name: step.station_name.clone(),
            line: step.line.clone(),
            cost: step.fare,
            time_at_station: config.time_at_station.then_some(0),
        }
    }
}

fn steps(steps: &[RouteStep], config: &RoutingConfig) -> Vec<StepDocument> {
    steps
        .iter()
        .map(|s| StepDocument::from_step(s, config))
        .collect()
}

/// The optimal itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalRouteDocument {
    pub total_cost: u32,
    pub total_time: u32,
    pub short_steps: Vec<StepDocument>,
    pub full_steps: Vec<StepDocument>,
}

impl OptimalRouteDocument {
    pub fn from_route(route: &OptimalRoute, config: &RoutingConfig) -> Self {
        Self {
            total_cost: route.total_cost,
            total_time: route.total_time,
            short_steps: steps(&route.short_steps, config),
            full_steps: steps(&route.full_steps, config),
        }
    }
}

/// A single-line option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectRouteDocument {
    pub line: String,
    pub cost: u32,
    pub time: u32,
    pub full_steps: Vec<StepDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_steps: Option<Vec<StepDocument>>,
}

impl DirectRouteDocument {
    pub fn from_route(route: &DirectRoute, config: &RoutingConfig) -> Self {
        Self {
            line: route.line.clone(),
            cost: route.fare,
            time: route.time,
            full_steps: steps(&route.full_steps, config),
            short_steps: config
                .direct_short_steps
                .then(|| steps(&route.short_steps, config)),
        }
    }
}

/// Top-level result of a route query.
///
/// When `found` is false only `error` is set; otherwise both route fields
/// are set and `error` is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDocument {
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimal_route: Option<OptimalRouteDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_routes: Option<Vec<DirectRouteDocument>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RouteDocument {
    /// Render a planner result.
    pub fn from_result(result: &RouteResult, config: &RoutingConfig) -> Self {
        match result {
            Ok(plan) => Self {
                found: true,
                optimal_route: Some(OptimalRouteDocument::from_route(&plan.optimal, config)),
                direct_routes: Some(
                    plan.direct
                        .iter()
                        .map(|r| DirectRouteDocument::from_route(r, config))
                        .collect(),
                ),
                error: None,
            },
            Err(e) => Self::failure(e.to_string()),
        }
    }

    /// A not-found document carrying `message`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            found: false,
            optimal_route: None,
            direct_routes: None,
            error: Some(message.into()),
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> String {
        // Serializing plain structs with string keys cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
