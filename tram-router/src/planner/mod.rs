//! Route planner.
//!
//! Given two stations, enumerates every single-line ride between them and
//! searches for the cheapest (then fastest) itinerary that may change lines.
//! The search runs Dijkstra over (station, line) states so that a fare is
//! charged once per boarding rather than once per stop.

mod config;
mod direct;
mod router;
mod search;
mod steps;

pub use config::RoutingConfig;
pub use direct::find_direct_routes;
pub use router::{RouteError, RouteFinder, RoutePlan, RouteResult};
pub use search::{Label, Solution, StateKey, solve};
pub use steps::{StepDetail, build_steps};
