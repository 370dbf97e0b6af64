//! Domain types for the tram router.
//!
//! These types describe stations, lines and the itineraries built from
//! them. They are validated at construction and immutable afterwards.

mod itinerary;
mod line;
mod station;
mod time;

pub use itinerary::{Action, DirectRoute, OptimalRoute, RouteStep};
pub use line::Line;
pub use station::{InvalidStationId, StationId};
pub use time::{TimeError, parse_clock_minutes};
