//! Routing configuration.

/// Configuration parameters for route planning and result output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingConfig {
    /// Travel time (minutes) used for adjacent stops the timetable does not
    /// cover. Applies to both the search graph and direct-route totals.
    pub fallback_travel_mins: u32,

    /// Whether direct routes also carry board/arrive-only short steps.
    pub direct_short_steps: bool,

    /// Whether result documents include the `timeAtStation` step field.
    /// Always written as 0.
    pub time_at_station: bool,
}

impl RoutingConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(fallback_travel_mins: u32, direct_short_steps: bool, time_at_station: bool) -> Self {
        Self {
            fallback_travel_mins,
            direct_short_steps,
            time_at_station,
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            fallback_travel_mins: 1,
            direct_short_steps: false,
            time_at_station: true,
        }
    }
}
