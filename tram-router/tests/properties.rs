//! Property tests for the planner over random networks.

use proptest::prelude::*;

use tram_router::domain::{Action, RouteStep, StationId};
use tram_router::network::NetworkConfig;
use tram_router::planner::{RouteFinder, RoutingConfig};
use tram_router::timetable::TravelTimes;

/// A random network: lines over stations 1..=8 and travel times for some
/// station pairs.
fn networks() -> impl Strategy<Value = (Vec<(u32, Vec<u64>)>, Vec<(u64, u64, u32)>)> {
    let lines = prop::collection::vec(
        (
            prop::sample::select(vec![5u32, 10]),
            prop::sample::subsequence((1u64..=8).collect::<Vec<_>>(), 2..=6).prop_shuffle(),
        ),
        1..5,
    );
    let times = prop::collection::vec((1u64..=8, 1u64..=8, 0u32..15), 0..20);
    (lines, times)
}

fn build(lines: &[(u32, Vec<u64>)], times: &[(u64, u64, u32)]) -> RouteFinder {
    let mut config = NetworkConfig::new();
    for (i, (fare, stops)) in lines.iter().enumerate() {
        config = config.with_line(&format!("L{i}"), *fare, stops);
    }
    for id in 1..=8 {
        config = config.with_station(id, &format!("Station {id}"));
    }

    let mut table = TravelTimes::new();
    for (a, b, mins) in times {
        table.insert(StationId::new(*a), StationId::new(*b), *mins);
    }

    RouteFinder::build(&config, table, RoutingConfig::default()).unwrap()
}

/// First board, last arrive, every transfer followed by a board onto the
/// line it names.
fn check_steps(steps: &[RouteStep]) -> Result<(), TestCaseError> {
    prop_assert!(steps.len() >= 2);
    prop_assert_eq!(steps.first().unwrap().action, Action::Board);
    prop_assert_eq!(steps.last().unwrap().action, Action::Arrive);

    for pair in steps.windows(2) {
        if pair[0].action == Action::Transfer {
            prop_assert_eq!(pair[1].action, Action::Board);
            let onto = pair[0].line.rsplit(" -> ").next().unwrap();
            prop_assert_eq!(onto, pair[1].line.as_str());
        }
    }
    Ok(())
}

proptest! {
    /// Optimal cost never exceeds the cheapest direct fare
    #[test]
    fn optimal_no_worse_than_direct((lines, times) in networks()) {
        let finder = build(&lines, &times);
        let ids = finder.network().station_ids().to_vec();

        for &a in &ids {
            for &b in &ids {
                if a == b {
                    continue;
                }
                let Ok(plan) = finder.find_route(a, b) else {
                    continue;
                };
                for direct in &plan.direct {
                    prop_assert!(plan.optimal.total_cost <= direct.fare);
                    if plan.optimal.total_cost == direct.fare {
                        prop_assert!(plan.optimal.total_time <= direct.time);
                    }
                }
            }
        }
    }

    /// A shared line always means a route exists
    #[test]
    fn shared_line_implies_direct_route((lines, times) in networks()) {
        let finder = build(&lines, &times);

        for line in finder.network().lines() {
            let stops = line.stops();
            let (a, b) = (stops[0], stops[stops.len() - 1]);
            let plan = finder.find_route(a, b);
            prop_assert!(plan.is_ok());
            let plan = plan.unwrap();
            prop_assert!(plan.direct.iter().any(|d| d.line == line.label()));
        }
    }

    /// Step sequences are well formed and their fares add up
    #[test]
    fn steps_are_well_formed((lines, times) in networks()) {
        let finder = build(&lines, &times);
        let ids = finder.network().station_ids().to_vec();

        for &a in &ids {
            for &b in &ids {
                let Ok(plan) = finder.find_route(a, b) else {
                    continue;
                };
                check_steps(&plan.optimal.full_steps)?;
                check_steps(&plan.optimal.short_steps)?;

                let fares: u32 = plan.optimal.full_steps.iter().map(|s| s.fare).sum();
                prop_assert_eq!(fares, plan.optimal.total_cost);

                prop_assert_eq!(plan.optimal.full_steps.first().unwrap().station, a);
                prop_assert_eq!(plan.optimal.full_steps.last().unwrap().station, b);

                for direct in &plan.direct {
                    check_steps(&direct.full_steps)?;
                    prop_assert_eq!(
                        direct.full_steps.iter().filter(|s| s.action == Action::Board).count(),
                        1
                    );
                }
            }
        }
    }
}
