//! End-to-end routing over the built-in Alexandria network.

use tram_router::cache::{RouteCache, lookup_precomputed};
use tram_router::domain::{Action, RouteStep, StationId};
use tram_router::dto::RouteDocument;
use tram_router::network::NetworkConfig;
use tram_router::planner::{RouteError, RouteFinder, RoutingConfig};
use tram_router::timetable::TravelTimes;

const EL_NASR: StationId = StationId::new(316823148);
const RAMLEH: StationId = StationId::new(316824788);
const SAN_STEFANO: StationId = StationId::new(1886590988);
const GNAKLIS: StationId = StationId::new(1886590968);
const GLEEM: StationId = StationId::new(4478874012);
const BULKY: StationId = StationId::new(316829952);
const IBRAHIM_MOSQUE: StationId = StationId::new(1263173062);

fn finder() -> RouteFinder {
    finder_with(TravelTimes::new())
}

fn finder_with(times: TravelTimes) -> RouteFinder {
    RouteFinder::build(&NetworkConfig::alexandria(), times, RoutingConfig::default()).unwrap()
}

fn actions(steps: &[RouteStep]) -> Vec<Action> {
    steps.iter().map(|s| s.action).collect()
}

#[test]
fn el_nasr_to_ramleh_has_blue_direct_routes() {
    let plan = finder().find_route(EL_NASR, RAMLEH).unwrap();

    let b1 = plan
        .direct
        .iter()
        .find(|r| r.line == "B1")
        .expect("B1 serves both ends");
    assert_eq!(b1.fare, 5);

    let first = b1.full_steps.first().unwrap();
    assert_eq!(first.action, Action::Board);
    assert_eq!(first.station_name, "El Nasr Station");

    let last = b1.full_steps.last().unwrap();
    assert_eq!(last.action, Action::Arrive);
    assert_eq!(last.station_name, "Ramleh Station");

    // 31 stops on B1: board, 29 passes, arrive.
    assert_eq!(b1.full_steps.len(), 31);
    assert_eq!(b1.time, 30);

    let lines: Vec<_> = plan.direct.iter().map(|r| r.line.as_str()).collect();
    assert_eq!(lines, vec!["B1", "B2"]);
}

#[test]
fn el_nasr_to_ramleh_optimal_stays_on_one_blue_line() {
    let plan = finder().find_route(EL_NASR, RAMLEH).unwrap();

    assert_eq!(plan.optimal.total_cost, 5);
    assert_eq!(plan.optimal.transfer_count(), 0);
    // B2 has two fewer stops than B1.
    assert_eq!(plan.optimal.total_time, 28);
    assert_eq!(
        actions(&plan.optimal.short_steps),
        vec![Action::Board, Action::Arrive]
    );
    assert_eq!(plan.optimal.short_steps[0].line, "B2");
}

#[test]
fn same_station_is_rejected() {
    let err = finder().find_route(EL_NASR, EL_NASR).unwrap_err();
    assert_eq!(err, RouteError::SameStation);

    let doc = RouteDocument::from_result(&Err(err), &RoutingConfig::default());
    assert!(!doc.found);
    assert_eq!(
        doc.error.as_deref(),
        Some("Start and target stations are the same")
    );
}

#[test]
fn unknown_station_is_named() {
    let err = finder().find_route(StationId::new(1), RAMLEH).unwrap_err();
    assert_eq!(err.to_string(), "Start station ID 1 not found");

    let err = finder().find_route(RAMLEH, StationId::new(1)).unwrap_err();
    assert_eq!(err.to_string(), "Target station ID 1 not found");
}

#[test]
fn branch_to_branch_needs_a_transfer() {
    // Gnaklis is only on the B1/Y1 branch and Gleem only on B2/Y2; the
    // branches meet at San Stefano and Bulky.
    let plan = finder().find_route(GNAKLIS, GLEEM).unwrap();

    assert!(plan.direct.is_empty());
    assert_eq!(plan.optimal.transfer_count(), 1);
    assert_eq!(plan.optimal.total_cost, 10);

    let full = &plan.optimal.full_steps;
    assert_eq!(full.first().unwrap().station, GNAKLIS);
    assert_eq!(full.last().unwrap().station, GLEEM);
}

#[test]
fn shared_pair_prefers_blue_fare() {
    // Both San Stefano and Ibrahim Mosque are on every line; blue is cheaper.
    let plan = finder().find_route(SAN_STEFANO, IBRAHIM_MOSQUE).unwrap();

    assert_eq!(plan.direct.len(), 4);
    assert_eq!(plan.optimal.total_cost, 5);
    assert!(plan.optimal.short_steps[0].line.starts_with('B'));
}

#[test]
fn timetable_times_feed_totals() {
    let stop_times = "trip_id,arrival_time,departure_time,stop_id,stop_sequence\n\
                      B1_1,06:00:00,06:00:00,1886590988,1\n\
                      B1_1,06:03:00,06:03:00,1886590968,2\n";
    let (times, summary) = TravelTimes::from_stop_times(stop_times);
    assert_eq!(summary.records, 2);

    let plan = finder_with(times).find_route(SAN_STEFANO, GNAKLIS).unwrap();
    assert_eq!(plan.optimal.total_time, 3);
    assert!(plan.direct.iter().all(|r| r.time == 3));
}

#[test]
fn bulky_is_a_shared_stop() {
    let finder = finder();
    let idx = finder.network().index_of(BULKY).unwrap();
    assert_eq!(finder.network().lines_at(idx).len(), 4);
}

#[test]
fn batch_build_is_idempotent() {
    let finder = finder();
    let first = RouteCache::build(&finder).to_json_pretty().unwrap();
    let second = RouteCache::build(&finder).to_json_pretty().unwrap();

    assert_eq!(first, second);
}

#[test]
fn cache_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("all_routes.json");
    let finder = finder();

    let cache = RouteCache::build(&finder);
    assert_eq!(cache.len(), 38 * 37);
    assert_eq!(cache.found_count(), 38 * 37);
    cache.save(&path).unwrap();

    for (start, target) in [(EL_NASR, RAMLEH), (GNAKLIS, GLEEM), (RAMLEH, SAN_STEFANO)] {
        let live = RouteDocument::from_result(&finder.find_route(start, target), finder.config());
        assert_eq!(lookup_precomputed(&path, start, target), live);
    }

    let miss = lookup_precomputed(&path, EL_NASR, EL_NASR);
    assert_eq!(miss.error.as_deref(), Some("no precomputed route"));
}
