use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tram_router::cache::{DEFAULT_CACHE_PATH, RouteCache, lookup_precomputed};
use tram_router::domain::StationId;
use tram_router::dto::RouteDocument;
use tram_router::network::{NetworkConfig, NetworkError};
use tram_router::planner::{RouteFinder, RoutingConfig};
use tram_router::timetable::TravelTimes;

/// Default GTFS stop times location.
const DEFAULT_STOP_TIMES_PATH: &str = "gtfs/stop_times.txt";

/// Plan cheapest tram journeys between stations.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// JSON network description. Defaults to the built-in Alexandria network.
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// GTFS stop_times file used for travel times.
    #[arg(long, global = true, default_value = DEFAULT_STOP_TIMES_PATH)]
    stop_times: PathBuf,

    /// Fallback travel time (minutes) for stop pairs missing from the timetable.
    #[arg(long, global = true, default_value_t = RoutingConfig::default().fallback_travel_mins)]
    fallback_mins: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a route between two station ids.
    Route {
        start: StationId,
        target: StationId,

        /// Search now, or read the precomputed file.
        #[arg(long, value_enum, default_value_t = Mode::Realtime)]
        mode: Mode,

        /// Precomputed route file.
        #[arg(long, default_value = DEFAULT_CACHE_PATH)]
        cache: PathBuf,
    },

    /// Precompute routes for every ordered station pair.
    Precompute {
        /// Where to write the route file.
        #[arg(long, default_value = DEFAULT_CACHE_PATH)]
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Realtime,
    Precomputed,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = RoutingConfig {
        fallback_travel_mins: cli.fallback_mins,
        ..RoutingConfig::default()
    };

    match cli.command {
        Command::Route {
            start,
            target,
            mode: Mode::Realtime,
            ..
        } => {
            let finder = match load_finder(cli.network.as_deref(), &cli.stop_times, config) {
                Ok(finder) => finder,
                Err(e) => {
                    error!(error = %e, "Failed to build network");
                    return ExitCode::FAILURE;
                }
            };
            let result = finder.find_route(start, target);
            print_document(&RouteDocument::from_result(&result, finder.config()))
        }
        Command::Route {
            start,
            target,
            mode: Mode::Precomputed,
            cache,
        } => print_document(&lookup_precomputed(&cache, start, target)),
        Command::Precompute { output } => {
            let finder = match load_finder(cli.network.as_deref(), &cli.stop_times, config) {
                Ok(finder) => finder,
                Err(e) => {
                    error!(error = %e, "Failed to build network");
                    return ExitCode::FAILURE;
                }
            };
            let cache = RouteCache::build(&finder);
            match cache.save(&output) {
                Ok(()) => {
                    info!(path = %output.display(), pairs = cache.len(), "Wrote precomputed routes");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!(error = %e, "Failed to write precomputed routes");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// Build the finder from the network file (or the built-in network) and the
/// timetable. A missing timetable is not fatal: every edge then uses the
/// fallback travel time.
fn load_finder(
    network: Option<&Path>,
    stop_times: &Path,
    config: RoutingConfig,
) -> Result<RouteFinder, NetworkError> {
    let network = match network {
        Some(path) => NetworkConfig::from_json_file(path)?,
        None => NetworkConfig::alexandria(),
    };

    let travel_times = match TravelTimes::load(stop_times) {
        Ok((times, _summary)) => times,
        Err(e) => {
            warn!(error = %e, "Using empty timetable");
            TravelTimes::new()
        }
    };

    RouteFinder::build(&network, travel_times, config)
}

/// Print a result document; the exit status reflects whether a route was found.
fn print_document(document: &RouteDocument) -> ExitCode {
    println!("{}", document.to_json_pretty());
    if document.found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
