//! Precomputed route cache.
//!
//! The batch build runs the live planner for every ordered pair of distinct
//! stations and stores the result documents in a two-level map keyed by
//! stringified station ids. Lookups then read that map instead of searching.
//!
//! Keys are held in `BTreeMap`s so that the written file is byte-identical
//! for identical input, regardless of how the build was scheduled.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::StationId;
use crate::dto::RouteDocument;
use crate::planner::RouteFinder;

/// Default cache file name.
pub const DEFAULT_CACHE_PATH: &str = "all_routes.json";

/// Errors from reading, writing or querying the route cache.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Cache file could not be read
    #[error("cannot open precomputed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cache file is not a valid route document map
    #[error("invalid precomputed file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Cache file could not be written
    #[error("cannot write precomputed file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Pair is absent from the cache
    #[error("no precomputed route from {start} to {target}")]
    Miss { start: StationId, target: StationId },
}

impl CacheError {
    /// The message reported in a result document.
    ///
    /// Any failure to read the file is reported the same way; only a miss
    /// is distinguished.
    pub fn document_message(&self) -> &'static str {
        match self {
            CacheError::Read { .. } | CacheError::Json { .. } => "cannot open precomputed file",
            CacheError::Write { .. } => "cannot write precomputed file",
            CacheError::Miss { .. } => "no precomputed route",
        }
    }
}

/// Precomputed results keyed by source id, then destination id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteCache {
    routes: BTreeMap<String, BTreeMap<String, RouteDocument>>,
}

impl RouteCache {
    /// Run the planner for every ordered pair of distinct stations.
    ///
    /// Source stations are fanned out across the rayon thread pool; each
    /// worker only reads the shared finder.
    pub fn build(finder: &RouteFinder) -> Self {
        let ids = finder.network().station_ids();

        let routes: BTreeMap<String, BTreeMap<String, RouteDocument>> = ids
            .par_iter()
            .map(|&start| {
                let row: BTreeMap<String, RouteDocument> = ids
                    .iter()
                    .filter(|&&target| target != start)
                    .map(|&target| {
                        let result = finder.find_route(start, target);
                        (
                            target.to_string(),
                            RouteDocument::from_result(&result, finder.config()),
                        )
                    })
                    .collect();
                (start.to_string(), row)
            })
            .collect();

        let cache = Self { routes };
        info!(
            stations = finder.network().station_count(),
            pairs = cache.len(),
            found = cache.found_count(),
            "Precomputed routes"
        );
        cache
    }

    /// Get the stored document for a pair.
    pub fn get(&self, start: StationId, target: StationId) -> Result<&RouteDocument, CacheError> {
        self.routes
            .get(&start.to_string())
            .and_then(|row| row.get(&target.to_string()))
            .ok_or(CacheError::Miss { start, target })
    }

    /// Get the stored document for a pair, or a "no precomputed route"
    /// document if the pair is absent.
    pub fn lookup(&self, start: StationId, target: StationId) -> RouteDocument {
        match self.get(start, target) {
            Ok(document) => document.clone(),
            Err(e) => RouteDocument::failure(e.document_message()),
        }
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.routes.values().map(BTreeMap::len).sum()
    }

    /// Returns true if no pairs are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of stored pairs with a route.
    pub fn found_count(&self) -> usize {
        self.routes
            .values()
            .flat_map(BTreeMap::values)
            .filter(|doc| doc.found)
            .count()
    }

    /// Load a cache file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CacheError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CacheError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| CacheError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the cache file.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CacheError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|source| CacheError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        let json = self.to_json_pretty().map_err(|source| CacheError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        std::fs::write(path, json).map_err(|source| CacheError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Look a pair up in a cache file.
///
/// Never fails: an unreadable file yields a "cannot open precomputed file"
/// document and a missing pair a "no precomputed route" document.
pub fn lookup_precomputed(
    path: impl AsRef<Path>,
    start: StationId,
    target: StationId,
) -> RouteDocument {
    match RouteCache::load(path) {
        Ok(cache) => cache.lookup(start, target),
        Err(e) => {
            warn!(error = %e, "Precomputed routes unavailable");
            RouteDocument::failure(e.document_message())
        }
    }
}
