//! Network configuration.
//!
//! The station and line tables are plain data handed to
//! [`Network::build`](super::Network::build). They can be loaded from JSON or
//! taken from the built-in Alexandria tram network.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Line, StationId};

use super::NetworkError;

/// A named station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationConfig {
    pub id: StationId,
    pub name: String,
}

/// A line's stop pattern and fare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineConfig {
    pub label: String,
    pub fare: u32,
    pub stops: Vec<StationId>,
}

impl From<&LineConfig> for Line {
    fn from(config: &LineConfig) -> Self {
        Line::new(config.label.clone(), config.stops.clone(), config.fare)
    }
}

/// Everything needed to build a [`Network`](super::Network).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Lines in declaration order.
    pub lines: Vec<LineConfig>,
    /// Display names for every station the lines reference.
    pub stations: Vec<StationConfig>,
}

impl NetworkConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line.
    pub fn with_line(mut self, label: &str, fare: u32, stops: &[u64]) -> Self {
        self.lines.push(LineConfig {
            label: label.to_string(),
            fare,
            stops: stops.iter().copied().map(StationId::new).collect(),
        });
        self
    }

    /// Add a station name.
    pub fn with_station(mut self, id: u64, name: &str) -> Self {
        self.stations.push(StationConfig {
            id: StationId::new(id),
            name: name.to_string(),
        });
        self
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| NetworkError::Config {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        serde_json::from_str(&contents).map_err(|e| NetworkError::Config {
            message: format!("invalid network file {}: {}", path.display(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn builder_methods() {
        let config = NetworkConfig::new()
            .with_line("B1", 5, &[1, 2, 3])
            .with_station(1, "One");

        assert_eq!(config.lines.len(), 1);
        assert_eq!(config.lines[0].stops[2], StationId::new(3));
        assert_eq!(config.stations[0].name, "One");
    }

    #[test]
    fn line_from_config() {
        let config = NetworkConfig::new().with_line("Y1", 10, &[4, 5]);
        let line = Line::from(&config.lines[0]);
        assert_eq!(line.label(), "Y1");
        assert_eq!(line.fare(), 10);
        assert_eq!(line.stops(), &[StationId::new(4), StationId::new(5)]);
    }

    #[test]
    fn json_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.json");
        let config = NetworkConfig::new()
            .with_line("B1", 5, &[1, 2])
            .with_station(1, "One")
            .with_station(2, "Two");

        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(NetworkConfig::from_json_file(&path).unwrap(), config);
    }

    #[test]
    fn json_shape() {
        let json = r#"{
            "lines": [{"label": "B1", "fare": 5, "stops": [1, 2]}],
            "stations": [{"id": 1, "name": "One"}, {"id": 2, "name": "Two"}]
        }"#;
        let config: NetworkConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.lines[0].fare, 5);
        assert_eq!(config.stations[1].id, StationId::new(2));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = NetworkConfig::from_json_file("/nonexistent/network.json").unwrap_err();
        assert!(matches!(err, NetworkError::Config { .. }));
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.json");
        std::fs::write(&path, "{\"lines\": 3}").unwrap();
        let err = NetworkConfig::from_json_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("invalid network configuration: invalid network file"));
    }
}
