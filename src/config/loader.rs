//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading programme
//! rules and the airport table from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::distance::AirportDirectory;
use crate::error::{EngineError, EngineResult};

use super::types::{AirportsConfig, ProgramRules};

/// Loads and provides access to programme configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/ba/
/// ├── program.yaml    # Carrier, hubs, short-haul-plus list, special route
/// ├── airports.yaml   # IATA code -> name, latitude, longitude
/// └── airports.csv    # optional full table in the airportsdata CSV layout
/// ```
///
/// When `airports.csv` is present it is loaded first and `airports.yaml`
/// entries are layered on top, replacing rows with the same code.
///
/// # Example
///
/// ```no_run
/// use flight_rewards::config::ConfigLoader;
/// use flight_rewards::distance::DistanceOracle;
///
/// let loader = ConfigLoader::load("./config/ba").unwrap();
/// println!("Carrier: {}", loader.rules().carrier);
///
/// let heathrow = loader.airports().resolve("LHR").unwrap();
/// println!("LHR is at {}, {}", heathrow.latitude, heathrow.longitude);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: ProgramRules,
    airports: AirportDirectory,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/ba")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rules = Self::load_yaml::<ProgramRules>(&path.join("program.yaml"))?.normalized();

        let airports_config = Self::load_yaml::<AirportsConfig>(&path.join("airports.yaml"))?;
        let csv_path = path.join("airports.csv");
        let mut airports = if csv_path.is_file() {
            Self::load_csv(&csv_path)?
        } else {
            AirportDirectory::default()
        };
        airports.extend(AirportDirectory::new(airports_config.airports));

        debug!(
            carrier = %rules.carrier,
            airports = airports.len(),
            "Loaded programme configuration"
        );

        Ok(Self { rules, airports })
    }

    /// Creates a loader from already-built parts.
    pub fn from_parts(rules: ProgramRules, airports: AirportDirectory) -> Self {
        Self {
            rules: rules.normalized(),
            airports,
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads an airport table in the airportsdata CSV layout.
    fn load_csv(path: &Path) -> EngineResult<AirportDirectory> {
        let path_str = path.display().to_string();

        let file = fs::File::open(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        AirportDirectory::from_csv_reader(file).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the programme rules.
    pub fn rules(&self) -> &ProgramRules {
        &self.rules
    }

    /// Returns the airport directory, usable as a distance oracle.
    pub fn airports(&self) -> &AirportDirectory {
        &self.airports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceOracle;

    fn config_path() -> &'static str {
        "./config/ba"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.rules().carrier, "British Airways");
        assert_eq!(loader.rules().programme, "Executive Club");
    }

    #[test]
    fn test_loaded_rules_match_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.rules(), &ProgramRules::default());
    }

    #[test]
    fn test_airports_cover_hubs_and_bonus_destinations() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let rules = loader.rules();
        for code in rules.hubs.iter().chain(rules.short_haul_plus.iter()) {
            assert!(
                loader.airports().resolve(code).is_ok(),
                "airport {} missing from airports.yaml",
                code
            );
        }
        assert!(loader.airports().resolve(&rules.special_route_destination).is_ok());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("program.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    fn create_config_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("flight-rewards-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::copy("./config/ba/program.yaml", dir.join("program.yaml")).unwrap();
        fs::write(
            dir.join("airports.yaml"),
            "airports:\n  LHR: { name: \"Heathrow\", latitude: 51.47, longitude: -0.4543 }\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_airports_csv_is_layered_under_yaml() {
        let dir = create_config_dir("csv");
        fs::write(
            dir.join("airports.csv"),
            "icao,iata,name,lat,lon\n\
             EGLL,LHR,London Heathrow Airport,51.4706,-0.461941\n\
             YSSY,SYD,Sydney Kingsford Smith International Airport,-33.946098,151.177002\n",
        )
        .unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();
        let loader = result.unwrap();

        assert_eq!(loader.airports().len(), 2);
        assert_eq!(loader.airports().get("LHR").unwrap().name, "Heathrow");
        assert!(loader.airports().resolve("SYD").is_ok());
    }

    #[test]
    fn test_invalid_airports_csv_returns_parse_error() {
        let dir = create_config_dir("bad-csv");
        fs::write(dir.join("airports.csv"), "iata,name,lat,lon\nSYD,Sydney,south,east\n").unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("airports.csv"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join(format!("flight-rewards-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("program.yaml"), "carrier: [unterminated").unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("program.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
