//! Airport table backed distance oracle.
//!
//! Tables come from the YAML config or from a CSV export in the
//! `airportsdata` layout (`icao,iata,name,city,subd,country,elevation,lat,lon,tz,lid`).

use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{Coordinates, DistanceOracle, geodesic_miles};

/// An airport entry from the airport table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// Human-readable airport name.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Airport {
    /// The airport's position.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// A [`DistanceOracle`] that resolves IATA codes from an in-memory table.
///
/// # Example
///
/// ```
/// use flight_rewards::distance::{Airport, AirportDirectory, DistanceOracle};
///
/// let directory = AirportDirectory::new([(
///     "lhr".to_string(),
///     Airport { name: "London Heathrow".to_string(), latitude: 51.47, longitude: -0.4543 },
/// )]);
/// assert!(directory.resolve("LHR").is_ok());
/// assert!(directory.resolve("XXX").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AirportDirectory {
    airports: BTreeMap<String, Airport>,
}

impl AirportDirectory {
    /// Builds a directory, normalizing codes to uppercase.
    pub fn new(airports: impl IntoIterator<Item = (String, Airport)>) -> Self {
        let airports = airports
            .into_iter()
            .map(|(code, airport)| (code.trim().to_uppercase(), airport))
            .collect();
        Self { airports }
    }

    /// Reads an `airportsdata` style CSV table.
    ///
    /// Columns are matched by header name and unknown columns are ignored.
    /// Rows without an IATA code are skipped.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut airports = BTreeMap::new();

        for record in csv_reader.deserialize::<AirportRow>() {
            let row = record?;
            if row.iata.is_empty() {
                continue;
            }
            airports.insert(
                row.iata.to_uppercase(),
                Airport {
                    name: row.name,
                    latitude: row.lat,
                    longitude: row.lon,
                },
            );
        }

        Ok(Self { airports })
    }

    /// Adds every airport from `other`, replacing entries with the same code.
    pub fn extend(&mut self, other: AirportDirectory) {
        self.airports.extend(other.airports);
    }

    /// Looks up an airport by code, case-insensitively.
    pub fn get(&self, code: &str) -> Option<&Airport> {
        self.airports.get(&code.trim().to_uppercase())
    }

    /// Number of airports in the directory.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    /// Returns true if the directory has no airports.
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

impl DistanceOracle for AirportDirectory {
    fn resolve(&self, code: &str) -> EngineResult<Coordinates> {
        self.get(code)
            .map(Airport::coordinates)
            .ok_or_else(|| EngineError::UnknownLocation {
                code: code.to_uppercase(),
            })
    }

    fn distance_miles(&self, from: Coordinates, to: Coordinates) -> f64 {
        geodesic_miles(from, to)
    }
}

#[derive(Debug, Deserialize)]
struct AirportRow {
    #[serde(default)]
    iata: String,
    name: String,
    lat: f64,
    lon: f64,
}
