//! Location resolution and geodesic distances.
//!
//! The reward engine never measures anything itself. It asks a
//! [`DistanceOracle`] to resolve location codes and to measure the distance
//! between two coordinates. [`AirportDirectory`] is the oracle used in
//! practice, backed by the airport table in the configuration directory.

mod airports;
mod geodesic;

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

pub use airports::{Airport, AirportDirectory};
pub use geodesic::{METRES_PER_MILE, geodesic_miles};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude, positive north.
    pub latitude: f64,
    /// Longitude, positive east.
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Resolves location codes and measures distances between them.
///
/// Implementations must be side-effect free from the engine's point of view.
/// Errors are propagated unchanged; the engine does not retry.
pub trait DistanceOracle {
    /// Resolves a location code to coordinates.
    ///
    /// Fails with `UnknownLocation` if the code is not recognised.
    fn resolve(&self, code: &str) -> EngineResult<Coordinates>;

    /// Returns the distance between two points in statute miles.
    fn distance_miles(&self, from: Coordinates, to: Coordinates) -> f64;
}

impl<T: DistanceOracle + ?Sized> DistanceOracle for &T {
    fn resolve(&self, code: &str) -> EngineResult<Coordinates> {
        (**self).resolve(code)
    }

    fn distance_miles(&self, from: Coordinates, to: Coordinates) -> f64 {
        (**self).distance_miles(from, to)
    }
}
