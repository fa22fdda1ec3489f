//! Itinerary model with memoized location and distance lookups.
//!
//! An [`Itinerary`] resolves every distinct location and measures every
//! distinct leg at most once. The results are cached for the itinerary's
//! lifetime, so reward points, tier points and distances always agree on the
//! length of a leg.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::OnceLock;

use tracing::debug;

use crate::distance::{Coordinates, DistanceOracle};
use crate::error::{EngineError, EngineResult};

use super::{Leg, Segment};

/// Whole-mile distance for every distinct leg of an itinerary.
pub type LegDistances = HashMap<Leg, u32>;

/// An ordered list of segments making up a trip.
///
/// The location and distance caches are filled on first access from the
/// oracle passed to that call. Later calls reuse the cached values even if a
/// different oracle is passed.
#[derive(Debug, Clone)]
pub struct Itinerary {
    segments: Vec<Segment>,
    locations: OnceLock<BTreeMap<String, Coordinates>>,
    leg_distances: OnceLock<LegDistances>,
}

impl Itinerary {
    /// Creates an itinerary. Fails with `InvalidItinerary` if `segments` is empty.
    pub fn new(segments: Vec<Segment>) -> EngineResult<Self> {
        if segments.is_empty() {
            return Err(EngineError::InvalidItinerary {
                message: "an itinerary needs at least one segment".to_string(),
            });
        }

        Ok(Self {
            segments,
            locations: OnceLock::new(),
            leg_distances: OnceLock::new(),
        })
    }

    /// The segments in travel order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Every leg of every segment, in travel order. Repeated legs appear once
    /// per occurrence.
    pub fn legs(&self) -> impl Iterator<Item = Leg> + '_ {
        self.segments.iter().flat_map(|segment| segment.legs())
    }

    /// The distinct location codes visited.
    pub fn location_codes(&self) -> BTreeSet<&str> {
        self.segments
            .iter()
            .flat_map(|s| s.stops().iter().map(String::as_str))
            .collect()
    }

    /// Resolves every distinct location to coordinates.
    ///
    /// Fails with `UnknownLocation` if the oracle cannot resolve a code. A
    /// failed resolution leaves the cache empty.
    pub fn locations<O>(&self, oracle: &O) -> EngineResult<&BTreeMap<String, Coordinates>>
    where
        O: DistanceOracle + ?Sized,
    {
        if let Some(locations) = self.locations.get() {
            return Ok(locations);
        }

        let resolved = self
            .location_codes()
            .into_iter()
            .map(|code| Ok((code.to_string(), oracle.resolve(code)?)))
            .collect::<EngineResult<BTreeMap<_, _>>>()?;

        debug!(locations = resolved.len(), "Resolved itinerary locations");
        Ok(self.locations.get_or_init(|| resolved))
    }

    /// Measures every distinct leg, rounded to the nearest whole mile.
    ///
    /// Ties round to even. A leg flown twice is measured once; `A-B` and
    /// `B-A` are separate legs.
    pub fn leg_distances<O>(&self, oracle: &O) -> EngineResult<&LegDistances>
    where
        O: DistanceOracle + ?Sized,
    {
        if let Some(distances) = self.leg_distances.get() {
            return Ok(distances);
        }

        let locations = self.locations(oracle)?;
        let mut distances = LegDistances::new();
        for leg in self.legs() {
            if distances.contains_key(&leg) {
                continue;
            }
            let from = lookup(locations, &leg.origin)?;
            let to = lookup(locations, &leg.destination)?;
            let miles = round_miles(oracle.distance_miles(from, to), &leg)?;
            distances.insert(leg, miles);
        }

        debug!(legs = distances.len(), "Measured itinerary legs");
        Ok(self.leg_distances.get_or_init(|| distances))
    }

    /// The distance of a single leg in whole miles.
    pub fn leg_distance<O>(&self, leg: &Leg, oracle: &O) -> EngineResult<u32>
    where
        O: DistanceOracle + ?Sized,
    {
        self.leg_distances(oracle)?
            .get(leg)
            .copied()
            .ok_or_else(|| EngineError::CalculationError {
                message: format!("leg {} is not part of this itinerary", leg),
            })
    }

    /// Total distance of each segment in whole miles, in segment order.
    ///
    /// Each leg contributes its cached rounded distance, so a leg repeated in
    /// two segments counts towards both.
    pub fn distance_per_segment<O>(&self, oracle: &O) -> EngineResult<Vec<u32>>
    where
        O: DistanceOracle + ?Sized,
    {
        let distances = self.leg_distances(oracle)?;
        self.segments
            .iter()
            .map(|segment| {
                segment
                    .legs()
                    .map(|leg| {
                        distances
                            .get(&leg)
                            .copied()
                            .ok_or_else(|| EngineError::CalculationError {
                                message: format!("no distance measured for leg {}", leg),
                            })
                    })
                    .sum::<EngineResult<u32>>()
            })
            .collect()
    }
}

fn lookup(locations: &BTreeMap<String, Coordinates>, code: &str) -> EngineResult<Coordinates> {
    locations
        .get(code)
        .copied()
        .ok_or_else(|| EngineError::UnknownLocation {
            code: code.to_string(),
        })
}

fn round_miles(miles: f64, leg: &Leg) -> EngineResult<u32> {
    if !miles.is_finite() || miles < 0.0 || miles > f64::from(u32::MAX) {
        return Err(EngineError::CalculationError {
            message: format!("oracle returned invalid distance {} for leg {}", miles, leg),
        });
    }
    Ok(miles.round_ties_even() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Places every airport on a line so distances are exact and predictable.
    struct LineOracle {
        positions: HashMap<&'static str, f64>,
        resolves: AtomicUsize,
        measurements: AtomicUsize,
    }

    impl LineOracle {
        fn new(positions: &[(&'static str, f64)]) -> Self {
            Self {
                positions: positions.iter().copied().collect(),
                resolves: AtomicUsize::new(0),
                measurements: AtomicUsize::new(0),
            }
        }
    }

    impl DistanceOracle for LineOracle {
        fn resolve(&self, code: &str) -> EngineResult<Coordinates> {
            self.resolves.fetch_add(1, Ordering::SeqCst);
            self.positions
                .get(code)
                .map(|&x| Coordinates::new(x, 0.0))
                .ok_or_else(|| EngineError::UnknownLocation {
                    code: code.to_string(),
                })
        }

        fn distance_miles(&self, from: Coordinates, to: Coordinates) -> f64 {
            self.measurements.fetch_add(1, Ordering::SeqCst);
            (from.latitude - to.latitude).abs()
        }
    }

    fn oracle() -> LineOracle {
        LineOracle::new(&[("LHR", 0.0), ("JFK", 3450.0), ("ATH", 1500.5), ("CDG", 214.5)])
    }

    #[test]
    fn test_empty_itinerary_rejected() {
        let result = Itinerary::new(vec![]);
        assert!(matches!(result, Err(EngineError::InvalidItinerary { .. })));
    }

    #[test]
    fn test_distance_per_segment() {
        let itinerary = Itinerary::new(vec![
            Segment::new(["LHR", "JFK"], "Y").unwrap(),
            Segment::new(["JFK", "LHR", "ATH"], "Y").unwrap(),
        ])
        .unwrap();

        let distances = itinerary.distance_per_segment(&oracle()).unwrap();
        // 1500.5 rounds half to even -> 1500
        assert_eq!(distances, vec![3450, 3450 + 1500]);
    }

    #[test]
    fn test_rounding_is_half_to_even() {
        let itinerary =
            Itinerary::new(vec![Segment::new(["LHR", "CDG"], "Y").unwrap()]).unwrap();
        // 214.5 -> 214
        assert_eq!(itinerary.distance_per_segment(&oracle()).unwrap(), vec![214]);
    }

    #[test]
    fn test_repeated_leg_measured_once() {
        let oracle = oracle();
        let itinerary = Itinerary::new(vec![
            Segment::new(["LHR", "JFK"], "Y").unwrap(),
            Segment::new(["LHR", "JFK"], "J").unwrap(),
        ])
        .unwrap();

        let distances = itinerary.leg_distances(&oracle).unwrap();
        assert_eq!(distances.len(), 1);
        assert_eq!(oracle.measurements.load(Ordering::SeqCst), 1);
        assert_eq!(
            itinerary.distance_per_segment(&oracle).unwrap(),
            vec![3450, 3450]
        );
    }

    #[test]
    fn test_reverse_leg_is_distinct() {
        let itinerary = Itinerary::new(vec![
            Segment::new(["LHR", "JFK"], "Y").unwrap(),
            Segment::new(["JFK", "LHR"], "Y").unwrap(),
        ])
        .unwrap();

        let distances = itinerary.leg_distances(&oracle()).unwrap();
        assert_eq!(distances.len(), 2);
        assert_eq!(distances[&Leg::new("JFK", "LHR")], 3450);
    }

    #[test]
    fn test_caches_are_populated_once() {
        let oracle = oracle();
        let itinerary = Itinerary::new(vec![
            Segment::new(["LHR", "JFK"], "Y").unwrap(),
            Segment::new(["JFK", "LHR"], "Y").unwrap(),
        ])
        .unwrap();

        itinerary.leg_distances(&oracle).unwrap();
        itinerary.leg_distances(&oracle).unwrap();
        itinerary.distance_per_segment(&oracle).unwrap();

        assert_eq!(oracle.resolves.load(Ordering::SeqCst), 2);
        assert_eq!(oracle.measurements.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unknown_location_propagates() {
        let itinerary =
            Itinerary::new(vec![Segment::new(["LHR", "XXX"], "Y").unwrap()]).unwrap();
        match itinerary.leg_distances(&oracle()) {
            Err(EngineError::UnknownLocation { code }) => assert_eq!(code, "XXX"),
            other => panic!("Expected UnknownLocation, got {:?}", other),
        }
    }

    #[test]
    fn test_location_codes_are_distinct() {
        let itinerary = Itinerary::new(vec![
            Segment::new(["LHR", "JFK"], "Y").unwrap(),
            Segment::new(["JFK", "LHR"], "Y").unwrap(),
        ])
        .unwrap();
        let codes: Vec<&str> = itinerary.location_codes().into_iter().collect();
        assert_eq!(codes, vec!["JFK", "LHR"]);
    }
}
