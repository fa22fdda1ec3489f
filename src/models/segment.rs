//! Segment and leg models.
//!
//! This module defines the [`Segment`] struct, a caller-defined group of
//! consecutive flights booked in one fare class, and the [`Leg`] struct for a
//! single flight between two consecutive stops.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::FareClass;
use crate::error::{EngineError, EngineResult};

/// One physical flight between two consecutive stops.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Leg {
    /// Departure location code.
    pub origin: String,
    /// Arrival location code.
    pub destination: String,
}

impl Leg {
    /// Creates a leg between two location codes.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Returns true if one endpoint satisfies `first` and the other satisfies
    /// `second`, in either direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_rewards::models::Leg;
    ///
    /// let leg = Leg::new("ATH", "LHR");
    /// assert!(leg.connects(|c| c == "LHR", |c| c == "ATH"));
    /// assert!(!leg.connects(|c| c == "LHR", |c| c == "SYD"));
    /// ```
    pub fn connects(&self, first: impl Fn(&str) -> bool, second: impl Fn(&str) -> bool) -> bool {
        (first(&self.origin) && second(&self.destination))
            || (first(&self.destination) && second(&self.origin))
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.origin, self.destination)
    }
}

/// An ordered list of stops flown on a single fare class.
///
/// A segment with `n` stops has `n - 1` legs, all earning on the segment's
/// fare class.
///
/// # Examples
///
/// ```
/// use flight_rewards::models::Segment;
///
/// let segment = Segment::new(["lhr", "hkg", "syd"], "J").unwrap();
/// assert_eq!(segment.stops(), ["LHR", "HKG", "SYD"]);
/// assert_eq!(segment.leg_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    stops: Vec<String>,
    fare_class: FareClass,
}

impl Segment {
    /// Creates a segment from a list of stops and a fare code.
    ///
    /// Stops are normalized to uppercase. Fails with `InvalidSegment` if there
    /// are fewer than two stops, a stop is not a three-letter code, or two
    /// consecutive stops are the same; fails with `InvalidFareCode` if the fare
    /// code is not legal.
    pub fn new<I, S>(stops: I, fare_code: &str) -> EngineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_fare_class(stops, FareClass::new(fare_code)?)
    }

    /// Creates a segment from a list of stops and an already-resolved fare class.
    pub fn with_fare_class<I, S>(stops: I, fare_class: FareClass) -> EngineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stops = stops
            .into_iter()
            .map(|stop| normalize_location_code(stop.as_ref()))
            .collect::<EngineResult<Vec<_>>>()?;

        if stops.len() < 2 {
            return Err(EngineError::InvalidSegment {
                message: format!("a segment needs at least 2 stops, got {}", stops.len()),
            });
        }

        if let Some(pair) = stops.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(EngineError::InvalidSegment {
                message: format!("consecutive stops are both {}", pair[0]),
            });
        }

        Ok(Self { stops, fare_class })
    }

    /// The upper-case stop codes in flight order.
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// The fare class every leg of this segment is booked in.
    pub fn fare_class(&self) -> &FareClass {
        &self.fare_class
    }

    /// The legs of this segment, in flight order.
    pub fn legs(&self) -> impl Iterator<Item = Leg> + '_ {
        self.stops
            .windows(2)
            .map(|pair| Leg::new(pair[0].clone(), pair[1].clone()))
    }

    /// Number of legs in the segment.
    pub fn leg_count(&self) -> usize {
        self.stops.len() - 1
    }
}

fn normalize_location_code(code: &str) -> EngineResult<String> {
    let code = code.trim().to_uppercase();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(EngineError::InvalidSegment {
            message: format!("'{}' is not a three-letter location code", code),
        });
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_normalized_to_uppercase() {
        let segment = Segment::new(["lhr", " Jfk "], "y").unwrap();
        assert_eq!(segment.stops(), ["LHR", "JFK"]);
        assert_eq!(segment.fare_class().code(), 'Y');
    }

    #[test]
    fn test_legs_are_consecutive_pairs() {
        let segment = Segment::new(["LHR", "SIN", "SYD"], "J").unwrap();
        let legs: Vec<Leg> = segment.legs().collect();
        assert_eq!(legs, vec![Leg::new("LHR", "SIN"), Leg::new("SIN", "SYD")]);
        assert_eq!(segment.leg_count(), 2);
    }

    #[test]
    fn test_single_stop_rejected() {
        let result = Segment::new(["LHR"], "Y");
        match result {
            Err(EngineError::InvalidSegment { message }) => {
                assert!(message.contains("at least 2 stops"));
            }
            other => panic!("Expected InvalidSegment, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_code_rejected() {
        assert!(Segment::new(["LHR", "JFKX"], "Y").is_err());
        assert!(Segment::new(["LHR", "J1K"], "Y").is_err());
        assert!(Segment::new(["LHR", ""], "Y").is_err());
    }

    #[test]
    fn test_repeated_consecutive_stop_rejected() {
        let result = Segment::new(["LHR", "lhr"], "Y");
        assert!(matches!(result, Err(EngineError::InvalidSegment { .. })));
    }

    #[test]
    fn test_invalid_fare_code_rejected() {
        let result = Segment::new(["LHR", "JFK"], "z");
        assert!(matches!(result, Err(EngineError::InvalidFareCode { .. })));
    }

    #[test]
    fn test_leg_connects_either_direction() {
        let outbound = Leg::new("LHR", "ATH");
        let inbound = Leg::new("ATH", "LHR");
        let is_hub = |c: &str| c == "LHR";
        let is_bonus = |c: &str| c == "ATH";
        assert!(outbound.connects(is_hub, is_bonus));
        assert!(inbound.connects(is_hub, is_bonus));
        assert!(!Leg::new("ATH", "CDG").connects(is_hub, is_bonus));
    }

    #[test]
    fn test_leg_display() {
        assert_eq!(Leg::new("LHR", "JFK").to_string(), "LHR-JFK");
    }
}
