//! Fare class model and tier point bands.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::FareClassCatalog;

/// A key into a fare class's tier point award table.
///
/// Three bands are selected by leg distance. `ShortHaulPlus` and `LongHaul`
/// are named route categories; `LongHaul` also doubles as the 10000+ mile band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TierPointBand {
    /// Legs shorter than 2000 miles.
    #[serde(rename = "<2000")]
    Under2000,
    /// Legs shorter than 6000 miles.
    #[serde(rename = "<6000")]
    Under6000,
    /// Legs shorter than 10000 miles.
    #[serde(rename = "<10000")]
    Under10000,
    /// Hub to short-haul-plus destination.
    #[serde(rename = "SH+")]
    ShortHaulPlus,
    /// Hub to the special long-haul destination, or any leg of 10000+ miles.
    #[serde(rename = "SYD")]
    LongHaul,
}

impl TierPointBand {
    /// Returns the distance band a leg of `distance_miles` falls into.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_rewards::catalog::TierPointBand;
    ///
    /// assert_eq!(TierPointBand::for_distance(1999), TierPointBand::Under2000);
    /// assert_eq!(TierPointBand::for_distance(2000), TierPointBand::Under6000);
    /// assert_eq!(TierPointBand::for_distance(10000), TierPointBand::LongHaul);
    /// ```
    pub fn for_distance(distance_miles: u32) -> Self {
        match distance_miles {
            0..2000 => TierPointBand::Under2000,
            2000..6000 => TierPointBand::Under6000,
            6000..10000 => TierPointBand::Under10000,
            _ => TierPointBand::LongHaul,
        }
    }

    /// Returns the chart label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            TierPointBand::Under2000 => "<2000",
            TierPointBand::Under6000 => "<6000",
            TierPointBand::Under10000 => "<10000",
            TierPointBand::ShortHaulPlus => "SH+",
            TierPointBand::LongHaul => "SYD",
        }
    }
}

impl fmt::Display for TierPointBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The tier point awards for one group of fare codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPointTable {
    awards: &'static [(TierPointBand, u32)],
}

impl TierPointTable {
    pub(super) fn new(awards: &'static [(TierPointBand, u32)]) -> Self {
        Self { awards }
    }

    /// Returns the award for `band`, or `None` if this table has no such band.
    pub fn award(&self, band: TierPointBand) -> Option<u32> {
        self.awards
            .iter()
            .find(|(b, _)| *b == band)
            .map(|(_, points)| *points)
    }

    /// Returns true if the table has an entry for `band`.
    pub fn has_band(&self, band: TierPointBand) -> bool {
        self.award(band).is_some()
    }

    /// Iterates over every `(band, award)` entry.
    pub fn entries(&self) -> impl Iterator<Item = (TierPointBand, u32)> + '_ {
        self.awards.iter().copied()
    }
}

/// An immutable booking class with its earning rules attached.
///
/// A `FareClass` can only be obtained from the catalog, so every instance
/// carries a legal code together with its multiplier, minimum and tier point
/// table.
///
/// # Examples
///
/// ```
/// use flight_rewards::catalog::FareClass;
/// use rust_decimal::Decimal;
///
/// let fare = FareClass::new("y").unwrap();
/// assert_eq!(fare.code(), 'Y');
/// assert_eq!(fare.points_multiplier(), Decimal::ONE);
/// assert_eq!(fare.minimum_points(), 500);
///
/// assert!(FareClass::new("z").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareClass {
    code: char,
    points_multiplier: Decimal,
    minimum_points: u32,
    tier_points: TierPointTable,
}

impl FareClass {
    pub(super) fn from_parts(
        code: char,
        points_multiplier: Decimal,
        minimum_points: u32,
        tier_points: TierPointTable,
    ) -> Self {
        Self {
            code,
            points_multiplier,
            minimum_points,
            tier_points,
        }
    }

    /// Looks up a fare class by code, case-insensitively.
    ///
    /// Fails with `InvalidFareCode` if the code is not a legal booking code.
    pub fn new(code: &str) -> EngineResult<Self> {
        FareClassCatalog::standard().lookup(code)
    }

    /// The upper-case booking code.
    pub fn code(&self) -> char {
        self.code
    }

    /// Multiplier applied to leg distance to get reward points.
    pub fn points_multiplier(&self) -> Decimal {
        self.points_multiplier
    }

    /// Minimum reward points earned on any single leg.
    pub fn minimum_points(&self) -> u32 {
        self.minimum_points
    }

    /// The tier point award table for this fare's group.
    pub fn tier_points(&self) -> &TierPointTable {
        &self.tier_points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_band_boundaries() {
        assert_eq!(TierPointBand::for_distance(0), TierPointBand::Under2000);
        assert_eq!(TierPointBand::for_distance(1999), TierPointBand::Under2000);
        assert_eq!(TierPointBand::for_distance(2000), TierPointBand::Under6000);
        assert_eq!(TierPointBand::for_distance(5999), TierPointBand::Under6000);
        assert_eq!(TierPointBand::for_distance(6000), TierPointBand::Under10000);
        assert_eq!(TierPointBand::for_distance(9999), TierPointBand::Under10000);
        assert_eq!(TierPointBand::for_distance(10000), TierPointBand::LongHaul);
        assert_eq!(TierPointBand::for_distance(u32::MAX), TierPointBand::LongHaul);
    }

    #[test]
    fn test_band_labels_match_serialized_names() {
        for band in [
            TierPointBand::Under2000,
            TierPointBand::Under6000,
            TierPointBand::Under10000,
            TierPointBand::ShortHaulPlus,
            TierPointBand::LongHaul,
        ] {
            let json = serde_json::to_string(&band).unwrap();
            assert_eq!(json, format!("\"{}\"", band.label()));
        }
    }

    #[test]
    fn test_table_lookup_missing_band() {
        static AWARDS: [(TierPointBand, u32); 1] = [(TierPointBand::Under6000, 90)];
        let table = TierPointTable::new(&AWARDS);
        assert_eq!(table.award(TierPointBand::Under6000), Some(90));
        assert_eq!(table.award(TierPointBand::Under2000), None);
        assert!(!table.has_band(TierPointBand::ShortHaulPlus));
    }

    #[test]
    fn test_new_is_case_insensitive() {
        let lower = FareClass::new("j").unwrap();
        let upper = FareClass::new("J").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.code(), 'J');
    }
}
