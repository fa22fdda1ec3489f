//! Fare class catalog for the Executive Club earning chart.
//!
//! The catalog is built once per process from static tables and shared by
//! reference. There is no way to mutate it.
//!
//! # Example
//!
//! ```
//! use flight_rewards::catalog::{FareClassCatalog, TierPointBand};
//!
//! let catalog = FareClassCatalog::standard();
//! let fare = catalog.lookup("Q").unwrap();
//! assert_eq!(fare.minimum_points(), 125);
//! assert_eq!(fare.tier_points().award(TierPointBand::ShortHaulPlus), Some(10));
//! ```

mod fare_class;
mod tables;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

pub use fare_class::{FareClass, TierPointBand, TierPointTable};
pub use tables::FARE_CODES;

use tables::{EARNING_BANDS, TIER_POINT_GROUPS};

static STANDARD_CATALOG: LazyLock<FareClassCatalog> = LazyLock::new(FareClassCatalog::build);

/// Read-only mapping from booking code to [`FareClass`].
#[derive(Debug)]
pub struct FareClassCatalog {
    fares: BTreeMap<char, FareClass>,
}

impl FareClassCatalog {
    /// Returns the process-wide catalog.
    pub fn standard() -> &'static FareClassCatalog {
        &STANDARD_CATALOG
    }

    fn build() -> Self {
        let fares = FARE_CODES
            .iter()
            .filter_map(|&code| {
                let earning = EARNING_BANDS.iter().find(|b| b.codes.contains(&code))?;
                let group = TIER_POINT_GROUPS.iter().find(|g| g.codes.contains(&code))?;
                let (mantissa, scale) = earning.multiplier;
                let fare = FareClass::from_parts(
                    code,
                    Decimal::new(mantissa, scale),
                    earning.minimum,
                    TierPointTable::new(group.awards),
                );
                Some((code, fare))
            })
            .collect();

        Self { fares }
    }

    /// Looks up a fare class by booking code.
    ///
    /// The code is matched case-insensitively and must be exactly one
    /// character. Anything else fails with `InvalidFareCode`.
    pub fn lookup(&self, code: &str) -> EngineResult<FareClass> {
        let trimmed = code.trim();
        let mut chars = trimmed.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c.to_ascii_uppercase()),
            _ => None,
        };

        single
            .and_then(|c| self.fares.get(&c))
            .cloned()
            .ok_or_else(|| EngineError::InvalidFareCode {
                code: trimmed.to_uppercase(),
            })
    }

    /// Returns true if `code` names a fare class in this catalog.
    pub fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_ok()
    }

    /// Iterates over all fare classes in code order.
    pub fn iter(&self) -> impl Iterator<Item = &FareClass> {
        self.fares.values()
    }

    /// Number of fare classes in the catalog.
    pub fn len(&self) -> usize {
        self.fares.len()
    }

    /// Returns true if the catalog holds no fare classes.
    pub fn is_empty(&self) -> bool {
        self.fares.is_empty()
    }
}
