//! Trip models and Executive Club tier status.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::Itinerary;

/// Executive Club membership tier.
///
/// Each tier carries a bonus applied to reward points; tier points are never
/// bonused.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TierStatus {
    /// Entry tier, no bonus.
    #[default]
    Blue,
    /// 25% bonus.
    Bronze,
    /// 50% bonus.
    Silver,
    /// 100% bonus.
    Gold,
}

impl TierStatus {
    /// Every tier, lowest first.
    pub const ALL: [TierStatus; 4] = [
        TierStatus::Blue,
        TierStatus::Bronze,
        TierStatus::Silver,
        TierStatus::Gold,
    ];

    /// The reward point bonus as a fraction, e.g. 0.25 for bronze.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_rewards::models::TierStatus;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(TierStatus::Blue.bonus(), Decimal::ZERO);
    /// assert_eq!(TierStatus::Gold.bonus(), Decimal::ONE);
    /// ```
    pub fn bonus(&self) -> Decimal {
        match self {
            TierStatus::Blue => Decimal::ZERO,
            TierStatus::Bronze => Decimal::new(25, 2),
            TierStatus::Silver => Decimal::new(5, 1),
            TierStatus::Gold => Decimal::ONE,
        }
    }

    /// The lowercase tier name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TierStatus::Blue => "blue",
            TierStatus::Bronze => "bronze",
            TierStatus::Silver => "silver",
            TierStatus::Gold => "gold",
        }
    }
}

impl fmt::Display for TierStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TierStatus {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        TierStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| EngineError::InvalidTierStatus {
                status: s.to_string(),
            })
    }
}

/// An itinerary paired with the cash price paid for it.
#[derive(Debug, Clone)]
pub struct Trip {
    itinerary: Itinerary,
    ticket_price: Decimal,
}

impl Trip {
    /// Creates a trip. Fails with `InvalidTrip` if the price is negative.
    pub fn new(itinerary: Itinerary, ticket_price: Decimal) -> EngineResult<Self> {
        if ticket_price < Decimal::ZERO {
            return Err(EngineError::InvalidTrip {
                field: "ticket_price".to_string(),
                message: format!("cannot be negative, got {}", ticket_price),
            });
        }

        Ok(Self {
            itinerary,
            ticket_price,
        })
    }

    /// The itinerary flown.
    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    /// The cash price of the ticket.
    pub fn ticket_price(&self) -> Decimal {
        self.ticket_price
    }
}

/// A trip flown with a carrier's loyalty programme, at a given tier status.
///
/// # Examples
///
/// ```
/// use flight_rewards::models::{CarrierTrip, Itinerary, Segment, TierStatus};
/// use rust_decimal::Decimal;
///
/// let itinerary = Itinerary::new(vec![Segment::new(["LHR", "JFK"], "Y").unwrap()]).unwrap();
/// let trip = CarrierTrip::new(itinerary, Decimal::new(450, 0), TierStatus::Silver).unwrap();
/// assert_eq!(trip.tier_status(), TierStatus::Silver);
/// ```
#[derive(Debug, Clone)]
pub struct CarrierTrip {
    trip: Trip,
    tier_status: TierStatus,
}

impl CarrierTrip {
    /// Creates a carrier trip. Fails with `InvalidTrip` if the price is negative.
    pub fn new(
        itinerary: Itinerary,
        ticket_price: Decimal,
        tier_status: TierStatus,
    ) -> EngineResult<Self> {
        Ok(Self {
            trip: Trip::new(itinerary, ticket_price)?,
            tier_status,
        })
    }

    /// Wraps an existing trip.
    pub fn from_trip(trip: Trip, tier_status: TierStatus) -> Self {
        Self { trip, tier_status }
    }

    /// The underlying trip.
    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    /// The itinerary flown.
    pub fn itinerary(&self) -> &Itinerary {
        self.trip.itinerary()
    }

    /// The cash price of the ticket.
    pub fn ticket_price(&self) -> Decimal {
        self.trip.ticket_price()
    }

    /// The traveller's tier status.
    pub fn tier_status(&self) -> TierStatus {
        self.tier_status
    }
}
