//! Award redemption model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::RedemptionValuator;
use crate::error::{EngineError, EngineResult};

/// An award booking priced in points plus an optional cash co-payment.
///
/// A redemption is not tied to a trip. Its value is judged against whatever
/// cash price the caller supplies.
///
/// # Examples
///
/// ```
/// use flight_rewards::models::Redemption;
/// use rust_decimal::Decimal;
///
/// let redemption = Redemption::new(50_000, Decimal::new(100, 0)).unwrap();
/// let price = Decimal::new(800, 0);
/// assert_eq!(redemption.value_per_point(price), Decimal::new(140, 2));
/// assert_eq!(redemption.saving(price), Decimal::new(36500, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RedemptionFields")]
pub struct Redemption {
    points_required: u64,
    cash_required: Decimal,
}

/// Unvalidated wire form of a [`Redemption`].
#[derive(Deserialize)]
struct RedemptionFields {
    points_required: u64,
    cash_required: Decimal,
}

impl TryFrom<RedemptionFields> for Redemption {
    type Error = EngineError;

    fn try_from(fields: RedemptionFields) -> Result<Self, Self::Error> {
        Redemption::new(fields.points_required, fields.cash_required)
    }
}

impl Redemption {
    /// Creates a redemption.
    ///
    /// Fails with `InvalidRedemption` if no points are required or the cash
    /// co-payment is negative.
    pub fn new(points_required: u64, cash_required: Decimal) -> EngineResult<Self> {
        if points_required == 0 {
            return Err(EngineError::InvalidRedemption {
                field: "points_required".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if cash_required < Decimal::ZERO {
            return Err(EngineError::InvalidRedemption {
                field: "cash_required".to_string(),
                message: format!("cannot be negative, got {}", cash_required),
            });
        }

        Ok(Self {
            points_required,
            cash_required,
        })
    }

    /// Points needed for the booking.
    pub fn points_required(&self) -> u64 {
        self.points_required
    }

    /// Cash co-payment needed on top of the points.
    pub fn cash_required(&self) -> Decimal {
        self.cash_required
    }

    /// Pence of value per point against `reference_price`, to 2 dp.
    pub fn value_per_point(&self, reference_price: Decimal) -> Decimal {
        RedemptionValuator::default().value_per_point(self, reference_price)
    }

    /// Cash saved versus `reference_price` at the floor point value, to 2 dp.
    pub fn saving(&self, reference_price: Decimal) -> Decimal {
        RedemptionValuator::default().saving(self, reference_price)
    }
}
