//! Redemption valuation functionality.
//!
//! This module values an award booking against the cash fare for the same
//! flight, both as pence per point and as a cash saving at a floor point value.

use rust_decimal::Decimal;

use crate::models::{Redemption, RedemptionValuation};

use super::rounding::round_money;

/// Conservative floor value of one point in pence, from the Nectar
/// conversion rate.
pub const FLOOR_PENCE_PER_POINT: Decimal = Decimal::from_parts(67, 0, 0, false, 2);

const PENCE_PER_POUND: Decimal = Decimal::ONE_HUNDRED;

/// Values redemptions against reference cash prices.
///
/// # Examples
///
/// ```
/// use flight_rewards::calculation::RedemptionValuator;
/// use flight_rewards::models::Redemption;
/// use rust_decimal::Decimal;
///
/// let valuator = RedemptionValuator::default();
/// let redemption = Redemption::new(50_000, Decimal::new(100, 0)).unwrap();
///
/// let valuation = valuator.valuate(&redemption, Decimal::new(800, 0));
/// assert_eq!(valuation.value_per_point.to_string(), "1.40");
/// assert_eq!(valuation.saving.to_string(), "365.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedemptionValuator {
    floor_pence_per_point: Decimal,
}

impl Default for RedemptionValuator {
    fn default() -> Self {
        Self {
            floor_pence_per_point: FLOOR_PENCE_PER_POINT,
        }
    }
}

impl RedemptionValuator {
    /// Creates a valuator with a custom floor point value in pence.
    pub fn with_floor_value(floor_pence_per_point: Decimal) -> Self {
        Self {
            floor_pence_per_point,
        }
    }

    /// The floor value of one point in pence.
    pub fn floor_pence_per_point(&self) -> Decimal {
        self.floor_pence_per_point
    }

    /// Pence of value per point, to 2 dp.
    ///
    /// Negative when the co-payment exceeds the reference price, meaning the
    /// redemption costs more than buying the ticket.
    pub fn value_per_point(&self, redemption: &Redemption, reference_price: Decimal) -> Decimal {
        let cash_difference = reference_price - redemption.cash_required();
        round_money(
            (cash_difference * PENCE_PER_POUND) / Decimal::from(redemption.points_required()),
        )
    }

    /// Cash value of the redemption with points priced at the floor value,
    /// in pounds.
    pub fn floor_cash_equivalent(&self, redemption: &Redemption) -> Decimal {
        let pence = redemption.cash_required() * PENCE_PER_POUND
            + Decimal::from(redemption.points_required()) * self.floor_pence_per_point;
        pence / PENCE_PER_POUND
    }

    /// Reference price minus the floor cash equivalent, to 2 dp.
    pub fn saving(&self, redemption: &Redemption, reference_price: Decimal) -> Decimal {
        round_money(reference_price - self.floor_cash_equivalent(redemption))
    }

    /// Produces the full valuation summary.
    pub fn valuate(&self, redemption: &Redemption, reference_price: Decimal) -> RedemptionValuation {
        RedemptionValuation {
            points_required: redemption.points_required(),
            cash_required: redemption.cash_required(),
            reference_price,
            value_per_point: self.value_per_point(redemption, reference_price),
            floor_cash_equivalent: round_money(self.floor_cash_equivalent(redemption)),
            saving: self.saving(redemption, reference_price),
        }
    }
}
