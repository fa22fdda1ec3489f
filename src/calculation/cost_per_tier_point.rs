//! Cost per tier point calculation.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::rounding::round_money;

/// Divides the ticket price by the tier points earned, to 2 dp.
///
/// # Errors
///
/// Returns `ZeroTierPoints` when `total_tier_points` is zero. The result is
/// never coerced to zero or infinity.
///
/// # Examples
///
/// ```
/// use flight_rewards::calculation::calculate_cost_per_tier_point;
/// use rust_decimal::Decimal;
///
/// let cost = calculate_cost_per_tier_point(Decimal::new(450, 0), 140).unwrap();
/// assert_eq!(cost, Decimal::new(321, 2));
///
/// assert!(calculate_cost_per_tier_point(Decimal::new(450, 0), 0).is_err());
/// ```
pub fn calculate_cost_per_tier_point(
    ticket_price: Decimal,
    total_tier_points: u64,
) -> EngineResult<Decimal> {
    if total_tier_points == 0 {
        return Err(EngineError::ZeroTierPoints {
            price: ticket_price,
        });
    }

    Ok(round_money(ticket_price / Decimal::from(total_tier_points)))
}
