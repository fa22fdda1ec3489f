//! Rounding helpers shared by the calculations.
//!
//! Every rounding in the engine is half-to-even and happens at the stage that
//! owns it: leg points, then the bonused segment total, then money amounts.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Rounds `value` to `dp` decimal places, ties to even.
pub fn round_half_even(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
}

/// Rounds a money or pence amount to exactly two decimal places.
///
/// # Examples
///
/// ```
/// use flight_rewards::calculation::round_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_money(Decimal::new(365, 0)).to_string(), "365.00");
/// assert_eq!(round_money(Decimal::new(12345, 4)).to_string(), "1.23");
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = round_half_even(value, 2);
    rounded.rescale(2);
    rounded
}

/// Rounds a points amount to a whole number of points.
pub fn round_points(value: Decimal) -> EngineResult<u64> {
    round_half_even(value, 0)
        .to_u64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("points value {} is out of range", value),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_points_ties_round_to_even() {
        assert_eq!(round_points(dec("312.5")).unwrap(), 312);
        assert_eq!(round_points(dec("313.5")).unwrap(), 314);
        assert_eq!(round_points(dec("312.51")).unwrap(), 313);
    }

    #[test]
    fn test_money_ties_round_to_even() {
        assert_eq!(round_money(dec("1.125")), dec("1.12"));
        assert_eq!(round_money(dec("1.135")), dec("1.14"));
    }

    #[test]
    fn test_money_is_padded_to_two_places() {
        assert_eq!(round_money(dec("6")).to_string(), "6.00");
        assert_eq!(round_money(dec("-0.5")).to_string(), "-0.50");
    }

    #[test]
    fn test_negative_points_are_out_of_range() {
        assert!(round_points(dec("-3")).is_err());
    }
}
