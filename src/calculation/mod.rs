//! Calculation logic for the flight rewards engine.
//!
//! This module contains the earning and valuation rules: reward points per
//! leg with the fare minimum, the tier status bonus, tier points by route and
//! distance band, cost per tier point, and redemption value. [`RewardEngine`]
//! applies them to a whole trip.

mod cost_per_tier_point;
mod engine;
mod redemption_value;
mod reward_points;
mod rounding;
mod tier_points;

pub use cost_per_tier_point::calculate_cost_per_tier_point;
pub use engine::{MINIMUM_POINTS_WARNING, RewardEngine};
pub use redemption_value::{FLOOR_PENCE_PER_POINT, RedemptionValuator};
pub use reward_points::{
    LegRewardPointsResult, SegmentRewardPointsResult, StatusBonusResult, apply_status_bonus,
    calculate_leg_reward_points, calculate_segment_reward_points,
};
pub use rounding::{round_half_even, round_money, round_points};
pub use tier_points::{
    LegTierPointsResult, SegmentTierPointsResult, TierPointRule, calculate_leg_tier_points,
    calculate_segment_tier_points, classify_leg,
};

use crate::error::{EngineError, EngineResult};
use crate::models::{Leg, LegDistances};

/// Looks up a measured leg, failing if the itinerary never measured it.
pub(crate) fn leg_distance(distances: &LegDistances, leg: &Leg) -> EngineResult<u32> {
    distances
        .get(leg)
        .copied()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("no distance measured for leg {}", leg),
        })
}
