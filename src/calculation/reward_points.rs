//! Reward point calculation functionality.
//!
//! This module provides functions for calculating the reward points (Avios)
//! earned on each leg, the per-segment total, and the tier status bonus.

use rust_decimal::Decimal;

use crate::catalog::FareClass;
use crate::error::EngineResult;
use crate::models::{AuditStep, Leg, LegDistances, Segment, TierStatus};

use super::leg_distance;
use super::rounding::round_points;

/// The result of calculating reward points for one leg.
#[derive(Debug, Clone)]
pub struct LegRewardPointsResult {
    /// Points earned on the leg after the minimum floor.
    pub points: u64,
    /// True if the fare's minimum replaced the distance-based points.
    pub minimum_applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of applying the tier status bonus to a segment total.
#[derive(Debug, Clone)]
pub struct StatusBonusResult {
    /// Points after the bonus.
    pub points: u64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of calculating reward points for a whole segment.
#[derive(Debug, Clone)]
pub struct SegmentRewardPointsResult {
    /// Points earned on the segment, including the status bonus.
    pub points: u64,
    /// Legs that earned the fare minimum instead of their distance points.
    pub minimum_applied_legs: Vec<Leg>,
    /// One step per leg followed by the status bonus step.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the reward points earned on a single leg.
///
/// Points are `round(distance * multiplier)`, ties to even. If that is below
/// the fare's minimum, the minimum is earned instead.
///
/// # Examples
///
/// ```
/// use flight_rewards::calculation::calculate_leg_reward_points;
/// use flight_rewards::catalog::FareClass;
/// use flight_rewards::models::Leg;
///
/// let fare = FareClass::new("Q").unwrap();
/// let leg = Leg::new("LHR", "CDG");
///
/// let result = calculate_leg_reward_points(&leg, 214, &fare, 1).unwrap();
/// assert_eq!(result.points, 125);
/// assert!(result.minimum_applied);
/// ```
pub fn calculate_leg_reward_points(
    leg: &Leg,
    distance_miles: u32,
    fare_class: &FareClass,
    step_number: u32,
) -> EngineResult<LegRewardPointsResult> {
    let multiplier = fare_class.points_multiplier();
    let minimum = u64::from(fare_class.minimum_points());
    let raw_points = round_points(Decimal::from(distance_miles) * multiplier)?;
    let minimum_applied = raw_points < minimum;
    let points = if minimum_applied { minimum } else { raw_points };

    let reasoning = if minimum_applied {
        format!(
            "{} miles x {} = {} is below the fare class {} minimum, earning {}",
            distance_miles,
            multiplier.normalize(),
            raw_points,
            fare_class.code(),
            minimum
        )
    } else {
        format!(
            "{} miles x {} = {}",
            distance_miles,
            multiplier.normalize(),
            points
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "leg_reward_points".to_string(),
        rule_name: "Leg Reward Points".to_string(),
        input: serde_json::json!({
            "leg": leg.to_string(),
            "distance_miles": distance_miles,
            "fare_code": fare_class.code().to_string(),
            "multiplier": multiplier.normalize().to_string(),
            "minimum_points": minimum
        }),
        output: serde_json::json!({
            "raw_points": raw_points,
            "points": points,
            "minimum_applied": minimum_applied
        }),
        reasoning,
    };

    Ok(LegRewardPointsResult {
        points,
        minimum_applied,
        audit_step,
    })
}

/// Applies the tier status bonus to a segment's leg total.
///
/// The bonused total is `round(points * (1 + bonus))`, ties to even.
pub fn apply_status_bonus(
    segment_index: usize,
    base_points: u64,
    status: TierStatus,
    step_number: u32,
) -> EngineResult<StatusBonusResult> {
    let bonus = status.bonus();
    let points = round_points(Decimal::from(base_points) * (Decimal::ONE + bonus))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "status_bonus".to_string(),
        rule_name: "Tier Status Bonus".to_string(),
        input: serde_json::json!({
            "segment_index": segment_index,
            "base_points": base_points,
            "tier_status": status.as_str(),
            "bonus": bonus.normalize().to_string()
        }),
        output: serde_json::json!({
            "points": points
        }),
        reasoning: if bonus.is_zero() {
            format!("No bonus at {} status, {} points", status, points)
        } else {
            format!(
                "{} x (1 + {}) = {} at {} status",
                base_points,
                bonus.normalize(),
                points,
                status
            )
        },
    };

    Ok(StatusBonusResult { points, audit_step })
}

/// Calculates the reward points for every leg of a segment and applies the
/// status bonus to their sum.
///
/// Leg points are rounded before they are summed, and the sum is rounded
/// again after the bonus; the two stages are never merged.
pub fn calculate_segment_reward_points(
    segment_index: usize,
    segment: &Segment,
    distances: &LegDistances,
    status: TierStatus,
    step_number: u32,
) -> EngineResult<SegmentRewardPointsResult> {
    let mut audit_steps = Vec::with_capacity(segment.leg_count() + 1);
    let mut step = step_number;
    let mut base_points: u64 = 0;
    let mut minimum_applied_legs = Vec::new();

    for leg in segment.legs() {
        let distance = leg_distance(distances, &leg)?;
        let result = calculate_leg_reward_points(&leg, distance, segment.fare_class(), step)?;
        base_points += result.points;
        audit_steps.push(result.audit_step);
        if result.minimum_applied {
            minimum_applied_legs.push(leg);
        }
        step += 1;
    }

    let bonus = apply_status_bonus(segment_index, base_points, status, step)?;
    audit_steps.push(bonus.audit_step);

    Ok(SegmentRewardPointsResult {
        points: bonus.points,
        minimum_applied_legs,
        audit_steps,
    })
}
