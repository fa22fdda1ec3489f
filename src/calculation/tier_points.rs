//! Tier point calculation functionality.
//!
//! This module determines which tier point award a leg earns. Two route rules
//! are checked before falling back to the distance band:
//! 1. hub to a short-haul-plus destination earns the `SH+` award
//! 2. hub to the special long-haul destination earns the `SYD` award
//! 3. otherwise the leg's distance picks the band
//!
//! The `SYD` award is shared by rule 2 and the 10000+ mile band, but the
//! audit trail records which rule selected it.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{FareClass, TierPointBand};
use crate::config::ProgramRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Leg, LegDistances, Segment};

use super::leg_distance;

/// The rule that selected a leg's tier point band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierPointRule {
    /// Hub to a short-haul-plus destination.
    ShortHaulPlus,
    /// Hub to the special long-haul destination.
    SpecialRoute,
    /// Banded by distance.
    DistanceBand,
}

impl TierPointRule {
    /// Snake-case identifier used in audit output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TierPointRule::ShortHaulPlus => "short_haul_plus",
            TierPointRule::SpecialRoute => "special_route",
            TierPointRule::DistanceBand => "distance_band",
        }
    }
}

/// The result of calculating tier points for one leg.
#[derive(Debug, Clone)]
pub struct LegTierPointsResult {
    /// Tier points earned on the leg.
    pub tier_points: u64,
    /// The rule that selected the band.
    pub rule: TierPointRule,
    /// The band the award was taken from.
    pub band: TierPointBand,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of calculating tier points for a whole segment.
#[derive(Debug, Clone)]
pub struct SegmentTierPointsResult {
    /// Tier points earned on the segment.
    pub tier_points: u64,
    /// One step per leg.
    pub audit_steps: Vec<AuditStep>,
}

/// Decides which rule and band apply to a leg.
///
/// The short-haul-plus rule only applies to fares whose table has an `SH+`
/// award; for other fares the leg falls through to the next rule.
///
/// # Examples
///
/// ```
/// use flight_rewards::calculation::{TierPointRule, classify_leg};
/// use flight_rewards::catalog::{FareClass, TierPointBand};
/// use flight_rewards::config::ProgramRules;
/// use flight_rewards::models::Leg;
///
/// let rules = ProgramRules::default();
/// let fare = FareClass::new("Q").unwrap();
///
/// let (rule, band) = classify_leg(&Leg::new("LHR", "ATH"), 1500, &fare, &rules);
/// assert_eq!(rule, TierPointRule::ShortHaulPlus);
/// assert_eq!(band, TierPointBand::ShortHaulPlus);
/// ```
pub fn classify_leg(
    leg: &Leg,
    distance_miles: u32,
    fare_class: &FareClass,
    rules: &ProgramRules,
) -> (TierPointRule, TierPointBand) {
    let is_hub = |code: &str| rules.is_hub(code);

    if fare_class.tier_points().has_band(TierPointBand::ShortHaulPlus)
        && leg.connects(is_hub, |code| rules.is_short_haul_plus(code))
    {
        return (TierPointRule::ShortHaulPlus, TierPointBand::ShortHaulPlus);
    }

    if leg.connects(is_hub, |code| rules.is_special_route_destination(code)) {
        return (TierPointRule::SpecialRoute, TierPointBand::LongHaul);
    }

    (
        TierPointRule::DistanceBand,
        TierPointBand::for_distance(distance_miles),
    )
}

/// Calculates the tier points earned on a single leg.
///
/// # Errors
///
/// Returns `MissingTierPointBand` if the fare's table has no award for the
/// band the leg falls into, e.g. a sub-2000 mile leg booked in first.
pub fn calculate_leg_tier_points(
    leg: &Leg,
    distance_miles: u32,
    fare_class: &FareClass,
    rules: &ProgramRules,
    step_number: u32,
) -> EngineResult<LegTierPointsResult> {
    let (rule, band) = classify_leg(leg, distance_miles, fare_class, rules);

    let tier_points = match fare_class.tier_points().award(band) {
        Some(points) => u64::from(points),
        None => {
            warn!(
                leg = %leg,
                fare_code = %fare_class.code(),
                band = %band,
                "Fare class has no tier point award for band"
            );
            return Err(EngineError::MissingTierPointBand {
                fare_code: fare_class.code(),
                band: band.to_string(),
            });
        }
    };

    let reasoning = match rule {
        TierPointRule::ShortHaulPlus => format!(
            "{} links a hub with a short-haul-plus destination, earning the {} award of {}",
            leg, band, tier_points
        ),
        TierPointRule::SpecialRoute => format!(
            "{} links a hub with {}, earning the {} award of {}",
            leg, rules.special_route_destination, band, tier_points
        ),
        TierPointRule::DistanceBand => format!(
            "{} miles falls in the {} band, earning {}",
            distance_miles, band, tier_points
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "leg_tier_points".to_string(),
        rule_name: "Leg Tier Points".to_string(),
        input: serde_json::json!({
            "leg": leg.to_string(),
            "distance_miles": distance_miles,
            "fare_code": fare_class.code().to_string()
        }),
        output: serde_json::json!({
            "rule": rule.as_str(),
            "band": band.label(),
            "tier_points": tier_points
        }),
        reasoning,
    };

    Ok(LegTierPointsResult {
        tier_points,
        rule,
        band,
        audit_step,
    })
}

/// Calculates the tier points for every leg of a segment and sums them.
///
/// Tier status never bonuses tier points.
pub fn calculate_segment_tier_points(
    segment: &Segment,
    distances: &LegDistances,
    rules: &ProgramRules,
    step_number: u32,
) -> EngineResult<SegmentTierPointsResult> {
    let mut audit_steps = Vec::with_capacity(segment.leg_count());
    let mut tier_points: u64 = 0;

    for (offset, leg) in segment.legs().enumerate() {
        let distance = leg_distance(distances, &leg)?;
        let result = calculate_leg_tier_points(
            &leg,
            distance,
            segment.fare_class(),
            rules,
            step_number + offset as u32,
        )?;
        tier_points += result.tier_points;
        audit_steps.push(result.audit_step);
    }

    Ok(SegmentTierPointsResult {
        tier_points,
        audit_steps,
    })
}
