//! The reward engine.
//!
//! [`RewardEngine`] ties a [`CarrierTrip`] to a distance oracle and a set of
//! programme rules, and answers the per-segment earning questions for it.
//! [`RewardEngine::report`] runs every rule once and records an audit trace.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::ProgramRules;
use crate::distance::DistanceOracle;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CarrierTrip, RewardTotals, RewardsReport, SegmentRewards,
};

use super::cost_per_tier_point::calculate_cost_per_tier_point;
use super::reward_points::calculate_segment_reward_points;
use super::tier_points::calculate_segment_tier_points;

/// Warning code recorded for each leg that earned its fare's minimum points.
pub const MINIMUM_POINTS_WARNING: &str = "MINIMUM_POINTS_APPLIED";

/// Calculates what a trip earns with one carrier.
///
/// Leg distances are measured through the trip's itinerary, which caches them
/// on first use; repeated calls never re-query the oracle.
///
/// # Example
///
/// ```no_run
/// use flight_rewards::calculation::RewardEngine;
/// use flight_rewards::config::ConfigLoader;
/// use flight_rewards::models::{CarrierTrip, Itinerary, Segment, TierStatus};
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::load("./config/ba").unwrap();
/// let itinerary = Itinerary::new(vec![Segment::new(["LHR", "JFK"], "Y").unwrap()]).unwrap();
/// let trip = CarrierTrip::new(itinerary, Decimal::new(450, 0), TierStatus::Blue).unwrap();
///
/// let engine = RewardEngine::new(&trip, config.airports(), config.rules());
/// println!("{:?}", engine.points_per_segment().unwrap());
/// ```
#[derive(Debug)]
pub struct RewardEngine<'a, O: DistanceOracle + ?Sized> {
    trip: &'a CarrierTrip,
    oracle: &'a O,
    rules: &'a ProgramRules,
}

impl<O: DistanceOracle + ?Sized> Clone for RewardEngine<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: DistanceOracle + ?Sized> Copy for RewardEngine<'_, O> {}

impl<'a, O: DistanceOracle + ?Sized> RewardEngine<'a, O> {
    /// Creates an engine for `trip`.
    pub fn new(trip: &'a CarrierTrip, oracle: &'a O, rules: &'a ProgramRules) -> Self {
        Self {
            trip,
            oracle,
            rules,
        }
    }

    /// The trip being evaluated.
    pub fn trip(&self) -> &'a CarrierTrip {
        self.trip
    }

    /// Reward points earned on each segment, status bonus included.
    pub fn points_per_segment(&self) -> EngineResult<Vec<u64>> {
        let distances = self.trip.itinerary().leg_distances(self.oracle)?;
        let status = self.trip.tier_status();

        self.trip
            .itinerary()
            .segments()
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                calculate_segment_reward_points(index, segment, distances, status, 1)
                    .map(|result| result.points)
            })
            .collect()
    }

    /// Tier points earned on each segment.
    pub fn tier_points_per_segment(&self) -> EngineResult<Vec<u64>> {
        let distances = self.trip.itinerary().leg_distances(self.oracle)?;

        self.trip
            .itinerary()
            .segments()
            .iter()
            .map(|segment| {
                calculate_segment_tier_points(segment, distances, self.rules, 1)
                    .map(|result| result.tier_points)
            })
            .collect()
    }

    /// Ticket price divided by total tier points, to 2 dp.
    ///
    /// # Errors
    ///
    /// Returns `ZeroTierPoints` if the trip earns no tier points.
    pub fn cost_per_tier_point(&self) -> EngineResult<Decimal> {
        let total: u64 = self.tier_points_per_segment()?.iter().sum();
        calculate_cost_per_tier_point(self.trip.ticket_price(), total).inspect_err(|_| {
            warn!(
                ticket_price = %self.trip.ticket_price(),
                "Trip earns no tier points"
            );
        })
    }

    /// Whole-mile distance of each segment.
    pub fn distance_per_segment(&self) -> EngineResult<Vec<u32>> {
        self.trip.itinerary().distance_per_segment(self.oracle)
    }

    /// Runs every rule and produces a full report with audit trace.
    ///
    /// Each leg that earned its fare minimum is flagged with a
    /// `MINIMUM_POINTS_APPLIED` warning.
    pub fn report(&self) -> EngineResult<RewardsReport> {
        let start_time = Instant::now();
        let report_id = Uuid::new_v4();
        let itinerary = self.trip.itinerary();
        let status = self.trip.tier_status();

        info!(
            report_id = %report_id,
            segments = itinerary.segments().len(),
            tier_status = %status,
            "Calculating trip rewards"
        );

        let distances = itinerary.leg_distances(self.oracle)?;
        let segment_distances = itinerary.distance_per_segment(self.oracle)?;

        let mut steps: Vec<AuditStep> = Vec::new();
        let mut warnings: Vec<AuditWarning> = Vec::new();
        let mut step_number: u32 = 1;
        let mut segments = Vec::with_capacity(itinerary.segments().len());

        for (index, (segment, distance_miles)) in itinerary
            .segments()
            .iter()
            .zip(segment_distances)
            .enumerate()
        {
            let rewards =
                calculate_segment_reward_points(index, segment, distances, status, step_number)?;
            step_number += rewards.audit_steps.len() as u32;
            steps.extend(rewards.audit_steps);
            warnings.extend(rewards.minimum_applied_legs.iter().map(|leg| AuditWarning {
                code: MINIMUM_POINTS_WARNING.to_string(),
                message: format!(
                    "{} earned the fare class {} minimum of {} points",
                    leg,
                    segment.fare_class().code(),
                    segment.fare_class().minimum_points()
                ),
                severity: "info".to_string(),
            }));

            let tiers = calculate_segment_tier_points(segment, distances, self.rules, step_number)?;
            step_number += tiers.audit_steps.len() as u32;
            steps.extend(tiers.audit_steps);

            debug!(
                segment_index = index,
                reward_points = rewards.points,
                tier_points = tiers.tier_points,
                "Calculated segment"
            );

            segments.push(SegmentRewards {
                segment_index: index,
                stops: segment.stops().to_vec(),
                fare_code: segment.fare_class().code(),
                distance_miles,
                reward_points: rewards.points,
                tier_points: tiers.tier_points,
            });
        }

        let tier_points: u64 = segments.iter().map(|s| s.tier_points).sum();
        let ticket_price = self.trip.ticket_price();

        let cost_per_tier_point = calculate_cost_per_tier_point(ticket_price, tier_points)?;
        steps.push(AuditStep {
            step_number,
            rule_id: "cost_per_tier_point".to_string(),
            rule_name: "Cost Per Tier Point".to_string(),
            input: serde_json::json!({
                "ticket_price": ticket_price.to_string(),
                "tier_points": tier_points
            }),
            output: serde_json::json!({
                "cost_per_tier_point": cost_per_tier_point.to_string()
            }),
            reasoning: format!(
                "{} / {} = {}",
                ticket_price, tier_points, cost_per_tier_point
            ),
        });

        let totals = RewardTotals {
            distance_miles: segments.iter().map(|s| u64::from(s.distance_miles)).sum(),
            reward_points: segments.iter().map(|s| s.reward_points).sum(),
            tier_points,
            cost_per_tier_point,
        };

        let duration_us = start_time.elapsed().as_micros() as u64;
        info!(
            report_id = %report_id,
            reward_points = totals.reward_points,
            tier_points = totals.tier_points,
            duration_us,
            "Trip rewards calculated"
        );

        Ok(RewardsReport {
            report_id,
            calculated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            carrier: self.rules.carrier.clone(),
            tier_status: status,
            ticket_price,
            segments,
            totals,
            audit_trace: AuditTrace {
                steps,
                warnings,
                duration_us,
            },
        })
    }
}
