//! Report models for the flight rewards engine.
//!
//! This module contains the [`RewardsReport`] type and its associated
//! structures that capture everything a trip earns, including per-segment
//! lines, totals and the audit trace, plus the [`RedemptionValuation`]
//! summary for award bookings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TierStatus;

/// Earnings for one segment of a trip.
///
/// # Example
///
/// ```
/// use flight_rewards::models::SegmentRewards;
///
/// let line = SegmentRewards {
///     segment_index: 0,
///     stops: vec!["LHR".to_string(), "JFK".to_string()],
///     fare_code: 'Y',
///     distance_miles: 3450,
///     reward_points: 3450,
///     tier_points: 70,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRewards {
    /// Zero-based position of the segment in the itinerary.
    pub segment_index: usize,
    /// Stop codes in flight order.
    pub stops: Vec<String>,
    /// The fare class booking code.
    pub fare_code: char,
    /// Total distance of the segment in whole miles.
    pub distance_miles: u32,
    /// Reward points earned, including the status bonus.
    pub reward_points: u64,
    /// Tier points earned.
    pub tier_points: u64,
}

/// Aggregated totals for a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardTotals {
    /// Total distance flown in whole miles.
    pub distance_miles: u64,
    /// Total reward points earned.
    pub reward_points: u64,
    /// Total tier points earned.
    pub tier_points: u64,
    /// Ticket price divided by tier points, to 2 dp.
    pub cost_per_tier_point: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate results that could not be fully calculated but do not
/// invalidate the rest of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Everything a carrier trip earns.
///
/// Produced by [`RewardEngine::report`](crate::calculation::RewardEngine::report).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardsReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was produced.
    pub calculated_at: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The operating carrier.
    pub carrier: String,
    /// The traveller's tier status.
    pub tier_status: TierStatus,
    /// The cash price of the ticket.
    pub ticket_price: Decimal,
    /// One line per segment, in itinerary order.
    pub segments: Vec<SegmentRewards>,
    /// Aggregated totals.
    pub totals: RewardTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

/// The value of an award redemption against a cash price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionValuation {
    /// Points needed for the booking.
    pub points_required: u64,
    /// Cash co-payment needed on top of the points.
    pub cash_required: Decimal,
    /// The cash price the redemption is compared against.
    pub reference_price: Decimal,
    /// Pence of value per point. Negative if the co-payment exceeds the price.
    pub value_per_point: Decimal,
    /// Cash value of the points and co-payment at the floor point value.
    pub floor_cash_equivalent: Decimal,
    /// Reference price minus the floor cash equivalent.
    pub saving: Decimal,
}
