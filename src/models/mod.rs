//! Core data models for the flight rewards engine.
//!
//! This module contains the itinerary structure, trips, redemptions and the
//! report types produced by the engine.

mod itinerary;
mod redemption;
mod rewards_report;
mod segment;
mod trip;

pub use itinerary::{Itinerary, LegDistances};
pub use redemption::Redemption;
pub use rewards_report::{
    AuditStep, AuditTrace, AuditWarning, RedemptionValuation, RewardTotals, RewardsReport,
    SegmentRewards,
};
pub use segment::{Leg, Segment};
pub use trip::{CarrierTrip, TierStatus, Trip};
