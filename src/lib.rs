//! Loyalty programme economics for airline itineraries
//!
//! This crate calculates the reward points, tier points and cost per tier
//! point a trip earns under the British Airways Executive Club fare class
//! tables, and values award redemptions against cash fares.

#![warn(missing_docs)]

pub mod calculation;
pub mod catalog;
pub mod config;
pub mod distance;
pub mod error;
pub mod models;
pub mod telemetry;
