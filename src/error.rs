//! Error types for the flight rewards engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building itineraries,
//! resolving distances and calculating rewards.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the flight rewards engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use flight_rewards::error::EngineError;
///
/// let error = EngineError::InvalidFareCode {
///     code: "Z".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid fare class code: Z");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The fare class code is not one of the legal booking codes.
    #[error("Invalid fare class code: {code}")]
    InvalidFareCode {
        /// The code that was rejected.
        code: String,
    },

    /// A location code could not be resolved to coordinates.
    #[error("Unknown location: {code}")]
    UnknownLocation {
        /// The location code that could not be resolved.
        code: String,
    },

    /// The trip earns no tier points, so cost per tier point is undefined.
    #[error("Cannot calculate cost per tier point for price {price}: trip earns zero tier points")]
    ZeroTierPoints {
        /// The ticket price of the trip.
        price: Decimal,
    },

    /// A fare class has no tier point award for the band a leg falls into.
    #[error("Fare class '{fare_code}' has no tier point award for band {band}")]
    MissingTierPointBand {
        /// The fare class code.
        fare_code: char,
        /// The band that was looked up.
        band: String,
    },

    /// A segment was invalid or contained inconsistent data.
    #[error("Invalid segment: {message}")]
    InvalidSegment {
        /// A description of what made the segment invalid.
        message: String,
    },

    /// An itinerary was invalid.
    #[error("Invalid itinerary: {message}")]
    InvalidItinerary {
        /// A description of what made the itinerary invalid.
        message: String,
    },

    /// A trip field was invalid.
    #[error("Invalid trip field '{field}': {message}")]
    InvalidTrip {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A tier status string did not name a known status.
    #[error("Invalid tier status: {status}")]
    InvalidTierStatus {
        /// The status that was rejected.
        status: String,
    },

    /// A redemption field was invalid.
    #[error("Invalid redemption field '{field}': {message}")]
    InvalidRedemption {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
