//! Configuration loading and management for the flight rewards engine.
//!
//! This module provides functionality to load programme rules and the
//! airport table from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use flight_rewards::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ba").unwrap();
//! println!("Loaded programme: {}", config.rules().programme);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AirportsConfig, ProgramRules};
