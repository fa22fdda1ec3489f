//! Configuration types for the loyalty programme.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::distance::Airport;

const BA_HUBS: [&str; 3] = ["LHR", "LGW", "LCY"];

const BA_SHORT_HAUL_PLUS: [&str; 33] = [
    "ATH", "CHQ", "CFU", "HER", "KLX", "EFL", "KGS", "JMK", "RHO", "JTR", "JSI", "SKG", "ZTH",
    "LCA", "PFO", "LPA", "ACE", "TFS", "MLA", "KEF", "AYT", "DLM", "IST", "FNC", "PDL", "TER",
    "TIA", "SOF", "OTP", "CTA", "ALG", "RAC", "HEL",
];

/// Route rules for a carrier's loyalty programme.
///
/// Loaded from `program.yaml`. The default is the British Airways Executive
/// Club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramRules {
    /// The operating carrier's name.
    pub carrier: String,
    /// The loyalty programme's name.
    pub programme: String,
    /// Airports the carrier treats as home bases.
    pub hubs: BTreeSet<String>,
    /// Destinations that earn the short-haul-plus tier point award from a hub.
    pub short_haul_plus: BTreeSet<String>,
    /// Destination that earns the long-haul award from a hub regardless of distance.
    pub special_route_destination: String,
}

impl Default for ProgramRules {
    fn default() -> Self {
        Self {
            carrier: "British Airways".to_string(),
            programme: "Executive Club".to_string(),
            hubs: BA_HUBS.iter().map(|c| c.to_string()).collect(),
            short_haul_plus: BA_SHORT_HAUL_PLUS.iter().map(|c| c.to_string()).collect(),
            special_route_destination: "SYD".to_string(),
        }
    }
}

impl ProgramRules {
    /// Returns a copy with every airport code trimmed and upper-cased.
    pub fn normalized(self) -> Self {
        let normalize = |code: String| code.trim().to_uppercase();
        Self {
            carrier: self.carrier,
            programme: self.programme,
            hubs: self.hubs.into_iter().map(normalize).collect(),
            short_haul_plus: self.short_haul_plus.into_iter().map(normalize).collect(),
            special_route_destination: normalize(self.special_route_destination),
        }
    }

    /// Returns true if `code` is a hub.
    pub fn is_hub(&self, code: &str) -> bool {
        self.hubs.contains(code)
    }

    /// Returns true if `code` is a short-haul-plus destination.
    pub fn is_short_haul_plus(&self, code: &str) -> bool {
        self.short_haul_plus.contains(code)
    }

    /// Returns true if `code` is the special long-haul destination.
    pub fn is_special_route_destination(&self, code: &str) -> bool {
        self.special_route_destination == code
    }
}

/// Airport table file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct AirportsConfig {
    /// Map of IATA code to airport details.
    pub airports: BTreeMap<String, Airport>,
}
