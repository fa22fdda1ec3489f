//! Reference tables for the British Airways Executive Club earning chart.
//!
//! Two partitions of the legal fare codes exist: one for Avios earning
//! (multiplier and per-leg minimum) and one for tier point awards. They do not
//! line up exactly, e.g. `E` and `T` earn Avios like economy but tier points
//! like premium economy.

use super::fare_class::TierPointBand::{
    self, LongHaul, ShortHaulPlus, Under2000, Under6000, Under10000,
};

/// Every booking code accepted by the catalog.
pub const FARE_CODES: [char; 22] = [
    'Q', 'O', 'G', 'K', 'L', 'M', 'N', 'S', 'V', 'Y', 'B', 'H', 'E', 'T', 'W', 'R', 'I', 'J', 'C',
    'D', 'A', 'F',
];

/// A group of fare codes sharing an Avios multiplier and minimum.
pub(super) struct EarningBand {
    pub codes: &'static [char],
    /// Multiplier as `(mantissa, scale)`, e.g. `(25, 2)` is 0.25.
    pub multiplier: (i64, u32),
    pub minimum: u32,
}

/// A group of fare codes sharing a tier point award table.
pub(super) struct TierPointGroup {
    pub codes: &'static [char],
    pub awards: &'static [(TierPointBand, u32)],
}

pub(super) const EARNING_BANDS: [EarningBand; 6] = [
    EarningBand {
        codes: &['Q', 'O', 'G'],
        multiplier: (25, 2),
        minimum: 125,
    },
    EarningBand {
        codes: &['K', 'L', 'M', 'N', 'S', 'V'],
        multiplier: (25, 2),
        minimum: 125,
    },
    EarningBand {
        codes: &['Y', 'B', 'H', 'E', 'T'],
        multiplier: (1, 0),
        minimum: 500,
    },
    EarningBand {
        codes: &['W', 'R', 'I'],
        multiplier: (15, 1),
        minimum: 750,
    },
    EarningBand {
        codes: &['J', 'C', 'D', 'A'],
        multiplier: (25, 1),
        minimum: 1250,
    },
    EarningBand {
        codes: &['F'],
        multiplier: (3, 0),
        minimum: 1500,
    },
];

pub(super) const TIER_POINT_GROUPS: [TierPointGroup; 6] = [
    TierPointGroup {
        codes: &['Q', 'O', 'G'],
        awards: &[
            (Under2000, 5),
            (Under6000, 20),
            (Under10000, 20),
            (ShortHaulPlus, 10),
            (LongHaul, 30),
        ],
    },
    TierPointGroup {
        codes: &['K', 'L', 'M', 'N', 'S', 'V'],
        awards: &[
            (Under2000, 10),
            (Under6000, 35),
            (Under10000, 40),
            (ShortHaulPlus, 20),
            (LongHaul, 60),
        ],
    },
    TierPointGroup {
        codes: &['Y', 'B', 'H'],
        awards: &[
            (Under2000, 20),
            (Under6000, 70),
            (Under10000, 80),
            (ShortHaulPlus, 40),
            (LongHaul, 120),
        ],
    },
    TierPointGroup {
        codes: &['R', 'I', 'J', 'C', 'D'],
        awards: &[
            (Under2000, 40),
            (Under6000, 140),
            (Under10000, 160),
            (ShortHaulPlus, 80),
            (LongHaul, 240),
        ],
    },
    // Premium economy and first are never sold below 2000 miles.
    TierPointGroup {
        codes: &['E', 'T', 'W'],
        awards: &[(Under6000, 90), (Under10000, 100), (LongHaul, 150)],
    },
    TierPointGroup {
        codes: &['A', 'F'],
        awards: &[(Under6000, 210), (Under10000, 240), (LongHaul, 360)],
    },
];
