//! Property-based tests for the earning and valuation rules.

use std::collections::HashMap;

use proptest::prelude::*;
use rust_decimal::Decimal;

use flight_rewards::calculation::{
    RedemptionValuator, TierPointRule, apply_status_bonus, calculate_leg_reward_points,
    calculate_leg_tier_points, classify_leg,
};
use flight_rewards::catalog::{FARE_CODES, FareClass, TierPointBand};
use flight_rewards::config::ProgramRules;
use flight_rewards::distance::{Coordinates, DistanceOracle};
use flight_rewards::error::{EngineError, EngineResult};
use flight_rewards::models::{Itinerary, Leg, Redemption, Segment, TierStatus};

const CHAIN: [&str; 8] = ["AAA", "BBB", "CCC", "DDD", "EEE", "FFF", "GGG", "HHH"];

struct LineOracle(HashMap<String, f64>);

impl DistanceOracle for LineOracle {
    fn resolve(&self, code: &str) -> EngineResult<Coordinates> {
        self.0
            .get(code)
            .map(|&x| Coordinates::new(x, 0.0))
            .ok_or_else(|| EngineError::UnknownLocation {
                code: code.to_string(),
            })
    }

    fn distance_miles(&self, from: Coordinates, to: Coordinates) -> f64 {
        (from.latitude - to.latitude).abs()
    }
}

fn hubs() -> Vec<String> {
    ProgramRules::default().hubs.into_iter().collect()
}

fn short_haul_plus() -> Vec<String> {
    ProgramRules::default().short_haul_plus.into_iter().collect()
}

proptest! {
    #[test]
    fn prop_leg_points_never_below_minimum(
        code in prop::sample::select(FARE_CODES.to_vec()),
        distance in 0u32..25_000,
    ) {
        let fare = FareClass::new(&code.to_string()).unwrap();
        let leg = Leg::new("AAA", "BBB");
        let result = calculate_leg_reward_points(&leg, distance, &fare, 1).unwrap();

        let minimum = u64::from(fare.minimum_points());
        let raw_points = result.audit_step.output["raw_points"].as_u64().unwrap();

        prop_assert!(result.points >= minimum);
        prop_assert_eq!(result.minimum_applied, raw_points < minimum);
    }

    #[test]
    fn prop_higher_status_never_earns_less(base in 0u64..10_000_000) {
        let points: Vec<u64> = TierStatus::ALL
            .into_iter()
            .map(|status| apply_status_bonus(0, base, status, 1).unwrap().points)
            .collect();

        prop_assert_eq!(points[0], base);
        prop_assert!(points.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_short_haul_plus_beats_distance(
        hub in prop::sample::select(hubs()),
        destination in prop::sample::select(short_haul_plus()),
        code in prop::sample::select(FARE_CODES.to_vec()),
        distance in 0u32..20_000,
        outbound in any::<bool>(),
    ) {
        let fare = FareClass::new(&code.to_string()).unwrap();
        prop_assume!(fare.tier_points().has_band(TierPointBand::ShortHaulPlus));

        let leg = if outbound {
            Leg::new(hub, destination)
        } else {
            Leg::new(destination, hub)
        };
        let rules = ProgramRules::default();

        prop_assert_eq!(
            classify_leg(&leg, distance, &fare, &rules),
            (TierPointRule::ShortHaulPlus, TierPointBand::ShortHaulPlus)
        );
        let result = calculate_leg_tier_points(&leg, distance, &fare, &rules, 1).unwrap();
        prop_assert_eq!(
            Some(result.tier_points as u32),
            fare.tier_points().award(TierPointBand::ShortHaulPlus)
        );
    }

    #[test]
    fn prop_only_catalogued_codes_are_valid(code in any::<char>()) {
        let valid = FARE_CODES.contains(&code.to_ascii_uppercase());
        prop_assert_eq!(FareClass::new(&code.to_string()).is_ok(), valid);
    }

    #[test]
    fn prop_segment_distances_sum_to_leg_distances(
        steps in prop::collection::vec(0u32..5_000, 1..CHAIN.len()),
        cuts in prop::collection::vec(any::<bool>(), CHAIN.len()),
    ) {
        // positions along a line; half-mile offsets exercise rounding
        let mut positions = HashMap::new();
        let mut position = 0.0;
        positions.insert(CHAIN[0].to_string(), position);
        for (i, step) in steps.iter().enumerate() {
            position += f64::from(*step) + 0.5;
            positions.insert(CHAIN[i + 1].to_string(), position);
        }
        let oracle = LineOracle(positions);

        // split the chain into consecutive segments sharing endpoints
        let stops = &CHAIN[..=steps.len()];
        let mut segments = Vec::new();
        let mut start = 0;
        for end in 1..stops.len() {
            if end == stops.len() - 1 || cuts[end] {
                segments.push(Segment::new(&stops[start..=end], "Y").unwrap());
                start = end;
            }
        }
        let itinerary = Itinerary::new(segments).unwrap();

        let per_segment: u32 = itinerary.distance_per_segment(&oracle).unwrap().iter().sum();
        let per_leg: u32 = itinerary.leg_distances(&oracle).unwrap().values().sum();
        prop_assert_eq!(per_segment, per_leg);
    }

    #[test]
    fn prop_redemption_value_sign_follows_cash_difference(
        points in 1u64..1_000_000,
        cash in 0i64..100_000,
        price in 0i64..100_000,
    ) {
        let redemption = Redemption::new(points, Decimal::new(cash, 2)).unwrap();
        let value = RedemptionValuator::default()
            .value_per_point(&redemption, Decimal::new(price, 2));

        if price < cash {
            prop_assert!(value <= Decimal::ZERO);
        } else {
            prop_assert!(value >= Decimal::ZERO);
        }
        prop_assert_eq!(value.scale(), 2);
    }
}
