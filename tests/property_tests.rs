//! Property-based tests for the scorer and distance weighting.
//!
//! These use `proptest` to check invariants that must hold for every
//! reading, complementing the worked examples in `scoring_behaviour.rs`.
//!
//! # Invariants tested
//!
//! - **Score range:** daytime scores stay in `0..=10` for every skill.
//! - **Night suppression:** night scores never exceed 0.5.
//! - **Reasons:** one reason per stage, plus one at night.
//! - **Distance:** symmetric, bounded by half the globe, triangle inequality.
//! - **Distance weight:** strictly decreasing, harsh below lenient.

use proptest::prelude::*;
use surfnotify::{
    Coordinate, ScoringInput, SkillLevel, SpotCatalog, Strictness, distance_km, distance_score,
    nearby_spots, score_spot,
};

const EARTH_RADIUS_KM: f64 = 6371.0;
const TOLERANCE_KM: f64 = 1e-6;

fn skill_level() -> impl Strategy<Value = SkillLevel> {
    prop_oneof![
        Just(SkillLevel::Beginner),
        Just(SkillLevel::Intermediate),
        Just(SkillLevel::Advanced),
    ]
}

fn strictness() -> impl Strategy<Value = Strictness> {
    prop_oneof![Just(Strictness::Harsh), Just(Strictness::Lenient)]
}

/// Readings across and beyond every band the scorer knows about
fn scoring_input() -> impl Strategy<Value = ScoringInput> {
    (
        (0.0..10.0f64, 0.0..25.0f64, 0.0..360.0f64),
        (0.0..10.0f64, 0.0..25.0f64),
        (
            prop::option::of(0.0..120.0f64),
            prop::option::of(0.0..150.0f64),
            0.0..360.0f64,
        ),
        0.0..360.0f64,
        skill_level(),
    )
        .prop_map(
            |(
                (swell_height, swell_period, swell_direction),
                (wave_height, wave_period),
                (wind_speed_2m, wind_speed_10m, wind_direction),
                spot_orientation,
                ability,
            )| ScoringInput {
                swell_height,
                swell_period,
                swell_direction,
                wave_height,
                wave_period,
                wind_speed_2m,
                wind_speed_10m,
                wind_direction,
                spot_orientation,
                ability,
                local_hour: None,
            },
        )
}

fn day_hour() -> impl Strategy<Value = Option<u8>> {
    prop_oneof![Just(None), (5u8..=22).prop_map(Some)]
}

fn night_hour() -> impl Strategy<Value = u8> {
    prop_oneof![0u8..5, Just(23u8)]
}

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0..=90.0f64, -180.0..=180.0f64).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: a daytime score is always within `0..=10`, with one
    /// reason from each of the four stages.
    #[test]
    fn daytime_score_stays_in_range(input in scoring_input(), hour in day_hour()) {
        let result = score_spot(&ScoringInput { local_hour: hour, ..input });

        prop_assert!((0.0..=10.0).contains(&result.score), "score {}", result.score);
        prop_assert_eq!(result.reasons.len(), 4);
    }

    /// Property: at night the score is scaled to at most 0.5 and a fifth
    /// reason explains why.
    #[test]
    fn night_score_is_suppressed(input in scoring_input(), hour in night_hour()) {
        let day = score_spot(&ScoringInput { local_hour: Some(12), ..input });
        let night = score_spot(&ScoringInput { local_hour: Some(hour), ..input });

        prop_assert!((0.0..=0.5).contains(&night.score), "score {}", night.score);
        prop_assert!((night.score - day.score * 0.05).abs() < 1e-12);
        prop_assert_eq!(night.reasons.len(), 5);
        prop_assert!(night.reasons[4].starts_with("Night-time"));
        prop_assert_eq!(&night.reasons[..4], &day.reasons[..]);
    }

    /// Property: scoring is deterministic.
    #[test]
    fn scoring_is_deterministic(input in scoring_input()) {
        prop_assert_eq!(score_spot(&input), score_spot(&input));
    }

    /// Property: distance is symmetric, non-negative and never more than
    /// half the globe.
    #[test]
    fn distance_is_symmetric_and_bounded(a in coordinate(), b in coordinate()) {
        let ab = distance_km(a, b);
        let ba = distance_km(b, a);

        prop_assert!((ab - ba).abs() < TOLERANCE_KM, "{ab} vs {ba}");
        prop_assert!(ab >= 0.0);
        prop_assert!(ab <= std::f64::consts::PI * EARTH_RADIUS_KM + TOLERANCE_KM);
        prop_assert!(distance_km(a, a).abs() < TOLERANCE_KM);
    }

    /// Property: going via a third point is never shorter.
    #[test]
    fn distance_obeys_triangle_inequality(
        a in coordinate(),
        b in coordinate(),
        c in coordinate(),
    ) {
        let direct = distance_km(a, c);
        let via = distance_km(a, b) + distance_km(b, c);

        prop_assert!(direct <= via * (1.0 + 1e-9) + TOLERANCE_KM, "{direct} > {via}");
    }

    /// Property: the distance weight falls as distance grows and stays in
    /// `(0, 1]`.
    #[test]
    fn distance_score_decreases(
        near in 0.0..5000.0f64,
        extra in 0.01..1000.0f64,
        strictness in strictness(),
    ) {
        let near_score = distance_score(near, strictness);
        let far_score = distance_score(near + extra, strictness);

        prop_assert!(far_score < near_score);
        prop_assert!(far_score > 0.0);
        prop_assert!(near_score <= 1.0);
    }

    /// Property: harsh strictness always weighs a distant spot lower.
    #[test]
    fn harsh_is_below_lenient(distance in 0.01..5000.0f64) {
        prop_assert!(
            distance_score(distance, Strictness::Harsh)
                < distance_score(distance, Strictness::Lenient)
        );
    }

    /// Property: every catalog spot lands on exactly one side of the radius.
    #[test]
    fn nearby_partition_covers_catalog(center in coordinate(), radius in 0.1..2000.0f64) {
        let catalog = SpotCatalog::bundled().unwrap();
        let result = nearby_spots(catalog.all(), center, radius);

        prop_assert_eq!(result.within.len() + result.outside.len(), catalog.len());
        prop_assert!(result.within.iter().all(|s| s.distance_km <= radius));
        prop_assert!(result.outside.iter().all(|s| s.distance_km > radius));
    }
}
