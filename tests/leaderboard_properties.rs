// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Property tests for leaderboard derivation and formatting.

use proptest::prelude::*;
use run_dashboard::format::{round_to_2, METERS_PER_MILE};
use run_dashboard::models::Activity;
use run_dashboard::services::leaderboard;

mod common;
use common::make_activity;

fn activity_strategy() -> impl Strategy<Value = Activity> {
    (
        any::<u32>(),
        prop_oneof![Just("Run"), Just("Ride"), Just("Walk")],
        // Bias toward the mile boundary
        prop_oneof![0.0..5000.0f64, Just(METERS_PER_MILE)],
        0.0..8.0f64,
        0u32..365,
    )
        .prop_map(|(id, kind, distance, speed, day)| {
            let date = chrono::NaiveDate::from_yo_opt(2024, day + 1)
                .unwrap()
                .format("%Y-%m-%dT08:00:00Z")
                .to_string();
            make_activity(id as u64, kind, distance, speed, &date)
        })
}

proptest! {
    /// Invariant: fastest miles and fastest sprints partition the runs.
    #[test]
    fn prop_mile_boundary_partitions_runs(
        activities in prop::collection::vec(activity_strategy(), 0..40)
    ) {
        let all = usize::MAX;
        let miles = leaderboard::fastest_miles(&activities, all);
        let sprints = leaderboard::fastest_sprints(&activities, all);

        prop_assert_eq!(miles.len() + sprints.len(), leaderboard::run_count(&activities));
        prop_assert!(miles.iter().all(|a| a.distance >= METERS_PER_MILE));
        prop_assert!(sprints.iter().all(|a| a.distance < METERS_PER_MILE));
    }

    /// Invariant: views are sorted, bounded, and leave the input untouched.
    #[test]
    fn prop_views_sorted_bounded_non_mutating(
        activities in prop::collection::vec(activity_strategy(), 0..40),
        limit in 0usize..8
    ) {
        let before = activities.clone();

        let fastest = leaderboard::fastest_runs(&activities, limit);
        let longest = leaderboard::longest_runs(&activities, limit);
        let recent = leaderboard::most_recent_runs(&activities, limit);

        prop_assert_eq!(&activities, &before);
        prop_assert!(fastest.len() <= limit);
        prop_assert!(longest.len() <= limit);
        prop_assert!(recent.len() <= limit);
        prop_assert!(fastest.windows(2).all(|w| w[0].average_speed >= w[1].average_speed));
        prop_assert!(longest.windows(2).all(|w| w[0].distance >= w[1].distance));
        prop_assert!(recent.windows(2).all(|w| w[0].start_instant() >= w[1].start_instant()));

        // Independent of the order in which views are computed
        let longest_again = leaderboard::longest_runs(&activities, limit);
        prop_assert_eq!(longest, longest_again);
    }

    /// Invariant: the earliest activity is never later than any other.
    #[test]
    fn prop_earliest_is_minimum(
        activities in prop::collection::vec(activity_strategy(), 1..40)
    ) {
        let earliest = leaderboard::earliest_activity(&activities).unwrap();
        let instant = earliest.start_instant();
        prop_assert!(activities.iter().all(|a| a.start_instant() >= instant));
    }

    /// Invariant: rounding a two-decimal value is idempotent.
    #[test]
    fn prop_round_to_2_idempotent(cents in 0u32..10_000_000) {
        let value = cents as f64 / 100.0;
        let once = round_to_2(value);
        let twice = round_to_2(once.parse::<f64>().unwrap());
        prop_assert_eq!(once, twice);
    }
}
