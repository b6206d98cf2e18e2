// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard derivation over a fetched activity sequence.
//!
//! Every view borrows the input and sorts its own vector of references, so
//! the caller's sequence keeps fetch order. Sorts are stable: ties stay in
//! fetch order.

use crate::format::{meters_to_miles, METERS_PER_MILE};
use crate::models::Activity;
use std::cmp::Ordering;

/// How many entries each leaderboard view keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardLimits {
    pub fastest_miles: usize,
    pub fastest_sprints: usize,
    pub fastest_runs: usize,
    pub longest_runs: usize,
    pub most_recent_runs: usize,
}

impl Default for LeaderboardLimits {
    fn default() -> Self {
        Self {
            fastest_miles: 3,
            fastest_sprints: 5,
            fastest_runs: 5,
            longest_runs: 3,
            most_recent_runs: 5,
        }
    }
}

impl LeaderboardLimits {
    /// Same size for every view.
    pub fn uniform(limit: usize) -> Self {
        Self {
            fastest_miles: limit,
            fastest_sprints: limit,
            fastest_runs: limit,
            longest_runs: limit,
            most_recent_runs: limit,
        }
    }
}

/// All runs, in fetch order.
pub fn runs(activities: &[Activity]) -> Vec<&Activity> {
    activities.iter().filter(|a| a.is_run()).collect()
}

pub fn run_count(activities: &[Activity]) -> usize {
    activities.iter().filter(|a| a.is_run()).count()
}

/// Runs of at least one mile, fastest average speed first.
pub fn fastest_miles(activities: &[Activity], limit: usize) -> Vec<&Activity> {
    top_by(
        runs(activities)
            .into_iter()
            .filter(|a| a.distance >= METERS_PER_MILE),
        limit,
        by_speed_desc,
    )
}

/// Runs shorter than one mile, fastest average speed first.
pub fn fastest_sprints(activities: &[Activity], limit: usize) -> Vec<&Activity> {
    top_by(
        runs(activities)
            .into_iter()
            .filter(|a| a.distance < METERS_PER_MILE),
        limit,
        by_speed_desc,
    )
}

/// Runs of any distance, fastest average speed first.
pub fn fastest_runs(activities: &[Activity], limit: usize) -> Vec<&Activity> {
    top_by(runs(activities), limit, by_speed_desc)
}

pub fn longest_runs(activities: &[Activity], limit: usize) -> Vec<&Activity> {
    top_by(runs(activities), limit, |a, b| b.distance.total_cmp(&a.distance))
}

/// Runs by start instant, newest first. Unparseable dates sort last.
pub fn most_recent_runs(activities: &[Activity], limit: usize) -> Vec<&Activity> {
    top_by(runs(activities), limit, |a, b| {
        b.start_instant().cmp(&a.start_instant())
    })
}

/// Distance over all activities (not only runs), rounded to whole miles.
pub fn total_miles(activities: &[Activity]) -> u64 {
    let meters: f64 = activities.iter().map(|a| a.distance).sum();
    meters_to_miles(meters).round() as u64
}

/// Activity with the earliest parseable start instant.
///
/// Computed explicitly rather than taking the last fetched record, since
/// Strava's ordering of the list endpoint is not part of its contract.
/// The first of several equal minima wins.
pub fn earliest_activity(activities: &[Activity]) -> Option<&Activity> {
    activities
        .iter()
        .filter_map(|a| a.start_instant().map(|instant| (instant, a)))
        .fold(None, |earliest, (instant, a)| match earliest {
            Some((best, _)) if best <= instant => earliest,
            _ => Some((instant, a)),
        })
        .map(|(_, a)| a)
}

fn by_speed_desc(a: &&Activity, b: &&Activity) -> Ordering {
    b.average_speed.total_cmp(&a.average_speed)
}

fn top_by<'a, I, F>(activities: I, limit: usize, compare: F) -> Vec<&'a Activity>
where
    I: IntoIterator<Item = &'a Activity>,
    F: FnMut(&&'a Activity, &&'a Activity) -> Ordering,
{
    let mut sorted: Vec<&Activity> = activities.into_iter().collect();
    sorted.sort_by(compare);
    sorted.truncate(limit);
    sorted
}
