// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard view model handed to the presentation layer.
//!
//! Built from scratch for every request; nothing here is stored.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::format::{format_date, meters_per_sec_to_min_per_mile, round_to_2};
use crate::models::Activity;
use crate::services::fetcher::FetchResult;
use crate::services::leaderboard::{self, LeaderboardLimits};

/// One row of a leaderboard, already formatted for display.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LeaderboardEntry {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub name: String,
    /// Start date as `YYYY/MM/DD`
    pub date: String,
    /// Distance in miles with two decimals
    pub miles: String,
    /// Pace as `M:SS` per mile; absent when the activity never moved
    pub pace: Option<String>,
    pub distance_meters: f64,
    pub average_speed: f64,
}

impl From<&Activity> for LeaderboardEntry {
    fn from(activity: &Activity) -> Self {
        let pace = match meters_per_sec_to_min_per_mile(activity.average_speed) {
            Ok(pace) => Some(pace),
            Err(e) => {
                tracing::debug!(activity_id = activity.id, error = %e, "No pace for activity");
                None
            }
        };

        Self {
            id: activity.id,
            name: activity.name.clone(),
            date: format_date(&activity.start_date),
            miles: round_to_2(activity.distance_miles()),
            pace,
            distance_meters: activity.distance,
            average_speed: activity.average_speed,
        }
    }
}

/// Aggregates and leaderboards for one render.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Dashboard {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub run_count: usize,
    /// Distance over all activities, whole miles
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_miles: u64,
    /// Runs of at least a mile, ranked by average speed
    pub fastest_miles: Vec<LeaderboardEntry>,
    /// Runs under a mile, ranked by average speed
    pub fastest_sprints: Vec<LeaderboardEntry>,
    pub fastest_runs: Vec<LeaderboardEntry>,
    pub longest_runs: Vec<LeaderboardEntry>,
    pub most_recent_runs: Vec<LeaderboardEntry>,
    /// Earliest activity date as `YYYY/MM/DD`, empty when there are none
    pub earliest_date: String,
    pub pages_fetched: u32,
}

impl Dashboard {
    /// Derive every view from a fetch result.
    pub fn build(fetched: &FetchResult, limits: &LeaderboardLimits) -> Self {
        let activities = fetched.activities.as_slice();

        Self {
            run_count: leaderboard::run_count(activities),
            total_miles: leaderboard::total_miles(activities),
            fastest_miles: entries(leaderboard::fastest_miles(activities, limits.fastest_miles)),
            fastest_sprints: entries(leaderboard::fastest_sprints(
                activities,
                limits.fastest_sprints,
            )),
            fastest_runs: entries(leaderboard::fastest_runs(activities, limits.fastest_runs)),
            longest_runs: entries(leaderboard::longest_runs(activities, limits.longest_runs)),
            most_recent_runs: entries(leaderboard::most_recent_runs(
                activities,
                limits.most_recent_runs,
            )),
            earliest_date: leaderboard::earliest_activity(activities)
                .map(|a| format_date(&a.start_date))
                .unwrap_or_default(),
            pages_fetched: fetched.pages_fetched,
        }
    }
}

fn entries(activities: Vec<&Activity>) -> Vec<LeaderboardEntry> {
    activities.into_iter().map(LeaderboardEntry::from).collect()
}
