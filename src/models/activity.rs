// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity model as returned by the list endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::format::meters_to_miles;

/// Activity classification counted as a run.
pub const RUN_TYPE: &str = "Run";

/// Summary activity from `GET /athlete/activities`.
///
/// Only the fields the dashboard uses are kept; everything else in the
/// Strava payload is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    /// Strava activity ID
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    /// Activity name/title
    #[serde(default)]
    pub name: String,
    /// Distance in meters
    pub distance: f64,
    /// Moving time in seconds
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub moving_time: u64,
    /// Average speed in meters per second (zero for stationary activities)
    #[serde(default)]
    pub average_speed: f64,
    /// Start date/time (ISO 8601)
    pub start_date: String,
    /// Legacy activity type (Ride, Run, Hike, etc.)
    #[serde(rename = "type", default)]
    pub activity_type: String,
    /// Sport type (Run, TrailRun, Ride, etc.)
    #[serde(default)]
    pub sport_type: String,
}

impl Activity {
    /// Whether this activity counts as a run.
    ///
    /// `type` is authoritative; `sport_type` is consulted only when `type`
    /// is missing from the payload.
    pub fn is_run(&self) -> bool {
        if self.activity_type.is_empty() {
            self.sport_type == RUN_TYPE
        } else {
            self.activity_type == RUN_TYPE
        }
    }

    /// Parsed start instant, or `None` if `start_date` is not RFC 3339.
    pub fn start_instant(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.start_date)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn distance_miles(&self) -> f64 {
        meters_to_miles(self.distance)
    }
}
