// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared unit conversions and display formatting.
//!
//! Every leaderboard view formats distances, paces and dates through this
//! module so there is exactly one rounding convention in the crate.

use chrono::{DateTime, NaiveDate};

/// Meters in one statute mile.
pub const METERS_PER_MILE: f64 = 1609.344;

/// Meters per mile divided by 60: dividing it by a speed in m/s gives
/// minutes per mile.
pub const PACE_NUMERATOR: f64 = 26.8224;

/// Absorbs binary representation error before truncating pace seconds.
const PACE_EPSILON_SECS: f64 = 1e-9;

/// Errors from conversions that are undefined for some inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("pace is undefined for non-positive speed {0} m/s")]
    NonPositiveSpeed(f64),

    #[error("speed is not a finite number")]
    NotFinite,

    #[error("pace is too slow to represent for speed {0} m/s")]
    PaceOutOfRange(f64),
}

/// Round to two decimal places and render with exactly two decimals.
///
/// `f64::EPSILON` is added before rounding so values such as `1.005`,
/// which are stored slightly below the midpoint, round up as written.
pub fn round_to_2(value: f64) -> String {
    let rounded = ((value + f64::EPSILON) * 100.0).round() / 100.0;
    format!("{:.2}", rounded)
}

/// Convert meters to miles.
pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

/// Convert a speed in m/s to a pace string `M:SS` per mile.
///
/// Seconds are truncated, not rounded: 9.99 minutes renders as `9:59`.
pub fn meters_per_sec_to_min_per_mile(meters_per_sec: f64) -> Result<String, FormatError> {
    if !meters_per_sec.is_finite() {
        return Err(FormatError::NotFinite);
    }
    if meters_per_sec <= 0.0 {
        return Err(FormatError::NonPositiveSpeed(meters_per_sec));
    }

    let minutes = PACE_NUMERATOR / meters_per_sec;
    let total_secs = (minutes * 60.0 + PACE_EPSILON_SECS).floor();
    // `as u64` saturates, so reject anything it cannot hold exactly
    if !total_secs.is_finite() || total_secs >= u64::MAX as f64 {
        return Err(FormatError::PaceOutOfRange(meters_per_sec));
    }
    let total_secs = total_secs as u64;

    Ok(format!("{}:{:02}", total_secs / 60, total_secs % 60))
}

/// Format an ISO-8601 timestamp as `YYYY/MM/DD`.
///
/// Uses the calendar date in the offset the timestamp was written in.
/// Empty or unparseable input yields an empty string.
pub fn format_date(iso_date: &str) -> String {
    let iso_date = iso_date.trim();
    if iso_date.is_empty() {
        return String::new();
    }

    let date = DateTime::parse_from_rfc3339(iso_date)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(iso_date, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%Y/%m/%d").to_string(),
        Err(e) => {
            tracing::debug!(input = iso_date, error = %e, "Unparseable date");
            String::new()
        }
    }
}
