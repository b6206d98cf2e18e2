// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Run-Dashboard: personal running statistics from Strava
//!
//! This crate fetches an athlete's activities from the Strava API and
//! derives running leaderboards (fastest miles, longest runs, totals) for a
//! dashboard frontend.

pub mod config;
pub mod error;
pub mod format;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::SharedActivitySource;

/// Shared application state. Immutable; every request computes from scratch.
pub struct AppState {
    pub config: Config,
    pub source: SharedActivitySource,
}
