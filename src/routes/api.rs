// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard API routes.
//!
//! Each request loads activities from the configured source and derives
//! everything from scratch. A failed fetch is returned as an error
//! response, never as an empty dashboard.

use crate::error::{AppError, Result};
use crate::models::{Activity, Dashboard};
use crate::services::LeaderboardLimits;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Upper bound for the `limit` query override.
const MAX_LEADERBOARD_LIMIT: usize = 50;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/activities", get(get_activities))
}

// ─── Dashboard ───────────────────────────────────────────────

#[derive(Deserialize)]
struct DashboardQuery {
    /// Override every leaderboard size
    limit: Option<usize>,
}

fn leaderboard_limits(state: &AppState, limit: Option<usize>) -> Result<LeaderboardLimits> {
    match limit {
        None => Ok(state.config.leaderboard_limits),
        Some(n) if (1..=MAX_LEADERBOARD_LIMIT).contains(&n) => Ok(LeaderboardLimits::uniform(n)),
        Some(n) => Err(AppError::BadRequest(format!(
            "'limit' must be between 1 and {}, got {}",
            MAX_LEADERBOARD_LIMIT, n
        ))),
    }
}

/// Compute the dashboard for the athlete's activities.
async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DashboardQuery>,
) -> Result<Json<Dashboard>> {
    let limits = leaderboard_limits(&state, params.limit)?;

    let fetched = state.source.load().await?;
    let dashboard = Dashboard::build(&fetched, &limits);

    tracing::info!(
        pages = dashboard.pages_fetched,
        runs = dashboard.run_count,
        total_miles = dashboard.total_miles,
        "Dashboard computed"
    );

    Ok(Json(dashboard))
}

// ─── Activities ──────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitiesResponse {
    pub activities: Vec<Activity>,
    pub pages_fetched: u32,
}

/// Raw activity sequence in fetch order.
async fn get_activities(State(state): State<Arc<AppState>>) -> Result<Json<ActivitiesResponse>> {
    let fetched = state.source.load().await?;

    tracing::debug!(
        pages = fetched.pages_fetched,
        activities = fetched.activities.len(),
        "Returning raw activities"
    );

    Ok(Json(ActivitiesResponse {
        activities: fetched.activities,
        pages_fetched: fetched.pages_fetched,
    }))
}
