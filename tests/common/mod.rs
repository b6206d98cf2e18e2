// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use run_dashboard::config::Config;
use run_dashboard::models::Activity;
use run_dashboard::routes::create_router;
use run_dashboard::services::{FixtureSource, SharedActivitySource};
use run_dashboard::AppState;
use std::sync::Arc;

/// Path of the checked-in sample activities.
#[allow(dead_code)]
pub const FIXTURE_PATH: &str = "data/activities.json";

/// Build a minimal activity for tests.
#[allow(dead_code)]
pub fn make_activity(
    id: u64,
    activity_type: &str,
    distance: f64,
    speed: f64,
    date: &str,
) -> Activity {
    Activity {
        id,
        name: format!("Test Activity {}", id),
        distance,
        moving_time: 0,
        average_speed: speed,
        start_date: date.to_string(),
        activity_type: activity_type.to_string(),
        sport_type: activity_type.to_string(),
    }
}

/// Create a test app backed by an arbitrary source.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app_with_source(
    source: SharedActivitySource,
) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::default(),
        source,
    });

    (create_router(state.clone()), state)
}

/// Create a test app serving the given activities.
#[allow(dead_code)]
pub fn create_test_app(activities: Vec<Activity>) -> (axum::Router, Arc<AppState>) {
    create_test_app_with_source(Arc::new(FixtureSource::new(activities)))
}

/// Create a test app serving the checked-in fixture file.
#[allow(dead_code)]
pub fn create_fixture_app() -> (axum::Router, Arc<AppState>) {
    let fixture = FixtureSource::load_from_file(FIXTURE_PATH).expect("Failed to load fixture");
    create_test_app_with_source(Arc::new(fixture))
}

/// Read a JSON response body.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}
