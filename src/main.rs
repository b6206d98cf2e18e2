// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Run-Dashboard API Server
//!
//! Serves running leaderboards derived from the athlete's Strava activities.

use anyhow::Context;
use run_dashboard::{
    config::{Config, DataSourceKind},
    services::{FixtureSource, LiveSource, SharedActivitySource, StravaClient},
    AppState,
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        port = config.port,
        source = ?config.data_source,
        max_pages = config.fetch_limits.max_pages,
        "Starting Run-Dashboard API"
    );

    let source = build_source(&config)?;

    let state = Arc::new(AppState {
        config: config.clone(),
        source,
    });

    // Build router
    let app = run_dashboard::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Pick the activity source named by the configuration.
fn build_source(config: &Config) -> anyhow::Result<SharedActivitySource> {
    match config.data_source {
        DataSourceKind::Live => {
            let client = match config.strava_timeout_secs {
                Some(secs) => StravaClient::with_timeout(
                    &config.strava_api_url,
                    &config.strava_access_token,
                    Duration::from_secs(secs),
                )?,
                None => StravaClient::new(&config.strava_api_url, &config.strava_access_token),
            };
            tracing::info!(api = %config.strava_api_url, "Using live Strava source");
            Ok(Arc::new(LiveSource::new(client, config.fetch_limits)))
        }
        DataSourceKind::Fixture => {
            let fixture = FixtureSource::load_from_file(&config.fixture_path)
                .with_context(|| format!("Failed to load fixture {}", config.fixture_path))?;
            tracing::info!(
                path = %config.fixture_path,
                count = fixture.activities().len(),
                "Using fixture source"
            );
            Ok(Arc::new(fixture))
        }
    }
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("run_dashboard=debug,info")),
        )
        .with(format)
        .init();
}
