// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity sources: live Strava fetches or a static fixture.

use crate::error::{AppError, Result};
use crate::models::Activity;
use crate::services::fetcher::{fetch_all_pages, FetchLimits, FetchResult};
use crate::services::strava::StravaClient;
use async_trait::async_trait;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Produces the full activity sequence for one dashboard render.
///
/// Implementations must not cache across calls.
#[async_trait]
pub trait ActivitySource: Send + Sync {
    async fn load(&self) -> Result<FetchResult>;
}

/// Shared source handle stored in application state.
pub type SharedActivitySource = Arc<dyn ActivitySource>;

/// Fetches every page from Strava on each call.
pub struct LiveSource {
    client: StravaClient,
    limits: FetchLimits,
}

impl LiveSource {
    pub fn new(client: StravaClient, limits: FetchLimits) -> Self {
        Self { client, limits }
    }
}

#[async_trait]
impl ActivitySource for LiveSource {
    async fn load(&self) -> Result<FetchResult> {
        fetch_all_pages(&self.client, self.limits).await
    }
}

/// Serves a fixed list of activities, as if fetched without pagination.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    activities: Vec<Activity>,
}

impl FixtureSource {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    /// Load activities from a JSON file in Strava's list format.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json_data = fs::read_to_string(path)
            .map_err(|e| AppError::Fixture(format!("{}: {}", path.display(), e)))?;
        Self::load_from_json(&json_data)
    }

    /// Load activities from a JSON array string.
    pub fn load_from_json(json_data: &str) -> Result<Self> {
        let activities: Vec<Activity> =
            serde_json::from_str(json_data).map_err(|e| AppError::Fixture(e.to_string()))?;
        Ok(Self::new(activities))
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }
}

#[async_trait]
impl ActivitySource for FixtureSource {
    async fn load(&self) -> Result<FetchResult> {
        Ok(FetchResult {
            activities: self.activities.clone(),
            pages_fetched: 0,
        })
    }
}
