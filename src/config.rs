// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Page caps and leaderboard sizes live here rather than in module
//! constants so tests can run the fetch loop and derivations with small,
//! deterministic values.

use crate::services::fetcher::FetchLimits;
use crate::services::leaderboard::LeaderboardLimits;
use std::env;
use std::str::FromStr;

const DEFAULT_STRAVA_API_URL: &str = "https://www.strava.com/api/v3";
const DEFAULT_FIXTURE_PATH: &str = "data/activities.json";

/// Strava never returns more than 200 activities per page.
pub const MAX_PER_PAGE: u32 = 200;

/// Where dashboard activities come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSourceKind {
    /// Fetch from the Strava API on every request.
    Live,
    /// Serve a static JSON fixture from disk.
    Fixture,
}

impl FromStr for DataSourceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(DataSourceKind::Live),
            "fixture" | "mock" => Ok(DataSourceKind::Fixture),
            _ => Err(ConfigError::Invalid("DATA_SOURCE", s.to_string())),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-provisioned Strava bearer token. May be empty; Strava then
    /// rejects the request and the 401 surfaces as a remote API error.
    pub strava_access_token: String,
    /// Strava API base URL (overridable for local testing)
    pub strava_api_url: String,
    /// Optional request timeout for Strava calls. Unset means reqwest's default.
    pub strava_timeout_secs: Option<u64>,
    pub data_source: DataSourceKind,
    /// Fixture file used when `data_source` is `Fixture`
    pub fixture_path: String,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    pub fetch_limits: FetchLimits,
    pub leaderboard_limits: LeaderboardLimits,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            strava_access_token: "test_access_token".to_string(),
            strava_api_url: DEFAULT_STRAVA_API_URL.to_string(),
            strava_timeout_secs: None,
            data_source: DataSourceKind::Fixture,
            fixture_path: DEFAULT_FIXTURE_PATH.to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            fetch_limits: FetchLimits::default(),
            leaderboard_limits: LeaderboardLimits::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let strava_access_token = env::var("STRAVA_ACCESS_TOKEN")
            .map(|v| v.trim().to_string())
            .unwrap_or_default();
        if strava_access_token.is_empty() {
            tracing::warn!("STRAVA_ACCESS_TOKEN is not set; live fetches will be rejected");
        }

        let fetch_defaults = FetchLimits::default();
        let per_page = parse_var("FETCH_PER_PAGE", fetch_defaults.per_page)?;
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(ConfigError::Invalid("FETCH_PER_PAGE", per_page.to_string()));
        }
        let max_pages = parse_var("FETCH_MAX_PAGES", fetch_defaults.max_pages)?;
        if max_pages == 0 {
            return Err(ConfigError::Invalid("FETCH_MAX_PAGES", max_pages.to_string()));
        }

        let board_defaults = LeaderboardLimits::default();

        Ok(Self {
            strava_access_token,
            strava_api_url: env::var("STRAVA_API_URL")
                .unwrap_or_else(|_| DEFAULT_STRAVA_API_URL.to_string()),
            strava_timeout_secs: parse_optional_var("STRAVA_TIMEOUT_SECS")?,
            data_source: env::var("DATA_SOURCE")
                .unwrap_or_else(|_| "live".to_string())
                .parse()?,
            fixture_path: env::var("FIXTURE_PATH")
                .unwrap_or_else(|_| DEFAULT_FIXTURE_PATH.to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: parse_var("PORT", 8080)?,
            fetch_limits: FetchLimits {
                max_pages,
                per_page,
            },
            leaderboard_limits: LeaderboardLimits {
                fastest_miles: parse_var("TOP_FASTEST_MILES", board_defaults.fastest_miles)?,
                fastest_sprints: parse_var("TOP_FASTEST_SPRINTS", board_defaults.fastest_sprints)?,
                fastest_runs: parse_var("TOP_FASTEST_RUNS", board_defaults.fastest_runs)?,
                longest_runs: parse_var("TOP_LONGEST_RUNS", board_defaults.longest_runs)?,
                most_recent_runs: parse_var(
                    "TOP_MOST_RECENT_RUNS",
                    board_defaults.most_recent_runs,
                )?,
            },
        })
    }
}

/// Parse an optional numeric variable, falling back to `default` when unset.
fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    Ok(parse_optional_var(name)?.unwrap_or(default))
}

fn parse_optional_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
