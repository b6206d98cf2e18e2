// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for listing the athlete's activities.
//!
//! The bearer token is pre-provisioned; this client never refreshes it.
//! A rejected token surfaces as [`AppError::RemoteApi`] with status 401.

use crate::error::AppError;
use crate::models::Activity;
use crate::services::fetcher::PageSource;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl StravaClient {
    /// Create a client against the given API base URL.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    /// Create a client whose requests fail after `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client build failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        })
    }

    /// List one page of the athlete's activities (1-based page index).
    pub async fn list_activities(&self, page: u32, per_page: u32) -> Result<Vec<Activity>, AppError> {
        let url = format!("{}/athlete/activities", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    ///
    /// Only `200 OK` counts as success; any other status, including other
    /// 2xx codes, is [`AppError::RemoteApi`].
    ///
    /// The body is read as text first so that a non-success status keeps the
    /// raw body for diagnostics and a bad payload reports a parse error
    /// rather than a transport error.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        if status != StatusCode::OK {
            if status.as_u16() == 429 {
                tracing::warn!("Strava rate limit hit (429)");
            }
            return Err(AppError::RemoteApi {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| AppError::MalformedResponse(format!("JSON parse error: {}", e)))
    }
}

#[async_trait]
impl PageSource for StravaClient {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<Activity>, AppError> {
        self.list_activities(page, per_page).await
    }
}
