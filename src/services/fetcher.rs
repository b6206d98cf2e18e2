// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Paginated activity fetching.
//!
//! Pages are fetched one at a time: whether another page is needed depends
//! on the contents of the previous one.

use crate::error::Result;
use crate::models::Activity;
use async_trait::async_trait;
use serde::Serialize;

/// One page of activities from some paginated backend.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch a single page. `page` is 1-based.
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<Activity>>;
}

/// Bounds on a full paginated fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchLimits {
    /// Hard cap on pages fetched per request. Strava documents no page
    /// limit, so this bounds worst-case latency; anything past
    /// `max_pages * per_page` activities is silently dropped.
    pub max_pages: u32,
    /// Activities requested per page.
    pub per_page: u32,
}

impl Default for FetchLimits {
    fn default() -> Self {
        Self {
            max_pages: 5,
            per_page: 200,
        }
    }
}

/// Activities accumulated across pages.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FetchResult {
    /// Page-ascending, within-page original order.
    pub activities: Vec<Activity>,
    /// Pages actually requested (0 only for non-paginated sources).
    pub pages_fetched: u32,
}

/// Fetch pages starting at 1 until a page comes back empty or the page cap
/// is reached.
///
/// Any page error aborts the whole fetch; activities from earlier pages are
/// dropped with it.
pub async fn fetch_all_pages(source: &dyn PageSource, limits: FetchLimits) -> Result<FetchResult> {
    let mut activities = Vec::new();
    let mut page = 1;

    loop {
        tracing::debug!(page, per_page = limits.per_page, "Fetching activities page");
        let page_activities = source.fetch_page(page, limits.per_page).await?;
        let page_empty = page_activities.is_empty();
        activities.extend(page_activities);

        if page_empty {
            break;
        }
        if page >= limits.max_pages {
            tracing::warn!(
                max_pages = limits.max_pages,
                activities = activities.len(),
                "Page cap reached; older activities not fetched"
            );
            break;
        }
        page += 1;
    }

    tracing::info!(
        pages = page,
        activities = activities.len(),
        "Fetched activities"
    );

    Ok(FetchResult {
        activities,
        pages_fetched: page,
    })
}
