// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - fetching and derivation logic.

pub mod fetcher;
pub mod leaderboard;
pub mod source;
pub mod strava;

pub use fetcher::{fetch_all_pages, FetchLimits, FetchResult, PageSource};
pub use leaderboard::LeaderboardLimits;
pub use source::{ActivitySource, FixtureSource, LiveSource, SharedActivitySource};
pub use strava::StravaClient;
