// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod dashboard;

pub use activity::Activity;
pub use dashboard::{Dashboard, LeaderboardEntry};
