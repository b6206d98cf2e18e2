// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Property tests for the paginated fetch loop.

use async_trait::async_trait;
use proptest::prelude::*;
use run_dashboard::error::AppError;
use run_dashboard::models::Activity;
use run_dashboard::services::{fetch_all_pages, FetchLimits, PageSource};
use std::sync::Mutex;

mod common;
use common::make_activity;

/// Pages held in memory; anything past the last page is empty.
struct InMemoryPages {
    pages: Vec<Vec<u64>>,
    requested: Mutex<Vec<u32>>,
}

#[async_trait]
impl PageSource for InMemoryPages {
    async fn fetch_page(&self, page: u32, _per_page: u32) -> Result<Vec<Activity>, AppError> {
        self.requested.lock().unwrap().push(page);
        let ids = self
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default();
        Ok(ids
            .into_iter()
            .map(|id| make_activity(id, "Run", 1000.0, 3.0, "2024-01-15T10:00:00Z"))
            .collect())
    }
}

/// Pages the loop should consume: up to and including the first empty
/// page, and never more than `max_pages`.
fn expected_pages(pages: &[Vec<u64>], max_pages: u32) -> Vec<Vec<u64>> {
    let mut taken = Vec::new();
    for page in 1..=max_pages {
        let ids = pages.get(page as usize - 1).cloned().unwrap_or_default();
        let empty = ids.is_empty();
        taken.push(ids);
        if empty {
            break;
        }
    }
    taken
}

proptest! {
    /// Invariant: results are the concatenation of consumed pages in page
    /// order, and the page cap is never exceeded.
    #[test]
    fn prop_fetch_all_concatenates_in_order(
        pages in prop::collection::vec(prop::collection::vec(any::<u64>(), 0..4), 0..10),
        max_pages in 1u32..8,
    ) {
        let source = InMemoryPages {
            pages: pages.clone(),
            requested: Mutex::new(Vec::new()),
        };
        let limits = FetchLimits { max_pages, per_page: 3 };

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let result = runtime.block_on(fetch_all_pages(&source, limits)).unwrap();

        let expected = expected_pages(&pages, max_pages);
        let expected_ids: Vec<u64> = expected.iter().flatten().copied().collect();
        let ids: Vec<u64> = result.activities.iter().map(|a| a.id).collect();

        prop_assert_eq!(ids, expected_ids);
        prop_assert!(result.pages_fetched >= 1);
        prop_assert!(result.pages_fetched <= max_pages);
        prop_assert_eq!(result.pages_fetched as usize, expected.len());

        let requested = source.requested.lock().unwrap().clone();
        let in_order: Vec<u32> = (1..=result.pages_fetched).collect();
        prop_assert_eq!(requested, in_order);
    }
}
