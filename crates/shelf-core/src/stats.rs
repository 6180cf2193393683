//! Collection statistics.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::types::{Category, Entry, Rating};

/// Length of the "recently added" window, in days.
pub const RECENT_WINDOW_DAYS: i64 = 30;

/// Count of entries carrying one rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingCount {
    pub rating: Rating,
    pub count: usize,
}

/// Summary of a collection at a reference instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: usize,

    /// Only categories that occur, in declaration order
    pub by_category: BTreeMap<Category, usize>,

    /// Only ratings that occur, in canonical rating order
    pub by_rating: Vec<RatingCount>,

    /// Entries added within the last [`RECENT_WINDOW_DAYS`] days, inclusive
    pub recent_count: usize,
}

impl Stats {
    /// Largest per-rating count, `0` for an empty collection.
    pub fn max_rating_count(&self) -> usize {
        self.by_rating.iter().map(|rc| rc.count).max().unwrap_or(0)
    }

    pub fn category_count(&self, category: Category) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }
}

/// Summarize `entries` as of `now`.
pub fn summarize(entries: &[Entry], now: DateTime<Utc>) -> Stats {
    let window_start = now - Duration::days(RECENT_WINDOW_DAYS);

    let mut by_category = BTreeMap::new();
    let mut rating_counts = [0usize; Rating::ALL.len()];
    let mut recent_count = 0;

    for entry in entries {
        *by_category.entry(entry.category).or_insert(0) += 1;
        rating_counts[entry.rating.rank()] += 1;
        if entry.date_added >= window_start && entry.date_added <= now {
            recent_count += 1;
        }
    }

    let by_rating = Rating::ALL
        .iter()
        .zip(rating_counts)
        .filter(|(_, count)| *count > 0)
        .map(|(rating, count)| RatingCount {
            rating: *rating,
            count,
        })
        .collect();

    Stats {
        total: entries.len(),
        by_category,
        by_rating,
        recent_count,
    }
}
