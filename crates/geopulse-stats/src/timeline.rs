//! Time-bucketed counts.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use geopulse_core::records::NormalizedPost;

use crate::types::{SentimentTimeBucket, TimeBucket};

/// Floor a timestamp to the start of its `bucket_minutes`-wide bucket,
/// anchored at the Unix epoch. Sub-second precision is discarded.
fn bucket_start(timestamp: DateTime<Utc>, bucket_minutes: u32) -> DateTime<Utc> {
    let width = i64::from(bucket_minutes.max(1)) * 60;
    let seconds_past = timestamp.timestamp().rem_euclid(width);
    let nanos = i64::from(timestamp.timestamp_subsec_nanos());
    timestamp - TimeDelta::seconds(seconds_past) - TimeDelta::nanoseconds(nanos)
}

/// Post counts per time bucket, ordered by bucket start ascending.
///
/// Only buckets with at least one post appear; the charting layer draws
/// gaps as gaps.
#[must_use]
pub fn post_counts_by_bucket(posts: &[NormalizedPost], bucket_minutes: u32) -> Vec<TimeBucket> {
    let mut counts: BTreeMap<DateTime<Utc>, usize> = BTreeMap::new();
    for post in posts {
        *counts
            .entry(bucket_start(post.created_at, bucket_minutes))
            .or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(start, count)| TimeBucket { start, count })
        .collect()
}

/// Post counts per (time bucket, sentiment label), ordered by bucket start
/// ascending then label ascending.
#[must_use]
pub fn sentiment_counts_by_bucket(
    posts: &[NormalizedPost],
    bucket_minutes: u32,
) -> Vec<SentimentTimeBucket> {
    let mut counts: BTreeMap<(DateTime<Utc>, String), usize> = BTreeMap::new();
    for post in posts {
        *counts
            .entry((
                bucket_start(post.created_at, bucket_minutes),
                post.sentiment.clone(),
            ))
            .or_default() += 1;
    }
    counts
        .into_iter()
        .map(|((start, sentiment), count)| SentimentTimeBucket {
            start,
            sentiment,
            count,
        })
        .collect()
}
