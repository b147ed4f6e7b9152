//! Output shapes consumed by the charting layer.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A label (sentiment, country, platform, hashtag, word) with its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Post count for one time bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeBucket {
    pub start: DateTime<Utc>,
    pub count: usize,
}

/// Post count for one (time bucket, sentiment label) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentTimeBucket {
    pub start: DateTime<Utc>,
    pub sentiment: String,
    pub count: usize,
}

/// Mean sentiment code for one group (country or platform).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean {
    pub label: String,
    pub mean: f64,
    pub count: usize,
}

/// Post count for one (platform, sentiment label) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformSentimentCount {
    pub platform: String,
    pub sentiment: String,
    pub count: usize,
}
