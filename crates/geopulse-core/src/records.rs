//! Post record types shared across the pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentiment code assigned when a label was never seen by the batch encoder.
pub const UNMAPPED_SENTIMENT_CODE: i32 = -1;

/// A raw annotated post as read from the input table.
///
/// Field aliases accept the column names of the original Twitter export
/// (`tweet`, `long`, `lat`, `created_at`). Coordinates are optional: blank
/// cells deserialize to `None` and degrade to the `"unknown"` country later
/// instead of failing the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPost {
    #[serde(alias = "tweet")]
    pub text: String,
    #[serde(alias = "long")]
    pub longitude: Option<f64>,
    #[serde(alias = "lat")]
    pub latitude: Option<f64>,
    pub sentiment: String,
    #[serde(alias = "timestamp")]
    pub created_at: String,
    pub source: String,
}

/// A post augmented with the derived analysis columns.
///
/// `sentiment_code` is assigned by first-occurrence order of labels within
/// one batch (first-seen label = 0). Codes are consistent inside a batch but
/// NOT stable across separate runs; never compare codes from different
/// batches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPost {
    pub text: String,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub sentiment: String,
    pub source: String,
    /// Text with URLs, mentions, entity fragments, and tags stripped,
    /// lowercased and trimmed.
    pub cleaned_text: String,
    /// Cleaned text with punctuation removed, tokenized, and stop words
    /// dropped; tokens re-joined with single spaces.
    pub normalized_text: String,
    pub sentiment_code: i32,
    /// A boundary-set country name, or `"unknown"`.
    pub country: String,
    pub created_at: DateTime<Utc>,
}
