//! Batch normalization: raw posts in, analysis-ready posts out.

use chrono::{DateTime, NaiveDateTime, Utc};
use geopulse_core::records::{NormalizedPost, RawPost, UNMAPPED_SENTIMENT_CODE};
use geopulse_geo::{BoundarySet, UNKNOWN_COUNTRY};

use crate::encode::SentimentEncoder;
use crate::error::PipelineError;
use crate::text::{clean_text, normalize_text};

/// What to do with a record whose timestamp cannot be parsed.
///
/// `Abort` fails the whole batch (the default, matching the original
/// dashboard's effective behavior); `Drop` skips the record with a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidRecordPolicy {
    #[default]
    Abort,
    Drop,
}

/// Timestamp formats accepted in addition to RFC 3339, tried in order:
/// zoned and naive `YYYY-MM-DD HH:MM:SS` (naive assumed UTC), and Twitter's
/// legacy `created_at` format.
const EXTRA_FORMATS_ZONED: &[&str] = &["%Y-%m-%d %H:%M:%S %z", "%a %b %d %H:%M:%S %z %Y"];
const EXTRA_FORMATS_NAIVE: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in EXTRA_FORMATS_ZONED {
        if let Ok(parsed) = DateTime::parse_from_str(raw, format) {
            return Some(parsed.with_timezone(&Utc));
        }
    }
    for format in EXTRA_FORMATS_NAIVE {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }
    None
}

/// Normalize one batch of raw posts.
///
/// Two passes: the first fits the [`SentimentEncoder`] on every label in
/// batch order, the second derives the normalized fields per record. Country
/// resolution goes through `boundaries`; missing or invalid coordinates
/// degrade to [`UNKNOWN_COUNTRY`] and empty text yields empty derived
/// fields — neither fails the batch.
///
/// # Errors
///
/// Returns [`PipelineError::Timestamp`] for the first unparseable timestamp
/// when `policy` is [`InvalidRecordPolicy::Abort`].
pub fn normalize_batch(
    posts: &[RawPost],
    boundaries: &BoundarySet,
    policy: InvalidRecordPolicy,
) -> Result<Vec<NormalizedPost>, PipelineError> {
    let encoder = SentimentEncoder::fit(posts.iter().map(|post| post.sentiment.as_str()));

    let mut normalized = Vec::with_capacity(posts.len());
    let mut dropped = 0_usize;
    for (index, raw) in posts.iter().enumerate() {
        let Some(created_at) = parse_timestamp(&raw.created_at) else {
            match policy {
                InvalidRecordPolicy::Abort => {
                    return Err(PipelineError::Timestamp {
                        index,
                        value: raw.created_at.clone(),
                    });
                }
                InvalidRecordPolicy::Drop => {
                    tracing::warn!(
                        index,
                        value = %raw.created_at,
                        "dropping record with unparseable timestamp"
                    );
                    dropped += 1;
                    continue;
                }
            }
        };
        normalized.push(normalize_post(raw, created_at, &encoder, boundaries));
    }

    if dropped > 0 {
        tracing::warn!(dropped, total = posts.len(), "records dropped from batch");
    }
    Ok(normalized)
}

fn normalize_post(
    raw: &RawPost,
    created_at: DateTime<Utc>,
    encoder: &SentimentEncoder,
    boundaries: &BoundarySet,
) -> NormalizedPost {
    let cleaned_text = clean_text(&raw.text);
    let normalized_text = normalize_text(&cleaned_text);
    let sentiment_code = encoder
        .code(&raw.sentiment)
        .unwrap_or(UNMAPPED_SENTIMENT_CODE);
    let country = match (raw.longitude, raw.latitude) {
        (Some(longitude), Some(latitude)) => boundaries.resolve(longitude, latitude).to_string(),
        _ => UNKNOWN_COUNTRY.to_string(),
    };

    NormalizedPost {
        text: raw.text.clone(),
        longitude: raw.longitude,
        latitude: raw.latitude,
        sentiment: raw.sentiment.clone(),
        source: raw.source.clone(),
        cleaned_text,
        normalized_text,
        sentiment_code,
        country,
        created_at,
    }
}
