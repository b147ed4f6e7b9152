//! Sentiment, country, and platform breakdowns.

use std::collections::HashMap;

use geopulse_core::records::NormalizedPost;

use crate::types::{GroupMean, LabelCount, PlatformSentimentCount};

/// Count occurrences of a label, ordered count descending then label
/// ascending.
fn count_by<'a, I>(labels: I) -> Vec<LabelCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    let mut out: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| LabelCount {
            label: label.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    out
}

/// Mean sentiment code per group key, ordered label ascending.
fn mean_by<'a, I>(pairs: I) -> Vec<GroupMean>
where
    I: IntoIterator<Item = (&'a str, i32)>,
{
    let mut sums: HashMap<&str, (i64, usize)> = HashMap::new();
    for (label, code) in pairs {
        let entry = sums.entry(label).or_default();
        entry.0 += i64::from(code);
        entry.1 += 1;
    }
    let mut out: Vec<GroupMean> = sums
        .into_iter()
        .map(|(label, (sum, count))| {
            #[allow(clippy::cast_precision_loss)]
            let mean = sum as f64 / count as f64;
            GroupMean {
                label: label.to_string(),
                mean,
                count,
            }
        })
        .collect();
    out.sort_by(|a, b| a.label.cmp(&b.label));
    out
}

/// Overall sentiment label distribution.
#[must_use]
pub fn sentiment_distribution(posts: &[NormalizedPost]) -> Vec<LabelCount> {
    count_by(posts.iter().map(|p| p.sentiment.as_str()))
}

/// Post counts per resolved country (including `"unknown"`).
#[must_use]
pub fn country_counts(posts: &[NormalizedPost]) -> Vec<LabelCount> {
    count_by(posts.iter().map(|p| p.country.as_str()))
}

/// Mean sentiment code per country.
///
/// Means are batch-relative: codes come from first-occurrence encoding, so
/// they compare countries within one report, never across runs.
#[must_use]
pub fn country_mean_sentiment(posts: &[NormalizedPost]) -> Vec<GroupMean> {
    mean_by(posts.iter().map(|p| (p.country.as_str(), p.sentiment_code)))
}

/// The `n` platforms with the most posts, by volume descending.
#[must_use]
pub fn top_platforms(posts: &[NormalizedPost], n: usize) -> Vec<String> {
    count_by(posts.iter().map(|p| p.source.as_str()))
        .into_iter()
        .take(n)
        .map(|entry| entry.label)
        .collect()
}

/// Sentiment counts per platform, restricted to the top `top_n` platforms.
///
/// Ordered platform ascending then sentiment ascending.
#[must_use]
pub fn platform_sentiment_counts(
    posts: &[NormalizedPost],
    top_n: usize,
) -> Vec<PlatformSentimentCount> {
    let top = top_platforms(posts, top_n);
    let mut counts: HashMap<(&str, &str), usize> = HashMap::new();
    for post in posts {
        if top.iter().any(|platform| platform == &post.source) {
            *counts
                .entry((post.source.as_str(), post.sentiment.as_str()))
                .or_default() += 1;
        }
    }
    let mut out: Vec<PlatformSentimentCount> = counts
        .into_iter()
        .map(|((platform, sentiment), count)| PlatformSentimentCount {
            platform: platform.to_string(),
            sentiment: sentiment.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| {
        a.platform
            .cmp(&b.platform)
            .then_with(|| a.sentiment.cmp(&b.sentiment))
    });
    out
}

/// Mean sentiment code per platform, restricted to the top `top_n`
/// platforms, ordered mean ascending (the order the dashboard's bar chart
/// uses).
#[must_use]
pub fn platform_mean_sentiment(posts: &[NormalizedPost], top_n: usize) -> Vec<GroupMean> {
    let top = top_platforms(posts, top_n);
    let mut means = mean_by(posts.iter().filter_map(|p| {
        top.iter()
            .any(|platform| platform == &p.source)
            .then_some((p.source.as_str(), p.sentiment_code))
    }));
    means.sort_by(|a, b| {
        a.mean
            .partial_cmp(&b.mean)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });
    means
}
