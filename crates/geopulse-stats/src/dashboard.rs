//! The full aggregate bundle handed to the charting layer.

use geopulse_core::records::NormalizedPost;
use serde::Serialize;

use crate::breakdown::{
    country_counts, country_mean_sentiment, platform_mean_sentiment, platform_sentiment_counts,
    sentiment_distribution,
};
use crate::terms::{hashtag_counts, word_frequencies};
use crate::timeline::{post_counts_by_bucket, sentiment_counts_by_bucket};
use crate::types::{GroupMean, LabelCount, PlatformSentimentCount, SentimentTimeBucket, TimeBucket};

/// Tunables for the aggregate report.
#[derive(Debug, Clone, Copy)]
pub struct DashboardOptions {
    pub bucket_minutes: u32,
    pub top_platforms: usize,
    /// Hashtags occurring fewer times than this are dropped.
    pub min_hashtag_count: usize,
    pub hashtag_limit: usize,
    pub word_limit: usize,
}

impl Default for DashboardOptions {
    /// The cutoffs the original dashboard rendered with: 5-minute buckets,
    /// top 5 platforms, hashtags seen more than 10 times, top 10 of them,
    /// 200 word-cloud terms.
    fn default() -> Self {
        Self {
            bucket_minutes: 5,
            top_platforms: 5,
            min_hashtag_count: 11,
            hashtag_limit: 10,
            word_limit: 200,
        }
    }
}

/// Every aggregate the dashboard renders, in one serializable bundle.
#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub post_counts: Vec<TimeBucket>,
    pub sentiment_timeline: Vec<SentimentTimeBucket>,
    pub sentiment_distribution: Vec<LabelCount>,
    pub country_counts: Vec<LabelCount>,
    pub country_mean_sentiment: Vec<GroupMean>,
    pub platform_sentiment_counts: Vec<PlatformSentimentCount>,
    pub platform_mean_sentiment: Vec<GroupMean>,
    pub hashtags: Vec<LabelCount>,
    pub word_frequencies: Vec<LabelCount>,
}

/// Derive the full aggregate bundle from one normalized batch.
#[must_use]
pub fn build_dashboard(posts: &[NormalizedPost], options: &DashboardOptions) -> DashboardData {
    DashboardData {
        post_counts: post_counts_by_bucket(posts, options.bucket_minutes),
        sentiment_timeline: sentiment_counts_by_bucket(posts, options.bucket_minutes),
        sentiment_distribution: sentiment_distribution(posts),
        country_counts: country_counts(posts),
        country_mean_sentiment: country_mean_sentiment(posts),
        platform_sentiment_counts: platform_sentiment_counts(posts, options.top_platforms),
        platform_mean_sentiment: platform_mean_sentiment(posts, options.top_platforms),
        hashtags: hashtag_counts(posts, options.min_hashtag_count, options.hashtag_limit),
        word_frequencies: word_frequencies(posts, options.word_limit),
    }
}
