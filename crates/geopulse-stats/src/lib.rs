//! Aggregate statistics over the normalized post table.
//!
//! Everything the external dashboard renders is derived here: time-bucketed
//! counts, sentiment distributions, per-country and per-platform aggregates,
//! hashtag frequencies, and word-cloud frequencies. All outputs carry an
//! explicit deterministic order since the charting layer renders them
//! directly.

pub mod breakdown;
pub mod dashboard;
pub mod terms;
pub mod timeline;

mod types;

pub use dashboard::{build_dashboard, DashboardData, DashboardOptions};
pub use types::{GroupMean, LabelCount, PlatformSentimentCount, SentimentTimeBucket, TimeBucket};
