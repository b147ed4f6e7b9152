//! Application configuration shape.

/// Runtime configuration for the pipeline and CLI.
///
/// Every field has a default; see [`crate::config::load_app_config`] for the
/// corresponding `GEOPULSE_*` environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL of the country-boundary GeoJSON file.
    pub boundaries_url: String,
    /// Timeout for the boundary fetch. Expiry is fatal at startup.
    pub fetch_timeout_secs: u64,
    /// `tracing` filter directive for the CLI subscriber.
    pub log_level: String,
    /// Width of the time buckets used by the aggregate report.
    pub bucket_minutes: u32,
    /// How many platforms (by post volume) the per-platform aggregates keep.
    pub top_platforms: usize,
}
