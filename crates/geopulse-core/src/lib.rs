//! Shared types and configuration for the geopulse pipeline.

pub mod app_config;
pub mod config;
pub mod records;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use records::{NormalizedPost, RawPost, UNMAPPED_SENTIMENT_CODE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
