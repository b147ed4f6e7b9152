use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("GeoJSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("boundary file contains no features")]
    EmptyBoundarySet,

    #[error("boundary geometry for \"{country}\" has a position with fewer than two coordinates")]
    ShortPosition { country: String },
}
