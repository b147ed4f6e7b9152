//! Boundary-set download.

use std::time::Duration;

use crate::boundaries::BoundarySet;
use crate::error::GeoError;

/// Fetch and parse the country-boundary GeoJSON from `url`.
///
/// The request carries an explicit timeout; an unreachable or slow source is
/// fatal to the pipeline, which cannot proceed without a boundary set.
///
/// # Errors
///
/// Returns [`GeoError::Http`] on network failure or timeout,
/// [`GeoError::UnexpectedStatus`] for non-2xx responses, and the
/// [`BoundarySet::from_geojson_str`] errors for bad bodies.
pub async fn fetch_boundary_set(url: &str, timeout_secs: u64) -> Result<BoundarySet, GeoError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(GeoError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    let set = BoundarySet::from_geojson_str(&body)?;
    tracing::info!(countries = set.len(), url, "loaded country boundaries");
    Ok(set)
}
