//! The `normalize` subcommand.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use geopulse_core::records::NormalizedPost;
use geopulse_core::AppConfig;
use geopulse_geo::fetch_boundary_set;
use geopulse_pipeline::{normalize_batch, read_posts_from_path, write_posts, InvalidRecordPolicy};

/// Read the input table, load boundaries, and normalize the batch.
///
/// Shared by `normalize` and `report`: both fatal error classes (missing
/// columns, unreachable boundary source) surface here with context naming
/// the failed precondition.
pub(crate) async fn load_normalized(
    config: &AppConfig,
    input: &Path,
    drop_invalid: bool,
) -> anyhow::Result<Vec<NormalizedPost>> {
    let posts = read_posts_from_path(input)
        .with_context(|| format!("reading input table {}", input.display()))?;
    tracing::info!(records = posts.len(), input = %input.display(), "loaded input table");

    let boundaries = fetch_boundary_set(&config.boundaries_url, config.fetch_timeout_secs)
        .await
        .context("loading country boundaries")?;

    let policy = if drop_invalid {
        InvalidRecordPolicy::Drop
    } else {
        InvalidRecordPolicy::Abort
    };
    let normalized = normalize_batch(&posts, &boundaries, policy)?;
    tracing::info!(records = normalized.len(), "normalized batch");
    Ok(normalized)
}

pub(crate) async fn run(
    config: &AppConfig,
    input: &Path,
    output: Option<&Path>,
    drop_invalid: bool,
) -> anyhow::Result<()> {
    let normalized = load_normalized(config, input, drop_invalid).await?;

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            write_posts(file, &normalized)?;
            tracing::info!(output = %path.display(), "wrote normalized table");
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_posts(&mut handle, &normalized)?;
            handle.flush()?;
        }
    }
    Ok(())
}
