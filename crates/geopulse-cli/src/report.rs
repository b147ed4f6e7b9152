//! The `report` subcommand.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use geopulse_core::AppConfig;
use geopulse_stats::{build_dashboard, DashboardOptions};

use crate::normalize::load_normalized;

pub(crate) async fn run(
    config: &AppConfig,
    input: &Path,
    output: Option<&Path>,
    drop_invalid: bool,
) -> anyhow::Result<()> {
    let normalized = load_normalized(config, input, drop_invalid).await?;

    let options = DashboardOptions {
        bucket_minutes: config.bucket_minutes,
        top_platforms: config.top_platforms,
        ..DashboardOptions::default()
    };
    let dashboard = build_dashboard(&normalized, &options);

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            serde_json::to_writer_pretty(file, &dashboard)?;
            tracing::info!(output = %path.display(), "wrote dashboard report");
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &dashboard)?;
            handle.write_all(b"\n")?;
        }
    }
    Ok(())
}
