//! Tabular input and output.
//!
//! Reads the raw post CSV with a pre-flight header check so a missing
//! required column fails once, up front, with a message naming every absent
//! column — not record-by-record deep inside serde.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::StringRecord;
use geopulse_core::records::{NormalizedPost, RawPost};

use crate::error::PipelineError;

/// Required columns and their accepted header spellings. Must stay in sync
/// with the serde aliases on [`RawPost`].
const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    ("text", &["text", "tweet"]),
    ("longitude", &["longitude", "long"]),
    ("latitude", &["latitude", "lat"]),
    ("sentiment", &["sentiment"]),
    ("created_at", &["created_at", "timestamp"]),
    ("source", &["source"]),
];

fn validate_headers(headers: &StringRecord) -> Result<(), PipelineError> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|(_, spellings)| {
            !headers
                .iter()
                .any(|header| spellings.contains(&header.trim()))
        })
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(PipelineError::MissingColumns(missing.join(", ")))
    }
}

/// Read raw posts from a CSV source with headers.
///
/// # Errors
///
/// Returns [`PipelineError::MissingColumns`] when a required column is
/// structurally absent, or [`PipelineError::Csv`] for malformed rows.
pub fn read_posts<R: Read>(reader: R) -> Result<Vec<RawPost>, PipelineError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    validate_headers(&headers)?;

    let mut posts = Vec::new();
    for result in csv_reader.deserialize() {
        posts.push(result?);
    }
    Ok(posts)
}

/// Read raw posts from a CSV file on disk.
///
/// # Errors
///
/// As [`read_posts`], plus [`PipelineError::Io`] when the file cannot be
/// opened.
pub fn read_posts_from_path(path: &Path) -> Result<Vec<RawPost>, PipelineError> {
    let file = File::open(path)?;
    read_posts(file)
}

/// Write the normalized table as CSV.
///
/// # Errors
///
/// Returns [`PipelineError::Csv`] or [`PipelineError::Io`] on write failure.
pub fn write_posts<W: Write>(writer: W, posts: &[NormalizedPost]) -> Result<(), PipelineError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for post in posts {
        csv_writer.serialize(post)?;
    }
    csv_writer.flush()?;
    Ok(())
}
