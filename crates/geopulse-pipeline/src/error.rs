use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input is missing required column(s): {0}")]
    MissingColumns(String),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("record {index}: unparseable timestamp \"{value}\"")]
    Timestamp { index: usize, value: String },
}
