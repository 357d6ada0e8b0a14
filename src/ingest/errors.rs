use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Ingest error: {0}")]
    Io(#[from] io::Error),
    #[error("Ingest error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Ingest error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Ingest error: unsupported file format for [{0}], expected .json or .csv")]
    UnsupportedFormat(String)
}
