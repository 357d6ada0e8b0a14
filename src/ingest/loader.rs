use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde_json::{Map, Number, Value};
use tokio::fs;
use tracing::{debug, error};

use crate::ingest::IngestError;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Format {
    Json,
    Csv
}

impl Format {
    /// Picks the format from the file extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let extension = path.extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(IngestError::UnsupportedFormat(path.display().to_string()))
        }
    }
}

/// Reads a transaction log from disk into a dynamic batch.
///
/// A JSON file may hold any document; shape validation is left to the analyzer
/// so that a non-array document is reported the same way as any other
/// non-sequence input.
pub async fn load_batch(path: impl AsRef<Path>) -> Result<Value, IngestError> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let contents = fs::read_to_string(path).await?;

    debug!("Read [{}] bytes of {format:?} from {}", contents.len(), path.display());

    parse_batch(&contents, format)
}

/// Parses an in-memory transaction log.
///
/// CSV input becomes an array of objects keyed by the header row. Empty cells
/// are left out, and the `amount` column is only a number when the cell holds
/// a number literal.
pub fn parse_batch(contents: &str, format: Format) -> Result<Value, IngestError> {
    match format {
        Format::Json => Ok(serde_json::from_str(contents)?),
        Format::Csv => parse_csv(contents)
    }
}

fn parse_csv(contents: &str) -> Result<Value, IngestError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(contents.as_bytes());

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();

    for result in reader.records() {
        match result {
            Ok(row) => records.push(row_to_value(&headers, &row)),
            Err(error) => {
                error!("CSV deserialization error: {error}");
            }
        }
    }

    Ok(Value::Array(records))
}

fn row_to_value(headers: &StringRecord, row: &StringRecord) -> Value {
    let mut fields = Map::new();

    for (name, cell) in headers.iter().zip(row.iter()) {
        if cell.is_empty() {
            continue;
        }

        let value = if name == "amount" {
            serde_json::from_str::<Number>(cell)
                .map(Value::Number)
                .unwrap_or_else(|_| Value::String(cell.to_string()))
        } else {
            Value::String(cell.to_string())
        };

        fields.insert(name.to_string(), value);
    }

    Value::Object(fields)
}
