use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;

use crate::source::SourceError;

/// Parse a full CSV export (header row first) into typed rows.
///
/// # Errors
///
/// Returns `SourceError::Csv` if the header lacks a required column or any
/// row fails to deserialize.
pub fn parse_rows<T: DeserializeOwned>(csv_text: &str) -> Result<Vec<T>, SourceError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(csv_text.as_bytes());
    let rows = reader.deserialize().collect::<Result<Vec<T>, csv::Error>>()?;
    Ok(rows)
}
