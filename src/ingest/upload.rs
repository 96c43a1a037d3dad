// src/ingest/upload.rs

use crate::domain::{ListingField, RawListingRecord, CANONICAL_HEADERS};
use crate::ingest::cells::coerce;
use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;
use tracing::{info, warn};

/// Why an upload was turned away. None of these let any row through.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Only .csv files are accepted (got \"{file_name}\")")]
    UnsupportedExtension { file_name: String },

    #[error("File is larger than the {limit} byte upload limit")]
    TooLarge { limit: usize },

    #[error("CSV columns do not match the listing template")]
    SchemaMismatch { found: Vec<String> },

    #[error("Could not read CSV: {0}")]
    ParseFailure(#[from] csv::Error),
}

/// A listing sheet that passed every upload check.
#[derive(Debug)]
pub struct ParsedUpload {
    pub file_name: String,
    pub records: Vec<RawListingRecord>,
}

/// Compares everything after the last `.` with `.csv`, case-sensitively.
pub fn has_csv_extension(file_name: &str) -> bool {
    file_name
        .rfind('.')
        .map(|i| &file_name[i..] == ".csv")
        .unwrap_or(false)
}

/// Order matters: the same columns in a different order are rejected.
pub fn matches_canonical_headers(headers: &StringRecord) -> bool {
    headers.iter().eq(CANONICAL_HEADERS.iter().copied())
}

/// Checks and parses an uploaded listing sheet.
///
/// The file name and size are checked before any parsing. The header row
/// must equal `CANONICAL_HEADERS`. Any malformed row fails the whole upload.
pub fn parse_listings(
    file_name: &str,
    bytes: &[u8],
    max_bytes: usize,
) -> Result<ParsedUpload, UploadError> {
    if !has_csv_extension(file_name) {
        return Err(UploadError::UnsupportedExtension {
            file_name: file_name.to_string(),
        });
    }

    if bytes.len() > max_bytes {
        return Err(UploadError::TooLarge { limit: max_bytes });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    if !matches_canonical_headers(&headers) {
        return Err(UploadError::SchemaMismatch {
            found: headers.iter().map(str::to_string).collect(),
        });
    }

    let fields: Vec<Option<ListingField>> =
        headers.iter().map(ListingField::from_header).collect();

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        records.push(record_from_row(&fields, &row, i + 1));
    }

    info!(file_name, rows = records.len(), "parsed listing upload");

    Ok(ParsedUpload {
        file_name: file_name.to_string(),
        records,
    })
}

/// Builds one record. A filled-in cell that does not fit its column is logged
/// and kept as text, so it still counts as present.
fn record_from_row(
    fields: &[Option<ListingField>],
    row: &StringRecord,
    row_number: usize,
) -> RawListingRecord {
    let mut record = RawListingRecord::default();

    for (field, raw) in fields.iter().zip(row.iter()) {
        let Some(field) = *field else { continue };

        match coerce(field.kind(), raw) {
            Ok(Some(value)) => {
                record.assign(field, value);
            }
            Ok(None) => {}
            Err(e) => {
                warn!(row = row_number, column = field.header(), "keeping cell as text: {e}");
                record.assign_raw(field, raw.trim().to_string());
            }
        }
    }

    record
}
