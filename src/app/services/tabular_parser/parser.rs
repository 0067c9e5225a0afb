//! Core TSV parser implementation
//!
//! Reads the header row into a [`ColumnMapping`] and normalizes every data
//! row. Trailing fields beyond the header are ignored; a row with fewer
//! fields than the header is rejected along with the whole file.

use csv::StringRecord;
use std::path::Path;
use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use crate::app::models::{AddressRecord, Recipient, SourceFormat};
use crate::app::services::stats::ParseResult;
use crate::constants::{TABULAR_DELIMITER, columns};
use crate::{Error, Result};

/// Parser for tab-delimited address exports
#[derive(Debug, Default, Clone, Copy)]
pub struct TabularParser;

impl TabularParser {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a TSV file
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing TSV file: {}", file_path.display());

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::malformed_tabular(file_path, format!("failed to read file: {}", e), None)
        })?;

        self.parse_str(&content, file_path)
    }

    /// Parse TSV content; `file_path` is used for diagnostics only
    pub fn parse_str(&self, content: &str, file_path: &Path) -> Result<ParseResult> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(TABULAR_DELIMITER)
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = reader.headers().map_err(|e| {
            Error::malformed_tabular(file_path, format!("failed to read header row: {}", e), Some(e))
        })?;

        let header_count = headers.len();
        let mapping = ColumnMapping::analyze(headers);
        if !mapping.missing_columns.is_empty() {
            debug!(
                "{} has no column(s) {:?}; treating them as empty",
                file_path.display(),
                mapping.missing_columns
            );
        }
        if !mapping.unknown_columns.is_empty() {
            warn!(
                "Ignoring unrecognised column(s) {:?} in {}",
                mapping.unknown_columns,
                file_path.display()
            );
        }

        let mut records = Vec::new();
        let mut rows_seen = 0;

        for result in reader.records() {
            rows_seen += 1;

            let row = result.map_err(|e| {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                Error::malformed_tabular(
                    file_path,
                    format!("malformed row {} (line {}): {}", rows_seen, line, e),
                    Some(e),
                )
            })?;

            if row.len() < header_count {
                let line = row.position().map(|p| p.line()).unwrap_or(0);
                return Err(Error::malformed_tabular(
                    file_path,
                    format!(
                        "malformed row {} (line {}): expected {} fields, found {}",
                        rows_seen,
                        line,
                        header_count,
                        row.len()
                    ),
                    None,
                ));
            }

            records.push(parse_address_row(&row, &mapping));
        }

        debug!(
            "Parsed {} records from {} rows in {}",
            records.len(),
            rows_seen,
            file_path.display()
        );

        Ok(ParseResult::from_records(
            SourceFormat::Tabular,
            rows_seen,
            records,
        ))
    }
}

/// Normalize a single data row
///
/// Street, city, state and zip are always set, even when empty; county is
/// attached only when the column holds a non-empty value.
pub fn parse_address_row(row: &StringRecord, mapping: &ColumnMapping) -> AddressRecord {
    let recipient = Recipient::resolve(
        mapping.field(row, columns::NAME),
        mapping.field(row, columns::ORGANIZATION),
    );

    let record = AddressRecord::new(
        recipient,
        mapping.field(row, columns::STREET),
        mapping.field(row, columns::CITY),
        mapping.field(row, columns::STATE),
        mapping.field(row, columns::ZIP),
    );

    match mapping.field(row, columns::COUNTY) {
        "" => record,
        county => record.with_county(county),
    }
}
