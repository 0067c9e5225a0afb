//! Header-driven column lookup for tab-delimited exports
//!
//! Column order in the exports is not fixed, and older exports omit some
//! columns entirely, so every field is looked up by header name.

use csv::StringRecord;
use std::collections::HashMap;

use crate::constants::columns;

/// Column mapping built from the header row
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Column name to index mapping
    pub name_to_index: HashMap<String, usize>,

    /// Recognised columns absent from the header
    pub missing_columns: Vec<&'static str>,

    /// Header columns the parser does not use
    pub unknown_columns: Vec<String>,
}

impl ColumnMapping {
    /// Analyze the header row
    pub fn analyze(headers: &StringRecord) -> Self {
        let mut name_to_index = HashMap::new();
        let mut unknown_columns = Vec::new();

        for (index, header) in headers.iter().enumerate() {
            let column_name = header.trim().to_string();

            if !columns::ALL.contains(&column_name.as_str()) {
                unknown_columns.push(column_name.clone());
            }

            // First occurrence wins for duplicated headers
            name_to_index.entry(column_name).or_insert(index);
        }

        let missing_columns = columns::ALL
            .iter()
            .copied()
            .filter(|name| !name_to_index.contains_key(*name))
            .collect();

        ColumnMapping {
            name_to_index,
            missing_columns,
            unknown_columns,
        }
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Trimmed value of a named column; a missing column reads as empty
    pub fn field<'r>(&self, record: &'r StringRecord, column_name: &str) -> &'r str {
        self.get_index(column_name)
            .and_then(|index| record.get(index))
            .map(str::trim)
            .unwrap_or("")
    }
}
