//! Parsing statistics and result structures shared by the format parsers
//!
//! Every parser returns a [`ParseResult`]; the merger folds the per-file
//! statistics into [`MergeStats`] for the end-of-run summary.

use crate::app::models::{AddressRecord, SourceFormat};

/// Parsing result with records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Fully normalized records, in file order
    pub records: Vec<AddressRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

impl ParseResult {
    /// Build a result and derive the record-level counters from `records`
    pub fn from_records(format: SourceFormat, entries_seen: usize, records: Vec<AddressRecord>) -> Self {
        let stats = ParseStats {
            format,
            entries_seen,
            records_parsed: records.len(),
            organization_recipients: records
                .iter()
                .filter(|r| r.recipient.is_organization())
                .count(),
            records_with_county: records.iter().filter(|r| r.county.is_some()).count(),
        };

        Self { records, stats }
    }
}

/// Simple parsing statistics for one input file
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Format the file was parsed as
    pub format: SourceFormat,

    /// Raw entries encountered (XML entities, TSV rows, text blocks)
    pub entries_seen: usize,

    /// Records produced
    pub records_parsed: usize,

    /// Records whose recipient resolved to an organization
    pub organization_recipients: usize,

    /// Records carrying a county
    pub records_with_county: usize,
}

/// Aggregate statistics for a whole merge run
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MergeStats {
    /// Files dispatched to a parser and parsed successfully
    pub files_parsed: usize,

    /// Files skipped because their extension is not recognised
    pub files_skipped: usize,

    /// Files that failed to parse
    pub files_failed: usize,

    /// Records in the merged output
    pub records_merged: usize,

    /// Records whose recipient resolved to an organization
    pub organization_recipients: usize,

    /// Records carrying a county
    pub records_with_county: usize,
}

impl MergeStats {
    /// Fold one file's statistics into the run totals
    pub fn record_file(&mut self, stats: &ParseStats) {
        self.files_parsed += 1;
        self.records_merged += stats.records_parsed;
        self.organization_recipients += stats.organization_recipients;
        self.records_with_county += stats.records_with_county;
    }
}
