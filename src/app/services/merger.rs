//! Merging and sorting records from all input files
//!
//! Files are dispatched to a parser by extension and parsed one at a time,
//! in input order. Each file yields its own `Result`; the configured
//! [`ErrorPolicy`] decides whether the first failure stops the run or all
//! failures are collected and reported together. Either way no records are
//! returned when any file failed.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::app::models::{AddressRecord, SourceFormat};
use crate::app::services::markup_parser::MarkupParser;
use crate::app::services::plain_text_parser::PlainTextParser;
use crate::app::services::stats::{MergeStats, ParseResult};
use crate::app::services::tabular_parser::TabularParser;
use crate::config::ErrorPolicy;
use crate::{Error, Result};

/// Outcome of dispatching one input file
#[derive(Debug)]
pub enum FileOutcome {
    /// Parsed successfully
    Parsed(ParseResult),
    /// Extension not recognised; no parser ran
    Skipped,
    /// Parser rejected the file
    Failed(Error),
}

/// Merged, zip-sorted records plus run statistics
#[derive(Debug, Clone)]
pub struct MergeOutput {
    pub records: Vec<AddressRecord>,
    pub stats: MergeStats,
}

/// Dispatches files to the format parsers and merges their output
#[derive(Debug, Default, Clone)]
pub struct AddressMerger {
    error_policy: ErrorPolicy,
    markup: MarkupParser,
    tabular: TabularParser,
    plain_text: PlainTextParser,
}

impl AddressMerger {
    pub fn new(error_policy: ErrorPolicy) -> Self {
        Self {
            error_policy,
            ..Self::default()
        }
    }

    /// Parse one file with the parser its extension selects
    pub fn parse_path(&self, path: &Path) -> FileOutcome {
        let Some(format) = SourceFormat::from_path(path) else {
            debug!("Skipping {}: unrecognised extension", path.display());
            return FileOutcome::Skipped;
        };

        let result = match format {
            SourceFormat::Markup => self.markup.parse_file(path),
            SourceFormat::Tabular => self.tabular.parse_file(path),
            SourceFormat::PlainText => self.plain_text.parse_file(path),
        };

        match result {
            Ok(parsed) => FileOutcome::Parsed(parsed),
            Err(e) => FileOutcome::Failed(e),
        }
    }

    /// Parse every path, concatenate in input order and sort by zip
    pub fn merge(&self, paths: &[PathBuf]) -> Result<MergeOutput> {
        let mut stats = MergeStats::default();
        let mut records = Vec::new();
        let mut failures = Vec::new();

        for path in paths {
            match self.parse_path(path) {
                FileOutcome::Parsed(parsed) => {
                    info!(
                        "{} {}: {} records",
                        parsed.stats.format,
                        path.display(),
                        parsed.stats.records_parsed
                    );
                    stats.record_file(&parsed.stats);
                    records.extend(parsed.records);
                }
                FileOutcome::Skipped => stats.files_skipped += 1,
                FileOutcome::Failed(e) => {
                    debug!("Parse failure recorded: {}", e);
                    stats.files_failed += 1;
                    failures.push(e);

                    if self.error_policy == ErrorPolicy::FailFast {
                        break;
                    }
                }
            }
        }

        if !failures.is_empty() {
            return Err(Error::from_failures(failures));
        }

        sort_by_zip(&mut records);

        Ok(MergeOutput { records, stats })
    }
}

/// Stable ascending sort on the zip string (lexicographic, not numeric)
pub fn sort_by_zip(records: &mut [AddressRecord]) {
    records.sort_by(|a, b| a.zip().cmp(b.zip()));
}
