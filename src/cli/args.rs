//! Command-line argument definitions for the address merger
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::ErrorPolicy;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the address merger
///
/// Merges address exports from XML, TSV and plain-text files into a single
/// JSON array sorted by zip code.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "address-merger",
    version,
    about = "Merge XML, TSV and plain-text address exports into one zip-sorted JSON document",
    long_about = "Parses every input file with the parser matching its extension (.xml, .tsv, .txt), \
                  normalizes each address into a common schema, merges all records and prints them \
                  as a pretty-printed JSON array sorted by zip code. Files with other extensions are \
                  skipped. Any invalid path or malformed file fails the run with exit status 1."
)]
pub struct Args {
    /// Input files to merge
    ///
    /// Each must be an existing regular file. The extension selects the parser:
    /// .xml (ENTITY/ENT elements), .tsv (tab-delimited with header row),
    /// .txt (blank-line separated address blocks).
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Write the JSON document here instead of standard output
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Write the JSON document to a file instead of stdout"
    )]
    pub output_path: Option<PathBuf>,

    /// Parse every file before reporting failures
    ///
    /// By default the run stops at the first file that fails to parse. With
    /// this flag all files are parsed and every failure is reported; the run
    /// still exits with status 1 and prints no records.
    #[arg(
        long = "collect-errors",
        help = "Report failures from all files instead of stopping at the first"
    )]
    pub collect_errors: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(short = 'q', long = "quiet", help = "Only log errors")]
    pub quiet: bool,
}

impl Args {
    /// Get the log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Error policy selected by --collect-errors
    pub fn error_policy(&self) -> ErrorPolicy {
        if self.collect_errors {
            ErrorPolicy::CollectAll
        } else {
            ErrorPolicy::FailFast
        }
    }
}
