//! Address Merger Library
//!
//! A Rust library for merging postal address exports held in inconsistent
//! legacy formats into one canonical, zip-sorted sequence of records.
//!
//! This library provides tools for:
//! - Parsing XML address exports (`ENTITY/ENT` entity elements)
//! - Parsing tab-delimited exports with header-driven column lookup
//! - Parsing label-free plain-text address blocks with a positional state machine
//! - Merging and stably sorting records from any mix of input files
//! - Explicit per-file error aggregation with a configurable failure policy

use std::path::{Path, PathBuf};

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod input_validation;
        pub mod markup_parser;
        pub mod merger;
        pub mod plain_text_parser;
        pub mod stats;
        pub mod tabular_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AddressRecord, Recipient, SourceFormat};
pub use config::{Config, ErrorPolicy};

/// Result type alias for the address merger
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for address ingestion, merging and output
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// One or more input paths do not reference an existing regular file
    #[error("Invalid input path(s): {}", format_paths(.paths))]
    InvalidInputPath { paths: Vec<PathBuf> },

    /// XML structure violates the entity contract
    #[error("Error parsing XML file '{}': {message}", .file.display())]
    MalformedMarkup {
        file: PathBuf,
        message: String,
        #[source]
        source: Option<roxmltree::Error>,
    },

    /// Tab-delimited file could not be read as header plus rows
    #[error("Error parsing TSV file '{}': {message}", .file.display())]
    MalformedTabular {
        file: PathBuf,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Plain-text block violates the positional layout
    #[error("Error parsing TXT file '{}' at line {line}: {message}", .file.display())]
    MalformedPlainText {
        file: PathBuf,
        line: usize,
        message: String,
    },

    /// Records could not be encoded as JSON
    #[error("Output error: {message}")]
    Output {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Several input files failed under the collect-all policy
    #[error("{} input file(s) failed:\n{}", .failures.len(), format_failures(.failures))]
    MultipleFailures { failures: Vec<Error> },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid input path error
    pub fn invalid_input_path(paths: Vec<PathBuf>) -> Self {
        Self::InvalidInputPath { paths }
    }

    /// Create a malformed markup error
    pub fn malformed_markup(
        file: impl AsRef<Path>,
        message: impl Into<String>,
        source: Option<roxmltree::Error>,
    ) -> Self {
        Self::MalformedMarkup {
            file: file.as_ref().to_path_buf(),
            message: message.into(),
            source,
        }
    }

    /// Create a malformed tabular error
    pub fn malformed_tabular(
        file: impl AsRef<Path>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::MalformedTabular {
            file: file.as_ref().to_path_buf(),
            message: message.into(),
            source,
        }
    }

    /// Create a malformed plain-text error
    pub fn malformed_plain_text(
        file: impl AsRef<Path>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedPlainText {
            file: file.as_ref().to_path_buf(),
            line,
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Output {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Wrap collected per-file failures, unwrapping a single failure
    pub fn from_failures(mut failures: Vec<Error>) -> Self {
        if failures.len() == 1 {
            failures.remove(0)
        } else {
            Self::MultipleFailures { failures }
        }
    }

    /// The input file this error refers to, if any
    pub fn file(&self) -> Option<&Path> {
        match self {
            Self::MalformedMarkup { file, .. }
            | Self::MalformedTabular { file, .. }
            | Self::MalformedPlainText { file, .. } => Some(file),
            _ => None,
        }
    }
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_failures(failures: &[Error]) -> String {
    failures
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}
