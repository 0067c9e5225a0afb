//! Plain-text parser orchestration
//!
//! Feeds each line of the file to a [`BlockStateMachine`] and collects the
//! records it emits, flushing the last block at end of input.

use std::path::Path;
use tracing::{debug, info};

use super::state_machine::BlockStateMachine;
use crate::app::models::SourceFormat;
use crate::app::services::stats::ParseResult;
use crate::{Error, Result};

/// Parser for blank-line separated plain-text address blocks
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextParser;

impl PlainTextParser {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a plain-text file
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing TXT file: {}", file_path.display());

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(format!("Failed to read file {}", file_path.display()), e)
        })?;

        self.parse_str(&content, file_path)
    }

    /// Parse plain-text content; `file_path` is used for diagnostics only
    pub fn parse_str(&self, content: &str, file_path: &Path) -> Result<ParseResult> {
        let mut machine = BlockStateMachine::new();
        let mut records = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;
            let finished = machine
                .feed(line_number, line)
                .map_err(|message| Error::malformed_plain_text(file_path, line_number, message))?;

            if let Some(record) = finished {
                debug!(
                    "Block ending at line {} -> {}",
                    line_number,
                    record.recipient.as_str()
                );
                records.push(record);
            }
        }

        if let Some(record) = machine.finish() {
            debug!("Final block without trailing blank line -> {}", record.recipient.as_str());
            records.push(record);
        }

        debug!(
            "Parsed {} address blocks from {}",
            records.len(),
            file_path.display()
        );

        let blocks = records.len();
        Ok(ParseResult::from_records(
            SourceFormat::PlainText,
            blocks,
            records,
        ))
    }
}
