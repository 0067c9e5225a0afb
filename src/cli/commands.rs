//! Command implementations for the address merger CLI
//!
//! This module contains the main command execution logic: logging setup,
//! input validation, merging and writing the JSON document.

use crate::app::models::AddressRecord;
use crate::app::services::input_validation::ensure_regular_files;
use crate::app::services::merger::AddressMerger;
use crate::app::services::stats::MergeStats;
use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::{Error, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Main command runner for the address merger
///
/// This function orchestrates the entire workflow:
/// 1. Set up logging and configuration
/// 2. Validate every input path before parsing anything
/// 3. Parse and merge the files
/// 4. Write the sorted JSON document
pub fn run(args: Args) -> Result<MergeStats> {
    let start_time = Instant::now();

    let config = build_configuration(&args)?;
    setup_logging(&config);

    info!("Starting address merger");
    debug!("Command line arguments: {:?}", args);

    ensure_regular_files(&args.files)?;

    let merger = AddressMerger::new(config.error_policy);
    let output = merger.merge(&args.files)?;

    match &args.output_path {
        Some(path) => write_to_file(&output.records, path)?,
        None => write_json(&output.records, io::stdout().lock())?,
    }

    info!(
        "Merged {} records from {} file(s) ({} skipped) in {:.2?}",
        output.stats.records_merged,
        output.stats.files_parsed,
        output.stats.files_skipped,
        start_time.elapsed()
    );

    Ok(output.stats)
}

/// Build the runtime configuration from CLI arguments
pub fn build_configuration(args: &Args) -> Result<Config> {
    let config = Config::default()
        .with_error_policy(args.error_policy())
        .with_log_level(args.get_log_level());

    config.validate()?;
    Ok(config)
}

/// Set up structured logging on stderr; stdout carries only the document
fn setup_logging(config: &Config) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, config.log_level)));

    // A subscriber may already be installed when running embedded or under tests
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", config.log_level);
}

/// Serialize records as a two-space indented JSON array followed by a newline
pub fn write_json<W: Write>(records: &[AddressRecord], writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);

    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| {
        if e.is_io() {
            Error::io("Failed to write output", e.into())
        } else {
            Error::output("Failed to serialize address records", e)
        }
    })?;
    writeln!(writer).map_err(|e| Error::io("Failed to write output", e))?;
    writer
        .flush()
        .map_err(|e| Error::io("Failed to flush output", e))?;

    Ok(())
}

fn write_to_file(records: &[AddressRecord], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        Error::io(format!("Failed to create output file {}", path.display()), e)
    })?;

    write_json(records, file)?;
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
