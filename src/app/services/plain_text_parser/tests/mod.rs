//! Tests for plain-text block segmentation and field inference

use serde_json::json;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use super::PlainTextParser;
use crate::Error;
use crate::app::services::stats::ParseResult;

fn parse(content: &str) -> crate::Result<ParseResult> {
    PlainTextParser::new().parse_str(content, Path::new("test.txt"))
}

/// Helper to create a temporary file with given content
fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::with_suffix(".txt").unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

#[test]
fn test_single_block_round_trip() {
    let result = parse("John Smith\n123 Main St\nAnytown, CA 90210\n").unwrap();

    assert_eq!(result.records.len(), 1);
    assert_eq!(
        serde_json::to_value(&result.records[0]).unwrap(),
        json!({
            "name": "John Smith",
            "street": "123 Main St",
            "city": "Anytown",
            "state": "CA",
            "zip": "90210"
        })
    );
}

#[test]
fn test_county_line_before_locality() {
    let result =
        parse("Jane Doe\n456 Oak Ave\nORANGE COUNTY\nSpringfield, IL 62701\n").unwrap();

    assert_eq!(
        serde_json::to_value(&result.records[0]).unwrap(),
        json!({
            "name": "Jane Doe",
            "street": "456 Oak Ave",
            "county": "ORANGE",
            "city": "Springfield",
            "state": "IL",
            "zip": "62701"
        })
    );
    assert_eq!(result.stats.records_with_county, 1);
}

#[test]
fn test_two_blocks_one_blank_line() {
    let content = "John Smith\n123 Main St\nAnytown, CA 90210\n\
                   \n\
                   Jane Doe\n456 Oak Ave\nSpringfield, IL 62701\n";

    let result = parse(content).unwrap();

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.records[0].recipient.as_str(), "John Smith");
    assert_eq!(result.records[1].recipient.as_str(), "Jane Doe");
}

#[test]
fn test_trailing_and_repeated_blank_lines_add_nothing() {
    let content = "\n\nJohn Smith\n123 Main St\nAnytown, CA 90210\n\n\n\n   \n";

    let result = parse(content).unwrap();

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.stats.entries_seen, 1);
}

#[test]
fn test_final_block_without_trailing_newline() {
    let content = "John Smith\n123 Main St\nAnytown, CA 90210\n\nJane Doe\n456 Oak Ave\nSpringfield, IL 62701";

    let result = parse(content).unwrap();

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.records[1].zip, "62701");
}

#[test]
fn test_whitespace_only_line_separates_blocks() {
    let content = "A\n1 St\nX, CA 1\n \t \nB\n2 St\nY, CA 2\n";

    let result = parse(content).unwrap();

    assert_eq!(result.records.len(), 2);
}

#[test]
fn test_crlf_line_endings() {
    let content = "John Smith\r\n123 Main St\r\nAnytown, CA 90210\r\n\r\nJane Doe\r\n456 Oak Ave\r\nSpringfield, IL 62701\r\n";

    let result = parse(content).unwrap();

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.records[0].zip, "90210");
    assert_eq!(result.records[1].state, "IL");
}

#[test]
fn test_lines_are_trimmed() {
    let result = parse("  John Smith  \n\t123 Main St \n Anytown, CA 90210 \n").unwrap();

    let record = &result.records[0];
    assert_eq!(record.recipient.as_str(), "John Smith");
    assert_eq!(record.street, "123 Main St");
    assert_eq!(record.city, "Anytown");
    assert_eq!(record.zip, "90210");
}

#[test]
fn test_last_locality_line_wins() {
    let content = "John Smith\n123 Main St\nOldtown, NY 10001\nAnytown, CA 90210\n";

    let result = parse(content).unwrap();

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].city, "Anytown");
    assert_eq!(result.records[0].zip, "90210");
}

#[test]
fn test_county_line_after_locality_still_sets_county() {
    let content = "John Smith\n123 Main St\nAnytown, CA 90210\nKING COUNTY\n";

    let result = parse(content).unwrap();

    assert_eq!(result.records[0].county.as_deref(), Some("KING"));
    assert_eq!(result.records[0].city, "Anytown");
}

#[test]
fn test_state_without_zip() {
    let result = parse("John Smith\n123 Main St\nAnytown, CA\n").unwrap();

    assert_eq!(result.records[0].state, "CA");
    assert_eq!(result.records[0].zip, "");
}

#[test]
fn test_every_record_uses_name_key() {
    let result = parse("Acme Corp\n1 Industrial Way\nSpringfield, IL 62701\n").unwrap();

    let value = serde_json::to_value(&result.records[0]).unwrap();
    assert_eq!(value["name"], "Acme Corp");
    assert!(value.get("organization").is_none());
}

#[test]
fn test_incomplete_block_is_kept_with_empty_locality() {
    let result = parse("John Smith\n123 Main St\n\nJane Doe\n456 Oak Ave\nSpringfield, IL 62701\n")
        .unwrap();

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.records[0].street, "123 Main St");
    assert_eq!(result.records[0].city, "");
    assert_eq!(result.records[0].zip, "");
}

#[test]
fn test_locality_without_separator_is_fatal() {
    let content = "John Smith\n123 Main St\nAnytown, CA 90210\n\nJane Doe\n456 Oak Ave\nSpringfield IL 62701\n";

    let error = parse(content).unwrap_err();

    match error {
        Error::MalformedPlainText { file, line, message } => {
            assert_eq!(file, Path::new("test.txt"));
            assert_eq!(line, 7);
            assert!(message.contains("Springfield IL 62701"));
        }
        other => panic!("Expected MalformedPlainText, got {:?}", other),
    }
}

#[test]
fn test_empty_file_has_no_records() {
    let result = parse("").unwrap();
    assert!(result.records.is_empty());
}

#[test]
fn test_parse_file_reads_from_disk() {
    let temp_file = create_temp_file("John Smith\n123 Main St\nAnytown, CA 90210");

    let result = PlainTextParser::new().parse_file(temp_file.path()).unwrap();

    assert_eq!(result.records.len(), 1);
}

#[test]
fn test_parse_file_missing_file_is_io_error() {
    let error = PlainTextParser::new()
        .parse_file(Path::new("/nonexistent/addresses.txt"))
        .unwrap_err();

    assert!(matches!(error, Error::Io { .. }));
}
