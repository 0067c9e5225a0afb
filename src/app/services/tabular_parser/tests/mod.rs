//! Tests for the TSV address parser and its column mapping

use csv::StringRecord;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use super::{ColumnMapping, TabularParser};
use crate::Error;
use crate::app::models::Recipient;
use crate::app::services::stats::ParseResult;

const FULL_HEADER: &str = "name\torganization\tstreet\tcity\tcounty\tstate\tzip";

/// Helper to create TSV content from a header and tab-joined rows
fn create_test_tsv(header: &str, rows: &[&str]) -> String {
    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    content
}

/// Helper to create a temporary file with given content
fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::with_suffix(".tsv").unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

fn parse(content: &str) -> crate::Result<ParseResult> {
    TabularParser::new().parse_str(content, Path::new("test.tsv"))
}

#[test]
fn test_column_mapping_analyze() {
    let headers = StringRecord::from(vec!["zip", " name ", "extra", "street"]);

    let mapping = ColumnMapping::analyze(&headers);

    assert_eq!(mapping.get_index("zip"), Some(0));
    assert_eq!(mapping.get_index("name"), Some(1));
    assert_eq!(mapping.get_index("street"), Some(3));
    assert_eq!(mapping.get_index("county"), None);
    assert_eq!(mapping.unknown_columns, vec!["extra".to_string()]);
    assert_eq!(
        mapping.missing_columns,
        vec!["organization", "city", "county", "state"]
    );
}

#[test]
fn test_column_mapping_field_trims_and_defaults() {
    let headers = StringRecord::from(vec!["name", "zip"]);
    let row = StringRecord::from(vec!["  John  ", "90210 "]);
    let mapping = ColumnMapping::analyze(&headers);

    assert_eq!(mapping.field(&row, "name"), "John");
    assert_eq!(mapping.field(&row, "zip"), "90210");
    assert_eq!(mapping.field(&row, "county"), "");
}

#[test]
fn test_person_row() {
    let content = create_test_tsv(
        FULL_HEADER,
        &["John Smith\t\t123 Main St\tAnytown\t\tCA\t90210"],
    );

    let result = parse(&content).unwrap();

    assert_eq!(result.records.len(), 1);
    let record = &result.records[0];
    assert_eq!(record.recipient, Recipient::Person("John Smith".to_string()));
    assert_eq!(record.street, "123 Main St");
    assert_eq!(record.city, "Anytown");
    assert_eq!(record.state, "CA");
    assert_eq!(record.zip, "90210");
}

#[test]
fn test_blank_name_uses_organization() {
    let content = create_test_tsv(
        FULL_HEADER,
        &["  \tAcme Corp\t1 Industrial Way\tSpringfield\t\tIL\t62701"],
    );

    let result = parse(&content).unwrap();

    assert_eq!(
        result.records[0].recipient,
        Recipient::Organization("Acme Corp".to_string())
    );
}

#[test]
fn test_empty_organization_is_still_emitted() {
    let content = create_test_tsv(FULL_HEADER, &["\t\t1 Nowhere Rd\tSpringfield\t\tIL\t62701"]);

    let result = parse(&content).unwrap();

    assert_eq!(
        result.records[0].recipient,
        Recipient::Organization(String::new())
    );
}

#[test]
fn test_county_only_when_non_empty() {
    let content = create_test_tsv(
        FULL_HEADER,
        &[
            "A\t\t1 First St\tSeattle\tKING\tWA\t98101",
            "B\t\t2 Second St\tSeattle\t   \tWA\t98102",
        ],
    );

    let result = parse(&content).unwrap();

    assert_eq!(result.records[0].county.as_deref(), Some("KING"));
    assert_eq!(result.records[1].county, None);

    let value = serde_json::to_value(&result.records[1]).unwrap();
    assert!(value.get("county").is_none());
    assert_eq!(result.stats.records_with_county, 1);
}

#[test]
fn test_column_order_is_irrelevant() {
    let content = create_test_tsv(
        "zip\tstate\tcity\tstreet\tname",
        &["10001\tNY\tNew York\t350 Fifth Ave\tEmpire Tenant"],
    );

    let result = parse(&content).unwrap();

    let record = &result.records[0];
    assert_eq!(record.recipient.as_str(), "Empire Tenant");
    assert_eq!(record.street, "350 Fifth Ave");
    assert_eq!(record.city, "New York");
    assert_eq!(record.state, "NY");
    assert_eq!(record.zip, "10001");
    assert_eq!(record.county, None);
}

#[test]
fn test_missing_columns_read_as_empty() {
    let content = create_test_tsv("name\tzip", &["Solo\t55555"]);

    let result = parse(&content).unwrap();

    let record = &result.records[0];
    assert_eq!(record.street, "");
    assert_eq!(record.city, "");
    assert_eq!(record.state, "");
    assert_eq!(record.zip, "55555");
}

#[test]
fn test_header_only_file_has_no_records() {
    let result = parse(&create_test_tsv(FULL_HEADER, &[])).unwrap();

    assert!(result.records.is_empty());
    assert_eq!(result.stats.entries_seen, 0);
}

#[test]
fn test_blank_lines_are_skipped() {
    let content = format!(
        "{}\nA\t\t1 St\tX\t\tCA\t1\n\nB\t\t2 St\tY\t\tCA\t2\n",
        FULL_HEADER
    );

    let result = parse(&content).unwrap();

    assert_eq!(result.records.len(), 2);
}

#[test]
fn test_short_row_is_fatal() {
    let content = create_test_tsv(
        FULL_HEADER,
        &[
            "A\t\t1 St\tX\t\tCA\t1",
            "B\t\t2 St\tY",
        ],
    );

    let error = parse(&content).unwrap_err();

    match error {
        Error::MalformedTabular { file, message, source } => {
            assert_eq!(file, Path::new("test.tsv"));
            assert!(message.contains("row 2"));
            assert!(message.contains("expected 7 fields, found 4"));
            assert!(source.is_none());
        }
        other => panic!("Expected MalformedTabular, got {:?}", other),
    }
}

#[test]
fn test_trailing_tab_row_is_accepted() {
    let content = create_test_tsv(FULL_HEADER, &["Amy\t\t2 St\tY\t\tNY\t10001\t"]);

    let result = parse(&content).unwrap();

    assert_eq!(result.records.len(), 1);
    let record = &result.records[0];
    assert_eq!(record.recipient, Recipient::Person("Amy".to_string()));
    assert_eq!(record.zip, "10001");
    assert_eq!(record.county, None);
}

#[test]
fn test_extra_unnamed_fields_are_ignored() {
    let content = create_test_tsv(
        FULL_HEADER,
        &[
            "A\t\t1 St\tX\t\tCA\t1\tstray\tvalues",
            "B\t\t2 St\tY\t\tCA\t2",
        ],
    );

    let result = parse(&content).unwrap();

    let zips: Vec<&str> = result.records.iter().map(|r| r.zip()).collect();
    assert_eq!(zips, vec!["1", "2"]);
}

#[test]
fn test_parse_file_reads_from_disk() {
    let temp_file = create_temp_file(&create_test_tsv(
        FULL_HEADER,
        &["Jane Doe\t\t456 Oak Ave\tSpringfield\tSANGAMON\tIL\t62701"],
    ));

    let result = TabularParser::new().parse_file(temp_file.path()).unwrap();

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].county.as_deref(), Some("SANGAMON"));
}

#[test]
fn test_parse_file_missing_file() {
    let error = TabularParser::new()
        .parse_file(Path::new("/nonexistent/addresses.tsv"))
        .unwrap_err();

    assert!(matches!(error, Error::MalformedTabular { .. }));
}
