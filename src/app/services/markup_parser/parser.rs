//! Core XML entity extraction
//!
//! Walks `ENTITY/ENT` elements and normalizes each one into an
//! [`AddressRecord`]. Any structural problem aborts the whole file.

use roxmltree::{Document, Node, ParsingOptions};
use std::path::Path;
use tracing::{debug, info};

use crate::app::models::{AddressRecord, Recipient, SourceFormat};
use crate::app::services::stats::ParseResult;
use crate::constants::markup;
use crate::{Error, Result};

/// Parser for XML address exports
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkupParser;

impl MarkupParser {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse an XML file
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing XML file: {}", file_path.display());

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::malformed_markup(file_path, format!("failed to read file: {}", e), None)
        })?;

        self.parse_str(&content, file_path)
    }

    /// Parse XML content; `file_path` is used for diagnostics only
    pub fn parse_str(&self, content: &str, file_path: &Path) -> Result<ParseResult> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let document = Document::parse_with_options(content, options).map_err(|e| {
            Error::malformed_markup(file_path, format!("invalid XML: {}", e), Some(e))
        })?;

        let entities: Vec<Node> = document
            .root_element()
            .children()
            .filter(|n| n.has_tag_name(markup::ENTITY_CONTAINER))
            .flat_map(|container| container.children())
            .filter(|n| n.has_tag_name(markup::ENTITY))
            .collect();

        let mut records = Vec::with_capacity(entities.len());
        for (index, entity) in entities.iter().enumerate() {
            let record = parse_entity(entity).map_err(|missing| {
                Error::malformed_markup(
                    file_path,
                    format!(
                        "entity {} (line {}) has no <{}> element",
                        index + 1,
                        document.text_pos_at(entity.range().start).row,
                        missing
                    ),
                    None,
                )
            })?;
            records.push(record);
        }

        debug!(
            "Extracted {} records from {} entities in {}",
            records.len(),
            entities.len(),
            file_path.display()
        );

        Ok(ParseResult::from_records(
            SourceFormat::Markup,
            entities.len(),
            records,
        ))
    }
}

/// Normalize one `ENT` element, returning the name of the first missing child on failure
fn parse_entity(entity: &Node) -> std::result::Result<AddressRecord, &'static str> {
    let name = child_text(entity, markup::NAME)?;
    let company = child_text(entity, markup::COMPANY)?;
    let street = child_text(entity, markup::STREET)?;
    let city = child_text(entity, markup::CITY)?;
    let state = child_text(entity, markup::STATE)?;
    let postal_code = child_text(entity, markup::POSTAL_CODE)?;

    Ok(AddressRecord::new(
        Recipient::resolve(name, company),
        street,
        city,
        state,
        postal_code,
    ))
}

/// Trimmed text of the first child element named `tag`
///
/// An element with no text content reads as the empty string; a missing
/// element is an error.
fn child_text<'a>(entity: &Node<'a, '_>, tag: &'static str) -> std::result::Result<&'a str, &'static str> {
    entity
        .children()
        .find(|n| n.has_tag_name(tag))
        .map(|n| n.text().unwrap_or("").trim())
        .ok_or(tag)
}
