//! Data models for address merging
//!
//! This module contains the unified address schema every format parser
//! normalizes into, plus the source-format detection used for dispatch.

use crate::constants::{MARKUP_EXTENSION, PLAIN_TEXT_EXTENSION, TABULAR_EXTENSION};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

// =============================================================================
// Recipient
// =============================================================================

/// The addressee of a record: a person or an organization, never both
///
/// Serialized flattened into the record, so a person produces a `"name"` key
/// and an organization an `"organization"` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recipient {
    #[serde(rename = "name")]
    Person(String),
    #[serde(rename = "organization")]
    Organization(String),
}

impl Recipient {
    /// Resolve the recipient from raw name and organization values
    ///
    /// A non-empty trimmed name wins. Otherwise the trimmed organization is
    /// used as-is, even when it is empty.
    pub fn resolve(name: &str, organization: &str) -> Self {
        let name = name.trim();
        if name.is_empty() {
            Recipient::Organization(organization.trim().to_string())
        } else {
            Recipient::Person(name.to_string())
        }
    }

    /// The recipient text regardless of kind
    pub fn as_str(&self) -> &str {
        match self {
            Recipient::Person(name) => name,
            Recipient::Organization(organization) => organization,
        }
    }

    pub fn is_organization(&self) -> bool {
        matches!(self, Recipient::Organization(_))
    }
}

// =============================================================================
// Address Record
// =============================================================================

/// A normalized postal address, independent of the file it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Person or organization the address belongs to
    #[serde(flatten)]
    pub recipient: Recipient,

    /// Street line
    pub street: String,

    /// City name
    pub city: String,

    /// County, only when the source supplied a non-empty one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,

    /// Short state code
    pub state: String,

    /// Postal code, kept as text; the merge sort key
    pub zip: String,
}

impl AddressRecord {
    /// Create a record without a county
    pub fn new(
        recipient: Recipient,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            recipient,
            street: street.into(),
            city: city.into(),
            county: None,
            state: state.into(),
            zip: zip.into(),
        }
    }

    /// Attach a county
    pub fn with_county(mut self, county: impl Into<String>) -> Self {
        self.county = Some(county.into());
        self
    }

    /// Sort key used by the merger
    pub fn zip(&self) -> &str {
        &self.zip
    }
}

// =============================================================================
// Source Format
// =============================================================================

/// Input formats the merger knows how to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceFormat {
    Markup,
    Tabular,
    PlainText,
}

impl SourceFormat {
    /// Detect the format from the file extension
    ///
    /// Matching is exact and case-sensitive; anything else returns `None`
    /// and the file is skipped by the merger.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(MARKUP_EXTENSION) => Some(SourceFormat::Markup),
            Some(TABULAR_EXTENSION) => Some(SourceFormat::Tabular),
            Some(PLAIN_TEXT_EXTENSION) => Some(SourceFormat::PlainText),
            _ => None,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SourceFormat::Markup => "XML",
            SourceFormat::Tabular => "TSV",
            SourceFormat::PlainText => "TXT",
        };
        write!(f, "{}", label)
    }
}
