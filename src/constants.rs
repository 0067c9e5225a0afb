//! Application constants for the address merger
//!
//! This module contains the element names, column names, tokens and
//! file-extension mappings shared by the format parsers.

// =============================================================================
// Input File Extensions
// =============================================================================

/// Extension dispatched to the markup parser
pub const MARKUP_EXTENSION: &str = "xml";

/// Extension dispatched to the tabular parser
pub const TABULAR_EXTENSION: &str = "tsv";

/// Extension dispatched to the plain-text parser
pub const PLAIN_TEXT_EXTENSION: &str = "txt";

// =============================================================================
// Markup Format
// =============================================================================

/// Element names used by the XML address exports
pub mod markup {
    /// Container element directly beneath the document root
    pub const ENTITY_CONTAINER: &str = "ENTITY";

    /// One address entity inside the container
    pub const ENTITY: &str = "ENT";

    pub const NAME: &str = "NAME";
    pub const COMPANY: &str = "COMPANY";
    pub const STREET: &str = "STREET";
    pub const CITY: &str = "CITY";
    pub const STATE: &str = "STATE";
    pub const POSTAL_CODE: &str = "POSTAL_CODE";
}

// =============================================================================
// Tabular Format
// =============================================================================

/// Column names expected in the TSV header row
pub mod columns {
    pub const NAME: &str = "name";
    pub const ORGANIZATION: &str = "organization";
    pub const STREET: &str = "street";
    pub const CITY: &str = "city";
    pub const COUNTY: &str = "county";
    pub const STATE: &str = "state";
    pub const ZIP: &str = "zip";

    /// All recognised columns, in the order the exports usually list them
    pub const ALL: &[&str] = &[NAME, ORGANIZATION, STREET, CITY, COUNTY, STATE, ZIP];
}

/// Field delimiter for tabular exports
pub const TABULAR_DELIMITER: u8 = b'\t';

// =============================================================================
// Plain-Text Format
// =============================================================================

/// Literal token marking a county line inside a plain-text block
pub const COUNTY_TOKEN: &str = "COUNTY";

/// Separator between city and the `STATE ZIP` tail of a locality line
pub const LOCALITY_SEPARATOR: &str = ", ";

// =============================================================================
// Logging Defaults
// =============================================================================

/// Default log level when neither --verbose nor --quiet is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log target prefix used to build the default filter directive
pub const LOG_TARGET: &str = "address_merger";
