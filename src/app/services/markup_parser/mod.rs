//! XML parser for address exports
//!
//! Entity elements sit at `ENTITY/ENT` beneath the document root, each with
//! `NAME`, `COMPANY`, `STREET`, `CITY`, `STATE` and `POSTAL_CODE` children.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use address_merger::app::services::markup_parser::MarkupParser;
//!
//! # fn example() -> address_merger::Result<()> {
//! let result = MarkupParser::new().parse_file(std::path::Path::new("input.xml"))?;
//! println!("Parsed {} records", result.stats.records_parsed);
//! # Ok(())
//! # }
//! ```

pub mod parser;


pub use parser::MarkupParser;
