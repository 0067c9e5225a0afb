//! Tab-delimited parser for address exports
//!
//! The header row names the columns `name`, `organization`, `street`, `city`,
//! `county`, `state` and `zip` in any order; absent columns read as empty.
//!
//! - [`parser`] - File reading and row iteration
//! - [`column_mapping`] - Header analysis and by-name field lookup

pub mod column_mapping;
pub mod parser;

#[cfg(test)]
pub mod tests;

pub use column_mapping::ColumnMapping;
pub use parser::TabularParser;
