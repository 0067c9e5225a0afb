//! Plain-text parser for label-free address blocks
//!
//! Blocks are separated by blank lines. Within a block, field identity comes
//! from line position: name, street, an optional `... COUNTY` line, then the
//! `city, STATE ZIP` locality line.
//!
//! - [`state_machine`] - Named parser states, transition table, block assembly
//! - [`parser`] - File reading and line iteration

pub mod parser;
pub mod state_machine;

#[cfg(test)]
pub mod tests;

pub use parser::PlainTextParser;
pub use state_machine::{BlockStateMachine, LineRole, Locality, ParserState};
