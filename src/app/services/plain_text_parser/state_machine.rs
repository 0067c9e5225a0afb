//! Positional state machine for label-free address blocks
//!
//! A block has no field labels, so the role of each line is decided by the
//! current [`ParserState`]:
//!
//! | State                     | Line            | Role       | Next state                |
//! |---------------------------|-----------------|------------|---------------------------|
//! | any                       | blank           | separator  | `SeekingName`             |
//! | `SeekingName`             | text            | name       | `SeekingStreet`           |
//! | `SeekingStreet`           | text            | street     | `SeekingCountyOrLocality` |
//! | `SeekingCountyOrLocality` | contains COUNTY | county     | `SeekingCountyOrLocality` |
//! | `SeekingCountyOrLocality` | other text      | locality   | `SeekingCountyOrLocality` |
//!
//! The locality slot is never closed, so the last non-county line of a block
//! is the one that ends up in the record.

use tracing::warn;

use crate::app::models::{AddressRecord, Recipient};
use crate::constants::{COUNTY_TOKEN, LOCALITY_SEPARATOR};

/// Which field the next non-blank line fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserState {
    #[default]
    SeekingName,
    SeekingStreet,
    SeekingCountyOrLocality,
}

/// The role a line plays, with its trimmed text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole<'a> {
    Separator,
    Name(&'a str),
    Street(&'a str),
    County(&'a str),
    Locality(&'a str),
}

impl ParserState {
    /// Decide what `line` means in this state
    pub fn classify(self, line: &str) -> LineRole<'_> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineRole::Separator;
        }

        match self {
            ParserState::SeekingName => LineRole::Name(trimmed),
            ParserState::SeekingStreet => LineRole::Street(trimmed),
            ParserState::SeekingCountyOrLocality if trimmed.contains(COUNTY_TOKEN) => {
                LineRole::County(trimmed)
            }
            ParserState::SeekingCountyOrLocality => LineRole::Locality(trimmed),
        }
    }

    /// Transition after a line with `role` has been consumed
    pub fn next(self, role: &LineRole) -> ParserState {
        match (self, role) {
            (_, LineRole::Separator) => ParserState::SeekingName,
            (ParserState::SeekingName, LineRole::Name(_)) => ParserState::SeekingStreet,
            (ParserState::SeekingStreet, LineRole::Street(_)) => {
                ParserState::SeekingCountyOrLocality
            }
            (ParserState::SeekingCountyOrLocality, LineRole::County(_) | LineRole::Locality(_)) => {
                ParserState::SeekingCountyOrLocality
            }
            // classify() never pairs a state with another state's role
            (state, _) => state,
        }
    }
}

/// The `city, STATE ZIP` line split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locality {
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Locality {
    /// Split once on `", "`; the tail's first two whitespace tokens are state and zip
    ///
    /// Returns `None` when the separator is absent.
    pub fn parse(line: &str) -> Option<Self> {
        let (city, tail) = line.split_once(LOCALITY_SEPARATOR)?;
        let mut tokens = tail.split_whitespace();
        let state = tokens.next().unwrap_or("");
        let zip = tokens.next().unwrap_or("");

        Some(Self {
            city: city.trim().to_string(),
            state: state.to_string(),
            zip: zip.to_string(),
        })
    }
}

/// Strip every `COUNTY` token from a county line
pub fn county_name(line: &str) -> String {
    line.replace(COUNTY_TOKEN, "").trim().to_string()
}

/// Fields collected for the block in progress
#[derive(Debug, Clone, Default)]
struct BlockBuilder {
    start_line: usize,
    name: Option<String>,
    street: Option<String>,
    county: Option<String>,
    locality: Option<Locality>,
}

impl BlockBuilder {
    fn build(self) -> Option<AddressRecord> {
        let name = self.name?;

        let locality = self.locality.unwrap_or_else(|| {
            warn!(
                "Address block starting at line {} has no locality line; city, state and zip left empty",
                self.start_line
            );
            Locality {
                city: String::new(),
                state: String::new(),
                zip: String::new(),
            }
        });

        let record = AddressRecord::new(
            Recipient::Person(name),
            self.street.unwrap_or_default(),
            locality.city,
            locality.state,
            locality.zip,
        );

        Some(match self.county {
            Some(county) => record.with_county(county),
            None => record,
        })
    }
}

/// Drives [`ParserState`] over a file's lines and assembles records
#[derive(Debug, Default)]
pub struct BlockStateMachine {
    state: ParserState,
    block: BlockBuilder,
}

impl BlockStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Consume one line (1-based `line_number`)
    ///
    /// Returns a finished record when the line closes a block. A locality
    /// line without the `", "` separator is rejected with a message.
    pub fn feed(
        &mut self,
        line_number: usize,
        line: &str,
    ) -> std::result::Result<Option<AddressRecord>, String> {
        let role = self.state.classify(line);

        let finished = match role {
            LineRole::Separator => std::mem::take(&mut self.block).build(),
            LineRole::Name(name) => {
                self.block.start_line = line_number;
                self.block.name = Some(name.to_string());
                None
            }
            LineRole::Street(street) => {
                self.block.street = Some(street.to_string());
                None
            }
            LineRole::County(county) => {
                self.block.county = Some(county_name(county));
                None
            }
            LineRole::Locality(text) => {
                let locality = Locality::parse(text).ok_or_else(|| {
                    format!(
                        "locality line '{}' has no '{}' separator between city and state",
                        text, LOCALITY_SEPARATOR
                    )
                })?;
                self.block.locality = Some(locality);
                None
            }
        };

        self.state = self.state.next(&role);
        Ok(finished)
    }

    /// Flush the block in progress at end of input
    pub fn finish(self) -> Option<AddressRecord> {
        self.block.build()
    }
}
