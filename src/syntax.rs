//! Syntax module for sensor export files.
//!
//! Holds the parse tree produced by [`parser::parse`]. Every node borrows from
//! the input buffer; nothing is copied until the tree is turned into IR.
//!
//! The tree serializes to the raw section layout (`File`, `Groups`, `Meta`,
//! `Data`, `Locations`) so it can be emitted as-is with `--raw`.

use serde::ser::{Serialize, SerializeMap, Serializer};

pub mod error;
pub mod parser;

pub use error::{ErrorKind, ParseError};
pub use parser::{parse, parse_with, ParseOptions};

/// One `key,value[,value...]` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    pub key: &'a str,
    /// Never empty once produced by the parser.
    pub values: Vec<&'a str>,
}

impl<'a> Record<'a> {
    /// Returns the single value of a one-value record.
    pub fn single(&self) -> Option<&'a str> {
        match self.values.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.values)?;
        map.end()
    }
}

/// `BEGIN_DATA` ... `END_DATA`: the readings of one group.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct DataSection<'a> {
    #[serde(rename = "Locations")]
    pub locations: Vec<Record<'a>>,
}

/// `BEGIN_GROUP` ... `END_GROUP`: metadata followed by exactly one data section.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GroupSection<'a> {
    #[serde(rename = "Meta")]
    pub meta: Vec<Record<'a>>,
    #[serde(rename = "Data")]
    pub data: DataSection<'a>,
}

/// `BEGIN_FILE` ... `END_FILE`: root of the parse tree.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FileSection<'a> {
    #[serde(rename = "File")]
    pub meta: Vec<Record<'a>>,
    #[serde(rename = "Groups")]
    pub groups: Vec<GroupSection<'a>>,
}

impl<'a> FileSection<'a> {
    /// Total number of data records across all groups.
    pub fn reading_count(&self) -> usize {
        self.groups.iter().map(|g| g.data.locations.len()).sum()
    }
}
