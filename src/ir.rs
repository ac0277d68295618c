//! Output IR: an ordered tree of strings, sequences and maps.
//!
//! [`to_output_ir`] reshapes the parse tree into the presentation layout that
//! gets printed; [`render`] turns any serializable value (the IR or the raw
//! parse tree) into JSON or YAML text.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::config::OutputFormat;
use crate::errors::AppError;
use crate::syntax::{FileSection, GroupSection, Record};

/// A generic value. Map entries keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    String(String),
    Seq(Vec<Node>),
    Map(Vec<(String, Node)>),
}

impl Node {
    /// Looks up a map entry by key.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Node]> {
        match self {
            Node::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Keys of a map in order; empty for anything else.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Node::Map(entries) => entries.iter().map(|(k, _)| k.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    fn strings(values: &[&str]) -> Node {
        Node::Seq(values.iter().map(|v| Node::String((*v).to_string())).collect())
    }

    /// Appends values, turning a scalar into a sequence first.
    fn append(&mut self, values: &[&str]) {
        if let Node::String(first) = self {
            let first = std::mem::take(first);
            *self = Node::Seq(vec![Node::String(first)]);
        }
        if let Node::Seq(items) = self {
            items.extend(values.iter().map(|v| Node::String((*v).to_string())));
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::String(s) => serializer.serialize_str(s),
            Node::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

// ============================================================================
// TRANSFORM
// ============================================================================

/// Reshapes a parsed file into the printed layout:
///
/// ```text
/// File:   { meta key: value | [values] }
/// Groups: [ { Meta: { ... }, Locations: [ { key: [values] } ] } ]
/// ```
pub fn to_output_ir(file: &FileSection<'_>) -> Node {
    Node::Map(vec![
        ("File".to_string(), fold_meta(&file.meta)),
        (
            "Groups".to_string(),
            Node::Seq(file.groups.iter().map(group_ir).collect()),
        ),
    ])
}

fn group_ir(group: &GroupSection<'_>) -> Node {
    Node::Map(vec![
        ("Meta".to_string(), fold_meta(&group.meta)),
        (
            "Locations".to_string(),
            Node::Seq(group.data.locations.iter().map(location_ir).collect()),
        ),
    ])
}

/// Every data line is a reading, so values stay a list even when single.
fn location_ir(record: &Record<'_>) -> Node {
    Node::Map(vec![(record.key.to_string(), Node::strings(&record.values))])
}

/// Metadata becomes one map. Repeated keys keep their first position and
/// accumulate values.
fn fold_meta(records: &[Record<'_>]) -> Node {
    let mut entries: Vec<(String, Node)> = Vec::with_capacity(records.len());

    for record in records {
        match entries.iter_mut().find(|(k, _)| k == record.key) {
            Some((_, existing)) => existing.append(&record.values),
            None => {
                let value = match record.single() {
                    Some(single) => Node::String(single.to_string()),
                    None => Node::strings(&record.values),
                };
                entries.push((record.key.to_string(), value));
            }
        }
    }

    Node::Map(entries)
}

// ============================================================================
// RENDERING
// ============================================================================

/// Serializes a value in the requested format.
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value).map_err(AppError::Json),
        OutputFormat::Yaml => serde_yaml::to_string(value).map_err(AppError::Yaml),
    }
}
