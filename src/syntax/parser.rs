//! Sensor Export Parser
//!
//! Recognizes the FILE > GROUP > DATA nesting with the pest grammar in
//! `grammar.pest` and builds a borrowed [`FileSection`] tree. Purely
//! syntactic: values are kept as the exact slices of the input.

use pest::{iterators::Pair, Parser};
use pest_derive::Parser;

use crate::syntax::{DataSection, ErrorKind, FileSection, GroupSection, ParseError, Record};

#[derive(Parser)]
#[grammar = "syntax/grammar.pest"]
struct ExportParser;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Controls how much of the input a parse must consume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject anything after the line ending that follows `END_FILE`.
    pub strict: bool,
}

/// Parse a complete export. Content after the final `END_FILE` line is ignored.
pub fn parse(input: &str) -> Result<FileSection<'_>, ParseError> {
    parse_with(input, ParseOptions::default())
}

/// Parse a complete export with explicit options.
pub fn parse_with(input: &str, options: ParseOptions) -> Result<FileSection<'_>, ParseError> {
    let entry = if options.strict {
        Rule::strict_file
    } else {
        Rule::file
    };

    let pairs = ExportParser::parse(entry, input).map_err(|e| ParseError::from_pest(&e, input))?;

    pairs
        .flat_map(|pair| pair.into_inner())
        .find(|pair| pair.as_rule() == Rule::file_section)
        .map(build_file_section)
        .ok_or_else(|| ParseError::at(input, 0, ErrorKind::Structural, "expected BEGIN_FILE"))
}

// ============================================================================
// TREE BUILDERS
// ============================================================================

fn build_file_section(pair: Pair<'_, Rule>) -> FileSection<'_> {
    let mut meta = Vec::new();
    let mut groups = Vec::new();

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::record => meta.push(build_record(inner)),
            Rule::group_section => groups.push(build_group_section(inner)),
            _ => {}
        }
    }

    FileSection { meta, groups }
}

fn build_group_section(pair: Pair<'_, Rule>) -> GroupSection<'_> {
    let mut meta = Vec::new();
    // grammar guarantees exactly one data section per group
    let mut data = DataSection::default();

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::record => meta.push(build_record(inner)),
            Rule::data_section => data = build_data_section(inner),
            _ => {}
        }
    }

    GroupSection { meta, data }
}

fn build_data_section(pair: Pair<'_, Rule>) -> DataSection<'_> {
    let locations = pair
        .into_inner()
        .filter(|p| p.as_rule() == Rule::record)
        .map(build_record)
        .collect();
    DataSection { locations }
}

fn build_record(pair: Pair<'_, Rule>) -> Record<'_> {
    let mut tokens = pair
        .into_inner()
        .filter(|p| p.as_rule() == Rule::value)
        .map(|p| p.as_str());
    let key = tokens.next().unwrap_or_default();
    Record {
        key,
        values: tokens.collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "BEGIN_FILE\n\
title,Test File\n\
BEGIN_GROUP\n\
site,Downtown\n\
BEGIN_DATA\n\
pm25,12,14\n\
END_DATA\n\
END_GROUP\n\
END_FILE\n";

    #[test]
    fn test_minimal_document() {
        let file = parse(MINIMAL).unwrap();
        assert_eq!(
            file.meta,
            vec![Record {
                key: "title",
                values: vec!["Test File"]
            }]
        );
        assert_eq!(file.groups.len(), 1);
        let group = &file.groups[0];
        assert_eq!(group.meta[0].key, "site");
        assert_eq!(group.meta[0].values, vec!["Downtown"]);
        assert_eq!(group.data.locations[0].key, "pm25");
        assert_eq!(group.data.locations[0].values, vec!["12", "14"]);
    }

    #[test]
    fn test_crlf_document() {
        let crlf = MINIMAL.replace('\n', "\r\n");
        assert_eq!(parse(&crlf).unwrap(), parse(MINIMAL).unwrap());
    }

    #[test]
    fn test_empty_data_section() {
        let input = MINIMAL.replace("pm25,12,14\n", "");
        let err = parse(&input).unwrap_err();
        assert_eq!((err.line(), err.column()), (5, 0));
        assert_eq!(err.kind(), ErrorKind::Cardinality);
        assert!(err.message().contains("at least one record"));
    }

    #[test]
    fn test_empty_input() {
        let err = parse("").unwrap_err();
        assert_eq!((err.line(), err.column()), (0, 0));
    }

    #[test]
    fn test_strict_rejects_trailing_content() {
        let input = format!("{MINIMAL}trailing");
        assert!(parse(&input).is_ok());
        let err = parse_with(&input, ParseOptions { strict: true }).unwrap_err();
        assert_eq!((err.line(), err.column()), (9, 0));
        assert_eq!(err.kind(), ErrorKind::Structural);
    }
}
