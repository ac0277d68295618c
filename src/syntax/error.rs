//! Parse failures with 0-indexed line/column coordinates.
//!
//! The grammar reports the furthest position at which a rule failed together
//! with the rules it expected there (positives) and the markers it found where
//! a record should have started (negatives). This module turns that into one
//! [`ParseError`].

use pest::error::{Error, ErrorVariant, InputLocation};
use thiserror::Error;

use crate::syntax::parser::Rule;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// What class of grammar failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A terminal (value, separator, line ending) did not match.
    Lexical,
    /// A required one-or-more repetition matched zero times.
    Cardinality,
    /// A section matched its early parts but a later required part is missing.
    Structural,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Lexical => "lexical",
            ErrorKind::Cardinality => "cardinality",
            ErrorKind::Structural => "structural",
        }
    }

    /// A short hint shown under the diagnostic.
    pub fn help(&self) -> &'static str {
        match self {
            ErrorKind::Lexical => {
                "values may only contain letters, digits, '.', '_', '-', '/' and spaces"
            }
            ErrorKind::Cardinality => {
                "every section needs at least one record and every file at least one group"
            }
            ErrorKind::Structural => {
                "sections nest as BEGIN_FILE > BEGIN_GROUP > BEGIN_DATA and close in reverse order"
            }
        }
    }
}

/// The single failure returned by a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {line}:{column}")]
pub struct ParseError {
    kind: ErrorKind,
    line: usize,
    column: usize,
    offset: usize,
    message: String,
}

impl ParseError {
    /// Builds an error at a byte offset of `input`.
    pub fn at(input: &str, offset: usize, kind: ErrorKind, message: impl Into<String>) -> Self {
        let mut offset = offset.min(input.len());
        while !input.is_char_boundary(offset) {
            offset -= 1;
        }
        let (line, column) = locate(input, offset);
        Self {
            kind,
            line,
            column,
            offset,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// 0-indexed line of the failure point.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 0-indexed column (in characters) of the failure point.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Byte offset of the failure point in the input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn from_pest(error: &Error<Rule>, input: &str) -> Self {
        let offset = match error.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        };
        let (kind, message) = match &error.variant {
            ErrorVariant::ParsingError {
                positives,
                negatives,
            } => {
                let mut positives = positives.clone();
                let mut negatives = negatives.clone();
                positives.sort();
                positives.dedup();
                negatives.sort();
                negatives.dedup();
                describe(&positives, &negatives)
            }
            ErrorVariant::CustomError { message } => (ErrorKind::Structural, message.clone()),
        };
        Self::at(input, offset, kind, message)
    }
}

// ============================================================================
// POSITIONS
// ============================================================================

/// Converts a byte offset into a 0-indexed (line, column) pair.
///
/// Lines break on `\n`, so a `\r` before it is still part of the line.
pub fn locate(input: &str, offset: usize) -> (usize, usize) {
    let before = &input[..offset];
    let line = before.matches('\n').count();
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    (line, before[line_start..].chars().count())
}

// ============================================================================
// MESSAGES
// ============================================================================

fn describe(positives: &[Rule], negatives: &[Rule]) -> (ErrorKind, String) {
    let found = if negatives.is_empty() {
        String::new()
    } else {
        format!(", found {}", join(negatives))
    };

    if positives.is_empty() {
        return (
            ErrorKind::Cardinality,
            format!("expected at least one record{found}"),
        );
    }
    if positives == [Rule::begin_group] {
        return (
            ErrorKind::Cardinality,
            format!("expected at least one group section{found}"),
        );
    }

    let kind = if positives.iter().all(is_lexical) {
        ErrorKind::Lexical
    } else if positives.iter().all(|r| *r == Rule::record) {
        ErrorKind::Cardinality
    } else {
        ErrorKind::Structural
    };
    (kind, format!("expected {}{found}", join(positives)))
}

fn is_lexical(rule: &Rule) -> bool {
    matches!(rule, Rule::value | Rule::separator | Rule::eol)
}

fn join(rules: &[Rule]) -> String {
    let names: Vec<&str> = rules.iter().map(rule_name).collect();
    match names.as_slice() {
        [] => String::new(),
        [one] => (*one).to_string(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}

fn rule_name(rule: &Rule) -> &'static str {
    match rule {
        Rule::begin_file => "BEGIN_FILE",
        Rule::end_file => "END_FILE",
        Rule::begin_group => "BEGIN_GROUP",
        Rule::end_group => "END_GROUP",
        Rule::begin_data => "BEGIN_DATA",
        Rule::end_data => "END_DATA",
        Rule::separator => "','",
        Rule::eol => "line ending",
        Rule::value => "value",
        Rule::record => "record",
        Rule::data_section => "data section",
        Rule::group_section => "group section",
        Rule::file_section | Rule::file | Rule::strict_file => "file section",
        Rule::EOI => "end of input",
        _ => "token",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_counts_from_zero() {
        let input = "BEGIN_FILE\ntitle,x\n";
        assert_eq!(locate(input, 0), (0, 0));
        assert_eq!(locate(input, 11), (1, 0));
        assert_eq!(locate(input, 16), (1, 5));
    }

    #[test]
    fn locate_keeps_carriage_return_on_its_line() {
        let input = "BEGIN_FILE\r\nx";
        assert_eq!(locate(input, 10), (0, 10));
        assert_eq!(locate(input, 12), (1, 0));
    }

    #[test]
    fn negatives_only_means_missing_record() {
        let (kind, message) = describe(&[], &[Rule::end_data]);
        assert_eq!(kind, ErrorKind::Cardinality);
        assert_eq!(message, "expected at least one record, found END_DATA");
    }

    #[test]
    fn lone_begin_group_means_missing_group() {
        let (kind, message) = describe(&[Rule::begin_group], &[Rule::end_file]);
        assert_eq!(kind, ErrorKind::Cardinality);
        assert_eq!(message, "expected at least one group section, found END_FILE");
    }

    #[test]
    fn terminals_are_lexical() {
        let (kind, message) = describe(&[Rule::separator, Rule::eol], &[]);
        assert_eq!(kind, ErrorKind::Lexical);
        assert_eq!(message, "expected ',' or line ending");
    }

    #[test]
    fn markers_are_structural() {
        let (kind, message) = describe(&[Rule::begin_group, Rule::end_file], &[]);
        assert_eq!(kind, ErrorKind::Structural);
        assert_eq!(message, "expected BEGIN_GROUP or END_FILE");
    }

    #[test]
    fn offset_inside_a_char_snaps_back() {
        let error = ParseError::at("é,x", 1, ErrorKind::Lexical, "expected value");
        assert_eq!(error.offset(), 0);
        assert_eq!((error.line(), error.column()), (0, 0));
    }

    #[test]
    fn display_includes_position() {
        let error = ParseError::at("ab\ncd", 4, ErrorKind::Lexical, "expected value");
        assert_eq!(error.to_string(), "expected value at 1:1");
    }
}
