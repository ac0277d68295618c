//! Application errors.
//!
//! The parser returns a plain [`ParseError`]; everything the driver can fail
//! on is collected here as one [`AppError`] so that the CLI prints exactly one
//! miette diagnostic and exits with status 1.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::syntax::ParseError;

#[derive(Error, Diagnostic, Debug)]
pub enum AppError {
    #[error("failed to read {}", .path.display())]
    #[diagnostic(code(airq::io::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read standard input")]
    #[diagnostic(code(airq::io::stdin))]
    Stdin(#[source] std::io::Error),

    #[error("input is not valid UTF-8")]
    #[diagnostic(code(airq::io::utf8))]
    Utf8(#[source] std::string::FromUtf8Error),

    #[error("no input given")]
    #[diagnostic(
        code(airq::io::no_input),
        help("pass a file path or pipe the export on standard input")
    )]
    NoInput,

    #[error("{error}")]
    #[diagnostic(code(airq::parse))]
    Parse {
        error: ParseError,
        #[source_code]
        src: NamedSource<String>,
        #[label("failed here")]
        span: SourceSpan,
        #[help]
        help: Option<String>,
    },

    #[error("failed to render JSON")]
    #[diagnostic(code(airq::render::json))]
    Json(#[source] serde_json::Error),

    #[error("failed to render YAML")]
    #[diagnostic(code(airq::render::yaml))]
    Yaml(#[source] serde_yaml::Error),
}

impl AppError {
    /// Attaches the input text to a parse failure so the report can show it.
    pub fn parse(error: ParseError, name: &str, source: &str) -> Self {
        let len = source[error.offset()..]
            .chars()
            .next()
            .filter(|c| *c != '\n' && *c != '\r')
            .map_or(0, char::len_utf8);
        let span = SourceSpan::from((error.offset(), len));
        let kind = error.kind();
        let help = Some(format!("{} error: {}", kind.as_str(), kind.help()));
        AppError::Parse {
            error,
            src: NamedSource::new(name, source.to_string()),
            span,
            help,
        }
    }

    /// The underlying grammar failure, if this is one.
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            AppError::Parse { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::ErrorKind;

    #[test]
    fn parse_error_keeps_position() {
        let source = "BEGIN_FILE\nEND_FILE\n";
        let error = ParseError::at(source, 11, ErrorKind::Cardinality, "expected at least one record");
        let app = AppError::parse(error, "export.txt", source);
        let inner = app.as_parse_error().unwrap();
        assert_eq!((inner.line(), inner.column()), (1, 0));
        assert_eq!(app.to_string(), "expected at least one record at 1:0");
        match app {
            AppError::Parse { help, .. } => {
                assert!(help.unwrap().starts_with("cardinality error: "));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parse_error_at_end_has_empty_span() {
        let source = "BEGIN_FILE";
        let error = ParseError::at(source, 10, ErrorKind::Lexical, "expected line ending");
        match AppError::parse(error, "stdin", source) {
            AppError::Parse { span, .. } => {
                assert_eq!(span.offset(), 10);
                assert_eq!(span.len(), 0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
