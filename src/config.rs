//! Run configuration, built once from the command line.

use std::path::PathBuf;

use crate::cli::args::AirqArgs;
use crate::errors::AppError;
use crate::input::InputSource;
use crate::syntax::ParseOptions;

/// Text format of the printed result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: InputSource,
    /// Suppress informational messages.
    pub quiet: bool,
    pub format: OutputFormat,
    /// Reject trailing content after `END_FILE`.
    pub strict: bool,
    /// Print the parse tree instead of the output IR.
    pub raw: bool,
}

impl Config {
    /// Resolves the input source: an explicit path wins, otherwise stdin is
    /// used when it is not a terminal.
    pub fn from_args(args: AirqArgs, stdin_is_tty: bool) -> Result<Self, AppError> {
        let input = match args.input {
            Some(path) => InputSource::Path(path),
            None if !stdin_is_tty => InputSource::Stdin,
            None => return Err(AppError::NoInput),
        };
        Ok(Self {
            input,
            quiet: args.quiet,
            format: if args.json {
                OutputFormat::Json
            } else {
                OutputFormat::Yaml
            },
            strict: args.strict,
            raw: args.raw,
        })
    }

    /// Configuration for converting a file with default settings.
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            input: InputSource::Path(path.into()),
            quiet: false,
            format: OutputFormat::default(),
            strict: false,
            raw: false,
        }
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            strict: self.strict,
        }
    }
}
