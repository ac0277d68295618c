//! Conversion pipeline: source text -> parse tree -> IR -> rendered text.
//!
//! No I/O happens here beyond what `InputSource::read` does; the CLI decides
//! where results and messages go.

use crate::{
    config::Config,
    errors::AppError,
    input::LineEnding,
    ir::{self, to_output_ir},
    syntax::parse_with,
};

/// Result of one successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Rendered JSON or YAML.
    pub output: String,
    /// Line-ending style of the first line, for the informational message.
    pub line_ending: Option<LineEnding>,
    pub groups: usize,
    pub readings: usize,
}

pub struct ConversionPipeline<'c> {
    config: &'c Config,
}

impl<'c> ConversionPipeline<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Reads the configured input and converts it.
    pub fn run(&self) -> Result<Conversion, AppError> {
        let source = self.config.input.read()?;
        self.convert(&source, &self.config.input.name())
    }

    /// Converts already-loaded source text. `name` labels diagnostics.
    pub fn convert(&self, source: &str, name: &str) -> Result<Conversion, AppError> {
        let tree = parse_with(source, self.config.parse_options())
            .map_err(|error| AppError::parse(error, name, source))?;

        let output = if self.config.raw {
            ir::render(&tree, self.config.format)?
        } else {
            ir::render(&to_output_ir(&tree), self.config.format)?
        };

        Ok(Conversion {
            output,
            line_ending: LineEnding::detect(source),
            groups: tree.groups.len(),
            readings: tree.reading_count(),
        })
    }
}
