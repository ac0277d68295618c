//! Handles all user-facing output for the CLI.
//!
//! Results go to stdout. Informational messages and errors go to stderr so a
//! converted document can be piped on without noise.

use std::io::Write;

use miette::Report;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::errors::AppError;

const POSITION_NOTE: &str =
    "Line and column numbers are 0-indexed. E.g. 0:10 would be line 1, col 11";

/// Writes informational messages and errors to stderr.
pub struct Reporter {
    quiet: bool,
    color: ColorChoice,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        let color = if atty::is(atty::Stream::Stderr) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self { quiet, color }
    }

    /// Prints `info: <message>` unless quiet.
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        let mut stderr = StandardStream::stderr(self.color);
        if write_tagged(&mut stderr, "info", Color::Cyan, message).is_err() {
            eprintln!("info: {message}");
        }
    }

    /// Prints one error. Parse errors are preceded by a note on coordinates.
    pub fn error(&self, error: AppError) {
        if error.as_parse_error().is_some() {
            let mut stderr = StandardStream::stderr(self.color);
            if write_tagged(&mut stderr, "note", Color::Yellow, POSITION_NOTE).is_err() {
                eprintln!("note: {POSITION_NOTE}");
            }
        }
        print_error(error);
    }
}

/// Renders an error through miette.
pub fn print_error(error: AppError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}

/// Prints the converted document.
pub fn print_output(output: &str) {
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
}

fn write_tagged(
    writer: &mut impl WriteColor,
    tag: &str,
    color: Color,
    message: &str,
) -> std::io::Result<()> {
    writer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(writer, "{tag}")?;
    writer.reset()?;
    writeln!(writer, ": {message}")?;
    Ok(())
}
