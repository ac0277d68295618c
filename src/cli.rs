//! The airq Command-Line Interface.
//!
//! Parses arguments into a [`Config`], runs the conversion pipeline and maps
//! the outcome to an exit status: 0 on success, 1 on any failure.

use std::process;

use clap::Parser;

use crate::{
    config::Config,
    engine::ConversionPipeline,
    errors::AppError,
    input::LineEnding,
};

pub mod args;
pub mod output;

use args::AirqArgs;
use output::{print_output, Reporter};

/// The main entry point for the CLI.
pub fn run() {
    let args = AirqArgs::parse();
    let reporter = Reporter::new(args.quiet);

    let code = match execute(args, &reporter) {
        Ok(()) => 0,
        Err(e) => {
            reporter.error(e);
            1
        }
    };
    process::exit(code);
}

fn execute(args: AirqArgs, reporter: &Reporter) -> Result<(), AppError> {
    let config = Config::from_args(args, atty::is(atty::Stream::Stdin))?;
    let conversion = ConversionPipeline::new(&config).run()?;

    if let Some(ending @ LineEnding::CrLf) = conversion.line_ending {
        reporter.info(&format!("Input has {ending} line endings"));
    }
    reporter.info(&format!(
        "Parsed {} group(s) with {} reading(s) from {}",
        conversion.groups,
        conversion.readings,
        config.input.name()
    ));

    print_output(&conversion.output);
    Ok(())
}
