//! Defines the command-line arguments for the airq CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::Parser;
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "airq",
    version,
    about = "Convert FILE/GROUP/DATA air quality sensor exports to YAML or JSON."
)]
pub struct AirqArgs {
    /// Path to the export. Standard input is read when omitted and piped.
    pub input: Option<PathBuf>,

    /// Suppress informational messages.
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit JSON instead of YAML.
    #[arg(short, long)]
    pub json: bool,

    /// Reject any content after the END_FILE line.
    #[arg(long)]
    pub strict: bool,

    /// Emit the parse tree as parsed instead of the reshaped output.
    #[arg(long)]
    pub raw: bool,
}
