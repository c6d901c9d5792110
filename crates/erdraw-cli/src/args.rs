//! Command-line argument definitions for the erdraw CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the diagram kind,
//! configuration file selection, and logging verbosity.

use clap::Parser;

use erdraw::semantic::DiagramKind;

/// Command-line arguments for the erdraw diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input JSON file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output draw.io file
    #[arg(short, long, default_value = "out.drawio")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Diagram kind (class, table, use-case); detected from the input when omitted
    #[arg(short, long)]
    pub kind: Option<DiagramKind>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
