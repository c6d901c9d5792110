//! CLI logic for the erdraw diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use erdraw::{DiagramBuilder, ErdrawError};

/// Run the erdraw CLI application
///
/// Reads the JSON input, lays it out and writes the draw.io document to the
/// output path. Relationships that could not be routed are logged as
/// warnings by the router and do not fail the run.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ErdrawError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing and validation errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), ErdrawError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let diagram = builder.parse(&source, args.kind)?;

    let document = builder.render_drawio(&diagram)?;
    fs::write(&args.output, document)?;

    info!(output_file = args.output; "draw.io document exported successfully");

    Ok(())
}
