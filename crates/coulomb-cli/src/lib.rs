//! CLI logic for the Coulomb layout tool.
//!
//! Reads a graph from a TOML file, lays it out with the configured forces and
//! writes the final node positions back as TOML.

pub mod error_adapter;

mod args;
mod config;
mod error;
mod input;

pub use args::Args;
pub use error::CliError;

use log::info;

use coulomb::{LayoutBuilder, graph::LayoutGraph};

/// Run the Coulomb CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed graph files
/// - Simulation faults
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing graph"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let graph = input::read_graph(&args.input)?;
    info!(nodes = graph.node_count(), edges = graph.edge_count(); "Graph loaded");

    // Lay out the graph
    let builder = LayoutBuilder::new(app_config);
    let layout = builder.run(&graph)?;

    // Write output file
    input::write_layout(&args.output, &layout)?;

    info!(output_file = args.output; "Layout exported successfully");

    Ok(())
}
