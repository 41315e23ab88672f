//! Command-line interface orchestration for the hampath binary.
//!
//! Two commands are available: `search` prints the discovered paths, and
//! `render` additionally writes a PNG, SVG, or Graphviz DOT drawing of the
//! graph with the first path highlighted. Both load either an edge-list text
//! file or a JSON adjacency document.

mod commands;
mod drawing;

pub use commands::{
    Cli, CliError, Command, EXIT_FAILURE, EXIT_NOT_FOUND, EXIT_SUCCESS, ExecutionSummary,
    GraphArgs, InputFormat, RenderCommand, SearchCommand, render_summary, run_cli,
};
pub use drawing::{
    DrawingError, DrawingErrorCode, DrawingFormat, render_dot, render_svg, svg_to_png,
};

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;
