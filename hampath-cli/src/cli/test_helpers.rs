//! Small helpers shared across CLI tests.
//!
//! Tests write graph documents into temporary directories and build command
//! structs directly instead of going through argument parsing.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, Command, GraphArgs, InputFormat, RenderCommand, SearchCommand, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_graph(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn graph_args(path: PathBuf) -> GraphArgs {
    GraphArgs {
        path,
        format: InputFormat::Auto,
        start: None,
        directed: false,
        undirected: false,
    }
}

pub(super) fn search_cli(graph: GraphArgs, all: bool) -> Cli {
    Cli {
        command: Command::Search(SearchCommand { graph, all }),
    }
}

pub(super) fn render_cli(graph: GraphArgs, output: PathBuf) -> Cli {
    Cli {
        command: Command::Render(RenderCommand {
            graph,
            output: Some(output),
            output_format: None,
        }),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
