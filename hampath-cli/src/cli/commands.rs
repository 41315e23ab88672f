//! Command implementations and argument parsing for the hampath CLI.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use hampath_core::{Graph, HampathError, PathSearchBuilder, SearchMode, SearchOutcome};
use hampath_providers_json::{JsonGraphProvider, JsonProviderError};
use hampath_providers_text::{TextGraphProvider, TextProviderError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::drawing::{DrawingError, DrawingFormat, render_dot, render_svg, svg_to_png};

/// Exit status when at least one Hamiltonian path was found.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status when the search completed without finding a path.
pub const EXIT_NOT_FOUND: u8 = 1;
/// Exit status for input, search, or output failures.
pub const EXIT_FAILURE: u8 = 2;

const DEFAULT_RENDER_STEM: &str = "hamiltonian";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "hampath",
    about = "Find Hamiltonian paths by backtracking search."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Search for Hamiltonian paths and print them.
    Search(SearchCommand),
    /// Search for a Hamiltonian path and write a drawing of the graph.
    Render(RenderCommand),
}

/// Graph input options shared by every command.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Path to the graph description (`.txt` edge list or `.json` adjacency).
    pub path: PathBuf,

    /// Input format; `auto` selects JSON for `.json` files and text otherwise.
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    pub format: InputFormat,

    /// Fixed start vertex. Every vertex is tried when omitted.
    #[arg(long)]
    pub start: Option<String>,

    /// Treat the graph as directed regardless of the input.
    #[arg(long, conflicts_with = "undirected")]
    pub directed: bool,

    /// Treat the graph as undirected, symmetrizing every edge.
    #[arg(long)]
    pub undirected: bool,
}

impl GraphArgs {
    fn directed_override(&self) -> Option<bool> {
        match (self.directed, self.undirected) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }
}

/// Options accepted by the `search` command.
#[derive(Debug, Args, Clone)]
pub struct SearchCommand {
    /// Graph input.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// List every Hamiltonian path instead of stopping at the first.
    #[arg(long)]
    pub all: bool,
}

/// Options accepted by the `render` command.
#[derive(Debug, Args, Clone)]
pub struct RenderCommand {
    /// Graph input.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Destination of the drawing. Parent directories are created.
    /// Defaults to `hamiltonian.<format extension>`.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Drawing format; inferred from the `--output` extension when omitted,
    /// falling back to PNG.
    #[arg(long, value_enum)]
    pub output_format: Option<DrawingFormat>,
}

impl RenderCommand {
    /// Resolves the drawing destination and format.
    ///
    /// An explicit `--output-format` wins, then a recognised output
    /// extension, then PNG.
    #[must_use]
    pub fn destination(&self) -> (PathBuf, DrawingFormat) {
        let format = self
            .output_format
            .or_else(|| self.output.as_deref().and_then(DrawingFormat::from_path))
            .unwrap_or_default();
        let output = self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!("{DEFAULT_RENDER_STEM}.{}", format.extension()))
        });
        (output, format)
    }
}

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Choose from the file extension.
    Auto,
    /// Line-based edge list.
    Text,
    /// JSON adjacency document.
    Json,
}

impl InputFormat {
    fn resolve(self, path: &Path) -> Self {
        match self {
            Self::Auto => {
                let is_json = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
                if is_json { Self::Json } else { Self::Text }
            }
            explicit => explicit,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Edge-list ingestion failed.
    #[error(transparent)]
    Text(#[from] TextProviderError),
    /// JSON ingestion failed.
    #[error(transparent)]
    Json(#[from] JsonProviderError),
    /// The search rejected its configuration.
    #[error(transparent)]
    Core(#[from] HampathError),
    /// The drawing could not be rasterized.
    #[error(transparent)]
    Drawing(#[from] DrawingError),
    /// The drawing could not be written.
    #[error("failed to write drawing to `{path}`: {source}")]
    Render {
        /// Destination that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

impl CliError {
    /// Stable machine-readable code, delegating to the wrapped error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::Text(error) => error.code().as_str(),
            Self::Json(error) => error.code().as_str(),
            Self::Core(error) => error.code().as_str(),
            Self::Drawing(error) => error.code().as_str(),
            Self::Render { .. } => "CLI_RENDER",
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name derived from the input file.
    pub source: String,
    /// Mode the search ran in.
    pub mode: SearchMode,
    /// Paths discovered by the search.
    pub outcome: SearchOutcome<String>,
    /// Location of the drawing written by `render`.
    pub rendered: Option<PathBuf>,
}

impl ExecutionSummary {
    /// Process exit status for this summary.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.outcome.is_found() {
            EXIT_SUCCESS
        } else {
            EXIT_NOT_FOUND
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, searching, or rendering fails. Finding
/// no path is not an error.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use hampath_cli::cli::{Cli, Command, GraphArgs, InputFormat, SearchCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "A B\nB C\n")?;
/// let cli = Cli {
///     command: Command::Search(SearchCommand {
///         graph: GraphArgs {
///             path: file.path().to_path_buf(),
///             format: InputFormat::Text,
///             start: None,
///             directed: false,
///             undirected: false,
///         },
///         all: true,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.outcome.paths().len(), 2);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Search(search) => {
            Span::current().record("command", field::display("search"));
            run_search(search)
        }
        Command::Render(render) => {
            Span::current().record("command", field::display("render"));
            run_render(render)
        }
    }
}

#[instrument(
    name = "cli.search",
    err,
    skip(command),
    fields(all = command.all, start = field::Empty),
)]
pub(super) fn run_search(command: SearchCommand) -> Result<ExecutionSummary, CliError> {
    let SearchCommand { graph: args, all } = command;
    let mode = SearchMode::from_all_paths(all);
    let (source, graph) = load_graph(&args)?;
    let outcome = execute(&graph, args.start, mode)?;
    info!(
        source = source.as_str(),
        paths = outcome.paths().len(),
        "command completed"
    );
    Ok(ExecutionSummary {
        source,
        mode,
        outcome,
        rendered: None,
    })
}

#[instrument(
    name = "cli.render",
    err,
    skip(command),
    fields(output = field::Empty, format = field::Empty, start = field::Empty),
)]
pub(super) fn run_render(command: RenderCommand) -> Result<ExecutionSummary, CliError> {
    let (output, format) = command.destination();
    let span = Span::current();
    span.record("output", field::display(output.display()));
    span.record("format", field::display(format.extension()));
    let args = command.graph;
    let mode = SearchMode::FirstOnly;
    let (source, graph) = load_graph(&args)?;
    let outcome = execute(&graph, args.start, mode)?;
    write_drawing(&output, format, &graph, &outcome)?;
    info!(
        source = source.as_str(),
        found = outcome.is_found(),
        "drawing written"
    );
    Ok(ExecutionSummary {
        source,
        mode,
        outcome,
        rendered: Some(output),
    })
}

fn execute(
    graph: &Graph,
    start: Option<String>,
    mode: SearchMode,
) -> Result<SearchOutcome<String>, CliError> {
    if let Some(start) = &start {
        Span::current().record("start", field::display(start));
    }
    let outcome = PathSearchBuilder::new()
        .with_optional_start(start)
        .with_mode(mode)
        .build()
        .run(graph)?;
    Ok(outcome)
}

#[instrument(
    name = "cli.load_graph",
    err,
    skip(args),
    fields(path = %args.path.display(), format = field::Empty, directed = field::Empty),
)]
pub(super) fn load_graph(args: &GraphArgs) -> Result<(String, Graph), CliError> {
    let format = args.format.resolve(&args.path);
    let span = Span::current();
    span.record("format", field::display(format.label()));
    let name = derive_source_name(&args.path);
    let reader = open_reader(&args.path)?;
    let directed_override = args.directed_override();
    let graph = match format {
        InputFormat::Json => {
            JsonGraphProvider::try_from_reader(name.clone(), reader, directed_override)?
                .into_graph()
        }
        InputFormat::Text | InputFormat::Auto => {
            TextGraphProvider::try_from_reader(name.clone(), reader, directed_override)?
                .into_graph()
        }
    };
    span.record("directed", graph.is_directed());
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok((name, graph))
}

fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_source_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "graph".to_owned())
}

/// Writes the drawing of `graph` to `output`, creating parent directories.
///
/// Image bytes are produced before the file is created, so a rasterization
/// failure leaves no partial file behind. DOT is streamed.
fn write_drawing(
    output: &Path,
    format: DrawingFormat,
    graph: &Graph,
    outcome: &SearchOutcome<String>,
) -> Result<(), CliError> {
    let path = outcome.first();
    let image = match format {
        DrawingFormat::Png => Some(svg_to_png(&render_svg(graph, path))?),
        DrawingFormat::Svg => Some(render_svg(graph, path).into_bytes()),
        DrawingFormat::Dot => None,
    };
    let render_error = |source| CliError::Render {
        path: output.to_path_buf(),
        source,
    };
    if let Some(parent) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(render_error)?;
    }
    let file = File::create(output).map_err(render_error)?;
    let mut writer = BufWriter::new(file);
    match image {
        Some(bytes) => writer.write_all(&bytes),
        None => render_dot(graph, path, &mut writer),
    }
    .map_err(render_error)?;
    writer.flush().map_err(render_error)
}

/// Renders `summary` to `writer`.
///
/// Prints `FOUND` followed by the first path (`Path: A -> B`) or every path
/// numbered from one when the search enumerated all paths. Prints
/// `NOT-FOUND` otherwise. Rendering runs append the drawing location.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use hampath_cli::cli::{ExecutionSummary, render_summary};
/// # use hampath_core::{Graph, PathSearchBuilder, SearchMode};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph: Graph = [("A".to_owned(), "B".to_owned())].into_iter().collect();
/// let outcome = PathSearchBuilder::new().build().run(&graph)?;
/// let summary = ExecutionSummary {
///     source: "demo".into(),
///     mode: SearchMode::FirstOnly,
///     outcome,
///     rendered: None,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "FOUND\nPath: A -> B\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let paths = summary.outcome.paths();
    match (paths.first(), summary.mode) {
        (None, _) => writeln!(writer, "NOT-FOUND")?,
        (Some(first), SearchMode::FirstOnly) => {
            writeln!(writer, "FOUND")?;
            writeln!(writer, "Path: {first}")?;
        }
        (Some(_), SearchMode::All) => {
            writeln!(writer, "FOUND")?;
            for (index, path) in paths.iter().enumerate() {
                writeln!(writer, "{}: {path}", index + 1)?;
            }
        }
    }
    if let Some(rendered) = &summary.rendered {
        writeln!(writer, "rendered: {}", rendered.display())?;
    }
    Ok(())
}
