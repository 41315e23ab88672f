//! Unit tests for the CLI commands and graph loading helpers.

use super::commands::{derive_source_name, load_graph, run_search};
use super::test_helpers::{
    graph_args, render_cli, run_cli_expecting_error, search_cli, temp_dir, write_graph,
};
use super::{
    Cli, CliError, Command, DrawingError, DrawingFormat, EXIT_NOT_FOUND, EXIT_SUCCESS,
    ExecutionSummary, InputFormat, SearchCommand, render_summary, run_cli,
};

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use hampath_core::{Graph, HampathError, PathSearchBuilder, SearchMode};
use hampath_providers_json::JsonProviderError;
use hampath_providers_text::TextProviderError;
use hampath_test_support::tracing::RecordingLayer;
use rstest::rstest;
use tracing::Level;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const SQUARE: &str = "# four-cycle\nA B\nB C\nC D\nD A\n";
const STAR: &str = "V= A B C D\nA B\nA C\nA D\n";

fn summary_text(summary: &ExecutionSummary) -> Result<String, Box<dyn std::error::Error>> {
    let mut buffer = Vec::new();
    render_summary(summary, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[rstest]
#[case::stem_with_extension("/tmp/square.txt", "square")]
#[case::stem_without_extension("/tmp/square", "square")]
#[case::missing_stem("", "graph")]
fn derive_source_name_uses_file_stem(#[case] raw_path: &str, #[case] expected: &str) {
    assert_eq!(derive_source_name(Path::new(raw_path)), expected);
}

#[rstest]
fn search_reports_first_path() -> TestResult {
    let dir = temp_dir();
    let path = write_graph(&dir, "square.txt", SQUARE)?;

    let summary = run_cli(search_cli(graph_args(path), false))?;

    assert_eq!(summary.source, "square");
    assert_eq!(summary.mode, SearchMode::FirstOnly);
    assert_eq!(summary.exit_code(), EXIT_SUCCESS);
    assert_eq!(summary_text(&summary)?, "FOUND\nPath: A -> B -> C -> D\n");
    Ok(())
}

#[rstest]
fn search_all_numbers_every_path() -> TestResult {
    let dir = temp_dir();
    let path = write_graph(&dir, "square.txt", SQUARE)?;

    let summary = run_cli(search_cli(graph_args(path), true))?;
    let text = summary_text(&summary)?;

    assert_eq!(summary.outcome.paths().len(), 8);
    assert!(text.starts_with("FOUND\n1: A -> B -> C -> D\n"));
    assert!(text.contains("\n8: "));
    assert!(!text.contains("Path:"));
    Ok(())
}

#[rstest]
fn search_without_path_reports_not_found() -> TestResult {
    let dir = temp_dir();
    let path = write_graph(&dir, "star.txt", STAR)?;

    let summary = run_cli(search_cli(graph_args(path), true))?;

    assert!(!summary.outcome.is_found());
    assert_eq!(summary.exit_code(), EXIT_NOT_FOUND);
    assert_eq!(summary_text(&summary)?, "NOT-FOUND\n");
    Ok(())
}

#[rstest]
fn search_honours_fixed_start() -> TestResult {
    let dir = temp_dir();
    let path = write_graph(&dir, "line.txt", "A B\nB C\n")?;
    let mut args = graph_args(path);
    args.start = Some("C".into());

    let summary = run_cli(search_cli(args, true))?;

    assert_eq!(summary.outcome.paths().len(), 1);
    assert_eq!(summary_text(&summary)?, "FOUND\n1: C -> B -> A\n");
    Ok(())
}

#[rstest]
fn search_rejects_unknown_start() -> TestResult {
    let dir = temp_dir();
    let path = write_graph(&dir, "line.txt", "A B\nB C\n")?;
    let mut args = graph_args(path);
    args.start = Some("Z".into());

    let err = run_cli_expecting_error(search_cli(args, false), "unknown start must fail");

    assert!(matches!(
        err,
        CliError::Core(HampathError::UnknownVertex { ref vertex }) if &**vertex == "Z"
    ));
    assert_eq!(err.code(), "HAMPATH_UNKNOWN_VERTEX");
    Ok(())
}

#[rstest]
fn empty_graph_with_start_is_not_found() -> TestResult {
    let dir = temp_dir();
    let path = write_graph(&dir, "empty.txt", "# nothing here\n")?;
    let mut args = graph_args(path);
    args.start = Some("A".into());

    let summary = run_cli(search_cli(args, false))?;

    assert_eq!(summary.exit_code(), EXIT_NOT_FOUND);
    Ok(())
}

#[rstest]
fn auto_format_detects_json_extension() -> TestResult {
    let dir = temp_dir();
    let path = write_graph(
        &dir,
        "chain.JSON",
        r#"{"directed": true, "adj": {"C": ["A"], "A": ["B"]}}"#,
    )?;

    let summary = run_cli(search_cli(graph_args(path), true))?;

    assert_eq!(summary.source, "chain");
    assert_eq!(summary_text(&summary)?, "FOUND\n1: C -> A -> B\n");
    Ok(())
}

#[rstest]
#[case::text_flag("DIRECTED=1\nA B\nC B\n", "flag.txt", false)]
#[case::json_flag(r#"{"directed": true, "adj": {"A": ["B"], "C": ["B"]}}"#, "flag.json", false)]
#[case::text_default("A B\nB C\n", "plain.txt", true)]
fn directedness_overrides_replace_input(
    #[case] contents: &str,
    #[case] name: &str,
    #[case] directed: bool,
) -> TestResult {
    let dir = temp_dir();
    let path = write_graph(&dir, name, contents)?;
    let mut args = graph_args(path);
    args.directed = directed;
    args.undirected = !directed;

    let (_, graph) = load_graph(&args)?;

    assert_eq!(graph.is_directed(), directed);
    Ok(())
}

#[rstest]
fn forcing_undirected_finds_path_in_converging_digraph() -> TestResult {
    let dir = temp_dir();
    let path = write_graph(&dir, "converge.txt", "DIRECTED=true\nA B\nC B\n")?;
    let mut args = graph_args(path);

    let directed = run_cli(search_cli(args.clone(), false))?;
    assert!(!directed.outcome.is_found());

    args.undirected = true;
    let undirected = run_cli(search_cli(args, false))?;
    assert_eq!(summary_text(&undirected)?, "FOUND\nPath: A -> B -> C\n");
    Ok(())
}

#[rstest]
fn explicit_format_overrides_extension() -> TestResult {
    let dir = temp_dir();
    let path = write_graph(&dir, "edges.json", "A B\n")?;
    let mut args = graph_args(path);
    args.format = InputFormat::Text;

    let summary = run_cli(search_cli(args, false))?;

    assert!(summary.outcome.is_found());
    Ok(())
}

#[rstest]
fn malformed_edge_reports_line() -> TestResult {
    let dir = temp_dir();
    let path = write_graph(&dir, "broken.txt", "A B\nA B C\n")?;

    let err = run_cli_expecting_error(search_cli(graph_args(path), false), "bad edge must fail");

    assert!(matches!(
        err,
        CliError::Text(TextProviderError::MalformedEdge { line: 2, .. })
    ));
    assert_eq!(err.code(), "TEXT_MALFORMED_EDGE");
    Ok(())
}

#[rstest]
fn invalid_json_is_a_parse_error() -> TestResult {
    let dir = temp_dir();
    let path = write_graph(&dir, "broken.txt", "{\"adj\": [1, 2]}")?;
    let mut args = graph_args(path);
    args.format = InputFormat::Json;

    let err = run_cli_expecting_error(search_cli(args, false), "bad JSON must fail");

    assert!(matches!(err, CliError::Json(JsonProviderError::Parse(_))));
    assert_eq!(err.code(), "JSON_PARSE");
    Ok(())
}

#[rstest]
fn missing_file_is_an_io_error() {
    let dir = temp_dir();
    let missing = dir.path().join("missing.txt");

    let err = run_cli_expecting_error(search_cli(graph_args(missing), false), "missing file");

    assert!(matches!(err, CliError::Io { ref path, .. } if path.ends_with("missing.txt")));
    assert_eq!(err.code(), "CLI_IO");
}

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

#[rstest]
fn render_writes_png_into_new_directory() -> TestResult {
    let dir = temp_dir();
    let path = write_graph(&dir, "square.txt", SQUARE)?;
    let output = dir.path().join("out").join("square.png");

    let summary = run_cli(render_cli(graph_args(path), output.clone()))?;

    assert_eq!(summary.rendered.as_deref(), Some(output.as_path()));
    assert!(fs::read(&output)?.starts_with(PNG_SIGNATURE));
    let text = summary_text(&summary)?;
    assert!(text.starts_with("FOUND\nPath: A -> B -> C -> D\n"));
    assert!(text.ends_with(&format!("rendered: {}\n", output.display())));
    Ok(())
}

#[rstest]
fn render_without_path_still_writes_image() -> TestResult {
    let dir = temp_dir();
    let path = write_graph(&dir, "star.txt", STAR)?;
    let output = dir.path().join("star.png");

    let summary = run_cli(render_cli(graph_args(path), output.clone()))?;

    assert_eq!(summary.exit_code(), EXIT_NOT_FOUND);
    assert!(fs::read(&output)?.starts_with(PNG_SIGNATURE));
    Ok(())
}

#[rstest]
fn render_without_recognised_extension_defaults_to_png() -> TestResult {
    let dir = temp_dir();
    let path = write_graph(&dir, "square.txt", SQUARE)?;
    let output = dir.path().join("square.image");

    run_cli(render_cli(graph_args(path), output.clone()))?;

    assert!(fs::read(&output)?.starts_with(PNG_SIGNATURE));
    Ok(())
}

#[rstest]
fn render_svg_extension_writes_highlighted_svg() -> TestResult {
    let dir = temp_dir();
    let path = write_graph(&dir, "square.txt", SQUARE)?;
    let output = dir.path().join("square.svg");

    run_cli(render_cli(graph_args(path), output.clone()))?;

    let svg = fs::read_to_string(&output)?;
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Hamiltonian path: A -&gt; B -&gt; C -&gt; D"));
    assert_eq!(svg.matches("stroke=\"red\" stroke-width=\"3\"").count(), 3);
    Ok(())
}

#[rstest]
fn explicit_output_format_overrides_extension() -> TestResult {
    let dir = temp_dir();
    let path = write_graph(&dir, "square.txt", SQUARE)?;
    let output = dir.path().join("square.png");
    let mut cli = render_cli(graph_args(path), output.clone());
    if let Command::Render(render) = &mut cli.command {
        render.output_format = Some(DrawingFormat::Dot);
    }

    run_cli(cli)?;

    let dot = fs::read_to_string(&output)?;
    assert!(dot.starts_with("graph hamiltonian {"));
    assert!(dot.contains("Hamiltonian path: A -> B -> C -> D"));
    assert_eq!(dot.matches("color=red").count(), 3);
    Ok(())
}

#[rstest]
fn render_records_resolved_destination() -> TestResult {
    let dir = temp_dir();
    let path = write_graph(&dir, "square.txt", SQUARE)?;
    let output = dir.path().join("square.gv");

    let (summary, layer) =
        RecordingLayer::capture(|| run_cli(render_cli(graph_args(path), output.clone())));
    summary?;

    let render = layer
        .span_named("cli.render")
        .expect("cli.render span must exist");
    assert_eq!(render.fields.get("format"), Some(&"dot".to_owned()));
    assert!(
        render
            .fields
            .get("output")
            .is_some_and(|value| value.ends_with("square.gv"))
    );
    assert!(fs::read_to_string(&output)?.starts_with("graph hamiltonian {"));
    Ok(())
}

#[rstest]
fn render_reports_unwritable_destination() -> TestResult {
    let dir = temp_dir();
    let path = write_graph(&dir, "square.txt", SQUARE)?;

    let err = run_cli_expecting_error(
        render_cli(graph_args(path), dir.path().to_path_buf()),
        "a directory is not a writable file",
    );

    assert!(matches!(err, CliError::Render { .. }));
    assert_eq!(err.code(), "CLI_RENDER");
    Ok(())
}

#[rstest]
fn drawing_errors_keep_their_codes() {
    let err = CliError::from(DrawingError::PngEncode);
    assert_eq!(err.code(), "DRAWING_PNG_ENCODE");
    assert_eq!(err.to_string(), "failed to encode PNG");
}

#[rstest]
fn render_summary_lists_single_path_after_found() -> TestResult {
    let graph: Graph = [("A".to_owned(), "B".to_owned())].into_iter().collect();
    let outcome = PathSearchBuilder::new()
        .with_mode(SearchMode::All)
        .build()
        .run(&graph)?;
    let summary = ExecutionSummary {
        source: "pair".into(),
        mode: SearchMode::All,
        outcome,
        rendered: None,
    };

    assert_eq!(summary_text(&summary)?, "FOUND\n1: A -> B\n2: B -> A\n");
    Ok(())
}

#[rstest]
fn clap_parses_search_options() -> TestResult {
    let cli = Cli::try_parse_from([
        "hampath", "search", "g.txt", "--start", "A", "--all", "--format", "json", "--directed",
    ])?;
    let Command::Search(SearchCommand { graph, all }) = cli.command else {
        panic!("expected search command");
    };
    assert!(all);
    assert_eq!(graph.path, PathBuf::from("g.txt"));
    assert_eq!(graph.start.as_deref(), Some("A"));
    assert_eq!(graph.format, InputFormat::Json);
    assert!(graph.directed);
    Ok(())
}

#[rstest]
fn clap_defaults_render_output() -> TestResult {
    let cli = Cli::try_parse_from(["hampath", "render", "g.txt"])?;
    let Command::Render(render) = cli.command else {
        panic!("expected render command");
    };
    assert_eq!(render.output, None);
    assert_eq!(render.output_format, None);
    assert_eq!(render.graph.format, InputFormat::Auto);
    assert_eq!(
        render.destination(),
        (PathBuf::from("hamiltonian.png"), DrawingFormat::Png)
    );
    Ok(())
}

#[rstest]
#[case::format_only(&["hampath", "render", "g.txt", "--output-format", "svg"], "hamiltonian.svg", DrawingFormat::Svg)]
#[case::extension(&["hampath", "render", "g.txt", "-o", "out/g.dot"], "out/g.dot", DrawingFormat::Dot)]
#[case::flag_beats_extension(&["hampath", "render", "g.txt", "-o", "g.svg", "--output-format", "png"], "g.svg", DrawingFormat::Png)]
fn clap_resolves_render_destination(
    #[case] args: &[&str],
    #[case] expected_path: &str,
    #[case] expected_format: DrawingFormat,
) -> TestResult {
    let cli = Cli::try_parse_from(args)?;
    let Command::Render(render) = cli.command else {
        panic!("expected render command");
    };
    assert_eq!(
        render.destination(),
        (PathBuf::from(expected_path), expected_format)
    );
    Ok(())
}

#[rstest]
#[case::conflicting_direction(&["hampath", "search", "g.txt", "--directed", "--undirected"])]
#[case::render_has_no_all(&["hampath", "render", "g.txt", "--all"])]
#[case::unknown_format(&["hampath", "search", "g.txt", "--format", "csv"])]
#[case::unknown_drawing_format(&["hampath", "render", "g.txt", "--output-format", "jpeg"])]
#[case::missing_path(&["hampath", "search"])]
fn clap_rejects_invalid_arguments(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}

#[rstest]
fn search_emits_tracing_fields() -> TestResult {
    let dir = temp_dir();
    let path = write_graph(&dir, "square.txt", SQUARE)?;
    let mut args = graph_args(path);
    args.start = Some("B".into());

    let (summary, layer) = RecordingLayer::capture(|| {
        run_search(SearchCommand {
            graph: args,
            all: true,
        })
    });
    let summary = summary?;
    assert_eq!(summary.outcome.paths().len(), 2);

    let search = layer
        .span_named("cli.search")
        .expect("cli.search span must exist");
    assert_eq!(search.fields.get("all"), Some(&"true".to_owned()));
    assert_eq!(search.fields.get("start"), Some(&"B".to_owned()));

    let load = layer
        .span_named("cli.load_graph")
        .expect("cli.load_graph span must exist");
    assert_eq!(load.fields.get("format"), Some(&"text".to_owned()));
    assert_eq!(load.fields.get("directed"), Some(&"false".to_owned()));
    assert!(
        load.fields
            .get("path")
            .is_some_and(|value| value.ends_with("square.txt"))
    );

    assert!(layer.span_named("core.search").is_some());
    assert!(layer.events().iter().any(|event| {
        event.level == Level::INFO
            && event.message() == Some("command completed")
            && event.fields.get("source").is_some_and(|value| value == "square")
            && event.fields.get("paths").is_some_and(|value| value == "2")
    }));
    Ok(())
}

#[rstest]
fn text_and_json_documents_load_identical_graphs() -> TestResult {
    let dir = temp_dir();
    let text = write_graph(&dir, "chain.txt", "DIRECTED=1\nV= A B C\nA B\nB C\n")?;
    let json = write_graph(
        &dir,
        "chain.json",
        r#"{"directed": true, "adj": {"A": ["B"], "B": ["C"], "C": []}}"#,
    )?;

    let (_, from_text) = load_graph(&graph_args(text))?;
    let (_, from_json) = load_graph(&graph_args(json))?;

    assert_eq!(from_text, from_json);
    assert!(from_text.vertices().eq(from_json.vertices()));
    Ok(())
}
