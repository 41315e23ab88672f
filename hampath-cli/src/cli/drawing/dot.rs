//! Graphviz DOT rendering of a graph and its Hamiltonian path.

use std::collections::HashSet;
use std::io::{self, Write};

use hampath_core::{Graph, HamiltonianPath};

const PATH_EDGE_STYLE: &str = " [color=red, penwidth=3]";

/// Writes `graph` as a DOT document, highlighting the edges of `path`.
///
/// Directed graphs render as `digraph` with `->` edges, undirected graphs as
/// `graph` with `--` edges listed once. The graph label names the path or
/// states that none was found.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// use hampath_cli::cli::render_dot;
/// use hampath_core::{Graph, search};
///
/// let graph: Graph = [("A".to_owned(), "B".to_owned())].into_iter().collect();
/// let paths = search(&graph, None, false)?;
/// let mut buffer = Vec::new();
/// render_dot(&graph, paths.first(), &mut buffer)?;
/// let dot = String::from_utf8(buffer)?;
/// assert!(dot.starts_with("graph hamiltonian {"));
/// assert!(dot.contains("\"A\" -- \"B\" [color=red, penwidth=3];"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_dot(
    graph: &Graph,
    path: Option<&HamiltonianPath<String>>,
    mut writer: impl Write,
) -> io::Result<()> {
    let (keyword, connector) = if graph.is_directed() {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };
    let highlighted = path_edges(graph, path);

    writeln!(writer, "{keyword} hamiltonian {{")?;
    let label = match path {
        Some(path) => format!("Hamiltonian path: {path}"),
        None => "no Hamiltonian path found".to_owned(),
    };
    writeln!(writer, "    label={};", quote(&label))?;
    writeln!(writer, "    labelloc=t;")?;
    for vertex in graph.vertices() {
        writeln!(writer, "    {};", quote(vertex))?;
    }
    for (from, to) in graph.edges() {
        let style = if highlighted.contains(&(from.as_str(), to.as_str())) {
            PATH_EDGE_STYLE
        } else {
            ""
        };
        writeln!(
            writer,
            "    {} {connector} {}{style};",
            quote(from),
            quote(to)
        )?;
    }
    writeln!(writer, "}}")
}

/// Edges traversed by `path`, in both orientations for undirected graphs.
fn path_edges<'a>(
    graph: &Graph,
    path: Option<&'a HamiltonianPath<String>>,
) -> HashSet<(&'a str, &'a str)> {
    let mut edges = HashSet::new();
    let Some(path) = path else {
        return edges;
    };
    for (from, to) in path.edges() {
        edges.insert((from.as_str(), to.as_str()));
        if !graph.is_directed() {
            edges.insert((to.as_str(), from.as_str()));
        }
    }
    edges
}

fn quote(id: &str) -> String {
    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    for ch in id.chars() {
        match ch {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(ch);
            }
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
