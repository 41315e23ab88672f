//! Line-based edge-list loader producing [`Graph`] instances.
//!
//! The format is one directive or edge per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! DIRECTED=0
//! V= A B C D
//! A B
//! B C
//! C D
//! ```
//!
//! `DIRECTED=` accepts `0`, `1`, `true`, or `false` and defaults to
//! undirected. `V=` declares vertices, including isolated ones, and may be
//! repeated. Every other line is an edge between two whitespace-separated
//! vertex names. Declared vertices are inserted before edge endpoints.

mod errors;

use std::io::BufRead;

use hampath_core::Graph;
use tracing::{debug, instrument};

pub use crate::errors::{TextProviderError, TextProviderErrorCode};

const DIRECTED_KEY: &str = "DIRECTED";
const VERTICES_KEY: &str = "V";

/// Graph loaded from an edge-list text document.
#[derive(Debug, Clone)]
pub struct TextGraphProvider {
    name: String,
    graph: Graph,
}

impl TextGraphProvider {
    /// Parses `reader` into a graph.
    ///
    /// `directed_override` replaces any `DIRECTED=` line in the document.
    ///
    /// # Errors
    /// Returns [`TextProviderError::Io`] when reading fails,
    /// [`TextProviderError::InvalidDirectedFlag`] for unsupported
    /// `DIRECTED=` values, and [`TextProviderError::MalformedEdge`] for edge
    /// lines without exactly two names.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use hampath_providers_text::TextGraphProvider;
    ///
    /// let text = "DIRECTED=1\nV= A B C\nA B\n";
    /// let provider = TextGraphProvider::try_from_reader("demo", Cursor::new(text), None)?;
    /// assert_eq!(provider.name(), "demo");
    /// assert!(provider.graph().is_directed());
    /// assert_eq!(provider.graph().vertex_count(), 3);
    /// # Ok::<(), hampath_providers_text::TextProviderError>(())
    /// ```
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
        directed_override: Option<bool>,
    ) -> Result<Self, TextProviderError> {
        let document = EdgeList::parse(reader)?;
        let graph = document.into_graph(directed_override);
        Ok(Self {
            name: name.into(),
            graph,
        })
    }

    /// Name of the source, usually derived from the file name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parsed graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the provider, returning the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

/// Parsed but not yet assembled document contents.
#[derive(Debug, Default)]
struct EdgeList {
    directed: bool,
    declared: Vec<String>,
    edges: Vec<(String, String)>,
}

impl EdgeList {
    #[instrument(name = "text.parse", err, skip(reader))]
    fn parse<R: BufRead>(reader: R) -> Result<Self, TextProviderError> {
        let mut document = Self::default();
        for (index, raw) in reader.lines().enumerate() {
            let raw = raw?;
            document.read_line(index + 1, raw.trim())?;
        }
        debug!(
            directed = document.directed,
            declared = document.declared.len(),
            edges = document.edges.len(),
            "edge list parsed"
        );
        Ok(document)
    }

    fn read_line(&mut self, line: usize, content: &str) -> Result<(), TextProviderError> {
        if content.is_empty() || content.starts_with('#') {
            return Ok(());
        }
        if let Some((key, value)) = content.split_once('=') {
            if key.eq_ignore_ascii_case(DIRECTED_KEY) {
                self.directed = parse_directed(line, value.trim())?;
                return Ok(());
            }
            if key.eq_ignore_ascii_case(VERTICES_KEY) {
                self.declared
                    .extend(value.split_whitespace().map(ToOwned::to_owned));
                return Ok(());
            }
        }

        let mut names = content.split_whitespace();
        match (names.next(), names.next(), names.next()) {
            (Some(from), Some(to), None) => {
                self.edges.push((from.to_owned(), to.to_owned()));
                Ok(())
            }
            _ => Err(TextProviderError::MalformedEdge {
                line,
                content: content.to_owned(),
            }),
        }
    }

    fn into_graph(self, directed_override: Option<bool>) -> Graph {
        let mut graph = Graph::new(directed_override.unwrap_or(self.directed));
        for vertex in self.declared {
            graph.add_vertex(vertex);
        }
        for (from, to) in self.edges {
            graph.add_edge(from, to);
        }
        graph
    }
}

fn parse_directed(line: usize, value: &str) -> Result<bool, TextProviderError> {
    if value == "1" || value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value == "0" || value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(TextProviderError::InvalidDirectedFlag {
            line,
            value: value.to_owned(),
        })
    }
}
