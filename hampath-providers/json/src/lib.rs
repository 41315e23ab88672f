//! JSON adjacency loader producing [`Graph`] instances.
//!
//! Documents have the shape
//! `{"directed": false, "adj": {"A": ["B", "C"], "B": ["C"]}}`. Both keys are
//! optional: `directed` defaults to `false` and `adj` to an empty graph. Key
//! order is preserved, so vertex insertion order follows the document.

mod errors;

use std::io::Read;

use hampath_core::Graph;
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, instrument};

pub use crate::errors::{JsonProviderError, JsonProviderErrorCode};

#[derive(Debug, Default, Deserialize)]
struct GraphDocument {
    #[serde(default)]
    directed: bool,
    #[serde(default)]
    adj: IndexMap<String, Vec<String>>,
}

impl GraphDocument {
    fn into_graph(self) -> Graph {
        let mut graph = Graph::new(self.directed);
        for (vertex, neighbours) in self.adj {
            graph.add_vertex(vertex.clone());
            for neighbour in neighbours {
                graph.add_edge(vertex.clone(), neighbour);
            }
        }
        graph
    }
}

/// Graph loaded from a JSON adjacency document.
#[derive(Debug, Clone)]
pub struct JsonGraphProvider {
    name: String,
    graph: Graph,
}

impl JsonGraphProvider {
    /// Deserializes a document from `reader`.
    ///
    /// The graph is built with the document's own directedness. When
    /// `directed_override` differs from it the stored adjacency is
    /// reinterpreted through [`Graph::with_directedness`]: forcing undirected
    /// symmetrizes the edges, forcing directed keeps them as stored.
    ///
    /// # Errors
    /// Returns [`JsonProviderError::Io`] when reading fails and
    /// [`JsonProviderError::Parse`] for malformed documents.
    ///
    /// # Examples
    /// ```
    /// use hampath_providers_json::JsonGraphProvider;
    ///
    /// let raw = r#"{"directed": true, "adj": {"A": ["B"], "B": ["C"]}}"#;
    /// let provider = JsonGraphProvider::try_from_reader("demo", raw.as_bytes(), Some(false))?;
    /// assert!(!provider.graph().is_directed());
    /// assert!(provider.graph().has_edge(&"C".to_owned(), &"B".to_owned()));
    /// # Ok::<(), hampath_providers_json::JsonProviderError>(())
    /// ```
    #[instrument(name = "json.load", err, skip(name, reader))]
    pub fn try_from_reader<R: Read>(
        name: impl Into<String>,
        reader: R,
        directed_override: Option<bool>,
    ) -> Result<Self, JsonProviderError> {
        let document: GraphDocument = serde_json::from_reader(reader)?;
        let mut graph = document.into_graph();
        if let Some(directed) = directed_override {
            graph = graph.with_directedness(directed);
        }
        debug!(
            directed = graph.is_directed(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "adjacency document loaded"
        );
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
