//! Deterministic graph families for benchmarking the path search.
//!
//! Vertices are named `v0`, `v1`, ... in insertion order so benchmark
//! inputs are reproducible and readable in search output.

use hampath_core::Graph;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

/// Errors raised by the graph family generators.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphFamilyError {
    /// A family was requested with no vertices.
    #[error("graph families need at least one vertex")]
    ZeroVertices,
    /// The random edge probability was outside `(0, 1]`.
    #[error("edge probability must be in (0, 1] but was {value}")]
    InvalidProbability {
        /// Probability supplied by the caller.
        value: f64,
    },
}

/// Configuration for [`random`] graphs.
#[derive(Clone, Debug)]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Probability that any ordered (directed) or unordered pair is joined.
    pub edge_probability: f64,
    /// Whether the graph is directed.
    pub directed: bool,
    /// RNG seed.
    pub seed: u64,
}

fn vertex(index: usize) -> String {
    format!("v{index}")
}

fn with_vertices(vertex_count: usize, directed: bool) -> Result<Graph, GraphFamilyError> {
    if vertex_count == 0 {
        return Err(GraphFamilyError::ZeroVertices);
    }
    let mut graph = Graph::new(directed);
    for index in 0..vertex_count {
        graph.add_vertex(vertex(index));
    }
    Ok(graph)
}

/// Builds a cycle `v0 -> v1 -> ... -> v{n-1} -> v0`.
///
/// Graphs with fewer than three vertices are simple paths.
///
/// # Errors
/// Returns [`GraphFamilyError::ZeroVertices`] when `vertex_count` is zero.
pub fn cycle(vertex_count: usize, directed: bool) -> Result<Graph, GraphFamilyError> {
    let mut graph = with_vertices(vertex_count, directed)?;
    for index in 1..vertex_count {
        graph.add_edge(vertex(index - 1), vertex(index));
    }
    if vertex_count > 2 {
        graph.add_edge(vertex(vertex_count - 1), vertex(0));
    }
    Ok(graph)
}

/// Builds the undirected complete graph on `vertex_count` vertices.
///
/// # Errors
/// Returns [`GraphFamilyError::ZeroVertices`] when `vertex_count` is zero.
pub fn complete(vertex_count: usize) -> Result<Graph, GraphFamilyError> {
    let mut graph = with_vertices(vertex_count, false)?;
    for from in 0..vertex_count {
        for to in (from + 1)..vertex_count {
            graph.add_edge(vertex(from), vertex(to));
        }
    }
    Ok(graph)
}

/// Builds an Erdős–Rényi style random graph from a seeded [`SmallRng`].
///
/// # Errors
/// Returns [`GraphFamilyError::ZeroVertices`] for an empty graph and
/// [`GraphFamilyError::InvalidProbability`] when the probability is not in
/// `(0, 1]`.
pub fn random(config: &RandomGraphConfig) -> Result<Graph, GraphFamilyError> {
    let probability = config.edge_probability;
    if !(probability > 0.0 && probability <= 1.0) {
        return Err(GraphFamilyError::InvalidProbability { value: probability });
    }
    let mut graph = with_vertices(config.vertex_count, config.directed)?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    for from in 0..config.vertex_count {
        for to in 0..config.vertex_count {
            let is_candidate = if config.directed { from != to } else { from < to };
            if is_candidate && rng.gen_bool(probability) {
                graph.add_edge(vertex(from), vertex(to));
            }
        }
    }
    Ok(graph)
}
