//! Result types produced by the path search engine.

use std::fmt;

use crate::graph::VertexId;

/// A completed Hamiltonian path: every vertex of the graph exactly once.
///
/// # Examples
/// ```
/// use hampath_core::{Graph, search};
///
/// let graph: Graph<&str> = [("A", "B"), ("B", "C")].into_iter().collect();
/// let paths = search(&graph, Some(&"A"), false)?;
/// assert_eq!(paths[0].vertices(), ["A", "B", "C"]);
/// assert_eq!(paths[0].to_string(), "A -> B -> C");
/// # Ok::<(), hampath_core::HampathError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HamiltonianPath<V: VertexId> {
    vertices: Vec<V>,
}

impl<V: VertexId> HamiltonianPath<V> {
    pub(crate) fn new(vertices: Vec<V>) -> Self {
        Self { vertices }
    }

    /// Vertices in traversal order.
    #[must_use]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Number of vertices on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: the engine never reports empty paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex the path starts from.
    #[must_use]
    pub fn first(&self) -> Option<&V> {
        self.vertices.first()
    }

    /// Consecutive `(from, to)` pairs traversed by the path.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.vertices.windows(2).filter_map(|pair| match pair {
            [from, to] => Some((from, to)),
            _ => None,
        })
    }

    /// Consumes the path, returning its vertices.
    #[must_use]
    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }
}

impl<V: VertexId> fmt::Display for HamiltonianPath<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vertices = self.vertices.iter();
        if let Some(first) = vertices.next() {
            write!(f, "{first}")?;
        }
        for vertex in vertices {
            write!(f, " -> {vertex}")?;
        }
        Ok(())
    }
}

/// Counters describing the work performed by one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of start vertices the search was rooted at.
    pub start_attempts: usize,
    /// Number of partial paths visited, including every start vertex.
    pub expansions: u64,
}

/// Paths discovered by a search run, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<V: VertexId> {
    paths: Vec<HamiltonianPath<V>>,
    stats: SearchStats,
}

impl<V: VertexId> SearchOutcome<V> {
    pub(crate) fn new(paths: Vec<HamiltonianPath<V>>, stats: SearchStats) -> Self {
        Self { paths, stats }
    }

    /// Discovered paths in discovery order.
    #[must_use]
    pub fn paths(&self) -> &[HamiltonianPath<V>] {
        &self.paths
    }

    /// First discovered path, if any.
    #[must_use]
    pub fn first(&self) -> Option<&HamiltonianPath<V>> {
        self.paths.first()
    }

    /// Returns whether at least one Hamiltonian path was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        !self.paths.is_empty()
    }

    /// Work counters for the run.
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Consumes the outcome, returning the discovered paths.
    #[must_use]
    pub fn into_paths(self) -> Vec<HamiltonianPath<V>> {
        self.paths
    }
}
