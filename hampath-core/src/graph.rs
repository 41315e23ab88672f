//! Graph model storing vertices and adjacency in insertion order.
//!
//! Iteration order is part of the contract: the search heuristic breaks
//! degree ties by the order in which vertices were first inserted, so two
//! graphs built from the same input always explore paths in the same order.

use std::{fmt, hash::Hash};

use indexmap::{IndexMap, IndexSet};

use crate::{Result, error::HampathError};

/// Identifier usable as a graph vertex.
///
/// Blanket-implemented for every cloneable, hashable, displayable type such as
/// `String`, `&str`, or integers.
pub trait VertexId: Clone + Eq + Hash + fmt::Display {}

impl<T> VertexId for T where T: Clone + Eq + Hash + fmt::Display {}

/// Directed or undirected graph with set-semantics adjacency.
///
/// Every vertex referenced by an edge is also stored as a key, so neighbour
/// lookups never observe dangling identifiers. Undirected graphs store each
/// edge in both directions.
///
/// # Examples
/// ```
/// use hampath_core::Graph;
///
/// let mut graph = Graph::undirected();
/// graph.add_edge("A".to_owned(), "B".to_owned());
/// graph.add_vertex("C".to_owned());
///
/// let vertices: Vec<&String> = graph.vertices().collect();
/// assert_eq!(vertices, ["A", "B", "C"]);
/// assert!(graph.has_edge(&"B".to_owned(), &"A".to_owned()));
/// assert_eq!(graph.degree(&"C".to_owned()), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<V: VertexId = String> {
    directed: bool,
    adjacency: IndexMap<V, IndexSet<V>>,
}

impl<V: VertexId> Default for Graph<V> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<V: VertexId> Graph<V> {
    /// Creates an empty graph with fixed directedness.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            adjacency: IndexMap::new(),
        }
    }

    /// Creates an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Returns whether edges are stored asymmetrically.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// Ensures `vertex` exists with at least an empty neighbour set.
    ///
    /// Returns `true` when the vertex was newly inserted. Calling this for an
    /// existing vertex leaves the graph untouched.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.ensure_vertex(vertex).1
    }

    /// Inserts the edge `from -> to`, creating either endpoint if missing.
    ///
    /// Undirected graphs also insert `to -> from`. Duplicate edges collapse.
    ///
    /// # Examples
    /// ```
    /// use hampath_core::Graph;
    ///
    /// let mut graph: Graph<u32> = Graph::directed();
    /// graph.add_edge(1, 2);
    /// graph.add_edge(1, 2);
    /// assert_eq!(graph.edge_count(), 1);
    /// assert!(!graph.has_edge(&2, &1));
    /// ```
    pub fn add_edge(&mut self, from: V, to: V) {
        let (from_index, _) = self.ensure_vertex(from.clone());
        let (to_index, _) = self.ensure_vertex(to.clone());
        if let Some((_, neighbours)) = self.adjacency.get_index_mut(from_index) {
            neighbours.insert(to);
        }
        if !self.directed {
            if let Some((_, neighbours)) = self.adjacency.get_index_mut(to_index) {
                neighbours.insert(from);
            }
        }
    }

    /// Iterates over vertices in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Returns the neighbour set of `vertex`.
    ///
    /// Lookups never create vertices.
    ///
    /// # Errors
    /// Returns [`HampathError::UnknownVertex`] when `vertex` is absent.
    pub fn neighbors(&self, vertex: &V) -> Result<&IndexSet<V>> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| HampathError::unknown_vertex(vertex))
    }

    /// Returns the out-degree of `vertex`, or `None` when it is absent.
    #[must_use]
    pub fn degree(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get(vertex).map(IndexSet::len)
    }

    /// Returns whether `vertex` is stored in the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns whether the edge `from -> to` is stored.
    #[must_use]
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|neighbours| neighbours.contains(to))
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns whether the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of edges. Undirected edges count once; self-loops count once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        if self.directed {
            self.adjacency.values().map(IndexSet::len).sum()
        } else {
            self.edges().count()
        }
    }

    /// Iterates over stored edges in insertion order.
    ///
    /// Undirected edges are reported once, oriented from the endpoint that
    /// was inserted first.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(from_index, (from, neighbours))| {
                neighbours.iter().filter_map(move |to| {
                    let keep = self.directed
                        || self
                            .adjacency
                            .get_index_of(to)
                            .is_some_and(|to_index| to_index >= from_index);
                    keep.then_some((from, to))
                })
            })
    }

    /// Reinterprets the stored adjacency with a different directedness.
    ///
    /// Forcing an undirected graph symmetrizes the edge set. Forcing a
    /// directed graph keeps every stored edge as-is, so an undirected source
    /// becomes a directed graph with both orientations of each edge. Vertex
    /// order is preserved either way.
    ///
    /// # Examples
    /// ```
    /// use hampath_core::Graph;
    ///
    /// let mut graph = Graph::directed();
    /// graph.add_edge("A", "B");
    /// let undirected = graph.with_directedness(false);
    /// assert!(undirected.has_edge(&"B", &"A"));
    /// ```
    #[must_use]
    pub fn with_directedness(self, directed: bool) -> Self {
        if self.directed == directed {
            return self;
        }
        let mut graph = Self::new(directed);
        for vertex in self.adjacency.keys() {
            graph.add_vertex(vertex.clone());
        }
        for (from, neighbours) in self.adjacency {
            for to in neighbours {
                graph.add_edge(from.clone(), to);
            }
        }
        graph
    }

    pub(crate) fn index_of(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get_index_of(vertex)
    }

    pub(crate) fn entry_at(&self, index: usize) -> Option<(&V, &IndexSet<V>)> {
        self.adjacency.get_index(index)
    }

    fn ensure_vertex(&mut self, vertex: V) -> (usize, bool) {
        let entry = self.adjacency.entry(vertex);
        let index = entry.index();
        let inserted = matches!(entry, indexmap::map::Entry::Vacant(_));
        entry.or_default();
        (index, inserted)
    }
}

impl<V: VertexId> FromIterator<(V, V)> for Graph<V> {
    /// Builds an undirected graph from an edge list.
    fn from_iter<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        let mut graph = Self::undirected();
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }
}
