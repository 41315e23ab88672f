//! Backtracking Hamiltonian path search.
//!
//! The engine roots a depth-first walk at each start vertex and extends the
//! current path one unvisited neighbour at a time. Both start vertices and
//! candidate neighbours are tried in ascending out-degree, ties broken by
//! vertex insertion order. The ordering only changes discovery order and
//! practical cost; it never prunes a path.
//!
//! Vertices are mapped to dense indices for the duration of a run. Each
//! neighbour list is sorted once up front because degrees never change while
//! the search runs, which yields the same visiting order as re-sorting the
//! unvisited candidates at every step.

mod walk;

use std::ops::ControlFlow;

use tracing::{Span, debug, field, info, instrument};

use crate::{
    Result,
    builder::{PathSearchBuilder, SearchMode},
    error::HampathError,
    graph::{Graph, VertexId},
    path::{HamiltonianPath, SearchOutcome, SearchStats},
};

use self::walk::Walk;

/// A configured Hamiltonian path search.
///
/// Construct instances with [`PathSearchBuilder`].
///
/// # Examples
/// ```
/// use hampath_core::{Graph, PathSearchBuilder, SearchMode};
///
/// let graph: Graph<&str> = [("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")]
///     .into_iter()
///     .collect();
/// let outcome = PathSearchBuilder::new()
///     .with_mode(SearchMode::All)
///     .build()
///     .run(&graph)?;
/// assert_eq!(outcome.paths().len(), 8);
/// assert!(outcome.paths().iter().all(|path| path.len() == 4));
/// # Ok::<(), hampath_core::HampathError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PathSearch<V: VertexId> {
    start: Option<V>,
    mode: SearchMode,
}

impl<V: VertexId> PathSearch<V> {
    pub(crate) fn new(start: Option<V>, mode: SearchMode) -> Self {
        Self { start, mode }
    }

    /// Returns the fixed start vertex, if one was configured.
    #[must_use]
    pub const fn start(&self) -> Option<&V> {
        self.start.as_ref()
    }

    /// Returns the configured search mode.
    #[must_use]
    pub const fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Runs the search against `graph`.
    ///
    /// An empty graph yields an empty outcome. A graph with a single vertex
    /// yields one path containing that vertex.
    ///
    /// # Errors
    /// Returns [`HampathError::UnknownVertex`] when the configured start
    /// vertex is not part of a non-empty `graph`. No search work is performed
    /// in that case.
    #[instrument(
        name = "core.search",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertex_count(),
            directed = graph.is_directed(),
            mode = %self.mode,
            start = field::Empty,
        ),
    )]
    pub fn run(&self, graph: &Graph<V>) -> Result<SearchOutcome<V>> {
        if graph.is_empty() {
            info!(paths = 0_usize, "graph has no vertices");
            return Ok(SearchOutcome::new(Vec::new(), SearchStats::default()));
        }

        let fixed_start = match &self.start {
            Some(start) => {
                Span::current().record("start", field::display(start));
                let index = graph
                    .index_of(start)
                    .ok_or_else(|| HampathError::unknown_vertex(start))?;
                Some(index)
            }
            None => None,
        };

        let labels: Vec<&V> = graph.vertices().collect();
        let (adjacency, degrees) = ordered_adjacency(graph);
        let starts = match fixed_start {
            Some(index) => vec![index],
            None => by_ascending_degree(0..labels.len(), &degrees),
        };

        let mut walk = Walk::new(&adjacency, self.mode);
        let mut stats = SearchStats::default();
        for start in starts {
            stats.start_attempts += 1;
            let flow = walk.root_at(start);
            if let Some(label) = labels.get(start) {
                debug!(
                    start = %label,
                    found = walk.found().len(),
                    "start attempt finished"
                );
            }
            if flow.is_break() {
                break;
            }
        }
        stats.expansions = walk.expansions();

        let paths: Vec<HamiltonianPath<V>> = walk
            .into_found()
            .into_iter()
            .map(|indices| {
                HamiltonianPath::new(
                    indices
                        .into_iter()
                        .filter_map(|index| labels.get(index).map(|label| (*label).clone()))
                        .collect(),
                )
            })
            .collect();

        info!(
            paths = paths.len(),
            start_attempts = stats.start_attempts,
            expansions = stats.expansions,
            "search completed"
        );
        Ok(SearchOutcome::new(paths, stats))
    }
}

/// Finds Hamiltonian paths in `graph`.
///
/// Searches from `start` when given, otherwise from every vertex in
/// ascending out-degree. With `all_paths == false` the search stops at the
/// first completed path.
///
/// # Errors
/// Returns [`HampathError::UnknownVertex`] when `start` is not part of a
/// non-empty `graph`.
///
/// # Examples
/// ```
/// use hampath_core::{Graph, HampathError, search};
///
/// let mut graph: Graph<&str> = Graph::undirected();
/// graph.add_vertex("solo");
/// let paths = search(&graph, None, false)?;
/// assert_eq!(paths.len(), 1);
/// assert_eq!(paths[0].vertices(), ["solo"]);
///
/// let err = search(&graph, Some(&"ghost"), true).expect_err("unknown start");
/// assert!(matches!(err, HampathError::UnknownVertex { .. }));
/// # Ok::<(), HampathError>(())
/// ```
pub fn search<V: VertexId>(
    graph: &Graph<V>,
    start: Option<&V>,
    all_paths: bool,
) -> Result<Vec<HamiltonianPath<V>>> {
    let outcome = PathSearchBuilder::new()
        .with_optional_start(start.cloned())
        .with_mode(SearchMode::from_all_paths(all_paths))
        .build()
        .run(graph)?;
    Ok(outcome.into_paths())
}

/// Converts `graph` into index adjacency with every neighbour list already
/// in heuristic order. Also returns each vertex's out-degree.
fn ordered_adjacency<V: VertexId>(graph: &Graph<V>) -> (Vec<Vec<usize>>, Vec<usize>) {
    let entries: Vec<_> = (0..graph.vertex_count())
        .filter_map(|index| graph.entry_at(index))
        .collect();
    let degrees: Vec<usize> = entries.iter().map(|(_, neighbours)| neighbours.len()).collect();
    let adjacency = entries
        .iter()
        .map(|(_, neighbours)| {
            let indices = neighbours.iter().filter_map(|vertex| graph.index_of(vertex));
            by_ascending_degree(indices, &degrees)
        })
        .collect();
    (adjacency, degrees)
}

/// Sorts vertex indices by ascending degree, ties by index.
fn by_ascending_degree(indices: impl IntoIterator<Item = usize>, degrees: &[usize]) -> Vec<usize> {
    let mut ordered: Vec<usize> = indices.into_iter().collect();
    ordered.sort_by_key(|&index| (degrees.get(index).copied().unwrap_or(usize::MAX), index));
    ordered
}

/// Flow returned once a path is complete: stop unless enumerating.
fn on_complete(mode: SearchMode) -> ControlFlow<()> {
    if mode.is_exhaustive() {
        ControlFlow::Continue(())
    } else {
        ControlFlow::Break(())
    }
}

#[cfg(test)]
mod property;
