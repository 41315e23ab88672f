//! Hamiltonian path search over directed and undirected graphs.
//!
//! The crate exposes a [`Graph`] model with insertion-ordered adjacency and a
//! backtracking [`PathSearch`] engine. Start vertices and candidate
//! neighbours are explored in ascending out-degree with ties broken by
//! insertion order, so results are reproducible run to run.
//!
//! ```
//! use hampath_core::{Graph, search};
//!
//! let graph: Graph<&str> = [("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")]
//!     .into_iter()
//!     .collect();
//! let paths = search(&graph, None, false)?;
//! assert_eq!(paths[0].to_string(), "A -> B -> C -> D");
//! # Ok::<(), hampath_core::HampathError>(())
//! ```

mod builder;
mod error;
mod graph;
mod path;
mod search;

pub use crate::{
    builder::{PathSearchBuilder, SearchMode},
    error::{HampathError, HampathErrorCode, Result},
    graph::{Graph, VertexId},
    path::{HamiltonianPath, SearchOutcome, SearchStats},
    search::{PathSearch, search},
};
