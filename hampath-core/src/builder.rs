//! Builder utilities for configuring path searches.
//!
//! Exposes the search mode selection surface and the builder used to
//! construct [`PathSearch`] instances.

use std::fmt;

use crate::{graph::VertexId, search::PathSearch};

/// Controls whether a search stops at the first Hamiltonian path or
/// enumerates every path reachable under the ordering heuristic.
///
/// # Examples
/// ```
/// use hampath_core::SearchMode;
///
/// assert_eq!(SearchMode::from_all_paths(true), SearchMode::All);
/// assert_eq!(SearchMode::default(), SearchMode::FirstOnly);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// Stop every frame and the start loop after the first completed path.
    #[default]
    FirstOnly,
    /// Explore every candidate from every start vertex.
    All,
}

impl SearchMode {
    /// Maps the conventional `all_paths` flag onto a mode.
    #[must_use]
    pub const fn from_all_paths(all_paths: bool) -> Self {
        if all_paths { Self::All } else { Self::FirstOnly }
    }

    /// Returns whether the mode enumerates every path.
    #[must_use]
    pub const fn is_exhaustive(self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FirstOnly => "first",
            Self::All => "all",
        })
    }
}

/// Configures and constructs [`PathSearch`] instances.
///
/// # Examples
/// ```
/// use hampath_core::{PathSearchBuilder, SearchMode};
///
/// let search = PathSearchBuilder::new()
///     .with_start("A")
///     .with_mode(SearchMode::All)
///     .build();
/// assert_eq!(search.start(), Some(&"A"));
/// assert_eq!(search.mode(), SearchMode::All);
/// ```
#[derive(Debug, Clone)]
pub struct PathSearchBuilder<V: VertexId> {
    start: Option<V>,
    mode: SearchMode,
}

impl<V: VertexId> Default for PathSearchBuilder<V> {
    fn default() -> Self {
        Self {
            start: None,
            mode: SearchMode::FirstOnly,
        }
    }
}

impl<V: VertexId> PathSearchBuilder<V> {
    /// Creates a builder that searches from every vertex and stops at the
    /// first path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Roots the search at a single start vertex.
    #[must_use]
    pub fn with_start(mut self, start: V) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets or clears the fixed start vertex.
    #[must_use]
    pub fn with_optional_start(mut self, start: Option<V>) -> Self {
        self.start = start;
        self
    }

    /// Returns the configured start vertex.
    #[must_use]
    pub const fn start(&self) -> Option<&V> {
        self.start.as_ref()
    }

    /// Overrides the search mode.
    #[must_use]
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the configured search mode.
    #[must_use]
    pub const fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Constructs the configured [`PathSearch`].
    ///
    /// The start vertex is validated against a graph when the search runs.
    #[must_use]
    pub fn build(self) -> PathSearch<V> {
        PathSearch::new(self.start, self.mode)
    }
}
