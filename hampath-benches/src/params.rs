//! Benchmark parameter types.

use std::fmt;

/// Identifies one graph instance in a benchmark group.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Graph family label, such as `cycle` or `complete`.
    pub family: &'static str,
    /// Number of vertices.
    pub vertex_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.family, self.vertex_count)
    }
}
