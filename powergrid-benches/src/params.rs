//! Benchmark parameter types.

use std::fmt;

/// Parameters for a grid benchmark run.
#[derive(Clone, Debug)]
pub struct GridBenchParams {
    /// Number of substations in the grid.
    pub vertex_count: usize,
    /// Redundant wire runs generated per substation.
    pub extra_edges_per_vertex: usize,
}

impl fmt::Display for GridBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},extra={}",
            self.vertex_count, self.extra_edges_per_vertex
        )
    }
}
