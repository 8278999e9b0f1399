//! Seeded synthetic substation grids.
//!
//! Every grid is connected: a random tree over all substations forms the
//! backbone, and redundant runs between random pairs are layered on top.

use std::collections::HashSet;
use std::fmt;

use powergrid_core::{Graph, GraphBuilder};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Configuration for a synthetic grid.
#[derive(Clone, Debug)]
pub struct SyntheticGridConfig {
    /// Number of substations.
    pub vertex_count: usize,
    /// Redundant runs attempted per substation on top of the backbone.
    pub extra_edges_per_vertex: usize,
    /// Largest wire length generated; lengths are drawn from `1..=max_weight`.
    pub max_weight: u32,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// One generated wire run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntheticEdge {
    /// Starting substation.
    pub start: usize,
    /// Ending substation.
    pub end: usize,
    /// Wire length.
    pub weight: u32,
    /// Identifier written to the report.
    pub name: String,
}

/// A connected grid in input order.
#[derive(Clone, Debug)]
pub struct SyntheticGrid {
    vertex_count: usize,
    edges: Vec<SyntheticEdge>,
}

impl SyntheticGrid {
    /// Generates a connected grid from `config`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when the vertex count or the
    /// maximum weight is zero.
    pub fn generate(config: &SyntheticGridConfig) -> Result<Self, BenchSetupError> {
        if config.vertex_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "vertex_count",
            });
        }
        if config.max_weight == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "max_weight",
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut pairs = HashSet::new();
        let mut edges = Vec::new();

        for vertex in 2..=config.vertex_count {
            let parent = rng.gen_range(1..vertex);
            pairs.insert((parent, vertex));
            edges.push(synthetic_edge(parent, vertex, config, &mut rng, edges.len()));
        }

        let possible = config
            .vertex_count
            .saturating_mul(config.vertex_count.saturating_sub(1))
            .div_euclid(2);
        let wanted = config
            .vertex_count
            .saturating_mul(config.extra_edges_per_vertex)
            .min(possible.saturating_sub(edges.len()));
        let mut attempts = wanted.saturating_mul(4);
        let mut added = 0;
        while added < wanted && attempts > 0 {
            attempts -= 1;
            let left = rng.gen_range(1..=config.vertex_count);
            let right = rng.gen_range(1..=config.vertex_count);
            if left == right || !pairs.insert((left.min(right), left.max(right))) {
                continue;
            }
            edges.push(synthetic_edge(left, right, config, &mut rng, edges.len()));
            added += 1;
        }

        Ok(Self {
            vertex_count: config.vertex_count,
            edges,
        })
    }

    /// Returns the number of substations.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the generated runs, backbone first.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[SyntheticEdge] { &self.edges }

    /// Builds the in-memory graph directly, bypassing text parsing.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Graph`] if the builder rejects an edge.
    pub fn graph(&self) -> Result<Graph, BenchSetupError> {
        let mut builder = GraphBuilder::new(self.vertex_count);
        for (index, edge) in self.edges.iter().enumerate() {
            builder.add_edge(edge.start, edge.end, edge.weight, edge.name.as_str(), index + 2)?;
        }
        Ok(builder.build())
    }

    /// Renders the grid in the loader's text format.
    #[must_use]
    pub fn to_input(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SyntheticGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.vertex_count)?;
        for edge in &self.edges {
            writeln!(f, "{},{},{},{}", edge.start, edge.end, edge.weight, edge.name)?;
        }
        Ok(())
    }
}

fn synthetic_edge(
    start: usize,
    end: usize,
    config: &SyntheticGridConfig,
    rng: &mut SmallRng,
    index: usize,
) -> SyntheticEdge {
    SyntheticEdge {
        start,
        end,
        weight: rng.gen_range(1..=config.max_weight),
        name: format!("w{index}"),
    }
}
