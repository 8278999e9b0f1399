//! Fixture types for MST property-based tests.

use test_strategy::Arbitrary;

/// Shape of the generated graph and how its weights are drawn.
///
/// `ManyIdentical` is weighted highest because it drives the name and
/// input-order tie-breaks hardest.
#[derive(Arbitrary, Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range, so ties are rare.
    #[weight(2)]
    Unique,
    /// Weights drawn from a pool of one to three values.
    #[weight(3)]
    ManyIdentical,
    /// A random spanning path plus a few extra edges.
    #[weight(2)]
    Sparse,
    /// Most vertex pairs connected.
    #[weight(2)]
    Dense,
    /// Two or more blocks of vertices with no edges between them.
    #[weight(2)]
    Disconnected,
    /// At most six vertices, small enough for exhaustive search.
    #[weight(2)]
    Tiny,
}

/// One generated edge with 1-based endpoints.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct FixtureEdge {
    pub start: usize,
    pub end: usize,
    pub weight: u32,
    pub name: String,
}

/// Generated graph plus the distribution that produced it, kept for failure
/// messages.
///
/// Edges never repeat an unordered pair and never form self-loops, so every
/// fixture is accepted by the loader.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    pub vertex_count: usize,
    pub edges: Vec<FixtureEdge>,
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Short description appended to property failure messages.
    pub(super) fn context(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len(),
        )
    }
}

/// Repetitions used by the determinism property.
///
/// `POWERGRID_MST_PBT_REPEATS` overrides the default of 4.
pub(super) struct RepeatConfig {
    pub repetitions: usize,
}

impl RepeatConfig {
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("POWERGRID_MST_PBT_REPEATS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .filter(|count| *count > 0)
            .unwrap_or(4);
        Self { repetitions }
    }
}
