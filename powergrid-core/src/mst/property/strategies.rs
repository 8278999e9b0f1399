//! Graph generators for MST property-based tests.
//!
//! Every generator draws from a seeded [`SmallRng`], so a failing seed
//! reproduces exactly. Names come from a small pool to force collisions
//! between equal-weight edges.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{FixtureEdge, MstFixture, WeightDistribution};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 48;
/// Kept small so dense graphs stay cheap to generate and check.
const DENSE_MAX_VERTICES: usize = 24;
const TINY_MAX_VERTICES: usize = 6;
const NAME_POOL: &[&str] = &["", "a", "ab", "b", "ba", "feeder", "z"];

/// Generates fixtures across every [`WeightDistribution`].
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for one distribution; used directly by the seeded
/// rstest cases.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let mut builder = FixtureBuilder::default();
    let vertex_count = match distribution {
        WeightDistribution::Unique => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let probability = rng.gen_range(0.15..=0.5);
            builder.random_pairs(1, vertex_count, probability, rng, |r| {
                r.gen_range(1..=1_000_000)
            });
            vertex_count
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<u32> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let probability = rng.gen_range(0.2..=0.7);
            builder.random_pairs(1, vertex_count, probability, rng, |r| {
                pool[r.gen_range(0..pool.len())]
            });
            vertex_count
        }
        WeightDistribution::Sparse => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            builder.spanning_path(vertex_count, rng);
            for _ in 0..rng.gen_range(0..=vertex_count) {
                let start = rng.gen_range(1..=vertex_count);
                let end = rng.gen_range(1..=vertex_count);
                let weight = rng.gen_range(1..=100);
                builder.push(start, end, weight, rng);
            }
            vertex_count
        }
        WeightDistribution::Dense => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
            let probability = rng.gen_range(0.7..=0.95);
            builder.random_pairs(1, vertex_count, probability, rng, |r| r.gen_range(1..=50));
            vertex_count
        }
        WeightDistribution::Disconnected => {
            let sizes: Vec<usize> = (0..rng.gen_range(2..=4))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            let mut first = 1;
            for &size in &sizes {
                builder.random_pairs(first, size, 0.6, rng, |r| r.gen_range(1..=20));
                first += size;
            }
            first - 1
        }
        WeightDistribution::Tiny => {
            let vertex_count = rng.gen_range(1..=TINY_MAX_VERTICES);
            let probability = rng.gen_range(0.4..=1.0);
            builder.random_pairs(1, vertex_count, probability, rng, |r| r.gen_range(1..=3));
            vertex_count
        }
    };

    MstFixture {
        vertex_count,
        edges: builder.edges,
        distribution,
    }
}

/// Accumulates edges while rejecting self-loops and repeated pairs, as the
/// loader would.
#[derive(Default)]
struct FixtureBuilder {
    edges: Vec<FixtureEdge>,
    pairs: HashSet<(usize, usize)>,
}

impl FixtureBuilder {
    fn push(&mut self, start: usize, end: usize, weight: u32, rng: &mut SmallRng) {
        if start == end || !self.pairs.insert((start.min(end), start.max(end))) {
            return;
        }
        let name = NAME_POOL[rng.gen_range(0..NAME_POOL.len())].to_owned();
        // Endpoint order is irrelevant to the engine; mix it up anyway.
        let (start, end) = if rng.gen_bool(0.5) {
            (start, end)
        } else {
            (end, start)
        };
        self.edges.push(FixtureEdge {
            start,
            end,
            weight,
            name,
        });
    }

    /// Adds each pair of `first..first + size` with the given probability.
    fn random_pairs(
        &mut self,
        first: usize,
        size: usize,
        probability: f64,
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> u32,
    ) {
        let last = first + size;
        for start in first..last {
            for end in (start + 1)..last {
                if rng.gen_bool(probability) {
                    let drawn = weight(rng);
                    self.push(start, end, drawn, rng);
                }
            }
        }
    }

    /// Connects every vertex along a random permutation.
    fn spanning_path(&mut self, vertex_count: usize, rng: &mut SmallRng) {
        let mut order: Vec<usize> = (1..=vertex_count).collect();
        for slot in (1..order.len()).rev() {
            order.swap(slot, rng.gen_range(0..=slot));
        }
        for window in order.windows(2) {
            if let [start, end] = *window {
                let weight = rng.gen_range(1..=100);
                self.push(start, end, weight, rng);
            }
        }
    }
}
