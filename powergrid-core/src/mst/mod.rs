//! Minimum spanning tree construction with Prim's algorithm.
//!
//! The tree is grown from substation [`ROOT`]. Every vertex moves through
//! `Unvisited -> Frontier -> Settled`; a vertex still unvisited when the
//! frontier runs dry means the graph is disconnected and no tree exists.
//!
//! Connection costs compare by weight, then edge name, then input order. This
//! makes every edge cost distinct, so the minimum tree is unique: it has the
//! least total weight and, among trees of that weight, the lexicographically
//! smallest sorted name sequence.

mod frontier;

use std::cmp::Ordering;

use tracing::{info, instrument};

use crate::error::MstError;
use crate::graph::{DirectedArc, Graph};

use self::frontier::Frontier;

/// Vertex the tree is grown from.
pub const ROOT: usize = 1;

/// Best known way of attaching a vertex to the growing tree.
///
/// Variant order is significant: the root sorts before any arc, and any arc
/// sorts before "not reached yet".
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub(crate) enum Cost<'g> {
    Root,
    Arc {
        weight: u32,
        name: &'g str,
        edge: usize,
    },
    Unreachable,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    Unvisited,
    Frontier,
    Settled,
}

/// Per-vertex engine state; lives only for one [`prim`] call.
#[derive(Clone, Copy, Debug)]
struct NodeState<'g> {
    phase: Phase,
    predecessor: Option<usize>,
    best_cost: Cost<'g>,
}

impl<'g> NodeState<'g> {
    const fn root() -> Self {
        Self {
            phase: Phase::Frontier,
            predecessor: None,
            best_cost: Cost::Root,
        }
    }

    const fn unvisited() -> Self {
        Self {
            phase: Phase::Unvisited,
            predecessor: None,
            best_cost: Cost::Unreachable,
        }
    }

    /// Records a cheaper attachment. Returns the replaced cost, or `None` when
    /// `candidate` is no improvement or the vertex is already settled.
    fn relax(&mut self, predecessor: usize, candidate: Cost<'g>) -> Option<Cost<'g>> {
        if self.phase == Phase::Settled || candidate >= self.best_cost {
            return None;
        }
        let previous = self.best_cost;
        self.phase = Phase::Frontier;
        self.predecessor = Some(predecessor);
        self.best_cost = candidate;
        Some(previous)
    }
}

/// A selected wire run, oriented from the tree parent (`source`) to the child
/// (`target`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeEdge {
    source: usize,
    target: usize,
    weight: u32,
    name: String,
}

impl TreeEdge {
    /// Returns the endpoint closer to the root.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the endpoint attached through this edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the wire length.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u32 { self.weight }

    /// Returns the edge name from the input.
    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &str { &self.name }

    /// Returns the endpoints as `(min, max)`.
    #[must_use]
    pub fn endpoints(&self) -> (usize, usize) {
        (
            self.source.min(self.target),
            self.source.max(self.target),
        )
    }
}

impl Ord for TreeEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.weight.cmp(&other.weight))
            .then_with(|| self.endpoints().cmp(&other.endpoints()))
    }
}

impl PartialOrd for TreeEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The output of [`prim`]: the selected edges in report order and their
/// total length.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    edges: Vec<TreeEdge>,
    total_weight: u64,
}

impl SpanningTree {
    /// Returns the tree edges ordered by name, then weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[TreeEdge] { &self.edges }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> u64 { self.total_weight }

    /// Returns the number of tree edges (`vertex_count - 1`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` for the single-substation tree.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the vertex the tree was grown from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn root(&self) -> usize { ROOT }

    /// Consumes the tree, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<TreeEdge> {
        self.edges
    }
}

/// Computes the minimum spanning tree of `graph` rooted at [`ROOT`].
///
/// # Errors
/// - [`MstError::EmptyGraph`] when the graph has no vertices.
/// - [`MstError::NoSpanningTree`] when some vertex cannot be reached from
///   the root. No partial tree is returned.
/// - [`MstError::InvariantViolation`] if the graph's internal structure is
///   inconsistent.
///
/// # Examples
/// ```
/// use powergrid_core::{GraphBuilder, prim};
///
/// let mut builder = GraphBuilder::new(3);
/// builder.add_edge(1, 2, 3, "ab", 2)?;
/// builder.add_edge(2, 3, 1, "bc", 3)?;
/// builder.add_edge(1, 3, 2, "ac", 4)?;
/// let tree = prim(&builder.build())?;
/// assert_eq!(tree.total_weight(), 3);
/// assert_eq!(tree.edges()[0].name(), "ac");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "mst.prim",
    err,
    skip(graph),
    fields(vertex_count = graph.vertex_count(), edge_count = graph.edge_count()),
)]
pub fn prim(graph: &Graph) -> Result<SpanningTree, MstError> {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Err(MstError::EmptyGraph);
    }

    let mut states: Vec<NodeState<'_>> = (1..=vertex_count)
        .map(|vertex| {
            if vertex == ROOT {
                NodeState::root()
            } else {
                NodeState::unvisited()
            }
        })
        .collect();
    let mut frontier = Frontier::default();
    for (slot, state) in states.iter().enumerate() {
        frontier.insert(slot + 1, state.best_cost);
    }

    while let Some((vertex, cost)) = frontier.pop_min() {
        if cost == Cost::Unreachable {
            // Everything still queued is unreachable too.
            let unreachable = frontier.len() + 1;
            info!(
                first_unreachable = vertex,
                unreachable, "graph is disconnected"
            );
            return Err(MstError::NoSpanningTree {
                first_unreachable: vertex,
                unreachable,
            });
        }
        state_mut(&mut states, vertex)?.phase = Phase::Settled;
        for arc in graph.arcs(vertex) {
            relax(graph, &mut states, &mut frontier, vertex, arc)?;
        }
    }

    let tree = assemble(graph, &states)?;
    info!(
        edges = tree.len(),
        total_weight = tree.total_weight(),
        "spanning tree computed"
    );
    Ok(tree)
}

fn relax<'g>(
    graph: &'g Graph,
    states: &mut [NodeState<'g>],
    frontier: &mut Frontier<'g>,
    from: usize,
    arc: &DirectedArc,
) -> Result<(), MstError> {
    let edge = graph
        .edge(arc.edge())
        .ok_or(MstError::InvariantViolation {
            invariant: "arc must reference an edge of its graph",
            vertex: from,
        })?;
    let candidate = Cost::Arc {
        weight: arc.weight(),
        name: edge.name(),
        edge: arc.edge().index(),
    };
    let target = arc.target();
    let Some(previous) = state_mut(states, target)?.relax(from, candidate) else {
        return Ok(());
    };
    if frontier.reprioritise(target, previous, candidate) {
        Ok(())
    } else {
        Err(MstError::InvariantViolation {
            invariant: "unsettled vertex must be queued under its best cost",
            vertex: target,
        })
    }
}

fn state_mut<'s, 'g>(
    states: &'s mut [NodeState<'g>],
    vertex: usize,
) -> Result<&'s mut NodeState<'g>, MstError> {
    vertex
        .checked_sub(1)
        .and_then(|slot| states.get_mut(slot))
        .ok_or(MstError::InvariantViolation {
            invariant: "vertex must be within 1..=vertex_count",
            vertex,
        })
}

/// Recovers each tree edge from its predecessor's adjacency, sums the
/// weights and sorts the result into report order.
fn assemble(graph: &Graph, states: &[NodeState<'_>]) -> Result<SpanningTree, MstError> {
    let mut edges = Vec::with_capacity(states.len().saturating_sub(1));
    let mut total_weight = 0_u64;

    for (slot, state) in states.iter().enumerate() {
        let vertex = slot + 1;
        if vertex == ROOT {
            continue;
        }
        let predecessor = state.predecessor.ok_or(MstError::InvariantViolation {
            invariant: "settled vertex must have a predecessor",
            vertex,
        })?;
        let arc = graph
            .arcs(predecessor)
            .iter()
            .find(|arc| arc.target() == vertex)
            .ok_or(MstError::InvariantViolation {
                invariant: "tree arc must exist in the predecessor's adjacency",
                vertex,
            })?;
        if !matches!(state.best_cost, Cost::Arc { edge, .. } if edge == arc.edge().index()) {
            return Err(MstError::InvariantViolation {
                invariant: "recovered arc must be the relaxed edge",
                vertex,
            });
        }
        let edge = graph.edge(arc.edge()).ok_or(MstError::InvariantViolation {
            invariant: "arc must reference an edge of its graph",
            vertex,
        })?;

        total_weight += u64::from(arc.weight());
        edges.push(TreeEdge {
            source: predecessor,
            target: vertex,
            weight: arc.weight(),
            name: edge.name().to_owned(),
        });
    }

    edges.sort_unstable();
    Ok(SpanningTree {
        edges,
        total_weight,
    })
}

#[cfg(test)]
mod property;
