//! Adjacency model for the substation wiring graph.
//!
//! Vertices are substations labelled `1..=vertex_count`. Every undirected edge
//! is stored once in an edge table and referenced by two [`DirectedArc`]s, one
//! per endpoint, so lookups from either side see the same weight and name.

use std::collections::HashMap;

use crate::error::GraphError;

/// Index of an [`Edge`] within the [`Graph`] that owns it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Returns the position of the edge in input order (0-based).
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(self) -> usize { self.0 }
}

/// A candidate wire run between two distinct substations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Edge {
    start: usize,
    end: usize,
    weight: u32,
    name: String,
    line: usize,
}

impl Edge {
    /// Returns the starting vertex as written in the input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start(&self) -> usize { self.start }

    /// Returns the ending vertex as written in the input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn end(&self) -> usize { self.end }

    /// Returns the wire length.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u32 { self.weight }

    /// Returns the human-readable identifier.
    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &str { &self.name }

    /// Returns the 1-based source line the edge was read from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn line(&self) -> usize { self.line }
}

/// One direction of an undirected [`Edge`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DirectedArc {
    target: usize,
    weight: u32,
    edge: EdgeId,
}

impl DirectedArc {
    /// Returns the vertex the arc leads to.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the weight shared with the reverse arc.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u32 { self.weight }

    /// Returns the edge this arc belongs to.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> EdgeId { self.edge }
}

/// Validated, read-only substation graph.
///
/// Arcs leaving a vertex are kept in input order. The graph may be
/// disconnected; connectivity is the engine's concern.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    adjacency: Vec<Vec<DirectedArc>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Returns the number of substations.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns every edge in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the arcs leaving `vertex`, or an empty slice for ids outside
    /// `1..=vertex_count`.
    #[must_use]
    pub fn arcs(&self, vertex: usize) -> &[DirectedArc] {
        vertex
            .checked_sub(1)
            .and_then(|slot| self.adjacency.get(slot))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the edge referenced by `id`.
    ///
    /// Ids are only minted by the graph's own builder, so every id handed out
    /// by [`DirectedArc::edge`] resolves.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// Returns `true` when an edge joins `left` and `right` in either
    /// direction.
    #[must_use]
    pub fn contains_edge(&self, left: usize, right: usize) -> bool {
        self.arcs(left).iter().any(|arc| arc.target == right)
    }
}

/// Incrementally assembles a [`Graph`], enforcing the structural rules every
/// graph must satisfy.
///
/// # Examples
/// ```
/// use powergrid_core::GraphBuilder;
///
/// let mut builder = GraphBuilder::new(3);
/// builder.add_edge(1, 2, 4, "north", 2)?;
/// builder.add_edge(3, 2, 1, "east", 3)?;
/// let graph = builder.build();
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.contains_edge(2, 3));
/// # Ok::<(), powergrid_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    vertex_count: usize,
    adjacency: Vec<Vec<DirectedArc>>,
    edges: Vec<Edge>,
    pairs: HashMap<(usize, usize), usize>,
}

impl GraphBuilder {
    /// Creates a builder for a graph on vertices `1..=vertex_count`.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            adjacency: vec![Vec::new(); vertex_count],
            edges: Vec::new(),
            pairs: HashMap::new(),
        }
    }

    /// Returns the number of edges accepted so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds an undirected edge and both of its arcs.
    ///
    /// `line` records where the edge came from so later duplicates can point
    /// back at it.
    ///
    /// # Errors
    /// Returns [`GraphError`] when an endpoint is outside
    /// `1..=vertex_count`, the endpoints coincide, the weight is zero, or the
    /// unordered pair is already present.
    pub fn add_edge(
        &mut self,
        start: usize,
        end: usize,
        weight: u32,
        name: impl Into<String>,
        line: usize,
    ) -> Result<EdgeId, GraphError> {
        for vertex in [start, end] {
            if !(1..=self.vertex_count).contains(&vertex) {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        if start == end {
            return Err(GraphError::SelfLoop { vertex: start });
        }
        if weight == 0 {
            return Err(GraphError::ZeroWeight { start, end });
        }

        let pair = canonical(start, end);
        if let Some(&first) = self.pairs.get(&pair) {
            let first_line = self.edges.get(first).map_or(0, Edge::line);
            return Err(GraphError::DuplicateEdge {
                start,
                end,
                first_line,
            });
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            start,
            end,
            weight,
            name: name.into(),
            line,
        });
        self.pairs.insert(pair, id.0);
        self.push_arc(start, end, weight, id);
        self.push_arc(end, start, weight, id);
        Ok(id)
    }

    fn push_arc(&mut self, from: usize, target: usize, weight: u32, edge: EdgeId) {
        // Endpoints were range-checked by `add_edge`.
        if let Some(arcs) = self.adjacency.get_mut(from - 1) {
            arcs.push(DirectedArc {
                target,
                weight,
                edge,
            });
        }
    }

    /// Finalises the graph.
    #[must_use]
    pub fn build(self) -> Graph {
        Graph {
            vertex_count: self.vertex_count,
            adjacency: self.adjacency,
            edges: self.edges,
        }
    }
}

const fn canonical(left: usize, right: usize) -> (usize, usize) {
    if left <= right {
        (left, right)
    } else {
        (right, left)
    }
}
