//! Structural invariants of a returned tree.
//!
//! - exactly `vertex_count - 1` edges, no cycles, every vertex spanned;
//! - every non-root vertex is the target of exactly one edge;
//! - each tree edge is an input edge with the same weight and name;
//! - the reported total equals the sum of the edge weights;
//! - edges appear in `(name, weight)` order.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Graph, MstError, ROOT, SpanningTree, TreeEdge, prim};

use super::helpers::{build_graph, find_root};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = build_graph(fixture);
    let tree = match prim(&graph) {
        Ok(tree) => tree,
        // Disconnected inputs are covered by the equivalence property.
        Err(MstError::NoSpanningTree { .. }) => return Ok(()),
        Err(err) => {
            return Err(TestCaseError::fail(format!(
                "prim failed: {err} ({})",
                fixture.context()
            )));
        }
    };

    let fail = |reason: String| TestCaseError::fail(format!("{reason} ({})", fixture.context()));

    validate_edge_count(&graph, &tree).map_err(fail)?;
    validate_spanning(&graph, tree.edges()).map_err(fail)?;
    validate_targets(&graph, tree.edges()).map_err(fail)?;
    validate_against_input(&graph, tree.edges()).map_err(fail)?;
    validate_total(&tree).map_err(fail)?;
    validate_report_order(tree.edges()).map_err(fail)?;
    Ok(())
}

fn validate_edge_count(graph: &Graph, tree: &SpanningTree) -> Result<(), String> {
    let expected = graph.vertex_count() - 1;
    if tree.len() == expected {
        Ok(())
    } else {
        Err(format!("tree has {} edges, expected {expected}", tree.len()))
    }
}

/// Union-find over the tree edges: no cycle, one component at the end.
fn validate_spanning(graph: &Graph, edges: &[TreeEdge]) -> Result<(), String> {
    let mut parent: Vec<usize> = (1..=graph.vertex_count()).collect();
    for edge in edges {
        let source_root = find_root(&mut parent, edge.source());
        let target_root = find_root(&mut parent, edge.target());
        if source_root == target_root {
            return Err(format!(
                "edge ({}, {}) closes a cycle",
                edge.source(),
                edge.target()
            ));
        }
        parent[target_root - 1] = source_root;
    }
    let root = find_root(&mut parent, ROOT);
    match (1..=graph.vertex_count()).find(|&vertex| find_root(&mut parent, vertex) != root) {
        Some(vertex) => Err(format!("vertex {vertex} is not spanned")),
        None => Ok(()),
    }
}

fn validate_targets(graph: &Graph, edges: &[TreeEdge]) -> Result<(), String> {
    let mut seen = vec![0_usize; graph.vertex_count() + 1];
    for edge in edges {
        seen[edge.target()] += 1;
    }
    if seen[ROOT] != 0 {
        return Err("root appears as a target".to_owned());
    }
    match (1..=graph.vertex_count()).find(|&vertex| vertex != ROOT && seen[vertex] != 1) {
        Some(vertex) => Err(format!("vertex {vertex} is a target {} times", seen[vertex])),
        None => Ok(()),
    }
}

fn validate_against_input(graph: &Graph, edges: &[TreeEdge]) -> Result<(), String> {
    for edge in edges {
        let matched = graph.arcs(edge.source()).iter().any(|arc| {
            arc.target() == edge.target()
                && arc.weight() == edge.weight()
                && graph
                    .edge(arc.edge())
                    .is_some_and(|input| input.name() == edge.name())
        });
        if !matched {
            return Err(format!("tree edge {edge:?} is not an input edge"));
        }
    }
    Ok(())
}

fn validate_total(tree: &SpanningTree) -> Result<(), String> {
    let sum: u64 = tree
        .edges()
        .iter()
        .map(|edge| u64::from(edge.weight()))
        .sum();
    if sum == tree.total_weight() {
        Ok(())
    } else {
        Err(format!(
            "total weight {} differs from edge sum {sum}",
            tree.total_weight()
        ))
    }
}

fn validate_report_order(edges: &[TreeEdge]) -> Result<(), String> {
    match edges.windows(2).position(|pair| {
        (pair[0].name(), pair[0].weight()) > (pair[1].name(), pair[1].weight())
    }) {
        Some(index) => Err(format!("edges {index} and {} are out of order", index + 1)),
        None => Ok(()),
    }
}
