//! Equivalence with the reference answers.
//!
//! Connected inputs must yield exactly the oracle's edges in report order;
//! disconnected inputs must fail naming the oracle's first unreachable
//! vertex and unreachable count. Tiny inputs are also checked against
//! exhaustive search.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{GraphLoader, MstError, PowergridError, prim, solve_with};

use super::helpers::{build_graph, render_input, report_edges};
use super::oracle::{exhaustive_minimum, sequential_kruskal};
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let oracle = sequential_kruskal(fixture);
    let result = prim(&build_graph(fixture));

    match (oracle.unreachable.first(), result) {
        (None, Ok(tree)) => {
            let actual = report_edges(&tree);
            if actual != oracle.edges {
                return Err(TestCaseError::fail(format!(
                    "tree differs from oracle: prim={actual:?}, oracle={:?} ({})",
                    oracle.edges,
                    fixture.context(),
                )));
            }
            if tree.total_weight() != oracle.total_weight {
                return Err(TestCaseError::fail(format!(
                    "total weight mismatch: prim={}, oracle={} ({})",
                    tree.total_weight(),
                    oracle.total_weight,
                    fixture.context(),
                )));
            }
            Ok(())
        }
        (
            Some(&expected_first),
            Err(MstError::NoSpanningTree {
                first_unreachable,
                unreachable,
            }),
        ) => {
            if first_unreachable != expected_first || unreachable != oracle.unreachable.len() {
                return Err(TestCaseError::fail(format!(
                    "wrong unreachable report: got ({first_unreachable}, {unreachable}), \
                     expected ({expected_first}, {}) ({})",
                    oracle.unreachable.len(),
                    fixture.context(),
                )));
            }
            Ok(())
        }
        (expected, actual) => Err(TestCaseError::fail(format!(
            "outcome mismatch: prim={actual:?}, oracle first unreachable={expected:?} ({})",
            fixture.context(),
        ))),
    }
}

/// Runs the exhaustive-search property; fixtures too large to enumerate pass
/// trivially.
pub(super) fn run_exhaustive_property(fixture: &MstFixture) -> TestCaseResult {
    let Some((best_weight, best_names)) = exhaustive_minimum(fixture) else {
        return Ok(());
    };
    let tree = prim(&build_graph(fixture)).map_err(|err| {
        TestCaseError::fail(format!(
            "prim failed where a tree exists: {err} ({})",
            fixture.context()
        ))
    })?;

    let mut names: Vec<String> = tree
        .edges()
        .iter()
        .map(|edge| edge.name().to_owned())
        .collect();
    names.sort();
    if tree.total_weight() != best_weight || names != best_names {
        return Err(TestCaseError::fail(format!(
            "not the preferred minimum: prim=({}, {names:?}), best=({best_weight}, {best_names:?}) ({})",
            tree.total_weight(),
            fixture.context(),
        )));
    }
    Ok(())
}

/// Loading the rendered text and solving must match building the graph
/// directly.
pub(super) fn run_text_pipeline_property(fixture: &MstFixture) -> TestCaseResult {
    let direct = prim(&build_graph(fixture)).map_err(PowergridError::from);
    let loader = GraphLoader::new().with_max_vertices(fixture.vertex_count.max(1));
    let through_text = solve_with(&loader, render_input(fixture).as_bytes());

    let consistent = match (&direct, &through_text) {
        (Ok(left), Ok(right)) => left == right,
        (Err(PowergridError::Mst(left)), Err(PowergridError::Mst(right))) => left == right,
        _ => false,
    };
    if consistent {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "text pipeline diverged: direct={direct:?}, text={through_text:?} ({})",
            fixture.context(),
        )))
    }
}
