//! Powergrid core library.
//!
//! Loads a substation wiring graph from `start,end,weight,name` records and
//! computes the cheapest set of wire runs that connects every substation
//! using Prim's algorithm.
//!
//! # Determinism
//!
//! Ties are resolved without reference to hash or heap iteration order:
//!
//! - the frontier extracts the vertex with the cheapest connection, falling
//!   back to the lower vertex id;
//! - connection costs compare by weight, then edge name, then input order, so
//!   among several minimum trees the one with the lexicographically smallest
//!   sorted name sequence is returned;
//! - the finished tree is reported ordered by name, then weight.
//!
//! # Example
//! ```
//! use powergrid_core::solve;
//!
//! let input = "3\n1,2,4,north\n2,3,1,east\n1,3,7,west\n";
//! let tree = solve(input.as_bytes())?;
//! assert_eq!(tree.total_weight(), 5);
//! let names: Vec<&str> = tree.edges().iter().map(|edge| edge.name()).collect();
//! assert_eq!(names, ["east", "north"]);
//! # Ok::<(), powergrid_core::PowergridError>(())
//! ```

mod error;
mod graph;
mod loader;
mod mst;
mod solve;

pub use crate::{
    error::{
        GraphError, GraphErrorCode, LoadError, LoadErrorCode, MstError, MstErrorCode,
        PowergridError, PowergridErrorCode, Result,
    },
    graph::{DirectedArc, Edge, EdgeId, Graph, GraphBuilder},
    loader::{EdgeRecord, Endpoint, GraphLoader, MAX_VERTICES, parse_edge_record, parse_vertex_count},
    mst::{ROOT, SpanningTree, TreeEdge, prim},
    solve::{solve, solve_with},
};
