//! One-call pipeline from input text to spanning tree.

use std::io::BufRead;

use tracing::instrument;

use crate::error::Result;
use crate::loader::GraphLoader;
use crate::mst::{SpanningTree, prim};

/// Loads a graph from `reader` with the default [`GraphLoader`] and returns
/// its minimum spanning tree.
///
/// # Errors
/// Returns [`crate::PowergridError::Load`] for invalid input and
/// [`crate::PowergridError::Mst`] when no spanning tree exists.
pub fn solve<R: BufRead>(reader: R) -> Result<SpanningTree> {
    solve_with(&GraphLoader::default(), reader)
}

/// Like [`solve`], with an explicitly configured loader.
///
/// # Errors
/// See [`solve`].
///
/// # Examples
/// ```
/// use powergrid_core::{GraphLoader, PowergridErrorCode, solve_with};
///
/// let loader = GraphLoader::new().with_max_vertices(2);
/// let err = solve_with(&loader, "3\n".as_bytes()).unwrap_err();
/// assert_eq!(err.code(), PowergridErrorCode::LoadFailure);
/// ```
#[instrument(name = "powergrid.solve", err, skip(loader, reader))]
pub fn solve_with<R: BufRead>(loader: &GraphLoader, reader: R) -> Result<SpanningTree> {
    let graph = loader.load(reader)?;
    Ok(prim(&graph)?)
}
