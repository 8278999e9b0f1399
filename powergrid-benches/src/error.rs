//! Benchmark setup error type.
//!
//! Aggregates the failures that can arise while preparing benchmark inputs so
//! setup functions can propagate them with `?` instead of `.expect()`.

use powergrid_core::{GraphError, LoadError, MstError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A generated edge was rejected by the graph builder.
    #[error("synthetic graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// Rendered input failed to load.
    #[error("graph loading failed: {0}")]
    Load(#[from] LoadError),
    /// The spanning tree could not be computed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
