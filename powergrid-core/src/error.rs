//! Error types for the powergrid core library.
//!
//! Every error enum carries a stable, machine-readable code so callers can
//! log and branch on failures without matching on message text.

use std::{fmt, io};

use thiserror::Error;

use crate::loader::Endpoint;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An edge rejected while assembling a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An endpoint was outside `1..=vertex_count`.
    #[error("vertex {vertex} is not among valid values 1-{vertex_count}")]
    VertexOutOfRange {
        /// Offending vertex id.
        vertex: usize,
        /// Number of vertices declared for the graph.
        vertex_count: usize,
    },
    /// Both endpoints named the same vertex.
    #[error("edge connects vertex {vertex} to itself")]
    SelfLoop {
        /// Vertex used for both endpoints.
        vertex: usize,
    },
    /// Wire runs must have a positive length.
    #[error("edge ({start}, {end}) has zero weight")]
    ZeroWeight {
        /// Starting vertex as provided.
        start: usize,
        /// Ending vertex as provided.
        end: usize,
    },
    /// The unordered pair was already connected by an earlier edge.
    #[error("edge ({start}, {end}) duplicates the edge from line {first_line}")]
    DuplicateEdge {
        /// Starting vertex as provided.
        start: usize,
        /// Ending vertex as provided.
        end: usize,
        /// Source line of the edge that first claimed the pair.
        first_line: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An endpoint was outside `1..=vertex_count`.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// Both endpoints named the same vertex.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// Wire runs must have a positive length.
        ZeroWeight => ZeroWeight { .. } => "GRAPH_ZERO_WEIGHT",
        /// The unordered pair was already connected.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
    }
}

/// Failure raised while turning raw input lines into a [`crate::Graph`].
///
/// Loading is fail-fast: the first offending line aborts the whole load.
/// Messages mirror the wording users of the command-line tool see, so each
/// variant carries the raw text and the 1-based line number it came from.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LoadError {
    /// The loader was configured with a vertex ceiling of zero.
    #[error("max_vertices must be at least 1 (got {got})")]
    InvalidMaxVertices {
        /// The rejected ceiling.
        got: usize,
    },
    /// Line 1 was not an integer in `1..=max_vertices`.
    #[error("Invalid number of vertices '{text}' on line 1.")]
    InvalidVertexCount {
        /// Raw header text after trimming.
        text: String,
        /// Configured vertex ceiling.
        max_vertices: usize,
    },
    /// An edge line did not contain exactly four comma-separated fields.
    #[error("Invalid edge data '{record}' on line {line}.")]
    InvalidEdgeRecord {
        /// Trimmed line contents.
        record: String,
        /// 1-based line number.
        line: usize,
        /// Number of fields found after splitting.
        fields: usize,
    },
    /// An endpoint was not an integer in `1..=vertex_count`.
    #[error(
        "{endpoint} vertex '{text}' on line {line} is not among valid values 1-{vertex_count}."
    )]
    InvalidVertexReference {
        /// Which endpoint of the record was rejected.
        endpoint: Endpoint,
        /// Raw field text.
        text: String,
        /// 1-based line number.
        line: usize,
        /// Declared vertex count.
        vertex_count: usize,
    },
    /// The weight field was not a positive integer.
    #[error("Invalid edge weight '{text}' on line {line}.")]
    InvalidWeight {
        /// Raw field text.
        text: String,
        /// 1-based line number.
        line: usize,
    },
    /// Both endpoints of the record named the same substation.
    #[error("Edge '{record}' on line {line} connects vertex {vertex} to itself.")]
    SelfLoop {
        /// Trimmed line contents.
        record: String,
        /// 1-based line number.
        line: usize,
        /// Repeated vertex id.
        vertex: usize,
    },
    /// The unordered pair already appeared on an earlier line.
    #[error("Duplicate edge '{record}' found on line {line}.")]
    DuplicateEdge {
        /// Trimmed line contents.
        record: String,
        /// 1-based line number of the duplicate.
        line: usize,
        /// 1-based line number of the first definition.
        first_line: usize,
    },
    /// The underlying reader failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// 1-based line number being read.
        line: usize,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Returns the 1-based input line the error refers to, if any.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidMaxVertices { .. } => None,
            Self::InvalidVertexCount { .. } => Some(1),
            Self::InvalidEdgeRecord { line, .. }
            | Self::InvalidVertexReference { line, .. }
            | Self::InvalidWeight { line, .. }
            | Self::SelfLoop { line, .. }
            | Self::DuplicateEdge { line, .. }
            | Self::Read { line, .. } => Some(*line),
        }
    }
}

define_error_codes! {
    /// Stable codes describing [`LoadError`] variants.
    enum LoadErrorCode for LoadError {
        /// The loader was configured with a vertex ceiling of zero.
        InvalidMaxVertices => InvalidMaxVertices { .. } => "LOAD_INVALID_MAX_VERTICES",
        /// Line 1 was not a valid vertex count.
        InvalidVertexCount => InvalidVertexCount { .. } => "LOAD_INVALID_VERTEX_COUNT",
        /// An edge line did not have four fields.
        InvalidEdgeRecord => InvalidEdgeRecord { .. } => "LOAD_INVALID_EDGE_RECORD",
        /// An endpoint was not a valid vertex.
        InvalidVertexReference => InvalidVertexReference { .. } => "LOAD_INVALID_VERTEX_REFERENCE",
        /// The weight was not a positive integer.
        InvalidWeight => InvalidWeight { .. } => "LOAD_INVALID_WEIGHT",
        /// Both endpoints named the same vertex.
        SelfLoop => SelfLoop { .. } => "LOAD_SELF_LOOP",
        /// The unordered pair already appeared earlier.
        DuplicateEdge => DuplicateEdge { .. } => "LOAD_DUPLICATE_EDGE",
        /// The underlying reader failed.
        Read => Read { .. } => "LOAD_READ",
    }
}

/// Errors returned while computing a minimum spanning tree.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The graph has no vertices, so there is no root to grow from.
    #[error("cannot build a spanning tree for a graph without substations")]
    EmptyGraph,
    /// Some substations cannot be reached from the root.
    #[error(
        "No solution. {unreachable} substation(s) cannot be reached from substation 1, \
         starting with substation {first_unreachable}."
    )]
    NoSpanningTree {
        /// Lowest vertex id left outside the tree.
        first_unreachable: usize,
        /// Number of vertices left outside the tree.
        unreachable: usize,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("MST invariant violated: {invariant} (vertex {vertex})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// Vertex being processed when the violation was detected.
        vertex: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The graph has no vertices.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// Some substations cannot be reached from the root.
        NoSpanningTree => NoSpanningTree { .. } => "MST_NO_SPANNING_TREE",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "MST_INVARIANT_VIOLATION",
    }
}

/// Error type produced by [`crate::solve`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PowergridError {
    /// The input could not be turned into a graph.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The graph has no spanning tree, or the engine hit an internal fault.
    #[error(transparent)]
    Mst(#[from] MstError),
}

define_error_codes! {
    /// Stable codes describing [`PowergridError`] variants.
    enum PowergridErrorCode for PowergridError {
        /// The input could not be turned into a graph.
        LoadFailure => Load(..) => "POWERGRID_LOAD_FAILURE",
        /// The spanning tree computation failed.
        MstFailure => Mst(..) => "POWERGRID_MST_FAILURE",
    }
}

impl PowergridError {
    /// Retrieve the inner [`LoadErrorCode`] when loading failed.
    #[must_use]
    pub const fn load_code(&self) -> Option<LoadErrorCode> {
        match self {
            Self::Load(error) => Some(error.code()),
            Self::Mst(_) => None,
        }
    }

    /// Retrieve the inner [`MstErrorCode`] when the engine failed.
    #[must_use]
    pub const fn mst_code(&self) -> Option<MstErrorCode> {
        match self {
            Self::Mst(error) => Some(error.code()),
            Self::Load(_) => None,
        }
    }

    /// Returns the most specific code available, for logging.
    #[must_use]
    pub const fn detail_code(&self) -> &'static str {
        match self {
            Self::Load(error) => error.code().as_str(),
            Self::Mst(error) => error.code().as_str(),
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, PowergridError>;
