//! Graph Loader: turns `start,end,weight,name` lines into a validated
//! [`Graph`].
//!
//! Line 1 holds the vertex count. Every later line is trimmed as a whole and
//! split on `,` into exactly four fields. Names are taken verbatim from the
//! fourth field, so they may be empty but can never contain a comma.

use std::fmt;
use std::io::BufRead;

use tracing::{Span, debug, field, info, instrument};

use crate::error::{GraphError, LoadError};
use crate::graph::{Graph, GraphBuilder};

/// Upper bound on the declared vertex count.
pub const MAX_VERTICES: usize = 1000;

/// Identifies which endpoint of an edge record failed validation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Endpoint {
    /// The first field of the record.
    Starting,
    /// The second field of the record.
    Ending,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Starting => "Starting",
            Self::Ending => "Ending",
        })
    }
}

/// A single edge line after field-level validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EdgeRecord {
    /// Starting vertex in `1..=vertex_count`.
    pub start: usize,
    /// Ending vertex in `1..=vertex_count`.
    pub end: usize,
    /// Positive wire length.
    pub weight: u32,
    /// Fourth field, verbatim.
    pub name: String,
}

/// Reads graphs from line-oriented text.
///
/// # Examples
/// ```
/// use powergrid_core::{GraphLoader, MAX_VERTICES};
///
/// let loader = GraphLoader::new();
/// assert_eq!(loader.max_vertices(), MAX_VERTICES);
/// let graph = loader.load_str("2\n1,2,10,feeder\n")?;
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.edges()[0].name(), "feeder");
/// # Ok::<(), powergrid_core::LoadError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphLoader {
    max_vertices: usize,
}

impl Default for GraphLoader {
    fn default() -> Self {
        Self {
            max_vertices: MAX_VERTICES,
        }
    }
}

impl GraphLoader {
    /// Creates a loader that accepts up to [`MAX_VERTICES`] vertices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the vertex ceiling. A ceiling of zero is rejected when
    /// loading.
    #[must_use]
    pub const fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Returns the configured vertex ceiling.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_vertices(&self) -> usize { self.max_vertices }

    /// Loads a graph from `reader`, stopping at the first invalid line.
    ///
    /// An empty input is reported as an invalid vertex count on line 1.
    ///
    /// # Errors
    /// Returns [`LoadError`] describing the first offending line, or
    /// [`LoadError::Read`] when the reader fails.
    #[instrument(
        name = "loader.load",
        err,
        skip(self, reader),
        fields(max_vertices = self.max_vertices, vertex_count = field::Empty, edge_count = field::Empty),
    )]
    pub fn load<R: BufRead>(&self, reader: R) -> Result<Graph, LoadError> {
        if self.max_vertices == 0 {
            return Err(LoadError::InvalidMaxVertices {
                got: self.max_vertices,
            });
        }

        let mut lines = reader.lines();
        let header = match lines.next() {
            Some(line) => line.map_err(|source| LoadError::Read { line: 1, source })?,
            None => String::new(),
        };
        let vertex_count = parse_vertex_count(&header, self.max_vertices)?;
        let span = Span::current();
        span.record("vertex_count", vertex_count);

        let mut builder = GraphBuilder::new(vertex_count);
        for (offset, next) in lines.enumerate() {
            let line = offset + 2;
            let raw = next.map_err(|source| LoadError::Read { line, source })?;
            let record = parse_edge_record(&raw, line, vertex_count)?;
            let EdgeRecord {
                start,
                end,
                weight,
                name,
            } = record;
            builder
                .add_edge(start, end, weight, name, line)
                .map_err(|error| reject(error, raw.trim(), line))?;
        }

        let graph = builder.build();
        span.record("edge_count", graph.edge_count());
        info!(
            vertex_count = graph.vertex_count(),
            edge_count = graph.edge_count(),
            "graph loaded"
        );
        Ok(graph)
    }

    /// Convenience wrapper around [`GraphLoader::load`] for in-memory text.
    ///
    /// # Errors
    /// See [`GraphLoader::load`].
    pub fn load_str(&self, input: &str) -> Result<Graph, LoadError> {
        self.load(input.as_bytes())
    }
}

/// Parses the header line into a vertex count in `1..=max_vertices`.
///
/// # Errors
/// Returns [`LoadError::InvalidVertexCount`] when the trimmed text is not an
/// integer in range.
///
/// # Examples
/// ```
/// use powergrid_core::parse_vertex_count;
///
/// assert_eq!(parse_vertex_count(" 6 ", 1000).ok(), Some(6));
/// assert!(parse_vertex_count("0", 1000).is_err());
/// ```
pub fn parse_vertex_count(text: &str, max_vertices: usize) -> Result<usize, LoadError> {
    let trimmed = text.trim();
    parse_integer(trimmed)
        .and_then(|value| usize::try_from(value).ok())
        .filter(|count| (1..=max_vertices).contains(count))
        .ok_or_else(|| LoadError::InvalidVertexCount {
            text: trimmed.to_owned(),
            max_vertices,
        })
}

/// Validates one edge line against a graph of `vertex_count` vertices.
///
/// Checks run in a fixed order: field count, both endpoints being integers,
/// both endpoints being in range, then the weight. Pair-level rules
/// (self-loops, duplicates) are enforced when the record is added to the
/// graph.
///
/// # Errors
/// Returns [`LoadError::InvalidEdgeRecord`],
/// [`LoadError::InvalidVertexReference`] or [`LoadError::InvalidWeight`].
pub fn parse_edge_record(
    raw: &str,
    line: usize,
    vertex_count: usize,
) -> Result<EdgeRecord, LoadError> {
    let record = raw.trim();
    let fields: Vec<&str> = record.split(',').collect();
    let [start_text, end_text, weight_text, name] = fields.as_slice() else {
        debug!(line, fields = fields.len(), "rejecting malformed edge record");
        return Err(LoadError::InvalidEdgeRecord {
            record: record.to_owned(),
            line,
            fields: fields.len(),
        });
    };

    let invalid_vertex = |endpoint: Endpoint, text: &str| LoadError::InvalidVertexReference {
        endpoint,
        text: text.to_owned(),
        line,
        vertex_count,
    };

    let start_value =
        parse_integer(start_text).ok_or_else(|| invalid_vertex(Endpoint::Starting, start_text))?;
    let end_value =
        parse_integer(end_text).ok_or_else(|| invalid_vertex(Endpoint::Ending, end_text))?;
    let start = vertex_in_range(start_value, vertex_count)
        .ok_or_else(|| invalid_vertex(Endpoint::Starting, start_text))?;
    let end = vertex_in_range(end_value, vertex_count)
        .ok_or_else(|| invalid_vertex(Endpoint::Ending, end_text))?;

    let weight = parse_integer(weight_text)
        .and_then(|value| u32::try_from(value).ok())
        .filter(|weight| *weight > 0)
        .ok_or_else(|| LoadError::InvalidWeight {
            text: (*weight_text).to_owned(),
            line,
        })?;

    Ok(EdgeRecord {
        start,
        end,
        weight,
        name: (*name).to_owned(),
    })
}

/// Accepts an optional sign followed by ASCII digits, nothing else.
fn parse_integer(text: &str) -> Option<i64> {
    text.parse().ok()
}

fn vertex_in_range(value: i64, vertex_count: usize) -> Option<usize> {
    usize::try_from(value)
        .ok()
        .filter(|vertex| (1..=vertex_count).contains(vertex))
}

fn reject(error: GraphError, record: &str, line: usize) -> LoadError {
    debug!(line, code = error.code().as_str(), "rejecting edge");
    match error {
        GraphError::SelfLoop { vertex } => LoadError::SelfLoop {
            record: record.to_owned(),
            line,
            vertex,
        },
        GraphError::DuplicateEdge { first_line, .. } => LoadError::DuplicateEdge {
            record: record.to_owned(),
            line,
            first_line,
        },
        // Endpoints and weights were validated by `parse_edge_record`; these
        // arms only fire if the two validators drift apart.
        GraphError::VertexOutOfRange { vertex, vertex_count } => {
            LoadError::InvalidVertexReference {
                endpoint: Endpoint::Starting,
                text: vertex.to_string(),
                line,
                vertex_count,
            }
        }
        GraphError::ZeroWeight { .. } => LoadError::InvalidWeight {
            text: "0".to_owned(),
            line,
        },
    }
}
