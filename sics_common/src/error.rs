//! Error types shared across the workspace.
//!
//! Design principle: every usage error is raised synchronously, before any
//! search work starts and before any shared state is touched. A pattern with
//! no embedding is *not* an error; it is a count of zero.

use thiserror::Error;

/// Errors surfaced by graph construction, file ingestion, and the search
/// invocation surface.
#[derive(Debug, Error)]
pub enum SicsError {
    // === Usage errors (graph construction / mutation) ===
    /// A mutating or search operation was applied to a zero-vertex graph.
    #[error("cannot {operation} on an empty graph")]
    EmptyGraph {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// A vertex index fell outside `0..vertex_count`.
    #[error("vertex {vertex} out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending index.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },

    /// Self-loops are not modeled.
    #[error("self-loop on vertex {0} is not supported")]
    SelfLoop(usize),

    /// Degree-sorted stores are built by copying another graph.
    #[error("the degree-sorted backend is constructed from an existing graph, not a vertex count")]
    DegreeSortedFromCount,

    // === Usage errors (search invocation) ===
    /// The variant name is not in the registry.
    #[error("unknown algorithm variant '{0}'")]
    UnknownVariant(String),

    /// The two graphs (or the solver) disagree on backend or graph type.
    #[error("graph backend/type mismatch: {detail}")]
    BackendMismatch {
        /// Which pairing failed.
        detail: String,
    },

    /// A vertex order was supplied to a dynamic-MRV variant.
    #[error(
        "variant '{variant}' selects vertices dynamically (MRV); \
         an explicit vertex order is not supported"
    )]
    OrderNotSupported {
        /// The offending variant name.
        variant: String,
    },

    /// A static-order variant was invoked without a vertex order.
    #[error("variant '{variant}' requires a vertex order (permutation or heuristic token)")]
    OrderRequired {
        /// The offending variant name.
        variant: String,
    },

    /// An explicit order is not a permutation of the pattern vertices.
    #[error("vertex order must be a permutation of 0..{expected}")]
    InvalidOrder {
        /// Expected permutation length.
        expected: usize,
    },

    /// A heuristic token other than the recognized ones.
    #[error("unknown vertex order heuristic '{0}' (expected DEG or GCF)")]
    UnknownHeuristic(String),

    // === File ingestion ===
    /// A benchmark file did not match its declared format.
    #[error("{format} parse error in {path}: {message}")]
    Parse {
        /// Format family name.
        format: &'static str,
        /// Path of the offending file.
        path: String,
        /// What went wrong.
        message: String,
    },

    /// Underlying I/O failure (file access or mapping emission).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SicsError {
    /// Create an empty-graph usage error for `operation`.
    pub fn empty_graph(operation: &'static str) -> Self {
        Self::EmptyGraph { operation }
    }

    /// Create a backend/type pairing error.
    pub fn backend_mismatch(detail: impl Into<String>) -> Self {
        Self::BackendMismatch {
            detail: detail.into(),
        }
    }

    /// Create a parse error for `format` at `path`.
    pub fn parse(format: &'static str, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            format,
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_operation() {
        let err = SicsError::empty_graph("add an edge");
        assert_eq!(err.to_string(), "cannot add an edge on an empty graph");
    }

    #[test]
    fn parse_error_carries_context() {
        let err = SicsError::parse("amalfi", "g.A00", "truncated word");
        let text = err.to_string();
        assert!(text.contains("amalfi"));
        assert!(text.contains("g.A00"));
        assert!(text.contains("truncated word"));
    }
}
