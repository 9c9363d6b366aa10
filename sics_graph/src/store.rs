//! The read-side capability contract consumed by the search engine.

use serde::{Deserialize, Serialize};

/// Edge bookkeeping discipline of a store.
///
/// Bidirectional stores keep independent forward and backward adjacency
/// tables, but both are written on every insertion and answer queries
/// symmetrically; no directed semantics are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topology {
    /// One symmetric neighbor table.
    Undirected,
    /// Mirrored forward/backward neighbor tables.
    Bidirectional,
}

impl Topology {
    /// The benchmark-suite token for this graph type.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Undirected => "undirected",
            Self::Bidirectional => "bidirectional",
        }
    }
}

/// Read-only queries every backend answers for the search engine.
///
/// `has_edge` is O(1) for the matrix-backed backends and O(degree) for the
/// plain list backend; everything else is O(1).
pub trait GraphStore {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// This store's edge bookkeeping discipline.
    fn topology(&self) -> Topology;

    /// Degree of `v`.
    fn degree(&self, v: usize) -> usize;

    /// Neighbors of `v`, in insertion order.
    fn neighbors(&self, v: usize) -> &[u32];

    /// Whether `u` and `v` are adjacent.
    fn has_edge(&self, u: usize, v: usize) -> bool;

    /// Label of `v`, if one was assigned.
    fn label(&self, v: usize) -> Option<&str>;
}
