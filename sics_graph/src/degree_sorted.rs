//! The degree-sorted list-plus-matrix backend.
//!
//! Built only by copying an existing graph: vertices are renumbered by
//! non-increasing degree (ties by original index, ascending) and every edge
//! and label is rewritten under the new numbering. The pruning-friendly
//! property this buys: vertex 0 is always a maximum-degree vertex, and
//! degrees never increase along the index range.

use sics_common::SicsError;

use crate::adjacency_listmat::AdjacencyListMat;
use crate::store::{GraphStore, Topology};

/// A matrix-backed store whose vertex numbering is sorted by descending
/// degree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeSortedListMat {
    inner: AdjacencyListMat,
    /// `renumbering[original] == sorted` for the source graph's indices.
    renumbering: Vec<usize>,
}

impl DegreeSortedListMat {
    /// Copy `source` into a new store under the degree-sorted numbering.
    ///
    /// Fails on an empty source: the sentinel graph has nothing to sort.
    pub fn from_graph<G: GraphStore + ?Sized>(
        topology: Topology,
        source: &G,
    ) -> Result<Self, SicsError> {
        let n = source.vertex_count();
        if n == 0 {
            return Err(SicsError::empty_graph("degree-sort"));
        }

        let mut by_degree: Vec<usize> = (0..n).collect();
        by_degree.sort_by(|&a, &b| {
            source
                .degree(b)
                .cmp(&source.degree(a))
                .then(a.cmp(&b))
        });

        let mut renumbering = vec![0; n];
        for (sorted, &original) in by_degree.iter().enumerate() {
            renumbering[original] = sorted;
        }

        let mut inner = AdjacencyListMat::with_vertices(topology, n);
        for original in 0..n {
            if let Some(label) = source.label(original) {
                inner.set_label(renumbering[original], label)?;
            }
            for &w in source.neighbors(original) {
                let neighbor = w as usize;
                if original < neighbor {
                    inner.add_edge(renumbering[original], renumbering[neighbor])?;
                }
            }
        }

        Ok(Self { inner, renumbering })
    }

    /// The new index of `original` under the degree-sorted numbering.
    #[must_use]
    pub fn renumbered(&self, original: usize) -> usize {
        self.renumbering[original]
    }

    /// Assign `label` to vertex `v` (in the sorted numbering).
    pub fn set_label(&mut self, v: usize, label: &str) -> Result<(), SicsError> {
        self.inner.set_label(v, label)
    }

    /// Insert the undirected edge `{u, v}` (in the sorted numbering).
    ///
    /// Later insertions do not re-sort; the numbering is fixed at
    /// construction.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), SicsError> {
        self.inner.add_edge(u, v)
    }
}

impl GraphStore for DegreeSortedListMat {
    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    fn topology(&self) -> Topology {
        self.inner.topology()
    }

    fn degree(&self, v: usize) -> usize {
        self.inner.degree(v)
    }

    fn neighbors(&self, v: usize) -> &[u32] {
        self.inner.neighbors(v)
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.inner.has_edge(u, v)
    }

    fn label(&self, v: usize) -> Option<&str> {
        self.inner.label(v)
    }
}
