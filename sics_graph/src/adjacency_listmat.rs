//! The list-plus-matrix backend.
//!
//! Keeps the neighbor lists of the plain backend and a dense boolean
//! adjacency matrix in lock-step, so `has_edge` is a single bit probe.
//! Invariant after every insertion:
//! `matrix[u][v] == matrix[v][u] == (v ∈ neighbors(u))`.

use sics_common::{Bitset, SicsError};

use crate::core::AdjacencyCore;
use crate::store::{GraphStore, Topology};

/// Neighbor lists plus a dense adjacency matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyListMat {
    core: AdjacencyCore,
    rows: Vec<Bitset>,
}

impl AdjacencyListMat {
    /// A store with `vertex_count` isolated vertices and no labels.
    #[must_use]
    pub fn with_vertices(topology: Topology, vertex_count: usize) -> Self {
        Self {
            core: AdjacencyCore::new(topology, vertex_count),
            rows: vec![Bitset::empty(vertex_count); vertex_count],
        }
    }

    /// Assign `label` to vertex `v`.
    pub fn set_label(&mut self, v: usize, label: &str) -> Result<(), SicsError> {
        self.core.set_label(v, label)
    }

    /// Insert the undirected edge `{u, v}`, updating lists and matrix
    /// together; duplicates are a no-op.
    #[contracts::debug_ensures(
        ret.is_err() || self.rows[u].contains(v) && self.rows[v].contains(u)
    )]
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), SicsError> {
        if self.core.insert_edge(u, v)? {
            self.rows[u].insert(v);
            self.rows[v].insert(u);
        }
        Ok(())
    }

    /// The matrix row of `v` as a bitset over the vertex universe.
    #[must_use]
    pub fn row(&self, v: usize) -> &Bitset {
        &self.rows[v]
    }
}

impl GraphStore for AdjacencyListMat {
    fn vertex_count(&self) -> usize {
        self.core.vertex_count()
    }

    fn topology(&self) -> Topology {
        self.core.topology()
    }

    fn degree(&self, v: usize) -> usize {
        self.core.degree(v)
    }

    fn neighbors(&self, v: usize) -> &[u32] {
        self.core.neighbors(v)
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        u < self.rows.len() && self.rows[u].contains(v)
    }

    fn label(&self, v: usize) -> Option<&str> {
        self.core.label(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix_matches_lists(g: &AdjacencyListMat) -> bool {
        (0..g.vertex_count()).all(|u| {
            (0..g.vertex_count()).all(|v| {
                let listed = g.neighbors(u).iter().any(|&w| w as usize == v);
                g.row(u).contains(v) == listed && g.row(u).contains(v) == g.row(v).contains(u)
            })
        })
    }

    #[test]
    fn matrix_tracks_every_insertion() {
        let mut g = AdjacencyListMat::with_vertices(Topology::Undirected, 5);
        for (u, v) in [(0, 1), (1, 2), (2, 0), (3, 4), (1, 2)] {
            g.add_edge(u, v).unwrap();
        }
        assert!(matrix_matches_lists(&g));
        assert!(g.has_edge(2, 1));
        assert!(!g.has_edge(0, 4));
        assert_eq!(g.degree(1), 2);
    }
}
