//! The plain neighbor-list backend.

use sics_common::SicsError;

use crate::core::AdjacencyCore;
use crate::store::{GraphStore, Topology};

/// Neighbor lists only; `has_edge` scans the (shorter) endpoint's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList {
    core: AdjacencyCore,
}

impl AdjacencyList {
    /// A store with `vertex_count` isolated vertices and no labels.
    #[must_use]
    pub fn with_vertices(topology: Topology, vertex_count: usize) -> Self {
        Self {
            core: AdjacencyCore::new(topology, vertex_count),
        }
    }

    /// Assign `label` to vertex `v`.
    pub fn set_label(&mut self, v: usize, label: &str) -> Result<(), SicsError> {
        self.core.set_label(v, label)
    }

    /// Insert the undirected edge `{u, v}`; duplicates are a no-op.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), SicsError> {
        self.core.insert_edge(u, v)?;
        Ok(())
    }
}

impl GraphStore for AdjacencyList {
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
        self.core.contains_edge(u, v)
    }

    fn label(&self, v: usize) -> Option<&str> {
        self.core.label(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_optional_until_assigned() {
        let mut g = AdjacencyList::with_vertices(Topology::Undirected, 2);
        assert_eq!(g.label(0), None);
        g.set_label(0, "red").unwrap();
        assert_eq!(g.label(0), Some("red"));
        assert_eq!(g.label(1), None);
    }

    #[test]
    fn queries_reflect_insertions() {
        let mut g = AdjacencyList::with_vertices(Topology::Undirected, 4);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        assert_eq!(g.degree(0), 2);
        assert!(g.has_edge(2, 0));
        assert!(!g.has_edge(1, 2));
        assert_eq!(g.neighbors(0), &[1, 2]);
    }
}
