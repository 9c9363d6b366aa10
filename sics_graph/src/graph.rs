//! Dynamic backend selection.
//!
//! A graph is created from a `(data structure, graph type)` pair chosen at
//! runtime; the degree-sorted backend is only constructible from an
//! existing graph.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sics_common::SicsError;

use crate::adjacency_list::AdjacencyList;
use crate::adjacency_listmat::AdjacencyListMat;
use crate::degree_sorted::DegreeSortedListMat;
use crate::store::{GraphStore, Topology};

/// The available storage backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Backend {
    /// Neighbor lists only.
    AdjacencyList,
    /// Neighbor lists plus adjacency matrix.
    AdjacencyListMat,
    /// Matrix backend with degree-sorted vertex numbering.
    AdjacencyDegreeSortedListMat,
}

impl Backend {
    /// The benchmark-suite token for this backend.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::AdjacencyList => "adjacency_list",
            Self::AdjacencyListMat => "adjacency_listmat",
            Self::AdjacencyDegreeSortedListMat => "adjacency_degreesortedlistmat",
        }
    }
}

impl FromStr for Backend {
    type Err = SicsError;

    fn from_str(s: &str) -> Result<Self, SicsError> {
        match s {
            "adjacency_list" => Ok(Self::AdjacencyList),
            "adjacency_listmat" => Ok(Self::AdjacencyListMat),
            "adjacency_degreesortedlistmat" => Ok(Self::AdjacencyDegreeSortedListMat),
            other => Err(SicsError::backend_mismatch(format!(
                "unknown data structure '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Inner {
    List(AdjacencyList),
    ListMat(AdjacencyListMat),
    DegreeSorted(DegreeSortedListMat),
}

/// A backend-erased graph handle.
///
/// A zero-vertex graph is a legal sentinel (used before a file read
/// populates it); every mutation against it fails with a usage error and
/// performs no side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    inner: Inner,
}

impl Graph {
    /// Create a graph with `vertex_count` isolated vertices.
    ///
    /// The degree-sorted backend cannot be built from a vertex count; use
    /// [`Graph::degree_sorted_from`].
    pub fn with_vertices(
        backend: Backend,
        topology: Topology,
        vertex_count: usize,
    ) -> Result<Self, SicsError> {
        let inner = match backend {
            Backend::AdjacencyList => {
                Inner::List(AdjacencyList::with_vertices(topology, vertex_count))
            }
            Backend::AdjacencyListMat => {
                Inner::ListMat(AdjacencyListMat::with_vertices(topology, vertex_count))
            }
            Backend::AdjacencyDegreeSortedListMat => {
                return Err(SicsError::DegreeSortedFromCount);
            }
        };
        Ok(Self { inner })
    }

    /// Copy `source` into a degree-sorted store (see
    /// [`DegreeSortedListMat::from_graph`]).
    pub fn degree_sorted_from(topology: Topology, source: &Graph) -> Result<Self, SicsError> {
        let sorted = DegreeSortedListMat::from_graph(topology, source.store())?;
        Ok(Self {
            inner: Inner::DegreeSorted(sorted),
        })
    }

    /// Which backend this graph uses.
    #[must_use]
    pub fn backend(&self) -> Backend {
        match &self.inner {
            Inner::List(_) => Backend::AdjacencyList,
            Inner::ListMat(_) => Backend::AdjacencyListMat,
            Inner::DegreeSorted(_) => Backend::AdjacencyDegreeSortedListMat,
        }
    }

    /// The read-side view consumed by the search engine.
    #[must_use]
    pub fn store(&self) -> &dyn GraphStore {
        match &self.inner {
            Inner::List(g) => g,
            Inner::ListMat(g) => g,
            Inner::DegreeSorted(g) => g,
        }
    }

    /// Assign `label` to vertex `v`.
    pub fn set_vertex_label(&mut self, v: usize, label: &str) -> Result<(), SicsError> {
        match &mut self.inner {
            Inner::List(g) => g.set_label(v, label),
            Inner::ListMat(g) => g.set_label(v, label),
            Inner::DegreeSorted(g) => g.set_label(v, label),
        }
    }

    /// Insert the undirected edge `{u, v}`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), SicsError> {
        match &mut self.inner {
            Inner::List(g) => g.add_edge(u, v),
            Inner::ListMat(g) => g.add_edge(u, v),
            Inner::DegreeSorted(g) => g.add_edge(u, v),
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.store().vertex_count()
    }

    /// This graph's edge bookkeeping discipline.
    #[must_use]
    pub fn topology(&self) -> Topology {
        self.store().topology()
    }

    /// True for the zero-vertex sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_tokens_round_trip() {
        for backend in [
            Backend::AdjacencyList,
            Backend::AdjacencyListMat,
            Backend::AdjacencyDegreeSortedListMat,
        ] {
            assert_eq!(backend.token().parse::<Backend>().unwrap(), backend);
        }
        assert!("adjacency_matrix".parse::<Backend>().is_err());
    }

    #[test]
    fn degree_sorted_needs_a_source_graph() {
        assert!(matches!(
            Graph::with_vertices(Backend::AdjacencyDegreeSortedListMat, Topology::Undirected, 3),
            Err(SicsError::DegreeSortedFromCount)
        ));
    }

    #[test]
    fn facade_delegates_mutations() {
        let mut g =
            Graph::with_vertices(Backend::AdjacencyListMat, Topology::Undirected, 3).unwrap();
        g.add_edge(0, 2).unwrap();
        g.set_vertex_label(2, "green").unwrap();
        assert!(g.store().has_edge(2, 0));
        assert_eq!(g.store().label(2), Some("green"));

        let sorted = Graph::degree_sorted_from(Topology::Undirected, &g).unwrap();
        assert_eq!(sorted.backend(), Backend::AdjacencyDegreeSortedListMat);
        assert_eq!(sorted.vertex_count(), 3);
    }

    #[test]
    fn empty_sentinel_refuses_everything() {
        let mut g = Graph::with_vertices(Backend::AdjacencyList, Topology::Undirected, 0).unwrap();
        assert!(g.is_empty());
        assert!(g.add_edge(0, 1).is_err());
        assert!(g.set_vertex_label(0, "x").is_err());
        assert!(Graph::degree_sorted_from(Topology::Undirected, &g).is_err());
    }
}
