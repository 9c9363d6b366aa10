//! Shared fixtures for the engine integration tests.

use std::sync::OnceLock;

use sics_graph::{Backend, Graph, Topology};

pub fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Build a graph from an edge list, with optional labels.
pub fn graph(
    backend: Backend,
    vertex_count: usize,
    edges: &[(usize, usize)],
    labels: &[(usize, &str)],
) -> Graph {
    let mut g = Graph::with_vertices(backend, Topology::Undirected, vertex_count).unwrap();
    for &(v, label) in labels {
        g.set_vertex_label(v, label).unwrap();
    }
    for &(u, v) in edges {
        g.add_edge(u, v).unwrap();
    }
    g
}

/// The labeled triangle pattern of the reference scenario.
pub fn scenario_pattern(backend: Backend) -> Graph {
    graph(
        backend,
        3,
        &[(0, 1), (1, 2), (2, 0)],
        &[(0, "red"), (1, "blue"), (2, "green")],
    )
}

/// The labeled 4-vertex target of the reference scenario.
pub fn scenario_target(backend: Backend) -> Graph {
    graph(
        backend,
        4,
        &[(0, 1), (1, 2), (2, 0), (1, 3), (3, 0)],
        &[(0, "red"), (1, "blue"), (2, "green"), (3, "green")],
    )
}

/// A 4-cycle.
pub fn square(backend: Backend) -> Graph {
    graph(backend, 4, &[(0, 1), (1, 2), (2, 3), (3, 0)], &[])
}

/// The complete graph on five vertices.
pub fn k5(backend: Backend) -> Graph {
    let edges: Vec<(usize, usize)> = (0..5)
        .flat_map(|u| ((u + 1)..5).map(move |v| (u, v)))
        .collect();
    graph(backend, 5, &edges, &[])
}

/// A triangle.
pub fn triangle(backend: Backend) -> Graph {
    graph(backend, 3, &[(0, 1), (1, 2), (2, 0)], &[])
}

/// The Petersen graph (triangle-free).
pub fn petersen(backend: Backend) -> Graph {
    let mut edges: Vec<(usize, usize)> = Vec::new();
    for i in 0..5 {
        edges.push((i, (i + 1) % 5));
        edges.push((i, i + 5));
        edges.push((i + 5, (i + 2) % 5 + 5));
    }
    graph(backend, 10, &edges, &[])
}
