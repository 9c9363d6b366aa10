//! Text edge-list reader (`gf`).
//!
//! Whitespace-separated tokens: vertex count, edge count, then one `u v`
//! pair per edge.

use std::fs;
use std::path::Path;

use sics_common::Result;
use sics_graph::{Backend, Graph, Topology};

use crate::{ParsedGraph, TokenReader};

const FORMAT: &str = "gf";

/// Read a text edge-list file into the selected backend.
pub fn read_gf(backend: Backend, topology: Topology, path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let shown = path.display().to_string();
    let text = fs::read_to_string(path)?;
    let mut tokens = TokenReader::new(FORMAT, &shown, &text);

    let vertex_count = tokens.number("vertex count")?;
    let edge_count = tokens.number("edge count")?;
    let mut parsed = ParsedGraph::unlabeled(vertex_count);
    for _ in 0..edge_count {
        let u = tokens.number("edge endpoint")?;
        let v = tokens.number("edge endpoint")?;
        parsed.push_edge(FORMAT, &shown, u, v)?;
    }
    tokens.expect_end()?;

    parsed.build(backend, topology)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sics_graph::GraphStore;
    use std::io::Write;

    fn write_file(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_the_declared_edges() {
        let file = write_file("4 3\n0 1\n1 2\n2 3\n");
        let g = read_gf(Backend::AdjacencyList, Topology::Undirected, file.path()).unwrap();
        assert_eq!(g.vertex_count(), 4);
        assert!(g.store().has_edge(0, 1));
        assert!(g.store().has_edge(2, 3));
        assert!(!g.store().has_edge(0, 3));
    }

    #[test]
    fn missing_edges_are_a_parse_error() {
        let file = write_file("4 3\n0 1\n");
        assert!(read_gf(Backend::AdjacencyList, Topology::Undirected, file.path()).is_err());
    }

    #[test]
    fn self_loop_is_a_parse_error() {
        let file = write_file("2 1\n1 1\n");
        let err = read_gf(Backend::AdjacencyList, Topology::Undirected, file.path()).unwrap_err();
        assert!(err.to_string().contains("self-loop"));
    }
}
