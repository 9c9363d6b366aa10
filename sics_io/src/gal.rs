//! Text adjacency-list readers (`gal`, labeled `galv`).
//!
//! Whitespace-separated tokens: the vertex count, then one record per
//! vertex. A `gal` record is a neighbor count followed by that many neighbor
//! indices; a `galv` record puts the vertex's label token first.

use std::fs;
use std::path::Path;

use sics_common::Result;
use sics_graph::{Backend, Graph, Topology};

use crate::{ParsedGraph, TokenReader};

const FORMAT_GAL: &str = "gal";
const FORMAT_GALV: &str = "galv";

/// Read an unlabeled text adjacency-list file into the selected backend.
pub fn read_gal(backend: Backend, topology: Topology, path: impl AsRef<Path>) -> Result<Graph> {
    read(FORMAT_GAL, false, backend, topology, path.as_ref())
}

/// Read a labeled text adjacency-list file into the selected backend.
pub fn read_galv(backend: Backend, topology: Topology, path: impl AsRef<Path>) -> Result<Graph> {
    read(FORMAT_GALV, true, backend, topology, path.as_ref())
}

fn read(
    format: &'static str,
    labeled: bool,
    backend: Backend,
    topology: Topology,
    path: &Path,
) -> Result<Graph> {
    let shown = path.display().to_string();
    let text = fs::read_to_string(path)?;
    let mut tokens = TokenReader::new(format, &shown, &text);

    let vertex_count = tokens.number("vertex count")?;
    let mut parsed = ParsedGraph::unlabeled(vertex_count);
    for v in 0..vertex_count {
        if labeled {
            parsed.labels[v] = Some(tokens.token("vertex label")?.to_string());
        }
        let neighbor_count = tokens.number("neighbor count")?;
        for _ in 0..neighbor_count {
            let target = tokens.number("neighbor index")?;
            parsed.push_edge(format, &shown, v, target)?;
        }
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
    fn gal_reads_a_path_graph() {
        let file = write_file("3\n1 1\n1 2\n0\n");
        let g = read_gal(Backend::AdjacencyList, Topology::Undirected, file.path()).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert!(g.store().has_edge(0, 1));
        assert!(g.store().has_edge(1, 2));
        assert!(!g.store().has_edge(0, 2));
    }

    #[test]
    fn galv_reads_labels_before_neighbors() {
        let file = write_file("2\nred 1 1\nblue 0\n");
        let g = read_galv(Backend::AdjacencyListMat, Topology::Undirected, file.path()).unwrap();
        assert_eq!(g.store().label(0), Some("red"));
        assert_eq!(g.store().label(1), Some("blue"));
        assert!(g.store().has_edge(1, 0));
    }

    #[test]
    fn non_numeric_neighbor_count_is_a_parse_error() {
        let file = write_file("2\nx 1\n0\n");
        let err = read_gal(Backend::AdjacencyList, Topology::Undirected, file.path()).unwrap_err();
        assert!(err.to_string().contains("expected neighbor count"));
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let file = write_file("1\n0\n99\n");
        let err = read_gal(Backend::AdjacencyList, Topology::Undirected, file.path()).unwrap_err();
        assert!(err.to_string().contains("trailing data"));
    }
}
