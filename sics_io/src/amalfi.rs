//! MIVIA ARG ("amalfi") binary reader.
//!
//! The file is a stream of 16-bit little-endian words: the vertex count,
//! then for each vertex an edge count followed by that many target indices.
//! Vertices are unlabeled. Each undirected edge may appear under either or
//! both endpoints; duplicates collapse in the store.

use std::fs;
use std::path::Path;

use sics_common::Result;
use sics_graph::{Backend, Graph, Topology};

use crate::{ParsedGraph, WordReader};

const FORMAT: &str = "amalfi";

/// Read an amalfi benchmark file into the selected backend.
pub fn read_amalfi(
    backend: Backend,
    topology: Topology,
    path: impl AsRef<Path>,
) -> Result<Graph> {
    let path = path.as_ref();
    let shown = path.display().to_string();
    let bytes = fs::read(path)?;
    let mut words = WordReader::new(FORMAT, &shown, &bytes);

    let vertex_count = words.word16()?;
    let mut parsed = ParsedGraph::unlabeled(vertex_count);
    for v in 0..vertex_count {
        let edge_count = words.word16()?;
        for _ in 0..edge_count {
            let target = words.word16()?;
            parsed.push_edge(FORMAT, &shown, v, target)?;
        }
    }
    words.expect_end()?;

    parsed.build(backend, topology)
}
