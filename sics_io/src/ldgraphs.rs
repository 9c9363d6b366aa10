//! MIVIA LDGraphs binary readers.
//!
//! Same shape as the amalfi format but with 32-bit little-endian words to
//! accommodate the large dense graphs of that suite. The labeled variant
//! carries one label word per vertex (stored as its decimal string) between
//! the vertex count and the edge lists.

use std::fs;
use std::path::Path;

use sics_common::Result;
use sics_graph::{Backend, Graph, Topology};

use crate::{ParsedGraph, WordReader};

const FORMAT_UNL: &str = "ldgraphs-unl";
const FORMAT_LAB: &str = "ldgraphs-lab";

/// Read an unlabeled LDGraphs benchmark file into the selected backend.
pub fn read_ldgraphs_unl(
    backend: Backend,
    topology: Topology,
    path: impl AsRef<Path>,
) -> Result<Graph> {
    read(FORMAT_UNL, false, backend, topology, path.as_ref())
}

/// Read a labeled LDGraphs benchmark file into the selected backend.
pub fn read_ldgraphs_lab(
    backend: Backend,
    topology: Topology,
    path: impl AsRef<Path>,
) -> Result<Graph> {
    read(FORMAT_LAB, true, backend, topology, path.as_ref())
}

fn read(
    format: &'static str,
    labeled: bool,
    backend: Backend,
    topology: Topology,
    path: &Path,
) -> Result<Graph> {
    let shown = path.display().to_string();
    let bytes = fs::read(path)?;
    let mut words = WordReader::new(format, &shown, &bytes);

    let vertex_count = words.word32()?;
    let mut parsed = ParsedGraph::unlabeled(vertex_count);
    if labeled {
        for v in 0..vertex_count {
            parsed.labels[v] = Some(words.word32()?.to_string());
        }
    }
    for v in 0..vertex_count {
        let edge_count = words.word32()?;
        for _ in 0..edge_count {
            let target = words.word32()?;
            parsed.push_edge(format, &shown, v, target)?;
        }
    }
    words.expect_end()?;

    parsed.build(backend, topology)
}
