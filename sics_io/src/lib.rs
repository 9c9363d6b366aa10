//! Benchmark file ingestion.
//!
//! One reader per benchmark family, each taking a `(backend, graph type)`
//! selector and a path, and returning a populated [`Graph`] or a typed
//! parse/IO error. The readers never partially mutate a shared graph: they
//! parse into an intermediate description first and only then build the
//! store, so a failed read leaves nothing behind.
//!
//! Ingestion is idempotent: reading the same file twice yields stores with
//! identical vertex counts, labels, and edge sets.

mod amalfi;
mod gal;
mod gf;
mod ldgraphs;

pub use amalfi::read_amalfi;
pub use gal::{read_gal, read_galv};
pub use gf::read_gf;
pub use ldgraphs::{read_ldgraphs_lab, read_ldgraphs_unl};

use sics_common::{Result, SicsError};
use sics_graph::{Backend, Graph, Topology};
use tracing::debug;

/// Parsed file contents, independent of the target backend.
struct ParsedGraph {
    vertex_count: usize,
    labels: Vec<Option<String>>,
    edges: Vec<(usize, usize)>,
}

impl ParsedGraph {
    fn unlabeled(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            labels: vec![None; vertex_count],
            edges: Vec::new(),
        }
    }

    /// Record an edge, validating both endpoints against the vertex count.
    fn push_edge(
        &mut self,
        format: &'static str,
        path: &str,
        u: usize,
        v: usize,
    ) -> Result<()> {
        if u >= self.vertex_count || v >= self.vertex_count {
            return Err(SicsError::parse(
                format,
                path,
                format!(
                    "edge ({u}, {v}) out of range for {} vertices",
                    self.vertex_count
                ),
            ));
        }
        if u == v {
            return Err(SicsError::parse(format, path, format!("self-loop on vertex {u}")));
        }
        self.edges.push((u, v));
        Ok(())
    }

    /// Build the selected backend from the parsed description.
    fn build(self, backend: Backend, topology: Topology) -> Result<Graph> {
        let mut graph = Graph::with_vertices(backend, topology, self.vertex_count)?;
        for (v, label) in self.labels.iter().enumerate() {
            if let Some(label) = label {
                graph.set_vertex_label(v, label)?;
            }
        }
        for &(u, v) in &self.edges {
            graph.add_edge(u, v)?;
        }
        debug!(
            vertices = self.vertex_count,
            edges = self.edges.len(),
            backend = backend.token(),
            "graph ingested"
        );
        Ok(graph)
    }
}

/// Whitespace-token cursor over a text benchmark file.
struct TokenReader<'a> {
    format: &'static str,
    path: &'a str,
    tokens: std::str::SplitWhitespace<'a>,
}

impl<'a> TokenReader<'a> {
    fn new(format: &'static str, path: &'a str, text: &'a str) -> Self {
        Self {
            format,
            path,
            tokens: text.split_whitespace(),
        }
    }

    fn token(&mut self, what: &str) -> Result<&'a str> {
        self.tokens.next().ok_or_else(|| {
            SicsError::parse(self.format, self.path, format!("unexpected end of file, expected {what}"))
        })
    }

    fn number(&mut self, what: &str) -> Result<usize> {
        let token = self.token(what)?;
        token.parse().map_err(|_| {
            SicsError::parse(
                self.format,
                self.path,
                format!("expected {what}, found '{token}'"),
            )
        })
    }

    fn expect_end(&mut self) -> Result<()> {
        match self.tokens.next() {
            None => Ok(()),
            Some(extra) => Err(SicsError::parse(
                self.format,
                self.path,
                format!("trailing data starting at '{extra}'"),
            )),
        }
    }
}

/// Little-endian word cursor over a binary benchmark file.
struct WordReader<'a> {
    format: &'static str,
    path: &'a str,
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> WordReader<'a> {
    fn new(format: &'static str, path: &'a str, bytes: &'a [u8]) -> Self {
        Self {
            format,
            path,
            bytes,
            offset: 0,
        }
    }

    fn take(&mut self, width: usize) -> Result<&'a [u8]> {
        let end = self.offset + width;
        let chunk = self.bytes.get(self.offset..end).ok_or_else(|| {
            SicsError::parse(
                self.format,
                self.path,
                format!("truncated file at byte {}", self.offset),
            )
        })?;
        self.offset = end;
        Ok(chunk)
    }

    /// Next 16-bit little-endian word.
    fn word16(&mut self) -> Result<usize> {
        let chunk = self.take(2)?;
        Ok(u16::from_le_bytes([chunk[0], chunk[1]]) as usize)
    }

    /// Next 32-bit little-endian word.
    fn word32(&mut self) -> Result<usize> {
        let chunk = self.take(4)?;
        Ok(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) as usize)
    }

    fn expect_end(&mut self) -> Result<()> {
        if self.offset != self.bytes.len() {
            return Err(SicsError::parse(
                self.format,
                self.path,
                format!("trailing data at byte {}", self.offset),
            ));
        }
        Ok(())
    }
}
