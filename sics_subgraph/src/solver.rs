//! The search invocation surface.
//!
//! A [`Solver`] is fixed to one `(backend, graph type)` family; every run
//! validates the variant name, the graph pairing, the empty-graph sentinel,
//! and the vertex-order mode before any search work begins. No partial output is produced on a usage error.

use std::io::Write;

use sics_common::{OrderingMode, Result, SearchConfig, SicsError, VertexOrder, find_variant};
use sics_graph::{Backend, Graph, Topology};
use tracing::debug;

use crate::emit::MappingSink;
use crate::search::{SearchRequest, run};

/// Algorithm dispatcher for one storage backend and graph type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
    backend: Backend,
    topology: Topology,
}

impl Solver {
    /// A solver for graphs of the given backend and graph type.
    #[must_use]
    pub const fn new(backend: Backend, topology: Topology) -> Self {
        Self { backend, topology }
    }

    /// Run a named variant over `(pattern, target)`.
    ///
    /// Mappings (when `emit_mapping` is set) and the final count line are
    /// written to `out`; the count is also returned. `vertex_order` must be
    /// present exactly when the variant uses static ordering.
    pub fn run(
        &self,
        variant_name: &str,
        pattern: &Graph,
        target: &Graph,
        vertex_order: Option<&VertexOrder>,
        emit_mapping: bool,
        out: &mut dyn Write,
    ) -> Result<u64> {
        let config = self.validate(variant_name, pattern, target, vertex_order)?;

        debug!(variant = variant_name, emit_mapping, "dispatching search");
        let request = SearchRequest {
            config,
            pattern: pattern.store(),
            target: target.store(),
            vertex_order,
        };
        let mut sink = MappingSink::new(out, emit_mapping);
        let count = run(&request, &mut sink)?;
        sink.finish(count)?;
        Ok(count)
    }

    /// All usage-error checks, before any search state is built.
    fn validate(
        &self,
        variant_name: &str,
        pattern: &Graph,
        target: &Graph,
        vertex_order: Option<&VertexOrder>,
    ) -> Result<SearchConfig> {
        let variant = find_variant(variant_name)
            .ok_or_else(|| SicsError::UnknownVariant(variant_name.to_string()))?;

        for (role, graph) in [("pattern", pattern), ("target", target)] {
            if graph.backend() != self.backend || graph.topology() != self.topology {
                return Err(SicsError::backend_mismatch(format!(
                    "{role} graph is {}/{} but the solver expects {}/{}",
                    graph.backend().token(),
                    graph.topology().token(),
                    self.backend.token(),
                    self.topology.token(),
                )));
            }
            if graph.is_empty() {
                return Err(SicsError::empty_graph("run a search"));
            }
        }

        match (variant.config.ordering, vertex_order) {
            (OrderingMode::Static, None) => {
                return Err(SicsError::OrderRequired {
                    variant: variant_name.to_string(),
                });
            }
            (OrderingMode::DynamicMrv, Some(_)) => {
                return Err(SicsError::OrderNotSupported {
                    variant: variant_name.to_string(),
                });
            }
            (OrderingMode::Static, Some(order)) => {
                order.validate(pattern.vertex_count())?;
            }
            (OrderingMode::DynamicMrv, None) => {}
        }

        Ok(variant.config)
    }
}
