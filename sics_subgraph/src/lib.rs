//! The search engine family for subgraph isomorphism as a CSP.
//!
//! One generic depth-first driver interprets a [`SearchConfig`]: candidate
//! representation (list or bitset), seed-time pruning (degree,
//! degree-sequence), propagation strength (plain check, adjacent
//! consistency, full/lazy/lazy-low forward checking, AC1), counting bounds
//! (forward count, pre-count, counting all-different), rollback policy
//! (chronological, Gaschnig backjump, conflict-directed, parent-tracked),
//! and vertex ordering (explicit, `DEG`, `GCF`, dynamic MRV).
//!
//! Every configuration enumerates exactly the same embeddings in the same
//! deterministic order for a fixed static order; the knobs trade search cost
//! only. The [`Solver`] facade validates a `(backend, graph type)` pairing
//! and dispatches the named variant presets.

mod assignment;
mod conflict;
mod domain;
mod emit;
mod order;
mod propagate;
mod prune;
mod search;
mod solver;

pub use emit::format_mapping;
pub use solver::Solver;

pub use sics_common::{SearchConfig, SicsError, VertexOrder, find_variant, variant_names};
