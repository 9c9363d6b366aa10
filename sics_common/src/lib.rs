//! Shared leaf crate for the SICS workspace.
//!
//! Holds the pieces every other crate agrees on: the error taxonomy, the
//! search configuration model with its named variant registry, the vertex
//! order selection types, and the fixed-width bitset used by both the
//! matrix-backed graph stores and the bitset domain representation.

pub mod bitset;
pub mod config;
pub mod error;
pub mod order;
pub mod variant;

pub use bitset::Bitset;
pub use config::{
    CountingBound, DomainRepr, JumpPolicy, OrderingMode, Propagation, PruneLevel, SearchConfig,
};
pub use error::SicsError;
pub use order::{OrderHeuristic, VertexOrder};
pub use variant::{Variant, find_variant, variant_names};

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SicsError>;
