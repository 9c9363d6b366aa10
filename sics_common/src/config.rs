//! The parameterized search configuration.
//!
//! The engine family exposes dozens of named entry points; each one is a
//! point in a small configuration space that a single generic driver
//! interprets. The names live as presets in [`crate::variant`].

use serde::{Deserialize, Serialize};

/// Candidate-set representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomainRepr {
    /// Sorted vectors of target indices.
    List,
    /// Fixed-width bitsets with word-level set algebra.
    Bitset,
}

/// Static, per-candidate admissibility filter applied when domains are seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PruneLevel {
    /// No structural filter (labels still apply).
    Off,
    /// Require `degree(target) >= degree(pattern)`.
    Degree,
    /// Require element-wise domination of sorted neighbor-degree sequences.
    DegreeSequence,
}

/// How much work happens when a pattern vertex is tentatively assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Propagation {
    /// No domain updates; each candidate is validated against every
    /// assigned level at selection time.
    PlainCheck,
    /// No domain updates; validation walks only the assigned pattern
    /// neighbors of the current vertex.
    AdjacentConsistency,
    /// Filter every unassigned domain after each assignment.
    ForwardChecking,
    /// Filter only the domains of unassigned pattern neighbors.
    LazyForwardChecking,
    /// Filter only the order-tree children of the assigned vertex.
    LazyForwardCheckingLow,
}

/// Where the search resumes after a level exhausts its candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JumpPolicy {
    /// Always the immediately preceding level.
    Chronological,
    /// From leaf dead-ends, the deepest level that rejected a candidate.
    Backjump,
    /// Conflict-directed backjumping with per-level conflict sets.
    ConflictDirected,
    /// From leaf dead-ends, the precomputed static order-tree parent.
    ParentJump,
}

/// Injectivity-counting bound checked during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountingBound {
    /// No counting bound.
    None,
    /// Maintain per-vertex counts of unused admissible candidates.
    ForwardCount,
    /// Recompute the same bound from scratch at every node.
    PreCount,
    /// Fail when the union of remaining domains is smaller than the number
    /// of unassigned pattern vertices.
    AllDifferent,
}

/// Vertex selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderingMode {
    /// A total order fixed before the search starts.
    Static,
    /// Minimum-remaining-values, recomputed at every node.
    DynamicMrv,
}

/// One point in the variant space: the full recipe a search run follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Candidate-set representation.
    pub domain: DomainRepr,
    /// Seed-time admissibility filter.
    pub prune: PruneLevel,
    /// Per-assignment propagation strength.
    pub propagation: Propagation,
    /// Rollback target policy.
    pub jump: JumpPolicy,
    /// Counting-based all-different bound.
    pub counting: CountingBound,
    /// Static or dynamic vertex selection.
    pub ordering: OrderingMode,
    /// Run an AC1 fixpoint after each propagation step.
    pub ac1: bool,
}

impl SearchConfig {
    /// Plain chronological backtracking over list domains, no pruning.
    pub const DEFAULT: Self = Self {
        domain: DomainRepr::List,
        prune: PruneLevel::Off,
        propagation: Propagation::PlainCheck,
        jump: JumpPolicy::Chronological,
        counting: CountingBound::None,
        ordering: OrderingMode::Static,
        ac1: false,
    };

    /// Switch to bitset domains.
    #[must_use]
    pub const fn bitset(mut self) -> Self {
        self.domain = DomainRepr::Bitset;
        self
    }

    /// Enable degree pruning.
    #[must_use]
    pub const fn degree_prune(mut self) -> Self {
        self.prune = PruneLevel::Degree;
        self
    }

    /// Enable degree-sequence pruning.
    #[must_use]
    pub const fn degree_sequence_prune(mut self) -> Self {
        self.prune = PruneLevel::DegreeSequence;
        self
    }

    /// Validate candidates against assigned pattern neighbors only.
    #[must_use]
    pub const fn adjacent_consistency(mut self) -> Self {
        self.propagation = Propagation::AdjacentConsistency;
        self
    }

    /// Enable full forward checking.
    #[must_use]
    pub const fn forward_checking(mut self) -> Self {
        self.propagation = Propagation::ForwardChecking;
        self
    }

    /// Enable lazy forward checking.
    #[must_use]
    pub const fn lazy_forward_checking(mut self) -> Self {
        self.propagation = Propagation::LazyForwardChecking;
        self
    }

    /// Enable the low-overhead lazy forward checking.
    #[must_use]
    pub const fn lazy_forward_checking_low(mut self) -> Self {
        self.propagation = Propagation::LazyForwardCheckingLow;
        self
    }

    /// Jump to the deepest conflicting level from leaf dead-ends.
    #[must_use]
    pub const fn backjump(mut self) -> Self {
        self.jump = JumpPolicy::Backjump;
        self
    }

    /// Enable conflict-directed backjumping.
    #[must_use]
    pub const fn conflict_directed(mut self) -> Self {
        self.jump = JumpPolicy::ConflictDirected;
        self
    }

    /// Jump to the static order-tree parent from leaf dead-ends.
    #[must_use]
    pub const fn parent_jump(mut self) -> Self {
        self.jump = JumpPolicy::ParentJump;
        self
    }

    /// Maintain forward candidate counts.
    #[must_use]
    pub const fn forward_count(mut self) -> Self {
        self.counting = CountingBound::ForwardCount;
        self
    }

    /// Recompute candidate counts at every node.
    #[must_use]
    pub const fn pre_count(mut self) -> Self {
        self.counting = CountingBound::PreCount;
        self
    }

    /// Enable the counting all-different bound.
    #[must_use]
    pub const fn counting_all_different(mut self) -> Self {
        self.counting = CountingBound::AllDifferent;
        self
    }

    /// Select vertices dynamically by minimum remaining values.
    #[must_use]
    pub const fn mrv(mut self) -> Self {
        self.ordering = OrderingMode::DynamicMrv;
        self
    }

    /// Run an AC1 fixpoint after each propagation step.
    #[must_use]
    pub const fn with_ac1(mut self) -> Self {
        self.ac1 = true;
        self
    }

    /// True when the configuration maintains dynamic domains during search.
    #[must_use]
    pub const fn maintains_domains(&self) -> bool {
        matches!(
            self.propagation,
            Propagation::ForwardChecking
                | Propagation::LazyForwardChecking
                | Propagation::LazyForwardCheckingLow
        )
    }

    /// True when a caller-supplied vertex order is required.
    #[must_use]
    pub const fn needs_vertex_order(&self) -> bool {
        matches!(self.ordering, OrderingMode::Static)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_composes() {
        let cfg = SearchConfig::DEFAULT.bitset().degree_prune().backjump();
        assert_eq!(cfg.domain, DomainRepr::Bitset);
        assert_eq!(cfg.prune, PruneLevel::Degree);
        assert_eq!(cfg.jump, JumpPolicy::Backjump);
        assert_eq!(cfg.propagation, Propagation::PlainCheck);
        assert!(!cfg.maintains_domains());
    }

    #[test]
    fn mrv_does_not_need_an_order() {
        let cfg = SearchConfig::DEFAULT.forward_checking().mrv();
        assert!(!cfg.needs_vertex_order());
        assert!(cfg.maintains_domains());
    }

    #[test]
    fn config_serializes() {
        let cfg = SearchConfig::DEFAULT.forward_checking().bitset().with_ac1();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
