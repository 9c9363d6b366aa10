//! Seed-time admissibility filters.
//!
//! An edge-preserving injection can only send a pattern vertex to a target
//! vertex of at least its degree; the degree-sequence filter strengthens
//! this by requiring the sorted neighbor-degree sequence of the target
//! vertex to dominate the pattern vertex's element-wise.

use itertools::Itertools;
use sics_common::PruneLevel;
use sics_graph::GraphStore;

/// Precomputed admissibility filter applied when domains are seeded.
pub(crate) struct StaticPruner {
    level: PruneLevel,
    pattern_degrees: Vec<usize>,
    target_degrees: Vec<usize>,
    /// Neighbor degrees, sorted descending; empty unless degree-sequence
    /// pruning is on.
    pattern_sequences: Vec<Vec<usize>>,
    target_sequences: Vec<Vec<usize>>,
}

fn degree_sequences(graph: &dyn GraphStore) -> Vec<Vec<usize>> {
    (0..graph.vertex_count())
        .map(|v| {
            graph
                .neighbors(v)
                .iter()
                .map(|&w| graph.degree(w as usize))
                .sorted_by(|a, b| b.cmp(a))
                .collect()
        })
        .collect()
}

impl StaticPruner {
    pub(crate) fn build(
        level: PruneLevel,
        pattern: &dyn GraphStore,
        target: &dyn GraphStore,
    ) -> Self {
        let (pattern_sequences, target_sequences) = match level {
            PruneLevel::DegreeSequence => (degree_sequences(pattern), degree_sequences(target)),
            _ => (Vec::new(), Vec::new()),
        };
        Self {
            level,
            pattern_degrees: (0..pattern.vertex_count()).map(|v| pattern.degree(v)).collect(),
            target_degrees: (0..target.vertex_count()).map(|v| target.degree(v)).collect(),
            pattern_sequences,
            target_sequences,
        }
    }

    /// Whether target vertex `t` stays in pattern vertex `p`'s seed domain.
    pub(crate) fn admits(&self, p: usize, t: usize) -> bool {
        match self.level {
            PruneLevel::Off => true,
            PruneLevel::Degree => self.target_degrees[t] >= self.pattern_degrees[p],
            PruneLevel::DegreeSequence => {
                if self.target_degrees[t] < self.pattern_degrees[p] {
                    return false;
                }
                // Both sequences are sorted descending, so element-wise
                // domination of the prefix is the optimal matching.
                self.pattern_sequences[p]
                    .iter()
                    .zip(&self.target_sequences[t])
                    .all(|(pd, td)| td >= pd)
            }
        }
    }
}
