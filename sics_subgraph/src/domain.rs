//! Per-pattern-vertex candidate sets.
//!
//! Two representations behind one API: sorted index vectors and fixed-width
//! bitsets. Both yield identical observable behavior; the bitset form exists
//! for O(word) intersection and cardinality. Backtracking restores domains
//! from a per-level snapshot arena (cloning whole `Domains` values), so a
//! failure at any level discards exactly the removals made below it.

use sics_common::{Bitset, DomainRepr};
use sics_graph::GraphStore;

use crate::prune::StaticPruner;

/// Candidate sets for every pattern vertex.
#[derive(Debug, Clone)]
pub(crate) enum Domains {
    /// Sorted vectors of target indices.
    List(Vec<Vec<u32>>),
    /// One bitset over the target universe per pattern vertex.
    Bits(Vec<Bitset>),
}

/// Label admissibility: equal labels, or either side unlabeled.
fn labels_compatible(pattern: &dyn GraphStore, target: &dyn GraphStore, p: usize, t: usize) -> bool {
    match (pattern.label(p), target.label(t)) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    }
}

impl Domains {
    /// Seed every pattern vertex's domain with the label-compatible,
    /// prune-admissible target vertices.
    pub(crate) fn seed(
        repr: DomainRepr,
        pattern: &dyn GraphStore,
        target: &dyn GraphStore,
        pruner: &StaticPruner,
    ) -> Self {
        let candidates = |p: usize| {
            (0..target.vertex_count())
                .filter(move |&t| labels_compatible(pattern, target, p, t) && pruner.admits(p, t))
        };
        match repr {
            DomainRepr::List => Self::List(
                (0..pattern.vertex_count())
                    .map(|p| candidates(p).map(|t| t as u32).collect())
                    .collect(),
            ),
            DomainRepr::Bitset => Self::Bits(
                (0..pattern.vertex_count())
                    .map(|p| {
                        let mut set = Bitset::empty(target.vertex_count());
                        for t in candidates(p) {
                            set.insert(t);
                        }
                        set
                    })
                    .collect(),
            ),
        }
    }

    pub(crate) fn size(&self, p: usize) -> usize {
        match self {
            Self::List(sets) => sets[p].len(),
            Self::Bits(sets) => sets[p].count(),
        }
    }

    pub(crate) fn is_empty(&self, p: usize) -> bool {
        match self {
            Self::List(sets) => sets[p].is_empty(),
            Self::Bits(sets) => sets[p].is_empty(),
        }
    }

    pub(crate) fn contains(&self, p: usize, t: usize) -> bool {
        match self {
            Self::List(sets) => sets[p].binary_search(&(t as u32)).is_ok(),
            Self::Bits(sets) => sets[p].contains(t),
        }
    }

    /// Remove `t` from `p`'s domain if present.
    pub(crate) fn remove(&mut self, p: usize, t: usize) {
        match self {
            Self::List(sets) => {
                if let Ok(i) = sets[p].binary_search(&(t as u32)) {
                    sets[p].remove(i);
                }
            }
            Self::Bits(sets) => {
                sets[p].remove(t);
            }
        }
    }

    /// Intersect `p`'s domain with the target neighborhood of `t`.
    pub(crate) fn retain_neighbors(&mut self, p: usize, t: usize, adj: &TargetAdjacency<'_>) {
        match self {
            Self::List(sets) => sets[p].retain(|&x| adj.has_edge(t, x as usize)),
            Self::Bits(sets) => sets[p].intersect_with(adj.row(t)),
        }
    }

    /// Current members of `p`'s domain, ascending.
    pub(crate) fn values(&self, p: usize) -> Vec<u32> {
        match self {
            Self::List(sets) => sets[p].clone(),
            Self::Bits(sets) => sets[p].iter().map(|t| t as u32).collect(),
        }
    }

    /// Union cardinality over the domains of the given pattern vertices.
    pub(crate) fn union_count(&self, vars: impl Iterator<Item = usize>, target_count: usize) -> usize {
        let mut union = Bitset::empty(target_count);
        for p in vars {
            match self {
                Self::List(sets) => {
                    for &t in &sets[p] {
                        union.insert(t as usize);
                    }
                }
                Self::Bits(sets) => union.union_with(&sets[p]),
            }
        }
        union.count()
    }
}

/// Target-side adjacency answers for domain filtering.
///
/// In bitset mode the target's neighborhoods are materialized as rows once
/// per search call so intersection is word-parallel; in list mode edge
/// queries go straight to the store.
pub(crate) struct TargetAdjacency<'a> {
    target: &'a dyn GraphStore,
    rows: Option<Vec<Bitset>>,
}

impl<'a> TargetAdjacency<'a> {
    pub(crate) fn build(repr: DomainRepr, target: &'a dyn GraphStore) -> Self {
        let rows = match repr {
            DomainRepr::List => None,
            DomainRepr::Bitset => {
                let n = target.vertex_count();
                Some(
                    (0..n)
                        .map(|t| {
                            let mut row = Bitset::empty(n);
                            for &w in target.neighbors(t) {
                                row.insert(w as usize);
                            }
                            row
                        })
                        .collect(),
                )
            }
        };
        Self { target, rows }
    }

    pub(crate) fn has_edge(&self, u: usize, v: usize) -> bool {
        self.target.has_edge(u, v)
    }

    fn row(&self, t: usize) -> &Bitset {
        &self.rows.as_ref().expect("bitset rows exist in bitset mode")[t]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sics_common::PruneLevel;
    use sics_graph::{AdjacencyList, Topology};

    fn labeled_pair() -> (AdjacencyList, AdjacencyList) {
        let mut p = AdjacencyList::with_vertices(Topology::Undirected, 2);
        p.add_edge(0, 1).unwrap();
        p.set_label(0, "red").unwrap();

        let mut t = AdjacencyList::with_vertices(Topology::Undirected, 3);
        t.add_edge(0, 1).unwrap();
        t.add_edge(1, 2).unwrap();
        t.set_label(0, "red").unwrap();
        t.set_label(1, "blue").unwrap();
        (p, t)
    }

    #[test]
    fn seeding_honors_labels_in_both_representations() {
        let (p, t) = labeled_pair();
        let pruner = StaticPruner::build(PruneLevel::Off, &p, &t);
        for repr in [DomainRepr::List, DomainRepr::Bitset] {
            let domains = Domains::seed(repr, &p, &t, &pruner);
            // Pattern 0 is "red": only target 0 matches; target 2 is
            // unlabeled and therefore also compatible.
            assert_eq!(domains.values(0), vec![0, 2]);
            // Pattern 1 is unlabeled: everything is compatible.
            assert_eq!(domains.values(1), vec![0, 1, 2]);
        }
    }

    #[test]
    fn removal_and_snapshots_are_independent() {
        let (p, t) = labeled_pair();
        let pruner = StaticPruner::build(PruneLevel::Off, &p, &t);
        let mut domains = Domains::seed(DomainRepr::Bitset, &p, &t, &pruner);
        let snapshot = domains.clone();

        domains.remove(1, 1);
        assert!(!domains.contains(1, 1));
        assert_eq!(domains.size(1), 2);
        assert!(snapshot.contains(1, 1));

        domains.clone_from(&snapshot);
        assert!(domains.contains(1, 1));
    }

    #[test]
    fn retain_neighbors_matches_edge_queries() {
        let (p, t) = labeled_pair();
        let pruner = StaticPruner::build(PruneLevel::Off, &p, &t);
        for repr in [DomainRepr::List, DomainRepr::Bitset] {
            let adj = TargetAdjacency::build(repr, &t);
            let mut domains = Domains::seed(repr, &p, &t, &pruner);
            // Neighbors of target 1 are {0, 2}.
            domains.retain_neighbors(1, 1, &adj);
            assert_eq!(domains.values(1), vec![0, 2]);
        }
    }

    #[test]
    fn union_count_spans_the_requested_vertices() {
        let (p, t) = labeled_pair();
        let pruner = StaticPruner::build(PruneLevel::Off, &p, &t);
        let domains = Domains::seed(DomainRepr::List, &p, &t, &pruner);
        assert_eq!(domains.union_count([0usize].into_iter(), 3), 2);
        assert_eq!(domains.union_count([0usize, 1].into_iter(), 3), 3);
    }
}
