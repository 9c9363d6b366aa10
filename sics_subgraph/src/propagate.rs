//! Domain filtering and counting bounds applied after each assignment.
//!
//! Every routine here is sound: it signals a dead end only when the subtree
//! below the tentative assignment provably contains no embedding. That is
//! what keeps every variant's embedding count identical.

use sics_graph::GraphStore;

use crate::assignment::Assignment;
use crate::domain::{Domains, TargetAdjacency};

/// Result of a propagation or bound check.
pub(crate) enum Outcome {
    /// Domains remain viable.
    Consistent,
    /// Some unassigned vertex lost its last candidate. `implicated` is the
    /// deepest earlier decision level responsible, when one can be named
    /// (feeds the backjumping policies).
    DeadEnd {
        /// Deepest earlier implicated level, if attributable.
        implicated: Option<usize>,
    },
}

/// Full forward checking: after `p -> t`, remove `t` everywhere and
/// intersect every unassigned pattern neighbor's domain with the target
/// neighborhood of `t`.
pub(crate) fn forward_check_full(
    domains: &mut Domains,
    assignment: &Assignment,
    pattern: &dyn GraphStore,
    adj: &TargetAdjacency<'_>,
    p: usize,
    t: usize,
) -> Outcome {
    let pattern_count = pattern.vertex_count();
    for q in 0..pattern_count {
        if q == p || assignment.is_assigned(q) {
            continue;
        }
        domains.remove(q, t);
        if pattern.has_edge(p, q) {
            domains.retain_neighbors(q, t, adj);
        }
        if domains.is_empty(q) {
            return dead_end_for(assignment, pattern, q, p);
        }
    }
    Outcome::Consistent
}

/// Lazy forward checking: filter only the unassigned pattern neighbors of
/// `p`; injectivity against the rest is left to selection-time checks.
pub(crate) fn forward_check_lazy(
    domains: &mut Domains,
    assignment: &Assignment,
    pattern: &dyn GraphStore,
    adj: &TargetAdjacency<'_>,
    p: usize,
    t: usize,
) -> Outcome {
    for &w in pattern.neighbors(p) {
        let q = w as usize;
        if assignment.is_assigned(q) {
            continue;
        }
        domains.remove(q, t);
        domains.retain_neighbors(q, t, adj);
        if domains.is_empty(q) {
            return dead_end_for(assignment, pattern, q, p);
        }
    }
    Outcome::Consistent
}

/// Lazy-low forward checking: filter only the order-tree children of `p`.
pub(crate) fn forward_check_lazy_low(
    domains: &mut Domains,
    assignment: &Assignment,
    pattern: &dyn GraphStore,
    adj: &TargetAdjacency<'_>,
    children: &[u32],
    p: usize,
    t: usize,
) -> Outcome {
    for &w in children {
        let q = w as usize;
        if assignment.is_assigned(q) {
            continue;
        }
        domains.remove(q, t);
        domains.retain_neighbors(q, t, adj);
        if domains.is_empty(q) {
            return dead_end_for(assignment, pattern, q, p);
        }
    }
    Outcome::Consistent
}

/// Attribute an emptied domain to the deepest earlier assigned pattern
/// neighbor of `q` (the assignments that pruned `D(q)`), excluding the
/// vertex just assigned.
fn dead_end_for(
    assignment: &Assignment,
    pattern: &dyn GraphStore,
    q: usize,
    just_assigned: usize,
) -> Outcome {
    let implicated = pattern
        .neighbors(q)
        .iter()
        .map(|&w| w as usize)
        .filter(|&w| w != just_assigned)
        .filter_map(|w| assignment.level_of(w))
        .max();
    Outcome::DeadEnd { implicated }
}

/// AC1 fixpoint: repeatedly drop, from every unassigned vertex's domain,
/// any candidate with no support in some unassigned pattern neighbor's
/// domain, until nothing changes.
pub(crate) fn ac1(
    domains: &mut Domains,
    assignment: &Assignment,
    pattern: &dyn GraphStore,
    adj: &TargetAdjacency<'_>,
) -> Outcome {
    let pattern_count = pattern.vertex_count();
    loop {
        let mut changed = false;
        for q in 0..pattern_count {
            if assignment.is_assigned(q) {
                continue;
            }
            for &w in pattern.neighbors(q) {
                let r = w as usize;
                if assignment.is_assigned(r) {
                    continue;
                }
                for t in domains.values(q) {
                    let supported = domains
                        .values(r)
                        .iter()
                        .any(|&s| adj.has_edge(t as usize, s as usize));
                    if !supported {
                        domains.remove(q, t as usize);
                        changed = true;
                    }
                }
                if domains.is_empty(q) {
                    return Outcome::DeadEnd { implicated: None };
                }
            }
        }
        if !changed {
            return Outcome::Consistent;
        }
    }
}

/// Counting all-different: the union of the remaining domains must cover
/// the remaining pattern vertices (a pigeonhole bound, far cheaper than a
/// full bipartite matching).
pub(crate) fn all_different_holds(
    domains: &Domains,
    assignment: &Assignment,
    pattern_count: usize,
    target_count: usize,
) -> bool {
    let unassigned = (0..pattern_count).filter(|&q| !assignment.is_assigned(q));
    let remaining = pattern_count - assignment.len();
    domains.union_count(unassigned, target_count) >= remaining
}

/// Pre-count: recompute, at this node, that every unassigned vertex still
/// has an unused statically-admissible candidate.
pub(crate) fn precount_holds(
    seed: &Domains,
    assignment: &Assignment,
    pattern_count: usize,
) -> bool {
    (0..pattern_count)
        .filter(|&q| !assignment.is_assigned(q))
        .all(|q| seed.values(q).iter().any(|&t| !assignment.is_used(t as usize)))
}

/// Forward-count: the same bound as [`precount_holds`], maintained
/// incrementally. Counts are decremented as targets are consumed and
/// restored symmetrically on undo.
pub(crate) struct ForwardCounts {
    counts: Vec<u32>,
}

impl ForwardCounts {
    pub(crate) fn new(seed: &Domains, pattern_count: usize) -> Self {
        Self {
            counts: (0..pattern_count).map(|q| seed.size(q) as u32).collect(),
        }
    }

    /// Account for `t` being consumed while `p` holds it. Returns false when
    /// some unassigned vertex just lost its last unused candidate.
    pub(crate) fn on_assign(
        &mut self,
        seed: &Domains,
        assignment: &Assignment,
        p: usize,
        t: usize,
    ) -> bool {
        let mut viable = true;
        for (q, count) in self.counts.iter_mut().enumerate() {
            if q == p || assignment.is_assigned(q) || !seed.contains(q, t) {
                continue;
            }
            *count -= 1;
            if *count == 0 {
                viable = false;
            }
        }
        viable
    }

    /// Undo the bookkeeping of [`ForwardCounts::on_assign`]. Must run before
    /// the assignment itself is undone.
    pub(crate) fn on_unassign(&mut self, seed: &Domains, assignment: &Assignment, p: usize, t: usize) {
        for (q, count) in self.counts.iter_mut().enumerate() {
            if q == p || assignment.is_assigned(q) || !seed.contains(q, t) {
                continue;
            }
            *count += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sics_common::{DomainRepr, PruneLevel};
    use sics_graph::{AdjacencyList, GraphStore, Topology};

    use crate::prune::StaticPruner;

    /// Pattern: triangle. Target: square (no triangles).
    fn triangle_and_square() -> (AdjacencyList, AdjacencyList) {
        let mut p = AdjacencyList::with_vertices(Topology::Undirected, 3);
        p.add_edge(0, 1).unwrap();
        p.add_edge(1, 2).unwrap();
        p.add_edge(2, 0).unwrap();

        let mut t = AdjacencyList::with_vertices(Topology::Undirected, 4);
        t.add_edge(0, 1).unwrap();
        t.add_edge(1, 2).unwrap();
        t.add_edge(2, 3).unwrap();
        t.add_edge(3, 0).unwrap();
        (p, t)
    }

    fn seeded(repr: DomainRepr, p: &AdjacencyList, t: &AdjacencyList) -> Domains {
        let pruner = StaticPruner::build(PruneLevel::Off, p, t);
        Domains::seed(repr, p, t, &pruner)
    }

    #[test]
    fn forward_checking_prunes_neighbors_and_injectivity() {
        let (p, t) = triangle_and_square();
        for repr in [DomainRepr::List, DomainRepr::Bitset] {
            let adj = TargetAdjacency::build(repr, &t);
            let mut domains = seeded(repr, &p, &t);
            let mut assignment = Assignment::new(3, 4);
            assignment.assign(0, 0, 0);

            let outcome =
                forward_check_full(&mut domains, &assignment, &p, &adj, 0, 0);
            assert!(matches!(outcome, Outcome::Consistent));
            // Unassigned neighbors of pattern 0 keep only the square
            // neighbors of target 0, minus 0 itself.
            assert_eq!(domains.values(1), vec![1, 3]);
            assert_eq!(domains.values(2), vec![1, 3]);
        }
    }

    #[test]
    fn ac1_exposes_the_missing_triangle() {
        // After assigning nothing, AC1 alone cannot refute the triangle in
        // a square (every value keeps a pairwise neighbor), so it stays
        // consistent; forward checking then shrinks domains to the point
        // where AC1 finds the dead end.
        let (p, t) = triangle_and_square();
        let repr = DomainRepr::Bitset;
        let adj = TargetAdjacency::build(repr, &t);
        let mut domains = seeded(repr, &p, &t);
        let mut assignment = Assignment::new(3, 4);

        let outcome = ac1(&mut domains, &assignment, &p, &adj);
        assert!(matches!(outcome, Outcome::Consistent));

        assignment.assign(0, 0, 0);
        let outcome = forward_check_full(&mut domains, &assignment, &p, &adj, 0, 0);
        assert!(matches!(outcome, Outcome::Consistent));
        // D(1) = D(2) = {1, 3}, but 1 and 3 are not adjacent in the square:
        // no support survives.
        let outcome = ac1(&mut domains, &assignment, &p, &adj);
        assert!(matches!(outcome, Outcome::DeadEnd { .. }));
    }

    #[test]
    fn forward_counts_trip_on_exhausted_vertices() {
        // Pattern: two isolated vertices; target: one vertex is the only
        // candidate for both once the other is consumed.
        let p = AdjacencyList::with_vertices(Topology::Undirected, 2);
        let t = AdjacencyList::with_vertices(Topology::Undirected, 1);
        // Only one target vertex: both pattern vertices compete for it.
        let seed = seeded(DomainRepr::List, &p, &t);
        let mut counts = ForwardCounts::new(&seed, 2);
        let mut assignment = Assignment::new(2, 1);

        assignment.assign(0, 0, 0);
        assert!(!counts.on_assign(&seed, &assignment, 0, 0));
        counts.on_unassign(&seed, &assignment, 0, 0);
        assignment.unassign(0, 0);
        assert_eq!(counts.counts, vec![1, 1]);
    }

    #[test]
    fn precount_matches_forward_count_semantics() {
        let p = AdjacencyList::with_vertices(Topology::Undirected, 2);
        let t = AdjacencyList::with_vertices(Topology::Undirected, 2);
        let seed = seeded(DomainRepr::List, &p, &t);
        let mut assignment = Assignment::new(2, 2);
        assert!(precount_holds(&seed, &assignment, 2));
        assignment.assign(0, 0, 0);
        assert!(precount_holds(&seed, &assignment, 2));
        assignment.assign(1, 1, 1);
        assert!(precount_holds(&seed, &assignment, 2));
    }

    #[test]
    fn all_different_needs_enough_distinct_values() {
        let p = AdjacencyList::with_vertices(Topology::Undirected, 3);
        let t = AdjacencyList::with_vertices(Topology::Undirected, 2);
        let domains = seeded(DomainRepr::Bitset, &p, &t);
        let assignment = Assignment::new(3, 2);
        // Three pattern vertices over a two-vertex union: pigeonhole fails.
        assert!(!all_different_holds(
            &domains,
            &assignment,
            p.vertex_count(),
            t.vertex_count()
        ));
    }
}
