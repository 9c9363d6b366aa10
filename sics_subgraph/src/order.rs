//! Vertex ordering policies.
//!
//! Static orders are resolved once against the pattern graph before the
//! search starts; MRV re-selects at every node from the current domain
//! sizes. The order-tree parent links derived here drive the parent-jump
//! policy and the lazy-low propagation subset.

use sics_common::{OrderHeuristic, VertexOrder};
use sics_graph::GraphStore;

use crate::assignment::Assignment;
use crate::domain::Domains;

/// Resolve a caller-supplied order into a pattern-vertex visitation
/// sequence. The permutation shape has already been validated.
pub(crate) fn resolve_static_order(pattern: &dyn GraphStore, order: &VertexOrder) -> Vec<u32> {
    match order {
        VertexOrder::Explicit(perm) => perm.iter().map(|&v| v as u32).collect(),
        VertexOrder::Heuristic(OrderHeuristic::DegreeDescending) => degree_descending(pattern),
        VertexOrder::Heuristic(OrderHeuristic::GreatestConstraintFirst) => {
            greatest_constraint_first(pattern)
        }
    }
}

/// `DEG`: degree descending, ties by ascending index.
fn degree_descending(pattern: &dyn GraphStore) -> Vec<u32> {
    let mut order: Vec<u32> = (0..pattern.vertex_count() as u32).collect();
    order.sort_by(|&a, &b| {
        pattern
            .degree(b as usize)
            .cmp(&pattern.degree(a as usize))
            .then(a.cmp(&b))
    });
    order
}

/// `GCF`: seed with the highest-degree vertex, then repeatedly take the
/// unplaced vertex with the most edges into the ordered prefix (ties by
/// higher degree, then ascending index).
fn greatest_constraint_first(pattern: &dyn GraphStore) -> Vec<u32> {
    let n = pattern.vertex_count();
    let mut placed = vec![false; n];
    let mut edges_into = vec![0usize; n];
    let mut order = Vec::with_capacity(n);

    let first = (0..n)
        .max_by(|&a, &b| pattern.degree(a).cmp(&pattern.degree(b)).then(b.cmp(&a)))
        .expect("non-empty pattern");
    placed[first] = true;
    order.push(first as u32);
    for &w in pattern.neighbors(first) {
        edges_into[w as usize] += 1;
    }

    while order.len() < n {
        let next = (0..n)
            .filter(|&v| !placed[v])
            .max_by(|&a, &b| {
                edges_into[a]
                    .cmp(&edges_into[b])
                    .then(pattern.degree(a).cmp(&pattern.degree(b)))
                    .then(b.cmp(&a))
            })
            .expect("unplaced vertex remains");
        placed[next] = true;
        order.push(next as u32);
        for &w in pattern.neighbors(next) {
            edges_into[w as usize] += 1;
        }
    }
    order
}

/// Per order position, the position of the latest earlier-ordered pattern
/// neighbor (the order-tree parent), if any.
pub(crate) fn order_parents(pattern: &dyn GraphStore, order: &[u32]) -> Vec<Option<usize>> {
    let mut position_of = vec![0usize; order.len()];
    for (pos, &v) in order.iter().enumerate() {
        position_of[v as usize] = pos;
    }
    order
        .iter()
        .enumerate()
        .map(|(pos, &v)| {
            pattern
                .neighbors(v as usize)
                .iter()
                .map(|&w| position_of[w as usize])
                .filter(|&p| p < pos)
                .max()
        })
        .collect()
}

/// Per order position, the pattern vertices whose order-tree parent sits at
/// that position (the lazy-low propagation subset).
pub(crate) fn order_children(order: &[u32], parents: &[Option<usize>]) -> Vec<Vec<u32>> {
    let mut children = vec![Vec::new(); order.len()];
    for (pos, parent) in parents.iter().enumerate() {
        if let Some(parent_pos) = parent {
            children[*parent_pos].push(order[pos]);
        }
    }
    children
}

/// MRV: the unassigned pattern vertex with the smallest current domain,
/// ties by ascending index. Recomputed at every search node.
pub(crate) fn select_mrv(domains: &Domains, assignment: &Assignment, pattern_count: usize) -> usize {
    (0..pattern_count)
        .filter(|&p| !assignment.is_assigned(p))
        .min_by_key(|&p| (domains.size(p), p))
        .expect("an unassigned pattern vertex remains")
}
