//! The depth-first search driver.
//!
//! One iterative loop over an explicit stack of decision levels interprets
//! the whole configuration space: the level stack makes backjumps a simple
//! truncation, and the per-level domain snapshot arena restores exactly the
//! propagation effects made below the rollback target.
//!
//! Invariants maintained at the loop head:
//! - the top level holds no active assignment; every level below holds one;
//! - under a domain-maintaining configuration, `current` equals the top
//!   level's entry snapshot before each trial's propagation runs;
//! - candidate lists are iterated in ascending target order, so for a fixed
//!   static order the emission sequence is deterministic.

use sics_common::{CountingBound, JumpPolicy, Propagation, Result, SearchConfig, VertexOrder};
use sics_graph::GraphStore;
use tracing::{debug, trace};

use crate::assignment::Assignment;
use crate::conflict::{Level, JumpTarget, jump_target};
use crate::domain::{Domains, TargetAdjacency};
use crate::emit::MappingSink;
use crate::order::{order_children, order_parents, resolve_static_order, select_mrv};
use crate::propagate::{
    ForwardCounts, Outcome, ac1, all_different_holds, forward_check_full, forward_check_lazy,
    forward_check_lazy_low, precount_holds,
};
use crate::prune::StaticPruner;

/// A validated search request.
pub(crate) struct SearchRequest<'a> {
    pub(crate) config: SearchConfig,
    pub(crate) pattern: &'a dyn GraphStore,
    pub(crate) target: &'a dyn GraphStore,
    /// Present exactly when the configuration uses static ordering.
    pub(crate) vertex_order: Option<&'a VertexOrder>,
}

/// Run the exhaustive search, emitting mappings through `sink` and
/// returning the embedding count.
pub(crate) fn run(request: &SearchRequest<'_>, sink: &mut MappingSink<'_>) -> Result<u64> {
    let config = request.config;
    let pattern = request.pattern;
    let target = request.target;
    let pattern_count = pattern.vertex_count();
    let target_count = target.vertex_count();

    // Injectivity needs at least as many targets as pattern vertices;
    // anything less is structural infeasibility, not an error.
    if pattern_count > target_count {
        return Ok(0);
    }

    let pruner = StaticPruner::build(config.prune, pattern, target);
    let seed = Domains::seed(config.domain, pattern, target, &pruner);
    let adjacency = TargetAdjacency::build(config.domain, target);

    let static_order = request
        .vertex_order
        .map(|order| resolve_static_order(pattern, order));
    let parents = static_order
        .as_ref()
        .map(|order| order_parents(pattern, order));
    let children = static_order
        .as_deref()
        .zip(parents.as_deref())
        .map(|(order, parents)| order_children(order, parents));

    let maintains = config.maintains_domains();
    let mut current = maintains.then(|| seed.clone());
    let mut snapshots: Vec<Domains> = Vec::new();
    let mut forward_counts = (config.counting == CountingBound::ForwardCount)
        .then(|| ForwardCounts::new(&seed, pattern_count));
    let mut assignment = Assignment::new(pattern_count, target_count);
    let mut levels: Vec<Level> = Vec::new();
    let mut count: u64 = 0;

    debug!(
        pattern_vertices = pattern_count,
        target_vertices = target_count,
        ?config,
        "search started"
    );

    push_level(
        &mut levels,
        &mut snapshots,
        current.as_ref(),
        static_order.as_deref(),
        &seed,
        &assignment,
        pattern_count,
    );

    loop {
        let depth = levels.len() - 1;
        let Some(candidate) = next_candidate(&levels[depth]) else {
            // Exhausted: ask the policy where to resume.
            match jump_target(&levels, config.jump, parents.as_deref(), maintains) {
                JumpTarget::Done => break,
                JumpTarget::Level(resume) => {
                    trace!(from_level = depth, to_level = resume, "rolling back");
                    if config.jump == JumpPolicy::ConflictDirected
                        && !levels[depth].solution_below
                    {
                        let merged = levels[depth].conflict.clone();
                        let destination = &mut levels[resume].conflict;
                        destination.union_with(&merged);
                        destination.remove(resume);
                    }
                    while levels.len() > resume + 1 {
                        let popped = levels.pop().expect("stack is non-empty");
                        if maintains {
                            snapshots.pop();
                        }
                        if let Some(held) = popped.active {
                            release(
                                &mut assignment,
                                forward_counts.as_mut(),
                                &seed,
                                popped.var,
                                held as usize,
                            );
                        }
                    }
                    let held = levels[resume]
                        .active
                        .take()
                        .expect("rollback target holds an assignment");
                    let var = levels[resume].var;
                    release(
                        &mut assignment,
                        forward_counts.as_mut(),
                        &seed,
                        var,
                        held as usize,
                    );
                    if let Some(current) = current.as_mut() {
                        current.clone_from(&snapshots[resume]);
                    }
                    continue;
                }
            }
        };
        levels[depth].cursor += 1;
        let var = levels[depth].var;
        let t = candidate as usize;

        // Injectivity against the used targets.
        if let Some(user) = assignment.user_of(t) {
            levels[depth].record_reject(user);
            continue;
        }

        // Adjacency against the images of assigned constraints.
        let adjacency_reject = match config.propagation {
            Propagation::PlainCheck => reject_scanning_levels(&levels, target, pattern, var, t),
            _ => reject_scanning_neighbors(&assignment, target, pattern, var, t),
        };
        if let Some(level) = adjacency_reject {
            levels[depth].record_reject(level);
            continue;
        }

        assignment.assign(depth, var, t);

        // Counting bounds.
        if let Some(counts) = forward_counts.as_mut() {
            if !counts.on_assign(&seed, &assignment, var, t) {
                counts.on_unassign(&seed, &assignment, var, t);
                assignment.unassign(var, t);
                if depth > 0 {
                    levels[depth].record_reject(depth - 1);
                }
                continue;
            }
        }
        if config.counting == CountingBound::PreCount
            && !precount_holds(&seed, &assignment, pattern_count)
        {
            assignment.unassign(var, t);
            if depth > 0 {
                levels[depth].record_reject(depth - 1);
            }
            continue;
        }

        // Propagation over the maintained domains.
        if let Some(current) = current.as_mut() {
            current.clone_from(&snapshots[depth]);
            let mut outcome = match config.propagation {
                Propagation::ForwardChecking => {
                    forward_check_full(current, &assignment, pattern, &adjacency, var, t)
                }
                Propagation::LazyForwardChecking => {
                    forward_check_lazy(current, &assignment, pattern, &adjacency, var, t)
                }
                Propagation::LazyForwardCheckingLow => {
                    let subset = children
                        .as_ref()
                        .map(|c| c[depth].as_slice())
                        .unwrap_or(&[]);
                    forward_check_lazy_low(
                        current,
                        &assignment,
                        pattern,
                        &adjacency,
                        subset,
                        var,
                        t,
                    )
                }
                _ => Outcome::Consistent,
            };
            if matches!(outcome, Outcome::Consistent) && config.ac1 {
                outcome = ac1(current, &assignment, pattern, &adjacency);
            }
            let dead_all_different = matches!(outcome, Outcome::Consistent)
                && config.counting == CountingBound::AllDifferent
                && !all_different_holds(current, &assignment, pattern_count, target_count);
            match outcome {
                Outcome::DeadEnd { implicated } => {
                    release(
                        &mut assignment,
                        forward_counts.as_mut(),
                        &seed,
                        var,
                        t,
                    );
                    if let Some(level) = implicated {
                        levels[depth].record_reject(level);
                    }
                    continue;
                }
                Outcome::Consistent if dead_all_different => {
                    release(&mut assignment, forward_counts.as_mut(), &seed, var, t);
                    if depth > 0 {
                        levels[depth].record_reject(depth - 1);
                    }
                    continue;
                }
                Outcome::Consistent => {}
            }
        }

        // Accepted.
        levels[depth].active = Some(candidate);
        levels[depth].accepted_any = true;

        if assignment.len() == pattern_count {
            count += 1;
            sink.emit(&assignment.pairs())?;
            for level in &mut levels {
                level.solution_below = true;
            }
            release(&mut assignment, forward_counts.as_mut(), &seed, var, t);
            levels[depth].active = None;
            continue;
        }

        push_level(
            &mut levels,
            &mut snapshots,
            current.as_ref(),
            static_order.as_deref(),
            &seed,
            &assignment,
            pattern_count,
        );
    }

    debug!(count, "search finished");
    Ok(count)
}

/// Peek the next candidate at a level without consuming it.
fn next_candidate(level: &Level) -> Option<u32> {
    level.candidates.get(level.cursor).copied()
}

/// Open the next decision level: pick its variable, snapshot the domains,
/// and materialize its candidate list from the current (or seed) domains.
fn push_level(
    levels: &mut Vec<Level>,
    snapshots: &mut Vec<Domains>,
    current: Option<&Domains>,
    static_order: Option<&[u32]>,
    seed: &Domains,
    assignment: &Assignment,
    pattern_count: usize,
) {
    let var = match static_order {
        Some(order) => order[levels.len()] as usize,
        None => select_mrv(
            current.expect("dynamic ordering maintains domains"),
            assignment,
            pattern_count,
        ),
    };
    let candidates = match current {
        Some(domains) => domains.values(var),
        None => seed.values(var),
    };
    if let Some(domains) = current {
        snapshots.push(domains.clone());
    }
    levels.push(Level::new(var, candidates, pattern_count));
}

/// Undo counting bookkeeping, then the assignment itself.
fn release(
    assignment: &mut Assignment,
    forward_counts: Option<&mut ForwardCounts>,
    seed: &Domains,
    var: usize,
    t: usize,
) {
    if let Some(counts) = forward_counts {
        counts.on_unassign(seed, assignment, var, t);
    }
    assignment.unassign(var, t);
}

/// Plain check: walk the assigned levels in chronological order and report
/// the first one whose pattern edge to `var` is not preserved.
fn reject_scanning_levels(
    levels: &[Level],
    target: &dyn GraphStore,
    pattern: &dyn GraphStore,
    var: usize,
    t: usize,
) -> Option<usize> {
    let depth = levels.len() - 1;
    levels[..depth].iter().enumerate().find_map(|(j, level)| {
        let held = level.active.expect("levels below the top hold assignments") as usize;
        (pattern.has_edge(var, level.var) && !target.has_edge(t, held)).then_some(j)
    })
}

/// Adjacent consistency: walk only the assigned pattern neighbors of `var`.
fn reject_scanning_neighbors(
    assignment: &Assignment,
    target: &dyn GraphStore,
    pattern: &dyn GraphStore,
    var: usize,
    t: usize,
) -> Option<usize> {
    pattern.neighbors(var).iter().find_map(|&w| {
        let q = w as usize;
        match assignment.target_of(q) {
            Some(held) if !target.has_edge(t, held) => assignment.level_of(q),
            _ => None,
        }
    })
}
