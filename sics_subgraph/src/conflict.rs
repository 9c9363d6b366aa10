//! Per-level search state and the rollback-target policies.
//!
//! A level moves through `Unvisited -> Assigned -> {Succeeded, Failed}`:
//! pushing a level is the visit, `active` marks the assigned phase, and the
//! exhaustion of its candidate list is the failure that asks the policy for
//! a rollback target. Soundness rule for exhaustive counting: a policy may
//! only skip levels whose assignments provably cannot change the failing
//! level's candidate rejections, and any level with a solution below it
//! must unwind chronologically.

use sics_common::{Bitset, JumpPolicy};

/// One decision level of the DFS stack.
pub(crate) struct Level {
    /// The pattern vertex decided at this level.
    pub(crate) var: usize,
    /// Candidate targets, ascending, fixed at level entry.
    pub(crate) candidates: Vec<u32>,
    /// Next candidate index to try.
    pub(crate) cursor: usize,
    /// The currently held target while the search is below this level.
    pub(crate) active: Option<u32>,
    /// Whether any candidate was accepted during this visit.
    pub(crate) accepted_any: bool,
    /// Deepest earlier level implicated in any rejection at this level.
    pub(crate) deepest_reject: Option<usize>,
    /// Conflict-directed backjumping: earlier levels implicated so far.
    pub(crate) conflict: Bitset,
    /// A full assignment was emitted somewhere below this level.
    pub(crate) solution_below: bool,
}

impl Level {
    pub(crate) fn new(var: usize, candidates: Vec<u32>, pattern_count: usize) -> Self {
        Self {
            var,
            candidates,
            cursor: 0,
            active: None,
            accepted_any: false,
            deepest_reject: None,
            conflict: Bitset::empty(pattern_count),
            solution_below: false,
        }
    }

    /// Record a rejection implicating the earlier level `implicated`.
    pub(crate) fn record_reject(&mut self, implicated: usize) {
        self.deepest_reject = Some(match self.deepest_reject {
            Some(existing) => existing.max(implicated),
            None => implicated,
        });
        self.conflict.insert(implicated);
    }
}

/// Where to resume after the top level exhausted its candidates.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum JumpTarget {
    /// No earlier level can change the outcome: the search is complete.
    Done,
    /// Resume candidate iteration at this level.
    Level(usize),
}

/// Compute the rollback target for the exhausted top level.
///
/// `parents` carries the static order-tree parent per level (absent under
/// dynamic ordering, which never pairs with jumping policies). When the
/// configuration maintains domains (`domains_pruned`), a leaf dead-end must
/// not jump past the levels that pruned the exhausted candidate list, so
/// the order-tree parent joins the target computation for the Gaschnig
/// policy as well.
pub(crate) fn jump_target(
    levels: &[Level],
    policy: JumpPolicy,
    parents: Option<&[Option<usize>]>,
    domains_pruned: bool,
) -> JumpTarget {
    let l = levels.len() - 1;
    if l == 0 {
        return JumpTarget::Done;
    }
    let level = &levels[l];
    let parent = parents.and_then(|p| p[l]);
    match policy {
        JumpPolicy::Chronological => JumpTarget::Level(l - 1),
        JumpPolicy::Backjump => {
            // Gaschnig: jump only from leaf dead-ends, to the deepest level
            // that certified some candidate's rejection.
            if !level.accepted_any {
                let pruner = if domains_pruned { parent } else { None };
                let target = pruner.into_iter().chain(level.deepest_reject).max();
                JumpTarget::Level(target.unwrap_or(l - 1))
            } else {
                JumpTarget::Level(l - 1)
            }
        }
        JumpPolicy::ParentJump => {
            if !level.accepted_any {
                let target = parent.into_iter().chain(level.deepest_reject).max();
                JumpTarget::Level(target.unwrap_or(l - 1))
            } else {
                JumpTarget::Level(l - 1)
            }
        }
        JumpPolicy::ConflictDirected => {
            if level.solution_below {
                return JumpTarget::Level(l - 1);
            }
            let mut conflict = level.conflict.clone();
            conflict.remove(l);
            match conflict.iter().max() {
                Some(k) => JumpTarget::Level(k),
                // Nothing earlier is implicated: the failure is intrinsic
                // and no sibling anywhere can repair it.
                None => JumpTarget::Done,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(depth: usize) -> Vec<Level> {
        (0..depth)
            .map(|i| {
                let mut level = Level::new(i, vec![0], 8);
                if i + 1 < depth {
                    level.active = Some(0);
                    level.accepted_any = true;
                }
                level
            })
            .collect()
    }

    #[test]
    fn chronological_steps_back_one() {
        let levels = stack(4);
        assert_eq!(
            jump_target(&levels, JumpPolicy::Chronological, None, false),
            JumpTarget::Level(2)
        );
    }

    #[test]
    fn backjump_uses_the_deepest_reject_from_leaf_dead_ends() {
        let mut levels = stack(5);
        levels[4].record_reject(1);
        levels[4].record_reject(0);
        assert_eq!(
            jump_target(&levels, JumpPolicy::Backjump, None, false),
            JumpTarget::Level(1)
        );

        // Once a candidate was accepted the jump degrades to chronological.
        levels[4].accepted_any = true;
        assert_eq!(
            jump_target(&levels, JumpPolicy::Backjump, None, false),
            JumpTarget::Level(3)
        );
    }

    #[test]
    fn parent_jump_never_skips_injectivity_conflicts() {
        let parents = vec![None, Some(0), Some(0), Some(1)];
        let mut levels = stack(4);
        // Structural parent says level 1, but a candidate was consumed by
        // level 2: jumping past it would lose embeddings.
        levels[3].record_reject(2);
        assert_eq!(
            jump_target(&levels, JumpPolicy::ParentJump, Some(&parents), false),
            JumpTarget::Level(2)
        );
    }

    #[test]
    fn conflict_directed_terminates_on_an_empty_set() {
        let levels = stack(3);
        assert_eq!(
            jump_target(&levels, JumpPolicy::ConflictDirected, None, false),
            JumpTarget::Done
        );
    }

    #[test]
    fn conflict_directed_goes_chronological_below_solutions() {
        let mut levels = stack(3);
        levels[2].record_reject(0);
        levels[2].solution_below = true;
        assert_eq!(
            jump_target(&levels, JumpPolicy::ConflictDirected, None, false),
            JumpTarget::Level(1)
        );
    }

    #[test]
    fn root_exhaustion_finishes_the_search() {
        let levels = stack(1);
        for policy in [
            JumpPolicy::Chronological,
            JumpPolicy::Backjump,
            JumpPolicy::ConflictDirected,
            JumpPolicy::ParentJump,
        ] {
            assert_eq!(jump_target(&levels, policy, None, false), JumpTarget::Done);
        }
    }
}
