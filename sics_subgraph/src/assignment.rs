//! The injective partial mapping built up during search.

/// Pattern-to-target assignment state for one search call.
///
/// Tracks, per pattern vertex, its target and decision level, and per target
/// vertex the level that consumed it (the latter feeds conflict attribution
/// for the backjumping policies).
#[derive(Debug)]
pub(crate) struct Assignment {
    target_of: Vec<Option<u32>>,
    level_of: Vec<Option<u32>>,
    used_by_level: Vec<Option<u32>>,
    assigned: usize,
}

impl Assignment {
    pub(crate) fn new(pattern_count: usize, target_count: usize) -> Self {
        Self {
            target_of: vec![None; pattern_count],
            level_of: vec![None; pattern_count],
            used_by_level: vec![None; target_count],
            assigned: 0,
        }
    }

    pub(crate) fn is_assigned(&self, p: usize) -> bool {
        self.target_of[p].is_some()
    }

    pub(crate) fn target_of(&self, p: usize) -> Option<usize> {
        self.target_of[p].map(|t| t as usize)
    }

    /// Decision level at which `p` was assigned.
    pub(crate) fn level_of(&self, p: usize) -> Option<usize> {
        self.level_of[p].map(|l| l as usize)
    }

    /// Decision level that consumed target `t`, if any.
    pub(crate) fn user_of(&self, t: usize) -> Option<usize> {
        self.used_by_level[t].map(|l| l as usize)
    }

    pub(crate) fn is_used(&self, t: usize) -> bool {
        self.used_by_level[t].is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.assigned
    }

    #[contracts::debug_requires(!self.is_assigned(p) && !self.is_used(t))]
    #[contracts::debug_ensures(self.is_assigned(p) && self.is_used(t))]
    pub(crate) fn assign(&mut self, level: usize, p: usize, t: usize) {
        self.target_of[p] = Some(t as u32);
        self.level_of[p] = Some(level as u32);
        self.used_by_level[t] = Some(level as u32);
        self.assigned += 1;
    }

    #[contracts::debug_requires(self.target_of(p) == Some(t))]
    #[contracts::debug_ensures(!self.is_assigned(p) && !self.is_used(t))]
    pub(crate) fn unassign(&mut self, p: usize, t: usize) {
        self.target_of[p] = None;
        self.level_of[p] = None;
        self.used_by_level[t] = None;
        self.assigned -= 1;
    }

    /// The complete mapping as `(pattern, target)` pairs, pattern ascending.
    ///
    /// Only meaningful once every pattern vertex is assigned.
    pub(crate) fn pairs(&self) -> Vec<(usize, usize)> {
        self.target_of
            .iter()
            .enumerate()
            .filter_map(|(p, t)| t.map(|t| (p, t as usize)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_tracks_levels_both_ways() {
        let mut a = Assignment::new(3, 4);
        a.assign(0, 2, 3);
        assert!(a.is_assigned(2));
        assert!(a.is_used(3));
        assert_eq!(a.target_of(2), Some(3));
        assert_eq!(a.level_of(2), Some(0));
        assert_eq!(a.user_of(3), Some(0));
        assert_eq!(a.len(), 1);

        a.unassign(2, 3);
        assert!(!a.is_assigned(2));
        assert!(!a.is_used(3));
        assert_eq!(a.len(), 0);
    }

    #[test]
    fn pairs_are_pattern_ascending() {
        let mut a = Assignment::new(3, 5);
        a.assign(0, 2, 0);
        a.assign(1, 0, 4);
        a.assign(2, 1, 2);
        assert_eq!(a.pairs(), vec![(0, 4), (1, 2), (2, 0)]);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use quickcheck::quickcheck;

    quickcheck! {
        /// Stack-disciplined assign/unassign always restores the empty state.
        fn prop_stack_discipline_restores(ops: Vec<(u8, u8)>) -> bool {
            let mut a = Assignment::new(16, 16);
            let mut stack = Vec::new();
            for (level, (p, t)) in ops.into_iter().enumerate() {
                let (p, t) = (p as usize % 16, t as usize % 16);
                if !a.is_assigned(p) && !a.is_used(t) {
                    a.assign(level, p, t);
                    stack.push((p, t));
                }
            }
            while let Some((p, t)) = stack.pop() {
                a.unassign(p, t);
            }
            a.len() == 0 && (0..16).all(|v| !a.is_assigned(v) && !a.is_used(v))
        }
    }
}
