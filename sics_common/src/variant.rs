//! The named variant registry.
//!
//! Every named entry point maps to one [`SearchConfig`] preset. Names
//! decompose left to right: search family (backtracking /
//! backjumping / conflictbackjumping / forwardchecking / lazyforwardchecking
//! / lazyforwardcheckingbackjumping), then modifiers (`low`, `parent`,
//! `bitset`, `mrv`), then the pruning filter, then a counting bound or
//! `ac1`, with the `_ind` suffix every entry point carries.

use crate::config::SearchConfig;

/// A named search configuration preset.
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    /// The public entry-point name.
    pub name: &'static str,
    /// The configuration the name expands to.
    pub config: SearchConfig,
}

const BT: SearchConfig = SearchConfig::DEFAULT;

/// All registered variants, sorted by name.
pub const VARIANTS: &[Variant] = &[
    Variant { name: "backjumping_bitset_degreeprune_ind", config: BT.backjump().bitset().degree_prune() },
    Variant { name: "backjumping_bitset_degreesequenceprune_ind", config: BT.backjump().bitset().degree_sequence_prune() },
    Variant { name: "backjumping_degreeprune_ind", config: BT.backjump().degree_prune() },
    Variant { name: "backjumping_degreesequenceprune_ind", config: BT.backjump().degree_sequence_prune() },
    Variant { name: "backjumping_ind", config: BT.backjump() },
    Variant { name: "backtracking_adjacentconsistency_forwardcount_ind", config: BT.adjacent_consistency().forward_count() },
    Variant { name: "backtracking_adjacentconsistency_ind", config: BT.adjacent_consistency() },
    Variant { name: "backtracking_adjacentconsistency_precount_ind", config: BT.adjacent_consistency().pre_count() },
    Variant { name: "backtracking_bitset_degreeprune_ind", config: BT.bitset().degree_prune() },
    Variant { name: "backtracking_bitset_degreesequenceprune_ind", config: BT.bitset().degree_sequence_prune() },
    Variant { name: "backtracking_degreeprune_adjacentconsistency_forwardcount_ind", config: BT.degree_prune().adjacent_consistency().forward_count() },
    Variant { name: "backtracking_degreeprune_adjacentconsistency_ind", config: BT.degree_prune().adjacent_consistency() },
    Variant { name: "backtracking_degreeprune_adjacentconsistency_precount_ind", config: BT.degree_prune().adjacent_consistency().pre_count() },
    Variant { name: "backtracking_degreeprune_ind", config: BT.degree_prune() },
    Variant { name: "backtracking_degreesequenceprune_ind", config: BT.degree_sequence_prune() },
    Variant { name: "backtracking_forwardcount_ind", config: BT.forward_count() },
    Variant { name: "backtracking_ind", config: BT },
    Variant { name: "backtracking_parent_adjacentconsistency_forwardcount_ind", config: BT.parent_jump().adjacent_consistency().forward_count() },
    Variant { name: "backtracking_parent_adjacentconsistency_ind", config: BT.parent_jump().adjacent_consistency() },
    Variant { name: "backtracking_parent_adjacentconsistency_precount_ind", config: BT.parent_jump().adjacent_consistency().pre_count() },
    Variant { name: "backtracking_parent_degreeprune_adjacentconsistency_forwardcount_ind", config: BT.parent_jump().degree_prune().adjacent_consistency().forward_count() },
    Variant { name: "backtracking_parent_degreeprune_adjacentconsistency_ind", config: BT.parent_jump().degree_prune().adjacent_consistency() },
    Variant { name: "backtracking_parent_degreeprune_adjacentconsistency_precount_ind", config: BT.parent_jump().degree_prune().adjacent_consistency().pre_count() },
    Variant { name: "backtracking_parent_degreeprune_ind", config: BT.parent_jump().degree_prune() },
    Variant { name: "backtracking_parent_forwardcount_ind", config: BT.parent_jump().forward_count() },
    Variant { name: "backtracking_parent_ind", config: BT.parent_jump() },
    Variant { name: "conflictbackjumping_degreeprune_ind", config: BT.conflict_directed().degree_prune() },
    Variant { name: "conflictbackjumping_degreesequenceprune_ind", config: BT.conflict_directed().degree_sequence_prune() },
    Variant { name: "conflictbackjumping_ind", config: BT.conflict_directed() },
    Variant { name: "forwardchecking_bitset_degreeprune_ac1_ind", config: BT.forward_checking().bitset().degree_prune().with_ac1() },
    Variant { name: "forwardchecking_bitset_degreeprune_countingalldifferent_ind", config: BT.forward_checking().bitset().degree_prune().counting_all_different() },
    Variant { name: "forwardchecking_bitset_degreeprune_ind", config: BT.forward_checking().bitset().degree_prune() },
    Variant { name: "forwardchecking_bitset_degreesequenceprune_ac1_ind", config: BT.forward_checking().bitset().degree_sequence_prune().with_ac1() },
    Variant { name: "forwardchecking_bitset_degreesequenceprune_countingalldifferent_ind", config: BT.forward_checking().bitset().degree_sequence_prune().counting_all_different() },
    Variant { name: "forwardchecking_bitset_degreesequenceprune_ind", config: BT.forward_checking().bitset().degree_sequence_prune() },
    Variant { name: "forwardchecking_bitset_mrv_degreeprune_ac1_ind", config: BT.forward_checking().bitset().mrv().degree_prune().with_ac1() },
    Variant { name: "forwardchecking_bitset_mrv_degreeprune_countingalldifferent_ind", config: BT.forward_checking().bitset().mrv().degree_prune().counting_all_different() },
    Variant { name: "forwardchecking_bitset_mrv_degreeprune_ind", config: BT.forward_checking().bitset().mrv().degree_prune() },
    Variant { name: "forwardchecking_bitset_mrv_degreesequenceprune_ac1_ind", config: BT.forward_checking().bitset().mrv().degree_sequence_prune().with_ac1() },
    Variant { name: "forwardchecking_bitset_mrv_degreesequenceprune_countingalldifferent_ind", config: BT.forward_checking().bitset().mrv().degree_sequence_prune().counting_all_different() },
    Variant { name: "forwardchecking_bitset_mrv_degreesequenceprune_ind", config: BT.forward_checking().bitset().mrv().degree_sequence_prune() },
    Variant { name: "forwardchecking_degreeprune_ind", config: BT.forward_checking().degree_prune() },
    Variant { name: "forwardchecking_degreesequenceprune_ind", config: BT.forward_checking().degree_sequence_prune() },
    Variant { name: "forwardchecking_ind", config: BT.forward_checking() },
    Variant { name: "forwardchecking_mrv_degreeprune_ind", config: BT.forward_checking().mrv().degree_prune() },
    Variant { name: "lazyforwardchecking_degreeprune_ind", config: BT.lazy_forward_checking().degree_prune() },
    Variant { name: "lazyforwardchecking_degreesequenceprune_ind", config: BT.lazy_forward_checking().degree_sequence_prune() },
    Variant { name: "lazyforwardchecking_ind", config: BT.lazy_forward_checking() },
    Variant { name: "lazyforwardchecking_low_bitset_degreeprune_ind", config: BT.lazy_forward_checking_low().bitset().degree_prune() },
    Variant { name: "lazyforwardchecking_low_bitset_degreesequenceprune_ind", config: BT.lazy_forward_checking_low().bitset().degree_sequence_prune() },
    Variant { name: "lazyforwardchecking_low_degreeprune_ind", config: BT.lazy_forward_checking_low().degree_prune() },
    Variant { name: "lazyforwardchecking_low_degreesequenceprune_ind", config: BT.lazy_forward_checking_low().degree_sequence_prune() },
    Variant { name: "lazyforwardchecking_low_ind", config: BT.lazy_forward_checking_low() },
    Variant { name: "lazyforwardchecking_low_parent_degreeprune_ind", config: BT.lazy_forward_checking_low().parent_jump().degree_prune() },
    Variant { name: "lazyforwardchecking_low_parent_ind", config: BT.lazy_forward_checking_low().parent_jump() },
    Variant { name: "lazyforwardchecking_parent_degreeprune_ind", config: BT.lazy_forward_checking().parent_jump().degree_prune() },
    Variant { name: "lazyforwardchecking_parent_degreesequenceprune_ind", config: BT.lazy_forward_checking().parent_jump().degree_sequence_prune() },
    Variant { name: "lazyforwardchecking_parent_ind", config: BT.lazy_forward_checking().parent_jump() },
    Variant { name: "lazyforwardcheckingbackjumping_low_bitset_degreeprune_ind", config: BT.lazy_forward_checking_low().backjump().bitset().degree_prune() },
    Variant { name: "lazyforwardcheckingbackjumping_low_bitset_degreesequenceprune_ind", config: BT.lazy_forward_checking_low().backjump().bitset().degree_sequence_prune() },
];

/// Look up a variant by its entry-point name.
#[must_use]
pub fn find_variant(name: &str) -> Option<&'static Variant> {
    VARIANTS
        .binary_search_by(|v| v.name.cmp(name))
        .ok()
        .map(|i| &VARIANTS[i])
}

/// All registered entry-point names, in sorted order.
pub fn variant_names() -> impl Iterator<Item = &'static str> {
    VARIANTS.iter().map(|v| v.name)
}
