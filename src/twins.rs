//! Naked-pairs ("twins"), the optional auxiliary strategy from spec.md
//! §4.1: for each unit, for each pair of squares sharing an identical
//! 2-digit candidate set, eliminate those two digits from every other
//! square in the unit.
//!
//! Idempotent at the fixed point; meant to run after elimination to shrink
//! hint counts further before search takes over.

use crate::propagate::eliminate;
use crate::topology::Topology;
use crate::values::Values;
use itertools::Itertools;

/// Applies one full pass of the naked-pairs strategy across every unit.
///
/// Returns `false` if any resulting elimination contradicts.
pub fn apply_twins(topo: &Topology, values: &mut Values) -> bool {
    for unit in topo.unit_list() {
        for (&a, &b) in unit.iter().tuple_combinations() {
            let (Some(pair_a), Some(pair_b)) = (values[a].two_members(), values[b].two_members())
            else {
                continue;
            };
            if pair_a != pair_b {
                continue;
            }
            let (d1, d2) = pair_a;
            for &sq in unit {
                if sq == a || sq == b {
                    continue;
                }
                if !eliminate(topo, values, sq, d1) || !eliminate(topo, values, sq, d2) {
                    return false;
                }
            }
        }
    }
    true
}
