//! The propagator: `assign`/`eliminate`, a mutually recursive pair that
//! commits a digit and propagates the naked-single and hidden-single
//! consequences (spec.md §4.1).
//!
//! Both operations mutate `values` in place and return `false` on
//! contradiction. A `false` return may leave `values` inconsistent;
//! callers that need to keep trying alternatives operate on a clone.

use crate::digitset::DigitSet;
use crate::topology::{Square, Topology};
use crate::values::Values;

/// Commits `digit` at `square` by eliminating every other candidate
/// currently present there.
///
/// Returns `false` on contradiction. On success, `values[square] ==
/// DigitSet::singleton(digit)` and every peer of `square` has had `digit`
/// eliminated (I1-I3 re-established).
pub fn assign(topo: &Topology, values: &mut Values, square: Square, digit: u16) -> bool {
    let others = values[square].remove(digit);
    for d in others.iter() {
        if !eliminate(topo, values, square, d) {
            return false;
        }
    }
    true
}

/// Removes `digit` from `values[square]`'s candidates, propagating the
/// naked-single and hidden-single consequences.
///
/// A no-op success if `digit` was not a candidate at `square` to begin
/// with. Returns `false` on contradiction.
pub fn eliminate(topo: &Topology, values: &mut Values, square: Square, digit: u16) -> bool {
    if !values[square].contains(digit) {
        return true;
    }
    values[square] = values[square].remove(digit);

    match values[square].size() {
        0 => return false,
        1 => {
            // Naked single: the one remaining candidate can't appear at any peer.
            let remaining = values[square].single_member().expect("size() == 1");
            for &peer in topo.peers_of(square) {
                if !eliminate(topo, values, peer, remaining) {
                    return false;
                }
            }
        }
        _ => {}
    }

    // Hidden single: digit might now have exactly one home left in a unit
    // that contains square.
    for unit in topo.units_of(square) {
        let mut places = unit.iter().copied().filter(|&sq| values[sq].contains(digit));
        let Some(first) = places.next() else {
            return false;
        };
        if places.next().is_none() {
            if !assign(topo, values, first, digit) {
                return false;
            }
        }
    }

    true
}

/// Re-drives constraint propagation across a board that may have been
/// populated without it (e.g. by a non-propagating loader): for every
/// currently-singleton square, restores its candidate set to full and
/// re-runs `assign` with the committed digit.
///
/// Returns `false` on contradiction.
pub fn eliminate_all(topo: &Topology, values: &mut Values) -> bool {
    let singles: Vec<(Square, u16)> = (0..81)
        .filter_map(|sq| values[sq].single_member().map(|d| (sq, d)))
        .collect();
    for (sq, d) in singles {
        values[sq] = DigitSet::full();
        if !assign(topo, values, sq, d) {
            return false;
        }
    }
    true
}
