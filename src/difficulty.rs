//! Heuristic difficulty scoring from four sub-scores (spec.md §4.3).
//!
//! Band constants are the "documented final set" tabulated in spec.md
//! §4.3, not the differing values found in
//! `examples/original_source/difficulty.go` (see spec.md §9 and
//! `DESIGN.md`).

use crate::error::EngineError;
use crate::propagate::eliminate_all;
use crate::rng::StdRng;
use crate::search::{solve, SolveOptions};
use crate::topology::Topology;
use crate::values::Values;
use rand::SeedableRng;

const RANDOMIZED_SOLVE_TRIALS: usize = 10;

fn band_before(hints: usize) -> f64 {
    if hints > 50 {
        1.0
    } else if hints > 35 {
        2.0
    } else if hints > 31 {
        3.0
    } else if hints > 27 {
        4.0
    } else {
        5.0
    }
}

fn band_after(hints: usize) -> f64 {
    if hints > 55 {
        1.0
    } else if hints > 42 {
        2.0
    } else if hints > 37 {
        3.0
    } else if hints > 33 {
        4.0
    } else {
        5.0
    }
}

fn band_min_hints(min_hints: usize) -> f64 {
    match min_hints {
        m if m >= 5 => 1.0,
        4 => 2.0,
        3 => 3.0,
        m if m >= 1 => 4.0,
        _ => 5.0,
    }
}

fn band_avg_searches(avg: f64) -> f64 {
    if avg <= 1.0 {
        1.0
    } else if avg < 3.0 {
        2.0
    } else if avg < 10.0 {
        3.0
    } else if avg < 40.0 {
        4.0
    } else {
        5.0
    }
}

fn min_hints_over_rows_and_cols(topo: &Topology, values: &Values) -> usize {
    let mut min_hints = 9;
    // Rows are unit_list[0..9], columns are unit_list[9..18].
    for unit in topo.unit_list()[0..18].iter() {
        let count = unit.iter().filter(|&&sq| values[sq].size() == 1).count();
        min_hints = min_hints.min(count);
    }
    min_hints
}

/// Scores the difficulty of `values` in `[1.0, 5.0]`.
///
/// Does not leave `values` modified as observed by the caller (propagation
/// and the randomized solves operate on internal clones).
pub fn evaluate_difficulty(topo: &Topology, values: &Values) -> Result<f64, EngineError> {
    let hints_before = values.hint_count();
    let min_hints = min_hints_over_rows_and_cols(topo, values);

    let mut after = values.clone();
    if !eliminate_all(topo, &mut after) {
        return Err(EngineError::Contradiction);
    }
    let hints_after = after.hint_count();

    let mut total_searches: u64 = 0;
    for trial in 0..RANDOMIZED_SOLVE_TRIALS {
        let mut rng = StdRng(rand::rngs::StdRng::seed_from_u64(trial as u64));
        let ((_, solved), stats) = crate::search::with_stats(|stats| {
            solve(topo, &after, SolveOptions { randomize: true }, &mut rng, stats)
        });
        if !solved {
            return Err(EngineError::Unsolvable);
        }
        total_searches += stats.num_searches;
    }
    let avg_searches = total_searches as f64 / RANDOMIZED_SOLVE_TRIALS as f64;

    let h_before = band_before(hints_before);
    let h_after = band_after(hints_after);
    let h_min = band_min_hints(min_hints);
    let s_avg = band_avg_searches(avg_searches);

    Ok(0.5 * h_after + 0.3 * h_before + 0.05 * h_min + 0.15 * s_avg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_board_scores_exactly_one() {
        let topo = Topology::get();
        let mut rng = StdRng(rand::rngs::StdRng::seed_from_u64(1));
        let (solved, ok) = solve(
            topo,
            &Values::empty(),
            SolveOptions { randomize: true },
            &mut rng,
            &mut NoopStats,
        );
        assert!(ok);
        let score = evaluate_difficulty(topo, &solved).unwrap();
        assert_eq!(score, 1.0);
    }

    #[test]
    fn band_functions_partition_their_domains() {
        assert_eq!(band_before(60), 1.0);
        assert_eq!(band_before(27), 5.0);
        assert_eq!(band_after(60), 1.0);
        assert_eq!(band_after(20), 5.0);
        assert_eq!(band_min_hints(9), 1.0);
        assert_eq!(band_min_hints(0), 5.0);
        assert_eq!(band_avg_searches(0.5), 1.0);
        assert_eq!(band_avg_searches(100.0), 5.0);
    }

    #[test]
    fn evaluate_difficulty_does_not_mutate_input() {
        let topo = Topology::get();
        let mut rng = StdRng(rand::rngs::StdRng::seed_from_u64(2));
        let (solved, _) = solve(
            topo,
            &Values::empty(),
            SolveOptions { randomize: true },
            &mut rng,
            &mut NoopStats,
        );
        let mut v = solved.clone();
        // Blank one square so evaluation has real work to do.
        v[0] = crate::digitset::DigitSet::full();
        let before = v.clone();
        let _ = evaluate_difficulty(topo, &v);
        assert_eq!(v, before);
    }
}
