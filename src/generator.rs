//! Puzzle generation: synthesize a full random solution, then remove hints
//! while preserving a unique solution (spec.md §4.4).

use crate::digitset::DigitSet;
use crate::error::EngineError;
use crate::rng::Rng;
use crate::search::{solve, solve_all, NoopStats, SolveOptions};
use crate::topology::Topology;
use crate::values::Values;

/// A generated puzzle together with the solved board it was derived from.
#[derive(Debug, Clone)]
pub struct Generated {
    /// The puzzle: a board with some squares blanked, known to have a
    /// unique solution.
    pub puzzle: Values,
    /// The unique solution to `puzzle`.
    pub solution: Values,
}

fn solved_random_board(topo: &Topology, rng: &mut impl Rng) -> Result<Values, EngineError> {
    let (full, solved) = solve(
        topo,
        &Values::empty(),
        SolveOptions { randomize: true },
        rng,
        &mut NoopStats,
    );
    if !solved || !full.is_solved() {
        // Per spec.md §4.4: any failure here is a bug in the solver or RNG,
        // not a user error.
        return Err(EngineError::InternalBug(
            "solve(randomize=true) failed to produce a solved board from an empty board".into(),
        ));
    }
    Ok(full)
}

/// Generates a puzzle with at most `hint_count` hints and a unique
/// solution. May return a puzzle with more hints than requested if the
/// permutation of squares is exhausted first (spec.md §4.4 step 4).
pub fn generate(
    topo: &Topology,
    hint_count: usize,
    rng: &mut impl Rng,
) -> Result<Generated, EngineError> {
    let solution = solved_random_board(topo, rng)?;
    let mut puzzle = solution.clone();
    let mut count = 81usize;

    let mut order: Vec<usize> = (0..81).collect();
    rng.shuffle(&mut order);

    for sq in order {
        let saved = puzzle[sq];
        puzzle[sq] = DigitSet::full();

        let solutions = solve_all(topo, &puzzle, 2);
        match solutions.len() {
            0 => {
                return Err(EngineError::InternalBug(format!(
                    "blanking square {sq} of a solved board left zero solutions"
                )));
            }
            1 => {
                count -= 1;
                if count <= hint_count {
                    return Ok(Generated { puzzle, solution });
                }
            }
            _ => {
                // Roll back; count is untouched since it was never decremented.
                puzzle[sq] = saved;
            }
        }
    }

    Ok(Generated { puzzle, solution })
}

/// Generates a puzzle with 180°-rotational symmetry in its hint pattern
/// (spec.md §4.4). Like [`generate`], may overshoot `hint_count`.
pub fn generate_symmetrical(
    topo: &Topology,
    hint_count: usize,
    rng: &mut impl Rng,
) -> Result<Generated, EngineError> {
    const CENTER: usize = 40;

    let solution = solved_random_board(topo, rng)?;
    let mut puzzle = solution.clone();
    let mut count = 81usize;

    let mut order: Vec<usize> = (0..=CENTER).collect();
    rng.shuffle(&mut order);

    for sq in order {
        let mirror = 80 - sq;
        let saved_sq = puzzle[sq];
        let saved_mirror = puzzle[mirror];
        puzzle[sq] = DigitSet::full();
        if mirror != sq {
            puzzle[mirror] = DigitSet::full();
        }

        let solutions = solve_all(topo, &puzzle, 2);
        match solutions.len() {
            0 => {
                return Err(EngineError::InternalBug(format!(
                    "blanking square(s) {sq}/{mirror} of a solved board left zero solutions"
                )));
            }
            1 => {
                count -= if sq == CENTER { 1 } else { 2 };
                if count <= hint_count {
                    return Ok(Generated { puzzle, solution });
                }
            }
            _ => {
                puzzle[sq] = saved_sq;
                puzzle[mirror] = saved_mirror;
            }
        }
    }

    Ok(Generated { puzzle, solution })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng<rand::rngs::StdRng> {
        StdRng(rand::rngs::StdRng::seed_from_u64(seed))
    }

    #[test]
    fn generated_puzzle_has_unique_solution_matching_solution() {
        let topo = Topology::get();
        let Generated { puzzle, solution } = generate(topo, 28, &mut rng(10)).unwrap();
        let solutions = solve_all(topo, &puzzle, -1);
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0], solution);
    }

    #[test]
    fn generated_puzzle_respects_hint_count_upper_bound() {
        let topo = Topology::get();
        let Generated { puzzle, .. } = generate(topo, 30, &mut rng(11)).unwrap();
        // generate() stops as soon as count <= hint_count, so the puzzle
        // has at most hint_count hints (it may stop exactly there).
        assert!(puzzle.hint_count() <= 30);
    }

    #[test]
    fn symmetrical_generation_preserves_point_symmetry() {
        let topo = Topology::get();
        let Generated { puzzle, .. } = generate_symmetrical(topo, 28, &mut rng(12)).unwrap();
        for i in 0..=40 {
            let a = puzzle[i].size() == 1;
            let b = puzzle[80 - i].size() == 1;
            assert_eq!(a, b, "square {i} and its mirror {} disagree", 80 - i);
        }
    }

    #[test]
    fn symmetrical_generation_has_unique_solution() {
        let topo = Topology::get();
        let Generated { puzzle, solution } = generate_symmetrical(topo, 28, &mut rng(13)).unwrap();
        let solutions = solve_all(topo, &puzzle, -1);
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0], solution);
    }
}
