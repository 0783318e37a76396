//! Backtracking search driven by the propagator, with a minimum-remaining-
//! values heuristic (spec.md §4.2).
//!
//! Per spec.md §9, stats are an explicit `StatsSink` threaded through
//! `solve`/`assign`-adjacent calls rather than a process-wide global; a
//! `NoopStats` sink is used when the caller doesn't care, and
//! [`with_stats`] is the scoped helper that guarantees a fresh counter on
//! entry and its restoration to noop on every exit path.

use crate::propagate::assign;
use crate::rng::Rng;
use crate::topology::Topology;
use crate::values::Values;

/// Options controlling a single `solve` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveOptions {
    /// Try candidate digits in a shuffled order instead of ascending.
    pub randomize: bool,
}

/// A sink that observes search progress. Implement this to collect stats;
/// [`NoopStats`] is the zero-cost default.
pub trait StatsSink {
    /// Called once per `assign` invocation.
    fn on_assign(&mut self) {}
    /// Called once per `solve` entry (including recursive re-entries).
    fn on_search(&mut self) {}
}

/// The default sink: observes nothing.
#[derive(Debug, Default)]
pub struct NoopStats;
impl StatsSink for NoopStats {}

/// A counting sink: the concrete stats collector used when stats are
/// enabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stats {
    /// Number of `assign` calls observed.
    pub num_assigns: u64,
    /// Number of `solve` entries observed.
    pub num_searches: u64,
}
impl StatsSink for Stats {
    fn on_assign(&mut self) {
        self.num_assigns += 1;
    }
    fn on_search(&mut self) {
        self.num_searches += 1;
    }
}

/// Runs `body` with a fresh [`Stats`] counter, returning `(result,
/// stats)`. The counter is always discarded on exit (including panics
/// unwinding through `body`, since it never escapes this scope) — the
/// scoped "with stats" helper named in spec.md §5/§9.
pub fn with_stats<T>(body: impl FnOnce(&mut Stats) -> T) -> (T, Stats) {
    let mut stats = Stats::default();
    let result = body(&mut stats);
    (result, stats)
}

/// Instrumented `assign`: records to `stats` and delegates to
/// [`crate::propagate::assign`].
fn assign_counted(
    topo: &Topology,
    values: &mut Values,
    sq: usize,
    digit: u16,
    stats: &mut impl StatsSink,
) -> bool {
    stats.on_assign();
    assign(topo, values, sq, digit)
}

/// Depth-first backtracking search, per spec.md §4.2.
///
/// Returns `(result, true)` on success, or `(values, false)` if no
/// solution exists. `values` is never mutated as observed by the caller
/// (P2): success and failure both clone internally before mutating.
pub fn solve(
    topo: &Topology,
    values: &Values,
    options: SolveOptions,
    rng: &mut impl Rng,
    stats: &mut impl StatsSink,
) -> (Values, bool) {
    stats.on_search();

    let Some(sq) = values.min_remaining_values_square() else {
        return (values.clone(), true);
    };

    let mut digits: Vec<u16> = values[sq].iter().collect();
    if options.randomize {
        rng.shuffle(&mut digits);
    }

    for digit in digits {
        let mut candidate = values.clone();
        if assign_counted(topo, &mut candidate, sq, digit, stats) {
            let (result, solved) = solve(topo, &candidate, options, rng, stats);
            if solved {
                return (result, true);
            }
        }
    }

    (values.clone(), false)
}

/// Enumerates up to roughly `max` solutions (an exact cap is not
/// guaranteed — see spec.md §4.2/§9). `max <= 0` means unbounded.
/// Candidate digits are always tried in ascending order; randomization is
/// not supported here.
pub fn solve_all(topo: &Topology, values: &Values, max: i64) -> Vec<Values> {
    let mut found = Vec::new();
    solve_all_inner(topo, values, max, &mut found);
    found
}

fn solve_all_inner(topo: &Topology, values: &Values, max: i64, found: &mut Vec<Values>) {
    if max > 0 && found.len() as i64 >= max {
        return;
    }

    let Some(sq) = values.min_remaining_values_square() else {
        found.push(values.clone());
        return;
    };

    for digit in values[sq].iter() {
        let mut candidate = values.clone();
        if assign(topo, &mut candidate, sq, digit) {
            solve_all_inner(topo, &candidate, max, found);
        }
        if max > 0 && found.len() as i64 >= max {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digitset::DigitSet;
    use crate::rng::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng<rand::rngs::StdRng> {
        StdRng(rand::rngs::StdRng::seed_from_u64(7))
    }

    #[test]
    fn solve_empty_board_always_succeeds() {
        let topo = Topology::get();
        let v = Values::empty();
        let mut stats = NoopStats;
        let (result, solved) = solve(
            topo,
            &v,
            SolveOptions { randomize: true },
            &mut rng(),
            &mut stats,
        );
        assert!(solved);
        assert!(result.is_solved());
    }

    #[test]
    fn solve_does_not_mutate_input() {
        let topo = Topology::get();
        let v = Values::empty();
        let before = v.clone();
        let mut stats = NoopStats;
        let _ = solve(topo, &v, SolveOptions::default(), &mut rng(), &mut stats);
        assert_eq!(v, before);
    }

    #[test]
    fn solve_reports_failure_without_mutating_on_contradiction() {
        let topo = Topology::get();
        let (solved_board, ok) = solve(
            topo,
            &Values::empty(),
            SolveOptions::default(),
            &mut rng(),
            &mut NoopStats,
        );
        assert!(ok);
        // S4: force squares 30, 31, 32 (a row within one block) to a
        // permutation that conflicts with the rest of the solved board.
        let mut v = solved_board.clone();
        v[30] = DigitSet::singleton(1);
        v[31] = DigitSet::singleton(2);
        v[32] = DigitSet::singleton(3);
        let before = v.clone();
        let mut stats = NoopStats;
        let (result, solved) = solve(topo, &v, SolveOptions::default(), &mut rng(), &mut stats);
        assert!(!solved);
        assert_eq!(result, before);
    }

    #[test]
    fn stats_count_searches_and_assigns() {
        let topo = Topology::get();
        let v = Values::empty();
        let ((_, solved), stats) = with_stats(|stats| {
            solve(topo, &v, SolveOptions::default(), &mut rng(), stats)
        });
        assert!(solved);
        assert!(stats.num_searches >= 1);
        assert!(stats.num_assigns >= 1);
    }

    #[test]
    fn solve_all_unbounded_finds_every_completion() {
        let topo = Topology::get();
        // Solve the empty board once to get any solved board, then relax
        // two cells to a shared 2-candidate set: exactly 2 completions.
        let (solved, ok) = solve(
            topo,
            &Values::empty(),
            SolveOptions::default(),
            &mut rng(),
            &mut NoopStats,
        );
        assert!(ok);
        let mut v = solved.clone();
        let d0 = solved[0].single_member().unwrap();
        let d1 = solved[1].single_member().unwrap();
        v[0] = DigitSet::singleton(d0).add(d1);
        v[1] = DigitSet::singleton(d0).add(d1);
        let sols = solve_all(topo, &v, -1);
        assert_eq!(sols.len(), 2);
        let capped = solve_all(topo, &v, 1);
        assert_eq!(capped.len(), 1);
    }

    #[test]
    fn solve_all_returns_empty_for_unsolvable() {
        let topo = Topology::get();
        let mut v = Values::empty();
        v[0] = DigitSet::EMPTY.add(1);
        v[1] = DigitSet::EMPTY.add(1);
        assert!(solve_all(topo, &v, -1).is_empty());
    }
}
