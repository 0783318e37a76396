//! Error kinds produced at the boundaries of the engine (spec.md §7).
//!
//! The propagator itself never allocates an error: `assign`/`eliminate`
//! return `bool` and let callers decide whether failure is expected (search
//! backtracks silently) or not (parsing and the difficulty evaluator
//! surface it here).

use thiserror::Error;

/// Errors produced by the engine's boundary operations.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EngineError {
    /// Propagation reduced some square's candidates to empty, or a unit
    /// lost every position for a digit.
    #[error("contradiction: board has no legal assignment")]
    Contradiction,

    /// Text input did not yield exactly 81 significant characters.
    #[error("bad board length: found {found} significant characters, want 81")]
    BadLength {
        /// The number of significant characters actually found.
        found: usize,
    },

    /// `solve`/`solve_all` found no solution where one was required.
    #[error("board is unsolvable")]
    Unsolvable,

    /// An invariant the engine itself is responsible for was violated.
    /// Fatal; not recoverable by the caller.
    #[error("internal bug: {0}")]
    InternalBug(String),
}
