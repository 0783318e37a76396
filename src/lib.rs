//! A 9x9 Sudoku engine: constraint-propagation assign/eliminate, a
//! backtracking search built on top of it, a heuristic difficulty
//! evaluator, and a unique-solution puzzle generator.
//!
//! The engine is single-threaded and synchronous: no operation here
//! blocks, suspends, or spawns. Randomness is never sourced internally —
//! every entry point that needs it takes an [`rng::Rng`] the caller
//! supplies and seeds.
//!
//! Text parsing/rendering and CLI drivers are thin layers over this
//! library (see `src/text.rs`, `src/svg.rs`, `src/bin/`); the hard
//! algorithmic work lives in [`propagate`], [`search`], [`difficulty`],
//! and [`generator`].

pub mod difficulty;
pub mod digitset;
pub mod error;
pub mod generator;
pub mod propagate;
pub mod rng;
pub mod search;
pub mod svg;
pub mod text;
pub mod topology;
pub mod twins;
pub mod values;

pub use difficulty::evaluate_difficulty;
pub use digitset::DigitSet;
pub use error::EngineError;
pub use generator::{generate, generate_symmetrical, Generated};
pub use propagate::{assign, eliminate, eliminate_all};
pub use rng::{Rng, StdRng};
pub use search::{solve, solve_all, with_stats, SolveOptions, Stats, StatsSink};
pub use text::{display, display_as_input, parse_board};
pub use topology::Topology;
pub use twins::apply_twins;
pub use values::Values;
