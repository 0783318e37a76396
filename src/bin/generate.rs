//! Generator CLI: repeatedly generates and evaluates until difficulty
//! falls within `[diff, diff_max]`, then prints the puzzle, its
//! difficulty, and (optionally) the solution and an SVG rendering
//! (spec.md §6).
//!
//! Grounded on `examples/original_source/cmd/generator/main.go` for the
//! contract and flag set.

use clap::Parser;
use color_eyre::eyre::Result;
use rand::SeedableRng;
use sudoku_engine::{
    evaluate_difficulty, generate, generate_symmetrical, svg, text, StdRng, Topology,
};

/// Generate a Sudoku puzzle with a unique solution in a target difficulty band.
#[derive(Parser, Debug)]
#[command(name = "sudoku-generate")]
struct Args {
    /// Generate with 180-degree rotational symmetry.
    #[arg(long)]
    sym: bool,

    /// Target hint count to aim for.
    #[arg(long, default_value_t = 28)]
    hint_count: usize,

    /// Minimum acceptable difficulty.
    #[arg(long, default_value_t = 1.0)]
    diff: f64,

    /// Maximum acceptable difficulty.
    #[arg(long, default_value_t = 5.0)]
    diff_max: f64,

    /// RNG seed; omit for a fresh ThreadRng-seeded run each time.
    #[arg(long)]
    seed: Option<u64>,

    /// Write an SVG rendering of the accepted puzzle to this path.
    #[arg(long, value_name = "PATH")]
    svg_out: Option<String>,

    /// Also print the solution.
    #[arg(long)]
    show_solution: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let args = Args::parse();
    let topo = Topology::get();

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let mut rng = StdRng(rand::rngs::StdRng::seed_from_u64(seed));
    log::info!("seed={seed}");

    let mut rejections = 0u64;
    loop {
        let generated = if args.sym {
            generate_symmetrical(topo, args.hint_count, &mut rng)?
        } else {
            generate(topo, args.hint_count, &mut rng)?
        };

        let difficulty = evaluate_difficulty(topo, &generated.puzzle)?;
        if difficulty >= args.diff && difficulty <= args.diff_max {
            println!("{}", text::display(&generated.puzzle));
            println!("difficulty: {difficulty:.2}");
            if args.show_solution {
                println!("solution: {}", text::display_as_input(&generated.solution));
            }
            if let Some(path) = &args.svg_out {
                std::fs::write(path, svg::render(&generated.puzzle, difficulty))?;
                log::info!("wrote SVG to {path}");
            }
            return Ok(());
        }

        rejections += 1;
        if rejections % 10 == 0 {
            log::info!("rejected {rejections} candidates so far (last difficulty {difficulty:.2})");
        }
    }
}
