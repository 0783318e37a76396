//! Solver CLI: reads one board per line on stdin (spec.md §6).
//!
//! Blank lines and lines starting with `#` are skipped as comments. For
//! each accepted line, emits per-board timing; for the whole batch, prints
//! solved/attempted counts and average/max duration. With `--stats`, also
//! reports total and max search counts. `count` sub-mode reports, per
//! board, the hint count before elimination, after elimination, and after
//! the naked-pairs pass.
//!
//! Grounded on `examples/original_source/cmd/solver/main.go` for the
//! contract and on the teacher's `tinyCatzilla-sudoku/src/main.rs` for the
//! "thin binary, `std::time::Instant` timing, `csv::Writer` report" idiom.

use clap::Parser;
use color_eyre::eyre::Result;
use prettytable::{row, Table};
use std::io::{self, BufRead};
use std::time::{Duration, Instant};
use sudoku_engine::search::{with_stats, SolveOptions, Stats};
use sudoku_engine::{parse_board, solve, Topology};

/// Solve Sudoku boards read one-per-line from stdin.
#[derive(Parser, Debug)]
#[command(name = "sudoku-solve")]
struct Args {
    /// Report search-count totals and maxima in addition to timing.
    #[arg(long)]
    stats: bool,

    /// Instead of solving, report hint counts before/after elimination and
    /// after the naked-pairs pass.
    #[arg(long)]
    count: bool,

    /// Write a per-board CSV report to this path.
    #[arg(long, value_name = "PATH")]
    csv: Option<String>,
}

struct BoardResult {
    board: String,
    solved: bool,
    duration: Duration,
    num_searches: u64,
}

fn accepted_lines(input: impl BufRead) -> impl Iterator<Item = String> {
    input.lines().map_while(Result::ok).filter_map(|line| {
        let trimmed = line.trim().to_string();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            None
        } else {
            Some(trimmed)
        }
    })
}

fn run_count_mode(topo: &Topology, lines: impl Iterator<Item = String>) -> Result<()> {
    let mut table = Table::new();
    table.add_row(row!["board", "before", "after", "after twins"]);
    for line in lines {
        let mut values = match parse_board(topo, &line, false) {
            Ok(v) => v,
            Err(err) => {
                log::warn!("skipping unparseable board {line:?}: {err}");
                continue;
            }
        };
        let before = values.hint_count();
        if !sudoku_engine::eliminate_all(topo, &mut values) {
            log::warn!("contradiction in board {line:?} during elimination");
            continue;
        }
        let after = values.hint_count();
        let _ = sudoku_engine::apply_twins(topo, &mut values);
        let after_twins = values.hint_count();
        table.add_row(row![line, before, after, after_twins]);
    }
    table.printstd();
    Ok(())
}

fn run_solve_mode(
    topo: &Topology,
    lines: impl Iterator<Item = String>,
    report_stats: bool,
    csv_path: Option<String>,
) -> Result<()> {
    let mut results = Vec::new();
    for line in lines {
        let values = match parse_board(topo, &line, true) {
            Ok(v) => v,
            Err(err) => {
                log::warn!("skipping unparseable board {line:?}: {err}");
                continue;
            }
        };

        let mut rng = sudoku_engine::StdRng(rand::thread_rng());
        let started = Instant::now();
        let ((_, solved), stats): (_, Stats) = with_stats(|stats| {
            solve(topo, &values, SolveOptions::default(), &mut rng, stats)
        });
        let duration = started.elapsed();

        println!("{line}: solved={solved} time={duration:?}");
        results.push(BoardResult {
            board: line,
            solved,
            duration,
            num_searches: stats.num_searches,
        });
    }

    let attempted = results.len();
    let solved = results.iter().filter(|r| r.solved).count();
    let total: Duration = results.iter().map(|r| r.duration).sum();
    let max = results.iter().map(|r| r.duration).max().unwrap_or_default();
    let avg = if attempted > 0 {
        total / attempted as u32
    } else {
        Duration::ZERO
    };

    println!("solved {solved}/{attempted}, avg={avg:?}, max={max:?}");
    if report_stats {
        let total_searches: u64 = results.iter().map(|r| r.num_searches).sum();
        let max_searches = results.iter().map(|r| r.num_searches).max().unwrap_or(0);
        println!("total_searches={total_searches}, max_searches={max_searches}");
    }

    if let Some(path) = csv_path {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["board", "solved", "duration_us", "num_searches"])?;
        for r in &results {
            writer.write_record([
                r.board.clone(),
                r.solved.to_string(),
                r.duration.as_micros().to_string(),
                r.num_searches.to_string(),
            ])?;
        }
        writer.flush()?;
    }

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let args = Args::parse();
    let topo = Topology::get();
    let lines = accepted_lines(io::stdin().lock());

    let result = if args.count {
        run_count_mode(topo, lines)
    } else {
        run_solve_mode(topo, lines, args.stats, args.csv)
    };

    if let Err(err) = &result {
        log::error!("solver run failed: {err}");
    }
    result
}
