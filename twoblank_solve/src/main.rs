#![doc = include_str!("../README.md")]

use twoblank::input::{read_config, read_values, validate, CONFIG_FILE_NAME, MOVES_FILE_NAME};
use twoblank::path::{write_moves, MoveCommand};
use twoblank::puzzle_sliding16x2::neighbors::board_neighbors;
use twoblank::puzzle_sliding16x2::state::State;
use twoblank::puzzle_sliding16x2::successors::scramble;
use twoblank::puzzle_sliding16x2::utils::BOARD_SIZE;
use twoblank::solver::{Solution, Solver};
use twoblank::stats::{Limited, TimeLimited};
use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(version, about = "Finds the shortest solution of the 4x4 sliding puzzle with two blanks")]
struct Cli {
    /// Configuration file with the `initState` entry
    #[arg(long, value_name = "FILE", default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// File to write the moves to
    #[arg(long, value_name = "FILE", default_value = MOVES_FILE_NAME)]
    output: PathBuf,

    /// Stop after expanding this many boards
    #[arg(long, value_name = "N")]
    max_expansions: Option<u64>,

    /// Stop after using this much CPU time
    #[arg(long, value_name = "SECONDS")]
    time_limit: Option<f64>,

    /// Print each board in one line
    #[arg(long)]
    plain: bool,

    /// Start from the goal scrambled by this many random moves instead of reading the configuration
    #[arg(long, value_name = "STEPS")]
    scramble: Option<usize>,

    /// Seed of the scrambling moves
    #[arg(long, default_value = "0")]
    seed: u64,
}

/// Returns the initial board from the configuration, or from the standard input if the configuration cannot be used.
fn initial_state(config: &Path) -> Result<State> {
    let values = match read_config(config) {
        Ok(values) => values,
        Err(err) => {
            warn!("{}: {}", config.display(), err);
            println!("invalid config file.");
            println!("input initstate manually:");
            read_values(io::stdin().lock(), BOARD_SIZE).context("cannot read initial state")?
        }
    };
    validate(&values).context("invalid initial state")
}

fn print_solution(solution: &Solution, plain: bool) {
    for state in &solution.path {
        if plain {
            println!("{}", state.line());
        } else {
            print!("{}", state);
            println!("------------");
        }
    }
    println!("{} steps.", solution.len());
    println!("{}", solution.moves.iter().map(MoveCommand::to_string).collect::<Vec<_>>().join(", "));
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let start = match cli.scramble {
        Some(steps) => scramble(&board_neighbors(), &mut ChaCha8Rng::seed_from_u64(cli.seed), steps),
        None => initial_state(&cli.config)?
    };
    info!("initial state: {}", start.line());

    let time_limit = match cli.time_limit {
        Some(seconds) => Duration::try_from_secs_f64(seconds).context("invalid time limit")?,
        None => Duration::MAX
    };
    let mut stats = (
        Limited::with_limit(cli.max_expansions.unwrap_or(u64::MAX)),
        TimeLimited::with_budget(time_limit)
    );
    let solution = Solver::new().solve_stats(start, &mut stats);
    info!("search took {:.3} s of CPU time, expanded {} boards, generated {}, dropped {} duplicates",
          stats.1.elapsed().as_secs_f64(),
          stats.0.stats.expanded, stats.0.stats.generated, stats.0.stats.duplicates);
    if stats.1.exceeded() {
        warn!("time limit of {:?} exceeded", time_limit);
    }
    let solution = solution.context("solution not found")?;

    print_solution(&solution, cli.plain);
    if let Err(err) = write_moves(&cli.output, &solution.moves) {
        warn!("cannot write {}: {}", cli.output.display(), err);
        println!("failed to open output file");
    }
    Ok(())
}
