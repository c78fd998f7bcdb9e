//! Command-line front end: `solve` a puzzle or `generate` one.

use crate::config::{get_num_cores, SolverConfig, CHECK_INTERVAL, MAX_COLOR_COUNT};
use crate::coordinator::{solve, RunOutcome};
use crate::error::{InputError, Result, SolverError};
use crate::generator::{generate_puzzle, write_puzzle};
use crate::puzzle::Puzzle;
use crate::solver_data::prepare_solver_data;
use crate::util::{default_solution_dir, print_outcome, save_solution};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "eternity-solver")]
#[command(author, version, about = "Parallel backtracking solver for edge-matching puzzles")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Solve a puzzle read from a file or stdin
    Solve(SolveArgs),
    /// Print a random solvable puzzle
    Generate(GenerateArgs),
}

#[derive(Args)]
pub struct SolveArgs {
    /// Puzzle file; stdin when absent or "-"
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Number of workers (defaults to the CORES variable, then to the CPU count)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub workers: Option<u32>,

    /// Recursive steps between two checks for a peer's stop notice
    #[arg(
        long,
        default_value_t = CHECK_INTERVAL,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub check_interval: u64,

    /// Keep searching the corners left over when there are more corners than workers
    #[arg(long)]
    pub all_corners: bool,

    /// Save the solution; into DIR if given, else the documents folder
    #[arg(long, value_name = "DIR", num_args = 0..=1)]
    pub save: Option<Option<PathBuf>>,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Board dimension
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub size: u32,

    /// Number of interior colours
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u32).range(1..i64::from(MAX_COLOR_COUNT))
    )]
    pub colors: u32,

    /// Random seed for reproducible puzzles
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SolveArgs {
    pub fn config(&self) -> SolverConfig {
        let workers = self.workers.map_or_else(get_num_cores, |w| w as usize);
        SolverConfig::new(workers)
            .with_check_interval(self.check_interval)
            .with_all_corners(self.all_corners)
    }

    fn read_puzzle(&self) -> std::result::Result<Puzzle, InputError> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => Puzzle::read_from(File::open(path)?),
            _ => Puzzle::read_from(io::stdin().lock()),
        }
    }
}

pub fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Solve(args) => run_solve(&args),
        Command::Generate(args) => {
            run_generate(&args);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_solve(args: &SolveArgs) -> Result<ExitCode> {
    let puzzle = args.read_puzzle()?;
    let data = prepare_solver_data(puzzle);
    let outcome = solve(&data, &args.config())?;

    print_outcome(&outcome);
    if let Some(dir) = &args.save {
        save(&outcome, data.puzzle().size(), dir.clone());
    }
    Ok(outcome.exit_code())
}

/// Saving is best effort; a failure never changes the exit status.
fn save(outcome: &RunOutcome, size: usize, dir: Option<PathBuf>) {
    let Some(placements) = outcome.winning_report().and_then(|r| r.placements.as_ref()) else {
        return;
    };
    let saved = dir
        .or_else(default_solution_dir)
        .ok_or(SolverError::NoSaveDirectory)
        .and_then(|dir| save_solution(size, placements, &dir));
    match saved {
        Ok(path) => info!("Solution saved to {}", path.display()),
        Err(e) => warn!("{e}"),
    }
}

fn run_generate(args: &GenerateArgs) {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let puzzle = generate_puzzle(args.size as usize, args.colors, &mut rng);
    print!("{}", write_puzzle(&puzzle));
}
