//! Command-line sudoku solver.
//!
//! Reads a puzzle from a file, solves it, and prints the solution. Exit
//! status reflects the outcome: 0 for solved, non-zero for unreadable or
//! invalid input and for puzzles with no solution.

use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use derive_more::{Display, Error, From};
use log::info;
use nanpure_core::{Grid, InvalidPuzzle};
use nanpure_solver::{Outcome, Solver};

use crate::parse::ParseError;

mod parse;

/// Solves a 9x9 sudoku puzzle read from a file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// File containing the starting state of the sudoku.
    start: PathBuf,
}

#[derive(Debug, Display, Error, From)]
enum CliError {
    #[display("failed to read puzzle file: {_0}")]
    Io(io::Error),
    #[display("malformed puzzle file: {_0}")]
    Parse(ParseError),
    #[display("invalid puzzle: {_0}")]
    Puzzle(InvalidPuzzle),
    #[display("puzzle has no solution")]
    Unsolvable,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let text = fs::read_to_string(&args.start)?;
    let values = parse::parse_grid(&text)?;
    let grid = Grid::from_clues(&values)?;
    info!("loaded puzzle with {} clues", grid.assigned_count());

    let (outcome, stats) = Solver::new().solve(&grid);
    info!(
        "solve finished: {} forced, {} guesses",
        stats.forced(),
        stats.guesses()
    );

    match outcome {
        Outcome::Solved(solution) => {
            println!("{solution}");
            Ok(())
        }
        Outcome::Unsolvable => Err(CliError::Unsolvable),
    }
}
