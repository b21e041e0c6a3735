//! Sudoku solving engine for nanpure.
//!
//! Two layers sit on top of the [`nanpure_core`] grid model:
//!
//! 1. [`propagate`]: constraint propagation run to a fixed point. Each pass
//!    applies the hidden-single rule to every unassigned cell of every
//!    house; assignments cascade naked singles through the grid's work
//!    queue.
//! 2. [`Solver`]: depth-first backtracking search. When propagation stalls,
//!    the first unassigned cell (row-major) is guessed, one candidate at a
//!    time in ascending order, each on an independent clone of the grid.
//!
//! Contradictions found inside a branch are converted to
//! [`Outcome::Unsolvable`] at the branch boundary; they never escape the
//! solver.
//!
//! # Examples
//!
//! ```
//! use nanpure_core::Grid;
//! use nanpure_solver::{Outcome, Solver};
//!
//! let grid = Grid::from_clues(&[[0; 9]; 9])?;
//! let (outcome, stats) = Solver::new().solve(&grid);
//!
//! match outcome {
//!     Outcome::Solved(solution) => assert!(solution.is_complete()),
//!     Outcome::Unsolvable => unreachable!("the empty grid is solvable"),
//! }
//! println!("{} forced, {} guessed", stats.forced(), stats.guesses());
//! # Ok::<(), nanpure_core::InvalidPuzzle>(())
//! ```

pub mod propagate;
pub mod solver;

pub use self::{
    propagate::{forced_candidates, propagate},
    solver::{Outcome, SolveStats, Solver},
};
