//! Core data structures for the nanpure sudoku solver.
//!
//! This crate provides the grid and constraint model: type-safe digits,
//! candidate sets, board positions, houses (rows, columns, and 3×3 boxes),
//! and the [`Grid`] itself with its cascading assignment operation.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: A 9-bit set of digits, used for candidates and for the
//!   set of digits already placed in a house
//! - [`position`]: Board position (x, y) coordinates
//! - [`house`]: The 27 constraint groups (9 rows, 9 columns, 9 boxes)
//! - [`grid`]: The full puzzle state and its assignment cascade
//!
//! # Examples
//!
//! ```
//! use nanpure_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::from_clues(&[[0; 9]; 9])?;
//!
//! // Place a digit; peers lose it as a candidate.
//! grid.assign(Position::new(4, 4), Digit::D5)?;
//! assert!(!grid.candidates(Position::new(4, 5)).contains(Digit::D5));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{AssignError, Grid, InvalidPuzzle},
    house::House,
    position::Position,
};
