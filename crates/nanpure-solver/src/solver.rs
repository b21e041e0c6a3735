//! Depth-first backtracking search over cloned grid states.

use log::debug;
use nanpure_core::Grid;

use crate::propagate::propagate;

/// Terminal result of a solve attempt.
///
/// `Unsolvable` is an ordinary outcome, not an error: it means no
/// assignment satisfies all constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A fully assigned, consistent grid. The first solution found wins;
    /// no search for alternates is made.
    Solved(Grid),
    /// Every branch of the search space was exhausted.
    Unsolvable,
}

impl Outcome {
    /// Returns `true` for [`Outcome::Solved`].
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    /// Returns the solved grid, or `None` for [`Outcome::Unsolvable`].
    #[must_use]
    pub fn solved(self) -> Option<Grid> {
        match self {
            Self::Solved(grid) => Some(grid),
            Self::Unsolvable => None,
        }
    }
}

/// Counters collected during a solve.
///
/// `guesses() == 0` means the puzzle was cracked by propagation alone,
/// without a single speculative branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    forced: usize,
    guesses: usize,
}

impl SolveStats {
    /// Returns the number of cells filled by propagation, cascades
    /// included.
    #[must_use]
    pub const fn forced(&self) -> usize {
        self.forced
    }

    /// Returns the number of speculative branch assignments tried.
    #[must_use]
    pub const fn guesses(&self) -> usize {
        self.guesses
    }
}

/// Solves sudoku grids by propagation plus depth-first search.
///
/// Propagation runs to a fixed point first; if the grid is still
/// incomplete, the first unassigned cell in row-major order is selected and
/// each of its candidates is tried in ascending order on an independent
/// clone of the grid. Both policies are fixed, so results are
/// deterministic. Contradictions inside a branch kill only that branch.
///
/// # Examples
///
/// ```
/// use nanpure_core::Grid;
/// use nanpure_solver::{Outcome, Solver};
///
/// let mut clues = [[0_u8; 9]; 9];
/// clues[0][0] = 5;
/// let grid = Grid::from_clues(&clues)?;
///
/// let (outcome, _stats) = Solver::new().solve(&grid);
/// assert!(outcome.is_solved());
/// # Ok::<(), nanpure_core::InvalidPuzzle>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {}

impl Solver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Attempts to solve the given grid.
    ///
    /// The input grid is not modified; the solution, if any, is returned as
    /// a new grid in which every clue of the input is preserved.
    #[must_use]
    pub fn solve(&self, grid: &Grid) -> (Outcome, SolveStats) {
        let mut stats = SolveStats::default();
        let outcome = Self::search(grid.clone(), &mut stats);
        (outcome, stats)
    }

    fn search(mut grid: Grid, stats: &mut SolveStats) -> Outcome {
        let before = grid.assigned_count();
        if let Err(err) = propagate(&mut grid) {
            debug!("branch dead: {err}");
            return Outcome::Unsolvable;
        }
        stats.forced += grid.assigned_count() - before;

        let Some(pos) = grid.first_unassigned() else {
            return Outcome::Solved(grid);
        };

        for digit in grid.candidates(pos) {
            stats.guesses += 1;
            debug!("guess {digit} at {pos}");
            let mut branch = grid.clone();
            if let Err(err) = branch.assign(pos, digit) {
                debug!("guess rejected: {err}");
                continue;
            }
            if let Outcome::Solved(solution) = Self::search(branch, stats) {
                return Outcome::Solved(solution);
            }
        }
        Outcome::Unsolvable
    }
}

#[cfg(test)]
mod tests {
    use nanpure_core::{Digit, DigitSet, House, Position};

    use super::*;

    fn clues(text: &str) -> [[u8; 9]; 9] {
        let mut values = [[0_u8; 9]; 9];
        for (y, line) in text.split_whitespace().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                values[y][x] = u8::try_from(ch.to_digit(10).unwrap()).unwrap();
            }
        }
        values
    }

    fn assert_valid_solution(grid: &Grid) {
        assert!(grid.is_complete());
        for house in House::ALL {
            let mut seen = DigitSet::EMPTY;
            for pos in house.positions() {
                assert!(seen.insert(grid.value(pos).unwrap()));
            }
            assert_eq!(seen, DigitSet::FULL);
        }
    }

    const WIKI: &str = "530070000
                        600195000
                        098000060
                        800060003
                        400803001
                        700020006
                        060000280
                        000419005
                        000080079";

    const WIKI_SOLUTION: &str = "534678912
                                 672195348
                                 198342567
                                 859761423
                                 426853791
                                 713924856
                                 961537284
                                 287419635
                                 345286179";

    #[test]
    fn test_solves_by_propagation_alone() {
        let grid = Grid::from_clues(&clues(WIKI)).unwrap();
        let (outcome, stats) = Solver::new().solve(&grid);

        let solution = outcome.solved().unwrap();
        assert_valid_solution(&solution);
        assert_eq!(solution.to_values(), clues(WIKI_SOLUTION));
        assert_eq!(stats.guesses(), 0);
        assert_eq!(stats.forced(), 81 - grid.assigned_count());
    }

    #[test]
    fn test_clues_preserved_in_solution() {
        let values = clues(WIKI);
        let grid = Grid::from_clues(&values).unwrap();
        let (outcome, _) = Solver::new().solve(&grid);
        let solved = outcome.solved().unwrap().to_values();

        for (y, row) in values.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value != 0 {
                    assert_eq!(solved[y][x], value);
                }
            }
        }
    }

    #[test]
    fn test_empty_grid_is_solvable() {
        let grid = Grid::from_clues(&[[0; 9]; 9]).unwrap();
        // Branch selection is row-major first-unassigned.
        assert_eq!(grid.first_unassigned(), Some(Position::new(0, 0)));

        let (outcome, stats) = Solver::new().solve(&grid);
        let solution = outcome.solved().unwrap();
        assert_valid_solution(&solution);
        assert!(stats.guesses() > 0);
        // The first branch guesses 1 at (0, 0); that branch succeeds, so
        // the solution keeps it.
        assert_eq!(solution.value(Position::new(0, 0)), Some(Digit::D1));
    }

    #[test]
    fn test_unsolvable_grid_is_reported_not_crashed() {
        // Internally consistent, but (8, 0) has no remaining candidate:
        // row 0 needs 9 there while column 8 already holds one.
        let mut values = [[0_u8; 9]; 9];
        values[0] = [1, 2, 3, 4, 5, 6, 7, 8, 0];
        values[4][8] = 9;
        let grid = Grid::from_clues(&values).unwrap();

        let (outcome, stats) = Solver::new().solve(&grid);
        assert_eq!(outcome, Outcome::Unsolvable);
        assert_eq!(stats.guesses(), 0);
    }

    #[test]
    fn test_single_hole_needs_no_guessing() {
        let mut values = clues(WIKI_SOLUTION);
        values[4][4] = 0;
        let grid = Grid::from_clues(&values).unwrap();
        assert_eq!(
            grid.candidates(Position::new(4, 4)),
            DigitSet::from_elem(Digit::D5)
        );

        let (outcome, stats) = Solver::new().solve(&grid);
        let solution = outcome.solved().unwrap();
        assert_eq!(solution.to_values(), clues(WIKI_SOLUTION));
        assert_eq!(stats.guesses(), 0);
        assert_eq!(stats.forced(), 1);
    }

    #[test]
    fn test_search_heavy_puzzle() {
        // Inkala's "world's hardest" puzzle; propagation alone stalls.
        let values = clues(
            "800000000
             003600000
             070090200
             050007000
             000045700
             000100030
             001000068
             008500010
             090000400",
        );
        let grid = Grid::from_clues(&values).unwrap();
        let (outcome, stats) = Solver::new().solve(&grid);

        assert_valid_solution(&outcome.solved().unwrap());
        assert!(stats.guesses() > 0);
    }

    #[test]
    fn test_solved_grid_round_trips_through_construction() {
        let grid = Grid::from_clues(&clues(WIKI)).unwrap();
        let (outcome, _) = Solver::new().solve(&grid);
        let solution = outcome.solved().unwrap();

        let mut rebuilt = Grid::from_clues(&solution.to_values()).unwrap();
        assert!(!propagate(&mut rebuilt).unwrap());
        assert_eq!(rebuilt, solution);
    }
}
