//! The full puzzle state and its cascading assignment operation.

use std::{
    collections::VecDeque,
    fmt::{self, Display},
};

use crate::{digit::Digit, digit_set::DigitSet, house::House, position::Position};

/// Error raised when the starting clues already violate the sudoku rules.
///
/// This is the only non-recoverable failure: it is reported before any
/// solving begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidPuzzle {
    /// A clue value was outside the range 0-9.
    #[display("clue {value} at {pos} is out of range 0-9")]
    ValueOutOfRange {
        /// Position of the offending clue.
        pos: Position,
        /// The offending value.
        value: u8,
    },
    /// The same digit was given twice in one row, column, or box.
    #[display("duplicate clue {digit} in {house}")]
    DuplicateClue {
        /// The house containing the duplicate.
        house: House,
        /// The duplicated digit.
        digit: Digit,
    },
}

/// Error raised by [`Grid::assign`].
///
/// Both variants are recoverable from the solver's point of view: they mark
/// the current search branch as dead, not the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AssignError {
    /// An unassigned cell was left with no remaining candidate.
    #[display("cell {pos} has no remaining candidate")]
    Contradiction {
        /// The starved cell.
        pos: Position,
    },
    /// A cell that already holds a value was assigned a different one.
    #[display("cell {pos} already holds {current}, cannot assign {requested}")]
    Conflict {
        /// The cell being reassigned.
        pos: Position,
        /// The value the cell already holds.
        current: Digit,
        /// The conflicting value.
        requested: Digit,
    },
}

/// One cell of the arena: an assigned digit, or a set of candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    value: Option<Digit>,
    candidates: DigitSet,
}

/// The full puzzle state: 81 cells plus the known-digit set of each house.
///
/// Cells live in one flat arena addressed by [`Position::cell_index`];
/// houses are index-based views over it, so there is no cell↔group
/// reference cycle. For every unassigned cell the invariant holds that its
/// candidates equal [`DigitSet::FULL`] minus the union of its three houses'
/// known sets.
///
/// The grid is `Clone`; backtracking search clones it per guess so that
/// failed branches can simply be dropped.
///
/// # Examples
///
/// ```
/// use nanpure_core::{Digit, Grid, Position};
///
/// let mut clues = [[0_u8; 9]; 9];
/// clues[0][0] = 5;
/// let grid = Grid::from_clues(&clues)?;
///
/// assert_eq!(grid.value(Position::new(0, 0)), Some(Digit::D5));
/// assert!(!grid.candidates(Position::new(8, 0)).contains(Digit::D5));
/// # Ok::<(), nanpure_core::InvalidPuzzle>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; 81],
    known: [DigitSet; 27],
}

impl Grid {
    /// Builds a grid from a 9×9 array of clue values, where 0 marks an
    /// empty cell and 1-9 are given digits.
    ///
    /// Known sets are seeded from the clues and every empty cell's
    /// candidates are reduced to the digits not yet present in its row,
    /// column, or box. No forced assignments are made here; driving the
    /// elimination to its closure is the solver's propagation step, so a
    /// duplicate-free clue set always constructs successfully even when it
    /// admits no solution.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPuzzle`] if a value is outside 0-9 or a digit
    /// appears twice in one house.
    pub fn from_clues(clues: &[[u8; 9]; 9]) -> Result<Self, InvalidPuzzle> {
        let mut grid = Self {
            cells: [Cell {
                value: None,
                candidates: DigitSet::FULL,
            }; 81],
            known: [DigitSet::EMPTY; 27],
        };

        for pos in Position::ALL {
            let value = clues[usize::from(pos.y())][usize::from(pos.x())];
            match value {
                0 => {}
                1..=9 => {
                    let digit = Digit::from_value(value);
                    for house in pos.houses() {
                        if !grid.known[house.index()].insert(digit) {
                            return Err(InvalidPuzzle::DuplicateClue { house, digit });
                        }
                    }
                    let cell = &mut grid.cells[pos.cell_index()];
                    cell.value = Some(digit);
                    cell.candidates = DigitSet::from_elem(digit);
                }
                _ => return Err(InvalidPuzzle::ValueOutOfRange { pos, value }),
            }
        }

        for pos in Position::ALL {
            if grid.cells[pos.cell_index()].value.is_some() {
                continue;
            }
            let mut excluded = DigitSet::EMPTY;
            for house in pos.houses() {
                excluded |= grid.known[house.index()];
            }
            grid.cells[pos.cell_index()].candidates = DigitSet::FULL.difference(excluded);
        }

        Ok(grid)
    }

    /// Assigns a digit to a cell and cascades the consequences.
    ///
    /// The digit is added to the known set of the cell's three houses and
    /// removed from the candidates of every unassigned peer. Peers driven to
    /// a single candidate are queued and assigned in turn, so one call may
    /// fill many cells. The cascade runs on an explicit work queue rather
    /// than native recursion.
    ///
    /// Reassigning a cell its current value is a no-op.
    ///
    /// # Errors
    ///
    /// - [`AssignError::Conflict`] if the cell already holds a different
    ///   value.
    /// - [`AssignError::Contradiction`] if the digit is not a candidate of
    ///   the cell, or the cascade leaves some unassigned cell with no
    ///   candidates.
    ///
    /// On error the grid may have been partially updated; callers doing
    /// speculative work must operate on a clone and discard it.
    pub fn assign(&mut self, pos: Position, digit: Digit) -> Result<(), AssignError> {
        let mut queue = VecDeque::new();
        queue.push_back((pos, digit));

        while let Some((pos, digit)) = queue.pop_front() {
            let cell = &self.cells[pos.cell_index()];
            match cell.value {
                Some(current) if current == digit => continue,
                Some(current) => {
                    return Err(AssignError::Conflict {
                        pos,
                        current,
                        requested: digit,
                    });
                }
                None => {}
            }
            if !cell.candidates.contains(digit) {
                return Err(AssignError::Contradiction { pos });
            }

            let cell = &mut self.cells[pos.cell_index()];
            cell.value = Some(digit);
            cell.candidates = DigitSet::from_elem(digit);

            for house in pos.houses() {
                self.known[house.index()].insert(digit);
                for peer in house.positions() {
                    if peer == pos {
                        continue;
                    }
                    let peer_cell = &mut self.cells[peer.cell_index()];
                    if peer_cell.value.is_some() || !peer_cell.candidates.remove(digit) {
                        continue;
                    }
                    if peer_cell.candidates.is_empty() {
                        return Err(AssignError::Contradiction { pos: peer });
                    }
                    if let Some(only) = peer_cell.candidates.as_single() {
                        queue.push_back((peer, only));
                    }
                }
            }
        }

        Ok(())
    }

    /// Returns the value assigned at a position, or `None` if the cell is
    /// still empty.
    #[must_use]
    pub fn value(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.cell_index()].value
    }

    /// Returns the candidate set at a position.
    ///
    /// For an assigned cell this is the singleton of its value.
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        self.cells[pos.cell_index()].candidates
    }

    /// Returns the set of digits already assigned within a house.
    #[must_use]
    pub fn house_known(&self, house: House) -> DigitSet {
        self.known[house.index()]
    }

    /// Returns the first unassigned position in row-major order, or `None`
    /// if the grid is complete.
    #[must_use]
    pub fn first_unassigned(&self) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| self.value(*pos).is_none())
    }

    /// Returns the number of assigned cells.
    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.value.is_some()).count()
    }

    /// Returns `true` if all 81 cells are assigned.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.assigned_count() == 81
    }

    /// Returns the grid as a 9×9 array of values, with 0 for empty cells.
    #[must_use]
    pub fn to_values(&self) -> [[u8; 9]; 9] {
        let mut values = [[0_u8; 9]; 9];
        for pos in Position::ALL {
            if let Some(digit) = self.value(pos) {
                values[usize::from(pos.y())][usize::from(pos.x())] = digit.value();
            }
        }
        values
    }
}

impl Display for Grid {
    /// Renders the grid with `_` for empty cells and separators between the
    /// 3×3 boxes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9_u8 {
            for x in 0..9_u8 {
                if x == 3 || x == 6 {
                    f.write_str(" |")?;
                }
                match self.value(Position::new(x, y)) {
                    Some(digit) => write!(f, " {digit}")?,
                    None => f.write_str(" _")?,
                }
            }
            writeln!(f)?;
            if y == 2 || y == 5 {
                writeln!(f, "{}", "-".repeat(22))?;
            }
        }
        Ok(())
    }
}
