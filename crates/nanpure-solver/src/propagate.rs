//! Constraint propagation to a fixed point.

use log::trace;
use nanpure_core::{AssignError, DigitSet, Grid, House, Position};

/// Applies the hidden-single rule to one unassigned cell within one house.
///
/// Computes the digits still available to the house and the union of the
/// candidate sets of every *other* unassigned cell in it. A digit available
/// to the house but to no other cell can only go here: if exactly one such
/// digit exists, the returned set is that singleton. Otherwise the cell's
/// own candidate set is returned unchanged.
///
/// When two or more digits are exclusive to the cell the rule deliberately
/// falls back to the naive candidate set; resolving that case is left to
/// the backtracking search.
#[must_use]
pub fn forced_candidates(grid: &Grid, house: House, pos: Position) -> DigitSet {
    debug_assert!(grid.value(pos).is_none());

    let available = DigitSet::FULL.difference(grid.house_known(house));
    let mut others = DigitSet::EMPTY;
    for peer in house.positions() {
        if peer != pos && grid.value(peer).is_none() {
            others |= grid.candidates(peer);
        }
    }

    let exclusive = available.difference(others);
    if exclusive.len() == 1 {
        exclusive
    } else {
        grid.candidates(pos)
    }
}

/// Runs elimination to a fixed point.
///
/// Repeats full passes over all 27 houses, assigning every cell whose
/// [`forced_candidates`] set is a singleton (either a naked single left by
/// earlier eliminations or a hidden single within the house), until a pass
/// makes no new assignment. Each assignment cascades through
/// [`Grid::assign`], so a single pass can fill many cells.
///
/// Returns `true` if any assignment was made.
///
/// # Errors
///
/// Returns [`AssignError::Contradiction`] if the grid already contains an
/// unassigned cell with no candidates, or if an assignment cascade starves
/// one. The grid must be discarded on error.
pub fn propagate(grid: &mut Grid) -> Result<bool, AssignError> {
    for pos in Position::ALL {
        if grid.value(pos).is_none() && grid.candidates(pos).is_empty() {
            return Err(AssignError::Contradiction { pos });
        }
    }

    let mut any_progress = false;
    loop {
        let mut progress = false;
        for house in House::ALL {
            for pos in house.positions() {
                if grid.value(pos).is_some() {
                    continue;
                }
                if let Some(digit) = forced_candidates(grid, house, pos).as_single() {
                    trace!("forced {digit} at {pos} via {house}");
                    grid.assign(pos, digit)?;
                    progress = true;
                }
            }
        }
        if !progress {
            return Ok(any_progress);
        }
        any_progress = true;
    }
}
