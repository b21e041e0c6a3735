//! The 27 constraint groups of a sudoku grid.

use std::fmt::{self, Display};

use crate::position::Position;

/// A sudoku house (row, column, or 3×3 box): a group of 9 cells that must
/// contain each digit 1-9 at most once.
///
/// Houses do not own cells; they are index-based views over the grid's cell
/// arena, obtained through [`positions`](House::positions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { y: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { x: i as u8 };
            i += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// Array containing all 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns the 9 positions contained in this house, in cell-index order.
    #[must_use]
    pub fn positions(self) -> [Position; 9] {
        std::array::from_fn(|i| {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            self.position_from_cell_index(i)
        })
    }

    /// Returns this house's index (0-26) into a 27-element array, in row,
    /// column, box order matching [`House::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            House::Row { y } => usize::from(y),
            House::Column { x } => 9 + usize::from(x),
            House::Box { index } => 18 + usize::from(index),
        }
    }
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            House::Row { y } => write!(f, "row {y}"),
            House::Column { x } => write!(f, "column {x}"),
            House::Box { index } => write!(f, "box {index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order_matches_index() {
        for (i, house) in House::ALL.iter().enumerate() {
            assert_eq!(house.index(), i);
        }
        assert_eq!(House::ALL[0], House::Row { y: 0 });
        assert_eq!(House::ALL[9], House::Column { x: 0 });
        assert_eq!(House::ALL[18], House::Box { index: 0 });
    }

    #[test]
    fn test_positions() {
        assert_eq!(House::Row { y: 3 }.positions()[4], Position::new(4, 3));
        assert_eq!(House::Column { x: 6 }.positions()[8], Position::new(6, 8));
        assert_eq!(House::Box { index: 4 }.positions()[0], Position::new(3, 3));
        assert_eq!(House::Box { index: 8 }.positions()[8], Position::new(8, 8));
    }

    #[test]
    fn test_every_position_in_three_houses() {
        for pos in Position::ALL {
            let containing = House::ALL
                .iter()
                .filter(|house| house.positions().contains(&pos))
                .count();
            assert_eq!(containing, 3);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(House::Row { y: 2 }.to_string(), "row 2");
        assert_eq!(House::Column { x: 5 }.to_string(), "column 5");
        assert_eq!(House::Box { index: 8 }.to_string(), "box 8");
    }
}
