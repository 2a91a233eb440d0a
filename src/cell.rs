use core::fmt;
use grid_util::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A grid position addressed by row (growing downwards) and column (growing to the right).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    /// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between two cells.
    /// Admissible and consistent for unit-cost 4-directional movement.
    pub fn manhattan(&self, other: &Cell) -> u32 {
        Point::from(*self).manhattan_distance(&Point::from(*other)) as u32
    }

    /// True if the cells share an edge, i.e. differ by exactly one step along exactly one axis.
    pub fn is_orthogonally_adjacent(&self, other: &Cell) -> bool {
        self.manhattan(other) == 1
    }
}

/// Columns map to x and rows to y, as in the [grid_util] convention. Both coordinates of a
/// cell inside a [PathingGrid](crate::PathingGrid) fit in an `i32`.
impl From<Cell> for Point {
    fn from(cell: Cell) -> Point {
        Point::new(cell.col as i32, cell.row as i32)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Cell {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Cell::new(1, 4);
        let b = Cell::new(3, 0);
        assert_eq!(a.manhattan(&b), 6);
        assert_eq!(b.manhattan(&a), 6);
        assert_eq!(a.manhattan(&a), 0);
    }

    /// Diagonal neighbours are at distance 2 and therefore not adjacent.
    #[test]
    fn adjacency_excludes_diagonals() {
        let c = Cell::new(2, 2);
        assert!(c.is_orthogonally_adjacent(&Cell::new(1, 2)));
        assert!(c.is_orthogonally_adjacent(&Cell::new(2, 3)));
        assert!(!c.is_orthogonally_adjacent(&Cell::new(3, 3)));
        assert!(!c.is_orthogonally_adjacent(&c));
    }

    #[test]
    fn point_conversion_swaps_axes() {
        let p = Point::from(Cell::new(3, 7));
        assert_eq!((p.x, p.y), (7, 3));
        assert_eq!(Cell::from((3, 7)).to_string(), "(3, 7)");
    }
}
