use core::fmt;

use crate::neighbors::Adjacency;

/// A (row, column) coordinate on the grid. Rows grow downwards and columns grow to the right,
/// matching the layout in which the grid is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }

    /// The position `d_row` rows and `d_col` columns away, or [None] if that overflows `i32`.
    pub fn checked_offset(&self, d_row: i32, d_col: i32) -> Option<Position> {
        Some(Position::new(
            self.row.checked_add(d_row)?,
            self.col.checked_add(d_col)?,
        ))
    }

    /// The [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), used as the
    /// heuristic regardless of the adjacency mode.
    pub fn manhattan_distance(&self, other: &Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The [Chebyshev distance](https://en.wikipedia.org/wiki/Chebyshev_distance), the number of
    /// steps between two positions on an unobstructed 8-grid.
    pub fn chebyshev_distance(&self, other: &Position) -> u32 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Whether `other` is a single move away under the given adjacency.
    pub fn is_adjacent(&self, other: &Position, adjacency: Adjacency) -> bool {
        match (
            other.row.checked_sub(self.row),
            other.col.checked_sub(self.col),
        ) {
            (Some(d_row), Some(d_col)) => adjacency.offsets().contains(&(d_row, d_col)),
            _ => false,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Position {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Position::new(0, 0);
        let b = Position::new(3, -4);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(a.chebyshev_distance(&b), 4);
        assert_eq!(b.manhattan_distance(&a), 7);
    }

    #[test]
    fn adjacency_depends_on_mode() {
        let p = Position::new(2, 2);
        assert!(p.is_adjacent(&Position::new(1, 2), Adjacency::Four));
        assert!(!p.is_adjacent(&Position::new(1, 1), Adjacency::Four));
        assert!(p.is_adjacent(&Position::new(1, 1), Adjacency::Eight));
        // A position is never its own neighbour.
        assert!(!p.is_adjacent(&p, Adjacency::Eight));
        assert!(!p.is_adjacent(&Position::new(4, 2), Adjacency::Eight));
    }

    #[test]
    fn offsets_at_the_edge_of_i32() {
        let p = Position::new(i32::MAX, i32::MIN);
        assert_eq!(p.checked_offset(1, 0), None);
        assert_eq!(p.checked_offset(0, -1), None);
        assert_eq!(p.checked_offset(-1, 1), Some(Position::new(i32::MAX - 1, i32::MIN + 1)));
        assert!(!p.is_adjacent(&Position::new(i32::MIN, i32::MAX), Adjacency::Eight));
        assert!(p.is_adjacent(&Position::new(i32::MAX - 1, i32::MIN), Adjacency::Four));
    }

    #[test]
    fn display_and_conversion() {
        let p: Position = (3, 7).into();
        assert_eq!(p, Position::new(3, 7));
        assert_eq!(p.to_string(), "(3, 7)");
    }
}
