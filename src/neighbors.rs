use smallvec::SmallVec;

use crate::grid::Grid;
use crate::position::Position;

pub const N_SMALLVEC_SIZE: usize = 8;

const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const ALL: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Which moves are allowed from a cell: the 4-neighbourhood (von Neumann) or the
/// 8-neighbourhood (Moore) which adds diagonals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Adjacency {
    Four,
    Eight,
}

impl Adjacency {
    pub fn from_diagonals(allow_diagonals: bool) -> Adjacency {
        if allow_diagonals {
            Adjacency::Eight
        } else {
            Adjacency::Four
        }
    }

    pub fn allows_diagonals(&self) -> bool {
        matches!(self, Adjacency::Eight)
    }

    /// Candidate `(d_row, d_col)` offsets, orthogonal ones first. The search pushes neighbours
    /// in this order.
    pub fn offsets(&self) -> &'static [(i32, i32)] {
        match self {
            Adjacency::Four => &ORTHOGONAL,
            Adjacency::Eight => &ALL,
        }
    }
}

/// In-bounds, non-wall neighbours of `pos` in [Adjacency::offsets] order. Diagonal moves may
/// cut corners between two walls. `pos` itself need not lie inside the grid.
pub fn neighbors(
    grid: &Grid,
    pos: Position,
    allow_diagonals: bool,
) -> SmallVec<[Position; N_SMALLVEC_SIZE]> {
    Adjacency::from_diagonals(allow_diagonals)
        .offsets()
        .iter()
        .filter_map(|&(d_row, d_col)| pos.checked_offset(d_row, d_col))
        .filter(|p| grid.can_move_to(*p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_two_or_three() {
        let grid = Grid::new(3, 3);
        let corner = Position::new(0, 0);
        assert_eq!(
            neighbors(&grid, corner, false).as_slice(),
            &[Position::new(1, 0), Position::new(0, 1)]
        );
        assert_eq!(
            neighbors(&grid, corner, true).as_slice(),
            &[Position::new(1, 0), Position::new(0, 1), Position::new(1, 1)]
        );
    }

    #[test]
    fn orthogonal_before_diagonal() {
        let grid = Grid::new(3, 3);
        let center = Position::new(1, 1);
        let expected: Vec<Position> = ALL
            .iter()
            .filter_map(|&(r, c)| center.checked_offset(r, c))
            .collect();
        assert_eq!(neighbors(&grid, center, true).to_vec(), expected);
        assert_eq!(neighbors(&grid, center, false).to_vec(), expected[..4].to_vec());
    }

    #[test]
    fn walls_excluded() {
        //  ___
        // |.#.|
        // |#..|
        // |...|
        //  ___
        let grid = Grid::from_rows(&[".#.", "#..", "..."]).unwrap();
        let center = Position::new(1, 1);
        let n = neighbors(&grid, center, true);
        assert_eq!(n.len(), 6);
        assert!(!n.contains(&Position::new(0, 1)));
        assert!(!n.contains(&Position::new(1, 0)));
        // Corner cutting between the two walls is allowed.
        assert!(n.contains(&Position::new(0, 0)));
    }

    #[test]
    fn far_outside_positions_have_no_neighbours() {
        let grid = Grid::new(3, 3);
        for pos in [
            Position::new(i32::MAX, i32::MAX),
            Position::new(i32::MIN, 0),
            Position::new(1, i32::MIN),
            Position::new(-2, -2),
        ] {
            assert!(neighbors(&grid, pos, true).is_empty());
        }
        // Just outside the border still reaches in.
        assert_eq!(
            neighbors(&grid, Position::new(-1, 0), false).as_slice(),
            &[Position::new(0, 0)]
        );
    }

    #[test]
    fn never_out_of_bounds_or_wall() {
        let grid = Grid::from_rows(&[".#..", "..#.", "#...", "...#"]).unwrap();
        for pos in grid.positions() {
            for allow_diagonals in [false, true] {
                let n = neighbors(&grid, pos, allow_diagonals);
                assert!(n.len() <= if allow_diagonals { 8 } else { 4 });
                for p in n {
                    assert!(grid.in_bounds(p));
                    assert!(!grid.is_wall(p));
                }
            }
        }
    }
}
