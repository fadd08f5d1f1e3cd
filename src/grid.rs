use core::fmt;

use log::debug;

use crate::cell::Cell;
use crate::error::{Result, SandboxError};
use crate::position::Position;

/// Largest number of rows or columns, since positions are `i32` coordinates.
pub const MAX_DIMENSION: usize = i32::MAX as usize;

/// Fixed-size grid of [Cell]s stored in row-major order. The dimensions are set once at
/// construction; only wall flags and heuristics change afterwards.
///
/// Toggling walls does not touch the heuristics. Whoever owns the grid must call
/// [recompute_heuristics](crate::heuristic::recompute_heuristics) before searching again;
/// [SearchSession](crate::session::SearchSession) tracks this for you.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// # Panics
    ///
    /// Panics if `rows` or `cols` exceeds [MAX_DIMENSION] or their product overflows `usize`.
    /// Use [try_new](Self::try_new) to get an error instead.
    pub fn new(rows: usize, cols: usize) -> Grid {
        Grid::try_new(rows, cols).unwrap_or_else(|e| panic!("{}", e))
    }

    pub fn try_new(rows: usize, cols: usize) -> Result<Grid> {
        let len = rows
            .checked_mul(cols)
            .filter(|_| rows <= MAX_DIMENSION && cols <= MAX_DIMENSION)
            .ok_or_else(|| {
                SandboxError::InvalidConfiguration(format!(
                    "a {}x{} grid exceeds the supported size",
                    rows, cols
                ))
            })?;
        Ok(Grid {
            rows,
            cols,
            cells: vec![Cell::default(); len],
        })
    }

    /// Builds a grid from text rows, where `#`, `@` and `T` mark walls and anything else is open.
    pub fn from_rows(lines: &[&str]) -> Result<Grid> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.chars().count()).unwrap_or(0);
        let mut grid = Grid::try_new(rows, cols)?;
        for (r, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(SandboxError::InvalidConfiguration(format!(
                    "row {} has {} columns, expected {}",
                    r,
                    line.chars().count(),
                    cols
                )));
            }
            for (c, ch) in line.chars().enumerate() {
                if matches!(ch, '#' | '@' | 'T') {
                    grid.set_wall(Position::new(r as i32, c as i32), true)?;
                }
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    fn ix(&self, pos: Position) -> Result<usize> {
        if self.in_bounds(pos) {
            Ok(pos.row as usize * self.cols + pos.col as usize)
        } else {
            Err(SandboxError::OutOfBounds {
                pos,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get_cell(&self, pos: Position) -> Result<&Cell> {
        let ix = self.ix(pos)?;
        Ok(&self.cells[ix])
    }

    pub(crate) fn get_cell_mut(&mut self, pos: Position) -> Result<&mut Cell> {
        let ix = self.ix(pos)?;
        Ok(&mut self.cells[ix])
    }

    /// Out-of-bounds positions are not walls, but they are not traversable either; see
    /// [can_move_to](Self::can_move_to).
    pub fn is_wall(&self, pos: Position) -> bool {
        self.get_cell(pos).map(|c| c.is_wall).unwrap_or(false)
    }

    pub fn can_move_to(&self, pos: Position) -> bool {
        self.get_cell(pos).map(|c| !c.is_wall).unwrap_or(false)
    }

    /// Flips the wall flag at `pos`. Out-of-bounds and protected positions (the active start
    /// and goal) are left alone without error, since the interactive caller is expected to
    /// filter those clicks anyway. Returns whether the flag changed.
    pub fn toggle_wall(&mut self, pos: Position, protected: &[Position]) -> bool {
        if protected.contains(&pos) {
            debug!("Refusing to toggle protected position {}", pos);
            return false;
        }
        match self.get_cell_mut(pos) {
            Ok(cell) => {
                cell.is_wall = !cell.is_wall;
                true
            }
            Err(_) => false,
        }
    }

    pub fn set_wall(&mut self, pos: Position, is_wall: bool) -> Result<()> {
        self.get_cell_mut(pos)?.is_wall = is_wall;
        Ok(())
    }

    pub fn clear_walls(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.is_wall = false;
        }
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall).count()
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |r| (0..cols).map(move |c| Position::new(r, c)))
    }

    pub(crate) fn positions_and_cells_mut(
        &mut self,
    ) -> impl Iterator<Item = (Position, &mut Cell)> {
        let cols = self.cols;
        self.cells.iter_mut().enumerate().map(move |(ix, cell)| {
            (Position::new((ix / cols) as i32, (ix % cols) as i32), cell)
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let line = row
                .iter()
                .map(|c| if c.is_wall { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
