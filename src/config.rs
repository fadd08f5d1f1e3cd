use crate::position::Position;

pub const DEFAULT_WINDOW_SIZE: u32 = 800;
pub const DEFAULT_CELL_SIZE: u32 = 40;

/// Dimensions and movement settings of a sandbox. The defaults describe an 800x800 pixel window
/// of 40 pixel cells, i.e. a 20x20 grid, with diagonal moves enabled.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SandboxConfig {
    pub rows: usize,
    pub cols: usize,
    /// Side length of a cell in pixels, used to map pointer positions to cells.
    pub cell_size: u32,
    pub allow_diagonals: bool,
}

impl Default for SandboxConfig {
    fn default() -> SandboxConfig {
        SandboxConfig::for_window(DEFAULT_WINDOW_SIZE, DEFAULT_WINDOW_SIZE, DEFAULT_CELL_SIZE)
    }
}

impl SandboxConfig {
    /// Fits as many whole cells as possible into a `width` x `height` pixel window.
    pub fn for_window(width: u32, height: u32, cell_size: u32) -> SandboxConfig {
        let cell_size = cell_size.max(1);
        SandboxConfig {
            rows: (height / cell_size) as usize,
            cols: (width / cell_size) as usize,
            cell_size,
            allow_diagonals: true,
        }
    }

    pub fn with_diagonals(mut self, allow_diagonals: bool) -> SandboxConfig {
        self.allow_diagonals = allow_diagonals;
        self
    }

    pub fn window_size(&self) -> (u32, u32) {
        (
            self.cols as u32 * self.cell_size,
            self.rows as u32 * self.cell_size,
        )
    }

    /// The cell under pixel `(x, y)`, or [None] if the pixel lies outside the grid.
    pub fn cell_at_pixel(&self, x: i32, y: i32) -> Option<Position> {
        if x < 0 || y < 0 {
            return None;
        }
        let cell_size = self.cell_size.max(1) as i32;
        let pos = Position::new(y / cell_size, x / cell_size);
        if (pos.row as usize) < self.rows && (pos.col as usize) < self.cols {
            Some(pos)
        } else {
            None
        }
    }

    /// Top-left pixel of the cell at `pos`.
    pub fn pixel_of_cell(&self, pos: Position) -> (i32, i32) {
        let cell_size = self.cell_size as i32;
        (pos.col * cell_size, pos.row * cell_size)
    }
}
