use log::debug;

use crate::cell::Heuristic;
use crate::grid::Grid;
use crate::position::Position;

/// Recomputes every cell's heuristic against `goal`: walls become [Heuristic::Infinite], open
/// cells get their Manhattan distance to the goal. This is a full scan and is meant to be run
/// once per goal change or wall edit, never patched incrementally.
///
/// Manhattan distance is used even when diagonal moves are allowed, in which case it
/// overestimates the remaining number of steps.
pub fn recompute_heuristics(grid: &mut Grid, goal: Position) {
    debug!("Recomputing {} heuristics towards {}", grid.len(), goal);
    for (pos, cell) in grid.positions_and_cells_mut() {
        cell.heuristic = Some(if cell.is_wall {
            Heuristic::Infinite
        } else {
            Heuristic::Finite(pos.manhattan_distance(&goal))
        });
    }
}
