//! Greedy best-first search over a [Grid] whose heuristics were computed beforehand.
//!
//! The frontier is ordered by heuristic alone. Accumulated path cost plays no role, so the
//! returned path is not guaranteed to be the shortest one. A neighbour is pushed every time it
//! is discovered from a newly expanded cell; there is no decrease-key and stale copies are
//! discarded when popped because their position is already visited. The queue therefore holds
//! up to O(cells × branching factor) entries rather than O(cells).
use core::fmt;
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;
use itertools::Itertools;
use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::cell::Heuristic;
use crate::error::{Result, SandboxError};
use crate::grid::Grid;
use crate::neighbors::{neighbors, Adjacency};
use crate::position::Position;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

struct FrontierEntry {
    heuristic: Heuristic,
    pos: Position,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.heuristic == other.heuristic && self.pos == other.pos
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the lowest heuristic. Ties go to the smallest
        // (row, col), which keeps the result independent of push order.
        other
            .heuristic
            .cmp(&self.heuristic)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

/// Sequence of positions from start to goal, each consecutive pair a single move apart. Only
/// built by a successful search, so it always holds at least the start.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path(Vec<Position>);

impl Path {
    pub fn start(&self) -> Position {
        self.0[0]
    }
    pub fn goal(&self) -> Position {
        self.0[self.0.len() - 1]
    }
    /// Number of positions, including start and goal. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Number of moves, one less than [len](Self::len).
    pub fn steps(&self) -> usize {
        self.0.len() - 1
    }
    pub fn contains(&self, pos: &Position) -> bool {
        self.0.contains(pos)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.0.iter()
    }
    pub fn positions(&self) -> &[Position] {
        &self.0
    }
    pub fn into_inner(self) -> Vec<Position> {
        self.0
    }
    /// Whether every consecutive pair is adjacent under `adjacency`.
    pub fn is_connected(&self, adjacency: Adjacency) -> bool {
        self.0
            .windows(2)
            .all(|pair| pair[0].is_adjacent(&pair[1], adjacency))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" -> "))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Path),
    /// The frontier ran dry before the goal was reached. A normal result, not an error.
    NotFound,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound => None,
        }
    }
    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound => None,
        }
    }
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// Work done by a single search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions popped and marked visited.
    pub expanded: usize,
    /// Entries pushed onto the frontier, duplicates included.
    pub pushed: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

fn heuristic_at(grid: &Grid, pos: Position) -> Result<Heuristic> {
    grid.get_cell(pos)?
        .heuristic
        .ok_or(SandboxError::StaleHeuristics(pos))
}

fn reverse_path(came_from: &FxIndexMap<Position, Position>, goal: Position) -> Path {
    let mut path: Vec<Position> =
        std::iter::successors(Some(goal), |node| came_from.get(node).copied()).collect();
    path.reverse();
    Path(path)
}

fn validate(grid: &Grid, start: Position, goal: Position) -> Result<()> {
    for (name, pos) in [("start", start), ("goal", goal)] {
        if grid.get_cell(pos)?.is_wall {
            return Err(SandboxError::InvalidConfiguration(format!(
                "{} {} is a wall",
                name, pos
            )));
        }
    }
    // Heuristics left over from another goal would not be zero here.
    if heuristic_at(grid, goal)? != Heuristic::Finite(0) {
        return Err(SandboxError::StaleHeuristics(goal));
    }
    Ok(())
}

/// Runs greedy best-first search from `start` to `goal` using the heuristics currently stored
/// in `grid`. They must have been computed against `goal` with
/// [recompute_heuristics](crate::heuristic::recompute_heuristics) after the last wall edit.
///
/// Fails with [SandboxError::OutOfBounds] if either endpoint is outside the grid, with
/// [SandboxError::InvalidConfiguration] if either is a wall, and with
/// [SandboxError::StaleHeuristics] if a heuristic it needs is missing or belongs to another goal.
pub fn greedy_best_first(
    grid: &Grid,
    start: Position,
    goal: Position,
    allow_diagonals: bool,
) -> Result<SearchReport> {
    validate(grid, start, goal)?;
    let mut stats = SearchStats::default();
    let mut to_see = BinaryHeap::new();
    to_see.push(FrontierEntry {
        heuristic: heuristic_at(grid, start)?,
        pos: start,
    });
    stats.pushed += 1;
    let mut visited: FxHashSet<Position> = FxHashSet::default();
    let mut came_from: FxIndexMap<Position, Position> = FxIndexMap::default();

    while let Some(FrontierEntry { pos: current, .. }) = to_see.pop() {
        if !visited.insert(current) {
            continue;
        }
        stats.expanded += 1;
        if current == goal {
            let path = reverse_path(&came_from, goal);
            debug!(
                "Reached {} from {} in {} steps ({} expanded, {} pushed)",
                goal,
                start,
                path.steps(),
                stats.expanded,
                stats.pushed
            );
            return Ok(SearchReport {
                outcome: SearchOutcome::Found(path),
                stats,
            });
        }
        for successor in neighbors(grid, current, allow_diagonals) {
            if visited.contains(&successor) {
                continue;
            }
            if let Vacant(e) = came_from.entry(successor) {
                e.insert(current);
            }
            to_see.push(FrontierEntry {
                heuristic: heuristic_at(grid, successor)?,
                pos: successor,
            });
            stats.pushed += 1;
        }
    }
    debug!(
        "No path from {} to {} ({} expanded, {} pushed)",
        start, goal, stats.expanded, stats.pushed
    );
    Ok(SearchReport {
        outcome: SearchOutcome::NotFound,
        stats,
    })
}
