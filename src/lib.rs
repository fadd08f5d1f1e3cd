//! # pathfinding_sandbox
//!
//! An editable grid on which a start, a goal and walls are placed and a route between start and
//! goal is found with
//! [greedy best-first search](https://en.wikipedia.org/wiki/Best-first_search#Greedy_BFS).
//! The search expands whichever frontier cell has the lowest heuristic (the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) to the goal) and ignores
//! the cost of the path so far, so paths are found quickly but are not always the shortest.
//!
//! The engine is synchronous and does no I/O. [Grid] holds the cells, [neighbors] enumerates
//! moves in the 4- or 8-neighbourhood, [recompute_heuristics] refreshes every cell's estimate
//! for a goal and [greedy_best_first] runs the search. [SearchSession] ties these together for
//! an interactive front end: it remembers start and goal, refuses to wall them and recomputes
//! heuristics whenever walls or the goal changed since the last search.
//!
//! ```
//! use pathfinding_sandbox::{Position, SearchSession};
//!
//! let mut session = SearchSession::new(5, 5, false);
//! session.select_cell(Position::new(0, 0)).unwrap();
//! session.select_cell(Position::new(4, 4)).unwrap();
//! session.toggle_wall(Position::new(1, 0));
//! let report = session.search().unwrap();
//! assert_eq!(report.outcome.path().map(|p| p.len()), Some(9));
//! ```
pub mod cell;
pub mod config;
pub mod error;
pub mod greedy;
pub mod grid;
pub mod heuristic;
pub mod neighbors;
pub mod position;
pub mod session;

pub use cell::{Cell, CellRole, Heuristic, CELL_COST};
pub use config::SandboxConfig;
pub use error::{Result, SandboxError};
pub use greedy::{greedy_best_first, Path, SearchOutcome, SearchReport, SearchStats};
pub use grid::Grid;
pub use heuristic::recompute_heuristics;
pub use neighbors::{neighbors, Adjacency};
pub use position::Position;
pub use session::{HeuristicState, SearchSession, Selection};
