use core::fmt;

use log::{info, warn};

use crate::cell::{Cell, CellRole};
use crate::config::SandboxConfig;
use crate::error::{Result, SandboxError};
use crate::greedy::{greedy_best_first, Path, SearchReport};
use crate::grid::Grid;
use crate::heuristic::recompute_heuristics;
use crate::position::Position;

/// Whether the heuristics stored in the grid match the current goal and walls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeuristicState {
    NoGoal,
    GoalSetStale,
    GoalSetFresh,
}

/// Effect of [SearchSession::select_cell].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    StartSet(Position),
    GoalSet(Position),
    /// Start and goal are both set already, or the start was selected again.
    Ignored,
}

/// Owns the grid together with the start, goal and the last found path, and keeps track of
/// when heuristics need recomputing. This is the single handle a presentation layer holds.
#[derive(Clone, Debug)]
pub struct SearchSession {
    grid: Grid,
    start: Option<Position>,
    goal: Option<Position>,
    allow_diagonals: bool,
    heuristic_state: HeuristicState,
    last_path: Option<Path>,
}

impl SearchSession {
    pub fn new(rows: usize, cols: usize, allow_diagonals: bool) -> SearchSession {
        SearchSession::with_grid(Grid::new(rows, cols), allow_diagonals)
    }

    pub fn from_config(config: &SandboxConfig) -> SearchSession {
        SearchSession::new(config.rows, config.cols, config.allow_diagonals)
    }

    pub fn with_grid(grid: Grid, allow_diagonals: bool) -> SearchSession {
        SearchSession {
            grid,
            start: None,
            goal: None,
            allow_diagonals,
            heuristic_state: HeuristicState::NoGoal,
            last_path: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn start(&self) -> Option<Position> {
        self.start
    }
    pub fn goal(&self) -> Option<Position> {
        self.goal
    }
    pub fn allow_diagonals(&self) -> bool {
        self.allow_diagonals
    }
    pub fn heuristic_state(&self) -> HeuristicState {
        self.heuristic_state
    }
    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_ref()
    }

    pub fn get_cell(&self, pos: Position) -> Result<&Cell> {
        self.grid.get_cell(pos)
    }

    /// Switching adjacency keeps the heuristics, which do not depend on it, but drops the path.
    pub fn set_allow_diagonals(&mut self, allow_diagonals: bool) {
        if self.allow_diagonals != allow_diagonals {
            self.allow_diagonals = allow_diagonals;
            self.last_path = None;
        }
    }

    fn protected(&self) -> Vec<Position> {
        self.start.iter().chain(self.goal.iter()).copied().collect()
    }

    fn check_endpoint(&self, pos: Position, other: Option<Position>) -> Result<()> {
        if self.grid.get_cell(pos)?.is_wall {
            return Err(SandboxError::InvalidConfiguration(format!("{} is a wall", pos)));
        }
        if other == Some(pos) {
            return Err(SandboxError::InvalidConfiguration(format!(
                "start and goal must differ, both are {}",
                pos
            )));
        }
        Ok(())
    }

    pub fn set_start(&mut self, pos: Position) -> Result<()> {
        self.check_endpoint(pos, self.goal)?;
        info!("Start set to {}", pos);
        self.start = Some(pos);
        self.last_path = None;
        Ok(())
    }

    /// Any goal change makes the stored heuristics stale.
    pub fn set_goal(&mut self, pos: Position) -> Result<()> {
        self.check_endpoint(pos, self.start)?;
        info!("Goal set to {}", pos);
        self.goal = Some(pos);
        self.heuristic_state = HeuristicState::GoalSetStale;
        self.last_path = None;
        Ok(())
    }

    /// Handles a primary click on `pos`: the first selection becomes the start and the next
    /// selection of a different cell becomes the goal. Further selections are ignored until
    /// [reset](Self::reset).
    pub fn select_cell(&mut self, pos: Position) -> Result<Selection> {
        if self.start.is_none() {
            self.set_start(pos)?;
            Ok(Selection::StartSet(pos))
        } else if self.goal.is_none() && self.start != Some(pos) {
            self.set_goal(pos)?;
            Ok(Selection::GoalSet(pos))
        } else {
            Ok(Selection::Ignored)
        }
    }

    /// Flips the wall at `pos` unless it is the start or the goal. Returns whether anything
    /// changed; a change invalidates heuristics and the last path.
    pub fn toggle_wall(&mut self, pos: Position) -> bool {
        let protected = self.protected();
        if protected.contains(&pos) {
            warn!("Cannot place a wall on the start or goal at {}", pos);
            return false;
        }
        if !self.grid.toggle_wall(pos, &protected) {
            return false;
        }
        if self.goal.is_some() {
            self.heuristic_state = HeuristicState::GoalSetStale;
        }
        self.last_path = None;
        true
    }

    pub fn recompute_heuristics(&mut self) -> Result<()> {
        let goal = self.goal.ok_or_else(|| {
            SandboxError::InvalidConfiguration("no goal has been selected".to_owned())
        })?;
        recompute_heuristics(&mut self.grid, goal);
        self.heuristic_state = HeuristicState::GoalSetFresh;
        Ok(())
    }

    /// Runs greedy best-first search between the selected start and goal, recomputing the
    /// heuristics first if they are stale. A found path is kept for [role](Self::role).
    pub fn search(&mut self) -> Result<SearchReport> {
        let (start, goal) = match (self.start, self.goal) {
            (Some(start), Some(goal)) => (start, goal),
            _ => {
                return Err(SandboxError::InvalidConfiguration(
                    "start and goal must both be selected".to_owned(),
                ))
            }
        };
        if self.heuristic_state != HeuristicState::GoalSetFresh {
            self.recompute_heuristics()?;
        }
        let report = greedy_best_first(&self.grid, start, goal, self.allow_diagonals)?;
        match report.outcome.path() {
            Some(path) => info!("Path found with {} steps: {}", path.steps(), path),
            None => info!("No path found from {} to {}", start, goal),
        }
        self.last_path = report.outcome.path().cloned();
        Ok(report)
    }

    pub fn role(&self, pos: Position) -> Result<CellRole> {
        let cell = self.grid.get_cell(pos)?;
        let on_path = self
            .last_path
            .as_ref()
            .map(|path| path.contains(&pos))
            .unwrap_or(false);
        Ok(CellRole::resolve(
            self.start == Some(pos),
            self.goal == Some(pos),
            cell.is_wall,
            on_path,
        ))
    }

    /// Clears walls, start, goal and path, leaving an empty grid of the same size.
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.grid.rows(), self.grid.cols());
        self.start = None;
        self.goal = None;
        self.heuristic_state = HeuristicState::NoGoal;
        self.last_path = None;
    }
}

impl fmt::Display for SearchSession {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for r in 0..self.grid.rows() as i32 {
            let line = (0..self.grid.cols() as i32)
                .map(|c| {
                    self.role(Position::new(r, c))
                        .map(|role| role.symbol())
                        .unwrap_or('?')
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Heuristic;
    use crate::greedy::SearchOutcome;

    #[test]
    fn clicks_set_start_then_goal() {
        let mut session = SearchSession::new(4, 4, true);
        let a = Position::new(0, 0);
        let b = Position::new(3, 3);
        assert_eq!(session.select_cell(a), Ok(Selection::StartSet(a)));
        assert_eq!(session.heuristic_state(), HeuristicState::NoGoal);
        // Selecting the start again does not make it the goal.
        assert_eq!(session.select_cell(a), Ok(Selection::Ignored));
        assert_eq!(session.select_cell(b), Ok(Selection::GoalSet(b)));
        assert_eq!(session.heuristic_state(), HeuristicState::GoalSetStale);
        assert_eq!(session.select_cell(Position::new(1, 1)), Ok(Selection::Ignored));
        assert_eq!(session.start(), Some(a));
        assert_eq!(session.goal(), Some(b));
    }

    #[test]
    fn selecting_wall_or_outside_rejected() {
        let mut session = SearchSession::new(3, 3, false);
        session.toggle_wall(Position::new(1, 1));
        assert!(matches!(
            session.select_cell(Position::new(1, 1)),
            Err(SandboxError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            session.select_cell(Position::new(3, 0)),
            Err(SandboxError::OutOfBounds { .. })
        ));
        assert_eq!(session.start(), None);
    }

    #[test]
    fn start_and_goal_cannot_be_walled() {
        let mut session = SearchSession::new(3, 3, false);
        let start = Position::new(0, 0);
        let goal = Position::new(2, 2);
        session.select_cell(start).unwrap();
        session.select_cell(goal).unwrap();
        for _ in 0..2 {
            assert!(!session.toggle_wall(start));
            assert!(!session.toggle_wall(goal));
            assert!(!session.get_cell(start).unwrap().is_wall);
            assert!(!session.get_cell(goal).unwrap().is_wall);
        }
    }

    #[test]
    fn heuristic_state_transitions() {
        let mut session = SearchSession::new(3, 3, false);
        assert!(session.recompute_heuristics().is_err());
        session.select_cell(Position::new(0, 0)).unwrap();
        session.select_cell(Position::new(2, 2)).unwrap();
        assert_eq!(session.heuristic_state(), HeuristicState::GoalSetStale);
        session.recompute_heuristics().unwrap();
        assert_eq!(session.heuristic_state(), HeuristicState::GoalSetFresh);
        assert!(session.toggle_wall(Position::new(1, 1)));
        assert_eq!(session.heuristic_state(), HeuristicState::GoalSetStale);
        session.search().unwrap();
        assert_eq!(session.heuristic_state(), HeuristicState::GoalSetFresh);
        assert_eq!(
            session.get_cell(Position::new(1, 1)).unwrap().heuristic,
            Some(Heuristic::Infinite)
        );
    }

    #[test]
    fn search_requires_both_endpoints() {
        let mut session = SearchSession::new(3, 3, false);
        assert!(session.search().is_err());
        session.select_cell(Position::new(0, 0)).unwrap();
        assert!(session.search().is_err());
    }

    #[test]
    fn search_recomputes_after_wall_edit() {
        //  ___
        // |S..|
        // |.#.|
        // |..G|
        //  ___
        let mut session = SearchSession::new(3, 3, false);
        session.select_cell(Position::new(0, 0)).unwrap();
        session.select_cell(Position::new(2, 2)).unwrap();
        session.search().unwrap();
        session.toggle_wall(Position::new(1, 1));
        session.toggle_wall(Position::new(0, 1));
        session.toggle_wall(Position::new(1, 0));
        let report = session.search().unwrap();
        assert_eq!(report.outcome, SearchOutcome::NotFound);
        assert!(session.last_path().is_none());
        session.toggle_wall(Position::new(1, 0));
        let report = session.search().unwrap();
        assert_eq!(report.outcome.path().map(|p| p.steps()), Some(4));
    }

    #[test]
    fn roles_and_rendering() {
        let mut session = SearchSession::new(3, 3, false);
        session.select_cell(Position::new(0, 0)).unwrap();
        session.select_cell(Position::new(2, 2)).unwrap();
        session.toggle_wall(Position::new(0, 1));
        session.search().unwrap();
        assert_eq!(session.role(Position::new(0, 0)), Ok(CellRole::Start));
        assert_eq!(session.role(Position::new(2, 2)), Ok(CellRole::Goal));
        assert_eq!(session.role(Position::new(0, 1)), Ok(CellRole::Wall));
        assert_eq!(session.role(Position::new(1, 0)), Ok(CellRole::Path));
        assert_eq!(session.role(Position::new(1, 1)), Ok(CellRole::Path));
        assert_eq!(session.role(Position::new(0, 2)), Ok(CellRole::Plain));
        assert_eq!(session.role(Position::new(2, 0)), Ok(CellRole::Plain));
        assert!(session.role(Position::new(3, 3)).is_err());
        assert_eq!(session.to_string(), "S#.\n***\n..G\n");
    }

    #[test]
    fn wall_edit_clears_path() {
        let mut session = SearchSession::new(3, 3, true);
        session.select_cell(Position::new(0, 0)).unwrap();
        session.select_cell(Position::new(2, 2)).unwrap();
        session.search().unwrap();
        assert!(session.last_path().is_some());
        session.toggle_wall(Position::new(0, 2));
        assert!(session.last_path().is_none());
    }

    #[test]
    fn reset_clears_everything() {
        let config = SandboxConfig::for_window(160, 120, 40);
        let mut session = SearchSession::from_config(&config);
        session.select_cell(Position::new(0, 0)).unwrap();
        session.select_cell(Position::new(2, 3)).unwrap();
        session.toggle_wall(Position::new(1, 1));
        session.search().unwrap();
        session.reset();
        assert_eq!(session.start(), None);
        assert_eq!(session.goal(), None);
        assert_eq!(session.heuristic_state(), HeuristicState::NoGoal);
        assert_eq!(session.grid().wall_count(), 0);
        assert_eq!((session.grid().rows(), session.grid().cols()), (3, 4));
        assert!(session.get_cell(Position::new(0, 0)).unwrap().heuristic.is_none());
    }

    #[test]
    fn explicit_goal_move_must_differ_from_start() {
        let mut session = SearchSession::new(3, 3, false);
        session.set_start(Position::new(1, 1)).unwrap();
        assert!(session.set_goal(Position::new(1, 1)).is_err());
        session.set_goal(Position::new(0, 0)).unwrap();
        session.recompute_heuristics().unwrap();
        session.set_goal(Position::new(2, 2)).unwrap();
        assert_eq!(session.heuristic_state(), HeuristicState::GoalSetStale);
    }
}
