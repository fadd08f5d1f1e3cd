use core::cmp::Ordering;
use core::fmt;

/// Cost of entering any cell. Greedy best-first ordering ignores it.
pub const CELL_COST: u32 = 1;

/// Estimated distance from a cell to the goal. Walls are [Heuristic::Infinite].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    Finite(u32),
    Infinite,
}

impl Heuristic {
    pub fn is_infinite(&self) -> bool {
        matches!(self, Heuristic::Infinite)
    }

    pub fn finite(&self) -> Option<u32> {
        match self {
            Heuristic::Finite(h) => Some(*h),
            Heuristic::Infinite => None,
        }
    }
}

impl Ord for Heuristic {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Heuristic::Finite(a), Heuristic::Finite(b)) => a.cmp(b),
            (Heuristic::Finite(_), Heuristic::Infinite) => Ordering::Less,
            (Heuristic::Infinite, Heuristic::Finite(_)) => Ordering::Greater,
            (Heuristic::Infinite, Heuristic::Infinite) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Heuristic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Heuristic::Finite(h) => write!(f, "{}", h),
            Heuristic::Infinite => write!(f, "∞"),
        }
    }
}

/// State of a single grid position. The heuristic is [None] until it is first computed against
/// a goal, which keeps "not computed" apart from a computed zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub is_wall: bool,
    pub heuristic: Option<Heuristic>,
    pub cost: u32,
}

impl Default for Cell {
    fn default() -> Cell {
        Cell {
            is_wall: false,
            heuristic: None,
            cost: CELL_COST,
        }
    }
}

impl Cell {
    /// Text drawn inside the cell: empty before the first computation, `∞` for walls.
    pub fn heuristic_label(&self) -> String {
        self.heuristic.map(|h| h.to_string()).unwrap_or_default()
    }
}

/// What a cell represents to the presentation layer, which picks its fill color from this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellRole {
    Start,
    Goal,
    Wall,
    Path,
    Plain,
}

impl CellRole {
    /// Start and goal take precedence over everything, then walls, then the path.
    pub fn resolve(is_start: bool, is_goal: bool, is_wall: bool, on_path: bool) -> CellRole {
        if is_goal {
            CellRole::Goal
        } else if is_start {
            CellRole::Start
        } else if is_wall {
            CellRole::Wall
        } else if on_path {
            CellRole::Path
        } else {
            CellRole::Plain
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            CellRole::Start => 'S',
            CellRole::Goal => 'G',
            CellRole::Wall => '#',
            CellRole::Path => '*',
            CellRole::Plain => '.',
        }
    }
}
