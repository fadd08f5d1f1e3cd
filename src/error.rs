use core::fmt;

use crate::position::Position;

pub type Result<T> = std::result::Result<T, SandboxError>;

/// Errors raised by grid queries, searches and session requests. An unreachable goal is not an
/// error; see [SearchOutcome::NotFound](crate::greedy::SearchOutcome::NotFound).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SandboxError {
    /// A position outside the grid was passed to a query or mutation.
    OutOfBounds {
        pos: Position,
        rows: usize,
        cols: usize,
    },
    /// Start/goal placement that a search cannot run on, or malformed grid input.
    InvalidConfiguration(String),
    /// A search reached a cell whose heuristic was never computed for the current goal.
    StaleHeuristics(Position),
}

impl fmt::Display for SandboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SandboxError::OutOfBounds { pos, rows, cols } => {
                write!(f, "position {} is outside the {}x{} grid", pos, rows, cols)
            }
            SandboxError::InvalidConfiguration(msg) => write!(f, "invalid configuration: {}", msg),
            SandboxError::StaleHeuristics(pos) => {
                write!(f, "heuristic at {} has not been computed", pos)
            }
        }
    }
}

impl std::error::Error for SandboxError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = SandboxError::OutOfBounds {
            pos: Position::new(5, -1),
            rows: 4,
            cols: 3,
        };
        assert_eq!(err.to_string(), "position (5, -1) is outside the 4x3 grid");
        let err = SandboxError::StaleHeuristics(Position::new(1, 2));
        assert_eq!(err.to_string(), "heuristic at (1, 2) has not been computed");
    }
}
