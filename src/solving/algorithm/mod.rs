use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::board::BoardMove;

pub mod astar;
pub mod bestfs;
pub mod bfs;
pub mod dfs;
pub mod heuristics;
mod util;

/// A fully-defined search problem boxed up and ready to run.
pub trait Solver {
    /// # Errors
    /// Returns [`SolvingError::UnsolvableBoard`] if the starting position has
    /// no solution, or [`SolvingError::AlgorithmError`] if the algorithm gave
    /// up for a reason of its own (search depth/stack/memory limit reached).
    fn solve(self: Box<Self>) -> Result<Vec<BoardMove>, SolvingError>;
}

#[derive(Debug)]
pub enum SolvingError {
    UnsolvableBoard,
    AlgorithmError(Box<dyn Error>),
}

impl Display for SolvingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SolvingError::UnsolvableBoard => write!(f, "board has no solution"),
            SolvingError::AlgorithmError(err) => write!(f, "algorithm error: {err}"),
        }
    }
}

impl Error for SolvingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SolvingError::AlgorithmError(err) => Some(err.as_ref()),
            SolvingError::UnsolvableBoard => None,
        }
    }
}

/// Re-exports every uninformed/heuristic solver under one glob import, the
/// way the benchmarks want to pull them all in at once.
pub mod solvers {
    pub use super::astar::{AStarSolver, IterativeAStarSolver, MemoryBoundedAStarSolver};
    pub use super::bestfs::BestFSSolver;
    pub use super::bfs::BFSSolver;
    pub use super::dfs::{DFSSolver, IncrementalDFSSolver};
}
