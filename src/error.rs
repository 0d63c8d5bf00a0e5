use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

use crate::board::parsing::BoardCreationError;

/// Crate-wide error type for everything outside the search core itself.
///
/// The search core (IDA* and the other [`Solver`](crate::solving::algorithm::Solver)
/// implementations) never raises this type; it only ever requests moves
/// returned by its own move generator, so [`SolverError::InvalidMove`] is
/// reserved for boundary checks (parsing, tests) that construct a move by
/// hand.
#[derive(Debug)]
pub enum SolverError {
    InvalidInput(String),
    InvalidMove(String),
    Io(io::Error),
    Unsolvable,
}

impl Display for SolverError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            SolverError::InvalidMove(msg) => write!(f, "invalid move: {msg}"),
            SolverError::Io(err) => write!(f, "I/O error: {err}"),
            SolverError::Unsolvable => write!(f, "board has no solution"),
        }
    }
}

impl Error for SolverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SolverError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SolverError {
    fn from(value: io::Error) -> Self {
        SolverError::Io(value)
    }
}

impl From<BoardCreationError> for SolverError {
    fn from(value: BoardCreationError) -> Self {
        SolverError::InvalidInput(value.to_string())
    }
}
