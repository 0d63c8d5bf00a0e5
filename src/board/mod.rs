use std::fmt::{Display, Formatter};

pub use owned::OwnedBoard;

mod owned;
pub mod parsing;

/// One of the four cardinal directions the blank can move in.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BoardMove {
    Up,
    Down,
    Left,
    Right,
}

impl BoardMove {
    #[must_use]
    pub fn opposite(self) -> BoardMove {
        match self {
            BoardMove::Up => BoardMove::Down,
            BoardMove::Down => BoardMove::Up,
            BoardMove::Left => BoardMove::Right,
            BoardMove::Right => BoardMove::Left,
        }
    }
}

impl Display for BoardMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardMove::Up => write!(f, "U"),
            BoardMove::Down => write!(f, "D"),
            BoardMove::Left => write!(f, "L"),
            BoardMove::Right => write!(f, "R"),
        }
    }
}

/// Which of the two move models a board follows.
///
/// `One` allows only single-cell moves in each direction. `Two` additionally
/// lets the blank slide 2 or 3 cells horizontally in one action, equivalent
/// to sliding that many tiles the opposite way within the row.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Variant {
    #[default]
    One,
    Two,
}

/// A direction plus a step count, the unit of motion the [`Variant::Two`]
/// move model deals in. `steps` is always 1 for vertical moves and for
/// every move under [`Variant::One`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub direction: BoardMove,
    pub steps: u8,
}

impl Move {
    #[must_use]
    pub fn unit(direction: BoardMove) -> Self {
        Move { direction, steps: 1 }
    }

    #[must_use]
    pub fn reverse(self) -> Self {
        Move {
            direction: self.direction.opposite(),
            steps: self.steps,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Direction: {}, Steps: {}", self.direction, self.steps)
    }
}

/// The legacy uninformed/heuristic-search contract: a rectangular board
/// with unit moves only, used by the plain BFS/DFS/best-first/A* solvers.
/// [`OwnedBoard`]'s variant-aware multi-step contract (`legal_moves`,
/// `apply`, `undo`) lives directly on the type instead, since `s`-step
/// horizontal moves don't fit this trait's single-move-at-a-time shape.
pub trait Board {
    /// Returns number of rows and columns
    fn dimensions(&self) -> (u8, u8);

    fn at(&self, row: u8, column: u8) -> u8;

    /// Returns the row and column index of the empty cell
    fn empty_cell_pos(&self) -> (u8, u8);

    fn is_solved(&self) -> bool;

    /// Checks if a given move can be performed on the board
    fn can_move(&self, board_move: BoardMove) -> bool;

    /// # Panics
    /// This function may panic if the move cannot be performed.
    /// To avoid it, check before if a move can be executed using [can_move](Board::can_move)
    fn exec_move(&mut self, board_move: BoardMove);
}
