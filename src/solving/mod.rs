use parity::{calculate_parity, required_moves_parity, solved_board_parity};

use crate::board::Board;

pub mod algorithm;
pub mod heuristic;
pub mod ida;
pub mod movegen;
pub mod parity;
pub mod visited;

/// Whether `board` has any solution at all, decided from permutation parity
/// alone rather than by searching.
#[must_use]
pub fn is_solvable(board: &impl Board) -> bool {
    let (rows, columns) = board.dimensions();
    let mut cells = Vec::with_capacity(rows as usize * columns as usize);

    for row in 0..rows {
        for column in 0..columns {
            cells.push(board.at(row, column));
        }
    }

    let board_parity = calculate_parity(&cells);

    board_parity + required_moves_parity(board) == solved_board_parity(board)
}

#[cfg(test)]
mod test {
    use crate::board::OwnedBoard;
    use crate::solving::is_solvable;

    #[test]
    fn solvable_board_shows_as_solvable() {
        let solvable_input = r"4 4
1  2  3  4
5  6  7  8
9 10 11 12
13 14 0 15
";
        let solvable_board: OwnedBoard = solvable_input.parse().unwrap();
        assert!(is_solvable(&solvable_board));
    }

    #[test]
    fn unsolvable_board_shows_as_not_solvable() {
        let unsolvable_input = r"4 4
1  2  3  4
5  6  7  8
9 10 11 12
13 15 14 0
";
        let unsolvable_board: OwnedBoard = unsolvable_input.parse().unwrap();
        assert!(!is_solvable(&unsolvable_board));
    }
}
