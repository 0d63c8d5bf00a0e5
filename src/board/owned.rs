use crate::board::{Board, BoardMove, Move, Variant};

/// A board owning its own cell storage.
///
/// `rows`/`columns` are kept general so the legacy uninformed solvers can
/// keep exercising non-4x4 boards (the benchmarks use 3x3 ones), but the
/// variant-aware contract below — [`legal_moves`](Self::legal_moves),
/// [`apply`](Self::apply), [`undo`](Self::undo) — is the 4x4-only surface
/// this crate's IDA* engine and pattern databases are built against.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct OwnedBoard {
    pub(super) rows: u8,
    pub(super) columns: u8,
    pub(super) cells: Box<[u8]>,
    pub(super) variant: Variant,
    blank_row: u8,
    blank_col: u8,
}

impl OwnedBoard {
    /// Builds a board from a full row-major tile permutation, defaulting to
    /// [`Variant::One`].
    #[must_use]
    pub fn new(rows: u8, columns: u8, cells: Box<[u8]>) -> Self {
        Self::with_variant(rows, columns, cells, Variant::One)
    }

    #[must_use]
    pub fn with_variant(rows: u8, columns: u8, cells: Box<[u8]>, variant: Variant) -> Self {
        let blank_index = cells
            .iter()
            .position(|&c| c == 0)
            .expect("cells must contain the blank");
        let blank_row = (blank_index / columns as usize) as u8;
        let blank_col = (blank_index % columns as usize) as u8;

        Self {
            rows,
            columns,
            cells,
            variant,
            blank_row,
            blank_col,
        }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Row-major tile values, blank included as `0`.
    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.cells
    }

    /// Cached blank position as `(row, column)`.
    #[must_use]
    pub fn blank(&self) -> (u8, u8) {
        (self.blank_row, self.blank_col)
    }

    /// Convert 2D representation of cell coordinate to a single index in the underlying vec
    fn flatten_index(&self, row: u8, column: u8) -> usize {
        row as usize * self.columns as usize + column as usize
    }

    /// Goal cell for a nonzero tile value; the blank's goal is the last cell
    /// and is not represented by this formula.
    fn goal_position(&self, tile: u8) -> (u8, u8) {
        let index = tile - 1;
        (index / self.columns, index % self.columns)
    }

    /// Enumerates every move legal from the current blank position under
    /// this board's variant (contract C1, §4.1).
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let (row, col) = (self.blank_row, self.blank_col);
        let mut moves = Vec::with_capacity(6);

        if col > 0 {
            moves.push(Move::unit(BoardMove::Left));
        }
        if col < self.columns - 1 {
            moves.push(Move::unit(BoardMove::Right));
        }
        if row > 0 {
            moves.push(Move::unit(BoardMove::Up));
        }
        if row < self.rows - 1 {
            moves.push(Move::unit(BoardMove::Down));
        }

        if self.variant == Variant::Two {
            for steps in 2..=3u8 {
                if col >= steps {
                    moves.push(Move {
                        direction: BoardMove::Left,
                        steps,
                    });
                }
                if col + steps <= self.columns - 1 {
                    moves.push(Move {
                        direction: BoardMove::Right,
                        steps,
                    });
                }
            }
        }

        moves
    }

    /// Applies `mv` in place. Left/Right shift the row segment between the
    /// blank and the target cell by one slot toward the blank and place the
    /// blank at the target; Up/Down swap the blank with its neighbor.
    ///
    /// # Panics
    /// Panics if `mv` is not legal from the current position (vertical
    /// moves with `steps != 1`, or a target cell past the border).
    pub fn apply(&mut self, mv: Move) {
        let (row, col) = (self.blank_row, self.blank_col);
        match mv.direction {
            BoardMove::Left => {
                assert!(mv.steps <= col, "move runs past the left border");
                let target_col = col - mv.steps;
                for c in (target_col..col).rev() {
                    let from = self.flatten_index(row, c);
                    let to = self.flatten_index(row, c + 1);
                    self.cells.swap(from, to);
                }
                self.blank_col = target_col;
            }
            BoardMove::Right => {
                let target_col = col + mv.steps;
                assert!(target_col < self.columns, "move runs past the right border");
                for c in col..target_col {
                    let from = self.flatten_index(row, c);
                    let to = self.flatten_index(row, c + 1);
                    self.cells.swap(from, to);
                }
                self.blank_col = target_col;
            }
            BoardMove::Up => {
                assert_eq!(mv.steps, 1, "vertical moves only carry one tile");
                assert!(row > 0, "move runs past the top border");
                let from = self.flatten_index(row, col);
                let to = self.flatten_index(row - 1, col);
                self.cells.swap(from, to);
                self.blank_row = row - 1;
            }
            BoardMove::Down => {
                assert_eq!(mv.steps, 1, "vertical moves only carry one tile");
                assert!(row + 1 < self.rows, "move runs past the bottom border");
                let from = self.flatten_index(row, col);
                let to = self.flatten_index(row + 1, col);
                self.cells.swap(from, to);
                self.blank_row = row + 1;
            }
        }
    }

    /// Undoes `mv`, restoring the board to its pre-`apply` state. Defined as
    /// applying the reverse move (flipped direction, same step count).
    pub fn undo(&mut self, mv: Move) {
        self.apply(mv.reverse());
    }

    /// True iff every tile (and the blank) sits at its goal cell.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.is_solved()
    }
}

impl Board for OwnedBoard {
    fn dimensions(&self) -> (u8, u8) {
        (self.rows, self.columns)
    }
    fn at(&self, row: u8, column: u8) -> u8 {
        self.cells[self.flatten_index(row, column)]
    }

    fn empty_cell_pos(&self) -> (u8, u8) {
        (self.blank_row, self.blank_col)
    }

    fn is_solved(&self) -> bool {
        // first check if the empty square is at the last position,
        // as in most cases that will not be the case,
        // thus eliminating the need for checking any other squares
        self.cells.last().copied().expect("cells cannot be empty") == 0
            // else we check all other squares and verify that they are in order
            && self
                .cells
                .iter()
                .copied()
                .zip(1..self.cells.len())
                .all(|(actual, expected)| actual == expected as u8)
    }

    fn can_move(&self, board_move: BoardMove) -> bool {
        match board_move {
            BoardMove::Up => self.blank_row > 0,
            BoardMove::Down => self.blank_row < self.rows - 1,
            BoardMove::Left => self.blank_col > 0,
            BoardMove::Right => self.blank_col < self.columns - 1,
        }
    }

    fn exec_move(&mut self, board_move: BoardMove) {
        assert!(self.can_move(board_move), "Board cannot execute this move");
        self.apply(Move::unit(board_move));
    }
}

#[cfg(test)]
mod tests {
    use std::iter::once;

    use crate::board::owned::OwnedBoard;
    use crate::board::*;

    fn create_solved_board() -> OwnedBoard {
        OwnedBoard::new(4, 4, (1..=15).chain(once(0)).collect())
    }

    #[test]
    fn solved_board_shows_as_solved() {
        let solved_board = &create_solved_board();

        assert!(solved_board.is_solved());
        assert!(solved_board.is_goal());
    }

    #[test]
    fn goal_position_matches_tile_value() {
        let board = create_solved_board();
        assert_eq!(board.goal_position(6), (1, 1));
        assert_eq!(board.goal_position(15), (3, 2));
    }

    #[test]
    fn blank_cached_position_matches_scan() {
        let board = create_solved_board();
        assert_eq!(board.blank(), (3, 3));
    }

    #[test]
    fn apply_then_undo_restores_board() {
        let mut board = create_solved_board();
        let original = board.clone();

        for mv in board.legal_moves() {
            let mut b = original.clone();
            b.apply(mv);
            b.undo(mv);
            assert_eq!(b, original);
        }
    }

    #[test]
    fn variant_two_enumerates_multi_step_horizontal_moves() {
        let board = OwnedBoard::with_variant(
            4,
            4,
            (1..=15).chain(once(0)).collect(),
            Variant::Two,
        );
        let moves: Vec<_> = board.legal_moves();
        assert!(moves
            .iter()
            .any(|m| m.direction == BoardMove::Left && m.steps == 3));
        assert!(moves
            .iter()
            .any(|m| m.direction == BoardMove::Left && m.steps == 2));
        assert!(!moves.iter().any(|m| m.direction == BoardMove::Right));
    }

    #[test]
    fn variant_two_bounds_multi_step_moves_to_the_border() {
        // blank at column 1: at most 1 cell to the left
        let board = OwnedBoard::with_variant(
            4,
            4,
            vec![1, 0, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15].into_boxed_slice(),
            Variant::Two,
        );
        let moves = board.legal_moves();
        assert!(!moves
            .iter()
            .any(|m| m.direction == BoardMove::Left && m.steps >= 2));
    }
}
