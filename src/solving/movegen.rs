use std::fmt::{Display, Formatter};

use rand::seq::SliceRandom;

use crate::board::{Board, BoardMove};

/// One step taken by an uninformed/heuristic solver. `Double` lets a move
/// generator propose a two-move lookahead pair in one go; none of the
/// generators currently emit it, but solvers that consume move sequences
/// (DFS, BFS, best-first, A*) are written against it so a generator can
/// start doing so without changing their search loops.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MoveSequence {
    Single(BoardMove),
    Double(BoardMove, BoardMove),
}

/// Which order the four directions are tried in at each branching point.
/// Used by the benchmarks to compare search orderings; `Random` re-shuffles
/// on every call, so it is not reproducible across runs.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum SearchOrder {
    Random,
    Provided([BoardMove; 4]),
}

impl Display for SearchOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOrder::Random => write!(f, "R"),
            SearchOrder::Provided(order) => {
                for m in order {
                    write!(f, "{m}")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Clone)]
pub struct MoveGenerator {
    order: SearchOrder,
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new(SearchOrder::Provided([
            BoardMove::Up,
            BoardMove::Down,
            BoardMove::Left,
            BoardMove::Right,
        ]))
    }
}

impl MoveGenerator {
    #[must_use]
    pub fn new(order: SearchOrder) -> Self {
        Self { order }
    }

    fn order(&self) -> [BoardMove; 4] {
        match &self.order {
            SearchOrder::Provided(order) => *order,
            SearchOrder::Random => {
                let mut order = [
                    BoardMove::Up,
                    BoardMove::Down,
                    BoardMove::Left,
                    BoardMove::Right,
                ];
                order.shuffle(&mut rand::thread_rng());
                order
            }
        }
    }

    /// Enumerates the moves legal from `board`'s current position in this
    /// generator's order, skipping the move that would immediately undo
    /// `last_move`.
    #[must_use]
    pub fn generate_moves(
        &self,
        board: &impl Board,
        last_move: Option<BoardMove>,
    ) -> Vec<MoveSequence> {
        self.order()
            .into_iter()
            .filter(|&m| board.can_move(m))
            .filter(|&m| last_move != Some(m.opposite()))
            .map(MoveSequence::Single)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::board::OwnedBoard;

    use super::*;

    fn create_board() -> OwnedBoard {
        r#"4 4
1 2 3 4
5 6 7 8
9 10 11 12
13 14 0 15"#
            .parse()
            .unwrap()
    }

    #[test]
    fn excludes_move_opposite_to_last_move() {
        let board = create_board();
        let generator = MoveGenerator::default();

        let moves = generator.generate_moves(&board, Some(BoardMove::Left));

        assert!(!moves.contains(&MoveSequence::Single(BoardMove::Right)));
    }

    #[test]
    fn only_generates_legal_moves() {
        let board = create_board();
        let generator = MoveGenerator::default();

        let moves = generator.generate_moves(&board, None);

        for m in moves {
            let MoveSequence::Single(m) = m else {
                unreachable!("generator only emits single moves")
            };
            assert!(board.can_move(m));
        }
    }
}
