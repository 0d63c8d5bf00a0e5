use solver::board::{Board, BoardMove, OwnedBoard};
use solver::solving::algorithm::Solver;

/// A small, non-trivial 3x3 board every uninformed/heuristic solver test
/// shares, so `produces_shortest_solution` can assert on a known length.
pub const TEST_BOARD: &str = r"3 3
1 2 3
0 4 6
7 5 8
";

/// Optimal solution length for [`TEST_BOARD`] (swap right, up, left).
pub const TEST_BOARD_SHORTEST_LENGTH: usize = 3;

pub fn is_valid_solution(mut board: OwnedBoard, solution: Vec<BoardMove>) -> bool {
    for m in solution {
        board.exec_move(m);
    }

    board.is_solved()
}

pub fn solution_to_string(solution: &[BoardMove]) -> String {
    solution.iter().map(BoardMove::to_string).collect()
}

/// Builds a solver over [`TEST_BOARD`] via `build`, runs it, and asserts the
/// returned move sequence actually reaches the goal.
pub fn assert_produces_valid_solution<S: Solver>(build: impl FnOnce(OwnedBoard) -> S) {
    let board: OwnedBoard = TEST_BOARD.parse().expect("test board parses");
    let solver = build(board.clone());

    let solution = Box::new(solver).solve().expect("board is solvable");
    eprintln!("Solution length {}", solution.len());
    eprintln!("{}", solution_to_string(&solution));

    assert!(
        is_valid_solution(board, solution),
        "Solution produced is not valid"
    );
}

/// As [`assert_produces_valid_solution`], but also checks the solution is
/// optimal for [`TEST_BOARD`].
pub fn assert_produces_shortest_solution<S: Solver>(build: impl FnOnce(OwnedBoard) -> S) {
    let board: OwnedBoard = TEST_BOARD.parse().expect("test board parses");
    let solver = build(board);

    let solution = Box::new(solver).solve().expect("board is solvable");
    assert_eq!(
        TEST_BOARD_SHORTEST_LENGTH,
        solution.len(),
        "Solution is not the shortest one"
    );
}
