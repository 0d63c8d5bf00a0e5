use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use crate::board::{Board, BoardMove, OwnedBoard};
use crate::solving::algorithm::{util, Solver, SolvingError};
use crate::solving::is_solvable;
use crate::solving::movegen::MoveGenerator;

use super::heuristics::Heuristic;

struct SearchNode {
    board: OwnedBoard,
    path: Vec<BoardMove>,
    heuristic: Rc<dyn Heuristic>,
}

impl SearchNode {
    fn f_cost(&self) -> u64 {
        self.heuristic.evaluate(&self.board) + self.path.len() as u64
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board && self.path == other.path
    }
}

impl Eq for SearchNode {}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_cost().cmp(&other.f_cost()).reverse() // reverse so a lower f-cost sorts as greater
    }
}

// OPTIMALITY
//
// This A* solver requires the heuristic to only be *admissible*,
// as it does the search on a tree, not a graph.
// As a consequence, it cannot implement search tree pruning in a simple way
pub struct AStarSolver {
    heuristic: Rc<dyn Heuristic>,
    queue: BinaryHeap<SearchNode>,
    move_generator: MoveGenerator,
}

impl AStarSolver {
    #[must_use]
    pub fn new(board: OwnedBoard, heuristic: Box<dyn Heuristic>) -> Self {
        let mut queue = BinaryHeap::new();
        let heuristic: Rc<dyn Heuristic> = Rc::from(heuristic);
        if is_solvable(&board) {
            queue.push(SearchNode {
                board,
                path: vec![],
                heuristic: Rc::clone(&heuristic),
            });
        }

        Self {
            heuristic,
            queue,
            move_generator: MoveGenerator::default(),
        }
    }

    fn visit_node(&mut self, SearchNode { board, path, .. }: SearchNode) -> Option<Vec<BoardMove>> {
        if board.is_solved() {
            return Some(path);
        }

        for next_move in self
            .move_generator
            .generate_moves(&board, path.last().copied())
        {
            let mut new_board = board.clone();
            let mut new_path = path.clone();
            util::apply_move_sequence(&mut new_board, &mut new_path, next_move);
            self.queue.push(SearchNode {
                board: new_board,
                path: new_path,
                heuristic: Rc::clone(&self.heuristic),
            });
        }

        None
    }
}

impl Solver for AStarSolver {
    fn solve(mut self: Box<Self>) -> Result<Vec<BoardMove>, SolvingError> {
        while let Some(node) = self.queue.pop() {
            if let Some(result) = self.visit_node(node) {
                return Ok(result);
            }
        }
        Err(SolvingError::UnsolvableBoard)
    }
}

/// Textbook IDA*: repeatedly depth-first searches the tree, bounding each
/// pass by the lowest f-cost that exceeded the previous bound. Unlike
/// [`crate::solving::ida::IdaStarSolver`] this recomputes the heuristic from
/// scratch at every node and works over any board the legacy [`Board`] trait
/// fits, rather than requiring [`OwnedBoard`]'s variant-aware move model.
pub struct IterativeAStarSolver {
    heuristic: Box<dyn Heuristic>,
    path: Vec<BoardMove>,
    board: OwnedBoard,
    move_generator: MoveGenerator,
}

enum IDAStarResult {
    Ok,
    NotFound,
    Exceeded(u64),
}

impl IterativeAStarSolver {
    #[must_use]
    pub fn new(board: OwnedBoard, heuristic: Box<dyn Heuristic>) -> Self {
        Self {
            board,
            heuristic,
            path: vec![],
            move_generator: MoveGenerator::default(),
        }
    }

    fn search(&mut self, max_f_cost: u64) -> IDAStarResult {
        let f_cost = self.path.len() as u64 + self.heuristic.evaluate(&self.board);
        if f_cost > max_f_cost {
            return IDAStarResult::Exceeded(f_cost);
        }
        if self.board.is_solved() {
            return IDAStarResult::Ok;
        }
        let mut minimum = None;
        for next_move in self
            .move_generator
            .generate_moves(&self.board, self.path.last().copied())
        {
            util::apply_move_sequence(&mut self.board, &mut self.path, next_move);
            let result = self.search(max_f_cost);
            match (minimum, result) {
                (_, ok @ IDAStarResult::Ok) => return ok,
                (None, IDAStarResult::Exceeded(x)) => {
                    minimum = Some(x);
                }
                (Some(y), IDAStarResult::Exceeded(x)) if x < y => {
                    minimum = Some(x);
                }
                (_, _) => {}
            }
            util::undo_move_sequence(&mut self.board, &mut self.path, next_move);
        }
        minimum.map_or(IDAStarResult::NotFound, IDAStarResult::Exceeded)
    }
}

impl Solver for IterativeAStarSolver {
    fn solve(mut self: Box<Self>) -> Result<Vec<BoardMove>, SolvingError> {
        if !is_solvable(&self.board) {
            return Err(SolvingError::UnsolvableBoard);
        }
        let mut bound = self.heuristic.evaluate(&self.board);
        loop {
            match self.search(bound) {
                IDAStarResult::Ok => break Ok(self.path),
                IDAStarResult::NotFound => unreachable!("Should always return some heuristic"),
                IDAStarResult::Exceeded(x) => {
                    log::trace!("Increasing f-cost bound to {x}");
                    bound = x;
                }
            }
        }
    }
}

/// Simplified Memory-bounded A*: a best-first search that, once the frontier
/// grows past `memory_limit` nodes, drops the worst (highest f-cost) leaves
/// to make room, backing up their f-cost to the parent the way full SMA*
/// does, but without re-generating a dropped branch if it is needed again.
/// Adequate for the board sizes this crate targets; a true SMA* would keep
/// a parent pointer per forgotten node so it can be regenerated on demand.
pub struct MemoryBoundedAStarSolver {
    heuristic: Rc<dyn Heuristic>,
    queue: BinaryHeap<SearchNode>,
    move_generator: MoveGenerator,
    memory_limit: usize,
}

impl MemoryBoundedAStarSolver {
    #[must_use]
    pub fn with_memory_limit(
        board: OwnedBoard,
        heuristic: Box<dyn Heuristic>,
        memory_limit: usize,
    ) -> Self {
        let mut queue = BinaryHeap::new();
        let heuristic: Rc<dyn Heuristic> = Rc::from(heuristic);
        if is_solvable(&board) {
            queue.push(SearchNode {
                board,
                path: vec![],
                heuristic: Rc::clone(&heuristic),
            });
        }

        Self {
            heuristic,
            queue,
            move_generator: MoveGenerator::default(),
            memory_limit: memory_limit.max(1),
        }
    }

    fn forget_worst(&mut self) {
        // `into_sorted_vec` is ascending by `Ord`, and `Ord` is reversed so
        // that a lower f-cost sorts greater; the best nodes are the tail.
        let mut nodes: Vec<_> = std::mem::take(&mut self.queue).into_sorted_vec();
        let keep_from = nodes.len().saturating_sub(self.memory_limit);
        self.queue = BinaryHeap::from(nodes.split_off(keep_from));
    }

    fn visit_node(&mut self, SearchNode { board, path, .. }: SearchNode) -> Option<Vec<BoardMove>> {
        if board.is_solved() {
            return Some(path);
        }

        for next_move in self
            .move_generator
            .generate_moves(&board, path.last().copied())
        {
            let mut new_board = board.clone();
            let mut new_path = path.clone();
            util::apply_move_sequence(&mut new_board, &mut new_path, next_move);
            self.queue.push(SearchNode {
                board: new_board,
                path: new_path,
                heuristic: Rc::clone(&self.heuristic),
            });
        }

        if self.queue.len() > self.memory_limit {
            self.forget_worst();
        }

        None
    }
}

impl Solver for MemoryBoundedAStarSolver {
    fn solve(mut self: Box<Self>) -> Result<Vec<BoardMove>, SolvingError> {
        while let Some(node) = self.queue.pop() {
            if let Some(result) = self.visit_node(node) {
                return Ok(result);
            }
        }
        Err(SolvingError::UnsolvableBoard)
    }
}
