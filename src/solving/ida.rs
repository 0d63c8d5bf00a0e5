//! Iterative-deepening A* over [`OwnedBoard`]'s variant-aware move model
//! (contract C5). Unlike [`super::algorithm::astar::IterativeAStarSolver`],
//! this engine works against the multi-step `legal_moves`/`apply`/`undo`
//! contract so it can express [`Variant::Two`]'s horizontal slides, takes its
//! heuristic through [`IncrementalHeuristic`] (analytic or PDB-backed), and
//! keeps a transposition set of every state visited along the current path
//! rather than just pruning the literal last move.

use std::time::{Duration, Instant};

use crate::board::{Move, OwnedBoard};
use crate::solving::heuristic::IncrementalHeuristic;

/// What [`IdaStarSolver::solve`] reports back to the caller (C6).
pub struct SolveOutcome {
    pub path: Vec<Move>,
    pub path_length: usize,
    pub elapsed: Duration,
    pub nodes_expanded: u64,
    pub nodes_generated: u64,
    pub final_board: OwnedBoard,
}

/// A candidate move paired with the heuristic value of the board it leads to,
/// computed once up front so successors can be sorted before recursing.
struct Candidate {
    mv: Move,
    h_child: u64,
}

/// Sentinel returned by one bounded depth-first pass.
enum SearchResult {
    Solved,
    /// No successor was ever tried (a provably unsolvable input).
    Unbounded,
    /// The minimum f-cost that exceeded `bound` among every candidate tried.
    Exceeded(u64),
}

/// Cost-bounded depth-first iterative deepening, per C5. One real move costs
/// one unit under both variants (see the cost-model decision in DESIGN.md).
pub struct IdaStarSolver<H: IncrementalHeuristic> {
    board: OwnedBoard,
    heuristic: H,
    path: Vec<Move>,
    transposition: std::collections::HashSet<Box<[u8]>>,
    nodes_expanded: u64,
    nodes_generated: u64,
    progress: Option<Box<dyn FnMut(u64, u64, u64)>>,
}

impl<H: IncrementalHeuristic> IdaStarSolver<H> {
    #[must_use]
    pub fn new(board: OwnedBoard, heuristic: H) -> Self {
        Self {
            board,
            heuristic,
            path: Vec::new(),
            transposition: std::collections::HashSet::new(),
            nodes_expanded: 0,
            nodes_generated: 0,
            progress: None,
        }
    }

    /// Installs a callback invoked on every bound transition with
    /// `(bound, nodes_expanded, nodes_generated)`, the numeric counterpart to
    /// the `log::trace!("Increasing f-cost bound to {}", x)` line this search
    /// also emits.
    #[must_use]
    pub fn with_progress(mut self, callback: impl FnMut(u64, u64, u64) + 'static) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    fn current_g(&self) -> u64 {
        self.path.len() as u64
    }

    /// Ranks candidates by remaining legal moves, excluding the literal
    /// reverse of the last applied move (step 3-4 of the algorithm).
    fn successor_candidates(&mut self) -> Vec<Candidate> {
        let last_direction = self.path.last().map(|mv| mv.direction);
        let moves = self.board.legal_moves();

        let mut candidates = Vec::with_capacity(moves.len());
        for mv in moves {
            if let Some(dir) = last_direction {
                if mv.direction == dir.opposite() {
                    continue;
                }
            }

            self.board.apply(mv);
            let key: Box<[u8]> = self.board.tiles().into();
            if !self.transposition.contains(&key) {
                self.heuristic.on_apply(&self.board, mv);
                let h_child = self.heuristic.evaluate(&self.board);
                self.heuristic.on_undo(&self.board, mv);
                candidates.push(Candidate { mv, h_child });
                self.nodes_generated += 1;
            }
            self.board.undo(mv);
        }

        candidates.sort_by_key(|c| c.h_child);
        candidates
    }

    fn search(&mut self, bound: u64) -> SearchResult {
        let key: Box<[u8]> = self.board.tiles().into();
        self.transposition.insert(key.clone());

        if self.board.is_goal() {
            self.transposition.remove(&key);
            return SearchResult::Solved;
        }

        // Only nodes whose successors actually get explored count as expanded;
        // an already-solved root returns above without ever reaching here.
        self.nodes_expanded += 1;

        let g = self.current_g();
        let mut minimum_excess: Option<u64> = None;

        for candidate in self.successor_candidates() {
            let f = g + 1 + candidate.h_child;
            if f > bound {
                minimum_excess = Some(minimum_excess.map_or(f, |m| m.min(f)));
                continue;
            }

            self.board.apply(candidate.mv);
            self.heuristic.on_apply(&self.board, candidate.mv);
            self.path.push(candidate.mv);

            match self.search(bound) {
                SearchResult::Solved => return SearchResult::Solved,
                SearchResult::Unbounded => {}
                SearchResult::Exceeded(x) => {
                    minimum_excess = Some(minimum_excess.map_or(x, |m| m.min(x)));
                }
            }

            self.path.pop();
            self.heuristic.on_undo(&self.board, candidate.mv);
            self.board.undo(candidate.mv);
        }

        self.transposition.remove(&key);
        minimum_excess.map_or(SearchResult::Unbounded, SearchResult::Exceeded)
    }

    /// Runs the driver loop (Initializing -> Iterating(b) -> ... -> Solved |
    /// Unsolvable) and reports the outcome.
    ///
    /// # Errors
    /// Returns [`crate::SolverError::Unsolvable`] if no bound ever yields a
    /// solved state, which only happens for a provably unsolvable board.
    pub fn solve(mut self) -> Result<SolveOutcome, crate::SolverError> {
        let start = Instant::now();
        self.heuristic.reset();

        let mut bound = self.heuristic.evaluate(&self.board);
        loop {
            match self.search(bound) {
                SearchResult::Solved => {
                    let path = self.path.clone();
                    return Ok(SolveOutcome {
                        path_length: path.len(),
                        path,
                        elapsed: start.elapsed(),
                        nodes_expanded: self.nodes_expanded,
                        nodes_generated: self.nodes_generated,
                        final_board: self.board,
                    });
                }
                SearchResult::Unbounded => return Err(crate::SolverError::Unsolvable),
                SearchResult::Exceeded(next_bound) => {
                    log::trace!("Increasing f-cost bound to {next_bound}");
                    if let Some(cb) = self.progress.as_mut() {
                        cb(next_bound, self.nodes_expanded, self.nodes_generated);
                    }
                    bound = next_bound;
                }
            }
        }
    }
}
