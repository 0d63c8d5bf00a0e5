//! Additive PDB-pair heuristic: the sum of two complementary pattern
//! lookups, installed wherever [`IncrementalHeuristic`] is accepted (C5/C6).

use crate::board::{Move, OwnedBoard};
use crate::pdb::builder::PatternDatabase;
use crate::solving::heuristic::IncrementalHeuristic;

/// Sums the cost-to-goal of two disjoint patterns. Admissible because each
/// table entry is itself an admissible lower bound on repositioning its
/// pattern's tiles, and the two patterns never share a tile.
///
/// Cloning is cheap: the underlying tables are reference-counted, so each
/// worker thread in [`crate::dispatch`] can hold its own instance.
#[derive(Clone)]
pub struct PdbPairHeuristic {
    first: PatternDatabase,
    second: PatternDatabase,
}

impl PdbPairHeuristic {
    #[must_use]
    pub fn new(first: PatternDatabase, second: PatternDatabase) -> Self {
        Self { first, second }
    }
}

impl IncrementalHeuristic for PdbPairHeuristic {
    fn evaluate(&mut self, board: &OwnedBoard) -> u64 {
        u64::from(self.first.lookup(board.tiles())) + u64::from(self.second.lookup(board.tiles()))
    }

    fn on_apply(&mut self, _board: &OwnedBoard, _mv: Move) {}

    fn on_undo(&mut self, _board: &OwnedBoard, _mv: Move) {}

    fn reset(&mut self) {}
}
