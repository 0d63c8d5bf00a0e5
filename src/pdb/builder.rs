//! BFS pattern database builder (contract C4).
//!
//! Starts from the goal placement of a pattern and expands outward one real
//! move at a time, writing the pattern-only rank's cost the first time it is
//! reached (BFS visits states in non-decreasing cost order, so the first
//! arrival is always minimal) while a separate closed set keyed on
//! pattern-plus-blank prevents re-expanding a state already seen.

use std::collections::VecDeque;
use std::sync::Arc;

use bit_set::BitSet;

use crate::board::Variant;
use crate::pdb::{abstract_state, ranking};

/// Unvisited sentinel written into every PDB slot before the BFS starts.
const UNVISITED: u8 = 0xFF;

/// A single pattern's cost-to-goal table, addressed by [`ranking::rank`]
/// over the pattern's dual (without the blank).
///
/// The table is reference-counted so every worker thread in [`crate::dispatch`]
/// can hold its own [`PdbPairHeuristic`](crate::pdb::PdbPairHeuristic) without
/// duplicating the underlying bytes.
#[derive(Clone)]
pub struct PatternDatabase {
    pattern: Vec<u8>,
    table: Arc<[u8]>,
}

impl PatternDatabase {
    #[must_use]
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    #[must_use]
    pub fn table(&self) -> &[u8] {
        &self.table
    }

    /// Looks up the cost-to-goal for the pattern's placement in `tiles`.
    #[must_use]
    pub fn lookup(&self, tiles: &[u8]) -> u8 {
        let positions = abstract_state::dual(tiles, &self.pattern);
        self.table[ranking::rank(&positions) as usize]
    }

    /// Loads a previously built table for `pattern` from its raw bytes (the
    /// PDB file format has no header; size is implied by `pattern.len()`).
    #[must_use]
    pub fn from_raw(pattern: Vec<u8>, table: Box<[u8]>) -> Self {
        Self {
            pattern,
            table: Arc::from(table),
        }
    }

    /// Runs the BFS build described in C4 for `pattern` under `variant`.
    /// `progress`, if given, is invoked periodically with the running
    /// dequeued-state count.
    #[must_use]
    pub fn build(
        pattern: &[u8],
        variant: Variant,
        rows: u8,
        columns: u8,
        mut progress: Option<Box<dyn FnMut(u64)>>,
    ) -> Self {
        let mut pattern = pattern.to_vec();
        pattern.sort_unstable();
        let k = pattern.len();
        let with_blank = abstract_state::pattern_with_blank(&pattern);

        let pdb_size = ranking::domain_size(k) as usize;
        let closed_size = ranking::domain_size(k + 1) as usize;

        let mut table = vec![UNVISITED; pdb_size].into_boxed_slice();
        let mut closed = BitSet::with_capacity(closed_size);

        let goal_board = abstract_state::goal_abstract_board(rows, columns, &pattern, variant);
        let goal_pattern_rank = ranking::rank(&abstract_state::dual(goal_board.tiles(), &pattern));
        let goal_closed_rank = ranking::rank(&abstract_state::dual(goal_board.tiles(), &with_blank));

        table[goal_pattern_rank as usize] = 0;
        closed.insert(goal_closed_rank as usize);

        let mut queue = VecDeque::new();
        queue.push_back((goal_closed_rank, goal_pattern_rank, 0u32));

        let mut dequeued = 0u64;
        while let Some((closed_rank, parent_pattern_rank, cost)) = queue.pop_front() {
            dequeued += 1;
            if let Some(cb) = progress.as_mut() {
                if dequeued % 10_000 == 0 {
                    cb(dequeued);
                }
            }

            let positions_with_blank = ranking::unrank(closed_rank, k + 1);
            let mut board = abstract_state::board_from_dual(
                rows,
                columns,
                &with_blank,
                &positions_with_blank,
                variant,
            );

            for mv in board.legal_moves() {
                board.apply(mv);

                let new_closed_positions = abstract_state::dual(board.tiles(), &with_blank);
                let new_closed_rank = ranking::rank(&new_closed_positions);

                if !closed.contains(new_closed_rank as usize) {
                    closed.insert(new_closed_rank as usize);

                    let new_pattern_positions = abstract_state::dual(board.tiles(), &pattern);
                    let new_pattern_rank = ranking::rank(&new_pattern_positions);
                    let new_cost = cost + 1;

                    if new_pattern_rank != parent_pattern_rank
                        && table[new_pattern_rank as usize] == UNVISITED
                    {
                        table[new_pattern_rank as usize] =
                            u8::try_from(new_cost).expect("15-puzzle PDB costs fit in a byte");
                    }

                    queue.push_back((new_closed_rank, new_pattern_rank, new_cost));
                }

                board.undo(mv);
            }
        }

        log::info!(
            "built PDB for pattern {pattern:?}: {dequeued} states dequeued, {pdb_size} table entries"
        );

        Self {
            pattern,
            table: Arc::from(table),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_placement_has_cost_zero() {
        let pdb = PatternDatabase::build(&[1, 2, 3], Variant::One, 4, 4, None);
        let goal_board = abstract_state::goal_abstract_board(4, 4, &[1, 2, 3], Variant::One);
        assert_eq!(pdb.lookup(goal_board.tiles()), 0);
    }

    #[test]
    fn every_successor_is_at_most_one_costlier_than_its_parent() {
        let pattern = vec![1, 2, 3];
        let pdb = PatternDatabase::build(&pattern, Variant::One, 4, 4, None);
        let mut board = abstract_state::goal_abstract_board(4, 4, &pattern, Variant::One);

        for mv in board.legal_moves() {
            let parent_cost = pdb.lookup(board.tiles());
            board.apply(mv);
            let child_cost = pdb.lookup(board.tiles());
            assert!(child_cost <= parent_cost + 1);
            board.undo(mv);
        }
    }

    #[test]
    fn every_pattern_rank_is_eventually_reached_for_a_small_pattern() {
        let pdb = PatternDatabase::build(&[1, 2], Variant::One, 4, 4, None);
        assert!(pdb.table().iter().all(|&c| c != UNVISITED));
    }
}
