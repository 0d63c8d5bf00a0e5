//! Builds and reads the partial ("abstract") boards the PDB builder searches
//! over: a full 4x4 board where only the tiles in a pattern (plus the blank)
//! carry real values, and every other cell holds [`SENTINEL`].
//!
//! Reusing [`OwnedBoard`] here (rather than a bespoke abstract-board type)
//! means the abstracted search gets `legal_moves`/`apply`/`undo` for free,
//! generalized to both variants exactly like the real board (C1).

use crate::board::{OwnedBoard, Variant};

/// Marks a cell the pattern doesn't track. Never a legal tile value (those
/// are `0..=15`), so it can never collide with a real dual extraction.
pub const SENTINEL: u8 = 255;

/// Builds the abstract board holding the goal placement of `pattern`: each
/// tile `p` sits at its real per-board goal cell `p - 1`, the blank sits at
/// the real board's goal cell (the last one), and every other cell is
/// [`SENTINEL`].
///
/// `pattern` must be sorted ascending and contain no `0`.
#[must_use]
pub fn goal_abstract_board(rows: u8, columns: u8, pattern: &[u8], variant: Variant) -> OwnedBoard {
    let total = rows as usize * columns as usize;
    let mut cells = vec![SENTINEL; total];

    for &tile in pattern {
        let goal_index = (tile - 1) as usize;
        cells[goal_index] = tile;
    }
    cells[total - 1] = 0;

    OwnedBoard::with_variant(rows, columns, cells.into_boxed_slice(), variant)
}

/// Extracts the dual (positions, in ascending-value order) of `values` from
/// `tiles`. `values` must be sorted ascending.
///
/// # Panics
/// Panics if some value in `values` is absent from `tiles`.
#[must_use]
pub fn dual(tiles: &[u8], values: &[u8]) -> Vec<u8> {
    values
        .iter()
        .map(|&value| {
            tiles
                .iter()
                .position(|&t| t == value)
                .expect("value must be present in an abstract board built from this pattern") as u8
        })
        .collect()
}

/// `pattern`, plus the blank, sorted ascending (`0` always sorts first).
#[must_use]
pub fn pattern_with_blank(pattern: &[u8]) -> Vec<u8> {
    std::iter::once(0).chain(pattern.iter().copied()).collect()
}

/// Inverse of [`dual`]: rebuilds the abstract board from a dual vector,
/// filling every cell `values` doesn't mention with [`SENTINEL`].
#[must_use]
pub fn board_from_dual(
    rows: u8,
    columns: u8,
    values: &[u8],
    positions: &[u8],
    variant: Variant,
) -> OwnedBoard {
    let total = rows as usize * columns as usize;
    let mut cells = vec![SENTINEL; total];
    for (&value, &cell) in values.iter().zip(positions) {
        cells[cell as usize] = value;
    }
    OwnedBoard::with_variant(rows, columns, cells.into_boxed_slice(), variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_abstract_board_places_pattern_tiles_at_their_real_goal_cells() {
        let board = goal_abstract_board(4, 4, &[1, 2, 3, 4, 5, 6, 7], Variant::One);
        assert_eq!(board.tiles()[0], 1);
        assert_eq!(board.tiles()[6], 7);
        assert_eq!(board.tiles()[15], 0);
        assert_eq!(board.tiles()[7], SENTINEL);
    }

    #[test]
    fn dual_extracts_positions_in_ascending_value_order() {
        let board = goal_abstract_board(4, 4, &[1, 2, 3], Variant::One);
        let with_blank = pattern_with_blank(&[1, 2, 3]);
        let positions = dual(board.tiles(), &with_blank);
        assert_eq!(positions, vec![15, 0, 1, 2]);
    }
}
