//! Per-puzzle result-file writer, producing the human-readable layout from §6:
//! initial grid, a summary line, the goal grid, and the move path.

use std::fs;
use std::path::Path;

use crate::board::{Board, OwnedBoard};
use crate::solving::ida::SolveOutcome;
use crate::SolverError;

/// One benchmark line's outcome, paired with its puzzle index and starting
/// board so the writer doesn't need to reach back into the benchmark file.
pub struct PuzzleResult {
    pub index: u64,
    pub initial: OwnedBoard,
    pub outcome: Result<SolveOutcome, SolverError>,
}

fn format_grid(board: &impl Board) -> String {
    let (rows, columns) = board.dimensions();
    let mut out = String::new();
    for row in 0..rows {
        for column in 0..columns {
            out.push_str(&format!("{:>3} ", board.at(row, column)));
        }
        out.push('\n');
    }
    out
}

/// Renders `result` in the §6 layout.
#[must_use]
pub fn render(result: &PuzzleResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Puzzle {}\n", result.index));
    out.push_str("Initial state:\n");
    out.push_str(&format_grid(&result.initial));

    match &result.outcome {
        Ok(outcome) => {
            out.push_str(&format!(
                "Elapsed: {:.3}s, Expanded: {}, Generated: {}, Length: {}\n",
                outcome.elapsed.as_secs_f64(),
                outcome.nodes_expanded,
                outcome.nodes_generated,
                outcome.path_length
            ));
            out.push_str("Goal state:\n");
            out.push_str(&format_grid(&outcome.final_board));
            for mv in &outcome.path {
                out.push_str(&format!("{mv}\n"));
            }
        }
        Err(err) => {
            out.push_str(&format!("Length: -1 ({err})\n"));
        }
    }

    out
}

/// Writes `result` to `<dir>/<index>.txt`.
///
/// # Errors
/// Returns [`SolverError::Io`] if `dir` doesn't exist or the file can't be
/// written.
pub fn write_result(dir: impl AsRef<Path>, result: &PuzzleResult) -> Result<(), SolverError> {
    let path = dir.as_ref().join(format!("{}.txt", result.index));
    fs::write(path, render(result)).map_err(SolverError::Io)
}

#[cfg(test)]
mod tests {
    use std::iter::once;
    use std::time::Duration;

    use super::*;
    use crate::board::Move;

    fn solved_board() -> OwnedBoard {
        OwnedBoard::new(4, 4, (1..=15).chain(once(0)).collect())
    }

    #[test]
    fn render_includes_the_summary_line_and_path() {
        let outcome = SolveOutcome {
            path: vec![Move::unit(crate::board::BoardMove::Up)],
            path_length: 1,
            elapsed: Duration::from_millis(5),
            nodes_expanded: 2,
            nodes_generated: 4,
            final_board: solved_board(),
        };
        let result = PuzzleResult {
            index: 7,
            initial: solved_board(),
            outcome: Ok(outcome),
        };

        let text = render(&result);
        assert!(text.contains("Puzzle 7"));
        assert!(text.contains("Expanded: 2"));
        assert!(text.contains("Direction: U, Steps: 1"));
    }

    #[test]
    fn render_reports_unsolvable_as_length_negative_one() {
        let result = PuzzleResult {
            index: 1,
            initial: solved_board(),
            outcome: Err(SolverError::Unsolvable),
        };
        let text = render(&result);
        assert!(text.contains("Length: -1"));
    }

    #[test]
    fn write_result_creates_a_file_named_after_the_index() {
        let dir = std::env::temp_dir().join(format!(
            "fifteen-solver-result-test-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();

        let result = PuzzleResult {
            index: 3,
            initial: solved_board(),
            outcome: Err(SolverError::Unsolvable),
        };
        write_result(&dir, &result).unwrap();
        assert!(dir.join("3.txt").exists());

        fs::remove_file(dir.join("3.txt")).ok();
        fs::remove_dir(&dir).ok();
    }
}
