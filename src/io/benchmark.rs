//! Benchmark-file parsing: one puzzle per line, `index` followed by 16
//! whitespace-separated tile values (§6). Reuses [`OwnedBoard::try_from_iter`]
//! after splitting off the leading index token, since the remaining 16
//! tokens are exactly the body a `4 4` header would introduce.

use std::fs;
use std::path::Path;

use crate::board::{OwnedBoard, Variant};
use crate::SolverError;

/// One parsed line of a benchmark file: its puzzle index and starting board.
#[derive(Clone, Debug)]
pub struct BenchmarkLine {
    pub index: u64,
    pub board: OwnedBoard,
}

/// Parses a single non-empty benchmark line.
///
/// # Errors
/// Returns [`SolverError::InvalidInput`] if the index is missing or
/// unparseable, if the line doesn't carry exactly 16 tile values, or if
/// those values aren't a permutation of `0..16`.
pub fn parse_line(line: &str, variant: Variant) -> Result<BenchmarkLine, SolverError> {
    let mut tokens = line.split_whitespace();

    let index: u64 = tokens
        .next()
        .ok_or_else(|| SolverError::InvalidInput("benchmark line is empty".to_string()))?
        .parse()
        .map_err(|_| SolverError::InvalidInput("benchmark line index is not an integer".to_string()))?;

    let tile_tokens: Vec<&str> = tokens.collect();
    if tile_tokens.len() != 16 {
        return Err(SolverError::InvalidInput(format!(
            "benchmark line {index} has {} tile values, expected 16",
            tile_tokens.len()
        )));
    }

    let header = "4 4".to_string();
    let body = tile_tokens.join(" ");
    let board = OwnedBoard::try_from_iter([header.as_str(), body.as_str()].into_iter(), variant)?;

    Ok(BenchmarkLine { index, board })
}

/// Parses every non-blank line of `path` as a benchmark puzzle.
///
/// # Errors
/// Returns [`SolverError::Io`] if the file cannot be read, or propagates the
/// first [`parse_line`] failure.
pub fn parse_benchmark_file(path: impl AsRef<Path>) -> Result<Vec<BenchmarkLine>, SolverError> {
    parse_benchmark_file_with_variant(path, Variant::default())
}

/// As [`parse_benchmark_file`], but building every board under `variant`.
///
/// # Errors
/// Same as [`parse_benchmark_file`].
pub fn parse_benchmark_file_with_variant(
    path: impl AsRef<Path>,
    variant: Variant,
) -> Result<Vec<BenchmarkLine>, SolverError> {
    let content = fs::read_to_string(path).map_err(SolverError::Io)?;
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_line(line, variant))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_an_index_and_a_solved_board() {
        let line = "1 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 0";
        let parsed = parse_line(line, Variant::One).unwrap();
        assert_eq!(parsed.index, 1);
        assert!(parsed.board.is_goal());
    }

    #[test]
    fn rejects_a_line_with_too_few_tiles() {
        let line = "2 1 2 3";
        assert!(parse_line(line, Variant::One).is_err());
    }

    #[test]
    fn rejects_a_missing_index() {
        assert!(parse_line("", Variant::One).is_err());
    }

    #[test]
    fn parses_every_line_in_a_file() {
        let dir = std::env::temp_dir().join(format!(
            "fifteen-solver-benchmark-test-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bench.txt");
        fs::write(
            &path,
            "1 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 0\n2 1 2 3 4 5 6 7 8 9 10 11 12 13 15 14 0\n",
        )
        .unwrap();

        let lines = parse_benchmark_file(&path).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].index, 2);

        fs::remove_file(&path).ok();
        fs::remove_dir(&dir).ok();
    }
}
