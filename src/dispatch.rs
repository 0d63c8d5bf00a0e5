//! Parallel benchmark dispatch (contract C8).
//!
//! Grounded in the teacher's [`crate::solving::visited::VisitedPositions`]
//! sharing pattern (`Arc`-backed, safe to read from many threads), extended
//! to fan an entire benchmark file out across worker threads: each worker
//! pulls the next unclaimed line from a shared queue, builds a solve-private
//! heuristic, runs IDA*, and serializes its result through a single mutex
//! (§5 — solve-private board/path/heuristic per worker, read-only sharing of
//! anything immutable, mutex-guarded output).

use std::collections::VecDeque;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::io::benchmark::BenchmarkLine;
use crate::io::result::PuzzleResult;
use crate::solving::heuristic::IncrementalHeuristic;
use crate::solving::ida::IdaStarSolver;
use crate::SolverError;

/// Solves every line in `lines`, writing one result file per puzzle into
/// `out_dir`. `threads` workers run concurrently; `make_heuristic` is called
/// once per puzzle (from whichever worker picks it up) so each solve gets its
/// own heuristic cache, per §5's solve-private rule.
///
/// # Errors
/// Returns [`SolverError::Io`] if `out_dir` cannot be written to at all
/// (checked once up front); failures solving or writing an individual
/// puzzle are logged and recorded in that puzzle's result file instead of
/// aborting the whole run.
pub fn run<F, H>(
    lines: Vec<BenchmarkLine>,
    out_dir: &Path,
    threads: usize,
    make_heuristic: F,
) -> Result<(), SolverError>
where
    F: Fn() -> H + Sync,
    H: IncrementalHeuristic,
{
    std::fs::create_dir_all(out_dir).map_err(SolverError::Io)?;

    let total = lines.len() as u64;
    let queue = Mutex::new(VecDeque::from(lines));
    let sink = Mutex::new(());
    let completed = AtomicU64::new(0);
    let worker_count = threads.max(1);

    log::info!("dispatching {total} puzzles across {worker_count} worker thread(s)");

    std::thread::scope(|scope| {
        for _ in 0..worker_count {
            scope.spawn(|| loop {
                let line = {
                    let mut queue = queue.lock().expect("benchmark queue mutex");
                    queue.pop_front()
                };
                let Some(line) = line else {
                    break;
                };

                let heuristic = make_heuristic();
                let solver = IdaStarSolver::new(line.board.clone(), heuristic);
                let outcome = solver.solve();

                let result = PuzzleResult {
                    index: line.index,
                    initial: line.board,
                    outcome,
                };

                let _guard = sink.lock().expect("result sink mutex");
                if let Err(err) = crate::io::write_result(out_dir, &result) {
                    log::error!("failed to write result for puzzle {}: {err}", result.index);
                }
                let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                println!("[{done}/{total}] puzzle {} done", result.index);
            });
        }
    });

    log::info!("dispatch finished: {total} puzzles processed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::iter::once;

    use super::*;
    use crate::board::{OwnedBoard, Variant};
    use crate::solving::heuristic::ManhattanLinearConflict;

    #[test]
    fn writes_one_result_file_per_puzzle() {
        let dir = std::env::temp_dir().join(format!(
            "fifteen-solver-dispatch-test-{}",
            std::process::id()
        ));

        let solved: Box<[u8]> = (1..=15).chain(once(0)).collect();
        let lines = vec![
            BenchmarkLine {
                index: 1,
                board: OwnedBoard::with_variant(4, 4, solved.clone(), Variant::One),
            },
            BenchmarkLine {
                index: 2,
                board: OwnedBoard::with_variant(4, 4, solved, Variant::One),
            },
        ];

        run(lines, &dir, 2, ManhattanLinearConflict::new).unwrap();

        assert!(dir.join("1.txt").exists());
        assert!(dir.join("2.txt").exists());

        std::fs::remove_file(dir.join("1.txt")).ok();
        std::fs::remove_file(dir.join("2.txt")).ok();
        std::fs::remove_dir(&dir).ok();
    }
}
