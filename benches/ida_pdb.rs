use std::iter::once;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use solver::board::{OwnedBoard, Variant};
use solver::pdb::{PatternDatabase, PdbPairHeuristic};
use solver::solving::heuristic::{ManhattanLinearConflict, Provider};
use solver::solving::ida::IdaStarSolver;

fn sample_boards() -> Vec<OwnedBoard> {
    vec![
        OwnedBoard::new(4, 4, (1..=15).chain(once(0)).collect()),
        r"4 4
1 2 3 4
5 6 7 8
9 10 0 11
13 14 15 12"
            .parse()
            .unwrap(),
        r"4 4
1 2 3 4
5 6 7 8
9 10 11 12
13 0 14 15"
            .parse()
            .unwrap(),
        r"4 4
5 1 2 4
9 6 3 8
13 10 7 12
0 14 11 15"
            .parse()
            .unwrap(),
    ]
}

fn bench_analytic(c: &mut Criterion) {
    c.bench_function("IDA* analytic", |b| {
        b.iter_batched(
            sample_boards,
            |boards| {
                for board in boards {
                    let solver =
                        IdaStarSolver::new(black_box(board), ManhattanLinearConflict::new());
                    let _ = black_box(solver.solve());
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_pdb(c: &mut Criterion) {
    // 4+4 split, not the 7+8 split a real run would use: keeps PDB construction
    // itself out of the measured loop and the one-time setup cost small.
    let first = PatternDatabase::build(&[1, 2, 3, 4], Variant::One, 4, 4, None);
    let second = PatternDatabase::build(&[5, 6, 7, 8], Variant::One, 4, 4, None);

    c.bench_function("IDA* PDB-pair", |b| {
        b.iter_batched(
            sample_boards,
            |boards| {
                for board in boards {
                    let heuristic =
                        Provider::Pdb(PdbPairHeuristic::new(first.clone(), second.clone()));
                    let solver = IdaStarSolver::new(black_box(board), heuristic);
                    let _ = black_box(solver.solve());
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_analytic, bench_pdb);
criterion_main!(benches);
