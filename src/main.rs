use std::io::Read;

use clap::Parser;

use solver::board::{OwnedBoard, Variant};
use solver::cli::{self, Algorithm, Cli, HeuristicChoice, PdbSpec};
use solver::pdb::{file, PatternDatabase, PdbPairHeuristic};
use solver::solving::algorithm::solvers::{
    BFSSolver, BestFSSolver, DFSSolver, IncrementalDFSSolver, IterativeAStarSolver,
    MemoryBoundedAStarSolver,
};
use solver::solving::algorithm::{Solver, SolvingError};
use solver::solving::heuristic::{self, ManhattanLinearConflict};
use solver::solving::ida::IdaStarSolver;
use solver::solving::movegen::MoveGenerator;
use solver::solving::is_solvable;
use solver::{dispatch, io, SolverError};

/// Node budget for `--sma`: the teacher's memory-bounded A* forgets its
/// worst-f-cost frontier nodes once the open list exceeds this many entries.
const SMA_MEMORY_LIMIT: usize = 200_000;

fn main() {
    let cli = Cli::parse();
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .expect("logger initializes exactly once");

    if let Err(err) = run(cli) {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), SolverError> {
    let variant: Variant = cli.variant.into();
    let algorithm = cli.algorithm.resolve();

    if let Some(benchmark_path) = &cli.benchmark {
        return run_benchmark(&cli, benchmark_path, variant, algorithm);
    }

    let board = read_board_from_stdin(variant)?;
    if !is_solvable(&board) {
        return Err(SolverError::Unsolvable);
    }

    match &algorithm {
        Algorithm::Ida | Algorithm::PdbIda => solve_with_ida(board, variant, &algorithm, &cli),
        Algorithm::Bfs(order) => run_legacy(Box::new(BFSSolver::new(
            board,
            MoveGenerator::new(order.clone()),
        ))),
        Algorithm::Dfs(order) => run_legacy(Box::new(DFSSolver::new(
            board,
            MoveGenerator::new(order.clone()),
        ))),
        Algorithm::Idfs(order) => run_legacy(Box::new(IncrementalDFSSolver::new(
            board,
            MoveGenerator::new(order.clone()),
        ))),
        Algorithm::BestFirst(id) => {
            let h = cli::parse_heuristic(id).map_err(SolverError::InvalidInput)?;
            run_legacy(Box::new(BestFSSolver::new(board, h)))
        }
        Algorithm::AStar(id) => {
            let h = cli::parse_heuristic(id).map_err(SolverError::InvalidInput)?;
            run_legacy(Box::new(IterativeAStarSolver::new(board, h)))
        }
        Algorithm::Sma(id) => {
            let h = cli::parse_heuristic(id).map_err(SolverError::InvalidInput)?;
            run_legacy(Box::new(MemoryBoundedAStarSolver::with_memory_limit(
                board,
                h,
                SMA_MEMORY_LIMIT,
            )))
        }
    }
}

fn run_benchmark(
    cli: &Cli,
    benchmark_path: &std::path::Path,
    variant: Variant,
    algorithm: Algorithm,
) -> Result<(), SolverError> {
    let out_dir = cli.out_dir.clone().ok_or_else(|| {
        SolverError::InvalidInput("--benchmark requires --out-dir".to_string())
    })?;

    if !matches!(algorithm, Algorithm::Ida | Algorithm::PdbIda) {
        return Err(SolverError::InvalidInput(
            "--benchmark only supports --ida and --pdb-ida".to_string(),
        ));
    }

    let lines = io::parse_benchmark_file_with_variant(benchmark_path, variant)?;
    let heuristic_choice = effective_heuristic_choice(&algorithm, cli.heuristic);

    match heuristic_choice {
        HeuristicChoice::Pdb => {
            let specs = cli.pdb_specs().map_err(SolverError::InvalidInput)?;
            let (first, second) = build_pdb_pair(&specs, variant)?;
            dispatch::run(lines, &out_dir, cli.threads, move || {
                heuristic::Provider::Pdb(PdbPairHeuristic::new(first.clone(), second.clone()))
            })
        }
        HeuristicChoice::Manhattan => dispatch::run(lines, &out_dir, cli.threads, || {
            heuristic::Provider::Analytic(ManhattanLinearConflict::manhattan_only())
        }),
        HeuristicChoice::LinearConflict | HeuristicChoice::Inversion => {
            dispatch::run(lines, &out_dir, cli.threads, || {
                heuristic::Provider::Analytic(ManhattanLinearConflict::new())
            })
        }
    }
}

fn effective_heuristic_choice(algorithm: &Algorithm, requested: HeuristicChoice) -> HeuristicChoice {
    if matches!(algorithm, Algorithm::PdbIda) {
        HeuristicChoice::Pdb
    } else {
        requested
    }
}

fn solve_with_ida(
    board: OwnedBoard,
    variant: Variant,
    algorithm: &Algorithm,
    cli: &Cli,
) -> Result<(), SolverError> {
    let heuristic_choice = effective_heuristic_choice(algorithm, cli.heuristic);

    let provider = match heuristic_choice {
        HeuristicChoice::Manhattan => {
            heuristic::Provider::Analytic(ManhattanLinearConflict::manhattan_only())
        }
        HeuristicChoice::LinearConflict | HeuristicChoice::Inversion => {
            heuristic::Provider::Analytic(ManhattanLinearConflict::new())
        }
        HeuristicChoice::Pdb => {
            let specs = cli.pdb_specs().map_err(SolverError::InvalidInput)?;
            let (first, second) = build_pdb_pair(&specs, variant)?;
            heuristic::Provider::Pdb(PdbPairHeuristic::new(first, second))
        }
    };

    let solver = IdaStarSolver::new(board, provider).with_progress(|bound, expanded, generated| {
        log::debug!("bound {bound}, expanded {expanded}, generated {generated}");
    });

    let outcome = solver.solve()?;
    println!(
        "Elapsed: {:.3}s, Expanded: {}, Generated: {}, Length: {}",
        outcome.elapsed.as_secs_f64(),
        outcome.nodes_expanded,
        outcome.nodes_generated,
        outcome.path_length
    );
    for mv in &outcome.path {
        println!("{mv}");
    }
    Ok(())
}

fn run_legacy(solver: Box<dyn Solver>) -> Result<(), SolverError> {
    match solver.solve() {
        Ok(moves) => {
            println!("Length: {}", moves.len());
            for mv in moves {
                println!("{mv}");
            }
            Ok(())
        }
        Err(SolvingError::UnsolvableBoard) => Err(SolverError::Unsolvable),
        Err(SolvingError::AlgorithmError(err)) => Err(SolverError::InvalidInput(err.to_string())),
    }
}

fn resolve_pdb(spec: &PdbSpec, variant: Variant) -> Result<PatternDatabase, SolverError> {
    if spec.path.exists() {
        log::info!(
            "loading PDB for pattern {:?} from {}",
            spec.pattern,
            spec.path.display()
        );
        file::load(&spec.pattern, &spec.path)
    } else {
        log::info!("building PDB for pattern {:?}", spec.pattern);
        let pdb = PatternDatabase::build(&spec.pattern, variant, 4, 4, None);
        file::save(&pdb, &spec.path)?;
        Ok(pdb)
    }
}

fn build_pdb_pair(
    specs: &[PdbSpec],
    variant: Variant,
) -> Result<(PatternDatabase, PatternDatabase), SolverError> {
    match specs {
        [first, second] => Ok((resolve_pdb(first, variant)?, resolve_pdb(second, variant)?)),
        other => Err(SolverError::InvalidInput(format!(
            "--heuristic pdb needs exactly two --build-pdb/--pdb-file pairs, found {}",
            other.len()
        ))),
    }
}

fn read_board_from_stdin(variant: Variant) -> Result<OwnedBoard, SolverError> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(SolverError::Io)?;
    OwnedBoard::try_from_iter(buffer.lines(), variant).map_err(SolverError::from)
}
