//! Benchmark-file parsing and per-puzzle result output (contract C7).

pub mod benchmark;
pub mod result;

pub use benchmark::{parse_benchmark_file, parse_benchmark_file_with_variant, BenchmarkLine};
pub use result::{write_result, PuzzleResult};
