//! Additive pattern databases (C3/C4): lexicographic ranking over partial
//! tile placements, a BFS builder that fills a table per pattern, and a
//! heuristic that sums two complementary tables' lookups.

pub mod abstract_state;
pub mod builder;
pub mod file;
pub mod heuristic;
pub mod ranking;

pub use builder::PatternDatabase;
pub use heuristic::PdbPairHeuristic;
