//! Argument parsing (contract C7). Grounded in the teacher's original
//! `main.rs`: the mutually-exclusive algorithm-selection group and its two
//! parsing helpers (`parse_search_order`, `parse_heuristic`) are kept as-is,
//! flattened into a larger [`Cli`] that adds the IDA*/PDB flags this crate's
//! search core needs plus the benchmark-batch flags for [`crate::dispatch`].

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

use crate::board::{BoardMove, Variant};
use crate::solving::algorithm::heuristics::{self, Heuristic};
use crate::solving::movegen::SearchOrder;

/// Parses a 4-character search order string (`"UDLR"`-style) or `"R"` for a
/// random order, the same format the teacher's uninformed solvers accept.
pub fn parse_search_order(s: &str) -> Result<SearchOrder, String> {
    const ORDER_LEN: usize = 4;
    let input = s.to_uppercase();
    if input == "R" {
        Ok(SearchOrder::Random)
    } else if input.len() != ORDER_LEN {
        Err(format!("Order must be {ORDER_LEN} characters"))
    } else {
        let order: Vec<BoardMove> = input
            .chars()
            .map(|c| match c {
                'U' => Ok(BoardMove::Up),
                'D' => Ok(BoardMove::Down),
                'L' => Ok(BoardMove::Left),
                'R' => Ok(BoardMove::Right),
                _ => Err(format!("Invalid character {c}")),
            })
            .collect::<Result<_, _>>()?;

        for i in 1..ORDER_LEN {
            let current = &order[i - 1];
            if order[i..].contains(current) {
                return Err(format!("Duplicate move {current}"));
            }
        }

        Ok(SearchOrder::Provided([
            order[0], order[1], order[2], order[3],
        ]))
    }
}

/// Validates a heuristic id for the legacy `--bf`/`--astar`/`--sma` flags
/// without yet allocating the boxed [`Heuristic`] (clap only needs a valid
/// `String` at parse time; [`parse_heuristic`] builds the real instance).
pub fn validate_heuristic(heuristic_id: &str) -> Result<String, String> {
    parse_heuristic(heuristic_id)?;
    Ok(heuristic_id.to_string())
}

/// Builds the boxed legacy heuristic named by `heuristic_id`.
///
/// # Errors
/// Returns a message naming the accepted ids if `heuristic_id` matches none.
pub fn parse_heuristic(heuristic_id: &str) -> Result<Box<dyn Heuristic>, String> {
    use heuristics::{InversionDistance, LinearConflict, ManhattanDistance};
    match heuristic_id {
        "MD" | "manhattan_distance" => Ok(Box::<ManhattanDistance>::default()),
        "LC" | "linear_conflict" => Ok(Box::<LinearConflict>::default()),
        "ID" | "inversion_distance" => Ok(Box::<InversionDistance>::default()),
        _ => Err("Unknown heuristic id. \
        Possible values are: MD, manhattan_distance, LC, linear_conflict, ID, inversion_distance."
            .to_string()),
    }
}

/// Strips braces and splits a `{v1,v2,...,vk}` pattern spec into sorted,
/// deduplicated tile values, per §6.
///
/// # Errors
/// Returns a message describing the first malformed, out-of-range, or
/// duplicate token found.
pub fn parse_pattern(input: &str) -> Result<Vec<u8>, String> {
    let inner = input
        .trim()
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or_else(|| format!("pattern `{input}` must be wrapped in braces, e.g. {{1,2,3}}"))?;

    let mut values = Vec::new();
    for token in inner.split(',') {
        let token = token.trim();
        let value: u8 = token
            .parse()
            .map_err(|_| format!("`{token}` is not a valid tile value"))?;
        if value == 0 || value > 15 {
            return Err(format!("tile value {value} is out of range 1..=15"));
        }
        if values.contains(&value) {
            return Err(format!("duplicate tile value {value} in pattern"));
        }
        values.push(value);
    }

    if values.is_empty() {
        return Err("pattern must name at least one tile".to_string());
    }
    values.sort_unstable();
    Ok(values)
}

/// The eight mutually-exclusive ways to solve a board, grouped the same way
/// the teacher's original `CliArgs` grouped its six.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct AlgorithmArgs {
    #[arg(short, long, value_name = "ORDER", value_parser = parse_search_order, help = "Breadth-first search")]
    pub bfs: Option<SearchOrder>,

    #[arg(short, long, value_name = "ORDER", value_parser = parse_search_order, help = "Depth-first search")]
    pub dfs: Option<SearchOrder>,

    #[arg(short, long, value_name = "ORDER", value_parser = parse_search_order, help = "Iterative deepening DFS")]
    pub idfs: Option<SearchOrder>,

    #[arg(short = 'h', long = "bf", value_name = "HEURISTIC_ID", value_parser = validate_heuristic, help = "Greedy best-first search")]
    pub best_first: Option<String>,

    #[arg(short, long, value_name = "HEURISTIC_ID", value_parser = validate_heuristic, help = "A* search algorithm")]
    pub astar: Option<String>,

    #[arg(short, long, value_name = "HEURISTIC_ID", value_parser = validate_heuristic, help = "Simplified Memory-bounded A*")]
    pub sma: Option<String>,

    #[arg(long, help = "IDA* over the variant-aware move model")]
    pub ida: bool,

    #[arg(long = "pdb-ida", help = "IDA* using the additive pattern-database heuristic")]
    pub pdb_ida: bool,
}

/// The algorithm [`AlgorithmArgs`] resolved to, with its legacy per-flag
/// heuristic id carried along where applicable.
#[derive(Clone, Debug)]
pub enum Algorithm {
    Bfs(SearchOrder),
    Dfs(SearchOrder),
    Idfs(SearchOrder),
    BestFirst(String),
    AStar(String),
    Sma(String),
    Ida,
    PdbIda,
}

impl AlgorithmArgs {
    /// Resolves the single set flag. Exactly one is set: clap's
    /// `required = true, multiple = false` group guarantees it.
    #[must_use]
    pub fn resolve(&self) -> Algorithm {
        if let Some(order) = &self.bfs {
            return Algorithm::Bfs(order.clone());
        }
        if let Some(order) = &self.dfs {
            return Algorithm::Dfs(order.clone());
        }
        if let Some(order) = &self.idfs {
            return Algorithm::Idfs(order.clone());
        }
        if let Some(id) = &self.best_first {
            return Algorithm::BestFirst(id.clone());
        }
        if let Some(id) = &self.astar {
            return Algorithm::AStar(id.clone());
        }
        if let Some(id) = &self.sma {
            return Algorithm::Sma(id.clone());
        }
        if self.pdb_ida {
            return Algorithm::PdbIda;
        }
        Algorithm::Ida
    }
}

/// Which move model a board follows, named `VariantChoice` to avoid clashing
/// with [`crate::board::Variant`] (its CLI-facing counterpart).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, ValueEnum)]
pub enum VariantChoice {
    #[default]
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
}

impl From<VariantChoice> for Variant {
    fn from(value: VariantChoice) -> Self {
        match value {
            VariantChoice::One => Variant::One,
            VariantChoice::Two => Variant::Two,
        }
    }
}

/// Which incremental heuristic backs `--ida`/`--pdb-ida`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, ValueEnum)]
pub enum HeuristicChoice {
    #[default]
    Manhattan,
    LinearConflict,
    Inversion,
    Pdb,
}

/// A `--build-pdb`/`--pdb-file` pair naming one of the two complementary
/// patterns `--pdb-ida` needs.
#[derive(Clone, Debug)]
pub struct PdbSpec {
    pub pattern: Vec<u8>,
    pub path: PathBuf,
}

/// Top-level CLI, flattening [`AlgorithmArgs`]' exclusive group alongside
/// the ambient flags (variant, heuristic, PDB sources, benchmark batch mode).
#[derive(Parser, Debug)]
#[command(about, arg_required_else_help = true, disable_help_flag = true)]
pub struct Cli {
    #[command(flatten)]
    pub algorithm: AlgorithmArgs,

    #[arg(long, value_enum, default_value_t = VariantChoice::One, help = "Move model: 1 (unit moves) or 2 (adds 2/3-cell horizontal slides)")]
    pub variant: VariantChoice,

    #[arg(long, value_enum, default_value_t = HeuristicChoice::Manhattan, help = "Heuristic for --ida/--pdb-ida")]
    pub heuristic: HeuristicChoice,

    #[arg(long = "build-pdb", value_name = "PATTERN", value_parser = parse_pattern, help = "Pattern to build a PDB for, e.g. {1,2,3,4,5,6,7}; repeat for the complementary pattern")]
    pub build_pdb: Vec<Vec<u8>>,

    #[arg(long = "pdb-file", value_name = "PATH", help = "Where the matching --build-pdb table is cached (loaded if present, built and saved otherwise)")]
    pub pdb_file: Vec<PathBuf>,

    #[arg(long, value_name = "FILE", help = "Benchmark file: one puzzle per line, index followed by 16 tile values")]
    pub benchmark: Option<PathBuf>,

    #[arg(long = "out-dir", value_name = "DIR", help = "Directory to write one result file per benchmark line")]
    pub out_dir: Option<PathBuf>,

    #[arg(long, default_value_t = 1, help = "Worker threads for --benchmark")]
    pub threads: usize,
}

impl Cli {
    /// Pairs up `--build-pdb`/`--pdb-file` positionally.
    ///
    /// # Errors
    /// Returns a message if the two flags weren't given the same number of
    /// times.
    pub fn pdb_specs(&self) -> Result<Vec<PdbSpec>, String> {
        if self.build_pdb.len() != self.pdb_file.len() {
            return Err(format!(
                "--build-pdb given {} time(s) but --pdb-file given {} time(s); they must pair up",
                self.build_pdb.len(),
                self.pdb_file.len()
            ));
        }
        Ok(self
            .build_pdb
            .iter()
            .cloned()
            .zip(self.pdb_file.iter().cloned())
            .map(|(pattern, path)| PdbSpec { pattern, path })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pattern_strips_braces_and_sorts() {
        assert_eq!(parse_pattern("{3,1,2}").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn parse_pattern_rejects_missing_braces() {
        assert!(parse_pattern("1,2,3").is_err());
    }

    #[test]
    fn parse_pattern_rejects_zero() {
        assert!(parse_pattern("{0,1,2}").is_err());
    }

    #[test]
    fn parse_pattern_rejects_duplicates() {
        assert!(parse_pattern("{1,1,2}").is_err());
    }

    #[test]
    fn parse_pattern_rejects_out_of_range() {
        assert!(parse_pattern("{1,2,16}").is_err());
    }

    #[test]
    fn parse_search_order_accepts_random() {
        assert_eq!(parse_search_order("r").unwrap(), SearchOrder::Random);
    }

    #[test]
    fn parse_search_order_rejects_duplicate_directions() {
        assert!(parse_search_order("UUDL").is_err());
    }

    #[test]
    fn pdb_specs_rejects_unpaired_flags() {
        let cli = Cli::try_parse_from(["prog", "--ida", "--build-pdb", "{1,2,3}"]).unwrap();
        assert!(cli.pdb_specs().is_err());
    }
}
