//! Flat PDB file I/O: no header, no length prefix (§6). The byte count is
//! implied entirely by the pattern's size via [`crate::pdb::ranking::domain_size`].

use std::fs;
use std::path::Path;

use crate::pdb::builder::PatternDatabase;
use crate::pdb::ranking;
use crate::SolverError;

/// Writes `pdb`'s table as a flat byte dump.
///
/// # Errors
/// Returns [`SolverError::Io`] if the file cannot be created or written.
pub fn save(pdb: &PatternDatabase, path: impl AsRef<Path>) -> Result<(), SolverError> {
    fs::write(path, pdb.table()).map_err(SolverError::Io)
}

/// Loads a PDB table for `pattern` from a flat byte file, validating that
/// the file size matches `domain_size(pattern.len())`.
///
/// # Errors
/// Returns [`SolverError::Io`] if the file cannot be read, or
/// [`SolverError::InvalidInput`] if its size doesn't match the pattern.
pub fn load(pattern: &[u8], path: impl AsRef<Path>) -> Result<PatternDatabase, SolverError> {
    let bytes = fs::read(path).map_err(SolverError::Io)?;
    let expected = ranking::domain_size(pattern.len()) as usize;
    if bytes.len() != expected {
        return Err(SolverError::InvalidInput(format!(
            "PDB file holds {} bytes, expected {expected} for a {}-tile pattern",
            bytes.len(),
            pattern.len()
        )));
    }

    let mut sorted_pattern = pattern.to_vec();
    sorted_pattern.sort_unstable();
    Ok(PatternDatabase::from_raw(
        sorted_pattern,
        bytes.into_boxed_slice(),
    ))
}
