//! Parallel counting over a list of SMILES lines.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::counts::{count_smiles, CountVector};
use crate::smiles::MoleculeError;

/// A SMILES string and the 1-based line it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    pub line: usize,
    pub smiles: String,
}

/// Splits batch input into molecules.
///
/// Blank lines and lines starting with `#` are skipped but still advance
/// the line counter. Only the first whitespace-separated field is kept, so
/// a trailing name or identifier column is ignored.
pub fn input_lines(text: &str) -> Vec<InputLine> {
    text.lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            let smiles = trimmed.split_whitespace().next()?;
            Some(InputLine {
                line: i + 1,
                smiles: smiles.to_string(),
            })
        })
        .collect()
}

/// A successfully counted molecule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Counted {
    pub line: usize,
    pub smiles: String,
    pub counts: CountVector,
}

/// Counts every line in parallel. Results are in input order; a failing
/// line never affects the others.
pub fn count_batch(
    lines: &[InputLine],
    config: &EngineConfig,
) -> Vec<Result<Counted, MoleculeError>> {
    debug!(molecules = lines.len(), "counting batch");
    lines
        .par_iter()
        .map(|input| match count_smiles(&input.smiles, config) {
            Ok(counts) => Ok(Counted {
                line: input.line,
                smiles: input.smiles.clone(),
                counts,
            }),
            Err(source) => Err(MoleculeError {
                line: input.line,
                smiles: input.smiles.clone(),
                source,
            }),
        })
        .collect()
}
