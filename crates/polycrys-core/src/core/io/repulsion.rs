use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepulsionTableError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Parse error in '{path}' on line {line}: invalid numeric value '{value}'")]
    Parse {
        path: String,
        line: usize,
        value: String,
    },
    #[error("Inconsistent tables: {0}")]
    Inconsistency(String),
}

/// The precomputed REPULSION orientation tables.
///
/// Three parallel files describe the published sets: a list of available
/// orientation counts, and two matrices of alpha and beta angles with one
/// column per count. Shorter sets are padded with zeros at the bottom of
/// their column; the padding is dropped by the generator, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct RepulsionTables {
    counts: Vec<f64>,
    alpha: Vec<Vec<f64>>,
    beta: Vec<Vec<f64>>,
}

impl RepulsionTables {
    /// Loads the three whitespace-delimited table files.
    pub fn load(
        counts_path: &Path,
        alpha_path: &Path,
        beta_path: &Path,
    ) -> Result<Self, RepulsionTableError> {
        let counts = read_values(counts_path)?;
        let alpha = read_matrix(alpha_path)?;
        let beta = read_matrix(beta_path)?;
        Self::from_parts(counts, alpha, beta)
    }

    /// Assembles tables from already-parsed parts, validating that both
    /// angle matrices carry exactly one column per orientation count.
    pub fn from_parts(
        counts: Vec<f64>,
        alpha: Vec<Vec<f64>>,
        beta: Vec<Vec<f64>>,
    ) -> Result<Self, RepulsionTableError> {
        for (name, matrix) in [("alpha", &alpha), ("beta", &beta)] {
            for (row_idx, row) in matrix.iter().enumerate() {
                if row.len() != counts.len() {
                    return Err(RepulsionTableError::Inconsistency(format!(
                        "{} matrix row {} has {} columns, expected one per orientation count ({})",
                        name,
                        row_idx + 1,
                        row.len(),
                        counts.len()
                    )));
                }
            }
        }
        Ok(Self {
            counts,
            alpha,
            beta,
        })
    }

    /// Returns the orientation counts the tables provide, in file order.
    pub fn counts(&self) -> &[f64] {
        &self.counts
    }

    /// Returns the raw (alpha, beta) columns for the set whose orientation
    /// count equals `count` exactly, zero padding included. `None` if the
    /// tables hold no such set.
    pub fn column(&self, count: usize) -> Option<(Vec<f64>, Vec<f64>)> {
        let idx = self.counts.iter().position(|&c| c == count as f64)?;
        let alpha = self.alpha.iter().map(|row| row[idx]).collect();
        let beta = self.beta.iter().map(|row| row[idx]).collect();
        Some((alpha, beta))
    }
}

fn read_values(path: &Path) -> Result<Vec<f64>, RepulsionTableError> {
    let content = fs::read_to_string(path).map_err(|e| RepulsionTableError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;

    let mut values = Vec::new();
    for (line_idx, line) in content.lines().enumerate() {
        for token in line.split_whitespace() {
            let value = token.parse().map_err(|_| RepulsionTableError::Parse {
                path: path.to_string_lossy().to_string(),
                line: line_idx + 1,
                value: token.to_string(),
            })?;
            values.push(value);
        }
    }
    Ok(values)
}

fn read_matrix(path: &Path) -> Result<Vec<Vec<f64>>, RepulsionTableError> {
    let content = fs::read_to_string(path).map_err(|e| RepulsionTableError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;

    let mut rows = Vec::new();
    for (line_idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for token in line.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| RepulsionTableError::Parse {
                path: path.to_string_lossy().to_string(),
                line: line_idx + 1,
                value: token.to_string(),
            })?;
            row.push(value);
        }
        rows.push(row);
    }
    Ok(rows)
}
