use crate::core::models::nuclide::{BUILTIN_NUCLIDES, Nuclide};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Deserialize)]
struct NuclideRecord {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Spin")]
    spin: f64,
    #[serde(rename = "GyrHz")]
    gamma_mhz_per_t: f64,
}

#[derive(Debug, Error)]
pub enum NuclideTableError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

/// A lookup table of nuclear isotope constants keyed by label.
///
/// The table is loaded once per session, either the bundled frequency
/// table via [`NuclideTable::builtin`] or a user-supplied CSV file with
/// `Name,Spin,GyrHz` columns via [`NuclideTable::from_csv_path`], and is
/// only queried afterwards.
#[derive(Debug, Clone, Default)]
pub struct NuclideTable {
    entries: HashMap<String, Nuclide>,
}

impl NuclideTable {
    /// Returns the bundled nuclide frequency table.
    pub fn builtin() -> Self {
        let entries = BUILTIN_NUCLIDES
            .entries()
            .map(|(label, nuclide)| ((*label).to_string(), *nuclide))
            .collect();
        Self { entries }
    }

    /// Loads a table from a CSV file with `Name`, `Spin` and `GyrHz`
    /// (gyromagnetic ratio, MHz/T) columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or a record fails to
    /// parse. Duplicate labels keep the last occurrence.
    pub fn from_csv_path(path: &Path) -> Result<Self, NuclideTableError> {
        let file = File::open(path).map_err(|e| NuclideTableError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let mut reader = csv::Reader::from_reader(file);

        let mut entries = HashMap::new();
        for result in reader.deserialize::<NuclideRecord>() {
            let record = result.map_err(|e| NuclideTableError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
            entries.insert(
                record.name,
                Nuclide::new(record.spin, record.gamma_mhz_per_t),
            );
        }

        Ok(Self { entries })
    }

    /// Looks up a nuclide by its exact label (e.g. "13C").
    pub fn get(&self, label: &str) -> Option<&Nuclide> {
        self.entries.get(label)
    }

    /// Returns the number of nuclides in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no nuclides.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
