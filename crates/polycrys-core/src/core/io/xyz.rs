use crate::core::models::atom::{AtomSite, MolecularGeometry};
use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: XyzParseErrorKind },
}

#[derive(Debug, Error)]
pub enum XyzParseErrorKind {
    #[error("Expected 4 whitespace-separated fields (label x y z), found {found}")]
    WrongFieldCount { found: usize },
    #[error("Invalid coordinate value '{value}'")]
    InvalidCoordinate { value: String },
}

/// Reads an XYZ coordinate table into a [`MolecularGeometry`].
///
/// The first two lines are the customary header (atom count and a
/// free-text comment) and are skipped without inspection; whether the
/// declared count matches the data is checked later against the nuclide
/// assignment, not here. Every remaining non-blank line must hold a label
/// followed by three Cartesian coordinates in Angstroms.
pub fn read_geometry(reader: &mut impl BufRead) -> Result<MolecularGeometry, XyzError> {
    let mut sites = Vec::new();

    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line_num = line_num + 1;

        if line_num <= 2 {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(XyzError::Parse {
                line: line_num,
                kind: XyzParseErrorKind::WrongFieldCount {
                    found: fields.len(),
                },
            });
        }

        let mut coords = [0.0f64; 3];
        for (slot, field) in coords.iter_mut().zip(&fields[1..4]) {
            *slot = field.parse().map_err(|_| XyzError::Parse {
                line: line_num,
                kind: XyzParseErrorKind::InvalidCoordinate {
                    value: (*field).to_string(),
                },
            })?;
        }

        sites.push(AtomSite::new(
            fields[0],
            Point3::new(coords[0], coords[1], coords[2]),
        ));
    }

    Ok(MolecularGeometry::new(sites))
}

/// Opens `path` and reads it with [`read_geometry`].
pub fn read_geometry_from_path(path: &Path) -> Result<MolecularGeometry, XyzError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_geometry(&mut reader)
}
