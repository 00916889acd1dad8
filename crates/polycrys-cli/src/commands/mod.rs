pub mod couple;
pub mod dipole;
pub mod powder;

use crate::error::Result;
use polycrys::core::io::nuclide_table::NuclideTable;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Opens a CSV writer on `output`, or on stdout when no path is given.
pub(crate) fn csv_writer(output: Option<&Path>) -> io::Result<csv::Writer<Box<dyn Write>>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    Ok(csv::Writer::from_writer(sink))
}

/// Loads the nuclide table named on the command line, falling back to the
/// built-in frequency table.
pub(crate) fn load_nuclide_table(path: Option<&Path>) -> Result<NuclideTable> {
    match path {
        Some(path) => {
            info!("Loading nuclide table from {:?}", path);
            Ok(NuclideTable::from_csv_path(path)?)
        }
        None => Ok(NuclideTable::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use polycrys::core::io::nuclide_table::NuclideTableError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn csv_writer_targets_a_file_when_a_path_is_given() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut writer = csv_writer(Some(&path)).unwrap();
        writer.write_record(["a", "b"]).unwrap();
        writer.flush().unwrap();
        drop(writer);

        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\n");
    }

    #[test]
    fn load_nuclide_table_defaults_to_the_builtin_set() {
        let table = load_nuclide_table(None).unwrap();
        assert!(table.get("1H").is_some());
        assert!(table.len() >= 20);
    }

    #[test]
    fn load_nuclide_table_reads_a_replacement_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.csv");
        fs::write(&path, "Name,Spin,GyrHz\n2H,1.0,6.536\n").unwrap();

        let table = load_nuclide_table(Some(&path)).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("2H").unwrap().gamma_mhz_per_t, 6.536);
    }

    #[test]
    fn load_nuclide_table_propagates_read_failures() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let result = load_nuclide_table(Some(&path));
        assert!(matches!(
            result,
            Err(CliError::NuclideTable(NuclideTableError::Io { .. }))
        ));
    }
}
