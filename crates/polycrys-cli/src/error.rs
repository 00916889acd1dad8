use polycrys::core::io::nuclide_table::NuclideTableError;
use polycrys::core::io::repulsion::RepulsionTableError;
use polycrys::core::io::xyz::XyzError;
use polycrys::interactions::InteractionError;
use polycrys::powder::PowderError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Powder(#[from] PowderError),

    #[error(transparent)]
    Interaction(#[from] InteractionError),

    #[error(transparent)]
    NuclideTable(#[from] NuclideTableError),

    #[error(transparent)]
    RepulsionTable(#[from] RepulsionTableError),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: XyzError,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to configure thread pool: {0}")]
    ThreadPool(String),

    #[error("Invalid argument: {0}")]
    Argument(String),
}
