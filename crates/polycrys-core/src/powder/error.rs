use thiserror::Error;

#[derive(Debug, Error)]
pub enum PowderError {
    #[error("Unsupported ZCW variant {variant}; use 1, 0.5, or 0.25")]
    UnsupportedVariant { variant: f64 },

    #[error("No REPULSION set with {count} orientations in the loaded tables")]
    OrientationCountNotFound { count: usize },

    #[error("REPULSION tables are required for this scheme but none were loaded")]
    RepulsionTablesNotLoaded,

    #[error("Inconsistent REPULSION tables: {0}")]
    TableInconsistency(String),
}
